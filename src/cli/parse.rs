//! CLI parse: clap types for Slate. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Slate CLI - client for the Slate storage controller
#[derive(Parser)]
#[command(name = "slate")]
#[command(about = "Command-line client for the Slate storage controller")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Controller endpoints, comma-separated, tried in order
    #[arg(long, visible_alias = "controller", value_name = "URL[,URL...]")]
    pub controllers: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print results as machine-readable JSON
    #[arg(short = 'm', long)]
    pub machine_readable: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Draw tables with ASCII borders instead of UTF-8
    #[arg(long)]
    pub no_utf8: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Disable logging for this invocation
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose logging (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Snapshot commands
    #[command(visible_alias = "s")]
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommands,
    },
    /// Node property commands
    #[command(visible_alias = "n")]
    Node {
        #[command(subcommand)]
        command: NodeCommands,
    },
    /// Storage pool property commands
    #[command(visible_alias = "sp")]
    StoragePool {
        #[command(subcommand)]
        command: StoragePoolCommands,
    },
    /// Storage pool definition property commands
    #[command(visible_alias = "spd")]
    StoragePoolDefinition {
        #[command(subcommand)]
        command: StoragePoolDefinitionCommands,
    },
    /// Resource definition property commands
    #[command(visible_alias = "rd")]
    ResourceDefinition {
        #[command(subcommand)]
        command: ResourceDefinitionCommands,
    },
    /// Volume definition property commands
    #[command(visible_alias = "vd")]
    VolumeDefinition {
        #[command(subcommand)]
        command: VolumeDefinitionCommands,
    },
    /// Resource property commands
    #[command(visible_alias = "r")]
    Resource {
        #[command(subcommand)]
        command: ResourceCommands,
    },
}

#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Take a snapshot of a deployed resource
    #[command(visible_alias = "c")]
    Create {
        /// Return once the snapshot is registered instead of waiting for
        /// deployment on the satellites
        #[arg(long = "async")]
        run_async: bool,
        /// Resource definition to snapshot
        resource_definition: String,
        /// Snapshot name
        snapshot: String,
        /// Nodes to take the snapshot on (default: all nodes hosting the resource)
        nodes: Vec<String>,
    },
    /// Delete a snapshot
    #[command(visible_alias = "d")]
    Delete {
        /// Resource definition the snapshot belongs to
        resource_definition: String,
        /// Snapshot name
        snapshot: String,
    },
    /// Roll a resource back to the state captured by a snapshot
    #[command(visible_alias = "rb")]
    Rollback {
        /// Resource definition to roll back
        resource_definition: String,
        /// Snapshot to roll back to
        snapshot: String,
    },
    /// List snapshots
    #[command(visible_alias = "l")]
    List {
        /// Plain borders for easy copy-paste
        #[arg(short, long)]
        pastable: bool,
    },
    /// Resource-level snapshot commands
    #[command(visible_alias = "r")]
    Resource {
        #[command(subcommand)]
        command: SnapshotResourceCommands,
    },
    /// Volume-definition-level snapshot commands
    #[command(visible_alias = "vd")]
    VolumeDefinition {
        #[command(subcommand)]
        command: SnapshotVolumeDefinitionCommands,
    },
}

#[derive(Subcommand)]
pub enum SnapshotResourceCommands {
    /// Create a new resource from snapshot data
    #[command(visible_alias = "rst")]
    Restore {
        /// Resource definition the snapshot belongs to
        #[arg(long, visible_alias = "fr")]
        from_resource: String,
        /// Snapshot to restore from
        #[arg(long, visible_alias = "fs")]
        from_snapshot: String,
        /// Resource definition to restore into
        #[arg(long, visible_alias = "tr")]
        to_resource: String,
        /// Nodes to restore on (default: all nodes holding the snapshot)
        nodes: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum SnapshotVolumeDefinitionCommands {
    /// Copy volume definitions from a snapshot into a resource definition
    #[command(visible_alias = "rst")]
    Restore {
        /// Resource definition the snapshot belongs to
        #[arg(long, visible_alias = "fr")]
        from_resource: String,
        /// Snapshot to copy volume definitions from
        #[arg(long, visible_alias = "fs")]
        from_snapshot: String,
        /// Resource definition to copy volume definitions into
        #[arg(long, visible_alias = "tr")]
        to_resource: String,
    },
}

#[derive(Subcommand)]
pub enum NodeCommands {
    /// Set a property on a node
    #[command(visible_alias = "sp")]
    SetProperty {
        /// Node name
        node: String,
        /// Store the key in the auxiliary namespace
        #[arg(long)]
        aux: bool,
        /// Property key
        key: String,
        /// Property value
        value: String,
    },
    /// List properties of a node
    #[command(visible_alias = "lp")]
    ListProperties {
        /// Node name
        node: String,
        /// Plain borders for easy copy-paste
        #[arg(short, long)]
        pastable: bool,
    },
}

#[derive(Subcommand)]
pub enum StoragePoolCommands {
    /// Set a property on a storage pool
    #[command(visible_alias = "sp")]
    SetProperty {
        /// Node the storage pool lives on
        node: String,
        /// Storage pool name
        pool: String,
        /// Store the key in the auxiliary namespace
        #[arg(long)]
        aux: bool,
        /// Property key
        key: String,
        /// Property value
        value: String,
    },
    /// List properties of a storage pool
    #[command(visible_alias = "lp")]
    ListProperties {
        /// Node the storage pool lives on
        node: String,
        /// Storage pool name
        pool: String,
        /// Plain borders for easy copy-paste
        #[arg(short, long)]
        pastable: bool,
    },
}

#[derive(Subcommand)]
pub enum StoragePoolDefinitionCommands {
    /// Set a property on a storage pool definition
    #[command(visible_alias = "sp")]
    SetProperty {
        /// Storage pool definition name
        pool: String,
        /// Store the key in the auxiliary namespace
        #[arg(long)]
        aux: bool,
        /// Property key
        key: String,
        /// Property value
        value: String,
    },
    /// List properties of a storage pool definition
    #[command(visible_alias = "lp")]
    ListProperties {
        /// Storage pool definition name
        pool: String,
        /// Plain borders for easy copy-paste
        #[arg(short, long)]
        pastable: bool,
    },
}

#[derive(Subcommand)]
pub enum ResourceDefinitionCommands {
    /// Set a property on a resource definition
    #[command(visible_alias = "sp")]
    SetProperty {
        /// Resource definition name
        resource: String,
        /// Store the key in the auxiliary namespace
        #[arg(long)]
        aux: bool,
        /// Property key
        key: String,
        /// Property value
        value: String,
    },
    /// List properties of a resource definition
    #[command(visible_alias = "lp")]
    ListProperties {
        /// Resource definition name
        resource: String,
        /// Plain borders for easy copy-paste
        #[arg(short, long)]
        pastable: bool,
    },
}

#[derive(Subcommand)]
pub enum VolumeDefinitionCommands {
    /// Set a property on a volume definition
    #[command(visible_alias = "sp")]
    SetProperty {
        /// Resource definition the volume definition belongs to
        resource: String,
        /// Volume number
        volume_number: u32,
        /// Store the key in the auxiliary namespace
        #[arg(long)]
        aux: bool,
        /// Property key
        key: String,
        /// Property value
        value: String,
    },
    /// List properties of a volume definition
    #[command(visible_alias = "lp")]
    ListProperties {
        /// Resource definition the volume definition belongs to
        resource: String,
        /// Volume number
        volume_number: u32,
        /// Plain borders for easy copy-paste
        #[arg(short, long)]
        pastable: bool,
    },
}

#[derive(Subcommand)]
pub enum ResourceCommands {
    /// Set a property on a deployed resource
    #[command(visible_alias = "sp")]
    SetProperty {
        /// Node the resource is deployed on
        node: String,
        /// Resource name
        resource: String,
        /// Store the key in the auxiliary namespace
        #[arg(long)]
        aux: bool,
        /// Property key
        key: String,
        /// Property value
        value: String,
    },
    /// List properties of a deployed resource
    #[command(visible_alias = "lp")]
    ListProperties {
        /// Node the resource is deployed on
        node: String,
        /// Resource name
        resource: String,
        /// Plain borders for easy copy-paste
        #[arg(short, long)]
        pastable: bool,
    },
}
