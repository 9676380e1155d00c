//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::{
    Commands, NodeCommands, ResourceCommands, ResourceDefinitionCommands, SnapshotCommands,
    SnapshotResourceCommands, SnapshotVolumeDefinitionCommands, StoragePoolCommands,
    StoragePoolDefinitionCommands, VolumeDefinitionCommands,
};

/// Command name string for log fields (e.g. "snapshot.create",
/// "node.set_property").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Snapshot { command } => format!("snapshot.{}", snapshot_command_name(command)),
        Commands::Node { command } => format!("node.{}", node_command_name(command)),
        Commands::StoragePool { command } => {
            format!("storage_pool.{}", storage_pool_command_name(command))
        }
        Commands::StoragePoolDefinition { command } => format!(
            "storage_pool_definition.{}",
            storage_pool_definition_command_name(command)
        ),
        Commands::ResourceDefinition { command } => format!(
            "resource_definition.{}",
            resource_definition_command_name(command)
        ),
        Commands::VolumeDefinition { command } => format!(
            "volume_definition.{}",
            volume_definition_command_name(command)
        ),
        Commands::Resource { command } => {
            format!("resource.{}", resource_command_name(command))
        }
    }
}

pub fn snapshot_command_name(command: &SnapshotCommands) -> String {
    match command {
        SnapshotCommands::Create { .. } => "create".to_string(),
        SnapshotCommands::Delete { .. } => "delete".to_string(),
        SnapshotCommands::Rollback { .. } => "rollback".to_string(),
        SnapshotCommands::List { .. } => "list".to_string(),
        SnapshotCommands::Resource { command } => match command {
            SnapshotResourceCommands::Restore { .. } => "resource.restore".to_string(),
        },
        SnapshotCommands::VolumeDefinition { command } => match command {
            SnapshotVolumeDefinitionCommands::Restore { .. } => {
                "volume_definition.restore".to_string()
            }
        },
    }
}

pub fn node_command_name(command: &NodeCommands) -> &'static str {
    match command {
        NodeCommands::SetProperty { .. } => "set_property",
        NodeCommands::ListProperties { .. } => "list_properties",
    }
}

pub fn storage_pool_command_name(command: &StoragePoolCommands) -> &'static str {
    match command {
        StoragePoolCommands::SetProperty { .. } => "set_property",
        StoragePoolCommands::ListProperties { .. } => "list_properties",
    }
}

pub fn storage_pool_definition_command_name(
    command: &StoragePoolDefinitionCommands,
) -> &'static str {
    match command {
        StoragePoolDefinitionCommands::SetProperty { .. } => "set_property",
        StoragePoolDefinitionCommands::ListProperties { .. } => "list_properties",
    }
}

pub fn resource_definition_command_name(command: &ResourceDefinitionCommands) -> &'static str {
    match command {
        ResourceDefinitionCommands::SetProperty { .. } => "set_property",
        ResourceDefinitionCommands::ListProperties { .. } => "list_properties",
    }
}

pub fn volume_definition_command_name(command: &VolumeDefinitionCommands) -> &'static str {
    match command {
        VolumeDefinitionCommands::SetProperty { .. } => "set_property",
        VolumeDefinitionCommands::ListProperties { .. } => "list_properties",
    }
}

pub fn resource_command_name(command: &ResourceCommands) -> &'static str {
    match command {
        ResourceCommands::SetProperty { .. } => "set_property",
        ResourceCommands::ListProperties { .. } => "list_properties",
    }
}
