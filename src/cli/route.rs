//! CLI route: single route table and run context. Dispatches to domain
//! services and presentation.

use crate::aggregate::CommandOutcome;
use crate::cli::help::command_name;
use crate::cli::parse::{
    Cli, Commands, NodeCommands, ResourceCommands, ResourceDefinitionCommands, SnapshotCommands,
    SnapshotResourceCommands, SnapshotVolumeDefinitionCommands, StoragePoolCommands,
    StoragePoolDefinitionCommands, VolumeDefinitionCommands,
};
use crate::cli::presentation::{
    format_property_list_json, format_property_list_text, format_replies_json,
    format_replies_text, format_snapshot_list_json, format_snapshot_list_text, TableStyle,
};
use crate::config::{parse_endpoint_list, ConfigLoader};
use crate::error::ClientError;
use crate::object::ObjectSelector;
use crate::props::commands::PropertyCommandService;
use crate::snapshot::commands::SnapshotCommandService;
use crate::transport::Connection;
use std::time::Instant;
use tracing::{debug, error, info};

/// Finished command output: text for stdout plus the process exit code.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn clean(text: String) -> Self {
        CommandOutput { text, exit_code: 0 }
    }
}

/// Per-invocation output style resolved from config and flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub machine_readable: bool,
    pub color: bool,
    pub utf8: bool,
}

/// Runtime context for CLI execution: controller connection and output
/// options. Built from the parsed CLI using ConfigLoader only.
pub struct RunContext {
    connection: Connection,
    options: OutputOptions,
}

impl RunContext {
    /// Create a run context from the parsed CLI.
    ///
    /// Flag precedence over config: `--controllers` replaces the endpoint
    /// list, `--timeout` the request timeout, and the `--no-*` switches
    /// turn off output styling.
    pub fn new(cli: &Cli) -> Result<Self, ClientError> {
        let mut config = if let Some(ref config_path) = cli.config {
            ConfigLoader::load_from_file(config_path)?
        } else {
            ConfigLoader::load()?
        };

        if let Some(ref raw) = cli.controllers {
            let endpoints = parse_endpoint_list(raw);
            if endpoints.is_empty() {
                return Err(ClientError::Validation(
                    "--controllers requires at least one URL".to_string(),
                ));
            }
            config.controller.endpoints = endpoints;
        }
        if let Some(timeout) = cli.timeout {
            config.controller.request_timeout_secs = timeout;
        }

        let options = OutputOptions {
            machine_readable: cli.machine_readable,
            color: config.output.color && !cli.no_color,
            utf8: config.output.utf8 && !cli.no_utf8,
        };

        let connection = Connection::connect(&config.controller)?;
        Ok(RunContext { connection, options })
    }

    /// Build a context over an existing connection. Used by tests and
    /// alternate transports.
    pub fn with_connection(connection: Connection, options: OutputOptions) -> Self {
        RunContext { connection, options }
    }

    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ClientError> {
        let name = command_name(command);
        let started = Instant::now();
        debug!(command = %name, "dispatching command");
        let result = self.execute_inner(command);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(output) => {
                info!(command = %name, exit_code = output.exit_code, elapsed_ms, "command completed")
            }
            Err(e) => error!(command = %name, error = %e, elapsed_ms, "command failed"),
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<CommandOutput, ClientError> {
        match command {
            Commands::Snapshot { command } => self.handle_snapshot_command(command),
            Commands::Node { command } => self.handle_node_command(command),
            Commands::StoragePool { command } => self.handle_storage_pool_command(command),
            Commands::StoragePoolDefinition { command } => {
                self.handle_storage_pool_definition_command(command)
            }
            Commands::ResourceDefinition { command } => {
                self.handle_resource_definition_command(command)
            }
            Commands::VolumeDefinition { command } => {
                self.handle_volume_definition_command(command)
            }
            Commands::Resource { command } => self.handle_resource_command(command),
        }
    }

    fn handle_snapshot_command(
        &self,
        command: &SnapshotCommands,
    ) -> Result<CommandOutput, ClientError> {
        match command {
            SnapshotCommands::Create {
                run_async,
                resource_definition,
                snapshot,
                nodes,
            } => {
                let outcome = SnapshotCommandService::run_create(
                    &self.connection,
                    nodes,
                    resource_definition,
                    snapshot,
                    *run_async,
                )?;
                self.render_outcome(outcome)
            }
            SnapshotCommands::Delete {
                resource_definition,
                snapshot,
            } => {
                let outcome =
                    SnapshotCommandService::run_delete(&self.connection, resource_definition, snapshot)?;
                self.render_outcome(outcome)
            }
            SnapshotCommands::Rollback {
                resource_definition,
                snapshot,
            } => {
                let outcome = SnapshotCommandService::run_rollback(
                    &self.connection,
                    resource_definition,
                    snapshot,
                )?;
                self.render_outcome(outcome)
            }
            SnapshotCommands::List { pastable } => {
                match SnapshotCommandService::run_list(&self.connection) {
                    Ok(result) => {
                        let text = if self.options.machine_readable {
                            format_snapshot_list_json(&result.snapshots)?
                        } else {
                            format_snapshot_list_text(&result.views, &self.table_style(*pastable))
                        };
                        Ok(CommandOutput::clean(text))
                    }
                    Err(ClientError::Controller(replies)) => {
                        self.render_outcome(CommandOutcome::from_replies(replies)?)
                    }
                    Err(e) => Err(e),
                }
            }
            SnapshotCommands::Resource { command } => match command {
                SnapshotResourceCommands::Restore {
                    from_resource,
                    from_snapshot,
                    to_resource,
                    nodes,
                } => {
                    let outcome = SnapshotCommandService::run_restore_resource(
                        &self.connection,
                        nodes,
                        from_resource,
                        from_snapshot,
                        to_resource,
                    )?;
                    self.render_outcome(outcome)
                }
            },
            SnapshotCommands::VolumeDefinition { command } => match command {
                SnapshotVolumeDefinitionCommands::Restore {
                    from_resource,
                    from_snapshot,
                    to_resource,
                } => {
                    let outcome = SnapshotCommandService::run_restore_volume_definition(
                        &self.connection,
                        from_resource,
                        from_snapshot,
                        to_resource,
                    )?;
                    self.render_outcome(outcome)
                }
            },
        }
    }

    fn handle_node_command(&self, command: &NodeCommands) -> Result<CommandOutput, ClientError> {
        match command {
            NodeCommands::SetProperty {
                node,
                aux,
                key,
                value,
            } => self.set_property(
                ObjectSelector::Node { node: node.clone() },
                *aux,
                key,
                value,
            ),
            NodeCommands::ListProperties { node, pastable } => self.list_properties(
                ObjectSelector::Node { node: node.clone() },
                *pastable,
            ),
        }
    }

    fn handle_storage_pool_command(
        &self,
        command: &StoragePoolCommands,
    ) -> Result<CommandOutput, ClientError> {
        match command {
            StoragePoolCommands::SetProperty {
                node,
                pool,
                aux,
                key,
                value,
            } => self.set_property(
                ObjectSelector::StoragePool {
                    node: node.clone(),
                    pool: pool.clone(),
                },
                *aux,
                key,
                value,
            ),
            StoragePoolCommands::ListProperties {
                node,
                pool,
                pastable,
            } => self.list_properties(
                ObjectSelector::StoragePool {
                    node: node.clone(),
                    pool: pool.clone(),
                },
                *pastable,
            ),
        }
    }

    fn handle_storage_pool_definition_command(
        &self,
        command: &StoragePoolDefinitionCommands,
    ) -> Result<CommandOutput, ClientError> {
        match command {
            StoragePoolDefinitionCommands::SetProperty {
                pool,
                aux,
                key,
                value,
            } => self.set_property(
                ObjectSelector::StoragePoolDefinition { pool: pool.clone() },
                *aux,
                key,
                value,
            ),
            StoragePoolDefinitionCommands::ListProperties { pool, pastable } => self
                .list_properties(
                    ObjectSelector::StoragePoolDefinition { pool: pool.clone() },
                    *pastable,
                ),
        }
    }

    fn handle_resource_definition_command(
        &self,
        command: &ResourceDefinitionCommands,
    ) -> Result<CommandOutput, ClientError> {
        match command {
            ResourceDefinitionCommands::SetProperty {
                resource,
                aux,
                key,
                value,
            } => self.set_property(
                ObjectSelector::ResourceDefinition {
                    resource: resource.clone(),
                },
                *aux,
                key,
                value,
            ),
            ResourceDefinitionCommands::ListProperties { resource, pastable } => self
                .list_properties(
                    ObjectSelector::ResourceDefinition {
                        resource: resource.clone(),
                    },
                    *pastable,
                ),
        }
    }

    fn handle_volume_definition_command(
        &self,
        command: &VolumeDefinitionCommands,
    ) -> Result<CommandOutput, ClientError> {
        match command {
            VolumeDefinitionCommands::SetProperty {
                resource,
                volume_number,
                aux,
                key,
                value,
            } => self.set_property(
                ObjectSelector::VolumeDefinition {
                    resource: resource.clone(),
                    volume_number: *volume_number,
                },
                *aux,
                key,
                value,
            ),
            VolumeDefinitionCommands::ListProperties {
                resource,
                volume_number,
                pastable,
            } => self.list_properties(
                ObjectSelector::VolumeDefinition {
                    resource: resource.clone(),
                    volume_number: *volume_number,
                },
                *pastable,
            ),
        }
    }

    fn handle_resource_command(
        &self,
        command: &ResourceCommands,
    ) -> Result<CommandOutput, ClientError> {
        match command {
            ResourceCommands::SetProperty {
                node,
                resource,
                aux,
                key,
                value,
            } => self.set_property(
                ObjectSelector::Resource {
                    node: node.clone(),
                    resource: resource.clone(),
                },
                *aux,
                key,
                value,
            ),
            ResourceCommands::ListProperties {
                node,
                resource,
                pastable,
            } => self.list_properties(
                ObjectSelector::Resource {
                    node: node.clone(),
                    resource: resource.clone(),
                },
                *pastable,
            ),
        }
    }

    fn set_property(
        &self,
        object: ObjectSelector,
        aux: bool,
        key: &str,
        value: &str,
    ) -> Result<CommandOutput, ClientError> {
        let outcome = PropertyCommandService::run_set(&self.connection, &object, key, value, aux)?;
        self.render_outcome(outcome)
    }

    fn list_properties(
        &self,
        object: ObjectSelector,
        pastable: bool,
    ) -> Result<CommandOutput, ClientError> {
        match PropertyCommandService::run_list(&self.connection, &object) {
            Ok(result) => {
                let text = if self.options.machine_readable {
                    format_property_list_json(&result)?
                } else {
                    format_property_list_text(&result, &self.table_style(pastable))
                };
                Ok(CommandOutput::clean(text))
            }
            Err(ClientError::Controller(replies)) => {
                self.render_outcome(CommandOutcome::from_replies(replies)?)
            }
            Err(e) => Err(e),
        }
    }

    /// Render a mutating command's replies and derive its exit code.
    fn render_outcome(&self, outcome: CommandOutcome) -> Result<CommandOutput, ClientError> {
        let text = if self.options.machine_readable {
            format_replies_json(&outcome.replies)?
        } else {
            format_replies_text(&outcome.replies, self.options.color)
        };
        Ok(CommandOutput {
            text,
            exit_code: outcome.decision.status.process_code(),
        })
    }

    fn table_style(&self, pastable: bool) -> TableStyle {
        TableStyle {
            utf8: self.options.utf8,
            color: self.options.color,
            pastable,
        }
    }
}
