//! CLI surface: subcommand aliases, flag spellings, and argument shapes.

use clap::Parser;
use slate::cli::{
    Cli, Commands, NodeCommands, ResourceCommands, ResourceDefinitionCommands, SnapshotCommands,
    SnapshotResourceCommands, SnapshotVolumeDefinitionCommands, StoragePoolCommands,
    StoragePoolDefinitionCommands, VolumeDefinitionCommands,
};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_snapshot_create_aliases_and_defaults() {
    let cli = parse(&["slate", "s", "c", "data", "snap1"]);
    match cli.command {
        Commands::Snapshot {
            command:
                SnapshotCommands::Create {
                    run_async,
                    resource_definition,
                    snapshot,
                    nodes,
                },
        } => {
            assert!(!run_async);
            assert_eq!(resource_definition, "data");
            assert_eq!(snapshot, "snap1");
            assert!(nodes.is_empty());
        }
        _ => panic!("expected snapshot create"),
    }
}

#[test]
fn test_snapshot_create_with_async_and_nodes() {
    let cli = parse(&[
        "slate", "snapshot", "create", "--async", "data", "snap1", "node1", "node2",
    ]);
    match cli.command {
        Commands::Snapshot {
            command: SnapshotCommands::Create {
                run_async, nodes, ..
            },
        } => {
            assert!(run_async);
            assert_eq!(nodes, vec!["node1".to_string(), "node2".to_string()]);
        }
        _ => panic!("expected snapshot create"),
    }
}

#[test]
fn test_snapshot_rollback_alias() {
    let cli = parse(&["slate", "s", "rb", "data", "snap1"]);
    assert!(matches!(
        cli.command,
        Commands::Snapshot {
            command: SnapshotCommands::Rollback { .. }
        }
    ));
}

#[test]
fn test_snapshot_list_alias_and_pastable() {
    let cli = parse(&["slate", "s", "l", "-p"]);
    match cli.command {
        Commands::Snapshot {
            command: SnapshotCommands::List { pastable },
        } => assert!(pastable),
        _ => panic!("expected snapshot list"),
    }
}

#[test]
fn test_restore_resource_flag_aliases() {
    let cli = parse(&[
        "slate", "s", "r", "rst", "--fr", "data", "--fs", "snap1", "--tr", "copy", "node1",
    ]);
    match cli.command {
        Commands::Snapshot {
            command:
                SnapshotCommands::Resource {
                    command:
                        SnapshotResourceCommands::Restore {
                            from_resource,
                            from_snapshot,
                            to_resource,
                            nodes,
                        },
                },
        } => {
            assert_eq!(from_resource, "data");
            assert_eq!(from_snapshot, "snap1");
            assert_eq!(to_resource, "copy");
            assert_eq!(nodes, vec!["node1".to_string()]);
        }
        _ => panic!("expected snapshot resource restore"),
    }
}

#[test]
fn test_restore_volume_definition_long_flags() {
    let cli = parse(&[
        "slate",
        "snapshot",
        "vd",
        "rst",
        "--from-resource",
        "data",
        "--from-snapshot",
        "snap1",
        "--to-resource",
        "copy",
    ]);
    match cli.command {
        Commands::Snapshot {
            command:
                SnapshotCommands::VolumeDefinition {
                    command: SnapshotVolumeDefinitionCommands::Restore { to_resource, .. },
                },
        } => assert_eq!(to_resource, "copy"),
        _ => panic!("expected snapshot volume-definition restore"),
    }
}

#[test]
fn test_property_family_aliases() {
    let cli = parse(&["slate", "n", "lp", "node1"]);
    assert!(matches!(
        cli.command,
        Commands::Node {
            command: NodeCommands::ListProperties { .. }
        }
    ));

    let cli = parse(&["slate", "sp", "sp", "node1", "thinpool", "--aux", "tier", "fast"]);
    match cli.command {
        Commands::StoragePool {
            command: StoragePoolCommands::SetProperty { aux, key, value, .. },
        } => {
            assert!(aux);
            assert_eq!(key, "tier");
            assert_eq!(value, "fast");
        }
        _ => panic!("expected storage-pool set-property"),
    }

    let cli = parse(&["slate", "spd", "lp", "thinpool"]);
    assert!(matches!(
        cli.command,
        Commands::StoragePoolDefinition {
            command: StoragePoolDefinitionCommands::ListProperties { .. }
        }
    ));

    let cli = parse(&["slate", "rd", "sp", "data", "StorPoolName", "thinpool"]);
    assert!(matches!(
        cli.command,
        Commands::ResourceDefinition {
            command: ResourceDefinitionCommands::SetProperty { .. }
        }
    ));

    let cli = parse(&["slate", "vd", "lp", "data", "0"]);
    match cli.command {
        Commands::VolumeDefinition {
            command: VolumeDefinitionCommands::ListProperties { volume_number, .. },
        } => assert_eq!(volume_number, 0),
        _ => panic!("expected volume-definition list-properties"),
    }

    let cli = parse(&["slate", "r", "lp", "node1", "data"]);
    assert!(matches!(
        cli.command,
        Commands::Resource {
            command: ResourceCommands::ListProperties { .. }
        }
    ));
}

#[test]
fn test_global_flags_before_subcommand() {
    let cli = parse(&[
        "slate",
        "-m",
        "--controllers",
        "http://ctrl1:3370,http://ctrl2:3370",
        "--timeout",
        "60",
        "--no-color",
        "snapshot",
        "list",
    ]);
    assert!(cli.machine_readable);
    assert_eq!(
        cli.controllers.as_deref(),
        Some("http://ctrl1:3370,http://ctrl2:3370")
    );
    assert_eq!(cli.timeout, Some(60));
    assert!(cli.no_color);
}

#[test]
fn test_controller_singular_alias() {
    let cli = parse(&["slate", "--controller", "http://ctrl1:3370", "s", "l"]);
    assert_eq!(cli.controllers.as_deref(), Some("http://ctrl1:3370"));
}

#[test]
fn test_volume_number_must_be_numeric() {
    assert!(Cli::try_parse_from(["slate", "vd", "lp", "data", "zero"]).is_err());
}

#[test]
fn test_missing_subcommand_is_a_usage_error() {
    assert!(Cli::try_parse_from(["slate"]).is_err());
    assert!(Cli::try_parse_from(["slate", "snapshot"]).is_err());
}
