//! Property commands: client-side key validation, namespace qualification,
//! and listings across every object family.

use crate::integration::{reply_with, scripted_context, scripted_machine_context, ScriptedResponse};
use slate::cli::{
    error_exit_code, Commands, NodeCommands, ResourceCommands, ResourceDefinitionCommands,
    StoragePoolCommands, StoragePoolDefinitionCommands, VolumeDefinitionCommands,
};
use slate::error::ClientError;
use slate::reply::CodeMask;
use std::collections::BTreeMap;

fn modify_replies() -> ScriptedResponse {
    ScriptedResponse::Replies(vec![reply_with(
        CodeMask::MODIFY | CodeMask::NODE,
        "Property applied",
    )])
}

fn node_set(aux: bool, key: &str) -> Commands {
    Commands::Node {
        command: NodeCommands::SetProperty {
            node: "node1".to_string(),
            aux,
            key: key.to_string(),
            value: "v1".to_string(),
        },
    }
}

#[test]
fn test_aux_key_is_qualified_before_sending() {
    let (context, controller) = scripted_context(vec![modify_replies()]);

    let output = context.execute(&node_set(true, "owner")).unwrap();

    assert_eq!(output.exit_code, 0);
    assert_eq!(
        controller.calls(),
        vec!["set-property node 'node1' Aux/owner=v1".to_string()]
    );
}

#[test]
fn test_well_known_plain_key_passes_through() {
    let (context, controller) = scripted_context(vec![modify_replies()]);

    context.execute(&node_set(false, "PrefNic")).unwrap();

    assert_eq!(
        controller.calls(),
        vec!["set-property node 'node1' PrefNic=v1".to_string()]
    );
}

#[test]
fn test_unknown_plain_key_rejected_without_controller_call() {
    let (context, controller) = scripted_context(vec![]);

    let err = context.execute(&node_set(false, "frobnicate")).unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(error_exit_code(&err), 2);
    assert!(err.to_string().contains("--aux"), "hint the aux escape hatch");
    assert!(controller.calls().is_empty(), "invalid keys cost no round trip");
}

#[test]
fn test_storage_driver_namespace_is_read_only() {
    let (context, controller) = scripted_context(vec![]);

    let err = context
        .execute(&node_set(false, "StorDriver/LvmVg"))
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert!(controller.calls().is_empty());
}

#[test]
fn test_aux_name_colliding_with_well_known_key_rejected() {
    let (context, controller) = scripted_context(vec![]);

    let err = context.execute(&node_set(true, "StorPoolName")).unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert!(controller.calls().is_empty());
}

#[test]
fn test_aux_name_with_separator_rejected() {
    let (context, controller) = scripted_context(vec![]);

    let err = context.execute(&node_set(true, "team/owner")).unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert!(controller.calls().is_empty());
}

#[test]
fn test_each_object_family_addresses_its_own_path() {
    let cases: Vec<(Commands, &str)> = vec![
        (
            Commands::StoragePool {
                command: StoragePoolCommands::SetProperty {
                    node: "node1".to_string(),
                    pool: "thinpool".to_string(),
                    aux: true,
                    key: "tier".to_string(),
                    value: "fast".to_string(),
                },
            },
            "set-property storage pool 'thinpool' on node 'node1' Aux/tier=fast",
        ),
        (
            Commands::StoragePoolDefinition {
                command: StoragePoolDefinitionCommands::SetProperty {
                    pool: "thinpool".to_string(),
                    aux: true,
                    key: "tier".to_string(),
                    value: "fast".to_string(),
                },
            },
            "set-property storage pool definition 'thinpool' Aux/tier=fast",
        ),
        (
            Commands::ResourceDefinition {
                command: ResourceDefinitionCommands::SetProperty {
                    resource: "data".to_string(),
                    aux: true,
                    key: "tier".to_string(),
                    value: "fast".to_string(),
                },
            },
            "set-property resource definition 'data' Aux/tier=fast",
        ),
        (
            Commands::VolumeDefinition {
                command: VolumeDefinitionCommands::SetProperty {
                    resource: "data".to_string(),
                    volume_number: 0,
                    aux: true,
                    key: "tier".to_string(),
                    value: "fast".to_string(),
                },
            },
            "set-property volume definition 0 of 'data' Aux/tier=fast",
        ),
        (
            Commands::Resource {
                command: ResourceCommands::SetProperty {
                    node: "node1".to_string(),
                    resource: "data".to_string(),
                    aux: true,
                    key: "tier".to_string(),
                    value: "fast".to_string(),
                },
            },
            "set-property resource 'data' on node 'node1' Aux/tier=fast",
        ),
    ];

    for (command, expected_call) in cases {
        let (context, controller) = scripted_context(vec![modify_replies()]);
        context.execute(&command).unwrap();
        assert_eq!(controller.calls(), vec![expected_call.to_string()]);
    }
}

#[test]
fn test_list_properties_renders_sorted_table() {
    let mut properties = BTreeMap::new();
    properties.insert("StorPoolName".to_string(), "thinpool".to_string());
    properties.insert("Aux/owner".to_string(), "team-a".to_string());
    let (context, controller) =
        scripted_context(vec![ScriptedResponse::Properties(properties)]);

    let command = Commands::Node {
        command: NodeCommands::ListProperties {
            node: "node1".to_string(),
            pastable: false,
        },
    };
    let output = context.execute(&command).unwrap();

    assert_eq!(output.exit_code, 0);
    let aux = output.text.find("Aux/owner").unwrap();
    let plain = output.text.find("StorPoolName").unwrap();
    assert!(aux < plain, "listing must be key sorted");
    assert!(output.text.contains("team-a"));
    assert_eq!(
        controller.calls(),
        vec!["list-properties node 'node1'".to_string()]
    );
}

#[test]
fn test_list_properties_machine_json_is_plain_object() {
    let mut properties = BTreeMap::new();
    properties.insert("Aux/owner".to_string(), "team-a".to_string());
    let (context, _controller) =
        scripted_machine_context(vec![ScriptedResponse::Properties(properties)]);

    let command = Commands::Node {
        command: NodeCommands::ListProperties {
            node: "node1".to_string(),
            pastable: false,
        },
    };
    let output = context.execute(&command).unwrap();

    let decoded: BTreeMap<String, String> = serde_json::from_str(&output.text).unwrap();
    assert_eq!(decoded.get("Aux/owner").map(String::as_str), Some("team-a"));
}

#[test]
fn test_set_property_warning_reply_exits_three() {
    let (context, _controller) = scripted_context(vec![ScriptedResponse::Replies(vec![
        reply_with(
            CodeMask::WARNING | CodeMask::MODIFY | CodeMask::NODE,
            "Value accepted but satellite not yet updated",
        ),
    ])]);

    let output = context.execute(&node_set(true, "owner")).unwrap();

    assert_eq!(output.exit_code, 3);
}
