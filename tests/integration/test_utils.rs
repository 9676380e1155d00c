//! Shared test utilities for integration tests
//!
//! Provides centralized setup/teardown for environment variables and a
//! scripted controller client so command tests run without a live server.

use async_trait::async_trait;
use slate::cli::{OutputOptions, RunContext};
use slate::error::ClientError;
use slate::object::ObjectSelector;
use slate::reply::{CodeMask, Reply, ReplySet, ReturnCode, OBJ_REF_NODE};
use slate::snapshot::{SnapshotDfn, SnapshotFlags, SnapshotVolumeDefinition};
use slate::transport::{Connection, ControllerClient};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
/// This prevents race conditions when tests run in parallel
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
    xdg_data_home: Option<String>,
    controllers: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
            xdg_data_home: std::env::var("XDG_DATA_HOME").ok(),
            controllers: std::env::var("SLATE_CONTROLLERS").ok(),
        }
    }

    fn restore(self) {
        restore_var("HOME", self.home);
        restore_var("XDG_CONFIG_HOME", self.xdg_config_home);
        restore_var("XDG_DATA_HOME", self.xdg_data_home);
        restore_var("SLATE_CONTROLLERS", self.controllers);
    }
}

fn restore_var(name: &str, value: Option<String>) {
    if let Some(orig) = value {
        std::env::set_var(name, orig);
    } else {
        std::env::remove_var(name);
    }
}

/// Set up isolated XDG directories for a test with automatic cleanup
///
/// This function:
/// - Creates isolated XDG_CONFIG_HOME and XDG_DATA_HOME directories in the temp dir
/// - Sets HOME to ensure fallback paths work correctly
/// - Clears SLATE_CONTROLLERS so ambient endpoints do not leak into the test
/// - Automatically restores original environment variables after the test
/// - Uses a global mutex to prevent race conditions in parallel test execution
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_config_home = test_dir.path().to_path_buf();
    let test_data_home = test_dir.path().join("data");
    let test_home = test_dir.path().join("home");

    std::fs::create_dir_all(&test_data_home).unwrap();
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_config_home.to_str().unwrap());
    std::env::set_var("XDG_DATA_HOME", test_data_home.to_str().unwrap());
    std::env::remove_var("SLATE_CONTROLLERS");

    let result = f();

    env_state.restore();

    result
}

/// Run a test with SLATE_CONTROLLERS set to the given endpoint list,
/// restoring the original environment afterwards.
pub fn with_controller_env<F, R>(endpoints: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    std::env::set_var("SLATE_CONTROLLERS", endpoints);

    let result = f();

    env_state.restore();

    result
}

/// One canned answer for the next controller call.
#[derive(Debug)]
pub enum ScriptedResponse {
    Replies(ReplySet),
    Snapshots(Vec<SnapshotDfn>),
    Properties(BTreeMap<String, String>),
    Fail(ClientError),
}

/// Controller client that answers from a fixed script and records every
/// call it receives, in order.
pub struct ScriptedController {
    responses: Mutex<VecDeque<ScriptedResponse>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedController {
    pub fn new(responses: Vec<ScriptedResponse>) -> Arc<Self> {
        Arc::new(ScriptedController {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_response(&self, call: &str) -> ScriptedResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("scripted controller has no response left for '{}'", call))
    }

    fn next_replies(&self, call: &str) -> Result<ReplySet, ClientError> {
        match self.next_response(call) {
            ScriptedResponse::Replies(replies) => Ok(replies),
            ScriptedResponse::Fail(e) => Err(e),
            other => panic!("scripted response {:?} does not fit call '{}'", other, call),
        }
    }
}

#[async_trait]
impl ControllerClient for ScriptedController {
    async fn snapshot_create(
        &self,
        nodes: &[String],
        resource: &str,
        snapshot: &str,
        run_async: bool,
    ) -> Result<ReplySet, ClientError> {
        let call = format!(
            "create {} {} nodes=[{}] async={}",
            resource,
            snapshot,
            nodes.join(","),
            run_async
        );
        self.record(call.clone());
        self.next_replies(&call)
    }

    async fn snapshot_delete(
        &self,
        resource: &str,
        snapshot: &str,
    ) -> Result<ReplySet, ClientError> {
        let call = format!("delete {} {}", resource, snapshot);
        self.record(call.clone());
        self.next_replies(&call)
    }

    async fn snapshot_rollback(
        &self,
        resource: &str,
        snapshot: &str,
    ) -> Result<ReplySet, ClientError> {
        let call = format!("rollback {} {}", resource, snapshot);
        self.record(call.clone());
        self.next_replies(&call)
    }

    async fn snapshot_restore_resource(
        &self,
        nodes: &[String],
        from_resource: &str,
        from_snapshot: &str,
        to_resource: &str,
    ) -> Result<ReplySet, ClientError> {
        let call = format!(
            "restore-resource {}@{} to {} nodes=[{}]",
            from_resource,
            from_snapshot,
            to_resource,
            nodes.join(",")
        );
        self.record(call.clone());
        self.next_replies(&call)
    }

    async fn snapshot_restore_volume_definition(
        &self,
        from_resource: &str,
        from_snapshot: &str,
        to_resource: &str,
    ) -> Result<ReplySet, ClientError> {
        let call = format!(
            "restore-volume-definition {}@{} to {}",
            from_resource, from_snapshot, to_resource
        );
        self.record(call.clone());
        self.next_replies(&call)
    }

    async fn snapshot_dfn_list(&self) -> Result<Vec<SnapshotDfn>, ClientError> {
        let call = "list-snapshots".to_string();
        self.record(call.clone());
        match self.next_response(&call) {
            ScriptedResponse::Snapshots(snapshots) => Ok(snapshots),
            ScriptedResponse::Fail(e) => Err(e),
            other => panic!("scripted response {:?} does not fit call '{}'", other, call),
        }
    }

    async fn set_property(
        &self,
        object: &ObjectSelector,
        key: &str,
        value: &str,
    ) -> Result<ReplySet, ClientError> {
        let call = format!("set-property {} {}={}", object, key, value);
        self.record(call.clone());
        self.next_replies(&call)
    }

    async fn list_properties(
        &self,
        object: &ObjectSelector,
    ) -> Result<BTreeMap<String, String>, ClientError> {
        let call = format!("list-properties {}", object);
        self.record(call.clone());
        match self.next_response(&call) {
            ScriptedResponse::Properties(properties) => Ok(properties),
            ScriptedResponse::Fail(e) => Err(e),
            other => panic!("scripted response {:?} does not fit call '{}'", other, call),
        }
    }
}

/// Connection backed by a scripted controller.
pub fn scripted_connection(
    responses: Vec<ScriptedResponse>,
) -> (Connection, Arc<ScriptedController>) {
    let controller = ScriptedController::new(responses);
    let connection = Connection::with_client(controller.clone()).unwrap();
    (connection, controller)
}

/// Output options with styling off so text assertions are stable.
pub fn plain_options() -> OutputOptions {
    OutputOptions {
        machine_readable: false,
        color: false,
        utf8: true,
    }
}

/// Run context in plain text mode over a scripted controller.
pub fn scripted_context(
    responses: Vec<ScriptedResponse>,
) -> (RunContext, Arc<ScriptedController>) {
    let (connection, controller) = scripted_connection(responses);
    (
        RunContext::with_connection(connection, plain_options()),
        controller,
    )
}

/// Run context in machine-readable mode over a scripted controller.
pub fn scripted_machine_context(
    responses: Vec<ScriptedResponse>,
) -> (RunContext, Arc<ScriptedController>) {
    let (connection, controller) = scripted_connection(responses);
    let options = OutputOptions {
        machine_readable: true,
        color: false,
        utf8: true,
    };
    (RunContext::with_connection(connection, options), controller)
}

/// Build a reply whose code carries the given mask bits.
pub fn reply_with(mask: CodeMask, message: &str) -> Reply {
    Reply::new(ReturnCode::from(mask), message)
}

/// Like [`reply_with`] but tagged with the node the reply concerns.
pub fn node_reply(mask: CodeMask, message: &str, node: &str) -> Reply {
    reply_with(mask, message).with_object_ref(OBJ_REF_NODE, node)
}

/// Snapshot definition fixture with one volume per entry in `volumes`,
/// sized in bytes.
pub fn snapshot_fixture(
    resource: &str,
    snapshot: &str,
    nodes: &[&str],
    volumes: &[u64],
    flags: SnapshotFlags,
) -> SnapshotDfn {
    SnapshotDfn {
        resource_name: resource.to_string(),
        snapshot_name: snapshot.to_string(),
        nodes: nodes.iter().map(|n| n.to_string()).collect(),
        volume_definitions: volumes
            .iter()
            .enumerate()
            .map(|(i, size)| SnapshotVolumeDefinition {
                volume_number: i as u32,
                size_bytes: *size,
            })
            .collect(),
        flags,
    }
}
