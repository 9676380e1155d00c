//! Controller transport: the client trait and the blocking connection facade.
//!
//! Commands are synchronous from the caller's point of view; the facade owns
//! a tokio runtime and bridges onto the async [`ControllerClient`]. The HTTP
//! implementation lives in [`http`]; tests substitute scripted clients
//! through [`Connection::with_client`].

pub mod http;

pub use http::HttpControllerClient;

use crate::config::ControllerConfig;
use crate::error::ClientError;
use crate::object::ObjectSelector;
use crate::reply::ReplySet;
use crate::snapshot::SnapshotDfn;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

/// One controller conversation per method. Mutating calls return the reply
/// set exactly as received; payload calls return typed data.
#[async_trait]
pub trait ControllerClient: Send + Sync {
    /// Create a snapshot of a deployed resource. An empty node list asks the
    /// controller to snapshot every node hosting the resource.
    async fn snapshot_create(
        &self,
        nodes: &[String],
        resource: &str,
        snapshot: &str,
        run_async: bool,
    ) -> Result<ReplySet, ClientError>;

    async fn snapshot_delete(&self, resource: &str, snapshot: &str)
        -> Result<ReplySet, ClientError>;

    async fn snapshot_rollback(
        &self,
        resource: &str,
        snapshot: &str,
    ) -> Result<ReplySet, ClientError>;

    /// Create a new resource from snapshot data.
    async fn snapshot_restore_resource(
        &self,
        nodes: &[String],
        from_resource: &str,
        from_snapshot: &str,
        to_resource: &str,
    ) -> Result<ReplySet, ClientError>;

    /// Copy volume-definition layout from a snapshot into a new resource
    /// definition.
    async fn snapshot_restore_volume_definition(
        &self,
        from_resource: &str,
        from_snapshot: &str,
        to_resource: &str,
    ) -> Result<ReplySet, ClientError>;

    async fn snapshot_dfn_list(&self) -> Result<Vec<SnapshotDfn>, ClientError>;

    async fn set_property(
        &self,
        object: &ObjectSelector,
        key: &str,
        value: &str,
    ) -> Result<ReplySet, ClientError>;

    async fn list_properties(
        &self,
        object: &ObjectSelector,
    ) -> Result<BTreeMap<String, String>, ClientError>;
}

/// Blocking facade over a [`ControllerClient`].
pub struct Connection {
    client: Arc<dyn ControllerClient>,
    runtime: tokio::runtime::Runtime,
}

impl Connection {
    /// Connect to the configured controller over HTTP.
    ///
    /// No request is sent yet; endpoints are tried lazily per call.
    pub fn connect(config: &ControllerConfig) -> Result<Self, ClientError> {
        let client = HttpControllerClient::new(config)?;
        Self::with_client(Arc::new(client))
    }

    /// Wrap an arbitrary client implementation.
    pub fn with_client(client: Arc<dyn ControllerClient>) -> Result<Self, ClientError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(ClientError::Internal(
                "cannot open a blocking controller connection from within an async runtime"
                    .to_string(),
            ));
        }
        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            ClientError::Internal(format!("failed to create async runtime: {}", e))
        })?;
        Ok(Connection { client, runtime })
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn snapshot_create(
        &self,
        nodes: &[String],
        resource: &str,
        snapshot: &str,
        run_async: bool,
    ) -> Result<ReplySet, ClientError> {
        self.block_on(self.client.snapshot_create(nodes, resource, snapshot, run_async))
    }

    pub fn snapshot_delete(&self, resource: &str, snapshot: &str) -> Result<ReplySet, ClientError> {
        self.block_on(self.client.snapshot_delete(resource, snapshot))
    }

    pub fn snapshot_rollback(
        &self,
        resource: &str,
        snapshot: &str,
    ) -> Result<ReplySet, ClientError> {
        self.block_on(self.client.snapshot_rollback(resource, snapshot))
    }

    pub fn snapshot_restore_resource(
        &self,
        nodes: &[String],
        from_resource: &str,
        from_snapshot: &str,
        to_resource: &str,
    ) -> Result<ReplySet, ClientError> {
        self.block_on(self.client.snapshot_restore_resource(
            nodes,
            from_resource,
            from_snapshot,
            to_resource,
        ))
    }

    pub fn snapshot_restore_volume_definition(
        &self,
        from_resource: &str,
        from_snapshot: &str,
        to_resource: &str,
    ) -> Result<ReplySet, ClientError> {
        self.block_on(self.client.snapshot_restore_volume_definition(
            from_resource,
            from_snapshot,
            to_resource,
        ))
    }

    pub fn snapshot_dfn_list(&self) -> Result<Vec<SnapshotDfn>, ClientError> {
        self.block_on(self.client.snapshot_dfn_list())
    }

    pub fn set_property(
        &self,
        object: &ObjectSelector,
        key: &str,
        value: &str,
    ) -> Result<ReplySet, ClientError> {
        self.block_on(self.client.set_property(object, key, value))
    }

    pub fn list_properties(
        &self,
        object: &ObjectSelector,
    ) -> Result<BTreeMap<String, String>, ClientError> {
        self.block_on(self.client.list_properties(object))
    }
}
