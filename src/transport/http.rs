//! HTTP controller client with endpoint failover.
//!
//! Endpoints are tried in configured order; a connection-level failure moves
//! on to the next endpoint, and only when every endpoint failed does the
//! call surface a connection error. Once any endpoint answers, its response
//! is final: reply-bearing endpoints parse the body as a reply array
//! regardless of HTTP status, because controllers report command failures
//! inside replies, not through status codes alone.

use crate::config::ControllerConfig;
use crate::error::ClientError;
use crate::object::ObjectSelector;
use crate::reply::{Reply, ReplySet};
use crate::snapshot::SnapshotDfn;
use crate::transport::ControllerClient;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct HttpControllerClient {
    http: Client,
    endpoints: Vec<String>,
}

impl HttpControllerClient {
    pub fn new(config: &ControllerConfig) -> Result<Self, ClientError> {
        if config.endpoints.is_empty() {
            return Err(ClientError::Config(
                "no controller endpoints configured".to_string(),
            ));
        }
        let http = Client::builder()
            .no_proxy()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                ClientError::Internal(format!("failed to create HTTP client: {}", e))
            })?;
        let endpoints = config
            .endpoints
            .iter()
            .map(|endpoint| endpoint.trim_end_matches('/').to_string())
            .collect();
        Ok(HttpControllerClient { http, endpoints })
    }

    /// Send a request, failing over across endpoints on connection errors.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response, ClientError> {
        let mut last_error = None;
        for endpoint in &self.endpoints {
            let url = format!("{}{}", endpoint, path);
            debug!(method = %method, url = %url, "controller request");
            let mut request = self.http.request(method.clone(), &url);
            if let Some(body) = body {
                request = request.json(body);
            }
            match request.send().await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_builder() => {
                    return Err(ClientError::Internal(format!(
                        "malformed controller request for {}: {}",
                        url, e
                    )));
                }
                Err(e) => {
                    warn!(endpoint = %endpoint, error = %e, "controller endpoint unreachable, trying next");
                    last_error = Some(e);
                }
            }
        }
        let detail = match last_error {
            Some(e) => format!(": {}", e),
            None => String::new(),
        };
        Err(ClientError::Connection(format!(
            "no controller reachable at {}{}",
            self.endpoints.join(", "),
            detail
        )))
    }

    /// Call a reply-bearing endpoint and parse its reply array.
    async fn call_replies(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ReplySet, ClientError> {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Protocol(format!("failed to read controller response: {}", e)))?;
        serde_json::from_str(&text).map_err(|e| {
            ClientError::Protocol(format!(
                "controller answered {} with an unreadable reply body: {}",
                status, e
            ))
        })
    }

    /// Fetch a typed payload. Controllers reject payload requests with a
    /// reply array, which is surfaced for rendering through aggregation.
    async fn get_payload<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.send(Method::GET, path, None).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Protocol(format!("failed to read controller response: {}", e)))?;
        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| {
                ClientError::Protocol(format!("unreadable controller payload: {}", e))
            });
        }
        if let Ok(replies) = serde_json::from_str::<Vec<Reply>>(&text) {
            return Err(ClientError::Controller(replies));
        }
        Err(ClientError::Protocol(format!(
            "controller answered {} without replies: {}",
            status,
            snippet(&text)
        )))
    }
}

fn body_value<B: Serialize>(body: &B) -> Result<serde_json::Value, ClientError> {
    serde_json::to_value(body)
        .map_err(|e| ClientError::Internal(format!("failed to encode request body: {}", e)))
}

fn snippet(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(120) {
        Some((index, _)) => &trimmed[..index],
        None => trimmed,
    }
}

/// Property-container path of a controller object.
fn object_path(object: &ObjectSelector) -> String {
    match object {
        ObjectSelector::Node { node } => format!("/v1/nodes/{}", node),
        ObjectSelector::StoragePool { node, pool } => {
            format!("/v1/nodes/{}/storage-pools/{}", node, pool)
        }
        ObjectSelector::StoragePoolDefinition { pool } => {
            format!("/v1/storage-pool-definitions/{}", pool)
        }
        ObjectSelector::ResourceDefinition { resource } => {
            format!("/v1/resource-definitions/{}", resource)
        }
        ObjectSelector::VolumeDefinition { resource, volume_number } => format!(
            "/v1/resource-definitions/{}/volume-definitions/{}",
            resource, volume_number
        ),
        ObjectSelector::Resource { node, resource } => {
            format!("/v1/resource-definitions/{}/resources/{}", resource, node)
        }
    }
}

#[derive(Serialize)]
struct SnapshotCreateRequest<'a> {
    snapshot_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<&'a [String]>,
    #[serde(rename = "async")]
    run_async: bool,
}

#[derive(Serialize)]
struct SnapshotRestoreRequest<'a> {
    to_resource: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<&'a [String]>,
}

#[derive(Serialize)]
struct PropertyModifyRequest<'a> {
    set: BTreeMap<&'a str, &'a str>,
}

fn optional_nodes(nodes: &[String]) -> Option<&[String]> {
    if nodes.is_empty() {
        None
    } else {
        Some(nodes)
    }
}

#[async_trait]
impl ControllerClient for HttpControllerClient {
    async fn snapshot_create(
        &self,
        nodes: &[String],
        resource: &str,
        snapshot: &str,
        run_async: bool,
    ) -> Result<ReplySet, ClientError> {
        let body = body_value(&SnapshotCreateRequest {
            snapshot_name: snapshot,
            nodes: optional_nodes(nodes),
            run_async,
        })?;
        let path = format!("/v1/resource-definitions/{}/snapshots", resource);
        self.call_replies(Method::POST, &path, Some(&body)).await
    }

    async fn snapshot_delete(
        &self,
        resource: &str,
        snapshot: &str,
    ) -> Result<ReplySet, ClientError> {
        let path = format!("/v1/resource-definitions/{}/snapshots/{}", resource, snapshot);
        self.call_replies(Method::DELETE, &path, None).await
    }

    async fn snapshot_rollback(
        &self,
        resource: &str,
        snapshot: &str,
    ) -> Result<ReplySet, ClientError> {
        let path = format!(
            "/v1/resource-definitions/{}/snapshots/{}/rollback",
            resource, snapshot
        );
        self.call_replies(Method::POST, &path, None).await
    }

    async fn snapshot_restore_resource(
        &self,
        nodes: &[String],
        from_resource: &str,
        from_snapshot: &str,
        to_resource: &str,
    ) -> Result<ReplySet, ClientError> {
        let body = body_value(&SnapshotRestoreRequest {
            to_resource,
            nodes: optional_nodes(nodes),
        })?;
        let path = format!(
            "/v1/resource-definitions/{}/snapshots/{}/restore-resource",
            from_resource, from_snapshot
        );
        self.call_replies(Method::POST, &path, Some(&body)).await
    }

    async fn snapshot_restore_volume_definition(
        &self,
        from_resource: &str,
        from_snapshot: &str,
        to_resource: &str,
    ) -> Result<ReplySet, ClientError> {
        let body = body_value(&SnapshotRestoreRequest {
            to_resource,
            nodes: None,
        })?;
        let path = format!(
            "/v1/resource-definitions/{}/snapshots/{}/restore-volume-definition",
            from_resource, from_snapshot
        );
        self.call_replies(Method::POST, &path, Some(&body)).await
    }

    async fn snapshot_dfn_list(&self) -> Result<Vec<SnapshotDfn>, ClientError> {
        self.get_payload("/v1/view/snapshots").await
    }

    async fn set_property(
        &self,
        object: &ObjectSelector,
        key: &str,
        value: &str,
    ) -> Result<ReplySet, ClientError> {
        let mut set = BTreeMap::new();
        set.insert(key, value);
        let body = body_value(&PropertyModifyRequest { set })?;
        let path = format!("{}/properties", object_path(object));
        self.call_replies(Method::PUT, &path, Some(&body)).await
    }

    async fn list_properties(
        &self,
        object: &ObjectSelector,
    ) -> Result<BTreeMap<String, String>, ClientError> {
        let path = format!("{}/properties", object_path(object));
        self.get_payload(&path).await
    }
}
