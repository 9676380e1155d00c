//! Controller replies: the wire shape of a single reply and the reply sets
//! that mutating calls return.
//!
//! Replies are interpreted, never retried: a reply classified as Error is
//! surfaced to the operator verbatim, and the aggregation layer in
//! [`crate::aggregate`] derives the command-level outcome from the full set.

pub mod code;

pub use code::{CodeMask, Outcome, ReturnCode};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Object-reference key naming the node a reply pertains to.
pub const OBJ_REF_NODE: &str = "node";

/// Object-reference key naming the resource definition a reply pertains to.
pub const OBJ_REF_RESOURCE: &str = "resource";

/// Object-reference key naming the snapshot a reply pertains to.
pub const OBJ_REF_SNAPSHOT: &str = "snapshot";

/// One controller reply.
///
/// `message` is always present; `cause`, `correction` and `details` are
/// optional elaborations rendered beneath it. `object_refs` names the
/// objects the reply pertains to, keyed by object-kind labels such as
/// [`OBJ_REF_NODE`]. Unknown fields from newer controllers are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub return_code: ReturnCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub object_refs: BTreeMap<String, String>,
}

/// Replies from one controller call, in arrival order.
pub type ReplySet = Vec<Reply>;

impl Reply {
    pub fn new(return_code: ReturnCode, message: impl Into<String>) -> Self {
        Reply {
            return_code,
            message: message.into(),
            cause: None,
            correction: None,
            details: None,
            object_refs: BTreeMap::new(),
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn with_correction(mut self, correction: impl Into<String>) -> Self {
        self.correction = Some(correction.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_object_ref(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.object_refs.insert(key.into(), value.into());
        self
    }

    /// Outcome class decoded from the return code.
    pub fn outcome(&self) -> Outcome {
        self.return_code.outcome()
    }

    /// The node this reply pertains to, when the controller named one.
    pub fn target_node(&self) -> Option<&str> {
        self.object_refs.get(OBJ_REF_NODE).map(String::as_str)
    }
}
