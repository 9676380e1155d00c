//! Reply-set aggregation: worst-case status and per-reply outcomes.
//!
//! Every mutating command funnels its replies through [`aggregate`] so that
//! the exit status, the per-node detail, and the rendered order all come from
//! one place. The reply set is interpreted exactly as received: no reply is
//! dropped, reordered, or retried.

use crate::error::ClientError;
use crate::reply::{Outcome, Reply, ReplySet};

/// Command-level status derived from a reply set.
///
/// Ordered so the worst case is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExitStatus {
    Success,
    Warning,
    Error,
}

impl ExitStatus {
    /// Process exit code for this status.
    ///
    /// Success exits 0, warnings exit 3, controller-reported errors exit 10.
    /// Client-side failures never reach this mapping; they are coded in
    /// [`crate::cli::error_exit_code`].
    pub fn process_code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Warning => 3,
            ExitStatus::Error => 10,
        }
    }
}

impl From<Outcome> for ExitStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitStatus::Success,
            Outcome::Warning => ExitStatus::Warning,
            Outcome::Error => ExitStatus::Error,
        }
    }
}

/// Classified view of one reply, tagged with the node it pertains to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyOutcome {
    pub outcome: Outcome,
    pub target: Option<String>,
}

/// Result of aggregating a reply set.
///
/// `outcomes` parallels the reply set in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitDecision {
    pub status: ExitStatus,
    pub outcomes: Vec<ReplyOutcome>,
}

/// Derive the command-level decision from a reply set.
///
/// The status is the worst outcome across all replies. An empty set is an
/// internal error: the controller answers every mutating call with at least
/// one reply, so emptiness means the conversation went wrong earlier.
pub fn aggregate(replies: &[Reply]) -> Result<ExitDecision, ClientError> {
    if replies.is_empty() {
        return Err(ClientError::Internal(
            "controller returned an empty reply set".to_string(),
        ));
    }

    let mut status = ExitStatus::Success;
    let mut outcomes = Vec::with_capacity(replies.len());
    for reply in replies {
        let outcome = reply.outcome();
        status = status.max(ExitStatus::from(outcome));
        outcomes.push(ReplyOutcome {
            outcome,
            target: reply.target_node().map(String::from),
        });
    }

    Ok(ExitDecision { status, outcomes })
}

/// A mutating command's full result: the replies as received plus the
/// decision derived from them. Presentation renders the replies; the route
/// exits with the decision's process code.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub replies: ReplySet,
    pub decision: ExitDecision,
}

impl CommandOutcome {
    pub fn from_replies(replies: ReplySet) -> Result<Self, ClientError> {
        let decision = aggregate(&replies)?;
        Ok(CommandOutcome { replies, decision })
    }
}
