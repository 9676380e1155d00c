//! Snapshot command orchestration.
//!
//! Validates nothing the controller validates better: send the call, hand
//! every reply set to aggregation. The CLI route owns presentation.

use crate::aggregate::CommandOutcome;
use crate::error::ClientError;
use crate::snapshot::view::SnapshotView;
use crate::snapshot::SnapshotDfn;
use crate::transport::Connection;
use tracing::debug;

pub struct SnapshotCommandService;

/// Result of the snapshot list command.
#[derive(Debug, Clone)]
pub struct SnapshotListResult {
    /// Definitions as reported, for machine-readable output.
    pub snapshots: Vec<SnapshotDfn>,
    /// Projected listing rows, in the same order.
    pub views: Vec<SnapshotView>,
}

impl SnapshotCommandService {
    pub fn run_create(
        connection: &Connection,
        nodes: &[String],
        resource: &str,
        snapshot: &str,
        run_async: bool,
    ) -> Result<CommandOutcome, ClientError> {
        debug!(resource, snapshot, nodes = nodes.len(), run_async, "creating snapshot");
        let replies = connection.snapshot_create(nodes, resource, snapshot, run_async)?;
        CommandOutcome::from_replies(replies)
    }

    pub fn run_delete(
        connection: &Connection,
        resource: &str,
        snapshot: &str,
    ) -> Result<CommandOutcome, ClientError> {
        debug!(resource, snapshot, "deleting snapshot");
        let replies = connection.snapshot_delete(resource, snapshot)?;
        CommandOutcome::from_replies(replies)
    }

    pub fn run_rollback(
        connection: &Connection,
        resource: &str,
        snapshot: &str,
    ) -> Result<CommandOutcome, ClientError> {
        debug!(resource, snapshot, "rolling resource back to snapshot");
        let replies = connection.snapshot_rollback(resource, snapshot)?;
        CommandOutcome::from_replies(replies)
    }

    pub fn run_restore_resource(
        connection: &Connection,
        nodes: &[String],
        from_resource: &str,
        from_snapshot: &str,
        to_resource: &str,
    ) -> Result<CommandOutcome, ClientError> {
        debug!(
            from_resource,
            from_snapshot, to_resource, "restoring resource from snapshot"
        );
        let replies =
            connection.snapshot_restore_resource(nodes, from_resource, from_snapshot, to_resource)?;
        CommandOutcome::from_replies(replies)
    }

    pub fn run_restore_volume_definition(
        connection: &Connection,
        from_resource: &str,
        from_snapshot: &str,
        to_resource: &str,
    ) -> Result<CommandOutcome, ClientError> {
        debug!(
            from_resource,
            from_snapshot, to_resource, "restoring volume definitions from snapshot"
        );
        let replies = connection.snapshot_restore_volume_definition(
            from_resource,
            from_snapshot,
            to_resource,
        )?;
        CommandOutcome::from_replies(replies)
    }

    pub fn run_list(connection: &Connection) -> Result<SnapshotListResult, ClientError> {
        let snapshots = connection.snapshot_dfn_list()?;
        let views = snapshots.iter().map(SnapshotView::project).collect();
        Ok(SnapshotListResult { snapshots, views })
    }
}
