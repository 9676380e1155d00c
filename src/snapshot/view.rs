//! Display-state derivation and list-row projection.
//!
//! The state column collapses the flag set into one word through an ordered
//! rule table. Rule order is part of the contract: deletion outranks
//! everything, failures outrank success, and a snapshot with no matching
//! flag is still in flight.

use crate::size::approximate_size_string;
use crate::snapshot::{SnapshotDfn, SnapshotFlags};

/// Single-word state shown in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Deleting,
    Failed,
    SatelliteDisconnected,
    Successful,
    Incomplete,
}

impl DisplayState {
    pub fn label(self) -> &'static str {
        match self {
            DisplayState::Deleting => "DELETING",
            DisplayState::Failed => "Failed",
            DisplayState::SatelliteDisconnected => "Satellite disconnected",
            DisplayState::Successful => "Successful",
            DisplayState::Incomplete => "Incomplete",
        }
    }

    /// Whether the state reports a problem. Drives the color choice in
    /// interactive tables.
    pub fn is_problem(self) -> bool {
        matches!(
            self,
            DisplayState::Deleting | DisplayState::Failed | DisplayState::SatelliteDisconnected
        )
    }
}

// First match wins.
const STATE_RULES: &[(SnapshotFlags, DisplayState)] = &[
    (SnapshotFlags::DELETE, DisplayState::Deleting),
    (SnapshotFlags::FAILED_DEPLOYMENT, DisplayState::Failed),
    (SnapshotFlags::FAILED_DISCONNECT, DisplayState::SatelliteDisconnected),
    (SnapshotFlags::SUCCESSFUL, DisplayState::Successful),
];

/// Derive the display state from a flag set.
pub fn display_state(flags: SnapshotFlags) -> DisplayState {
    for (flag, state) in STATE_RULES {
        if flags.contains(*flag) {
            return *state;
        }
    }
    DisplayState::Incomplete
}

/// One listing row, fully projected to display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotView {
    pub resource_name: String,
    pub snapshot_name: String,
    pub node_list: String,
    pub volume_list: String,
    pub state: DisplayState,
}

impl SnapshotView {
    /// Project a snapshot definition into its listing row.
    ///
    /// Nodes keep controller order; volumes are ordered by volume number
    /// with approximate sizes.
    pub fn project(dfn: &SnapshotDfn) -> Self {
        let mut volumes: Vec<_> = dfn.volume_definitions.iter().collect();
        volumes.sort_by_key(|vlm| vlm.volume_number);
        let volume_list = volumes
            .iter()
            .map(|vlm| {
                format!(
                    "{}: {}",
                    vlm.volume_number,
                    approximate_size_string(vlm.size_bytes)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        SnapshotView {
            resource_name: dfn.resource_name.clone(),
            snapshot_name: dfn.snapshot_name.clone(),
            node_list: dfn.nodes.join(", "),
            volume_list,
            state: display_state(dfn.flags),
        }
    }
}
