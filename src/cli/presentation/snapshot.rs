//! Snapshot presentation: listing table and machine JSON.

use crate::cli::presentation::shared::TableStyle;
use crate::error::ClientError;
use crate::snapshot::view::{DisplayState, SnapshotView};
use crate::snapshot::SnapshotDfn;
use comfy_table::{Cell, Color};

/// Render the snapshot listing as a table.
pub fn format_snapshot_list_text(views: &[SnapshotView], style: &TableStyle) -> String {
    let mut table = style.build_table(&[
        "ResourceName",
        "SnapshotName",
        "NodeNames",
        "Volumes",
        "State",
    ]);
    for view in views {
        table.add_row(vec![
            Cell::new(&view.resource_name),
            Cell::new(&view.snapshot_name),
            Cell::new(&view.node_list),
            Cell::new(&view.volume_list),
            state_cell(view.state, style.color),
        ]);
    }
    table.to_string()
}

/// Render snapshot definitions verbatim as pretty JSON, exact byte sizes
/// included.
pub fn format_snapshot_list_json(snapshots: &[SnapshotDfn]) -> Result<String, ClientError> {
    serde_json::to_string_pretty(snapshots)
        .map_err(|e| ClientError::Internal(format!("failed to encode snapshot list: {}", e)))
}

fn state_cell(state: DisplayState, color: bool) -> Cell {
    let cell = Cell::new(state.label());
    if !color {
        return cell;
    }
    if state.is_problem() {
        cell.fg(Color::Red)
    } else if state == DisplayState::Successful {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Yellow)
    }
}
