//! Shared presentation: table construction honoring the output style flags.

use comfy_table::presets::{ASCII_FULL, NOTHING, UTF8_FULL};
use comfy_table::Table;

/// Style switches applied to every table.
#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    pub utf8: bool,
    pub color: bool,
    /// Drop all borders so rows paste cleanly into other tools.
    pub pastable: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            utf8: true,
            color: true,
            pastable: false,
        }
    }
}

impl TableStyle {
    pub fn build_table(&self, header: &[&str]) -> Table {
        let mut table = Table::new();
        if self.pastable {
            table.load_preset(NOTHING);
        } else if self.utf8 {
            table.load_preset(UTF8_FULL);
        } else {
            table.load_preset(ASCII_FULL);
        }
        table.set_header(header.to_vec());
        table
    }
}
