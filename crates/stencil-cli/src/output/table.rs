//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Format registered helper names as a numbered table.
pub fn format_function_table(names: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Function"]);

    for (index, name) in names.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), name.clone()]);
    }

    table
}
