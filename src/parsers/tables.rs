use regex::Regex;

use crate::parsers::markdown::{clean_table_cell, is_table_row, section_body, table_cells};

/// Values of the column whose header cell matches `header`, taken from the first
/// table in the section started by the heading at `heading_idx`.
///
/// The row after the header is treated as the separator and skipped. Reading
/// stops at the first line that is not a table row; empty cells are dropped.
pub fn table_column_values(lines: &[&str], heading_idx: usize, header: &Regex) -> Vec<String> {
    let body = section_body(lines, heading_idx);

    for (idx, line) in body.iter().enumerate() {
        if !line.contains('|') || !header.is_match(line) {
            continue;
        }
        let Some(col) = table_cells(line).iter().position(|cell| header.is_match(cell)) else {
            continue;
        };

        // Rows may run past the section body; a heading is never a table row.
        let header_idx = heading_idx + 1 + idx;
        return lines
            .iter()
            .skip(header_idx + 2)
            .take_while(|row| is_table_row(row))
            .filter_map(|row| table_cells(row).get(col).map(|cell| clean_table_cell(cell)))
            .filter(|value| !value.is_empty())
            .collect();
    }

    Vec::new()
}
