//! Anti-pattern / correct-pattern extraction.
//!
//! Narrative documents mark discouraged code under "What AI ..." headings and
//! the recommended counterpart under "What to Write Instead", "The Fix" or
//! "Correct Pattern" headings. Quick-reference documents put both in tables
//! with an "AI Writes" column. The two lists are not paired or validated
//! against each other.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsers::code_blocks::{code_blocks_in_section, first_code_line};
use crate::parsers::markdown::{clean_table_cell, is_table_row, table_cells};
use crate::parsers::tables::table_column_values;

static AI_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(#{2,3})\s+.*What AI.*").unwrap());
static CORRECT_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(#{2,3})\s+(?:What to Write Instead|The Fix|Correct Pattern)").unwrap()
});
static AI_COLUMN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)AI\s*(?:pattern|writes|default)").unwrap());
static AI_WRITES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)AI\s+Writes").unwrap());
static CORRECT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Correct").unwrap());

/// Discouraged snippets from "What AI ..." sections.
///
/// Each code block contributes its first meaningful line. A section without
/// code blocks falls back to the "AI pattern/writes/default" column of its
/// first table.
pub fn extract_anti_patterns(lines: &[&str]) -> Vec<String> {
    let mut patterns = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if !AI_HEADING_RE.is_match(line) {
            continue;
        }
        let blocks = code_blocks_in_section(lines, idx);
        if blocks.is_empty() {
            patterns.extend(table_column_values(lines, idx, &AI_COLUMN_RE));
        } else {
            patterns.extend(first_lines(&blocks));
        }
    }
    patterns
}

/// Recommended snippets from correct-pattern sections (code blocks only)
pub fn extract_correct_patterns(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| CORRECT_HEADING_RE.is_match(line))
        .flat_map(|(idx, _)| first_lines(&code_blocks_in_section(lines, idx)))
        .collect()
}

/// Anti and correct patterns from every "AI Writes" table in a quick-reference
/// document, as `(anti, correct)`.
pub fn extract_quick_ref_patterns(lines: &[&str]) -> (Vec<String>, Vec<String>) {
    let mut anti = Vec::new();
    let mut correct = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if !line.contains('|') || !AI_WRITES_RE.is_match(line) {
            i += 1;
            continue;
        }

        let cells = table_cells(line);
        let ai_col = last_matching_column(&cells, &AI_WRITES_RE);
        let correct_col = last_matching_column(&cells, &CORRECT_RE);

        // Skip the separator row
        let mut j = i + 2;
        while j < lines.len() && is_table_row(lines[j]) {
            let row = table_cells(lines[j]);
            push_cell(&mut anti, &row, ai_col);
            push_cell(&mut correct, &row, correct_col);
            j += 1;
        }
        i = j;
    }

    (anti, correct)
}

fn first_lines(blocks: &[Vec<&str>]) -> Vec<String> {
    blocks.iter().map(|block| first_code_line(block)).filter(|line| !line.is_empty()).collect()
}

fn last_matching_column(cells: &[&str], pattern: &Regex) -> Option<usize> {
    cells.iter().rposition(|cell| pattern.is_match(cell))
}

fn push_cell(out: &mut Vec<String>, row: &[&str], col: Option<usize>) {
    if let Some(cell) = col.and_then(|c| row.get(c)) {
        let value = clean_table_cell(cell);
        if !value.is_empty() {
            out.push(value);
        }
    }
}
