//! Line-level markdown predicates shared by the extractors.
//!
//! Every extractor works on a document split on `\n` (carriage returns are
//! left in place and trimmed away where text is taken), so these helpers all
//! take a single `&str` line.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+").unwrap());
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]*)`").unwrap());

const FENCE_MARKER: &str = "```";

/// Split a document into lines the way every extractor expects
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Heading depth (1-6) if the line is an ATX heading
pub fn heading_level(line: &str) -> Option<usize> {
    HEADING_RE.captures(line).map(|caps| caps[1].len())
}

/// Opening or closing code fence, indentation allowed
pub fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// Row of a pipe table (header, separator or data)
pub fn is_table_row(line: &str) -> bool {
    line.trim().starts_with('|')
}

/// Split a table row on pipes. The leading and trailing empty cells are kept
/// so column indexes line up across rows.
pub fn table_cells(line: &str) -> Vec<&str> {
    line.split('|').collect()
}

/// Drop inline-code backticks from a table cell and trim it
pub fn clean_table_cell(cell: &str) -> String {
    INLINE_CODE_RE.replace_all(cell.trim(), "$1").trim().to_string()
}

/// Lines belonging to the heading at `start`: everything after it up to the
/// next heading of the same or shallower level.
///
/// Fences are not tracked, so a `# comment` line inside a shell or Python
/// block counts as a level-1 heading and ends every section.
///
/// Returns an empty slice when `start` is not a heading.
pub fn section_body<'a>(lines: &'a [&'a str], start: usize) -> &'a [&'a str] {
    let Some(level) = lines.get(start).and_then(|line| heading_level(line)) else {
        return &[];
    };

    let body = &lines[start + 1..];
    let end = body
        .iter()
        .position(|line| heading_level(line).is_some_and(|l| l <= level))
        .unwrap_or(body.len());
    &body[..end]
}
