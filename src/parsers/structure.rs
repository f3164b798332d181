use std::sync::LazyLock;

use regex::Regex;

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{2,3})\s+(.+)").unwrap());

const TITLE_PREFIX: &str = "# ";
const QUOTE_PREFIX: &str = "> ";
const RULE_MARKER: &str = "RULE: ";
const BANNED_MARKER: &str = "BANNED: ";

/// First level-1 heading, or an empty string
pub fn extract_title(lines: &[&str]) -> String {
    lines
        .iter()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .unwrap_or_default()
}

/// Block-quote lines directly under the title, joined with single spaces.
///
/// Blank lines between the title and the first quote are skipped; anything
/// else ends the subtitle.
pub fn extract_subtitle(lines: &[&str]) -> String {
    let Some(title_idx) = lines.iter().position(|line| line.starts_with(TITLE_PREFIX)) else {
        return String::new();
    };

    let mut parts = Vec::new();
    for line in &lines[title_idx + 1..] {
        if let Some(quote) = line.strip_prefix(QUOTE_PREFIX) {
            parts.push(quote.trim());
        } else if !parts.is_empty() || !line.trim().is_empty() {
            break;
        }
    }
    parts.join(" ")
}

/// All `##` and `###` headings in document order
pub fn extract_sections(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| SECTION_RE.captures(line))
        .map(|caps| caps[2].trim().to_string())
        .collect()
}

pub fn extract_rules(lines: &[&str]) -> Vec<String> {
    extract_marked(lines, RULE_MARKER)
}

pub fn extract_banned(lines: &[&str]) -> Vec<String> {
    extract_marked(lines, BANNED_MARKER)
}

fn extract_marked(lines: &[&str], marker: &str) -> Vec<String> {
    lines.iter().filter_map(|line| line.trim().strip_prefix(marker)).map(str::to_string).collect()
}
