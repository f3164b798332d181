use crate::parsers::markdown::{is_fence, section_body};

const COMMENT_PREFIXES: [&str; 3] = ["//", "#", "--"];

/// Fenced code blocks between the heading at `heading_idx` and the next heading
/// of the same or shallower level. Fence lines are excluded and empty blocks
/// are dropped. An unterminated block at the end of the section is discarded.
pub fn code_blocks_in_section<'a>(lines: &'a [&'a str], heading_idx: usize) -> Vec<Vec<&'a str>> {
    let mut blocks = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in section_body(lines, heading_idx) {
        if is_fence(line) {
            match current.take() {
                Some(block) if !block.is_empty() => blocks.push(block),
                Some(_) => {}
                None => current = Some(Vec::new()),
            }
        } else if let Some(block) = current.as_mut() {
            block.push(*line);
        }
    }

    blocks
}

/// First non-blank line that is not a comment, trimmed. Falls back to the
/// first non-blank line when the block holds only comments.
pub fn first_code_line(block: &[&str]) -> String {
    let mut non_blank = block.iter().map(|line| line.trim()).filter(|line| !line.is_empty());
    let Some(first) = non_blank.next() else {
        return String::new();
    };

    std::iter::once(first)
        .chain(non_blank)
        .find(|line| !is_comment(line))
        .unwrap_or(first)
        .to_string()
}

fn is_comment(line: &str) -> bool {
    COMMENT_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}
