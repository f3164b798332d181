use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static TITLE_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z][-a-zA-Z]+").unwrap());

/// Title words too common to be useful tags
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "not", "and", "or", "for", "in", "on", "with", "to", "of", "by",
    "from", "at", "but", "vs", "it", "no", "do", "how", "why", "what", "when", "who", "than",
    "that", "its", "you", "be",
];

const MIN_WORD_LEN: usize = 3;

/// Merge significant title words, API tokens, code languages and concepts
pub fn build_tags(
    title: &str,
    qt_apis: &BTreeSet<String>,
    code_languages: &BTreeSet<String>,
    concepts: &BTreeSet<String>,
) -> BTreeSet<String> {
    let title_words = TITLE_WORD_RE
        .find_iter(title)
        .map(|word| word.as_str().to_lowercase())
        .filter(|word| word.chars().count() >= MIN_WORD_LEN && !STOP_WORDS.contains(&word.as_str()));

    title_words
        .chain(qt_apis.iter().map(|api| api.to_lowercase()))
        .chain(code_languages.iter().cloned())
        .chain(concepts.iter().cloned())
        .collect()
}
