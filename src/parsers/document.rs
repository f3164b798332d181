use std::path::Path;

use crate::models::{DocType, RegisterEntry};
use crate::parsers::markdown::split_lines;
use crate::parsers::patterns::{
    extract_anti_patterns, extract_correct_patterns, extract_quick_ref_patterns,
};
use crate::parsers::references::{
    extract_code_languages, extract_qt_apis, extract_refs, has_code_examples,
};
use crate::parsers::structure::{
    extract_banned, extract_rules, extract_sections, extract_subtitle, extract_title,
};
use crate::tagging::{build_tags, derive_concepts};

/// Build the register entry for one document.
///
/// `file` is the document's path relative to the scanned root, with forward
/// slashes; its file name decides the [`DocType`] and its stem feeds concept
/// derivation.
pub fn parse_document(file: &str, category: &str, text: &str) -> RegisterEntry {
    let path = Path::new(file);
    let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let doc_type = DocType::from_filename(&file_name);

    let lines = split_lines(text);

    let title = extract_title(&lines);
    let subtitle = extract_subtitle(&lines);
    let sections = extract_sections(&lines);
    let rules = extract_rules(&lines);
    let banned = extract_banned(&lines);

    let (anti_patterns, correct_patterns) = match doc_type {
        DocType::QuickRef => extract_quick_ref_patterns(&lines),
        DocType::Readme | DocType::Content => {
            (extract_anti_patterns(&lines), extract_correct_patterns(&lines))
        }
    };

    let refs = extract_refs(text);
    let code_languages = extract_code_languages(text);
    let has_examples = has_code_examples(text);
    let qt_apis = extract_qt_apis(text);
    let concepts = derive_concepts(&title, &sections, &stem);
    let tags = build_tags(&title, &qt_apis, &code_languages, &concepts);

    RegisterEntry {
        file: file.to_string(),
        category: category.to_string(),
        doc_type,
        title,
        subtitle,
        sections,
        rules,
        banned,
        anti_patterns,
        correct_patterns,
        refs,
        code_languages,
        has_examples,
        tags,
        qt_apis,
        concepts,
    }
}
