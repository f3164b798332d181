use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static MD_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\(([^)]+\.md)\)").unwrap());
static FENCE_LANG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^```(\w+)").unwrap());
static FENCE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*```").unwrap());
static QT_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bQ[A-Z][A-Za-z]{2,}\b").unwrap());
static QT_MACRO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bQ_[A-Z_]{2,}\b").unwrap());
static CXX_QT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#\[(cxx_qt::bridge|qobject|qsignal|qproperty|qml_element|qinvokable)\]").unwrap()
});

/// Matches the class pattern but names the language, not an API
const EXCLUDED_API: &str = "QML";

/// Linked `.md` targets, first appearance order, no duplicates
pub fn extract_refs(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    MD_LINK_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .filter(|target| seen.insert(target.clone()))
        .collect()
}

/// Language tags of opening code fences
pub fn extract_code_languages(text: &str) -> BTreeSet<String> {
    FENCE_LANG_RE.captures_iter(text).map(|caps| caps[1].to_string()).collect()
}

/// Whether the document contains any fenced code block
pub fn has_code_examples(text: &str) -> bool {
    FENCE_OPEN_RE.is_match(text)
}

/// Qt class names, `Q_` macros and cxx-qt attributes mentioned anywhere
pub fn extract_qt_apis(text: &str) -> BTreeSet<String> {
    let classes = QT_CLASS_RE.find_iter(text).map(|m| m.as_str()).filter(|api| *api != EXCLUDED_API);
    let macros = QT_MACRO_RE.find_iter(text).map(|m| m.as_str());
    let mut apis: BTreeSet<String> = classes.chain(macros).map(str::to_string).collect();
    apis.extend(CXX_QT_ATTR_RE.captures_iter(text).map(|caps| format!("#[{}]", &caps[1])));
    apis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_refs_dedup_in_order() {
        let text = "See [threads](threading.md) and [b](../cpp/model.md), again [t](threading.md). \
                    Not [site](https://example.com) nor [img](diagram.png).";
        assert_eq!(extract_refs(text), vec!["threading.md", "../cpp/model.md"]);
    }

    #[test]
    fn test_code_languages_sorted_unique() {
        let text = "```qml\nItem {}\n```\n```cpp\nint x;\n```\n```\nplain\n```\n```qml\nRect {}\n```";
        assert_eq!(extract_code_languages(text), set(&["cpp", "qml"]));
    }

    #[test]
    fn test_has_code_examples() {
        assert!(has_code_examples("text\n```\nplain block\n```\n"));
        assert!(has_code_examples("  ```rust\nfn main() {}\n  ```"));
        assert!(!has_code_examples("inline `code` only"));
    }

    #[test]
    fn test_untagged_fence_counts_as_example() {
        let text = "# Notes\n\n```\nplain output\n```\n";
        assert!(has_code_examples(text));
        assert!(extract_code_languages(text).is_empty());
    }

    #[test]
    fn test_qml_is_not_an_api() {
        let apis = extract_qt_apis("Use QObject from QML, not QML itself. QtCore is a module.");
        assert!(apis.contains("QObject"));
        assert!(!apis.contains("QML"));
        // Second letter must be uppercase
        assert!(!apis.contains("QtCore"));
    }

    #[test]
    fn test_macros_and_attributes() {
        let text = "Q_OBJECT and Q_PROPERTY(int x)\n#[qobject]\n#[cxx_qt::bridge]\n#[QObject]\n#[qsignal] Q_";
        assert_eq!(
            extract_qt_apis(text),
            set(&["#[cxx_qt::bridge]", "#[qobject]", "#[qsignal]", "QObject", "Q_OBJECT", "Q_PROPERTY"])
        );
    }
}
