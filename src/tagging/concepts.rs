use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z][-a-z]+").unwrap());

/// Keyword to concept labels. Keys are lowercase and may contain hyphens.
const CONCEPT_TABLE: &[(&str, &[&str])] = &[
    ("ownership", &["lifetime", "memory-management"]),
    ("parent-child", &["lifetime", "memory-management"]),
    ("threading", &["concurrency", "threads"]),
    ("thread", &["concurrency", "threads"]),
    ("connections", &["signals-slots", "event-handling"]),
    ("signal", &["signals-slots", "event-handling"]),
    ("signals", &["signals-slots", "event-handling"]),
    ("model", &["data-model", "mvc"]),
    ("model-view", &["data-model", "mvc"]),
    ("types", &["type-conversion", "type-safety"]),
    ("bindings", &["declarative", "reactive"]),
    ("binding", &["declarative", "reactive"]),
    ("layout", &["positioning", "responsive"]),
    ("loader", &["lazy-loading", "performance"]),
    ("property", &["data-binding", "q-property"]),
    ("q-property", &["data-binding", "q-property"]),
    ("q-object", &["meta-object", "moc"]),
    ("q-invokable", &["qml-integration", "api-exposure"]),
    ("async", &["concurrency", "event-loop"]),
    ("errors", &["error-handling"]),
    ("pin", &["memory-safety", "move-semantics"]),
    ("bridge", &["interop", "ipc"]),
    ("bridge-ipc", &["interop", "ipc"]),
    ("config", &["configuration", "settings"]),
    ("config-paths", &["configuration", "file-paths"]),
    ("validation", &["schema", "type-checking"]),
    ("scope", &["encapsulation", "isolation"]),
    ("states", &["state-management", "visual-states"]),
    ("performance", &["optimization"]),
    ("engine", &["js-engine", "v4"]),
    ("engine-ownership", &["lifetime", "qml-engine"]),
    ("network", &["http", "api"]),
    ("startup", &["initialization", "boot"]),
    ("testing", &["test", "quality"]),
    ("build-system", &["build-system", "cmake"]),
    ("mvvm-bridge", &["architecture", "pattern"]),
    ("layers", &["architecture", "separation"]),
    ("principles", &["architecture", "design"]),
    ("contract", &["protocol", "interface"]),
    ("enforcement", &["linting", "quality"]),
    ("data-types", &["configuration", "state-management"]),
    ("core-isolation", &["architecture", "separation"]),
    ("cxx-qt", &["ffi", "bridge"]),
    ("pragma-library", &["modules", "code-organization"]),
    ("glue-code", &["integration", "adapter"]),
    ("standalone", &["modules", "isolation"]),
    ("file-size", &["code-organization", "maintainability"]),
    ("file-organization", &["code-organization", "structure"]),
    ("required-properties", &["type-safety", "encapsulation"]),
    ("qml-rules", &["declarative", "ui-patterns"]),
    ("qt-mapping", &["api-mapping", "implementation"]),
    ("ai-traps", &["anti-patterns", "common-mistakes"]),
    ("licensing", &["license", "lgpl", "compliance"]),
];

static CONCEPT_MAP: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| CONCEPT_TABLE.iter().copied().collect());

/// Concept labels for a single lowercase keyword
pub fn concepts_for(keyword: &str) -> &'static [&'static str] {
    CONCEPT_MAP.get(keyword).copied().unwrap_or(&[])
}

/// Concepts implied by the filename stem, the title and the section headings
pub fn derive_concepts(title: &str, sections: &[String], stem: &str) -> BTreeSet<String> {
    let mut concepts: BTreeSet<String> =
        concepts_for(&stem.to_lowercase()).iter().map(|c| c.to_string()).collect();

    for text in std::iter::once(title).chain(sections.iter().map(String::as_str)) {
        let lowered = text.to_lowercase();
        for word in KEYWORD_RE.find_iter(&lowered) {
            concepts.extend(concepts_for(word.as_str()).iter().map(|c| c.to_string()));
        }
    }

    concepts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_every_key_is_a_keyword_token() {
        for (key, labels) in CONCEPT_TABLE {
            assert!(KEYWORD_RE.find(key).is_some_and(|m| m.as_str() == *key), "bad key {key}");
            assert!(!labels.is_empty());
        }
        assert_eq!(CONCEPT_MAP.len(), CONCEPT_TABLE.len());
    }

    #[test]
    fn test_stem_match_is_case_insensitive_and_exact() {
        assert_eq!(derive_concepts("", &[], "Engine-Ownership"), set(&["lifetime", "qml-engine"]));
        assert!(derive_concepts("", &[], "engine-ownership-notes").is_empty());
    }

    #[test]
    fn test_title_and_sections_union() {
        let sections = vec!["Signal Connections".to_string(), "Thread affinity".to_string()];
        let concepts = derive_concepts("Object Ownership", &sections, "README");
        assert_eq!(
            concepts,
            set(&[
                "concurrency",
                "event-handling",
                "lifetime",
                "memory-management",
                "signals-slots",
                "threads"
            ])
        );
    }

    #[test]
    fn test_hyphenated_title_tokens() {
        let concepts = derive_concepts("Avoiding cxx-qt Pitfalls", &[], "pitfalls");
        assert_eq!(concepts, set(&["bridge", "ffi"]));
    }
}
