//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating test documentation trees
pub struct DocsDirBuilder {
    temp_dir: TempDir,
}

impl DocsDirBuilder {
    /// Create a new builder with an empty documentation root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the documentation root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add the root README.md with the given content
    pub fn with_readme(self, content: &str) -> Self {
        self.with_file("README.md", content)
    }

    /// Add a document inside a category directory
    pub fn with_doc(self, category: &str, name: &str, content: &str) -> Self {
        self.with_file(&format!("{}/{}", category, name), content)
    }

    /// Add any file relative to the root, creating parent directories
    pub fn with_file(self, rel_path: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write document");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DocsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub const ROOT_README: &str = "\
# Qt Guidance for AI Assistants

> Rules and traps collected from real reviews.

See [the C++ overview](cpp/README.md) and [QML rules](qml/README.md).
";

pub const CPP_README: &str = "\
# C++ Rules

RULE: Every QObject gets a parent or an owner
";

pub const CPP_OWNERSHIP: &str = "\
# QObject Ownership

> Parent-child trees decide lifetime.
> Smart pointers fight them.

RULE: Give every QObject a parent
RULE: Never delete a parented child manually
BANNED: delete on a QObject with a parent

## What AI Writes

```cpp
// looks fine, leaks on close
auto *timer = new QTimer();
timer->start(100);
```

## What to Write Instead

```cpp
auto *timer = new QTimer(this);
```

## Signals and connections

Q_OBJECT must appear in every class with signals. See [threading](threading.md).
";

pub const CPP_THREADING: &str = "\
# Threading

## What AI Gets Wrong

| Scenario | AI Default | Better |
|----------|------------|--------|
| workers | `subclass QThread` | worker object |
| timers | `QTimer in run()` | timer in worker |

## The Fix

```cpp
worker->moveToThread(&thread);
```
";

pub const QML_QUICK_REF: &str = "\
# QML Quick Reference

| AI Writes | Correct Usage |
|-----------|---------------|
| `anchors.fill: parent` in a Layout | `Layout.fillWidth: true` |
| `property var model` | `required property var model` |
";

/// Helper to create a realistic documentation tree
pub fn realistic_docs_dir() -> TempDir {
    DocsDirBuilder::new()
        .with_readme(ROOT_README)
        .with_doc("cpp", "threading.md", CPP_THREADING)
        .with_doc("cpp", "ownership.md", CPP_OWNERSHIP)
        .with_doc("cpp", "README.md", CPP_README)
        .with_doc("qml", "quick-ref.md", QML_QUICK_REF)
        .with_file("cpp/drafts/unfinished.md", "# Not indexed\n")
        .with_file("notes/ignored.md", "# Not a category\n")
        .build()
}
