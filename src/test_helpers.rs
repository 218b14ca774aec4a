//! Shared test utilities for the silkie test suite.
//!
//! # Usage
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let doc = load_document(tmp.path(), "story.txt", "Title\n\n\nBody\n", GenerationOptions::default());
//! assert_eq!(doc.title, "Title");
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::document::{Document, GenerationOptions};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        if entry.path().is_file() {
            std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
        }
    }
    tmp
}

/// Write a source file into `dir` and return its path.
pub fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// Write a source file and load it as a document with metadata applied.
///
/// `options.input_path` is replaced by the written file's path.
pub fn load_document(
    dir: &Path,
    name: &str,
    content: &str,
    options: GenerationOptions,
) -> Document {
    let path = write_source(dir, name, content);
    let mut doc = Document::new(GenerationOptions {
        input_path: path,
        ..options
    })
    .unwrap();
    doc.load_metadata().unwrap();
    doc
}

// =========================================================================
// Assertions
// =========================================================================

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
