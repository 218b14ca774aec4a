//! Centralized source filename handling.
//!
//! Every document gets its default title and slug from its filename, and its
//! body parser from its extension. Both rules live here so the CLI, the batch
//! scanner and the document loader agree on them.
//!
//! ## Filename stems
//!
//! The stem is the last path component with everything from the *first* dot
//! removed, so multi-part extensions collapse:
//! - `/docs/Lorem Ipsum.txt` → "Lorem Ipsum"
//! - `/docs/test.rc.txt` → "test"
//! - `C:\Documents\test.txt` → "test" (backslashes are treated as separators)

use std::path::Path;

/// The body parser a source file is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `.txt`: blank-line paragraphs, optional structural title.
    PlainText,
    /// `.md`: rendered by pulldown-cmark.
    Markdown,
}

impl SourceKind {
    /// Extensions in the order batch mode processes them.
    pub const ALL: [SourceKind; 2] = [SourceKind::PlainText, SourceKind::Markdown];

    /// Classify a path by its final extension. Matching is case-sensitive.
    pub fn from_path(path: &Path) -> Option<SourceKind> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("txt") => Some(SourceKind::PlainText),
            Some("md") => Some(SourceKind::Markdown),
            _ => None,
        }
    }
}

/// Whether the file at `path` can be turned into a page.
pub fn is_supported(path: &Path) -> bool {
    SourceKind::from_path(path).is_some()
}

/// Extract the default title/slug from a file path.
///
/// Returns `None` for an empty path.
pub fn file_stem(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    let normalized = path.replace('\\', "/");
    let stem = Path::new(&normalized)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Some(stem.split('.').next().unwrap_or_default().to_string())
}
