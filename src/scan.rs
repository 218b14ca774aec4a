//! Source discovery for directory builds.
//!
//! Only the directory's own files are considered; subdirectories are not
//! descended into. Files with unsupported extensions are skipped silently.
//!
//! ## Order
//!
//! Sources are grouped by extension, then sorted by file name within each
//! group:
//!
//! ```text
//! content/
//! ├── b.md        →  3
//! ├── a.md        →  2
//! ├── notes.txt   →  1
//! ├── logo.png       (skipped)
//! └── drafts/        (not scanned)
//! ```
//!
//! The order matters when two sources claim the same slug: the later one is
//! the collision.

use crate::naming::SourceKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read directory {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// List the supported source files directly inside `dir`, in build order.
pub fn collect_sources(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(kind) = SourceKind::from_path(entry.path()) {
            files.push((kind, entry.into_path()));
        }
    }

    let mut ordered = Vec::with_capacity(files.len());
    for kind in SourceKind::ALL {
        ordered.extend(
            files
                .iter()
                .filter(|(k, _)| *k == kind)
                .map(|(_, path)| path.clone()),
        );
    }
    Ok(ordered)
}
