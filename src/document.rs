//! The per-file document record.
//!
//! A [`Document`] is one source file resolved to everything the page renderer
//! needs. Construction reads the file once; [`Document::load_metadata`] then
//! applies front matter and, for plain text, structural title detection.
//!
//! ## Title and slug resolution
//!
//! Both start as the filename stem (see [`crate::naming::file_stem`]).
//!
//! - **Title**: front-matter `title` → detected first-line title (`.txt` only)
//!   → filename stem
//! - **Slug**: front-matter `slug` → filename stem
//!
//! The slug is used verbatim as the output path, separators included.

use crate::config::{ConfigError, SiteConfig};
use crate::frontmatter::{self, FrontMatterError};
use crate::naming::{self, SourceKind};
use crate::title;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LANG: &str = "en-CA";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Input file can't be found: {0}")]
    InputNotFound(PathBuf),
    #[error("Invalid file path: {0:?}")]
    InvalidPath(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid front matter in {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: FrontMatterError,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Options supplied by the caller for one document.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub input_path: PathBuf,
    pub stylesheet_url: Option<String>,
    pub lang: Option<String>,
}

impl GenerationOptions {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    pub fn with_stylesheet(mut self, url: impl Into<String>) -> Self {
        self.stylesheet_url = Some(url.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// Where the document's title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    FileStem,
    FrontMatter,
    /// First line followed by two blank lines in a `.txt` file.
    Detected,
}

#[derive(Debug, Clone)]
pub struct Document {
    input_path: PathBuf,
    /// Body text; front matter is removed by `load_metadata`.
    pub content: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub stylesheet_url: Option<String>,
    pub lang: String,
    /// `None` for extensions no body parser handles.
    pub kind: Option<SourceKind>,
    pub title_source: TitleSource,
}

impl Document {
    /// Read the source file and set filename-derived defaults.
    pub fn new(options: GenerationOptions) -> Result<Self, DocumentError> {
        let path = options.input_path;
        let stem = naming::file_stem(&path.to_string_lossy())
            .ok_or_else(|| DocumentError::InvalidPath(path.clone()))?;
        if !path.exists() {
            return Err(DocumentError::InputNotFound(path));
        }
        let content = fs::read_to_string(&path).map_err(|source| DocumentError::Read {
            path: path.clone(),
            source,
        })?;

        let lang = options
            .lang
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        Ok(Self {
            kind: SourceKind::from_path(&path),
            input_path: path,
            content,
            title: stem.clone(),
            slug: stem,
            description: String::new(),
            stylesheet_url: options.stylesheet_url,
            lang,
            title_source: TitleSource::FileStem,
        })
    }

    /// Build a document from a loaded config file.
    pub fn from_config(config: &SiteConfig) -> Result<Self, DocumentError> {
        let input_path = config.require_input()?;
        Self::new(GenerationOptions {
            input_path,
            stylesheet_url: config.stylesheet.clone(),
            lang: Some(config.lang.clone()),
        })
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Apply front matter and structural title detection.
    ///
    /// Replaces `content` with the front-matter body. Must be called once,
    /// before rendering.
    pub fn load_metadata(&mut self) -> Result<(), DocumentError> {
        let fm = frontmatter::split(&self.content).map_err(|source| DocumentError::Metadata {
            path: self.input_path.clone(),
            source,
        })?;

        if let Some(description) = fm.get("description") {
            self.description = description.to_string();
        }
        if let Some(slug) = fm.get("slug") {
            self.slug = slug.to_string();
        }
        if let Some(title) = fm.get("title") {
            self.title = title.to_string();
            self.title_source = TitleSource::FrontMatter;
        }
        self.content = fm.body;

        if self.kind == Some(SourceKind::PlainText) && self.title_source != TitleSource::FrontMatter
        {
            if let Some(detected) = title::detect_title(&self.content) {
                self.title = detected;
                self.title_source = TitleSource::Detected;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl Document {
    /// Document that never touched the filesystem, for renderer tests.
    pub(crate) fn in_memory(name: &str, kind: Option<SourceKind>, content: &str) -> Self {
        Self {
            input_path: PathBuf::from(name),
            content: content.to_string(),
            title: name.to_string(),
            slug: name.to_string(),
            description: String::new(),
            stylesheet_url: None,
            lang: DEFAULT_LANG.to_string(),
            kind,
            title_source: TitleSource::FileStem,
        }
    }
}
