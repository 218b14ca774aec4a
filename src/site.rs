//! Build runs.
//!
//! A run turns one input, either a single source file or a directory of them,
//! into pages under one output root. Documents are processed strictly one
//! after another:
//!
//! ```text
//! read → front matter / title → body → assemble → route + write → event
//! ```
//!
//! ## Failures
//!
//! Every failure is a typed error. A single-file run returns it directly.
//! A directory run follows its [`FailurePolicy`]: `Abort` stops at the first
//! failing document, `Continue` records the failure, reports it as a
//! [`BuildEvent::Failed`], and moves on to the next file.
//!
//! ## Events
//!
//! Callers that want progress output pass a channel sender; one
//! [`BuildEvent`] is sent per document as soon as it is finished.

use crate::config::ConfigError;
use crate::document::{Document, DocumentError, GenerationOptions};
use crate::generate::render_document;
use crate::naming;
use crate::route::{OutputRouter, RouteError};
use crate::scan::{self, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Unsupported file type: {0} (expected .txt or .md)")]
    UnsupportedInput(PathBuf),
    #[error("Refusing to clean {output}: it contains the input {input}")]
    CleanWouldRemoveInput { input: PathBuf, output: PathBuf },
    #[error("Failed to prepare output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What a directory run does when one document fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure.
    #[default]
    Abort,
    /// Skip the failed document and report all failures at the end.
    Continue,
}

/// Fully resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub input: PathBuf,
    pub output_root: PathBuf,
    pub stylesheet_url: Option<String>,
    pub lang: Option<String>,
    pub policy: FailurePolicy,
}

impl BuildOptions {
    pub fn new(input: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_root: output_root.into(),
            stylesheet_url: None,
            lang: None,
            policy: FailurePolicy::default(),
        }
    }

    fn generation_options(&self, input_path: &Path) -> GenerationOptions {
        GenerationOptions {
            input_path: input_path.to_path_buf(),
            stylesheet_url: self.stylesheet_url.clone(),
            lang: self.lang.clone(),
        }
    }
}

/// Per-document progress, sent as each document finishes.
#[derive(Debug, Clone)]
pub enum BuildEvent {
    Written {
        /// 1-based position among the run's documents
        index: usize,
        title: String,
        slug: String,
        source: PathBuf,
        destination: PathBuf,
    },
    Failed {
        index: usize,
        source: PathBuf,
        error: String,
    },
}

/// A document that failed in a `Continue` run.
#[derive(Debug)]
pub struct Failure {
    pub source: PathBuf,
    pub error: BuildError,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    /// Written pages in build order.
    pub written: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Remove and recreate the output directory.
///
/// Refuses when `input` lives inside `root`, since cleaning would delete the
/// sources about to be built.
pub fn clean_output(root: &Path, input: &Path) -> Result<(), BuildError> {
    let to_err = |source: std::io::Error| BuildError::OutputDir {
        path: root.to_path_buf(),
        source,
    };
    if root.exists() {
        let root_abs = fs::canonicalize(root).map_err(to_err)?;
        if let Ok(input_abs) = fs::canonicalize(input) {
            if input_abs.starts_with(&root_abs) {
                return Err(BuildError::CleanWouldRemoveInput {
                    input: input.to_path_buf(),
                    output: root.to_path_buf(),
                });
            }
        }
        fs::remove_dir_all(root).map_err(to_err)?;
    }
    fs::create_dir_all(root).map_err(to_err)
}

/// Render one source file and write it through the router.
pub fn generate_page(
    options: GenerationOptions,
    router: &mut OutputRouter,
) -> Result<(Document, PathBuf), BuildError> {
    let mut doc = Document::new(options)?;
    doc.load_metadata()?;
    let html = render_document(&doc);
    let destination = router.write(&doc.slug, &html)?;
    Ok((doc, destination))
}

fn send(events: &Option<Sender<BuildEvent>>, event: BuildEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is listening
        let _ = tx.send(event);
    }
}

/// Run a build.
///
/// Returns `Err` for anything that stops the run. With
/// [`FailurePolicy::Continue`] the report may still carry failures.
pub fn build(
    options: &BuildOptions,
    events: Option<Sender<BuildEvent>>,
) -> Result<BuildReport, BuildError> {
    if !options.input.exists() {
        return Err(DocumentError::InputNotFound(options.input.clone()).into());
    }

    let sources = if options.input.is_dir() {
        scan::collect_sources(&options.input)?
    } else if naming::is_supported(&options.input) {
        vec![options.input.clone()]
    } else {
        return Err(BuildError::UnsupportedInput(options.input.clone()));
    };

    let mut router = OutputRouter::new(&options.output_root);
    let mut report = BuildReport::default();

    for (i, source) in sources.into_iter().enumerate() {
        let index = i + 1;
        match generate_page(options.generation_options(&source), &mut router) {
            Ok((doc, destination)) => {
                send(
                    &events,
                    BuildEvent::Written {
                        index,
                        title: doc.title,
                        slug: doc.slug,
                        source: source.clone(),
                        destination: destination.clone(),
                    },
                );
                report.written.push(destination);
            }
            Err(error) => {
                if options.policy == FailurePolicy::Abort {
                    return Err(error);
                }
                send(
                    &events,
                    BuildEvent::Failed {
                        index,
                        source: source.clone(),
                        error: error.to_string(),
                    },
                );
                report.failures.push(Failure { source, error });
            }
        }
    }

    Ok(report)
}
