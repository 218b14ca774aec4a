//! # Silkie
//!
//! A small static site generator: every `.txt` or `.md` file becomes one
//! standalone HTML page.
//!
//! # Pipeline
//!
//! Each source document goes through the same steps, one document at a time:
//!
//! ```text
//! 1. Load      file        →  Document   (front matter, title, slug)
//! 2. Parse     content     →  fragment   (paragraphs or markdown)
//! 3. Assemble  fragment    →  page       (head metadata, title heading)
//! 4. Route     slug        →  dist/<slug>.html (collision-checked write)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Filename stems and supported extensions |
//! | [`frontmatter`] | `---` delimited metadata block extraction |
//! | [`title`] | Structural title detection for plain text |
//! | [`document`] | The per-file [`document::Document`] record |
//! | [`body`] | Plain-text and markdown body parsers |
//! | [`generate`] | Page assembly with Maud |
//! | [`pretty`] | Indentation of the assembled HTML |
//! | [`route`] | Output paths and route collision detection |
//! | [`scan`] | Source discovery for directory builds |
//! | [`site`] | Build runs, failure policy, progress events |
//! | [`config`] | JSON/TOML config files |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Slugs Are Paths
//!
//! A slug from front matter is used verbatim as the output path, so
//! `slug: essays/first` produces `dist/essays/first.html`. No sanitization
//! happens; instead the router refuses to write two pages to the same place
//! within a run.
//!
//! ## Markdown Is Delegated
//!
//! Markdown is rendered by pulldown-cmark, a CommonMark implementation. Plain
//! text only knows paragraphs and never interprets markup.
//!
//! ## No Global State
//!
//! The output root travels inside [`site::BuildOptions`] and
//! [`route::OutputRouter`]; two builds in one process never share state.

pub mod body;
pub mod config;
pub mod document;
pub mod frontmatter;
pub mod generate;
pub mod naming;
pub mod output;
pub mod pretty;
pub mod route;
pub mod scan;
pub mod site;
pub mod title;

#[cfg(test)]
pub(crate) mod test_helpers;
