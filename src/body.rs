//! Body parsers: document content → HTML fragment.
//!
//! - **Plain text**: paragraphs separated by a blank line, each emitted as an
//!   escaped `<p>`. No inline markup.
//! - **Markdown**: rendered by pulldown-cmark with the GFM extensions
//!   (tables, strikethrough, task lists) plus footnotes, and injected as-is.
//!
//! Neither parser emits the page's title heading; the assembler in
//! [`crate::generate`] owns that.

use crate::document::{Document, TitleSource};
use crate::naming::SourceKind;
use crate::title::strip_detected_title;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};

/// Render the body fragment for a document based on its kind.
///
/// Unsupported kinds render nothing.
pub fn render_body(doc: &Document) -> Markup {
    match doc.kind {
        Some(SourceKind::PlainText) => {
            let text = if doc.title_source == TitleSource::Detected {
                strip_detected_title(&doc.content, &doc.title)
            } else {
                doc.content.as_str()
            };
            plain_text(text)
        }
        Some(SourceKind::Markdown) => markdown(&doc.content),
        None => html! {},
    }
}

/// Split text into its blank-line separated paragraphs.
///
/// The text is trimmed first; paragraphs themselves keep their raw text,
/// single line breaks included. Blank text has no paragraphs.
pub fn paragraphs(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split("\n\n").collect()
}

/// Render plain text as a sequence of `<p>` elements.
pub fn plain_text(text: &str) -> Markup {
    html! {
        @for paragraph in paragraphs(text) {
            p { (paragraph) }
        }
    }
}

/// Render markdown to HTML.
pub fn markdown(content: &str) -> Markup {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let source = content.trim();
    let parser = Parser::new_ext(source, options);
    let mut body_html = String::with_capacity(source.len() * 2);
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}
