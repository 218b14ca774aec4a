//! HTML page assembly.
//!
//! Wraps a document's body fragment into a complete, standalone page:
//!
//! ```text
//! <!DOCTYPE html>
//! <html lang="{lang}">
//!   <head>
//!     <meta charset="utf-8">
//!     <meta name="viewport" ...>
//!     <meta name="description" content="{description}">
//!     <meta property="og:description" content="{description}">
//!     <title>{title}</title>
//!     <link rel="stylesheet" href="{stylesheet}">   (only when set)
//!   </head>
//!   <body>
//!     <h1>{title}</h1>
//!     ...body fragment...
//!   </body>
//! </html>
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping; only the
//! markdown renderer's output is injected pre-escaped. The compact markup
//! maud produces is re-indented by [`crate::pretty::indent`].

use crate::body::render_body;
use crate::document::Document;
use crate::pretty;
use maud::{DOCTYPE, Markup, html};

/// Renders the `<head>` metadata for a document
fn head(doc: &Document) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="description" content=(doc.description);
            meta property="og:description" content=(doc.description);
            title { (doc.title) }
            @if let Some(href) = &doc.stylesheet_url {
                link rel="stylesheet" href=(href);
            }
        }
    }
}

/// Renders the base HTML document structure
fn base_document(doc: &Document, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(doc.lang) {
            (head(doc))
            body {
                h1 { (doc.title) }
                (content)
            }
        }
    }
}

/// Render a document as a complete, indented HTML page.
pub fn render_document(doc: &Document) -> String {
    let markup = base_document(doc, render_body(doc));
    pretty::indent(&markup.into_string())
}

// ============================================================================
// Tests
// ============================================================================
