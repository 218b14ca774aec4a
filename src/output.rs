//! CLI output formatting for build runs.
//!
//! # Information-First Display
//!
//! Each generated page leads with its positional index and title; the source
//! file is shown as secondary context on an indented `Source:` line.
//!
//! ```text
//! 001 Lorem Ipsum → dist/Lorem Ipsum.html
//!     Source: content/Lorem Ipsum.txt
//! 002 About → dist/about.html
//!     Source: content/about.md
//! ✕ 003 content/dup.md
//!     Duplicate routes found! 'about' is already taken by another document (dist/about.html)
//!
//! Generated 2 pages, 1 failed
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::site::{BuildEvent, BuildReport};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format one per-document event as display lines.
pub fn format_build_event(event: &BuildEvent) -> Vec<String> {
    match event {
        BuildEvent::Written {
            index,
            title,
            source,
            destination,
            ..
        } => vec![
            format!(
                "{} {} → {}",
                format_index(*index),
                title,
                destination.display()
            ),
            format!("{}Source: {}", indent(1), source.display()),
        ],
        BuildEvent::Failed {
            index,
            source,
            error,
        } => vec![
            format!("✕ {} {}", format_index(*index), source.display()),
            format!("{}{}", indent(1), error),
        ],
    }
}

fn pages(n: usize) -> String {
    if n == 1 {
        "1 page".to_string()
    } else {
        format!("{n} pages")
    }
}

/// Format the end-of-run summary.
pub fn format_summary(report: &BuildReport, output_root: &Path) -> Vec<String> {
    let mut summary = format!("Generated {}", pages(report.written.len()));
    if !report.failures.is_empty() {
        summary.push_str(&format!(", {} failed", report.failures.len()));
    }
    vec![
        String::new(),
        summary,
        format!("Site written to {}", output_root.display()),
    ]
}

/// Print one event to stdout.
pub fn print_build_event(event: &BuildEvent) {
    for line in format_build_event(event) {
        println!("{}", line);
    }
}

/// Print the run summary to stdout.
pub fn print_summary(report: &BuildReport, output_root: &Path) {
    for line in format_summary(report, output_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
