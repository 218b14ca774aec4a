//! Front-matter extraction.
//!
//! A document may open with a metadata block delimited by lines of dashes:
//!
//! ```text
//! ---
//! title: "A Better Title"
//! slug: essays/better-title
//! description: Shown in search results and link previews
//! ---
//! Body text starts here.
//! ```
//!
//! This is intentionally not a YAML parser. Only flat `key: value` pairs are
//! read; nested values, lists and indented continuation lines belong to keys
//! the generator never looks at and are skipped. The generator itself only
//! consumes `title`, `slug` and `description`.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("front matter is not closed by a '---' line")]
    Unterminated,
    #[error("malformed front matter on line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },
}

/// Result of splitting a source file into metadata and body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub metadata: BTreeMap<String, String>,
    pub body: String,
}

impl FrontMatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

fn is_delimiter(line: &str) -> bool {
    let trimmed = line.trim_end();
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Split raw file content into front matter and body.
///
/// Content that does not start with a delimiter line is returned untouched
/// as the body with empty metadata.
pub fn split(raw: &str) -> Result<FrontMatter, FrontMatterError> {
    let mut lines = raw.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok(FrontMatter::default());
    };
    if !is_delimiter(first) {
        return Ok(FrontMatter {
            metadata: BTreeMap::new(),
            body: raw.to_string(),
        });
    }

    let mut consumed = first.len();
    let mut block = Vec::new();
    let mut closed = false;
    for line in lines {
        consumed += line.len();
        if is_delimiter(line) {
            closed = true;
            break;
        }
        block.push(line);
    }
    if !closed {
        return Err(FrontMatterError::Unterminated);
    }

    let mut metadata = BTreeMap::new();
    for (idx, line) in block.into_iter().enumerate() {
        let text = line.trim_end_matches(['\n', '\r']);
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        // Continuations of a nested or list value
        if text.starts_with([' ', '\t']) || trimmed.starts_with("- ") || trimmed == "-" {
            continue;
        }

        let Some((key, value)) = text.split_once(':') else {
            return Err(FrontMatterError::MalformedLine {
                // +2: one for the opening delimiter, one for 1-based numbering
                line: idx + 2,
                text: text.to_string(),
            });
        };
        let value = unquote(value.trim());
        if !value.is_empty() {
            metadata.insert(key.trim().to_string(), value.to_string());
        }
    }

    let body = raw[consumed..].trim_start_matches(['\n', '\r']).to_string();
    Ok(FrontMatter { metadata, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_front_matter_returns_input_unmodified() {
        let raw = "Title\n\n\nBody.\n";
        let fm = split(raw).unwrap();
        assert!(fm.metadata.is_empty());
        assert_eq!(fm.body, raw);
    }

    #[test]
    fn empty_input() {
        let fm = split("").unwrap();
        assert!(fm.metadata.is_empty());
        assert_eq!(fm.body, "");
    }

    #[test]
    fn reads_recognized_keys() {
        let raw = "---\ntitle: Hello World\nslug: blog/hello\ndescription: A greeting\n---\nBody text\n";
        let fm = split(raw).unwrap();
        assert_eq!(fm.get("title"), Some("Hello World"));
        assert_eq!(fm.get("slug"), Some("blog/hello"));
        assert_eq!(fm.get("description"), Some("A greeting"));
        assert_eq!(fm.body, "Body text\n");
    }

    #[test]
    fn strips_matching_quotes() {
        let raw = "---\ntitle: \"Quoted: yes\"\ndescription: 'single'\n---\n";
        let fm = split(raw).unwrap();
        assert_eq!(fm.get("title"), Some("Quoted: yes"));
        assert_eq!(fm.get("description"), Some("single"));
    }

    #[test]
    fn value_may_contain_colons() {
        let raw = "---\ndescription: time: 10:30\n---\n";
        let fm = split(raw).unwrap();
        assert_eq!(fm.get("description"), Some("time: 10:30"));
    }

    #[test]
    fn leading_blank_lines_removed_from_body() {
        let raw = "---\ntitle: T\n---\n\n\nFirst paragraph.";
        let fm = split(raw).unwrap();
        assert_eq!(fm.body, "First paragraph.");
    }

    #[test]
    fn ignores_nested_and_list_values() {
        let raw = "---\ntags:\n  - rust\n  - web\nauthor:\n  name: Someone\ntitle: Kept\n---\nbody";
        let fm = split(raw).unwrap();
        assert_eq!(fm.get("title"), Some("Kept"));
        assert_eq!(fm.get("tags"), None);
        assert_eq!(fm.get("name"), None);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let raw = "---\n# a comment\n\nslug: here\n---\n";
        let fm = split(raw).unwrap();
        assert_eq!(fm.get("slug"), Some("here"));
        assert_eq!(fm.metadata.len(), 1);
    }

    #[test]
    fn empty_value_is_absent() {
        let raw = "---\ntitle:\n---\nbody";
        let fm = split(raw).unwrap();
        assert_eq!(fm.get("title"), None);
    }

    #[test]
    fn longer_delimiters_and_crlf() {
        let raw = "-----\r\ntitle: Windows\r\n-----\r\nbody\r\n";
        let fm = split(raw).unwrap();
        assert_eq!(fm.get("title"), Some("Windows"));
        assert_eq!(fm.body, "body\r\n");
    }

    #[test]
    fn unterminated_block_is_error() {
        let result = split("---\ntitle: Never closed\nbody text");
        assert!(matches!(result, Err(FrontMatterError::Unterminated)));
    }

    #[test]
    fn opening_rule_followed_by_prose_is_unterminated() {
        let result = split("---\nA horizontal rule, then prose\n\nwith no closing line.\n");
        assert!(matches!(result, Err(FrontMatterError::Unterminated)));
    }

    #[test]
    fn line_without_colon_is_error() {
        let result = split("---\ntitle: ok\nnot a pair\n---\n");
        match result {
            Err(FrontMatterError::MalformedLine { line, text }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "not a pair");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn dashes_later_in_file_are_not_front_matter() {
        let raw = "Intro\n---\ntitle: nope\n---\n";
        let fm = split(raw).unwrap();
        assert!(fm.metadata.is_empty());
        assert_eq!(fm.body, raw);
    }
}
