//! HTML indentation.
//!
//! Maud renders compact markup with no whitespace between tags. Generated
//! pages are meant to be read and diffed, so the assembled document is
//! re-flowed here:
//!
//! ```text
//! <!DOCTYPE html>
//! <html lang="en-CA">
//!   <head>
//!     <meta charset="utf-8">
//!     <title>Lorem Ipsum</title>
//!   </head>
//!   <body>
//!     <h1>Lorem Ipsum</h1>
//!     <p>Some <em>text</em>.</p>
//!   </body>
//! </html>
//! ```
//!
//! Rules:
//! - one block element per line, two spaces per nesting level;
//! - an element whose children are only text and inline elements stays on
//!   one line, its content untouched;
//! - `pre`, `script`, `style`, `textarea` and comments are copied verbatim;
//! - whitespace-only text between block elements is dropped.
//!
//! Raw HTML inside markdown can be unbalanced. When the tag structure does
//! not nest properly the input is returned as it came in.

const INDENT: &str = "  ";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "br", "cite", "code", "data", "del", "dfn", "em", "i",
    "img", "input", "ins", "kbd", "label", "mark", "q", "s", "samp", "small", "span", "strong",
    "sub", "sup", "time", "u", "var", "wbr",
];

const VERBATIM_ELEMENTS: &[&str] = &["pre", "script", "style", "textarea"];

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Open { name: String, raw: &'a str, self_closing: bool },
    Close(String),
    Text(&'a str),
    /// Doctype, comment, or a whole verbatim element.
    Raw(&'a str),
}

#[derive(Debug)]
enum Node<'a> {
    Element(Element<'a>),
    Text(&'a str),
    Raw(&'a str),
}

#[derive(Debug)]
struct Element<'a> {
    name: String,
    open: &'a str,
    closed: bool,
    children: Vec<Node<'a>>,
}

fn tag_name(rest: &str) -> String {
    rest.chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Byte offset just past the `>` closing the tag that starts at `start`,
/// skipping over quoted attribute values.
fn tag_end(html: &str, start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (offset, b) in html.as_bytes()[start..].iter().enumerate() {
        match (quote, *b) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(*b),
            (None, b'>') => return Some(start + offset + 1),
            (None, _) => {}
        }
    }
    None
}

fn tokenize(html: &str) -> Option<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < html.len() {
        let rest = &html[pos..];
        if rest.starts_with("<!--") {
            let end = pos + rest.find("-->")? + 3;
            tokens.push(Token::Raw(&html[pos..end]));
            pos = end;
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            let end = pos + rest.find('>')? + 1;
            tokens.push(Token::Raw(&html[pos..end]));
            pos = end;
        } else if let Some(after) = rest.strip_prefix("</") {
            let end = pos + rest.find('>')? + 1;
            tokens.push(Token::Close(tag_name(after)));
            pos = end;
        } else if rest.starts_with('<')
            && rest[1..].starts_with(|c: char| c.is_ascii_alphabetic())
        {
            let name = tag_name(&rest[1..]);
            let end = tag_end(html, pos)?;
            let raw = &html[pos..end];
            if VERBATIM_ELEMENTS.contains(&name.as_str()) {
                let closing = format!("</{name}>");
                let close_at = end + html[end..].find(&closing)? + closing.len();
                tokens.push(Token::Raw(&html[pos..close_at]));
                pos = close_at;
            } else {
                let self_closing = raw.ends_with("/>");
                tokens.push(Token::Open {
                    name,
                    raw,
                    self_closing,
                });
                pos = end;
            }
        } else {
            // A stray '<' is text; it is a single byte so pos + 1 is a boundary
            let search_from = if rest.starts_with('<') { pos + 1 } else { pos };
            let end = html[search_from..]
                .find('<')
                .map(|i| search_from + i)
                .unwrap_or(html.len());
            tokens.push(Token::Text(&html[pos..end]));
            pos = end;
        }
    }
    Some(tokens)
}

fn build_tree(tokens: Vec<Token<'_>>) -> Option<Vec<Node<'_>>> {
    let mut roots: Vec<Node> = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    fn push<'a>(stack: &mut [Element<'a>], roots: &mut Vec<Node<'a>>, node: Node<'a>) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }

    for token in tokens {
        match token {
            Token::Open {
                name,
                raw,
                self_closing,
            } => {
                let is_void = self_closing || VOID_ELEMENTS.contains(&name.as_str());
                let element = Element {
                    name,
                    open: raw,
                    closed: !is_void,
                    children: Vec::new(),
                };
                if is_void {
                    push(&mut stack, &mut roots, Node::Element(element));
                } else {
                    stack.push(element);
                }
            }
            Token::Close(name) => {
                let element = stack.pop()?;
                if element.name != name {
                    return None;
                }
                push(&mut stack, &mut roots, Node::Element(element));
            }
            Token::Text(text) => push(&mut stack, &mut roots, Node::Text(text)),
            Token::Raw(raw) => push(&mut stack, &mut roots, Node::Raw(raw)),
        }
    }

    stack.is_empty().then_some(roots)
}

fn is_inline(node: &Node) -> bool {
    match node {
        Node::Text(_) => true,
        Node::Raw(_) => false,
        Node::Element(el) => {
            INLINE_ELEMENTS.contains(&el.name.as_str()) && el.children.iter().all(is_inline)
        }
    }
}

fn write_compact(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) | Node::Raw(text) => out.push_str(text),
        Node::Element(el) => {
            out.push_str(el.open);
            for child in &el.children {
                write_compact(child, out);
            }
            if el.closed {
                out.push_str("</");
                out.push_str(&el.name);
                out.push('>');
            }
        }
    }
}

fn write_line(depth: usize, content: &str, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(content);
    out.push('\n');
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Text(text) => {
            let text = text.trim();
            if !text.is_empty() {
                write_line(depth, text, out);
            }
        }
        Node::Raw(raw) => write_line(depth, raw, out),
        Node::Element(el) if el.children.iter().all(is_inline) => {
            let mut line = String::new();
            write_compact(node, &mut line);
            write_line(depth, &line, out);
        }
        Node::Element(el) => {
            write_line(depth, el.open, out);
            for child in &el.children {
                write_node(child, depth + 1, out);
            }
            write_line(depth, &format!("</{}>", el.name), out);
        }
    }
}

/// Re-indent compact HTML, one block element per line.
pub fn indent(html: &str) -> String {
    let Some(roots) = tokenize(html).and_then(build_tree) else {
        return html.to_string();
    };
    let mut out = String::with_capacity(html.len() + html.len() / 2);
    for node in &roots {
        write_node(node, 0, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_nested_blocks() {
        let html = "<!DOCTYPE html><html lang=\"en\"><head><title>T</title></head><body><p>x</p></body></html>";
        let expected = "\
<!DOCTYPE html>
<html lang=\"en\">
  <head>
    <title>T</title>
  </head>
  <body>
    <p>x</p>
  </body>
</html>
";
        assert_eq!(indent(html), expected);
    }

    #[test]
    fn inline_children_stay_on_one_line() {
        let html = "<div><p>Some <em>text</em> and <a href=\"/x\">a link</a>.</p></div>";
        assert_eq!(
            indent(html),
            "<div>\n  <p>Some <em>text</em> and <a href=\"/x\">a link</a>.</p>\n</div>\n"
        );
    }

    #[test]
    fn void_elements_on_own_lines() {
        let html = "<head><meta charset=\"utf-8\"><link rel=\"stylesheet\" href=\"a.css\"></head>";
        assert_eq!(
            indent(html),
            "<head>\n  <meta charset=\"utf-8\">\n  <link rel=\"stylesheet\" href=\"a.css\">\n</head>\n"
        );
    }

    #[test]
    fn whitespace_between_blocks_dropped() {
        let html = "<body><h1>A</h1>\n<p>B</p>\n</body>";
        assert_eq!(indent(html), "<body>\n  <h1>A</h1>\n  <p>B</p>\n</body>\n");
    }

    #[test]
    fn pre_is_verbatim() {
        let html = "<body><pre><code>fn main() {\n    x < y;\n}\n</code></pre></body>";
        assert_eq!(
            indent(html),
            "<body>\n  <pre><code>fn main() {\n    x < y;\n}\n</code></pre>\n</body>\n"
        );
    }

    #[test]
    fn quoted_gt_in_attribute() {
        let html = "<div><p><a title=\"a > b\">x</a></p></div>";
        assert_eq!(
            indent(html),
            "<div>\n  <p><a title=\"a > b\">x</a></p>\n</div>\n"
        );
    }

    #[test]
    fn empty_element_on_one_line() {
        assert_eq!(indent("<body><p></p></body>"), "<body>\n  <p></p>\n</body>\n");
    }

    #[test]
    fn multibyte_text_preserved() {
        let html = "<body><p>Café — naïve</p></body>";
        assert_eq!(indent(html), "<body>\n  <p>Café — naïve</p>\n</body>\n");
    }

    #[test]
    fn unbalanced_markup_returned_unchanged() {
        let html = "<body><div><p>x</p></body>";
        assert_eq!(indent(html), html);
    }

    #[test]
    fn is_deterministic() {
        let html = "<ul><li>a</li><li><p>b</p></li></ul>";
        assert_eq!(indent(html), indent(html));
        assert_eq!(
            indent(html),
            "<ul>\n  <li>a</li>\n  <li>\n    <p>b</p>\n  </li>\n</ul>\n"
        );
    }
}
