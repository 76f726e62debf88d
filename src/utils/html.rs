//! HTML utility functions.
//!
//! Provides the small set of HTML helpers the page composer needs:
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `parse_attributes()` - component attribute parsing (`a="x" b={'y'} c`)
//! - `element()` - one-line element construction with an optional class

use std::borrow::Cow;
use std::fmt::Write;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape(s)
}

// =============================================================================
// Element Construction
// =============================================================================

/// Build `<tag class="...">text</tag>` with the text escaped.
///
/// An empty class omits the attribute.
pub fn element(tag: &str, class: &str, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + tag.len() * 2 + class.len() + 16);
    open(&mut out, tag, class);
    out.push_str(&escape(text));
    let _ = write!(out, "</{tag}>");
    out
}

/// Push an opening tag with an optional class.
pub fn open(out: &mut String, tag: &str, class: &str) {
    if class.is_empty() {
        let _ = write!(out, "<{tag}>");
    } else {
        let _ = write!(out, "<{tag} class=\"{}\">", escape_attr(class));
    }
}

// =============================================================================
// Attribute Parsing
// =============================================================================

/// Parse component attributes from the inside of an opening tag.
///
/// Accepts HTML-style values as well as the JSX forms used in MDX documents.
/// Brace-wrapped values have their braces and one level of quotes removed.
///
/// Input: `intent="warning" variant={'outline'} open`
/// Output: `vec![("intent", "warning"), ("variant", "outline"), ("open", "")]`
pub fn parse_attributes(s: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        // Read attribute name
        let mut name = String::new();
        name.push(c);
        while let Some(&next) = chars.peek() {
            if next == '=' || next.is_whitespace() {
                break;
            }
            name.push(next);
            chars.next();
        }

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        if chars.peek() != Some(&'=') {
            // Boolean attribute (no value)
            attrs.push((name, String::new()));
            continue;
        }
        chars.next(); // consume '='

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let value = match chars.peek().copied() {
            Some(quote @ ('"' | '\'')) => {
                chars.next();
                chars.by_ref().take_while(|&c| c != quote).collect()
            }
            Some('{') => {
                chars.next();
                let mut depth = 1usize;
                let mut raw = String::new();
                for c in chars.by_ref() {
                    match c {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                    raw.push(c);
                }
                unquote(raw.trim()).to_string()
            }
            _ => {
                let mut val = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    val.push(c);
                    chars.next();
                }
                val
            }
        };

        attrs.push((name, value));
    }

    attrs
}

/// Strip one level of matching quotes (`"`, `'` or backtick).
fn unquote(s: &str) -> &str {
    for quote in ['"', '\'', '`'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}
