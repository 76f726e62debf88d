//! Component tag expansion for MDX bodies.
//!
//! A body is Markdown with embedded component tags:
//!
//! ```text
//! <Callout intent="success">
//!   **Result:** 50% faster hiring
//! </Callout>
//! ```
//!
//! Component names start with an ASCII capital, which keeps them apart from
//! raw HTML. Tags inside code spans and fenced blocks are left alone. The
//! body is split into a tree of [`Segment`]s; tags the registry does not
//! know, unclosed tags, and stray closing tags become escaped literal text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::html::{escape, parse_attributes};

static TAG_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([A-Z][A-Za-z0-9]*)").unwrap());
static TAG_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</([A-Z][A-Za-z0-9]*)[ \t\r\n]*>").unwrap());

/// Component attributes in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(Vec<(String, String)>);

impl Props {
    pub fn parse(src: &str) -> Self {
        Self(parse_attributes(src))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Extra classes from `className` (or `class`).
    pub fn class_name(&self) -> &str {
        self.get("className").or_else(|| self.get("class")).unwrap_or("")
    }
}

/// A piece of a parsed body.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Markdown source, literals already escaped.
    Text(String),
    Component {
        name: String,
        props: Props,
        children: Vec<Segment>,
    },
}

// ============================================================================
// Import / export stripping
// ============================================================================

/// Drop top-level `import` / `export` lines outside fenced code.
pub fn strip_module_lines(src: &str) -> Cow<'_, str> {
    let is_module_line = |line: &str| line.starts_with("import ") || line.starts_with("export ");
    if !src.lines().any(is_module_line) {
        return Cow::Borrowed(src);
    }

    let mut out = String::with_capacity(src.len());
    let mut fence: Option<Fence> = None;
    for line in src.split_inclusive('\n') {
        if let Some(marker) = Fence::open(line.trim_start()) {
            fence = Fence::toggle(fence, marker, line.trim_start());
            out.push_str(line);
            continue;
        }
        if fence.is_none() && is_module_line(line) {
            continue;
        }
        out.push_str(line);
    }
    Cow::Owned(out)
}

// ============================================================================
// Tokenizer
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Open { props: Props, self_closing: bool },
    Close,
    /// `<` + capital that never closes its tag.
    Stray,
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    start: usize,
    end: usize,
    name: String,
    kind: TokenKind,
}

/// A fenced code block opener: marker byte and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence(u8, usize);

impl Fence {
    fn open(line: &str) -> Option<Self> {
        let marker = *line.as_bytes().first()?;
        if marker != b'`' && marker != b'~' {
            return None;
        }
        let len = line.bytes().take_while(|&b| b == marker).count();
        (len >= 3).then_some(Self(marker, len))
    }

    /// Next fence state after a fence line.
    fn toggle(current: Option<Self>, marker: Self, line: &str) -> Option<Self> {
        match current {
            None => Some(marker),
            Some(open)
                if open.0 == marker.0
                    && marker.1 >= open.1
                    && line[marker.1..].trim().is_empty() =>
            {
                None
            }
            still_open => still_open,
        }
    }
}

/// Find every component tag outside code.
fn tokenize(src: &str) -> Vec<Token> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut fence: Option<Fence> = None;
    let mut line_start = true;
    let mut i = 0;

    while i < bytes.len() {
        if line_start {
            let line_end = src[i..].find('\n').map_or(bytes.len(), |n| i + n + 1);
            let line = src[i..line_end].trim_start();
            if let Some(marker) = Fence::open(line) {
                fence = Fence::toggle(fence, marker, line);
                i = line_end;
                continue;
            }
            if fence.is_some() {
                i = line_end;
                continue;
            }
            line_start = false;
        }

        match bytes[i] {
            b'\n' => {
                line_start = true;
                i += 1;
            }
            b'`' => i = skip_code_span(bytes, i),
            b'<' => match lex_tag(src, i) {
                Some(token) => {
                    i = token.end;
                    tokens.push(token);
                }
                None => i += 1,
            },
            _ => i += 1,
        }
    }
    tokens
}

/// Skip an inline code span opening at `i`. An unmatched run is plain text.
fn skip_code_span(bytes: &[u8], i: usize) -> usize {
    let run = bytes[i..].iter().take_while(|&&b| b == b'`').count();
    let mut j = i + run;
    while j < bytes.len() {
        if bytes[j] == b'`' {
            let close = bytes[j..].iter().take_while(|&&b| b == b'`').count();
            if close == run {
                return j + close;
            }
            j += close;
        } else {
            j += 1;
        }
    }
    i + run
}

fn lex_tag(src: &str, start: usize) -> Option<Token> {
    let rest = &src[start..];

    if let Some(caps) = TAG_CLOSE.captures(rest) {
        return Some(Token {
            start,
            end: start + caps[0].len(),
            name: caps[1].to_string(),
            kind: TokenKind::Close,
        });
    }

    let caps = TAG_OPEN.captures(rest)?;
    let name = caps[1].to_string();
    let attrs_start = caps[0].len();
    let stray = Token {
        start,
        end: start + 1,
        name: name.clone(),
        kind: TokenKind::Stray,
    };

    match rest[attrs_start..].chars().next() {
        Some(c) if c.is_whitespace() || c == '/' || c == '>' => {}
        _ => return Some(stray),
    }

    let Some(gt) = find_tag_end(&rest[attrs_start..]) else {
        return Some(stray);
    };
    let attrs = rest[attrs_start..attrs_start + gt].trim_end();
    let (attrs, self_closing) = match attrs.strip_suffix('/') {
        Some(attrs) => (attrs, true),
        None => (attrs, false),
    };

    Some(Token {
        start,
        end: start + attrs_start + gt + 1,
        name,
        kind: TokenKind::Open {
            props: Props::parse(attrs),
            self_closing,
        },
    })
}

/// Offset of the `>` ending an opening tag, skipping quoted and braced values.
fn find_tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut braces = 0usize;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '{') => braces += 1,
            (None, '}') => braces = braces.saturating_sub(1),
            (None, '>') if braces == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

// ============================================================================
// Tree building
// ============================================================================

/// Parse a body into segments. `is_known` decides which names expand.
pub fn parse(src: &str, is_known: impl Fn(&str) -> bool) -> Vec<Segment> {
    let tokens = tokenize(src);
    Builder {
        src,
        tokens: &tokens,
        is_known: &is_known,
    }
    .build(0, 0, src.len())
}

struct Builder<'a> {
    src: &'a str,
    tokens: &'a [Token],
    is_known: &'a dyn Fn(&str) -> bool,
}

impl Builder<'_> {
    /// Segments for `src[from..to]`; `idx` is the first token at or after
    /// `from`.
    fn build(&self, mut idx: usize, from: usize, to: usize) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut pos = from;

        while let Some(token) = self.tokens.get(idx).filter(|t| t.start < to) {
            text.push_str(&self.src[pos..token.start]);

            if let TokenKind::Open { props, self_closing } = &token.kind
                && (self.is_known)(&token.name)
            {
                if *self_closing {
                    flush(&mut segments, &mut text);
                    segments.push(Segment::Component {
                        name: token.name.clone(),
                        props: props.clone(),
                        children: Vec::new(),
                    });
                    pos = token.end;
                    idx += 1;
                    continue;
                }

                if let Some(close) = self.matching_close(idx, to) {
                    flush(&mut segments, &mut text);
                    let children = self.build(idx + 1, token.end, self.tokens[close].start);
                    segments.push(Segment::Component {
                        name: token.name.clone(),
                        props: props.clone(),
                        children,
                    });
                    pos = self.tokens[close].end;
                    idx = close + 1;
                    continue;
                }
            }

            text.push_str(&literal(&self.src[token.start..token.end]));
            pos = token.end;
            idx += 1;
        }

        text.push_str(&self.src[pos..to]);
        flush(&mut segments, &mut text);
        segments
    }

    /// Index of the close tag balancing the open tag at `open`.
    fn matching_close(&self, open: usize, to: usize) -> Option<usize> {
        let name = &self.tokens[open].name;
        let mut depth = 0usize;
        for (idx, token) in self.tokens.iter().enumerate().skip(open + 1) {
            if token.start >= to {
                break;
            }
            if &token.name != name {
                continue;
            }
            match token.kind {
                TokenKind::Open { self_closing: false, .. } => depth += 1,
                TokenKind::Close if depth == 0 => return Some(idx),
                TokenKind::Close => depth -= 1,
                _ => {}
            }
        }
        None
    }
}

fn flush(segments: &mut Vec<Segment>, text: &mut String) {
    if !text.trim().is_empty() {
        segments.push(Segment::Text(std::mem::take(text)));
    } else {
        text.clear();
    }
}

/// Tag text that should show up verbatim once rendered as Markdown.
fn literal(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len() + 8);
    for c in tag.chars() {
        if matches!(c, '\\' | '*' | '_' | '[' | ']' | '`') {
            out.push('\\');
            out.push(c);
        } else {
            out.push_str(&escape(c.encode_utf8(&mut [0; 4])));
        }
    }
    out
}
