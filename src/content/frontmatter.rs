//! Front matter extraction for content documents.
//!
//! A document may open with a YAML block fenced by `---` lines or a TOML
//! block fenced by `+++` lines. The block is flattened into a [`Meta`] map of
//! scalars and scalar lists; everything after the closing fence is the body.
//!
//! Extraction never fails. A missing fence, an unterminated block, a syntax
//! error, or a block that is not a key/value mapping all yield empty
//! metadata with the complete original text as body. Field defaults are the
//! caller's business.

use serde_json::Value;

use super::JsonMap;
use crate::debug;

/// Flat document metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meta(JsonMap);

impl Meta {
    pub fn new(map: JsonMap) -> Self {
        Self(map)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String field; numbers and booleans are stringified, anything else is
    /// empty.
    pub fn text(&self, key: &str) -> String {
        self.get(key).and_then(scalar_to_string).unwrap_or_default()
    }

    /// Like [`Meta::text`], but `None` when the field is absent or empty.
    pub fn opt_text(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|s| !s.is_empty())
    }

    /// Sequence field. A lone scalar reads as a one-item list.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(value) => scalar_to_string(value).into_iter().collect(),
            None => Vec::new(),
        }
    }
}

/// A document split into metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter<'a> {
    pub meta: Meta,
    pub body: &'a str,
}

/// Block syntax detected from the opening fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fence {
    Yaml,
    Toml,
}

impl Fence {
    const fn marker(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split a document into front matter and body.
pub fn parse(content: &str) -> FrontMatter<'_> {
    let whole = || FrontMatter {
        meta: Meta::default(),
        body: content,
    };

    let Some((fence, block, body)) = detect(content) else {
        return whole();
    };

    let parsed = match fence {
        Fence::Yaml => parse_yaml(block),
        Fence::Toml => parse_toml(block),
    };

    match parsed {
        Some(map) => FrontMatter {
            meta: Meta::new(flatten(map)),
            body,
        },
        None => whole(),
    }
}

/// Locate the fenced block. Returns `(fence, block, body)`.
///
/// Fences must sit on their own line; the closing fence may be followed by
/// trailing whitespace.
fn detect(content: &str) -> Option<(Fence, &str, &str)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    let fence = if trimmed.starts_with("---") {
        Fence::Yaml
    } else if trimmed.starts_with("+++") {
        Fence::Toml
    } else {
        return None;
    };

    let first_line_end = trimmed.find('\n')?;
    if trimmed[..first_line_end].trim_end() != fence.marker() {
        return None;
    }

    let rest = &trimmed[first_line_end + 1..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == fence.marker() {
            let block = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Some((fence, block, body));
        }
        offset += line.len();
    }

    None
}

fn parse_yaml(block: &str) -> Option<JsonMap> {
    if block.trim().is_empty() {
        return Some(JsonMap::new());
    }
    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Object(map)) => Some(map),
        Ok(Value::Null) => Some(JsonMap::new()),
        Ok(_) => {
            debug!("content"; "front matter is not a key/value block, treating as body");
            None
        }
        Err(e) => {
            debug!("content"; "invalid YAML front matter: {}", e);
            None
        }
    }
}

fn parse_toml(block: &str) -> Option<JsonMap> {
    match toml::from_str::<toml::Table>(block) {
        Ok(table) => Some(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
        Err(e) => {
            debug!("content"; "invalid TOML front matter: {}", e);
            None
        }
    }
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

/// Keep scalars and scalar sequences; drop nested structures.
fn flatten(map: JsonMap) -> JsonMap {
    map.into_iter()
        .filter(|(key, value)| {
            let flat = match value {
                Value::Object(_) => false,
                Value::Array(items) => items.iter().all(is_scalar),
                _ => true,
            };
            if !flat {
                debug!("content"; "dropping nested front matter field `{}`", key);
            }
            flat
        })
        .collect()
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
