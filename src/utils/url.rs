//! Site URL helpers.
//!
//! Route paths are always absolute (`/work/foo`) and never carry a trailing
//! slash except for the root. Absolute URLs join the configured base URL
//! with a route path without doubling slashes.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a value for use as one URL path segment.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Join a base URL and a route path.
///
/// ```ignore
/// absolute("https://x.dev/", "/work") -> "https://x.dev/work"
/// absolute("https://x.dev", "/")      -> "https://x.dev"
/// ```
pub fn absolute(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("hrtech-platform"), "hrtech-platform");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("ünïcode"), "%C3%BCn%C3%AFcode");
    }

    #[test]
    fn test_absolute() {
        assert_eq!(absolute("https://x.dev/", "/work"), "https://x.dev/work");
        assert_eq!(absolute("https://x.dev", "/"), "https://x.dev");
        assert_eq!(absolute("https://x.dev/base/", "/work/a"), "https://x.dev/base/work/a");
    }
}
