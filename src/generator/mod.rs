//! Output post-processing and auxiliary files.
//!
//! - **Sitemap**: Search engine indexing (`sitemap.xml`)
//! - **Minify**: whitespace trimming for HTML pages and XML
//!
//! The sitemap is built from the same route list the pages were composed
//! from, so it never lists a page that was not written.

pub mod sitemap;

use std::borrow::Cow;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}

/// Minify an HTML page if enabled.
///
/// Trims each line and drops blank ones. Lines inside `<pre>` and
/// `<textarea>` are kept byte for byte.
pub fn minify_html(content: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len());
    let mut preserve = 0usize;
    for line in content.lines() {
        if preserve > 0 {
            out.push('\n');
            out.push_str(line);
        } else {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(trimmed);
        }
        preserve += count_opening(line);
        preserve = preserve.saturating_sub(count_closing(line));
    }
    Cow::Owned(out)
}

const PRESERVED: [&str; 2] = ["pre", "textarea"];

fn count_opening(line: &str) -> usize {
    PRESERVED
        .iter()
        .map(|tag| {
            line.matches(&format!("<{tag}>")).count() + line.matches(&format!("<{tag} ")).count()
        })
        .sum()
}

fn count_closing(line: &str) -> usize {
    PRESERVED
        .iter()
        .map(|tag| line.matches(&format!("</{tag}>")).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_xml_basic() {
        let xml = br#"<?xml version="1.0"?>
<root>
  <item>Hello</item>
</root>"#;
        let result = minify_xml(xml, true);

        assert_eq!(
            &*result,
            br#"<?xml version="1.0"?><root><item>Hello</item></root>"#
        );
    }

    #[test]
    fn test_minify_xml_removes_indentation() {
        let xml = b"  <tag>  content  </tag>  ";
        let result = minify_xml(xml, true);

        assert_eq!(&*result, b"<tag>  content  </tag>");
    }

    #[test]
    fn test_minify_xml_removes_empty_lines() {
        let xml = b"<root>\n\n  <item/>\n\n</root>";
        let result = minify_xml(xml, true);

        assert_eq!(&*result, b"<root><item/></root>");
    }

    #[test]
    fn test_minify_xml_enabled() {
        let xml = b"<root>\n  <item/>\n</root>";

        let minified = minify_xml(xml, true);
        let not_minified = minify_xml(xml, false);

        assert_eq!(&*minified, b"<root><item/></root>");
        assert_eq!(&*not_minified, xml.as_slice());
    }

    #[test]
    fn test_minify_html_trims_lines() {
        let html = "<body>\n    <main>\n\n      <p>Hi</p>\n    </main>\n</body>\n";
        assert_eq!(
            minify_html(html, true),
            "<body>\n<main>\n<p>Hi</p>\n</main>\n</body>"
        );
        assert_eq!(minify_html(html, false), html);
    }

    #[test]
    fn test_minify_html_keeps_pre() {
        let html = "<div>\n  <pre><code>fn main() {\n    let x = 1;\n\n}</code></pre>\n  <p>after</p>\n</div>";
        let out = minify_html(html, true);
        assert!(out.contains("fn main() {\n    let x = 1;\n\n}</code></pre>"));
        assert!(out.ends_with("<p>after</p>\n</div>"));
    }
}
