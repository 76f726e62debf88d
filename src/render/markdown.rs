//! Markdown to HTML with pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

/// Options for markdown conversion
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Enable heading attributes extension (e.g., `# Heading {#custom-id}`)
    pub heading_attributes: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            heading_attributes: true,
        }
    }

    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.heading_attributes {
            opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        opts
    }

    /// Render `text` to HTML.
    pub fn to_html(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.to_pulldown_options());
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Strip a single `<p>` wrapper, for components that render inline.
pub fn unwrap_paragraph(html: &str) -> &str {
    let trimmed = html.trim();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner,
        _ => trimmed,
    }
}

/// Remove the indentation shared by every non-blank line.
///
/// Component children are usually indented inside their tags; left alone,
/// four spaces would turn them into code blocks.
pub fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    if indent == 0 {
        return text.to_string();
    }

    text.lines()
        .map(|line| line.get(indent..).unwrap_or_else(|| line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_extensions() {
        let opts = MarkdownOptions::all();
        let html = opts.to_html("# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_default_options_are_plain() {
        let html = MarkdownOptions::default().to_html("~~kept~~");
        assert!(!html.contains("<del>"));
    }

    #[test]
    fn test_unwrap_paragraph() {
        assert_eq!(unwrap_paragraph("<p>Rust</p>\n"), "Rust");
        assert_eq!(unwrap_paragraph("<p>a</p>\n<p>b</p>\n"), "<p>a</p>\n<p>b</p>");
        assert_eq!(unwrap_paragraph("<ul><li>x</li></ul>"), "<ul><li>x</li></ul>");
    }

    #[test]
    fn test_dedent() {
        assert_eq!(dedent("    **Result:** done\n    next"), "**Result:** done\nnext");
        assert_eq!(dedent("  a\n\n    b"), "a\n\n  b");
        assert_eq!(dedent("flush\n  indented"), "flush\n  indented");
    }
}
