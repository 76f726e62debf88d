//! Rich-text rendering: Markdown bodies with embedded components.
//!
//! ```ignore
//! let html = Registry::case_study().render(&study.body);
//! ```
//!
//! Rendering never fails. Anything the registry cannot expand is shown as
//! text.

mod components;
pub mod markdown;
pub mod mdx;

use rustc_hash::FxHashMap;

pub use components::{Badge, Block, Callout, Component, Intent};
pub use markdown::MarkdownOptions;
pub use mdx::{Props, Segment};

/// Component name to implementation.
pub struct Registry {
    components: FxHashMap<&'static str, Box<dyn Component>>,
    markdown: MarkdownOptions,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            components: FxHashMap::default(),
            markdown: MarkdownOptions::all(),
        }
    }
}

impl Registry {
    /// Components available to case-study bodies.
    pub fn case_study() -> Self {
        Self::default().with("Callout", Callout)
    }

    /// Components available to narrative sections.
    pub fn sections() -> Self {
        Self::default()
            .with("Badge", Badge)
            .with("Card", Block::CARD)
            .with("CardHeader", Block::CARD_HEADER)
            .with("CardContent", Block::CARD_CONTENT)
            .with("Callout", Callout)
    }

    pub fn with(mut self, name: &'static str, component: impl Component + 'static) -> Self {
        self.components.insert(name, Box::new(component));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Render an MDX body to HTML.
    pub fn render(&self, body: &str) -> String {
        let body = mdx::strip_module_lines(body);
        let segments = mdx::parse(&body, |name| self.contains(name));
        self.render_segments(&segments, false)
    }

    fn render_segments(&self, segments: &[Segment], nested: bool) -> String {
        let mut out = String::new();
        for segment in segments {
            match segment {
                Segment::Text(text) if nested => {
                    out.push_str(&self.markdown.to_html(&markdown::dedent(text)));
                }
                Segment::Text(text) => out.push_str(&self.markdown.to_html(text)),
                Segment::Component {
                    name,
                    props,
                    children,
                } => {
                    let inner = self.render_segments(children, true);
                    // Only registered names become components.
                    if let Some(component) = self.components.get(name.as_str()) {
                        out.push_str(&component.render(props, &inner));
                        out.push('\n');
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_only() {
        let html = Registry::case_study().render("## Context\n\nWe *shipped*.");
        assert!(html.contains("<h2>Context</h2>"));
        assert!(html.contains("<em>shipped</em>"));
    }

    #[test]
    fn test_render_callout_in_case_study() {
        let body = "import { Callout } from '@/components/mdx/Callout'\n\n## Result\n\n<Callout intent=\"success\">\n    **50%** faster hiring\n</Callout>\n";
        let html = Registry::case_study().render(body);
        assert!(!html.contains("import"));
        assert!(html.contains("<h2>Result</h2>"));
        assert!(html.contains("callout-success"));
        // Indented children are not a code block.
        assert!(html.contains("<strong>50%</strong> faster hiring"));
        assert!(!html.contains("<pre>"));
    }

    #[test]
    fn test_unknown_component_renders_as_text() {
        let html = Registry::case_study().render("See <Chart data=\"x\" /> below.");
        assert!(html.contains(r#"See &lt;Chart data="x" /&gt; below."#));
        assert!(!html.contains("<Chart"));
    }

    #[test]
    fn test_bare_angle_bracket_in_body() {
        let html = Registry::case_study().render("Latency < 50ms");
        assert!(html.contains("<p>Latency &lt; 50ms</p>"));

        let html = Registry::case_study().render("<Callout intent=\"success\">Done</Callout>");
        assert!(html.contains("callout-success"));
        assert!(html.contains("Done"));
        assert!(!html.contains("&lt;Callout"));
    }

    #[test]
    fn test_case_study_registry_has_no_cards() {
        let html = Registry::case_study().render("<Card>\nbody\n</Card>");
        assert!(html.contains("&lt;Card&gt;"));
        assert!(!html.contains(r#"class="card""#));
    }

    #[test]
    fn test_sections_registry_nesting() {
        let body = "<Card>\n  <CardHeader>\n    ### Languages\n  </CardHeader>\n  <CardContent>\n    <Badge variant=\"secondary\">Rust</Badge>\n  </CardContent>\n</Card>\n";
        let html = Registry::sections().render(body);
        assert!(html.starts_with(r#"<div class="card">"#));
        assert!(html.contains(r#"<div class="card-header"><h3>Languages</h3></div>"#));
        assert!(html.contains(r#"<span class="badge badge-secondary">Rust</span>"#));
    }

    #[test]
    fn test_render_never_panics_on_garbage() {
        for body in ["<", "</", "<A", "<A>", "</A>", "`<A>", "```\n<A>", "<Callout {>", "\u{feff}<Callout>"] {
            let _ = Registry::sections().render(body);
        }
    }
}
