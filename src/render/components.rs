//! Built-in components.

use std::fmt::Write;

use super::markdown::unwrap_paragraph;
use super::mdx::Props;
use crate::utils::html::escape_attr;

/// Renders one component occurrence.
///
/// `children` is already-rendered HTML.
pub trait Component: Send + Sync {
    fn render(&self, props: &Props, children: &str) -> String;
}

fn classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

// ============================================================================
// Callout
// ============================================================================

/// Callout box intent. Unknown intents read as `Info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Intent {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

impl Intent {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Icon identifier and its text fallback.
    pub const fn icon(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("check-circle", "\u{2714}"),
            Self::Warning => ("alert-triangle", "\u{26A0}"),
            Self::Error => ("alert-circle", "\u{2716}"),
            Self::Info => ("info", "\u{2139}"),
        }
    }

    pub const fn style(self) -> &'static str {
        match self {
            Self::Success => "bg-green-50 border-green-200 text-green-800",
            Self::Warning => "bg-yellow-50 border-yellow-200 text-yellow-800",
            Self::Error => "bg-red-50 border-red-200 text-red-800",
            Self::Info => "bg-blue-50 border-blue-200 text-blue-800",
        }
    }
}

pub struct Callout;

impl Component for Callout {
    fn render(&self, props: &Props, children: &str) -> String {
        let intent = Intent::parse(props.get("intent").unwrap_or_default());
        let (icon, glyph) = intent.icon();

        let mut out = String::with_capacity(children.len() + 256);
        let _ = write!(
            out,
            r#"<div class="callout callout-{} border-l-4 p-4 my-6 rounded-r-md {}" role="note">"#,
            intent.name(),
            intent.style()
        );
        let _ = write!(
            out,
            r#"<div class="flex items-start"><span class="callout-icon" data-icon="{icon}" aria-hidden="true">{glyph}</span>"#
        );
        let _ = write!(
            out,
            r#"<div class="prose prose-sm max-w-none">{children}</div></div></div>"#
        );
        out
    }
}

// ============================================================================
// Badge / Card
// ============================================================================

/// Inline label. `variant` is `default`, `secondary` or `outline`.
pub struct Badge;

impl Component for Badge {
    fn render(&self, props: &Props, children: &str) -> String {
        let variant = match props.get("variant") {
            Some(v @ ("secondary" | "outline")) => v,
            _ => "default",
        };
        let class = classes(&format!("badge badge-{variant}"), props.class_name());
        format!(
            r#"<span class="{}">{}</span>"#,
            escape_attr(&class),
            unwrap_paragraph(children)
        )
    }
}

/// A block wrapper with a fixed base class.
pub struct Block {
    base: &'static str,
}

impl Block {
    pub const CARD: Self = Self { base: "card" };
    pub const CARD_HEADER: Self = Self { base: "card-header" };
    pub const CARD_CONTENT: Self = Self { base: "card-content" };
}

impl Component for Block {
    fn render(&self, props: &Props, children: &str) -> String {
        let class = classes(self.base, props.class_name());
        format!(r#"<div class="{}">{}</div>"#, escape_attr(&class), children.trim())
    }
}
