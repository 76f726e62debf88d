//! Calls to action with analytics descriptors.
//!
//! A CTA is a plain anchor. Its analytics event rides along as `data-cta-*`
//! attributes and is reported by the embedded click listener, which never
//! blocks navigation.

use std::fmt::Write;

use crate::utils::html::{escape, escape_attr};

/// Event categories used across the site.
pub mod category {
    pub const CTA: &str = "CTA";
    pub const WORK: &str = "Work";
    pub const NAVIGATION: &str = "Navigation";
    pub const SERVICE: &str = "Service";
    pub const BOOK: &str = "Book";
    pub const RESEARCH: &str = "Research";
    pub const CONTACT: &str = "Contact";
    pub const SOCIAL: &str = "Social";
}

/// A click event reported to analytics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: &'static str,
    pub label: String,
    pub value: u32,
}

impl AnalyticsEvent {
    pub fn new(category: &'static str, label: impl Into<String>) -> Self {
        Self {
            category,
            label: label.into(),
            value: 1,
        }
    }
}

/// A link with an attached analytics event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub href: String,
    /// Visible text, escaped on render.
    pub text: String,
    pub event: AnalyticsEvent,
    /// Opens in a new tab.
    pub external: bool,
    pub class: &'static str,
}

impl CallToAction {
    pub fn new(href: impl Into<String>, text: impl Into<String>, event: AnalyticsEvent) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
            event,
            external: false,
            class: "btn btn-primary",
        }
    }

    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(192 + self.href.len() + self.text.len());
        let _ = write!(
            out,
            r#"<a href="{}" class="{}" data-cta-category="{}" data-cta-label="{}" data-cta-value="{}""#,
            escape_attr(&self.href),
            self.class,
            escape_attr(self.event.category),
            escape_attr(&self.event.label),
            self.event.value,
        );
        if self.external {
            out.push_str(r#" target="_blank" rel="noopener noreferrer""#);
        }
        let _ = write!(out, ">{}</a>", escape(&self.text));
        out
    }
}

/// Scheduling link, opened in a new tab.
pub fn book_call(scheduling_url: &str, text: impl Into<String>, label: impl Into<String>) -> CallToAction {
    CallToAction::new(scheduling_url, text, AnalyticsEvent::new(category::CTA, label)).external()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_carries_descriptor() {
        let cta = book_call("https://cal.com/x", "Book a Call", "Book Call - Hero Primary");
        let html = cta.render();
        assert!(html.starts_with(r#"<a href="https://cal.com/x""#));
        assert!(html.contains(r#"data-cta-category="CTA""#));
        assert!(html.contains(r#"data-cta-label="Book Call - Hero Primary""#));
        assert!(html.contains(r#"data-cta-value="1""#));
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(html.ends_with(">Book a Call</a>"));
        // Plain navigation only.
        assert!(!html.contains("onclick"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_internal_link() {
        let cta = CallToAction::new(
            "/work",
            "View Case Studies",
            AnalyticsEvent::new(category::CTA, "View Work - Hero Secondary"),
        )
        .class("btn btn-outline");
        let html = cta.render();
        assert!(html.contains(r#"class="btn btn-outline""#));
        assert!(!html.contains("target="));
    }

    #[test]
    fn test_escaping() {
        let cta = CallToAction::new(
            "/work/a?b=1&c=2",
            "<Read>",
            AnalyticsEvent::new(category::WORK, "Case Study - \"Quoted\""),
        );
        let html = cta.render();
        assert!(html.contains(r#"href="/work/a?b=1&amp;c=2""#));
        assert!(html.contains(r#"data-cta-label="Case Study - &quot;Quoted&quot;""#));
        assert!(html.contains("&lt;Read&gt;"));
    }
}
