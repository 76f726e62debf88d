//! HTML for the sections that make up each page.
//!
//! Every function returns a fragment; the layout supplies `<main>` and the
//! surrounding chrome. Text from content files is always escaped here.
//! Rich-text bodies arrive already rendered.

mod chrome;
mod home;
mod info;
mod work;

pub use chrome::{footer, header, not_found};
pub use home::home;
pub use info::{about, contact, services, skills};
pub use work::{work_detail, work_index};

use std::fmt::Write;

use indexmap::IndexMap;

use crate::content::{CoreSkill, SkillSet, humanize_category};
use crate::utils::html::{element, escape, open};

/// Footer and not-found links: `(label, path)`.
const SITE_LINKS: [(&str, &str); 5] = [
    ("Case Studies", "/work"),
    ("Services", "/services"),
    ("Skills", "/skills"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

/// `<h1>` plus lead paragraph.
fn page_heading(out: &mut String, title: &str, lead: &str) {
    out.push_str(&element("h1", "page-title", title));
    if !lead.is_empty() {
        out.push_str(&element("p", "page-lead", lead));
    }
}

/// Open a `<section>` with its `<h2>` and lead. Caller closes it.
fn section_open(out: &mut String, class: &str, title: &str, lead: &str) {
    open(out, "section", class);
    out.push_str(r#"<div class="container">"#);
    out.push_str(&element("h2", "section-title", title));
    if !lead.is_empty() {
        out.push_str(&element("p", "section-lead", lead));
    }
}

fn section_close(out: &mut String) {
    out.push_str("</div></section>\n");
}

fn badge(out: &mut String, variant: &str, text: &str) {
    let _ = write!(
        out,
        r#"<span class="badge badge-{variant}">{}</span>"#,
        escape(text)
    );
}

/// A row of badges, nothing when empty.
fn badges<'s>(out: &mut String, variant: &str, items: impl IntoIterator<Item = &'s String>) {
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return;
    }
    out.push_str(r#"<div class="badges">"#);
    for item in items {
        badge(out, variant, item);
    }
    out.push_str("</div>");
}

/// The first `limit` badges, then a `+N{suffix}` badge for the rest.
fn badges_limited(out: &mut String, variant: &str, items: &[String], limit: usize, suffix: &str) {
    if items.is_empty() {
        return;
    }
    out.push_str(r#"<div class="badges">"#);
    for item in items.iter().take(limit) {
        badge(out, variant, item);
    }
    if items.len() > limit {
        badge(out, variant, &format!("+{}{suffix}", items.len() - limit));
    }
    out.push_str("</div>");
}

/// Bullet list with an optional `<h4>` label, nothing when empty.
fn bullets<'s>(out: &mut String, label: &str, items: impl IntoIterator<Item = &'s String>) {
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return;
    }
    if !label.is_empty() {
        out.push_str(&element("h4", "list-label", label));
    }
    out.push_str(r#"<ul class="bullets">"#);
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>");
}

/// Core skill cards and supporting categories.
///
/// `compact` trims each card the way the home page does: two outcomes,
/// three tools, three labels per supporting category.
fn skill_grid(out: &mut String, skills: &SkillSet, compact: bool) {
    core_cards(out, &skills.core, compact);
    supporting_cards(out, &skills.supporting, compact);
}

fn core_cards(out: &mut String, core: &[CoreSkill], compact: bool) {
    if core.is_empty() {
        return;
    }
    out.push_str(r#"<div class="grid grid-3">"#);
    for skill in core {
        out.push_str(r#"<div class="card skill-card"><div class="card-header">"#);
        out.push_str(&element("h3", "card-title", &skill.name));
        if !skill.one_liner.is_empty() {
            out.push_str(&element("p", "card-description", &skill.one_liner));
        }
        out.push_str(r#"</div><div class="card-content">"#);
        if compact {
            bullets(out, "Key Outcomes:", skill.outcomes.iter().take(2));
            if !skill.tools.is_empty() {
                out.push_str(&element("h4", "list-label", "Tools:"));
                badges_limited(out, "outline", &skill.tools, 3, " more");
            }
        } else {
            bullets(out, "Key Outcomes:", &skill.outcomes);
            if !skill.tools.is_empty() {
                out.push_str(&element("h4", "list-label", "Tools & Deliverables:"));
                badges(out, "outline", &skill.tools);
            }
        }
        out.push_str("</div></div>");
    }
    out.push_str("</div>");
}

fn supporting_cards(out: &mut String, supporting: &IndexMap<String, Vec<String>>, compact: bool) {
    if supporting.is_empty() {
        return;
    }
    out.push_str(&element("h3", "subsection-title", "Supporting Skills"));
    out.push_str(r#"<div class="grid grid-4">"#);
    for (category, labels) in supporting {
        out.push_str(r#"<div class="card"><div class="card-header">"#);
        out.push_str(&element("h4", "card-title", &humanize_category(category)));
        out.push_str(r#"</div><div class="card-content">"#);
        if compact {
            badges_limited(out, "secondary", labels, 3, "");
        } else {
            badges(out, "secondary", labels);
        }
        out.push_str("</div></div>");
    }
    out.push_str("</div>");
}

/// Non-empty parts joined with ` • `.
fn joined<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" \u{2022} ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges_limited() {
        let items: Vec<String> = ["a", "b", "c", "d", "e"].map(String::from).to_vec();
        let mut out = String::new();
        badges_limited(&mut out, "secondary", &items, 3, " more");
        assert_eq!(out.matches("badge-secondary").count(), 4);
        assert!(out.contains(">+2 more</span>"));
        assert!(!out.contains(">d<"));

        let mut out = String::new();
        badges_limited(&mut out, "outline", &items[..2], 3, " more");
        assert!(!out.contains('+'));

        let mut out = String::new();
        badges_limited(&mut out, "outline", &[], 3, " more");
        assert!(out.is_empty());
    }

    #[test]
    fn test_bullets_escape_and_skip_empty() {
        let mut out = String::new();
        bullets(&mut out, "Key Outcomes:", &["<50% cost".to_string()]);
        assert!(out.contains("<li>&lt;50% cost</li>"));

        let mut out = String::new();
        bullets(&mut out, "Key Outcomes:", &Vec::<String>::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_joined() {
        assert_eq!(joined(&["CTO", "Acme", "2023"]), "CTO \u{2022} Acme \u{2022} 2023");
        assert_eq!(joined(&["CTO", "", "2023"]), "CTO \u{2022} 2023");
        assert_eq!(joined(&["", ""]), "");
    }

    #[test]
    fn test_skill_grid_compact() {
        let mut skills = SkillSet::default();
        skills.core.push(CoreSkill {
            name: "Fractional CTO".into(),
            one_liner: "Leadership on demand".into(),
            outcomes: vec!["One".into(), "Two".into(), "Three".into()],
            tools: vec!["A".into(), "B".into(), "C".into(), "D".into()],
        });
        skills
            .supporting
            .insert("cloudDevOps".into(), vec!["AWS".into()]);

        let mut out = String::new();
        skill_grid(&mut out, &skills, true);
        assert!(out.contains("<li>Two</li>"));
        assert!(!out.contains("<li>Three</li>"));
        assert!(out.contains(">+1 more</span>"));
        assert!(out.contains("Cloud Dev Ops"));

        let mut out = String::new();
        skill_grid(&mut out, &skills, false);
        assert!(out.contains("<li>Three</li>"));
        assert!(out.contains("Tools &amp; Deliverables:"));
    }
}
