//! Services, skills, about and contact bodies.

use std::fmt::Write;

use super::{badges, core_cards, page_heading, skill_grid, supporting_cards};
use crate::content::{ContentStore, ProfileFacts};
use crate::page::cta::{AnalyticsEvent, CallToAction, book_call, category};
use crate::utils::html::{element, escape, escape_attr};

fn open_page(out: &mut String, class: &str) {
    let _ = write!(out, r#"<section class="section {class}"><div class="container">"#);
}

fn close_page(out: &mut String) {
    out.push_str("</div></section>");
}

pub fn services(store: &ContentStore) -> String {
    let mut out = String::with_capacity(8 * 1024);
    open_page(&mut out, "services-page");
    page_heading(
        &mut out,
        "Services",
        "Fractional technology leadership and hands-on architecture for teams \
         that need senior judgement without a full-time hire.",
    );
    badges(&mut out, "secondary", &store.skills.keywords);

    if !store.skills.core.is_empty() {
        out.push_str(&element("h2", "section-title", "Core Services"));
        core_cards(&mut out, &store.skills.core, false);
    }
    supporting_cards(&mut out, &store.skills.supporting, false);
    close_page(&mut out);
    out
}

/// `narrative` is the rendered `sections/skills` document, if any.
pub fn skills(store: &ContentStore, narrative: Option<&str>) -> String {
    let mut out = String::with_capacity(8 * 1024);
    open_page(&mut out, "skills-page");
    match narrative {
        Some(html) => {
            let _ = write!(out, r#"<div class="prose">{html}</div>"#);
        }
        None => {
            page_heading(
                &mut out,
                "Skills & Expertise",
                "Building outcomes, not artifacts.",
            );
            skill_grid(&mut out, &store.skills, false);
        }
    }
    close_page(&mut out);
    out
}

/// `narrative` is the rendered `sections/about` document, if any.
pub fn about(profile: &ProfileFacts, narrative: Option<&str>) -> String {
    let mut out = String::with_capacity(4 * 1024);
    open_page(&mut out, "about-page");
    page_heading(&mut out, "About", &profile.summary);

    let facts = [
        ("Role", profile.title.as_str()),
        ("Location", profile.location.as_str()),
        ("Experience", profile.proof.years.as_str()),
        ("Reach", profile.proof.countries.as_str()),
        ("Sectors", profile.proof.sectors.as_str()),
    ];
    if facts.iter().any(|(_, value)| !value.is_empty()) {
        out.push_str(r#"<dl class="facts">"#);
        for (label, value) in facts {
            if !value.is_empty() {
                let _ = write!(out, "<dt>{label}</dt><dd>{}</dd>", escape(value));
            }
        }
        out.push_str("</dl>");
    }

    if let Some(html) = narrative {
        let _ = write!(out, r#"<div class="prose">{html}</div>"#);
    }
    close_page(&mut out);
    out
}

pub fn contact(store: &ContentStore, scheduling_url: &str) -> String {
    let profile = &store.profile;
    let mut out = String::with_capacity(4 * 1024);
    open_page(&mut out, "contact-page");
    page_heading(
        &mut out,
        "Get In Touch",
        "Tell me where you are and where you need to be. The first call is free.",
    );

    out.push_str(r#"<div class="grid grid-2">"#);

    out.push_str(r#"<div class="card"><div class="card-header">"#);
    out.push_str(&element("h2", "card-title", "Contact Information"));
    out.push_str(r#"</div><div class="card-content">"#);
    out.push_str(
        &book_call(scheduling_url, "Book Discovery Call", "Book Call - Contact Page").render(),
    );
    if !profile.email.is_empty() {
        out.push_str(
            &CallToAction::new(
                format!("mailto:{}", profile.email),
                profile.email.as_str(),
                AnalyticsEvent::new(category::CONTACT, "Email - Contact Page"),
            )
            .class("btn btn-ghost")
            .render(),
        );
    }
    if let Some(linkedin) = profile.linkedin() {
        out.push_str(
            &CallToAction::new(
                linkedin,
                "Connect on LinkedIn",
                AnalyticsEvent::new(category::SOCIAL, "LinkedIn - Contact Page"),
            )
            .external()
            .class("btn btn-outline")
            .render(),
        );
    }
    if !profile.location.is_empty() {
        out.push_str(&element("p", "card-meta", &profile.location));
    }
    out.push_str("</div></div>");

    if !store.skills.core.is_empty() {
        out.push_str(r#"<div class="card"><div class="card-header">"#);
        out.push_str(&element("h2", "card-title", "How I Can Help"));
        out.push_str(r#"</div><div class="card-content"><ul class="offerings">"#);
        for skill in &store.skills.core {
            let _ = write!(out, "<li><strong>{}</strong>", escape(&skill.name));
            if !skill.one_liner.is_empty() {
                let _ = write!(out, " <span>{}</span>", escape(&skill.one_liner));
            }
            out.push_str("</li>");
        }
        out.push_str("</ul></div></div>");
    }

    out.push_str("</div>");

    out.push_str(r#"<div class="callout callout-info">"#);
    out.push_str(&element("h2", "callout-title", "Ready to Get Started?"));
    out.push_str(&element(
        "p",
        "callout-text",
        "Pick a time that works for you and we'll map out next steps together.",
    ));
    let _ = write!(
        out,
        r#"<p class="callout-text"><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></p>"#,
        escape_attr(scheduling_url),
        escape(scheduling_url)
    );
    out.push_str("</div>");

    close_page(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CoreSkill;

    fn store() -> ContentStore {
        let mut store = ContentStore::default();
        store.profile.name = "Ada".into();
        store.profile.email = "ada@example.com".into();
        store.profile.title = "CTO".into();
        store.skills.keywords = vec!["Fractional CTO".into()];
        store.skills.core.push(CoreSkill {
            name: "AI Strategy".into(),
            one_liner: "From pilot to production".into(),
            outcomes: vec!["a".into(), "b".into(), "c".into()],
            tools: vec!["LLMs".into()],
        });
        store
            .skills
            .supporting
            .insert("aiMachineLearning".into(), vec!["RAG".into()]);
        store
    }

    #[test]
    fn test_services_page() {
        let html = services(&store());
        assert!(html.contains(">Fractional CTO</span>"));
        assert!(html.contains("Core Services"));
        assert!(html.contains("<li>c</li>"));
        assert!(html.contains("Ai Machine Learning"));
        assert_eq!(html.matches("Supporting Skills").count(), 1);
    }

    #[test]
    fn test_skills_prefers_narrative() {
        let html = skills(&store(), Some("<h1>My Skills</h1>"));
        assert!(html.contains("<h1>My Skills</h1>"));
        assert!(!html.contains("AI Strategy"));

        let html = skills(&store(), None);
        assert!(html.contains("AI Strategy"));
    }

    #[test]
    fn test_about_facts() {
        let html = about(&store().profile, None);
        assert!(html.contains("<dt>Role</dt><dd>CTO</dd>"));
        assert!(!html.contains("Location"));
        assert!(!html.contains("prose"));
    }

    #[test]
    fn test_contact_ctas() {
        let mut s = store();
        let html = contact(&s, "https://cal.com/ada");
        assert!(html.contains(r#"href="mailto:ada@example.com""#));
        assert!(html.contains(r#"data-cta-label="Email - Contact Page""#));
        assert!(html.contains(r#"data-cta-label="Book Call - Contact Page""#));
        assert!(!html.contains("LinkedIn - Contact Page"));
        assert!(html.contains("How I Can Help"));

        s.profile
            .social
            .insert("linkedin".into(), "https://linkedin.com/in/ada".into());
        let html = contact(&s, "https://cal.com/ada");
        assert!(html.contains(">Connect on LinkedIn</a>"));
    }
}
