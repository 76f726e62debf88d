//! Home page sections.
//!
//! Each collection-backed section is omitted when its collection is empty.

use std::fmt::Write;

use super::{badges, badges_limited, bullets, joined, section_close, section_open, skill_grid};
use crate::content::{Book, ContentStore, ProfileFacts, Research, Service, Testimonial, featured};
use crate::page::cta::{AnalyticsEvent, CallToAction, book_call, category};
use crate::utils::html::{element, escape};
use crate::utils::url::encode_segment;

/// Featured case studies shown on the home page.
pub const FEATURED_LIMIT: usize = 3;

/// Every home page section, in page order.
pub fn home(store: &ContentStore, scheduling_url: &str) -> String {
    let mut out = String::with_capacity(16 * 1024);
    hero(&mut out, &store.profile, scheduling_url);
    featured_work(&mut out, store);
    skills(&mut out, store);
    services(&mut out, &store.services, scheduling_url);
    books(&mut out, &store.books, scheduling_url);
    research(&mut out, &store.research, scheduling_url);
    testimonials(&mut out, &store.testimonials);
    final_cta(&mut out, &store.profile, scheduling_url);
    out
}

fn hero(out: &mut String, profile: &ProfileFacts, scheduling_url: &str) {
    out.push_str(r#"<section class="hero"><div class="container">"#);

    let headline = if profile.hero_headline.is_empty() {
        profile.headline()
    } else {
        profile.hero_headline.clone()
    };
    out.push_str(&element("h1", "hero-title", &headline));
    if !profile.hero_subheadline.is_empty() {
        out.push_str(&element("p", "hero-lead", &profile.hero_subheadline));
    }

    if !profile.proof.is_empty() {
        out.push_str(r#"<ul class="proof">"#);
        for fact in [&profile.proof.years, &profile.proof.countries, &profile.proof.sectors] {
            if !fact.is_empty() {
                let _ = write!(out, "<li>{}</li>", escape(fact));
            }
        }
        out.push_str("</ul>");
    }

    out.push_str(r#"<div class="hero-actions">"#);
    out.push_str(
        &book_call(scheduling_url, &profile.cta.primary, "Book Call - Hero Primary").render(),
    );
    out.push_str(
        &CallToAction::new(
            "/work",
            &profile.cta.secondary,
            AnalyticsEvent::new(category::CTA, "View Work - Hero Secondary"),
        )
        .class("btn btn-outline")
        .render(),
    );
    out.push_str("</div>");

    badges(out, "secondary", &profile.keywords);

    if !profile.metrics.is_empty() {
        out.push_str(r#"<div class="metrics">"#);
        for metric in &profile.metrics {
            out.push_str(r#"<div class="metric">"#);
            out.push_str(&element("span", "metric-value", &metric.value));
            out.push_str(&element("span", "metric-label", &metric.label));
            if !metric.description.is_empty() {
                out.push_str(&element("p", "metric-description", &metric.description));
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }

    out.push_str("</div></section>\n");
}

fn featured_work(out: &mut String, store: &ContentStore) {
    let entries = featured(&store.work_index, FEATURED_LIMIT);
    if entries.is_empty() {
        return;
    }

    section_open(
        out,
        "section featured-work",
        "Featured Work",
        "Outcomes over algorithms. Here's how I've helped teams ship measurable results.",
    );
    out.push_str(r#"<div class="grid grid-3">"#);
    for entry in entries {
        out.push_str(r#"<article class="card work-card"><div class="card-header">"#);
        if !entry.category.is_empty() {
            out.push_str(&element("span", "badge badge-secondary", &entry.category));
        }
        out.push_str(&element("h3", "card-title", &entry.title));
        let meta = joined(&[&entry.client, &entry.period]);
        if !meta.is_empty() {
            out.push_str(&element("p", "card-meta", &meta));
        }
        out.push_str(r#"</div><div class="card-content">"#);
        if !entry.hero_metric.is_empty() {
            out.push_str(r#"<div class="callout callout-success">"#);
            out.push_str(&element("span", "callout-label", "Key Achievement"));
            out.push_str(&element("p", "callout-text", &entry.hero_metric));
            out.push_str("</div>");
        }
        if !entry.summary.is_empty() {
            out.push_str(&element("p", "", &entry.summary));
        }
        bullets(out, "", entry.outcomes.iter().take(2));
        badges_limited(out, "outline", &entry.stack, 3, " more");
        out.push_str(
            &CallToAction::new(
                format!("/work/{}", encode_segment(&entry.slug)),
                "Read Case Study",
                AnalyticsEvent::new(category::WORK, format!("Case Study - {}", entry.title)),
            )
            .class("btn btn-ghost")
            .render(),
        );
        out.push_str("</div></article>");
    }
    out.push_str("</div>");
    out.push_str(r#"<div class="section-actions">"#);
    out.push_str(
        &CallToAction::new(
            "/work",
            "View All Work",
            AnalyticsEvent::new(category::NAVIGATION, "View All Work"),
        )
        .class("btn btn-outline")
        .render(),
    );
    out.push_str("</div>");
    section_close(out);
}

fn skills(out: &mut String, store: &ContentStore) {
    if store.skills.core.is_empty() && store.skills.supporting.is_empty() {
        return;
    }
    section_open(
        out,
        "section skills",
        "Skills & Expertise",
        "Building outcomes, not artifacts. I focus on small, end-to-end loops \
         (ingest \u{2192} infer \u{2192} evaluate \u{2192} iterate) with guardrails and \
         observability from day one.",
    );
    skill_grid(out, &store.skills, true);
    section_close(out);
}

fn services(out: &mut String, services: &[Service], scheduling_url: &str) {
    if services.is_empty() {
        return;
    }
    section_open(
        out,
        "section services",
        "Services That Drive Measurable Outcomes",
        "",
    );
    out.push_str(r#"<div class="grid grid-2">"#);
    for service in services {
        out.push_str(r#"<div class="card service-card"><div class="card-header">"#);
        out.push_str(&element("h3", "card-title", &service.name));
        if !service.outcome.is_empty() {
            out.push_str(&element("p", "card-description", &service.outcome));
        }
        out.push_str(r#"</div><div class="card-content">"#);
        bullets(out, "Process:", &service.process);
        bullets(out, "Deliverables:", &service.deliverables);
        out.push_str(
            &CallToAction::new(
                "/services",
                "Learn More",
                AnalyticsEvent::new(category::SERVICE, service.name.as_str()),
            )
            .class("btn btn-ghost")
            .render(),
        );
        out.push_str("</div></div>");
    }
    out.push_str("</div>");
    out.push_str(r#"<div class="section-actions">"#);
    out.push_str(
        &book_call(scheduling_url, "Book a Discovery Call", "Book Call - Services").render(),
    );
    out.push_str("</div>");
    section_close(out);
}

fn books(out: &mut String, books: &[Book], scheduling_url: &str) {
    if books.is_empty() {
        return;
    }
    section_open(
        out,
        "section books",
        "Published Works & Thought Leadership",
        "",
    );
    out.push_str(r#"<div class="grid grid-3">"#);
    for book in books {
        out.push_str(r#"<div class="card book-card"><div class="card-header">"#);
        let kind = if book.kind.is_empty() { "Book" } else { &book.kind };
        out.push_str(&element("span", "badge badge-secondary", kind));
        if let Some(year) = &book.year {
            out.push_str(&element("span", "card-meta", year));
        }
        out.push_str(&element("h3", "card-title", &book.title));
        out.push_str(r#"</div><div class="card-content">"#);
        if !book.blurb.is_empty() {
            out.push_str(&element("p", "", &book.blurb));
        }
        badges(out, "outline", &book.tags);
        if let Some(url) = &book.url {
            out.push_str(
                &CallToAction::new(
                    url,
                    format!("Read {kind}"),
                    AnalyticsEvent::new(category::BOOK, book.title.as_str()),
                )
                .external()
                .class("btn btn-outline")
                .render(),
            );
        }
        out.push_str("</div></div>");
    }
    out.push_str("</div>");
    out.push_str(r#"<div class="section-actions">"#);
    out.push_str(&book_call(scheduling_url, "Schedule a Discussion", "Book Call - Books").render());
    out.push_str("</div>");
    section_close(out);
}

fn research(out: &mut String, items: &[Research], scheduling_url: &str) {
    if items.is_empty() {
        return;
    }
    section_open(out, "section research", "Research & Speaking Engagements", "");
    out.push_str(r#"<div class="grid grid-2">"#);
    for item in items {
        out.push_str(r#"<div class="card research-card"><div class="card-header">"#);
        out.push_str(&element("h3", "card-title", &item.title));
        let meta = joined(&[
            item.venue.as_deref().unwrap_or_default(),
            item.date.as_deref().unwrap_or_default(),
            item.location.as_deref().unwrap_or_default(),
        ]);
        if !meta.is_empty() {
            out.push_str(&element("p", "card-meta", &meta));
        }
        out.push_str(r#"</div><div class="card-content">"#);
        if !item.summary.is_empty() {
            out.push_str(&element("p", "", &item.summary));
        }
        if let Some(url) = &item.url {
            out.push_str(
                &CallToAction::new(
                    url,
                    "Read More",
                    AnalyticsEvent::new(category::RESEARCH, item.title.as_str()),
                )
                .external()
                .class("btn btn-outline")
                .render(),
            );
        }
        out.push_str("</div></div>");
    }
    out.push_str("</div>");
    out.push_str(r#"<div class="section-actions">"#);
    out.push_str(&book_call(scheduling_url, "Get in Touch", "Book Call - Research").render());
    out.push_str("</div>");
    section_close(out);
}

fn testimonials(out: &mut String, items: &[Testimonial]) {
    if items.is_empty() {
        return;
    }
    section_open(out, "section testimonials", "What Clients Say", "");
    out.push_str(r#"<div class="grid grid-3">"#);
    for item in items {
        out.push_str(r#"<figure class="card testimonial">"#);
        let _ = write!(out, "<blockquote>{}</blockquote>", escape(&item.quote));
        out.push_str("<figcaption>");
        out.push_str(&element("strong", "", &item.author));
        if let Some(role) = &item.role {
            out.push_str(&element("span", "testimonial-role", role));
        }
        out.push_str("</figcaption></figure>");
    }
    out.push_str("</div>");
    section_close(out);
}

const FINAL_CTA_CARDS: [(&str, &str); 3] = [
    (
        "Free Discovery Call",
        "30 minutes to understand your challenges and explore how I can help.",
    ),
    (
        "No Obligation",
        "Get actionable insights whether we work together or not.",
    ),
    (
        "Quick Start",
        "Most engagements begin within a week of our first conversation.",
    ),
];

fn final_cta(out: &mut String, profile: &ProfileFacts, scheduling_url: &str) {
    section_open(
        out,
        "section final-cta",
        "Ready to Transform Your Technology Strategy?",
        "Let's discuss how fractional technology leadership can accelerate your growth.",
    );
    out.push_str(r#"<div class="grid grid-3">"#);
    for (title, text) in FINAL_CTA_CARDS {
        out.push_str(r#"<div class="card">"#);
        out.push_str(&element("h3", "card-title", title));
        out.push_str(&element("p", "card-description", text));
        out.push_str("</div>");
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="section-actions">"#);
    out.push_str(
        &book_call(
            scheduling_url,
            "Book Your Free Discovery Call",
            "Book Call - Final CTA",
        )
        .render(),
    );
    out.push_str(
        &CallToAction::new(
            "/contact",
            "Send Email",
            AnalyticsEvent::new(category::CTA, "Email - Final CTA"),
        )
        .class("btn btn-outline")
        .render(),
    );
    if let Some(linkedin) = profile.linkedin() {
        out.push_str(
            &CallToAction::new(
                linkedin,
                "LinkedIn",
                AnalyticsEvent::new(category::SOCIAL, "LinkedIn - Final CTA"),
            )
            .external()
            .class("btn btn-outline")
            .render(),
        );
    }
    out.push_str("</div>");
    section_close(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WorkIndexEntry;

    const CAL: &str = "https://cal.com/ada";

    #[test]
    fn test_empty_store_has_hero_and_final_cta_only() {
        let html = home(&ContentStore::default(), CAL);
        assert!(html.contains(r#"class="hero""#));
        assert!(html.contains("Ready to Transform"));
        assert!(!html.contains("Featured Work"));
        assert!(!html.contains("Skills &amp; Expertise"));
        assert!(!html.contains("What Clients Say"));
        assert!(!html.contains("Published Works"));
    }

    #[test]
    fn test_featured_cards() {
        let mut store = ContentStore::default();
        store.work_index = (0..4)
            .map(|i| WorkIndexEntry {
                slug: format!("study-{i}"),
                title: format!("Study {i}"),
                hero_metric: "2x".into(),
                stack: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                featured: true,
                ..Default::default()
            })
            .collect();

        let html = home(&store, CAL);
        assert!(html.contains(r#"href="/work/study-0""#));
        assert!(html.contains(r#"href="/work/study-2""#));
        assert!(!html.contains("study-3"));
        assert!(html.contains(r#"data-cta-label="Case Study - Study 1""#));
        assert!(html.contains("Key Achievement"));
        assert!(html.contains(">+1 more</span>"));
        assert!(html.contains(r#"data-cta-label="View All Work""#));
    }

    #[test]
    fn test_book_link_only_with_url() {
        let mut store = ContentStore::default();
        store.books = vec![
            Book {
                title: "Linked".into(),
                kind: "Guide".into(),
                url: Some("https://x.dev/guide".into()),
                ..Default::default()
            },
            Book {
                title: "Unlinked".into(),
                ..Default::default()
            },
        ];
        let html = home(&store, CAL);
        assert!(html.contains(">Read Guide</a>"));
        assert!(html.contains(r#"data-cta-category="Book" data-cta-label="Linked""#));
        assert!(!html.contains(r#"data-cta-label="Unlinked""#));
        assert!(html.contains("Book Call - Books"));
    }

    #[test]
    fn test_hero_ctas() {
        let mut store = ContentStore::default();
        store.profile.name = "Ada".into();
        store.profile.title = "CTO".into();
        let html = home(&store, CAL);
        assert!(html.contains("Ada - CTO"));
        assert!(html.contains(r#"data-cta-label="Book Call - Hero Primary""#));
        assert!(html.contains(r#"data-cta-label="View Work - Hero Secondary""#));
        assert!(html.contains(">View Case Studies</a>"));
    }

    #[test]
    fn test_services_cta_per_card() {
        let mut store = ContentStore::default();
        store.services = vec![Service {
            name: "Fractional CTO".into(),
            process: vec!["Assess".into()],
            ..Default::default()
        }];
        let html = home(&store, CAL);
        assert!(html.contains(r#"data-cta-category="Service" data-cta-label="Fractional CTO""#));
        assert!(html.contains("Process:"));
        assert!(!html.contains("Deliverables:"));
    }
}
