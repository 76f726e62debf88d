//! Case study index and detail bodies.

use std::fmt::Write;

use super::{badges, badges_limited, bullets, joined, page_heading};
use crate::page::cta::{AnalyticsEvent, CallToAction, category};
use crate::utils::html::element;
use crate::utils::url::encode_segment;
use crate::work::CaseStudy;

pub fn work_index(studies: &[CaseStudy]) -> String {
    let mut out = String::with_capacity(1024 + studies.len() * 1024);
    out.push_str(r#"<section class="section"><div class="container">"#);
    page_heading(
        &mut out,
        "Case Studies",
        "Real outcomes from real engagements. Each study covers the context, \
         the approach and the measurable results.",
    );

    if studies.is_empty() {
        out.push_str(r#"<div class="card empty-state">"#);
        out.push_str(&element("h2", "card-title", "Case Studies Coming Soon"));
        out.push_str(&element(
            "p",
            "card-description",
            "Detailed case studies are being prepared. Check back shortly.",
        ));
        out.push_str(
            &CallToAction::new(
                "/",
                "View Homepage",
                AnalyticsEvent::new(category::NAVIGATION, "View Homepage"),
            )
            .class("btn btn-outline")
            .render(),
        );
        out.push_str("</div></div></section>");
        return out;
    }

    out.push_str(r#"<div class="grid grid-2">"#);
    for study in studies {
        let _ = write!(
            out,
            r#"<a href="/work/{}" class="card card-link work-card">"#,
            encode_segment(&study.identifier)
        );
        out.push_str(r#"<div class="card-header">"#);
        if !study.hero_metric.is_empty() {
            out.push_str(&element("span", "badge badge-success", &study.hero_metric));
        }
        out.push_str(&element("h2", "card-title", &study.title));
        let byline = joined(&[&study.role, &study.organization]);
        if !byline.is_empty() {
            out.push_str(&element("p", "card-meta", &byline));
        }
        if !study.timeframe.is_empty() {
            out.push_str(&element("p", "card-meta", &study.timeframe));
        }
        out.push_str(r#"</div><div class="card-content">"#);
        if !study.summary.is_empty() {
            out.push_str(&element("p", "", &study.summary));
        }
        badges_limited(&mut out, "outline", &study.stack, 3, " more");
        bullets(&mut out, "Key Outcomes:", study.outcomes.iter().take(2));
        out.push_str("</div></a>");
    }
    out.push_str("</div></div></section>");
    out
}

/// `body` is the already-rendered document body.
pub fn work_detail(study: &CaseStudy, body: &str) -> String {
    let mut out = String::with_capacity(2048 + body.len());
    out.push_str(r#"<article class="section case-study"><div class="container">"#);
    out.push_str(r#"<a href="/work" class="back-link">&larr; All Case Studies</a>"#);

    if !study.hero_metric.is_empty() {
        out.push_str(&element("span", "badge badge-success", &study.hero_metric));
    }
    out.push_str(&element("h1", "page-title", &study.title));
    let byline = joined(&[&study.role, &study.organization, &study.timeframe]);
    if !byline.is_empty() {
        out.push_str(&element("p", "page-meta", &byline));
    }
    if !study.summary.is_empty() {
        out.push_str(&element("p", "page-lead", &study.summary));
    }

    if !study.stack.is_empty() {
        out.push_str(&element("h2", "subsection-title", "Technology Stack"));
        badges(&mut out, "secondary", &study.stack);
    }
    if !study.outcomes.is_empty() {
        out.push_str(&element("h2", "subsection-title", "Key Outcomes"));
        bullets(&mut out, "", &study.outcomes);
    }

    let _ = write!(out, r#"<div class="prose">{body}</div>"#);
    out.push_str("</div></article>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn study() -> CaseStudy {
        CaseStudy {
            identifier: "hiring".into(),
            title: "Hiring Platform".into(),
            role: "CTO".into(),
            organization: "Acme".into(),
            timeframe: "2021 - 2023".into(),
            hero_metric: "50% faster".into(),
            summary: "Rebuilt hiring.".into(),
            stack: vec!["Rust".into(), "Postgres".into(), "Kafka".into(), "K8s".into()],
            outcomes: vec!["One".into(), "Two".into(), "Three".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_index_cards() {
        let html = work_index(&[study()]);
        assert!(html.contains(r#"href="/work/hiring""#));
        assert!(html.contains("CTO \u{2022} Acme"));
        assert!(html.contains(">+1 more</span>"));
        assert!(html.contains("<li>Two</li>"));
        assert!(!html.contains("<li>Three</li>"));
        assert!(!html.contains("Coming Soon"));
    }

    #[test]
    fn test_index_empty_state() {
        let html = work_index(&[]);
        assert!(html.contains("Case Studies Coming Soon"));
        assert!(html.contains(r#"data-cta-label="View Homepage""#));
    }

    #[test]
    fn test_detail_full_stack_in_order() {
        let html = work_detail(&study(), "<h2>Context</h2>");
        let rust = html.find(">Rust<").unwrap();
        let k8s = html.find(">K8s<").unwrap();
        assert!(rust < k8s);
        assert!(!html.contains("more</span>"));
        assert!(html.contains("<li>Three</li>"));
        assert!(html.contains("CTO \u{2022} Acme \u{2022} 2021 - 2023"));
        assert!(html.contains(r#"<div class="prose"><h2>Context</h2></div>"#));
    }

    #[test]
    fn test_detail_escapes_metadata() {
        let mut s = study();
        s.title = "<b>Bold</b>".into();
        let html = work_detail(&s, "");
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    }
}
