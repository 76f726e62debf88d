//! Header, footer and the not-found body.

use std::fmt::Write;

use super::SITE_LINKS;
use crate::content::ProfileFacts;
use crate::page::cta::{AnalyticsEvent, CallToAction, book_call, category};
use crate::utils::html::{element, escape, escape_attr};

const NAV: [(&str, &str); 5] = [
    ("Work", "/work"),
    ("Services", "/services"),
    ("Skills", "/skills"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

/// Up to two initials from the profile name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn header(profile: &ProfileFacts, scheduling_url: &str) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(r#"<header class="site-header"><div class="container header-inner">"#);
    let _ = write!(
        out,
        r#"<a href="/" class="brand"><span class="brand-mark">{}</span><span class="brand-name">{}</span></a>"#,
        escape(&initials(&profile.name)),
        escape(&profile.name),
    );

    out.push_str(r#"<nav class="nav" aria-label="Main">"#);
    for (label, href) in NAV {
        let _ = write!(out, r#"<a href="{href}" class="nav-link">{label}</a>"#);
    }
    out.push_str("</nav>");

    out.push_str(&book_call(scheduling_url, "Book Call", "Book Call - Header").render());
    out.push_str("</div></header>");
    out
}

pub fn footer(profile: &ProfileFacts, scheduling_url: &str) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(r#"<footer class="site-footer"><div class="container footer-grid">"#);

    out.push_str(r#"<div class="footer-about">"#);
    out.push_str(&element("h3", "footer-name", &profile.name));
    if !profile.title.is_empty() {
        out.push_str(&element("p", "footer-title", &profile.title));
    }
    if !profile.summary.is_empty() {
        out.push_str(&element("p", "footer-summary", &profile.summary));
    }
    out.push_str(
        &book_call(scheduling_url, "Book Discovery Call", "Book Call - Footer").render(),
    );
    out.push_str("</div>");

    out.push_str(r#"<div class="footer-links">"#);
    out.push_str(&element("h4", "", "Quick Links"));
    out.push_str("<ul>");
    for (label, href) in SITE_LINKS {
        let _ = write!(out, r#"<li><a href="{href}">{label}</a></li>"#);
    }
    out.push_str("</ul></div>");

    out.push_str(r#"<div class="footer-connect">"#);
    out.push_str(&element("h4", "", "Connect"));
    out.push_str(
        &CallToAction::new(
            "/contact",
            "Email",
            AnalyticsEvent::new(category::CONTACT, "Email - Footer"),
        )
        .class("btn btn-ghost")
        .render(),
    );
    if let Some(linkedin) = profile.linkedin() {
        out.push_str(
            &CallToAction::new(
                linkedin,
                "LinkedIn",
                AnalyticsEvent::new(category::SOCIAL, "LinkedIn - Footer"),
            )
            .external()
            .class("btn btn-ghost")
            .render(),
        );
    }
    out.push_str("</div>");

    out.push_str("</div>");
    if !profile.name.is_empty() {
        let _ = write!(
            out,
            r#"<div class="container footer-bottom"><p>&copy; {}</p></div>"#,
            escape(&profile.name)
        );
    }
    out.push_str("</footer>");
    out
}

/// Body of `404.html`.
pub fn not_found() -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(r#"<section class="section not-found"><div class="container">"#);
    out.push_str(&element("p", "not-found-code", "404"));
    out.push_str(&element("h1", "page-title", "Page Not Found"));
    out.push_str(&element(
        "p",
        "page-lead",
        "The page you're looking for doesn't exist or has been moved.",
    ));
    out.push_str(
        &CallToAction::new(
            "/",
            "Go Home",
            AnalyticsEvent::new(category::NAVIGATION, "Go Home - 404"),
        )
        .render(),
    );
    out.push_str(r#"<div class="grid grid-3 not-found-links">"#);
    for (label, href) in SITE_LINKS {
        let _ = write!(
            out,
            r#"<a href="{}" class="card card-link">{}</a>"#,
            escape_attr(href),
            escape(label)
        );
    }
    out.push_str("</div></div></section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Diwesh Saxena"), "DS");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials("Jean Paul Sartre"), "JP");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_header_nav_and_cta() {
        let profile = ProfileFacts {
            name: "Ada Lovelace".into(),
            ..Default::default()
        };
        let html = header(&profile, "https://cal.com/ada");
        assert!(html.contains(r#"<span class="brand-mark">AL</span>"#));
        for (_, href) in NAV {
            assert!(html.contains(&format!(r#"href="{href}""#)));
        }
        assert!(html.contains(r#"data-cta-label="Book Call - Header""#));
        assert!(html.contains(r#"href="https://cal.com/ada""#));
    }

    #[test]
    fn test_footer_linkedin_optional() {
        let mut profile = ProfileFacts {
            name: "Ada".into(),
            ..Default::default()
        };
        let html = footer(&profile, "https://cal.com/ada");
        assert!(html.contains(r#"data-cta-label="Email - Footer""#));
        assert!(!html.contains("LinkedIn - Footer"));

        profile
            .social
            .insert("linkedin".into(), "https://linkedin.com/in/ada".into());
        let html = footer(&profile, "https://cal.com/ada");
        assert!(html.contains(r#"data-cta-category="Social" data-cta-label="LinkedIn - Footer""#));
    }

    #[test]
    fn test_not_found_links() {
        let html = not_found();
        assert!(html.contains("Page Not Found"));
        assert!(html.contains(r#"href="/work""#));
        assert!(html.contains(r#"href="/contact""#));
    }
}
