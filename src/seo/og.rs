//! Per-page head metadata: title, description, canonical link, Open Graph
//! and Twitter Card tags.

use std::fmt::Write;

use crate::utils::html::{escape, escape_attr};
use crate::utils::url::absolute;

/// Site-wide defaults shared by every page.
#[derive(Debug, Clone)]
pub struct OgDefaults<'a> {
    pub site_name: &'a str,
    pub base_url: &'a str,
    pub locale: &'a str,
    pub image: Option<&'a str>,
    pub twitter_card: &'static str,
}

impl<'a> OgDefaults<'a> {
    pub fn new(site_name: &'a str, base_url: &'a str, locale: &'a str) -> Self {
        Self {
            site_name,
            base_url,
            locale,
            image: None,
            twitter_card: "summary_large_image",
        }
    }

    pub fn with_image(mut self, image: Option<&'a str>) -> Self {
        self.image = image.filter(|i| !i.is_empty());
        self
    }
}

/// `og:type` values in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgType {
    Website,
    Article,
}

impl OgType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Head metadata for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    /// `<title>` text.
    pub title: String,
    pub description: String,
    /// Route path, e.g. `/work/hiring`.
    pub path: String,
    pub og_type: OgType,
    /// Open Graph title when it differs from `<title>`.
    pub og_title: Option<String>,
    /// Keep crawlers off this page (the not-found page).
    pub noindex: bool,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            path: path.into(),
            og_type: OgType::Website,
            og_title: None,
            noindex: false,
        }
    }

    pub fn article(mut self, og_title: impl Into<String>) -> Self {
        self.og_type = OgType::Article;
        self.og_title = Some(og_title.into());
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }

    /// Head tags for this page. `keywords` may be empty.
    pub fn head_tags(&self, defaults: &OgDefaults, keywords: &str) -> String {
        let url = absolute(defaults.base_url, &self.path);
        let og_title = self.og_title.as_deref().unwrap_or(&self.title);

        let mut out = String::with_capacity(1024);
        let _ = writeln!(out, "<title>{}</title>", escape(&self.title));
        meta_name(&mut out, "description", &self.description);
        if !keywords.is_empty() {
            meta_name(&mut out, "keywords", keywords);
        }
        if self.noindex {
            meta_name(&mut out, "robots", "noindex");
        } else {
            let _ = writeln!(out, r#"<link rel="canonical" href="{}">"#, escape_attr(&url));
        }

        meta_property(&mut out, "og:type", self.og_type.as_str());
        meta_property(&mut out, "og:title", og_title);
        meta_property(&mut out, "og:description", &self.description);
        meta_property(&mut out, "og:url", &url);
        meta_property(&mut out, "og:site_name", defaults.site_name);
        meta_property(&mut out, "og:locale", defaults.locale);
        if let Some(image) = defaults.image {
            meta_property(&mut out, "og:image", &absolute_image(defaults.base_url, image));
        }

        meta_name(&mut out, "twitter:card", defaults.twitter_card);
        meta_name(&mut out, "twitter:title", og_title);
        meta_name(&mut out, "twitter:description", &self.description);
        if let Some(image) = defaults.image {
            meta_name(&mut out, "twitter:image", &absolute_image(defaults.base_url, image));
        }
        out
    }
}

fn absolute_image(base: &str, image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        image.to_string()
    } else {
        absolute(base, image)
    }
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(out, r#"<meta name="{name}" content="{}">"#, escape_attr(content));
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(out, r#"<meta property="{property}" content="{}">"#, escape_attr(content));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> OgDefaults<'static> {
        OgDefaults::new("Ada - CTO", "https://x.dev", "en_US")
    }

    #[test]
    fn test_website_tags() {
        let meta = PageMeta::new("Services - Ada", "What I do", "/services");
        let head = meta.head_tags(&defaults(), "CTO, AI");
        assert!(head.contains("<title>Services - Ada</title>"));
        assert!(head.contains(r#"<meta name="keywords" content="CTO, AI">"#));
        assert!(head.contains(r#"<link rel="canonical" href="https://x.dev/services">"#));
        assert!(head.contains(r#"<meta property="og:type" content="website">"#));
        assert!(head.contains(r#"<meta property="og:title" content="Services - Ada">"#));
        assert!(head.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(!head.contains("og:image"));
    }

    #[test]
    fn test_article_tags() {
        let meta = PageMeta::new("Hiring - Ada", "Rebuilt hiring", "/work/hiring").article("Hiring");
        let head = meta.head_tags(&defaults(), "");
        assert!(head.contains(r#"<meta property="og:type" content="article">"#));
        assert!(head.contains(r#"<meta property="og:title" content="Hiring">"#));
        assert!(head.contains(r#"<meta property="og:url" content="https://x.dev/work/hiring">"#));
        assert!(!head.contains(r#"name="keywords""#));
    }

    #[test]
    fn test_image_and_escaping() {
        let defaults = defaults().with_image(Some("/og.png"));
        let meta = PageMeta::new("A \"quoted\" <title>", "d", "/");
        let head = meta.head_tags(&defaults, "");
        assert!(head.contains("<title>A &quot;quoted&quot; &lt;title&gt;</title>"));
        assert!(head.contains(r#"<meta property="og:image" content="https://x.dev/og.png">"#));
        assert!(head.contains(r#"<meta property="og:url" content="https://x.dev">"#));

        let remote = OgDefaults::new("s", "https://x.dev", "en").with_image(Some("https://cdn/x.png"));
        assert!(PageMeta::new("t", "d", "/").head_tags(&remote, "").contains("https://cdn/x.png"));
    }

    #[test]
    fn test_noindex_omits_canonical() {
        let meta = PageMeta::new("Not Found", "", "/404").noindex();
        let head = meta.head_tags(&defaults(), "");
        assert!(head.contains(r#"<meta name="robots" content="noindex">"#));
        assert!(!head.contains("canonical"));
    }
}
