//! Embedded static resources for Folio.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `page` - Page layout (layout.html)
//! - `analytics` - GA4 and Tag Manager snippets
//! - `css` / `js` - Site stylesheet and the CTA click reporter
//!
//! # Usage
//!
//! ```ignore
//! use embed::page::{LAYOUT_HTML, LayoutVars};
//!
//! let html = LAYOUT_HTML.render(&vars);
//! ```

mod template;

pub use template::{Template, TemplateVars, fill};

pub mod page {
    use super::{Template, TemplateVars, fill};

    /// Variables for layout.html. Every field is inserted verbatim.
    #[derive(Debug, Clone, Default)]
    pub struct LayoutVars {
        pub lang: String,
        pub theme_color: String,
        /// Title, meta tags and JSON-LD scripts.
        pub head: String,
        pub analytics_head: String,
        pub analytics_body: String,
        pub header: String,
        pub main: String,
        pub footer: String,
    }

    impl TemplateVars for LayoutVars {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("LANG", &self.lang),
                    ("THEME_COLOR", &self.theme_color),
                    ("ANALYTICS_HEAD", &self.analytics_head),
                    ("HEAD", &self.head),
                    ("STYLESHEET", super::css::SITE_CSS_PATH),
                    ("ANALYTICS_BODY", &self.analytics_body),
                    ("HEADER", &self.header),
                    ("MAIN", &self.main),
                    ("FOOTER", &self.footer),
                    ("SCRIPT", super::js::CTA_JS_PATH),
                ],
            )
        }
    }

    /// Document shell shared by every page.
    pub const LAYOUT_HTML: Template<LayoutVars> = Template::new(include_str!("page/layout.html"));
}

pub mod analytics {
    use super::{Template, TemplateVars, fill};
    use crate::page::settings::Analytics;

    /// Variables for the GA4 snippet.
    pub struct GaVars {
        pub ga_id: String,
    }

    impl TemplateVars for GaVars {
        fn apply(&self, content: &str) -> String {
            fill(content, &[("GA_ID", &self.ga_id)])
        }
    }

    /// Variables for both Tag Manager snippets.
    pub struct GtmVars {
        pub gtm_id: String,
    }

    impl TemplateVars for GtmVars {
        fn apply(&self, content: &str) -> String {
            fill(content, &[("GTM_ID", &self.gtm_id)])
        }
    }

    /// gtag.js loader and config, IP anonymized.
    pub const GA_HTML: Template<GaVars> = Template::new(include_str!("analytics/ga.html"));
    /// Tag Manager loader for `<head>`.
    pub const GTM_HEAD_HTML: Template<GtmVars> =
        Template::new(include_str!("analytics/gtm_head.html"));
    /// Tag Manager `<noscript>` fallback, first thing in `<body>`.
    pub const GTM_BODY_HTML: Template<GtmVars> =
        Template::new(include_str!("analytics/gtm_body.html"));

    /// Snippets for `<head>`, empty when nothing is configured.
    pub fn head(analytics: &Analytics) -> String {
        let mut out = String::new();
        if let Some(gtm_id) = &analytics.gtm_id {
            out.push_str(&GTM_HEAD_HTML.render(&GtmVars {
                gtm_id: gtm_id.clone(),
            }));
        }
        if let Some(ga_id) = &analytics.ga_id {
            out.push_str(&GA_HTML.render(&GaVars {
                ga_id: ga_id.clone(),
            }));
        }
        out
    }

    /// Snippets for the top of `<body>`.
    pub fn body(analytics: &Analytics) -> String {
        analytics
            .gtm_id
            .as_ref()
            .map(|gtm_id| {
                GTM_BODY_HTML.render(&GtmVars {
                    gtm_id: gtm_id.clone(),
                })
            })
            .unwrap_or_default()
    }
}

pub mod css {
    /// Site stylesheet.
    pub const SITE_CSS: &str = include_str!("css/site.css");
    /// Where the stylesheet is served from.
    pub const SITE_CSS_PATH: &str = "/assets/site.css";
}

pub mod js {
    /// Reports `a[data-cta-label]` clicks through `gtag`, never blocking
    /// navigation.
    pub const CTA_JS: &str = include_str!("js/cta.js");
    /// Where the script is served from.
    pub const CTA_JS_PATH: &str = "/assets/cta.js";
}

// =============================================================================
// Embedded Assets Writer
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write the stylesheet and script to the output directory.
pub fn write_embedded_assets(output_dir: &Path) -> Result<()> {
    for (path, content) in [
        (css::SITE_CSS_PATH, css::SITE_CSS),
        (js::CTA_JS_PATH, js::CTA_JS),
    ] {
        let target = output_dir.join(path.trim_start_matches('/'));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&target, content)
            .with_context(|| format!("Failed to write {}", target.display()))?;
    }
    Ok(())
}
