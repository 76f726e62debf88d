//! Site-wide values the composer needs from configuration.

use crate::config::SiteConfig;

/// Analytics identifiers, each present only when enabled and set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analytics {
    pub ga_id: Option<String>,
    pub gtm_id: Option<String>,
}

impl Analytics {
    pub fn is_empty(&self) -> bool {
        self.ga_id.is_none() && self.gtm_id.is_none()
    }
}

/// Everything page composition reads from config, detached from paths and
/// build flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// No trailing slash.
    pub base_url: String,
    pub language: String,
    pub locale: String,
    pub og_image: Option<String>,
    pub theme_color: String,
    pub scheduling_url: String,
    pub analytics: Analytics,
    pub brand_terms: Vec<String>,
}

impl SiteSettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            base_url: config.site.base_url().to_string(),
            language: config.site.language.clone(),
            locale: config.site.locale.clone(),
            og_image: config.site.og_image.clone().filter(|s| !s.is_empty()),
            theme_color: config.site.theme_color.clone(),
            scheduling_url: config.contact.scheduling_url.clone(),
            analytics: Analytics {
                ga_id: config.analytics.ga().map(str::to_string),
                gtm_id: config.analytics.gtm().map(str::to_string),
            },
            brand_terms: config.seo.brand_terms.clone(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}
