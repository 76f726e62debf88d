//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! url = "https://example.com"   # Base URL for canonical links and sitemap
//! language = "en"               # <html lang>
//! locale = "en_US"              # og:locale
//! og_image = "/og.png"          # Default Open Graph image (optional)
//! theme_color = "#10B9AE"       # <meta name="theme-color">
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site URL, without trailing slash once loaded.
    pub url: String,
    pub language: String,
    pub locale: String,
    pub og_image: Option<String>,
    pub theme_color: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".into(),
            language: "en".into(),
            locale: "en_US".into(),
            og_image: None,
            theme_color: "#10B9AE".into(),
        }
    }
}

impl SiteSection {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const LANGUAGE: FieldPath = FieldPath::new("site.language");
    pub const THEME_COLOR: FieldPath = FieldPath::new("site.theme_color");

    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `language` must not be empty
    /// - `theme_color` must be a `#rgb` or `#rrggbb` color
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        super::validate_http_url(&self.url, Self::URL, diag);

        if self.language.trim().is_empty() {
            diag.error_with_hint(Self::LANGUAGE, "language must not be empty", "e.g. \"en\"");
        }

        if !HEX_COLOR.is_match(&self.theme_color) {
            diag.error_with_hint(
                Self::THEME_COLOR,
                format!("'{}' is not a hex color", self.theme_color),
                "use format like #10B9AE",
            );
        }
    }
}
