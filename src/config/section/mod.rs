//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module      | TOML Section    | Purpose                              |
//! |-------------|-----------------|--------------------------------------|
//! | `site`      | `[site]`        | Base URL, language, Open Graph image |
//! | `build`     | `[build]`       | Content/output paths, minify, clean  |
//! | `analytics` | `[analytics]`   | GA4 and GTM identifiers              |
//! | `contact`   | `[contact]`     | Scheduling link                      |
//! | `seo`       | `[seo]`         | Brand terms appended to keywords     |

mod analytics;
mod build;
mod contact;
mod seo;
mod site;

pub use analytics::AnalyticsSection;
pub use build::BuildSection;
pub use contact::ContactSection;
pub use seo::SeoSection;
pub use site::SiteSection;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Check that `value` is an absolute http(s) URL with a host.
fn validate_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

/// Tracking identifiers end up inside inline scripts.
static TRACKING_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

fn is_tracking_id(value: &str) -> bool {
    TRACKING_ID.is_match(value)
}
