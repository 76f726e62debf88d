//! `[analytics]` section configuration.
//!
//! ```toml
//! [analytics]
//! enable = true
//! ga_id = "G-XXXXXXXXXX"    # Google Analytics 4 measurement ID ("" to skip)
//! gtm_id = "GTM-XXXXXXX"    # Google Tag Manager container ID ("" to skip)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSection {
    pub enable: bool,
    pub ga_id: String,
    pub gtm_id: String,
}

impl Default for AnalyticsSection {
    fn default() -> Self {
        Self {
            enable: true,
            ga_id: "G-209MW550NR".into(),
            gtm_id: "GTM-WLQ52SWL".into(),
        }
    }
}

impl AnalyticsSection {
    pub const GA_ID: FieldPath = FieldPath::new("analytics.ga_id");
    pub const GTM_ID: FieldPath = FieldPath::new("analytics.gtm_id");

    /// GA4 measurement ID, if analytics is on and one is set.
    pub fn ga(&self) -> Option<&str> {
        Some(self.ga_id.as_str()).filter(|id| self.enable && !id.is_empty())
    }

    /// GTM container ID, if analytics is on and one is set.
    pub fn gtm(&self) -> Option<&str> {
        Some(self.gtm_id.as_str()).filter(|id| self.enable && !id.is_empty())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, id) in [(Self::GA_ID, &self.ga_id), (Self::GTM_ID, &self.gtm_id)] {
            if !id.is_empty() && !super::is_tracking_id(id) {
                diag.error_with_hint(
                    field,
                    format!("'{id}' is not a valid tracking ID"),
                    "only letters, digits and '-' are allowed",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_respect_enable() {
        let mut section = AnalyticsSection::default();
        assert_eq!(section.ga(), Some("G-209MW550NR"));
        assert_eq!(section.gtm(), Some("GTM-WLQ52SWL"));

        section.gtm_id.clear();
        assert_eq!(section.gtm(), None);

        section.enable = false;
        assert_eq!(section.ga(), None);
    }

    #[test]
    fn test_validate_rejects_script_breakers() {
        let section = AnalyticsSection {
            ga_id: "G-1'); alert(1); ('".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        section.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, AnalyticsSection::GA_ID);
    }
}
