//! `[contact]` section configuration.
//!
//! ```toml
//! [contact]
//! scheduling_url = "https://calendly.com/you/30min"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    /// Target of every "book a call" link.
    pub scheduling_url: String,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            scheduling_url: "https://calendly.com/diweshsaxena/30min".into(),
        }
    }
}

impl ContactSection {
    pub const SCHEDULING_URL: FieldPath = FieldPath::new("contact.scheduling_url");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        super::validate_http_url(&self.scheduling_url, Self::SCHEDULING_URL, diag);
    }
}
