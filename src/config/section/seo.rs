//! `[seo]` section configuration.
//!
//! ```toml
//! [seo]
//! brand_terms = ["CTO", "Fractional CTO"]   # Appended to every keyword list
//! ```

use serde::{Deserialize, Serialize};

use crate::seo::DEFAULT_BRAND_TERMS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSection {
    pub brand_terms: Vec<String>,
}

impl Default for SeoSection {
    fn default() -> Self {
        Self {
            brand_terms: DEFAULT_BRAND_TERMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
