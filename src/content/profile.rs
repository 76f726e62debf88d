//! `profile.json`: the site owner's facts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Singleton record describing the consultant.
///
/// Every field defaults, so a partial `profile.json` still renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileFacts {
    pub name: String,
    /// Job title, e.g. `CTO & AI Platform Architect`.
    pub title: String,
    pub summary: String,
    pub location: String,
    /// Country used for the occupation location in structured data.
    pub country: String,
    pub email: String,
    pub hero_headline: String,
    pub hero_subheadline: String,
    /// Named social profile links (`linkedin`, `github`, ...), in file order.
    pub social: IndexMap<String, String>,
    pub cta: CtaLabels,
    pub proof: Proof,
    pub metrics: Vec<Metric>,
    pub keywords: Vec<String>,
}

impl ProfileFacts {
    pub fn linkedin(&self) -> Option<&str> {
        self.social
            .get("linkedin")
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Non-empty social URLs, for `sameAs`.
    pub fn same_as(&self) -> Vec<String> {
        self.social
            .values()
            .filter(|url| !url.is_empty())
            .cloned()
            .collect()
    }

    /// `<name> - <title>`, or whichever half is present.
    pub fn headline(&self) -> String {
        match (self.name.is_empty(), self.title.is_empty()) {
            (false, false) => format!("{} - {}", self.name, self.title),
            (false, true) => self.name.clone(),
            (true, false) => self.title.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Button labels for the two hero calls to action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaLabels {
    pub primary: String,
    pub secondary: String,
}

impl Default for CtaLabels {
    fn default() -> Self {
        Self {
            primary: "Book a Discovery Call".into(),
            secondary: "View Case Studies".into(),
        }
    }
}

/// Proof strip under the hero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Proof {
    pub years: String,
    pub countries: String,
    pub sectors: String,
}

impl Proof {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty() && self.countries.is_empty() && self.sectors.is_empty()
    }
}

/// A highlight metric pill (`50%` / `Faster hiring` / `...`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub description: String,
}
