//! Flat JSON collections: services, books, research, testimonials, and the
//! work index used by the home page.

use serde::{Deserialize, Serialize};

/// Engagement offered on the home page (`services.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub name: String,
    /// One-sentence outcome statement.
    pub outcome: String,
    pub process: Vec<String>,
    pub deliverables: Vec<String>,
}

/// Book or long-form article (`books.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub title: String,
    /// `Book`, `Article`, `Guide`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub blurb: String,
    pub url: Option<String>,
    pub year: Option<String>,
    pub tags: Vec<String>,
}

/// Paper or conference talk (`research.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Research {
    pub title: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub venue: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: Option<String>,
}

/// Summary card for the home page (`work.json`).
///
/// Independent of the case-study documents; `slug` should name one of them
/// for the card link to resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkIndexEntry {
    pub slug: String,
    pub title: String,
    pub category: String,
    #[serde(rename = "client_or_org")]
    pub client: String,
    pub period: String,
    pub summary: String,
    pub hero_metric: String,
    pub outcomes: Vec<String>,
    pub stack: Vec<String>,
    pub images: Vec<String>,
    pub featured: bool,
}

/// Featured entries shown on the home page, at most `limit`, in file order.
pub fn featured(entries: &[WorkIndexEntry], limit: usize) -> Vec<&WorkIndexEntry> {
    entries.iter().filter(|e| e.featured).take(limit).collect()
}
