//! Case study repository.
//!
//! One front-matter document per case study. The document's metadata is
//! normalized into a [`CaseStudy`] with every field defaulting to empty; the
//! body is kept only for single-record fetches.
//!
//! [`CaseStudySource`] is the seam the page composer reads through:
//! [`CaseStudyDir`] reads a directory on demand, [`CaseStudyList`] serves
//! preloaded records from memory.

mod conflict;
mod dir;
mod list;

use std::path::PathBuf;

use serde::Serialize;

use crate::content::Result;
use crate::content::frontmatter;

pub use conflict::{IdentifierConflict, duplicate_identifiers, format_conflicts, print_conflicts};
pub use dir::CaseStudyDir;
pub use list::CaseStudyList;

/// Document extensions, in lookup order.
pub const EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// A normalized case study.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    /// Routable key; `slug` in metadata, else the file stem.
    #[serde(rename = "slug")]
    pub identifier: String,
    pub title: String,
    pub role: String,
    pub organization: String,
    /// Free-form period (`2021 - 2023`); ordered lexically.
    pub timeframe: String,
    pub hero_metric: String,
    pub summary: String,
    pub stack: Vec<String>,
    pub outcomes: Vec<String>,
    /// Rich-text body. Never present in list views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Document the record was read from, for diagnostics.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl CaseStudy {
    /// Normalize a document. `stem` is the fallback identifier.
    pub fn from_document(stem: &str, text: &str) -> Self {
        let fm = frontmatter::parse(text);
        let meta = &fm.meta;
        Self {
            identifier: meta.opt_text("slug").unwrap_or_else(|| stem.to_string()),
            title: meta.text("title"),
            role: meta.text("role"),
            organization: meta.text("organization"),
            timeframe: meta.text("timeframe"),
            hero_metric: meta.text("heroMetric"),
            summary: meta.text("summary"),
            stack: meta.list("stack"),
            outcomes: meta.list("outcomes"),
            body: Some(fm.body.to_string()),
            source: None,
        }
    }

    /// The list-view form of this record.
    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = Some(source);
        self
    }
}

/// Read access to case studies.
pub trait CaseStudySource: Sync {
    /// Every case study, bodies stripped, most recent `timeframe` first.
    fn list_all(&self) -> Result<Vec<CaseStudy>>;

    /// The full record for `identifier`, or `None` when there is none.
    fn get(&self, identifier: &str) -> Result<Option<CaseStudy>>;
}

/// Stable sort, `timeframe` descending under byte-wise comparison.
pub fn sort_by_timeframe(studies: &mut [CaseStudy]) {
    studies.sort_by(|a, b| b.timeframe.cmp(&a.timeframe));
}

/// Whether `identifier` can name a document: non-empty, no path separators,
/// no leading dot.
pub fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.is_empty() && !identifier.starts_with('.') && !identifier.contains(['/', '\\'])
}
