//! Composed pages.

use crate::seo::{PageMeta, StructuredData};

/// One composed page, ready for the layout.
#[derive(Debug, Clone)]
pub struct PageDocument {
    pub meta: PageMeta,
    /// Layout-level fragments first, then page-specific ones.
    pub structured: Vec<StructuredData>,
    /// Visible page heading.
    pub heading: String,
    /// Rendered `<main>` content.
    pub main: String,
}

impl PageDocument {
    /// Schema.org types carried by this page, in order.
    pub fn schema_types(&self) -> Vec<&'static str> {
        self.structured.iter().map(StructuredData::type_name).collect()
    }
}

/// Outcome of resolving a route.
#[derive(Debug, Clone)]
pub enum Resolution {
    Found(PageDocument),
    NotFound,
}

impl Resolution {
    pub fn found(self) -> Option<PageDocument> {
        match self {
            Self::Found(doc) => Some(doc),
            Self::NotFound => None,
        }
    }
}
