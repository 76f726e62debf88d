//! SEO metadata derived from the content store.
//!
//! - `keywords`: knowledge list and keyword meta string
//! - `schema`: JSON-LD structured data fragments
//! - `og`: per-page title, description, Open Graph and Twitter tags
//!
//! Everything here is a pure function of its inputs.

pub mod keywords;
pub mod og;
pub mod schema;

pub use keywords::{DEFAULT_BRAND_TERMS, keywords, knowledge};
pub use og::{OgDefaults, OgType, PageMeta};
pub use schema::StructuredData;
