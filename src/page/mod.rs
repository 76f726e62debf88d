//! Page composition: routes, calls to action, sections and the layout.
//!
//! # Module Structure
//!
//! ```text
//! page/
//! ├── route.rs       # Route <-> URL path <-> output file
//! ├── cta.rs         # CallToAction + AnalyticsEvent
//! ├── sections/      # HTML fragments per page section
//! ├── settings.rs    # SiteSettings (config values pages read)
//! ├── document.rs    # PageDocument, Resolution
//! └── compose.rs     # Composer
//! ```

mod compose;
pub mod cta;
mod document;
mod route;
mod sections;
pub mod settings;

pub use compose::Composer;
pub use cta::{AnalyticsEvent, CallToAction};
pub use document::{PageDocument, Resolution};
pub use route::{NOT_FOUND_FILE, Route};
pub use settings::{Analytics, SiteSettings};
