//! Content store.
//!
//! Flat JSON collections plus front-matter documents, read once per build:
//!
//! ```text
//! content/
//! ├── profile.json        ProfileFacts
//! ├── skills.json         SkillSet
//! ├── services.json       [Service]
//! ├── books.json          [Book]
//! ├── research.json       [Research]
//! ├── testimonials.json   [Testimonial]
//! ├── work.json           [WorkIndexEntry]
//! ├── work/*.mdx          case studies (see `crate::work`)
//! └── sections/
//!     ├── skills.mdx
//!     └── about.mdx
//! ```
//!
//! A missing file reads as an empty collection. A file that exists but
//! cannot be read or decoded is a [`ContentError`].

mod collections;
mod error;
pub mod frontmatter;
mod profile;
mod skills;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::debug;

pub use collections::{Book, Research, Service, Testimonial, WorkIndexEntry, featured};
pub use error::{ContentError, Result};
pub use profile::{CtaLabels, Metric, ProfileFacts, Proof};
pub use skills::{CoreSkill, SkillSet, humanize_category};

/// Ordered JSON object, used for front matter metadata.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Subdirectory holding case-study documents.
pub const WORK_DIR: &str = "work";
/// Subdirectory holding narrative section documents.
pub const SECTIONS_DIR: &str = "sections";

/// Everything the pages draw from, loaded up front and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    root: PathBuf,
    pub profile: ProfileFacts,
    pub skills: SkillSet,
    pub services: Vec<Service>,
    pub books: Vec<Book>,
    pub research: Vec<Research>,
    pub testimonials: Vec<Testimonial>,
    pub work_index: Vec<WorkIndexEntry>,
    /// Body of `sections/skills.mdx`, front matter stripped.
    pub skills_narrative: Option<String>,
    /// Body of `sections/about.mdx`, front matter stripped.
    pub about_narrative: Option<String>,
}

impl ContentStore {
    /// Load every collection under `base`.
    pub fn load(base: &Path) -> Result<Self> {
        let store = Self {
            root: base.to_path_buf(),
            profile: read_json(&base.join("profile.json"))?,
            skills: read_json(&base.join("skills.json"))?,
            services: read_json(&base.join("services.json"))?,
            books: read_json(&base.join("books.json"))?,
            research: read_json(&base.join("research.json"))?,
            testimonials: read_json(&base.join("testimonials.json"))?,
            work_index: read_json(&base.join("work.json"))?,
            skills_narrative: read_section(base, "skills")?,
            about_narrative: read_section(base, "about")?,
        };

        debug!(
            "content";
            "loaded {} services, {} books, {} papers, {} work entries from {}",
            store.services.len(),
            store.books.len(),
            store.research.len(),
            store.work_index.len(),
            base.display()
        );
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory the case-study documents live in.
    pub fn work_dir(&self) -> PathBuf {
        self.root.join(WORK_DIR)
    }
}

/// Read a file, mapping "not found" to `None`.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ContentError::Io(path.to_path_buf(), e)),
    }
}

fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let Some(text) = read_optional(path)? else {
        debug!("content"; "{} not found, using empty collection", path.display());
        return Ok(T::default());
    };
    serde_json::from_str(&text).map_err(|e| ContentError::Json(path.to_path_buf(), e))
}

/// `sections/<name>.mdx`, falling back to `.md`.
fn read_section(base: &Path, name: &str) -> Result<Option<String>> {
    let dir = base.join(SECTIONS_DIR);
    for ext in ["mdx", "md"] {
        if let Some(text) = read_optional(&dir.join(format!("{name}.{ext}")))? {
            let body = frontmatter::parse(&text).body.to_owned();
            return Ok(Some(body).filter(|b| !b.trim().is_empty()));
        }
    }
    Ok(None)
}
