//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! content = "content"    # Content store directory (relative to site root)
//! output = "public"      # Output directory (relative to site root)
//! minify = true          # Minify HTML and XML output
//! clean = false          # Empty the output directory before writing
//! sitemap = true         # Generate sitemap.xml
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Content store directory.
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Minify generated HTML and XML.
    pub minify: bool,

    /// Remove everything in the output directory first.
    pub clean: bool,

    /// Write `sitemap.xml`.
    pub sitemap: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            minify: true,
            clean: false,
            sitemap: true,
        }
    }
}

impl BuildSection {
    pub const CONTENT: FieldPath = FieldPath::new("build.content");
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");

    /// Paths must already be absolute.
    ///
    /// # Checks
    /// - `output` must differ from `content`
    /// - `output` must not contain `content` (a clean build would delete it)
    /// - `output` must not be the site root
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if self.output == self.content {
            diag.error_with_hint(
                Self::OUTPUT,
                format!("output directory is the content directory `{}`", self.content.display()),
                "use a separate directory, e.g. \"public\"",
            );
        } else if self.content.starts_with(&self.output) {
            diag.error_with_hint(
                Self::OUTPUT,
                format!("output directory contains the content directory `{}`", self.content.display()),
                "use a separate directory, e.g. \"public\"",
            );
        }

        if self.output == root {
            diag.error_with_hint(
                Self::OUTPUT,
                "output directory is the site root",
                "use a subdirectory, e.g. \"public\"",
            );
        }

        if !self.content.is_dir() {
            diag.warn(
                Self::CONTENT,
                format!("`{}` does not exist, every collection will be empty", self.content.display()),
            );
        }
    }
}
