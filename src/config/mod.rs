//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Upward config search, path normalization
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Precedence
//!
//! CLI flags and `FOLIO_*` environment variables override `folio.toml`,
//! which overrides the built-in defaults. A missing `folio.toml` is not an
//! error: defaults apply with the working directory as the site root.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file_from, normalize_path};

pub use section::{AnalyticsSection, BuildSection, ContactSection, SeoSection, SiteSection};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when none was found.
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub analytics: AnalyticsSection,

    #[serde(default)]
    pub contact: ContactSection,

    #[serde(default)]
    pub seo: SeoSection,
}

impl SiteConfig {
    /// Load configuration for the current working directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration, searching upward from `cwd`.
    pub fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let name = cli.config_name();

        let mut config = match find_config_file_from(cwd, &name) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None if cli.config.is_some() => {
                bail!("config file '{}' not found", name.display());
            }
            None => {
                debug!("config"; "no {} found, using defaults", name.display());
                Self {
                    root: cwd.to_path_buf(),
                    ..Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.normalize_paths();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply flags and environment overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let site = cli.site_args();
        Self::update_option(&mut self.site.url, site.site_url.as_ref());
        Self::update_option(&mut self.analytics.ga_id, site.ga_id.as_ref());
        Self::update_option(&mut self.analytics.gtm_id, site.gtm_id.as_ref());
        Self::update_option(&mut self.contact.scheduling_url, site.scheduling_url.as_ref());

        if let Commands::Build { build_args } = &cli.command {
            Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
            Self::update_option(&mut self.build.sitemap, build_args.sitemap.as_ref());
            // --clean only ever turns cleaning on
            self.build.clean |= build_args.clean;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Make every path absolute, relative to the root.
    fn normalize_paths(&mut self) {
        self.root = normalize_path(&self.root);
        self.build.content = normalize_path(&self.root.join(&self.build.content));
        self.build.output = normalize_path(&self.root.join(&self.build.output));
        self.site.url = self.site.base_url().to_string();
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&self.root, &mut diag);
        self.analytics.validate(&mut diag);
        self.contact.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[site\nurl = \"x\"").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.site.url, "http://localhost:3000");
        assert_eq!(config.site.theme_color, "#10B9AE");
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.sitemap);
        assert_eq!(config.analytics.ga_id, "G-209MW550NR");
        assert_eq!(config.analytics.gtm_id, "GTM-WLQ52SWL");
        assert_eq!(
            config.contact.scheduling_url,
            "https://calendly.com/diweshsaxena/30min"
        );
        assert_eq!(config.seo.brand_terms.len(), 12);
    }

    #[test]
    fn test_sections_parse() {
        let config = SiteConfig::from_str(
            r##"
[site]
url = "https://example.com/"
og_image = "/og.png"

[build]
output = "dist"
minify = false

[analytics]
enable = false

[seo]
brand_terms = ["Fractional CTO"]
"##,
        )
        .unwrap();
        assert_eq!(config.site.base_url(), "https://example.com");
        assert_eq!(config.site.og_image.as_deref(), Some("/og.png"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert_eq!(config.analytics.ga(), None);
        assert_eq!(config.seo.brand_terms, vec!["Fractional CTO"]);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nurl = \"https://x.dev\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.url, "https://x.dev");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nurl = \"https://x.dev\"\n[build]\nclean = true";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_without_config_file() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load_from(&cli(&["check"]), dir.path()).unwrap();
        let root = normalize_path(dir.path());
        assert_eq!(config.root, root);
        assert_eq!(config.build.content, root.join("content"));
        assert_eq!(config.build.output, root.join("public"));
        assert_eq!(config.config_path, PathBuf::new());
    }

    #[test]
    fn test_load_searches_upward() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("folio.toml"),
            "[site]\nurl = \"https://site.dev\"\n",
        )
        .unwrap();
        let nested = dir.path().join("content/work");
        fs::create_dir_all(&nested).unwrap();

        let config = SiteConfig::load_from(&cli(&["check"]), &nested).unwrap();
        assert_eq!(config.site.url, "https://site.dev");
        assert_eq!(config.root, normalize_path(dir.path()));
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("folio.toml"),
            "[site]\nurl = \"https://site.dev\"\n[build]\nminify = true\n",
        )
        .unwrap();

        let args = [
            "build",
            "--site-url",
            "https://prod.dev/",
            "--minify",
            "false",
            "--ga-id",
            "",
            "--clean",
        ];
        let config = SiteConfig::load_from(&cli(&args), dir.path()).unwrap();
        assert_eq!(config.site.url, "https://prod.dev");
        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert_eq!(config.analytics.ga(), None);
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::load_from(&cli(&["check", "-C", "nope.toml"]), dir.path()).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_validation_collects_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("folio.toml"),
            "[site]\nurl = \"not a url\"\ntheme_color = \"teal\"\n[build]\noutput = \"content\"\n",
        )
        .unwrap();

        let err = SiteConfig::load_from(&cli(&["check"]), dir.path()).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 3);
    }
}
