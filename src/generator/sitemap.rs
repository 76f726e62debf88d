//! Sitemap generation.
//!
//! Lists every built route for search engine indexing. The not-found page
//! is never listed.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/work/hiring</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, generator::minify_xml, log, page::Route, utils::url::absolute};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Output file name, relative to the output directory.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Build sitemap if enabled.
pub fn build_sitemap(config: &SiteConfig, routes: &[Route]) -> Result<()> {
    if config.build.sitemap {
        let sitemap = Sitemap::build(config.site.base_url(), routes);
        sitemap.write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    fn build(base_url: &str, routes: &[Route]) -> Self {
        let urls = routes
            .iter()
            .map(|route| absolute(base_url, &route.path()))
            .collect();
        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 64);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for loc in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&loc));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(SITEMAP_FILE);
        let count = self.urls.len();
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), config.build.minify);

        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{} ({})", SITEMAP_FILE, crate::utils::plural_count(count, "url"));
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::build("https://example.com", &[]).into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_routes() {
        let routes = [
            Route::Home,
            Route::WorkIndex,
            Route::WorkDetail("hiring".into()),
            Route::WorkDetail("r&d lab".into()),
        ];
        let xml = Sitemap::build("https://example.com/", &routes).into_xml();

        assert!(xml.contains("<loc>https://example.com</loc>"));
        assert!(xml.contains("<loc>https://example.com/work</loc>"));
        assert!(xml.contains("<loc>https://example.com/work/hiring</loc>"));
        assert!(xml.contains("<loc>https://example.com/work/r&amp;d%20lab</loc>"));
        assert_eq!(xml.matches("<url>").count(), 4);
        assert_eq!(xml.matches("</url>").count(), 4);
    }

    #[test]
    fn test_build_sitemap_respects_flag() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.build.minify = true;

        build_sitemap(&config, &[Route::Home]).unwrap();
        let xml = fs::read_to_string(dir.path().join(SITEMAP_FILE)).unwrap();
        assert!(xml.contains("<url><loc>http://localhost:3000</loc></url>"));

        fs::remove_file(dir.path().join(SITEMAP_FILE)).unwrap();
        config.build.sitemap = false;
        build_sitemap(&config, &[Route::Home]).unwrap();
        assert!(!dir.path().join(SITEMAP_FILE).exists());
    }
}
