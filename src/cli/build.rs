//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Load** - Content store and case studies, read once
//! - **Compose** - Every route rendered in parallel, in memory
//! - **Prepare** - Clean or create the output directory
//! - **Write** - Pages and `404.html`, alongside the sitemap
//! - **Finalize** - Embedded assets, logging
//!
//! Nothing is written until every page has composed, so a content error
//! never leaves a half-built site behind.

use crate::{
    config::SiteConfig,
    embed::write_embedded_assets,
    generator::{minify_html, sitemap::build_sitemap},
    log,
    logger::ProgressLine,
    page::{Composer, NOT_FOUND_FILE, Route},
    utils::plural_count,
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::common::Site;

/// A composed page waiting to be written.
struct RenderedPage {
    /// Relative to the output directory.
    file: PathBuf,
    html: String,
}

/// Build the entire site.
///
/// Pipeline: load -> compose -> prepare -> write + sitemap -> finalize
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<()> {
    let site = Site::load(config)?;
    let composer = site.composer();

    let routes = composer.routes()?;
    let progress = create_progress(&routes, quiet);
    let mut pages = compose_all(&composer, &routes, progress.as_ref())?;
    if let Some(p) = progress {
        p.finish();
    }

    pages.push(RenderedPage {
        file: PathBuf::from(NOT_FOUND_FILE),
        html: composer.render(&composer.not_found())?,
    });

    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let (pages_result, sitemap_result) = rayon::join(
        || write_pages(output, &pages, config.build.minify),
        || build_sitemap(config, &routes),
    );
    pages_result?;
    sitemap_result?;

    write_embedded_assets(output)?;

    if !quiet {
        log!("build"; "{} written to {}",
            plural_count(pages.len(), "page"),
            config.root_relative(output).display());
    }
    Ok(())
}

/// Progress counters per route kind.
fn create_progress(routes: &[Route], quiet: bool) -> Option<ProgressLine> {
    if quiet {
        return None;
    }
    let work = routes.iter().filter(|r| r.kind() == "work").count();
    Some(ProgressLine::new(&[
        ("pages", routes.len() - work),
        ("work", work),
    ]))
}

/// Compose and render every route in parallel, keeping route order.
fn compose_all(
    composer: &Composer,
    routes: &[Route],
    progress: Option<&ProgressLine>,
) -> Result<Vec<RenderedPage>> {
    routes
        .par_iter()
        .map(|route| -> Result<RenderedPage> {
            // routes come from the same source, so a miss is a bug
            let doc = composer
                .resolve(route)
                .with_context(|| format!("Failed to compose {route}"))?
                .found()
                .ok_or_else(|| anyhow!("route {route} resolved to nothing"))?;
            let html = composer.render(&doc)?;
            if let Some(p) = progress {
                p.inc(route.kind());
            }
            Ok(RenderedPage {
                file: route.output_file(),
                html,
            })
        })
        .collect()
}

/// Clear the output directory when asked, then make sure it exists.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

fn write_pages(output: &Path, pages: &[RenderedPage], minify: bool) -> Result<()> {
    pages.par_iter().try_for_each(|page| {
        let path = output.join(&page.file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let html = minify_html(&page.html, minify);
        fs::write(&path, html.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    fn config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = root.to_path_buf();
        config.build.content = root.join("content");
        config.build.output = root.join("public");
        config
    }

    #[test]
    fn test_build_writes_every_route() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "content/profile.json", r#"{"name":"Ada","title":"CTO"}"#);
        write(
            root,
            "content/work/hiring.mdx",
            "---\ntitle: Hiring\nstack: [Rust]\n---\n## Context\n",
        );

        build_site(&config(root), true).unwrap();

        let public = root.join("public");
        for file in [
            "index.html",
            "work/index.html",
            "work/hiring/index.html",
            "services/index.html",
            "skills/index.html",
            "about/index.html",
            "contact/index.html",
            "404.html",
            "sitemap.xml",
            "assets/site.css",
            "assets/cta.js",
        ] {
            assert!(public.join(file).is_file(), "missing {file}");
        }

        let detail = fs::read_to_string(public.join("work/hiring/index.html")).unwrap();
        assert!(detail.contains("<title>Hiring - Ada</title>"));
        let sitemap = fs::read_to_string(public.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("http://localhost:3000/work/hiring"));
        assert!(!sitemap.contains("404"));
    }

    #[test]
    fn test_failed_build_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "content/skills.json", "{ not json");

        assert!(build_site(&config(root), true).is_err());
        assert!(!root.join("public").exists());
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "public/stale.html", "old");

        let mut config = config(root);
        build_site(&config, true).unwrap();
        assert!(root.join("public/stale.html").exists());

        config.build.clean = true;
        build_site(&config, true).unwrap();
        assert!(!root.join("public/stale.html").exists());
        assert!(root.join("public/index.html").exists());
    }
}
