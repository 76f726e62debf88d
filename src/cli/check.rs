//! Check command implementation.
//!
//! Runs the whole build in memory: every route is composed and rendered,
//! nothing is written. Problems that would not fail a build are reported as
//! warnings.

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;

use super::common::Site;
use crate::config::SiteConfig;
use crate::utils::plural_count;
use crate::work::is_valid_identifier;
use crate::{debug, log};

/// What a check found.
#[derive(Debug, Default)]
struct CheckReport {
    /// Pages composed, the not-found page included.
    pages: usize,
    work: usize,
    /// `work.json` slugs with no case study behind them.
    dangling: Vec<String>,
    /// Case study identifiers no URL can reach.
    unroutable: Vec<String>,
}

impl CheckReport {
    fn warnings(&self) -> usize {
        self.dangling.len() + self.unroutable.len()
    }
}

/// Execute check command
pub fn check_site(config: &SiteConfig) -> Result<()> {
    let site = Site::load(config)?;
    let report = run_checks(&site)?;

    for slug in &report.dangling {
        log!("warning"; "work.json entry '{slug}' has no case study document");
    }
    for id in &report.unroutable {
        log!("warning"; "case study id {id:?} cannot be routed and is skipped");
    }

    log!("check"; "{} composed ({} case studies), {}",
        plural_count(report.pages, "page"),
        report.work,
        plural_count(report.warnings(), "warning"));
    Ok(())
}

fn run_checks(site: &Site) -> Result<CheckReport> {
    let composer = site.composer();
    let routes = composer.routes()?;

    routes.par_iter().try_for_each(|route| -> Result<()> {
        let doc = composer
            .resolve(route)
            .with_context(|| format!("Failed to compose {route}"))?
            .found()
            .ok_or_else(|| anyhow!("route {route} resolved to nothing"))?;
        composer.render(&doc)?;
        debug!("check"; "{route} {:?}, {} schema fragments",
            doc.heading, doc.structured.len());
        Ok(())
    })?;
    composer.render(&composer.not_found())?;

    let records = site.studies.records();
    let dangling = site
        .store
        .work_index
        .iter()
        .filter(|entry| !records.iter().any(|s| s.identifier == entry.slug))
        .map(|entry| entry.slug.clone())
        .collect();
    let unroutable = records
        .iter()
        .filter(|s| !is_valid_identifier(&s.identifier))
        .map(|s| s.identifier.clone())
        .collect();

    Ok(CheckReport {
        pages: routes.len() + 1,
        work: routes.iter().filter(|r| r.kind() == "work").count(),
        dangling,
        unroutable,
    })
}
