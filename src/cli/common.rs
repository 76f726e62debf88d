//! Loading shared by every command.

use anyhow::{Context, Result, bail};

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::debug;
use crate::page::{Composer, SiteSettings};
use crate::utils::plural_count;
use crate::work::{
    CaseStudyDir, CaseStudyList, duplicate_identifiers, format_conflicts, print_conflicts,
};

/// Everything read from disk, read once.
pub struct Site {
    pub store: ContentStore,
    pub studies: CaseStudyList,
    pub settings: SiteSettings,
}

impl Site {
    /// Read the content store and every case study.
    ///
    /// Fails on malformed or unreadable content and on duplicate case study
    /// identifiers.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let content_dir = &config.build.content;
        let store = ContentStore::load(content_dir)
            .with_context(|| format!("Failed to load content from {}", content_dir.display()))?;

        let work_dir = CaseStudyDir::new(store.work_dir());
        let studies = CaseStudyList::preload(&work_dir).with_context(|| {
            format!("Failed to load case studies from {}", work_dir.path().display())
        })?;

        let conflicts = duplicate_identifiers(studies.records());
        if !conflicts.is_empty() {
            print_conflicts(&conflicts, config.get_root());
            bail!(
                "duplicate case study identifiers:\n{}",
                format_conflicts(&conflicts)
            );
        }

        debug!("content"; "{} loaded", plural_count(studies.len(), "case study document"));
        Ok(Self {
            store,
            studies,
            settings: SiteSettings::from_config(config),
        })
    }

    pub fn composer(&self) -> Composer<'_> {
        Composer::new(&self.store, &self.studies, &self.settings)
    }
}
