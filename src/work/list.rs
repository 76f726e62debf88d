//! In-memory case study source.

use super::{CaseStudy, CaseStudyDir, CaseStudySource, is_valid_identifier, sort_by_timeframe};
use crate::content::Result;

/// Full records held in memory, sorted on construction.
#[derive(Debug, Clone, Default)]
pub struct CaseStudyList {
    studies: Vec<CaseStudy>,
}

impl CaseStudyList {
    pub fn new(mut studies: Vec<CaseStudy>) -> Self {
        sort_by_timeframe(&mut studies);
        Self { studies }
    }

    /// Read every document in `dir` once.
    pub fn preload(dir: &CaseStudyDir) -> Result<Self> {
        Ok(Self::new(dir.load_all()?))
    }

    pub fn len(&self) -> usize {
        self.studies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.studies.is_empty()
    }

    /// Full records, bodies included.
    pub fn records(&self) -> &[CaseStudy] {
        &self.studies
    }
}

impl CaseStudySource for CaseStudyList {
    fn list_all(&self) -> Result<Vec<CaseStudy>> {
        Ok(self
            .studies
            .iter()
            .cloned()
            .map(CaseStudy::without_body)
            .collect())
    }

    fn get(&self, identifier: &str) -> Result<Option<CaseStudy>> {
        if !is_valid_identifier(identifier) {
            return Ok(None);
        }
        Ok(self
            .studies
            .iter()
            .find(|study| study.identifier == identifier)
            .cloned())
    }
}
