//! Filesystem-backed case study source.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{CaseStudy, CaseStudySource, EXTENSIONS, is_valid_identifier, sort_by_timeframe};
use crate::content::{ContentError, Result, read_optional};
use crate::debug;

/// Case studies read from a directory of `*.mdx` / `*.md` documents.
///
/// Every call re-reads the directory; preload into a
/// [`CaseStudyList`](super::CaseStudyList) to read once.
#[derive(Debug, Clone)]
pub struct CaseStudyDir {
    dir: PathBuf,
}

impl CaseStudyDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Full records (bodies included) for every document, sorted.
    pub fn load_all(&self) -> Result<Vec<CaseStudy>> {
        let mut studies = self
            .documents()?
            .into_iter()
            .map(|path| self.load(&path))
            .collect::<Result<Vec<_>>>()?;
        sort_by_timeframe(&mut studies);
        Ok(studies)
    }

    /// Document paths, sorted by file name. A missing directory is empty.
    fn documents(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("work"; "{} not found, no case studies", self.dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(ContentError::Io(self.dir.clone(), e)),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| ContentError::Io(self.dir.clone(), e))?
                .path();
            let is_document = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| EXTENSIONS.contains(&ext));
            if is_document && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    fn load(&self, path: &Path) -> Result<CaseStudy> {
        let text = fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
        Ok(from_path(path, &text))
    }

    /// Look the identifier up as a file name.
    fn get_by_file(&self, identifier: &str) -> Result<Option<CaseStudy>> {
        for ext in EXTENSIONS {
            let path = self.dir.join(format!("{identifier}.{ext}"));
            if let Some(text) = read_optional(&path)? {
                return Ok(Some(from_path(&path, &text)));
            }
        }
        Ok(None)
    }
}

fn from_path(path: &Path, text: &str) -> CaseStudy {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    CaseStudy::from_document(&stem, text).with_source(path.to_path_buf())
}

impl CaseStudySource for CaseStudyDir {
    fn list_all(&self) -> Result<Vec<CaseStudy>> {
        Ok(self
            .load_all()?
            .into_iter()
            .map(CaseStudy::without_body)
            .collect())
    }

    /// Tries `<identifier>.mdx` then `<identifier>.md`. A document whose
    /// metadata `slug` differs from its file name is found by scanning.
    fn get(&self, identifier: &str) -> Result<Option<CaseStudy>> {
        if !is_valid_identifier(identifier) {
            return Ok(None);
        }

        if let Some(study) = self.get_by_file(identifier)?
            && study.identifier == identifier
        {
            return Ok(Some(study));
        }

        Ok(self
            .load_all()?
            .into_iter()
            .find(|study| study.identifier == identifier))
    }
}
