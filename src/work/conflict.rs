//! Duplicate identifier detection.
//!
//! Two documents claiming the same identifier would write the same
//! `/work/<identifier>` page, so the build refuses to continue.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::CaseStudy;
use crate::log;
use crate::utils::plural_s;

/// An identifier claimed by more than one document.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierConflict {
    pub identifier: String,
    /// Claiming documents, in input order.
    pub sources: Vec<PathBuf>,
}

/// Identifiers claimed more than once, ordered by identifier.
pub fn duplicate_identifiers(studies: &[CaseStudy]) -> Vec<IdentifierConflict> {
    let mut claims: FxHashMap<&str, Vec<PathBuf>> = FxHashMap::default();
    for study in studies {
        let source = study
            .source
            .clone()
            .unwrap_or_else(|| PathBuf::from(&study.identifier));
        claims.entry(&study.identifier).or_default().push(source);
    }

    let mut conflicts: Vec<_> = claims
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(identifier, sources)| IdentifierConflict {
            identifier: identifier.to_string(),
            sources,
        })
        .collect();
    conflicts.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    conflicts
}

/// Print conflicts in the log format, paths relative to `root`.
///
/// ```text
/// [error] case study conflicts (1 identifier, 2 documents)
///
/// [work] hiring (2 documents)
///   - work/hiring.mdx
///   - work/2023-hiring.mdx
/// ```
pub fn print_conflicts(conflicts: &[IdentifierConflict], root: &Path) {
    if conflicts.is_empty() {
        return;
    }

    let total: usize = conflicts.iter().map(|c| c.sources.len()).sum();
    log!("error"; "case study conflicts ({} identifier{}, {} document{})",
        conflicts.len(), plural_s(conflicts.len()), total, plural_s(total));

    for conflict in conflicts {
        eprintln!();
        log!("work"; "{} ({} document{})", conflict.identifier,
            conflict.sources.len(), plural_s(conflict.sources.len()));
        for source in &conflict.sources {
            eprintln!("  - {}", source.strip_prefix(root).unwrap_or(source).display());
        }
    }
}

/// Conflicts as a single message, for error contexts.
pub fn format_conflicts(conflicts: &[IdentifierConflict]) -> String {
    conflicts
        .iter()
        .map(|conflict| {
            let mut lines = vec![format!("{} ({})", conflict.identifier, conflict.sources.len())];
            lines.extend(
                conflict
                    .sources
                    .iter()
                    .map(|source| format!("  - {}", source.display())),
            );
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
