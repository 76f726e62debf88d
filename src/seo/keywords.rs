//! Keyword aggregation.

use rustc_hash::FxHashSet;

use crate::content::SkillSet;

/// Positioning terms appended to every keyword list unless configured.
pub const DEFAULT_BRAND_TERMS: [&str; 12] = [
    "CTO",
    "AI Platform Architect",
    "Fractional CTO",
    "Tech Leadership",
    "HRTech",
    "Healthcare Tech",
    "IoT",
    "Cloud Architecture",
    "DevOps",
    "Machine Learning",
    "AI",
    "Platform Engineering",
];

/// Everything the skill set says the owner knows about: explicit keywords,
/// core skill names, tools, supporting labels. First occurrence wins.
pub fn knowledge(skills: &SkillSet) -> Vec<String> {
    let labels = skills
        .keywords
        .iter()
        .map(String::as_str)
        .chain(skills.core_names())
        .chain(skills.tools())
        .chain(skills.supporting_labels());
    dedupe(labels)
}

/// The `keywords` meta value: the knowledge list followed by the brand
/// terms, de-duplicated and joined with `", "`.
pub fn keywords<S: AsRef<str>>(skills: &SkillSet, brand_terms: &[S]) -> String {
    let labels = knowledge(skills);
    let all = labels
        .iter()
        .map(String::as_str)
        .chain(brand_terms.iter().map(AsRef::as_ref));
    dedupe(all).join(", ")
}

/// Exact-string de-duplication, keeping first-seen order.
fn dedupe<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    labels
        .filter(|label| seen.insert(*label))
        .map(str::to_string)
        .collect()
}
