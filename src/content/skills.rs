//! `skills.json`: core offerings and supporting skill categories.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Core skills plus supporting labels grouped by category.
///
/// `supporting` keeps file order; its keys are machine-cased
/// (`aiMachineLearning`) and go through [`humanize_category`] for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSet {
    pub keywords: Vec<String>,
    pub core: Vec<CoreSkill>,
    pub supporting: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreSkill {
    pub name: String,
    pub one_liner: String,
    pub outcomes: Vec<String>,
    pub tools: Vec<String>,
}

impl SkillSet {
    pub fn core_names(&self) -> impl Iterator<Item = &str> {
        self.core.iter().map(|skill| skill.name.as_str())
    }

    /// Tool labels across all core skills, in order.
    pub fn tools(&self) -> impl Iterator<Item = &str> {
        self.core
            .iter()
            .flat_map(|skill| skill.tools.iter().map(String::as_str))
    }

    /// Supporting labels across all categories, in order.
    pub fn supporting_labels(&self) -> impl Iterator<Item = &str> {
        self.supporting
            .values()
            .flat_map(|labels| labels.iter().map(String::as_str))
    }
}

/// Turn a machine-cased category key into a display heading.
///
/// A space goes before every ASCII capital, then the first character is
/// uppercased: `aiMachineLearning` -> `Ai Machine Learning`,
/// `cloud` -> `Cloud`. A key that already starts with a capital keeps the
/// leading space (`DevOps` -> ` Dev Ops`).
pub fn humanize_category(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
