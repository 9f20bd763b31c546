//! Catalog lookups.
//!
//! The hierarchy is religion → category → caste. A religion resolves to at
//! most one [`CasteDataset`]; categories and castes are looked up only
//! within that dataset, so a category from the general table is never
//! offered under the Muslim religion and vice versa.

use serde::Serialize;

use adhikar_core::Gender;

use crate::data::{
    GENERAL_CASTE_MAP, MUSLIM_CASTE_MAP, MUSLIM_RELIGION, OTHER_RELIGION, RELIGIONS,
};

/// Which of the two static caste tables a religion resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CasteDataset {
    /// The shared table used by most religions.
    General,
    /// The Muslim-specific table.
    Muslim,
}

impl CasteDataset {
    fn table(self) -> &'static [(&'static str, &'static [&'static str])] {
        match self {
            Self::General => GENERAL_CASTE_MAP,
            Self::Muslim => MUSLIM_CASTE_MAP,
        }
    }
}

/// The closed religion list, in dropdown order.
pub fn religions() -> &'static [&'static str] {
    RELIGIONS
}

/// Whether a religion is in the closed list.
pub fn is_known_religion(religion: &str) -> bool {
    RELIGIONS.contains(&religion)
}

/// Resolve a religion to its caste dataset.
///
/// Returns `None` for unknown religions and for the explicit "other"
/// option, which carries no caste hierarchy.
pub fn dataset_for(religion: &str) -> Option<CasteDataset> {
    if religion == MUSLIM_RELIGION {
        Some(CasteDataset::Muslim)
    } else if religion == OTHER_RELIGION || !is_known_religion(religion) {
        None
    } else {
        Some(CasteDataset::General)
    }
}

/// The ordered category names for a religion.
///
/// Empty for unknown religions, the empty string, and the "other" option.
pub fn categories_for(religion: &str) -> Vec<&'static str> {
    match dataset_for(religion) {
        Some(dataset) => dataset.table().iter().map(|(category, _)| *category).collect(),
        None => Vec::new(),
    }
}

/// The ordered caste names for a religion + category pair.
///
/// Empty whenever the religion has no dataset or the category is not in
/// that religion's dataset.
pub fn castes_for(religion: &str, category: &str) -> Vec<&'static str> {
    let Some(dataset) = dataset_for(religion) else {
        return Vec::new();
    };
    dataset
        .table()
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, castes)| castes.to_vec())
        .unwrap_or_default()
}

/// A gender dropdown entry with its bilingual labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderOption {
    /// The wire value.
    pub value: Gender,
    /// Hindi label.
    pub label: &'static str,
    /// English label.
    pub label_en: &'static str,
}

/// The gender options, in dropdown order.
pub fn gender_options() -> Vec<GenderOption> {
    Gender::ALL
        .iter()
        .map(|&value| GenderOption {
            value,
            label: value.label(),
            label_en: value.label_en(),
        })
        .collect()
}
