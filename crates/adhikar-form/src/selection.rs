//! The cascading selection value object.
//!
//! Two dependency chains: religion → category → caste, and PC → AC.
//! Validity of each downstream field is defined purely in terms of its
//! upstream value, so any upstream change invalidates the whole chain
//! below it.

use serde::{Deserialize, Serialize};

/// The five cascading fields, in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionField {
    /// Religion (root of the caste chain).
    Religion,
    /// Category within the religion's dataset.
    Category,
    /// Caste within the category.
    Caste,
    /// Parliamentary constituency (root of the constituency chain).
    Pc,
    /// Assembly constituency within the PC.
    Ac,
}

impl SelectionField {
    /// The fields invalidated when this one changes.
    pub fn downstream(&self) -> &'static [SelectionField] {
        match self {
            Self::Religion => &[Self::Category, Self::Caste],
            Self::Category => &[Self::Caste],
            Self::Caste => &[],
            Self::Pc => &[Self::Ac],
            Self::Ac => &[],
        }
    }
}

impl std::fmt::Display for SelectionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Religion => "religion",
            Self::Category => "category",
            Self::Caste => "caste",
            Self::Pc => "pc",
            Self::Ac => "ac",
        };
        f.write_str(s)
    }
}

/// The current value of every cascading field.
///
/// A plain value object: cloning and comparing are cheap, and transitions
/// produce a new value rather than mutating shared state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected religion, if any.
    pub religion: Option<String>,
    /// Selected category; valid only within the religion's dataset.
    pub category: Option<String>,
    /// Selected caste; valid only within the category.
    pub caste: Option<String>,
    /// Selected parliamentary constituency, if any.
    pub pc: Option<String>,
    /// Selected assembly constituency; valid only within the PC's AC set.
    pub ac: Option<String>,
}

impl Selection {
    /// Read a field by tag.
    pub fn get(&self, field: SelectionField) -> Option<&str> {
        match field {
            SelectionField::Religion => self.religion.as_deref(),
            SelectionField::Category => self.category.as_deref(),
            SelectionField::Caste => self.caste.as_deref(),
            SelectionField::Pc => self.pc.as_deref(),
            SelectionField::Ac => self.ac.as_deref(),
        }
    }

    fn clear(&mut self, field: SelectionField) {
        match field {
            SelectionField::Religion => self.religion = None,
            SelectionField::Category => self.category = None,
            SelectionField::Caste => self.caste = None,
            SelectionField::Pc => self.pc = None,
            SelectionField::Ac => self.ac = None,
        }
    }
}

/// Clear every field downstream of `changed`, returning the new selection.
///
/// Pure: the input is not mutated, and the changed field itself is kept.
/// This is the single place the dependency chains are walked; the resolver
/// applies it on every upstream edit.
pub fn derive_downstream(selection: &Selection, changed: SelectionField) -> Selection {
    let mut next = selection.clone();
    for &field in changed.downstream() {
        next.clear(field);
    }
    next
}
