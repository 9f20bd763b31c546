//! The cascading selection resolver.
//!
//! Owns a [`Selection`] and the option list for each dependent field,
//! keeping them consistent as edits arrive. Category and caste options
//! come synchronously from the static catalog; AC options come from the
//! backend directory, so PC edits hand out a generation-tagged
//! [`AcFetch`] ticket and responses are applied only if their ticket is
//! still current.
//!
//! ## Stale-response policy
//!
//! Rapid PC edits can leave multiple AC fetches in flight. Only the
//! response whose ticket matches the generation at resolution time is
//! applied; everything else is discarded. A later-issued fetch therefore
//! always takes precedence, regardless of arrival order.

use thiserror::Error;

use crate::selection::{derive_downstream, Selection, SelectionField};

/// Rejection of a downstream selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The value is not in the option list currently offered for the
    /// field: either the UI offered something it should not have, or the
    /// selection went stale under an upstream edit.
    #[error("{field} \"{value}\" is not among the currently offered options")]
    NotOffered {
        /// The rejected field.
        field: SelectionField,
        /// The rejected value.
        value: String,
    },

    /// An AC selection arrived while the AC list fetch was still pending.
    #[error("ac options are still loading")]
    OptionsPending,
}

/// A ticket for one AC list fetch, tagged with the generation of the PC
/// edit that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcFetch {
    /// The PC whose AC list should be fetched.
    pub pc: String,
    generation: u64,
}

/// Maintains the selection and its dependent option lists as one
/// consistent unit.
#[derive(Debug, Default)]
pub struct CascadeResolver {
    selection: Selection,
    category_options: Vec<String>,
    caste_options: Vec<String>,
    ac_options: Vec<String>,
    ac_pending: bool,
    ac_generation: u64,
}

impl CascadeResolver {
    /// A resolver with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Category options for the selected religion.
    pub fn category_options(&self) -> &[String] {
        &self.category_options
    }

    /// Caste options for the selected religion + category.
    pub fn caste_options(&self) -> &[String] {
        &self.caste_options
    }

    /// AC options for the selected PC. Empty while a fetch is pending.
    pub fn ac_options(&self) -> &[String] {
        &self.ac_options
    }

    /// Whether an AC fetch is in flight.
    pub fn ac_pending(&self) -> bool {
        self.ac_pending
    }

    /// Whether the AC field accepts input: a PC is selected and its AC
    /// list has arrived.
    pub fn ac_enabled(&self) -> bool {
        self.selection.pc.is_some() && !self.ac_pending
    }

    /// Select a religion. Clears category and caste, recomputes the
    /// category options, and empties the caste options.
    ///
    /// An empty string clears the religion. Unknown religions are kept in
    /// the selection but yield empty category options.
    pub fn set_religion(&mut self, religion: &str) {
        self.selection.religion =
            if religion.is_empty() { None } else { Some(religion.to_string()) };
        self.selection = derive_downstream(&self.selection, SelectionField::Religion);
        self.category_options = match self.selection.religion.as_deref() {
            Some(r) => adhikar_catalog::categories_for(r)
                .into_iter()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };
        self.caste_options.clear();
    }

    /// Select a category. Clears caste and recomputes the caste options.
    ///
    /// # Errors
    ///
    /// Rejects values not in the current category options.
    pub fn set_category(&mut self, category: &str) -> Result<(), SelectionError> {
        if !self.category_options.iter().any(|c| c == category) {
            return Err(SelectionError::NotOffered {
                field: SelectionField::Category,
                value: category.to_string(),
            });
        }
        self.selection.category = Some(category.to_string());
        self.selection = derive_downstream(&self.selection, SelectionField::Category);
        // Religion is necessarily set: the category list is empty otherwise.
        let religion = self.selection.religion.as_deref().unwrap_or_default();
        self.caste_options = adhikar_catalog::castes_for(religion, category)
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(())
    }

    /// Select a caste. No downstream effect.
    ///
    /// # Errors
    ///
    /// Rejects values not in the current caste options.
    pub fn set_caste(&mut self, caste: &str) -> Result<(), SelectionError> {
        if !self.caste_options.iter().any(|c| c == caste) {
            return Err(SelectionError::NotOffered {
                field: SelectionField::Caste,
                value: caste.to_string(),
            });
        }
        self.selection.caste = Some(caste.to_string());
        Ok(())
    }

    /// Select a PC. Clears the AC selection and options and issues a
    /// fetch ticket for the new PC's AC list; the AC field stays disabled
    /// until the matching response is applied.
    pub fn set_pc(&mut self, pc: &str) -> AcFetch {
        self.selection.pc = Some(pc.to_string());
        self.selection = derive_downstream(&self.selection, SelectionField::Pc);
        self.ac_options.clear();
        self.ac_pending = true;
        self.ac_generation += 1;
        AcFetch {
            pc: pc.to_string(),
            generation: self.ac_generation,
        }
    }

    /// Apply the AC list fetched for a ticket.
    ///
    /// Returns `true` if applied; `false` if the ticket was superseded by
    /// a later PC edit and the response was discarded.
    pub fn apply_ac_options(&mut self, fetch: &AcFetch, options: Vec<String>) -> bool {
        if fetch.generation != self.ac_generation {
            tracing::warn!(pc = %fetch.pc, "discarding stale ac list response");
            return false;
        }
        self.ac_options = options;
        self.ac_pending = false;
        true
    }

    /// Record that a ticket's fetch failed.
    ///
    /// Returns `true` if the ticket was current (the AC field re-enables
    /// with no options and the caller surfaces the error); `false` if the
    /// failure belonged to a superseded fetch and was ignored.
    pub fn ac_fetch_failed(&mut self, fetch: &AcFetch) -> bool {
        if fetch.generation != self.ac_generation {
            tracing::debug!(pc = %fetch.pc, "ignoring failure of superseded ac fetch");
            return false;
        }
        self.ac_pending = false;
        true
    }

    /// Select an AC.
    ///
    /// # Errors
    ///
    /// Rejects while the AC list is still loading, and rejects values not
    /// in the fetched options.
    pub fn set_ac(&mut self, ac: &str) -> Result<(), SelectionError> {
        if self.ac_pending {
            return Err(SelectionError::OptionsPending);
        }
        if !self.ac_options.iter().any(|a| a == ac) {
            return Err(SelectionError::NotOffered {
                field: SelectionField::Ac,
                value: ac.to_string(),
            });
        }
        self.selection.ac = Some(ac.to_string());
        Ok(())
    }
}
