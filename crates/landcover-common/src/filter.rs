//! Filter selection over the statistics table.
//!
//! An immutable value object: filter widgets build a new selection through
//! the `with_*` methods and hand it to query functions, instead of mutating
//! a session-scoped store in place.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::coordinate::normalize_name;
use crate::record::LandCoverRecord;

/// A set of restrictions applied to the statistics table.
///
/// `None` fields leave that dimension unrestricted. For `classes`,
/// `Some(empty set)` is distinct from `None`: it corresponds to a cleared
/// class multiselect and matches no rows at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Restrict to one municipality, matched case-insensitively after
    /// trimming (the same rule marker lookups use).
    pub municipality: Option<String>,
    /// Inclusive year range.
    pub years: Option<(u16, u16)>,
    /// Cover-class display names to keep.
    pub classes: Option<BTreeSet<String>>,
}

impl FilterSelection {
    /// A selection that matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns a new selection restricted to one municipality.
    pub fn with_municipality(self, municipality: impl Into<String>) -> Self {
        Self {
            municipality: Some(municipality.into()),
            ..self
        }
    }

    /// Returns a new selection restricted to years `start..=end`.
    pub fn with_years(self, start: u16, end: u16) -> Self {
        Self {
            years: Some((start, end)),
            ..self
        }
    }

    /// Returns a new selection keeping only the named cover classes.
    pub fn with_classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: Some(classes.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    /// Whether a record passes every active restriction.
    pub fn matches(&self, record: &LandCoverRecord) -> bool {
        if let Some((start, end)) = self.years {
            if record.year < start || record.year > end {
                return false;
            }
        }

        if let Some(municipality) = &self.municipality {
            if normalize_name(&record.municipality) != normalize_name(municipality) {
                return false;
            }
        }

        if let Some(classes) = &self.classes {
            if !classes.contains(&record.class_name) {
                return false;
            }
        }

        true
    }
}
