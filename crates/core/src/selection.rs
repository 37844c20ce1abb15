//! The list of symptoms a user has picked before asking for an analysis.

use crate::{SymptomError, SymptomResult};
use symcheck_types::SymptomTag;

/// Ordered, duplicate-free collection of normalised symptom tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymptomSelection {
    tags: Vec<SymptomTag>,
}

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from raw strings, in order, dropping repeats.
    ///
    /// # Errors
    ///
    /// Returns `SymptomError::InvalidSymptom` if any entry is blank.
    pub fn from_raw<I, S>(raw: I) -> SymptomResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for symptom in raw {
            selection.add(symptom)?;
        }
        Ok(selection)
    }

    /// Normalise and append a symptom.
    ///
    /// Returns `Ok(false)` if the normalised tag was already selected.
    pub fn add(&mut self, raw: impl AsRef<str>) -> SymptomResult<bool> {
        let tag = SymptomTag::new(raw)?;
        if self.tags.contains(&tag) {
            return Ok(false);
        }
        self.tags.push(tag);
        Ok(true)
    }

    /// Remove a symptom. Returns whether it was present.
    pub fn remove(&mut self, raw: impl AsRef<str>) -> bool {
        let Ok(tag) = SymptomTag::new(raw) else {
            return false;
        };
        let before = self.tags.len();
        self.tags.retain(|t| *t != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, raw: impl AsRef<str>) -> bool {
        SymptomTag::new(raw).is_ok_and(|tag| self.tags.contains(&tag))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[SymptomTag] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(SymptomTag::as_str)
    }

    /// The selection as a query, refusing to analyse an empty one.
    pub fn require_non_empty(&self) -> SymptomResult<&[SymptomTag]> {
        if self.tags.is_empty() {
            return Err(SymptomError::InvalidInput(
                "at least one symptom is required".into(),
            ));
        }
        Ok(&self.tags)
    }
}
