//! # SymCheck Core
//!
//! Core logic for the SymCheck symptom checker.
//!
//! This crate contains pure, synchronous operations:
//! - The static condition catalog and its symptom tags
//! - Jaccard-based matching of reported symptoms against the catalog
//! - Autocomplete suggestions, symptom selection and presentation helpers
//! - The caller-side contract for per-match explanations
//!
//! **No API concerns**: HTTP servers and wire types belong in `api-rest` and `api-shared`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod explain;
pub mod matcher;
pub mod selection;
pub mod suggest;
pub mod tier;
pub mod validation;

pub use catalog::{Catalog, Condition, REFERENCE_CONDITIONS};
pub use config::CoreConfig;
pub use error::{ExplanationError, SymptomError, SymptomResult};
pub use explain::{explain_matches, Explanation, ExplanationService, SummaryExplainer};
pub use matcher::{find_matches, jaccard_similarity, ConditionMatch};
pub use selection::SymptomSelection;
pub use tier::{format_percentage, ConfidenceTier};
pub use symcheck_types::{normalise, SymptomTag, TextError};

use std::sync::Arc;

/// Symptom checking operations over one catalog and configuration.
///
/// Cheap to clone; every clone shares the same read-only catalog.
#[derive(Clone, Debug)]
pub struct SymptomCheckService {
    catalog: Catalog<'static>,
    cfg: Arc<CoreConfig>,
}

impl SymptomCheckService {
    /// Creates a service over the reference catalog.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self::with_catalog(Catalog::reference(), cfg)
    }

    pub fn with_catalog(catalog: Catalog<'static>, cfg: Arc<CoreConfig>) -> Self {
        Self { catalog, cfg }
    }

    pub fn catalog(&self) -> Catalog<'static> {
        self.catalog
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    /// Top matches for the given symptoms, best first.
    ///
    /// An empty result is a valid outcome meaning nothing matched.
    pub fn match_symptoms<S: AsRef<str>>(&self, symptoms: &[S]) -> Vec<ConditionMatch<'static>> {
        find_matches(symptoms, self.catalog.all())
    }

    /// Every catalogued symptom tag, sorted.
    pub fn symptom_tags(&self) -> Vec<&'static str> {
        self.catalog.all_symptom_tags()
    }

    /// Autocomplete suggestions for partially typed input.
    pub fn suggestions<S: AsRef<str>>(&self, input: &str, selected: &[S]) -> Vec<&'static str> {
        let tags = self.symptom_tags();
        suggest::suggest(&tags, input, selected, &self.cfg)
    }
}

impl Default for SymptomCheckService {
    fn default() -> Self {
        Self::new(Arc::new(CoreConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_matches_against_reference_catalog() {
        let service = SymptomCheckService::default();
        let matches = service.match_symptoms(&["nausea", "vomiting", "diarrhea"]);
        assert_eq!(
            matches[0].condition_name(),
            "Gastroenteritis (Stomach Flu)"
        );
    }

    #[test]
    fn service_suggestions_use_configured_limit() {
        let cfg = CoreConfig::new(1, 2).expect("valid config");
        let service = SymptomCheckService::new(Arc::new(cfg));
        let none: [&str; 0] = [];
        assert_eq!(service.suggestions("cou", &none), vec!["cough"]);
    }
}
