//! Caller-side contract for per-match explanations.
//!
//! The matcher never produces explanations itself. Callers hand the finished matches to an
//! [`ExplanationService`]; [`explain_matches`] asks for one explanation per match, in rank
//! order, and substitutes [`EXPLANATION_FALLBACK`] for any that fail so one bad response never
//! loses the others.

use crate::constants::EXPLANATION_FALLBACK;
use crate::error::ExplanationError;
use crate::matcher::ConditionMatch;
use serde::Serialize;

/// Input handed to an explanation service for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExplanationRequest<'a> {
    pub condition_name: &'a str,
    pub matched_symptoms: &'a [String],
    pub user_symptoms: &'a [String],
}

/// Produces free-text explanations for matches.
pub trait ExplanationService {
    fn explain(&self, request: &ExplanationRequest<'_>) -> Result<String, ExplanationError>;
}

/// An explanation for one condition, keyed by condition name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub condition_name: String,
    pub text: String,
    /// True when `text` is the fallback message.
    pub fallback: bool,
}

/// Request an explanation for each match, one at a time.
pub fn explain_matches<E: ExplanationService + ?Sized>(
    service: &E,
    matches: &[ConditionMatch<'_>],
    user_symptoms: &[String],
) -> Vec<Explanation> {
    matches
        .iter()
        .map(|m| {
            let request = ExplanationRequest {
                condition_name: m.condition_name(),
                matched_symptoms: &m.matched_symptoms,
                user_symptoms,
            };

            match service.explain(&request) {
                Ok(text) => Explanation {
                    condition_name: m.condition_name().to_owned(),
                    text,
                    fallback: false,
                },
                Err(e) => {
                    tracing::warn!(
                        condition = m.condition_name(),
                        "explanation failed, using fallback: {e}"
                    );
                    Explanation {
                        condition_name: m.condition_name().to_owned(),
                        text: EXPLANATION_FALLBACK.to_owned(),
                        fallback: true,
                    }
                }
            }
        })
        .collect()
}

/// Local explainer that summarises which of the user's symptoms matched.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryExplainer;

impl ExplanationService for SummaryExplainer {
    fn explain(&self, request: &ExplanationRequest<'_>) -> Result<String, ExplanationError> {
        if request.matched_symptoms.is_empty() {
            return Err(ExplanationError::MalformedResponse(format!(
                "no matched symptoms for {}",
                request.condition_name
            )));
        }

        Ok(format!(
            "{} matched {} of your {} symptoms: {}.",
            request.condition_name,
            request.matched_symptoms.len(),
            request.user_symptoms.len(),
            request.matched_symptoms.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::REFERENCE_CONDITIONS;
    use crate::matcher::find_matches;
    use std::cell::RefCell;

    struct FlakyService {
        fail_for: &'static str,
        calls: RefCell<Vec<String>>,
    }

    impl ExplanationService for FlakyService {
        fn explain(&self, request: &ExplanationRequest<'_>) -> Result<String, ExplanationError> {
            self.calls
                .borrow_mut()
                .push(request.condition_name.to_owned());
            if request.condition_name == self.fail_for {
                return Err(ExplanationError::Unavailable("timed out".into()));
            }
            Ok(format!("about {}", request.condition_name))
        }
    }

    fn sample_query() -> Vec<String> {
        ["fever", "cough", "sore throat", "tiredness"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn failure_for_one_match_does_not_abort_the_rest() {
        let query = sample_query();
        let matches = find_matches(&query, &REFERENCE_CONDITIONS);
        let service = FlakyService {
            fail_for: "Common Cold",
            calls: RefCell::new(Vec::new()),
        };

        let explanations = explain_matches(&service, &matches, &query);

        assert_eq!(
            *service.calls.borrow(),
            vec!["Flu (Influenza)", "Common Cold", "Mononucleosis"]
        );
        assert_eq!(explanations.len(), 3);
        assert_eq!(explanations[0].text, "about Flu (Influenza)");
        assert!(!explanations[0].fallback);
        assert_eq!(explanations[1].condition_name, "Common Cold");
        assert_eq!(explanations[1].text, EXPLANATION_FALLBACK);
        assert!(explanations[1].fallback);
        assert_eq!(explanations[2].text, "about Mononucleosis");
    }

    #[test]
    fn no_matches_means_no_calls() {
        let service = FlakyService {
            fail_for: "",
            calls: RefCell::new(Vec::new()),
        };
        assert!(explain_matches(&service, &[], &sample_query()).is_empty());
        assert!(service.calls.borrow().is_empty());
    }

    #[test]
    fn summary_explainer_lists_matched_symptoms() {
        let query = sample_query();
        let matches = find_matches(&query, &REFERENCE_CONDITIONS);
        let explanations = explain_matches(&SummaryExplainer, &matches[..1], &query);

        assert_eq!(
            explanations[0].text,
            "Flu (Influenza) matched 4 of your 4 symptoms: fever, cough, sore throat, tiredness."
        );
    }
}
