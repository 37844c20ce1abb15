//! Symptom-to-condition matching.
//!
//! Each query is scored against every condition with the Jaccard index over normalised symptom
//! sets. Matching is a pure function of the query and the catalog: no state is kept between
//! calls, so concurrent callers need no coordination.

use crate::catalog::Condition;
use crate::constants::MAX_MATCHES;
use serde::Serialize;
use std::collections::HashSet;
use symcheck_types::normalise;

/// The scored association between a query and one catalog condition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConditionMatch<'a> {
    /// The matched catalog entry.
    pub condition: &'a Condition,

    /// Jaccard similarity in `(0, 1]` for returned matches.
    pub confidence: f64,

    /// Query symptoms, exactly as supplied, that matched one of the condition's symptoms.
    pub matched_symptoms: Vec<String>,
}

impl ConditionMatch<'_> {
    pub fn condition_name(&self) -> &'static str {
        self.condition.name
    }
}

/// Jaccard similarity between two symptom lists after normalisation.
///
/// Duplicates collapse once normalised. Returns 0 when both sets are empty.
pub fn jaccard_similarity<A, B>(left: &[A], right: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    jaccard_of_sets(&normalised_set(left), &normalised_set(right))
}

fn jaccard_of_sets(left: &HashSet<String>, right: &HashSet<String>) -> f64 {
    let intersection = left.intersection(right).count();
    let union = left.len() + right.len() - intersection;

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Score `query` against a single condition.
///
/// The returned match may have zero confidence; [`find_matches`] filters those out.
pub fn score_condition<'a, S: AsRef<str>>(
    query: &[S],
    condition: &'a Condition,
) -> ConditionMatch<'a> {
    let query_set = normalised_set(query);
    let condition_set = normalised_set(condition.symptoms);

    // Preserves the caller's spelling and duplicates; only equality is normalised.
    let matched_symptoms = query
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| condition_set.contains(&normalise(s)))
        .map(str::to_owned)
        .collect();

    ConditionMatch {
        condition,
        confidence: jaccard_of_sets(&query_set, &condition_set),
        matched_symptoms,
    }
}

/// Rank `conditions` against `query` and return at most [`MAX_MATCHES`] results.
///
/// Matches with zero confidence are dropped. Equal confidences keep catalog order.
/// An empty query returns no matches without scoring anything.
pub fn find_matches<'a, S: AsRef<str>>(
    query: &[S],
    conditions: &'a [Condition],
) -> Vec<ConditionMatch<'a>> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<ConditionMatch<'a>> = conditions
        .iter()
        .map(|condition| score_condition(query, condition))
        .filter(|m| m.confidence > 0.0)
        .collect();

    // `sort_by` is stable, which keeps catalog order among ties.
    matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    matches.truncate(MAX_MATCHES);

    tracing::debug!(
        query_len = query.len(),
        returned = matches.len(),
        "scored {} conditions",
        conditions.len()
    );

    matches
}

fn normalised_set<S: AsRef<str>>(symptoms: &[S]) -> HashSet<String> {
    symptoms.iter().map(|s| normalise(s.as_ref())).collect()
}
