//! Input validation utilities.
//!
//! The matcher itself accepts any input. These checks run at the boundary (REST handlers) before
//! a request reaches it.

use crate::constants::{MAX_QUERY_SYMPTOMS, MAX_SYMPTOM_LEN};
use crate::{SymptomError, SymptomResult};

/// Validates a caller-supplied symptom list before matching.
///
/// - Rejects an empty list
/// - Bounds the number of symptoms and the length of each one to avoid pathological inputs
///
/// Individual blank strings are allowed; they simply never match.
///
/// # Errors
///
/// Returns a `SymptomError::InvalidInput` if the list is invalid.
pub fn validate_symptom_list<S: AsRef<str>>(symptoms: &[S]) -> SymptomResult<()> {
    if symptoms.is_empty() {
        return Err(SymptomError::InvalidInput(
            "at least one symptom is required".into(),
        ));
    }

    if symptoms.len() > MAX_QUERY_SYMPTOMS {
        return Err(SymptomError::InvalidInput(format!(
            "no more than {} symptoms may be submitted",
            MAX_QUERY_SYMPTOMS
        )));
    }

    if let Some(long) = symptoms.iter().find(|s| s.as_ref().len() > MAX_SYMPTOM_LEN) {
        return Err(SymptomError::InvalidInput(format!(
            "symptom exceeds maximum length of {} characters: {:.32}...",
            MAX_SYMPTOM_LEN,
            long.as_ref()
        )));
    }

    Ok(())
}
