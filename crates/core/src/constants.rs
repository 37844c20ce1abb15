//! Constants used throughout the SymCheck core crate.
//!
//! Matching limits, suggestion defaults and user-facing fallback text live here so the REST
//! API and the CLI agree on them.

/// Maximum number of matches returned for a single query.
pub const MAX_MATCHES: usize = 3;

/// Default number of suggestions returned for a partial symptom.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Default minimum trimmed input length, in characters, before suggestions are produced.
pub const DEFAULT_SUGGESTION_MIN_CHARS: usize = 2;

/// Confidence at or above which a match is considered strong.
pub const STRONG_CONFIDENCE: f64 = 0.5;

/// Confidence at or above which a match is considered moderate.
pub const MODERATE_CONFIDENCE: f64 = 0.3;

/// Text substituted when an explanation cannot be produced for a match.
pub const EXPLANATION_FALLBACK: &str = "Unable to generate explanation at this time.";

/// Message shown to the user when no condition scores above zero.
pub const NO_MATCHES_MESSAGE: &str = "We couldn't find any conditions matching your symptoms. \
Please try different symptoms or consult a healthcare professional.";

/// Upper bound on the number of symptoms accepted in a single request.
///
/// Comfortably above the number of catalogued symptom tags, so selecting every known tag
/// is always accepted.
pub const MAX_QUERY_SYMPTOMS: usize = 256;

/// Upper bound on the length of a single symptom string, in bytes.
pub const MAX_SYMPTOM_LEN: usize = 128;
