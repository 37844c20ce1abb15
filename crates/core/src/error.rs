#[derive(Debug, thiserror::Error)]
pub enum SymptomError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid symptom: {0}")]
    InvalidSymptom(#[from] symcheck_types::TextError),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type SymptomResult<T> = std::result::Result<T, SymptomError>;

/// Failure reported by an explanation collaborator.
///
/// These never escape [`crate::explain::explain_matches`]; they are logged and replaced by the
/// fallback text for the affected condition.
#[derive(Debug, thiserror::Error)]
pub enum ExplanationError {
    #[error("explanation service unavailable: {0}")]
    Unavailable(String),
    #[error("malformed explanation response: {0}")]
    MalformedResponse(String),
}
