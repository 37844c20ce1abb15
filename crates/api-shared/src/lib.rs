//! # API Shared
//!
//! Shared definitions for SymCheck APIs.
//!
//! Contains:
//! - Request/response wire types (`pb` module), documented for OpenAPI
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`. Kept free of core logic so clients can depend on it alone.

pub mod health;

/// Wire types for the SymCheck API.
pub mod pb {
    use serde::{Deserialize, Serialize};
    use utoipa::ToSchema;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
    pub struct HealthRes {
        pub ok: bool,
        pub message: String,
    }

    /// A catalogued condition.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
    pub struct Condition {
        pub name: String,
        pub symptoms: Vec<String>,
        pub common_symptoms: Vec<String>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
    pub struct ListConditionsRes {
        pub conditions: Vec<Condition>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
    pub struct ListSymptomsRes {
        pub symptoms: Vec<String>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
    pub struct SuggestionsRes {
        pub suggestions: Vec<String>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
    pub struct MatchReq {
        /// Symptoms as entered by the user; normalised by the server for comparison only.
        pub symptoms: Vec<String>,
    }

    /// One ranked condition match.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
    pub struct ConditionMatch {
        pub condition_name: String,
        /// Jaccard similarity in (0, 1].
        pub confidence: f64,
        /// Whole-number percentage, e.g. "50%".
        pub percentage: String,
        /// One of "strong", "moderate" or "weak".
        pub tier: String,
        pub matched_symptoms: Vec<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
    pub struct MatchRes {
        pub matches: Vec<ConditionMatch>,
        /// Set when nothing matched.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub message: Option<String>,
    }
}

pub use health::HealthService;
pub use pb::*;
