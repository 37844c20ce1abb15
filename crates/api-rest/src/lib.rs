//! # API REST
//!
//! REST API implementation for SymCheck.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS, input validation)
//!
//! Uses `api-shared` for wire types and `symcheck-core` for all matching logic.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{pb, HealthService};
use symcheck_core::{
    constants::NO_MATCHES_MESSAGE, format_percentage, normalise,
    validation::validate_symptom_list, ConditionMatch, ConfidenceTier, SymptomCheckService,
};

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: SymptomCheckService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_conditions, list_symptoms, suggestions, match_symptoms),
    components(schemas(
        pb::HealthRes,
        pb::Condition,
        pb::ListConditionsRes,
        pb::ListSymptomsRes,
        pb::SuggestionsRes,
        pb::MatchReq,
        pb::MatchRes,
        pb::ConditionMatch,
    ))
)]
pub struct ApiDoc;

/// Build the REST router.
///
/// The OpenAPI document is served at `/api-docs/openapi.json` and browsable under
/// `/swagger-ui/`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/conditions", get(list_conditions))
        .route("/symptoms", get(list_symptoms))
        .route("/suggestions", get(suggestions))
        .route("/match", post(match_symptoms))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve the REST API until the process exits.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(addr: &str, service: SymptomCheckService) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- SymCheck REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, app(AppState { service })).await?;
    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = pb::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<pb::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/conditions",
    responses(
        (status = 200, description = "Catalogued conditions in catalog order", body = pb::ListConditionsRes)
    )
)]
/// List every catalogued condition.
#[axum::debug_handler]
async fn list_conditions(State(state): State<AppState>) -> Json<pb::ListConditionsRes> {
    let conditions = state
        .service
        .catalog()
        .all()
        .iter()
        .map(|c| pb::Condition {
            name: c.name.to_owned(),
            symptoms: c.symptoms.iter().map(|s| s.to_string()).collect(),
            common_symptoms: c.common_symptoms.iter().map(|s| s.to_string()).collect(),
        })
        .collect();
    Json(pb::ListConditionsRes { conditions })
}

#[utoipa::path(
    get,
    path = "/symptoms",
    responses(
        (status = 200, description = "Every catalogued symptom tag, sorted", body = pb::ListSymptomsRes)
    )
)]
/// List every symptom tag known to the catalog.
#[axum::debug_handler]
async fn list_symptoms(State(state): State<AppState>) -> Json<pb::ListSymptomsRes> {
    let symptoms = state
        .service
        .symptom_tags()
        .into_iter()
        .map(str::to_owned)
        .collect();
    Json(pb::ListSymptomsRes { symptoms })
}

#[derive(Debug, Deserialize)]
struct SuggestionsParams {
    #[serde(default)]
    q: String,
    /// Comma-separated symptoms the user has already picked.
    #[serde(default)]
    selected: Option<String>,
}

#[utoipa::path(
    get,
    path = "/suggestions",
    params(
        ("q" = String, Query, description = "Partially typed symptom"),
        ("selected" = Option<String>, Query, description = "Comma-separated symptoms already selected")
    ),
    responses(
        (status = 200, description = "Matching symptom tags", body = pb::SuggestionsRes)
    )
)]
/// Autocomplete suggestions for a partially typed symptom.
#[axum::debug_handler]
async fn suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionsParams>,
) -> Json<pb::SuggestionsRes> {
    let selected: Vec<String> = params
        .selected
        .as_deref()
        .map(|s| s.split(',').map(normalise).filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let suggestions = state
        .service
        .suggestions(&params.q, &selected)
        .into_iter()
        .map(str::to_owned)
        .collect();
    Json(pb::SuggestionsRes { suggestions })
}

#[utoipa::path(
    post,
    path = "/match",
    request_body = pb::MatchReq,
    responses(
        (status = 200, description = "Up to three ranked matches", body = pb::MatchRes),
        (status = 400, description = "Bad request")
    )
)]
/// Rank catalogued conditions against the submitted symptoms.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - no symptoms were submitted, or
/// - the list or one of its entries is too long.
#[axum::debug_handler]
async fn match_symptoms(
    State(state): State<AppState>,
    Json(req): Json<pb::MatchReq>,
) -> Result<Json<pb::MatchRes>, (StatusCode, &'static str)> {
    if let Err(e) = validate_symptom_list(&req.symptoms) {
        tracing::error!("Invalid match request: {:?}", e);
        return Err((StatusCode::BAD_REQUEST, "Invalid symptom list"));
    }

    let matches: Vec<pb::ConditionMatch> = state
        .service
        .match_symptoms(&req.symptoms)
        .iter()
        .map(to_wire_match)
        .collect();

    let message = matches.is_empty().then(|| NO_MATCHES_MESSAGE.to_owned());
    Ok(Json(pb::MatchRes { matches, message }))
}

fn to_wire_match(m: &ConditionMatch<'_>) -> pb::ConditionMatch {
    pb::ConditionMatch {
        condition_name: m.condition_name().to_owned(),
        confidence: m.confidence,
        percentage: format_percentage(m.confidence),
        tier: ConfidenceTier::from_confidence(m.confidence).to_string(),
        matched_symptoms: m.matched_symptoms.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState {
            service: SymptomCheckService::default(),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = test_app().oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request")
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, json) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ok"], true);
    }

    #[tokio::test]
    async fn match_returns_ranked_results() {
        let (status, json) = send(post_json(
            "/match",
            serde_json::json!({ "symptoms": ["Fever", "cough", "sore throat", "tiredness"] }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let matches = json["matches"].as_array().expect("matches array");
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0]["condition_name"], "Flu (Influenza)");
        assert_eq!(matches[0]["confidence"], 0.5);
        assert_eq!(matches[0]["percentage"], "50%");
        assert_eq!(matches[0]["tier"], "strong");
        assert_eq!(matches[0]["matched_symptoms"][0], "Fever");
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn match_without_overlap_explains_empty_result() {
        let (status, json) = send(post_json(
            "/match",
            serde_json::json!({ "symptoms": ["glowing toenails"] }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["matches"], serde_json::json!([]));
        assert_eq!(json["message"], NO_MATCHES_MESSAGE);
    }

    #[tokio::test]
    async fn match_rejects_empty_symptom_list() {
        let (status, _) = send(post_json("/match", serde_json::json!({ "symptoms": [] }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn symptoms_are_sorted_tags() {
        let (status, json) = send(get("/symptoms")).await;
        assert_eq!(status, StatusCode::OK);
        let symptoms = json["symptoms"].as_array().expect("symptoms array");
        assert_eq!(symptoms[0], "appetite changes");
        assert!(symptoms.contains(&serde_json::json!("fever")));
    }

    #[tokio::test]
    async fn conditions_keep_catalog_order() {
        let (_, json) = send(get("/conditions")).await;
        let conditions = json["conditions"].as_array().expect("conditions array");
        assert_eq!(conditions.len(), 20);
        assert_eq!(conditions[0]["name"], "Flu (Influenza)");
        assert_eq!(conditions[0]["common_symptoms"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn suggestions_exclude_selected() {
        let (status, json) = send(get("/suggestions?q=fev&selected=fever")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suggestions"], serde_json::json!(["mild fever"]));
    }

    #[tokio::test]
    async fn suggestions_exclude_selected_regardless_of_case() {
        let (status, json) = send(get("/suggestions?q=fev&selected=%20Fever%20,Cough")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suggestions"], serde_json::json!(["mild fever"]));
    }

    #[tokio::test]
    async fn match_percentages_round_half_up() {
        let (status, json) = send(post_json(
            "/match",
            serde_json::json!({ "symptoms": ["chills"] }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let matches = json["matches"].as_array().expect("matches array");
        assert_eq!(matches[0]["condition_name"], "Flu (Influenza)");
        assert_eq!(matches[0]["confidence"], 0.125);
        assert_eq!(matches[0]["percentage"], "13%");
    }

    #[tokio::test]
    async fn swagger_ui_is_served() {
        let response = test_app()
            .oneshot(get("/swagger-ui/"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn openapi_document_lists_match_path() {
        let (status, json) = send(get("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["paths"].get("/match").is_some());
    }
}
