use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::SharedState;

// --- Health ---

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Intent classifier API is running".to_string(),
    })
}

// --- Info ---

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub version: String,
    pub num_intents: usize,
    pub intents: Vec<String>,
    pub num_examples: usize,
    pub model_loaded: bool,
}

pub async fn info(State(state): State<SharedState>) -> Json<InfoResponse> {
    let info = state.classifier.info();
    Json(InfoResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        num_intents: info.num_intents,
        intents: info.intent_labels,
        num_examples: info.num_examples,
        model_loaded: state.artifact.is_loaded(),
    })
}

// --- Classify ---

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub text: String,
    pub intent: String,
    pub confidence: f64,
}

pub async fn classify(
    State(state): State<SharedState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let Json(request) = payload?;
    let result = state.classifier.classify(&request.text);
    Ok(Json(ClassifyResponse {
        text: request.text,
        intent: result.intent,
        confidence: result.confidence,
    }))
}

// --- Fallback ---

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
