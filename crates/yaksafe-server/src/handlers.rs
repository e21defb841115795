//! API route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, ModerateRequest, ModerateResponse, RootResponse};
use crate::state::AppState;

/// Provider tag reported in moderation responses.
const PROVIDER: &str = "heuristic";

/// GET / - Liveness payload.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        ok: true,
        service: "YakSafe API",
    })
}

/// GET /health - Health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// POST /moderate - Classify a post and return a verdict.
///
/// The body is read as raw bytes and parsed leniently: malformed or missing
/// JSON is treated as an empty post, which yields the fixed 400 rejection
/// rather than a deserialization error.
pub async fn moderate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ModerateResponse>> {
    let req: ModerateRequest = serde_json::from_slice(&body).unwrap_or_default();
    let text = req.text.trim();

    debug!(text_len = text.len(), "Moderating post");

    if text.is_empty() {
        return Err(ApiError::EmptyPost);
    }

    let verdict = state.classifier.classify(text);
    let safe = verdict.is_safe();

    info!(
        category = verdict.label(),
        toxicity_score = verdict.toxicity_score,
        safe,
        "Moderation complete"
    );

    Ok(Json(ModerateResponse {
        safe,
        // Public reason only surfaces on unsafe verdicts.
        reason: (!safe).then(|| verdict.reason.to_string()),
        category: verdict.label().to_string(),
        toxicity_score: verdict.toxicity_score,
        provider: PROVIDER,
        hits: state.include_hits.then_some(verdict.hits),
    }))
}
