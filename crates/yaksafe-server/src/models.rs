//! API request and response models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use yaksafe_core::Category;

/// Request body for POST /moderate.
///
/// Parsed leniently: a missing `text` field (or an entirely malformed body,
/// handled by the caller falling back to `Default`) means the empty string.
#[derive(Debug, Default, Deserialize)]
pub struct ModerateRequest {
    /// The post text to classify.
    #[serde(default)]
    pub text: String,
}

/// Response body for POST /moderate.
#[derive(Debug, Serialize)]
pub struct ModerateResponse {
    /// Whether the post is safe to publish.
    pub safe: bool,
    /// Reason for the verdict; always null when the post is safe.
    pub reason: Option<String>,
    /// Winning category tag, or "clean".
    pub category: String,
    /// Toxicity score of the winning category (0-99).
    pub toxicity_score: u8,
    /// Verdict provider, always "heuristic".
    pub provider: &'static str,
    /// Matched tokens per category (omitted when disabled by config).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<BTreeMap<Category, Vec<String>>>,
}

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub ok: bool,
    pub service: &'static str,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}
