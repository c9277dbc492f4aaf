//! HTTP handlers for the gateway endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::dispatch::GenerateJob;
use crate::error::Result;
use crate::AppState;

/// Query parameters accepted by the generate endpoint.
///
/// Every field has a default, so a bare `GET /generate` produces a valid
/// sample image. The numeric fields are signed: out-of-range values,
/// negative ones included, are clamped during normalization rather than
/// rejected at extraction time.
#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_dimension")]
    pub width: i64,
    #[serde(default = "default_dimension")]
    pub height: i64,
    #[serde(default = "default_steps")]
    pub steps: i64,
}

fn default_prompt() -> String {
    "A cinematic shot of a futuristic city".to_string()
}

fn default_dimension() -> i64 {
    1024
}

fn default_steps() -> i64 {
    4
}

/// Generate one image: normalize the parameters, pick a tier, and invoke the
/// selected executor synchronously. Exactly one remote call is made per
/// request; any failure it raises comes back as a plain HTTP 500.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GenerateParams>,
) -> Result<Response> {
    let job = GenerateJob::normalize(params.prompt, params.width, params.height, params.steps);
    let tier = job.tier();
    let executor = state.executors.get(tier);

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        tier = %tier,
        executor = %executor.name(),
        width = job.width,
        height = job.height,
        steps = job.steps,
        "Dispatching generation request"
    );

    let bytes = executor.generate(&job).await.map_err(|e| {
        error!(%request_id, executor = %executor.name(), error = %e, "Generation failed");
        e
    })?;

    info!(%request_id, bytes = bytes.len(), "Generation complete");

    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        bytes,
    )
        .into_response())
}

/// Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
