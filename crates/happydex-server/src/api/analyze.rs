use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};
use happydex_core::Source;
use happydex_sentiment::ScoredText;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// Ad-hoc scoring request. Longer texts are accepted as-is.
#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    pub text: String,
}

/// Score a text without recording it in the index.
pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ScoredText>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "validation_error", rejection.body_text())
    })?;

    // Attributed to forums so collaborator warnings carry a source field.
    Ok(Json(state.analyzer.analyze(Some(&body.text), Source::Forums)))
}
