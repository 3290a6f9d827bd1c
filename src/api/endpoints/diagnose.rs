//! Diagnosis endpoints.
//!
//! - `POST /api/diagnose`: remote ML service first, local fallback
//! - `POST /api/diagnose/local`: local classifier only

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::diagnosis::{self, SymptomInput};
use crate::engine::DiagnosisOutcome;

#[derive(Deserialize)]
pub struct DiagnoseRequest {
    #[serde(default)]
    pub symptoms: SymptomInput,
}

/// `POST /api/diagnose`: blank input is rejected before any work is done.
pub async fn diagnose(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<DiagnoseRequest>,
) -> Result<Json<DiagnosisOutcome>, ApiError> {
    if req.symptoms.is_blank() {
        return Err(ApiError::BadRequest("No symptoms provided".into()));
    }

    let outcome = ctx.engine.diagnose(req.symptoms).await;
    tracing::info!(
        source = ?outcome.source,
        confidence = outcome.report.confidence(),
        needs_doctor = outcome.report.needs_doctor(),
        "Diagnosis served"
    );
    Ok(Json(outcome))
}

/// `POST /api/diagnose/local`: always answers, even for empty input.
pub async fn diagnose_local(ApiJson(req): ApiJson<DiagnoseRequest>) -> Json<DiagnosisOutcome> {
    Json(DiagnosisOutcome::local(diagnosis::local_diagnose(req.symptoms)))
}
