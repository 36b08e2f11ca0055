//! Prediction handler

use axum::{body::Bytes, extract::{rejection::BytesRejection, State}, Json};

use crate::features::FeatureInput;
use crate::models::{PredictRequest, PredictResponse};
use crate::{AppError, AppResult, AppState};

/// Classify one candidate.
///
/// The body is parsed regardless of Content-Type. Five values are converted
/// to model features first; four values go to the classifier as-is.
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<PredictResponse>> {
    let body = body?;
    let request: PredictRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidFormat(e.to_string()))?;

    let values = request.values();
    let input = FeatureInput::try_from(values.as_slice())?;
    let row = input.into_model_features();

    tracing::debug!("Predicting {} input as {:?}", input.kind(), row.as_array());

    let classifier = state.classifier.clone();
    let prediction = tokio::task::spawn_blocking(move || classifier.predict(&row)).await??;

    tracing::debug!("Prediction: {}", prediction);

    Ok(Json(PredictResponse { prediction }))
}
