//! Feature Module - Input shaping for the vetting model
//!
//! Turns the values posted by a client into the row the classifier expects.
//! Two shapes are accepted: the 5 user-facing measurements (converted by the
//! normalizer) or the 4 model features (passed through untouched).

pub mod normalizer;

pub use normalizer::{convert_to_model_features, ModelFeatureVector, RawUserInput};

/// Length of a user-facing measurement row
pub const RAW_INPUT_LEN: usize = 5;

/// Length of the row consumed by the classifier
pub const MODEL_FEATURE_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    #[error("Expected 4 or 5 features, got {0}")]
    UnexpectedLength(usize),
}

/// A request row, dispatched on its length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureInput {
    /// Manual form input: needs conversion
    Raw(RawUserInput),
    /// CSV input: already in model layout
    Model(ModelFeatureVector),
}

impl FeatureInput {
    /// Row to hand to the classifier
    pub fn into_model_features(self) -> ModelFeatureVector {
        match self {
            FeatureInput::Raw(raw) => convert_to_model_features(&raw),
            FeatureInput::Model(row) => row,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FeatureInput::Raw(_) => "raw",
            FeatureInput::Model(_) => "model",
        }
    }
}

impl TryFrom<&[f64]> for FeatureInput {
    type Error = FeatureError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        if let Ok(raw) = <[f64; RAW_INPUT_LEN]>::try_from(values) {
            return Ok(FeatureInput::Raw(RawUserInput::from_array(raw)));
        }
        if let Ok(row) = <[f64; MODEL_FEATURE_COUNT]>::try_from(values) {
            return Ok(FeatureInput::Model(ModelFeatureVector::from_array(row)));
        }
        Err(FeatureError::UnexpectedLength(values.len()))
    }
}
