//! Model Module - Classifier seam
//!
//! The vetting model is an opaque classifier: one 4-feature row in, one class
//! label out. Backends are chosen once at startup and shared read-only
//! between request handlers.

pub mod fallback;
#[cfg(feature = "onnx")]
pub mod onnx;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::features::ModelFeatureVector;

pub use fallback::HeuristicClassifier;
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model not found: {0}")]
    NotFound(String),

    #[error("Failed to load model: {0}")]
    Load(String),

    #[error("MODEL_PATH is set to {0} but this build has no ONNX support (enable the `onnx` feature)")]
    BackendUnavailable(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Model returned no prediction")]
    EmptyOutput,
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Class label as produced by the model, serialized as a bare JSON scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Integer(v) => write!(f, "{}", v),
            Label::Float(v) => write!(f, "{}", v),
            Label::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Trait for prediction backends (ONNX, heuristic, test doubles)
pub trait Classifier: Send + Sync {
    /// Backend name reported by the health endpoint
    fn name(&self) -> &str;

    fn predict(&self, row: &ModelFeatureVector) -> Result<Label, ModelError>;
}

/// Pick the backend for this process: ONNX if a model path is configured,
/// the heuristic classifier otherwise.
pub fn load_classifier(config: &Config) -> Result<Arc<dyn Classifier>, ModelError> {
    match config.model_path.as_deref() {
        Some(path) => load_model_file(path),
        None => {
            tracing::warn!("MODEL_PATH not set, using heuristic fallback classifier");
            Ok(Arc::new(HeuristicClassifier))
        }
    }
}

#[cfg(feature = "onnx")]
fn load_model_file(path: &Path) -> Result<Arc<dyn Classifier>, ModelError> {
    Ok(Arc::new(OnnxClassifier::load(path)?))
}

#[cfg(not(feature = "onnx"))]
fn load_model_file(path: &Path) -> Result<Arc<dyn Classifier>, ModelError> {
    Err(ModelError::BackendUnavailable(path.display().to_string()))
}
