//! Inference Engine - ONNX Runtime Integration
//!
//! Loads a classifier exported to ONNX (e.g. scikit-learn via skl2onnx) and
//! reads the first output as the class label.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::{DynValue, Value};
use parking_lot::Mutex;

use super::{Classifier, Label, ModelError};
use crate::features::{ModelFeatureVector, MODEL_FEATURE_COUNT};

pub struct OnnxClassifier {
    // Session::run needs &mut, so concurrent requests take turns here
    session: Mutex<Session>,
}

impl OnnxClassifier {
    pub const NAME: &'static str = "onnx";

    /// Load ONNX model from file
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model_path = path.display().to_string();
        tracing::info!("Loading ONNX model from: {}", model_path);

        if !path.exists() {
            return Err(ModelError::NotFound(model_path));
        }

        let session = Session::builder()
            .map_err(|e| ModelError::Load(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Load(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelError::Load(format!("{}: {}", model_path, e)))?;

        tracing::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl Classifier for OnnxClassifier {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn predict(&self, row: &ModelFeatureVector) -> Result<Label, ModelError> {
        let start_time = std::time::Instant::now();

        let input_data: Vec<f32> = row.as_array().iter().map(|&v| v as f32).collect();
        let input_array = Array2::<f32>::from_shape_vec((1, MODEL_FEATURE_COUNT), input_data)
            .map_err(|e| ModelError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelError::Inference("No output defined".to_string()))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let output = outputs.get(&output_name).ok_or(ModelError::EmptyOutput)?;
        let label = extract_label(output)?;

        tracing::debug!(
            "ONNX prediction {} in {}us",
            label,
            start_time.elapsed().as_micros()
        );

        Ok(label)
    }
}

/// First element of the label tensor; sklearn exports int64 or string labels
fn extract_label(output: &DynValue) -> Result<Label, ModelError> {
    if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
        return data.first().map(|&v| Label::Integer(v)).ok_or(ModelError::EmptyOutput);
    }

    if let Ok((_, data)) = output.try_extract_strings() {
        return data.into_iter().next().map(Label::Text).ok_or(ModelError::EmptyOutput);
    }

    let (_, data) = output
        .try_extract_tensor::<f32>()
        .map_err(|e| ModelError::Inference(format!("Unsupported label output: {}", e)))?;

    data.first()
        .map(|&v| Label::Float(f64::from(v)))
        .ok_or(ModelError::EmptyOutput)
}
