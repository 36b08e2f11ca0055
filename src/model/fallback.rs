//! Heuristic fallback classifier (no model file)
//!
//! Reads the false-positive flags directly: any raised flag means the signal
//! is likely not planetary.

use super::{Classifier, Label, ModelError};
use crate::features::ModelFeatureVector;

pub const LABEL_CANDIDATE: &str = "CANDIDATE";
pub const LABEL_FALSE_POSITIVE: &str = "FALSE POSITIVE";

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub const NAME: &'static str = "heuristic";
}

impl Classifier for HeuristicClassifier {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn predict(&self, row: &ModelFeatureVector) -> Result<Label, ModelError> {
        // Raw CSV rows may carry non-binary flags; anything above zero counts
        let raised = row.flags().iter().filter(|&&flag| flag > 0.0).count();

        tracing::debug!("Fallback prediction: {} flag(s) raised", raised);

        let label = if raised > 0 { LABEL_FALSE_POSITIVE } else { LABEL_CANDIDATE };
        Ok(Label::from(label))
    }
}
