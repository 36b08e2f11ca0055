//! Prediction request/response bodies

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

use crate::model::Label;

/// POST /predict body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<FeatureValue>,
}

impl PredictRequest {
    pub fn values(&self) -> Vec<f64> {
        self.features.iter().map(|f| f.0).collect()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub prediction: Label,
}

/// One numeric feature. JSON numbers and decimal strings (`"1.5"`) are both accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureValue(pub f64);

impl<'de> Deserialize<'de> for FeatureValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FeatureValueVisitor)
    }
}

struct FeatureValueVisitor;

impl<'de> Visitor<'de> for FeatureValueVisitor {
    type Value = FeatureValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(FeatureValue(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FeatureValue(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(FeatureValue(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.trim()
            .parse::<f64>()
            .map(FeatureValue)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}
