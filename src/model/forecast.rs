use serde::Serialize;

use crate::model::risk::RiskTier;
use crate::model::trend::TrendEstimate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub term: u8,
    pub value: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub known_terms: usize,
    pub current_average: f32,
    pub trend: TrendEstimate,
    pub predictions: Vec<Prediction>,
    pub risk: RiskTier,
}

pub fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}
