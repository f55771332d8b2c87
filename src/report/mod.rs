pub mod json;
pub mod text;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::subjects::SubjectProfile;

#[derive(Debug, Clone, Serialize)]
pub struct PredictionRow {
    pub term: u8,
    pub predicted_sgpa: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastSummary {
    pub tool: String,
    pub version: String,
    pub input_source: String,
    pub known_terms: usize,
    pub known_scores: Vec<f32>,
    pub current_average: f32,
    pub trend_label: String,
    pub slope: f32,
    pub predictions: Vec<PredictionRow>,
    pub predicted_average: f32,
    pub risk_label: String,
    pub risk_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_counts: Option<BTreeMap<char, u32>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectsSummary {
    pub tool: String,
    pub version: String,
    pub input_source: String,
    pub subjects: Vec<SubjectProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EstimateSummary {
    pub tool: String,
    pub version: String,
    pub midterm: f32,
    pub attendance: f32,
    pub estimated_sgpa: f32,
    pub pass_probability: u8,
}

pub fn format_f32_2(v: f32) -> String {
    format!("{:.2}", v)
}

pub fn format_f32_6(v: f32) -> String {
    format!("{:.6}", v)
}
