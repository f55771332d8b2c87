use crate::model::forecast::{Prediction, mean};
use crate::model::risk::RiskTier;

pub fn run_stage4(predictions: &[Prediction]) -> RiskTier {
    let values = predictions.iter().map(|p| p.value).collect::<Vec<_>>();
    classify_mean(mean(&values))
}

pub fn classify_mean(avg: f32) -> RiskTier {
    if avg >= 3.5 {
        RiskTier::Excellent
    } else if avg >= 3.0 {
        RiskTier::Good
    } else if avg >= 2.5 {
        RiskTier::Fair
    } else if avg >= 2.0 {
        RiskTier::BelowAverage
    } else {
        RiskTier::Poor
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_risk.rs"]
mod tests;
