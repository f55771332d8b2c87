pub mod stage1_validate;
pub mod stage2_trend;
pub mod stage3_predict;
pub mod stage4_risk;
pub mod stage5_report;

use crate::model::coefficients::CoefficientProfile;
use crate::model::forecast::{Forecast, mean, round2};
use stage1_validate::ValidationError;

pub fn run_forecast(scores: &[f32]) -> Result<Forecast, ValidationError> {
    let profile = CoefficientProfile::default_v1();

    stage1_validate::run_stage1(scores, &profile)?;
    let trend = stage2_trend::run_stage2(scores, &profile);
    let predictions = stage3_predict::run_stage3(scores, trend.slope, &profile);
    let risk = stage4_risk::run_stage4(&predictions);

    Ok(Forecast {
        known_terms: scores.len(),
        current_average: round2(mean(scores)),
        trend,
        predictions,
        risk,
    })
}
