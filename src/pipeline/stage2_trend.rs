use crate::model::coefficients::CoefficientProfile;
use crate::model::trend::{TrendDirection, TrendEstimate};

pub fn run_stage2(history: &[f32], profile: &CoefficientProfile) -> TrendEstimate {
    if history.len() < 2 {
        return TrendEstimate {
            direction: TrendDirection::FirstTermOnly,
            slope: 0.0,
        };
    }

    let slope = least_squares_slope(history);
    let direction = if slope > profile.slope_threshold {
        TrendDirection::Improving
    } else if slope < -profile.slope_threshold {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    TrendEstimate { direction, slope }
}

// Closed-form OLS slope over (term index, score) with 1-based indices.
fn least_squares_slope(values: &[f32]) -> f32 {
    let n = values.len() as f32;
    let mean_x = (n + 1.0) / 2.0;
    let mean_y = values.iter().sum::<f32>() / n;

    let mut num = 0.0f32;
    let mut den = 0.0f32;
    for (idx, &y) in values.iter().enumerate() {
        let x = (idx + 1) as f32;
        num += (x - mean_x) * (y - mean_y);
        den += (x - mean_x) * (x - mean_x);
    }
    num / den
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_trend.rs"]
mod tests;
