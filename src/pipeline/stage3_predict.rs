use crate::model::coefficients::{CoefficientProfile, clip_to_scale};
use crate::model::forecast::{Prediction, mean, round2};

pub fn run_stage3(history: &[f32], slope: f32, profile: &CoefficientProfile) -> Vec<Prediction> {
    let known = history.len();
    let last_term = profile.program_terms as usize;

    let mut running = history.to_vec();
    let mut out = Vec::with_capacity(last_term.saturating_sub(known));
    for term in (known + 1)..=last_term {
        let value = predict_next(&running, term, known, slope, profile);
        // the rounded, reported value is what feeds the next step
        running.push(value);
        out.push(Prediction {
            term: term as u8,
            value,
        });
    }
    out
}

pub fn predict_next(
    history: &[f32],
    target_term: usize,
    known_terms: usize,
    slope: f32,
    profile: &CoefficientProfile,
) -> f32 {
    let m = history.len();

    let pred = if m == 1 {
        // a lone data point is shrunk toward the middle of the scale
        profile.single_point_weight * history[0] + profile.center_weight * profile.neutral_center
    } else {
        let weights = recency_weights(m);
        let weight_sum: f32 = weights.iter().sum();
        let mut weighted = 0.0f32;
        for (value, weight) in history.iter().zip(&weights) {
            weighted += value * weight;
        }
        let weighted_avg = weighted / weight_sum;

        let window = profile.recency_window.min(m);
        let recent_avg = mean(&history[m - window..]);
        let momentum = recent_avg - mean(history);

        let mut pred = weighted_avg + profile.momentum_weight * momentum;
        if m > 2 {
            // zero-based position among the predicted terms
            let exponent = (target_term - known_terms - 1) as i32;
            let decay = profile.trend_decay.powi(exponent);
            pred += slope * profile.trend_weight * decay;
        }
        pred
    };

    round2(clip_to_scale(pred, profile))
}

// Exponential curve over an even grid from 0 to 1; the newest entry
// weighs e times the oldest.
fn recency_weights(m: usize) -> Vec<f32> {
    let step = 1.0 / (m as f32 - 1.0);
    (0..m).map(|i| (i as f32 * step).exp()).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_predict.rs"]
mod tests;
