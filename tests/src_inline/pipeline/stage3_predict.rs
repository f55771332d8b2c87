use super::*;

fn profile() -> CoefficientProfile {
    CoefficientProfile::default_v1()
}

#[test]
fn test_single_term_shrinks_toward_center() {
    // 0.9 * 4.0 + 0.1 * 2.5
    let predictions = run_stage3(&[4.0], 0.0, &profile());
    assert_eq!(predictions.len(), 7);
    assert_eq!(predictions[0].term, 2);
    assert!((predictions[0].value - 3.85).abs() < 1e-6);
}

#[test]
fn test_two_term_weighted_average() {
    // weights [1, e]; momentum cancels for a two-entry window and the
    // trend term is skipped below three entries, slope notwithstanding
    let value = predict_next(&[2.0, 3.0], 3, 2, 1.0, &profile());
    assert!((value - 2.73).abs() < 1e-6);
}

#[test]
fn test_trend_term_decays_per_predicted_step() {
    let p = profile();
    let first = predict_next(&[3.0, 3.0, 3.0], 4, 3, 1.0, &p);
    let second = predict_next(&[3.0, 3.0, 3.0], 5, 3, 1.0, &p);
    let third = predict_next(&[3.0, 3.0, 3.0], 6, 3, 1.0, &p);
    assert!((first - 3.2).abs() < 1e-6);
    assert!((second - 3.18).abs() < 1e-6);
    assert!((third - 3.16).abs() < 1e-6);
}

#[test]
fn test_no_trend_term_for_two_entry_history() {
    let value = predict_next(&[3.0, 3.0], 5, 1, 1.0, &profile());
    assert!((value - 3.0).abs() < 1e-6);
}

#[test]
fn test_momentum_contribution() {
    let with_momentum = profile();
    let mut without_momentum = profile();
    without_momentum.momentum_weight = 0.0;

    // recent mean 8/3 versus overall mean 2.5 gives momentum 1/6
    let history = [2.0, 2.0, 2.0, 4.0];
    let base = predict_next(&history, 5, 4, 0.0, &with_momentum);
    let flat = predict_next(&history, 5, 4, 0.0, &without_momentum);
    assert!(((base - flat) - 0.05).abs() < 1e-6);
}

#[test]
fn test_prediction_clamped_to_scale() {
    let high = predict_next(&[4.0, 4.0, 4.0], 4, 3, 3.0, &profile());
    assert_eq!(high, 4.0);
    let low = predict_next(&[0.0, 0.0, 0.0], 4, 3, -3.0, &profile());
    assert_eq!(low, 0.0);
}

#[test]
fn test_rounded_value_feeds_next_step() {
    let p = profile();
    let predictions = run_stage3(&[2.0, 3.0], 1.0, &p);
    assert!((predictions[0].value - 2.73).abs() < 1e-6);

    // the second step must see the reported 2.73, not the raw average
    let manual = predict_next(&[2.0, 3.0, predictions[0].value], 4, 2, 1.0, &p);
    assert_eq!(predictions[1].value.to_bits(), manual.to_bits());
}

#[test]
fn test_terms_contiguous_to_program_end() {
    for n in 1..=7usize {
        let history = vec![2.5; n];
        let predictions = run_stage3(&history, 0.0, &profile());
        assert_eq!(predictions.len(), 8 - n);
        for (offset, prediction) in predictions.iter().enumerate() {
            assert_eq!(prediction.term as usize, n + 1 + offset);
        }
    }
}

#[test]
fn test_seven_term_history_yields_one_prediction() {
    let history = [3.2, 3.4, 3.1, 3.3, 3.5, 3.2, 3.4];
    let predictions = run_stage3(&history, 0.01, &profile());
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].term, 8);
    assert!(predictions[0].value >= 0.0 && predictions[0].value <= 4.0);
}
