use super::*;

fn profile() -> CoefficientProfile {
    CoefficientProfile::default_v1()
}

#[test]
fn test_linear_improving_history() {
    let estimate = run_stage2(&[2.0, 2.5, 3.0, 3.5], &profile());
    assert_eq!(estimate.direction, TrendDirection::Improving);
    assert!((estimate.slope - 0.5).abs() < 1e-4);
}

#[test]
fn test_linear_declining_history() {
    let estimate = run_stage2(&[3.5, 3.0, 2.5, 2.0], &profile());
    assert_eq!(estimate.direction, TrendDirection::Declining);
    assert!((estimate.slope + 0.5).abs() < 1e-4);
}

#[test]
fn test_flat_history_is_stable() {
    let estimate = run_stage2(&[3.0, 3.0, 3.0], &profile());
    assert_eq!(estimate.direction, TrendDirection::Stable);
    assert!(estimate.slope.abs() < 1e-6);
}

#[test]
fn test_single_term_has_no_regression() {
    let estimate = run_stage2(&[4.0], &profile());
    assert_eq!(estimate.direction, TrendDirection::FirstTermOnly);
    assert_eq!(estimate.slope, 0.0);
}

#[test]
fn test_slope_inside_dead_band_is_stable() {
    let up = run_stage2(&[3.0, 3.04], &profile());
    assert_eq!(up.direction, TrendDirection::Stable);
    let down = run_stage2(&[3.0, 2.96], &profile());
    assert_eq!(down.direction, TrendDirection::Stable);
}

#[test]
fn test_two_term_slope_is_the_difference() {
    let estimate = run_stage2(&[2.0, 3.0], &profile());
    assert!((estimate.slope - 1.0).abs() < 1e-6);
    assert_eq!(estimate.direction, TrendDirection::Improving);
}

#[test]
fn test_noisy_declining_history() {
    // best-fit line through (1, 3.5), (2, 3.7), (3, 3.2)
    let estimate = run_stage2(&[3.5, 3.7, 3.2], &profile());
    assert!((estimate.slope - (-0.15)).abs() < 1e-4);
    assert_eq!(estimate.direction, TrendDirection::Declining);
}
