use super::*;

#[test]
fn test_tier_boundaries_inclusive_low() {
    assert_eq!(classify_mean(3.5), RiskTier::Excellent);
    assert_eq!(classify_mean(3.499999), RiskTier::Good);
    assert_eq!(classify_mean(3.0), RiskTier::Good);
    assert_eq!(classify_mean(2.999999), RiskTier::Fair);
    assert_eq!(classify_mean(2.5), RiskTier::Fair);
    assert_eq!(classify_mean(2.499999), RiskTier::BelowAverage);
    assert_eq!(classify_mean(2.0), RiskTier::BelowAverage);
    assert_eq!(classify_mean(1.999999), RiskTier::Poor);
    assert_eq!(classify_mean(0.0), RiskTier::Poor);
    assert_eq!(classify_mean(4.0), RiskTier::Excellent);
}

#[test]
fn test_mean_over_prediction_set() {
    let predictions = vec![
        Prediction {
            term: 7,
            value: 3.6,
        },
        Prediction {
            term: 8,
            value: 3.4,
        },
    ];
    assert_eq!(run_stage4(&predictions), RiskTier::Excellent);
}

#[test]
fn test_low_prediction_set_flags_poor() {
    let predictions = vec![
        Prediction {
            term: 6,
            value: 1.8,
        },
        Prediction {
            term: 7,
            value: 2.1,
        },
        Prediction {
            term: 8,
            value: 1.9,
        },
    ];
    assert_eq!(run_stage4(&predictions), RiskTier::Poor);
}
