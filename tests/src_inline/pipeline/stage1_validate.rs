use super::*;

fn profile() -> CoefficientProfile {
    CoefficientProfile::default_v1()
}

#[test]
fn test_valid_lengths_accepted() {
    for n in 1..=7usize {
        let history = vec![3.0; n];
        assert!(run_stage1(&history, &profile()).is_ok());
    }
}

#[test]
fn test_empty_history_rejected() {
    assert_eq!(
        run_stage1(&[], &profile()),
        Err(ValidationError::EmptyHistory)
    );
}

#[test]
fn test_complete_program_rejected() {
    let history = vec![3.0; 8];
    assert_eq!(
        run_stage1(&history, &profile()),
        Err(ValidationError::TooManyTerms { got: 8, max: 7 })
    );
}

#[test]
fn test_score_above_scale_rejected() {
    let err = run_stage1(&[3.0, 4.5], &profile()).unwrap_err();
    assert!(matches!(err, ValidationError::ScoreOutOfRange { term: 2, .. }));
}

#[test]
fn test_negative_score_rejected() {
    let err = run_stage1(&[-0.1], &profile()).unwrap_err();
    assert!(matches!(err, ValidationError::ScoreOutOfRange { term: 1, .. }));
}

#[test]
fn test_nan_rejected() {
    let err = run_stage1(&[3.0, f32::NAN], &profile()).unwrap_err();
    assert_eq!(err, ValidationError::NonFiniteScore { term: 2 });
}

#[test]
fn test_scale_endpoints_accepted() {
    assert!(run_stage1(&[0.0, 4.0], &profile()).is_ok());
}

#[test]
fn test_error_messages_name_the_constraint() {
    let err = run_stage1(&[], &profile()).unwrap_err();
    assert!(err.to_string().contains("empty"));
    let err = run_stage1(&[5.0], &profile()).unwrap_err();
    assert!(err.to_string().contains("outside"));
}
