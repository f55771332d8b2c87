use super::*;

use crate::model::forecast::Prediction;
use crate::model::risk::RiskTier;
use crate::model::trend::{TrendDirection, TrendEstimate};

fn sample_forecast() -> Forecast {
    Forecast {
        known_terms: 3,
        current_average: 3.47,
        trend: TrendEstimate {
            direction: TrendDirection::Declining,
            slope: -0.15,
        },
        predictions: vec![
            Prediction {
                term: 4,
                value: 3.38,
            },
            Prediction {
                term: 5,
                value: 3.3,
            },
        ],
        risk: RiskTier::Good,
    }
}

#[test]
fn test_build_forecast_summary() {
    let forecast = sample_forecast();
    let summary = build_forecast_summary(&forecast, &[3.5, 3.7, 3.2], "scores", None);
    assert_eq!(summary.tool, TOOL_NAME);
    assert!(!summary.version.is_empty());
    assert_eq!(summary.known_terms, 3);
    assert_eq!(summary.trend_label, "Declining");
    assert_eq!(summary.risk_label, "GOOD");
    assert_eq!(summary.risk_message, "Good Performance - On Track");
    assert_eq!(summary.predictions.len(), 2);
    assert!((summary.predicted_average - 3.34).abs() < 1e-6);
    assert!(summary.grade_counts.is_none());
}

#[test]
fn test_report_format_selectors() {
    assert!(ReportFormat::Text.text() && !ReportFormat::Text.json());
    assert!(ReportFormat::Json.json() && !ReportFormat::Json.text());
    assert!(ReportFormat::Both.text() && ReportFormat::Both.json());
}

#[test]
fn test_emit_writes_both_files() {
    let dir = std::env::temp_dir().join("gradecast-stage5-emit-both");
    let _ = fs::remove_dir_all(&dir);

    let forecast = sample_forecast();
    let summary = build_forecast_summary(&forecast, &[3.5, 3.7, 3.2], "scores", None);
    emit_forecast(&summary, Some(&dir), ReportFormat::Both).unwrap();

    let text = fs::read_to_string(dir.join("forecast.txt")).unwrap();
    assert!(text.contains("Risk: GOOD"));
    let json = fs::read_to_string(dir.join("forecast.json")).unwrap();
    assert!(json.contains("\"risk_label\": \"GOOD\""));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_emit_text_only_skips_json() {
    let dir = std::env::temp_dir().join("gradecast-stage5-emit-text");
    let _ = fs::remove_dir_all(&dir);

    let forecast = sample_forecast();
    let summary = build_forecast_summary(&forecast, &[3.5, 3.7, 3.2], "scores", None);
    emit_forecast(&summary, Some(&dir), ReportFormat::Text).unwrap();

    assert!(dir.join("forecast.txt").exists());
    assert!(!dir.join("forecast.json").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_build_estimate_summary_echoes_inputs() {
    let estimate = EarlyEstimate {
        estimated_sgpa: 3.32,
        pass_probability: 85,
    };
    let summary = build_estimate_summary(&estimate, 40.0, 90.0);
    assert_eq!(summary.midterm, 40.0);
    assert_eq!(summary.attendance, 90.0);
    assert_eq!(summary.pass_probability, 85);
}
