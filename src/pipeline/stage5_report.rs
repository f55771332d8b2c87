use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::estimate::EarlyEstimate;
use crate::model::forecast::{Forecast, mean, round2};
use crate::report::json::render_json;
use crate::report::text::{render_estimate_text, render_forecast_text, render_subjects_text};
use crate::report::{EstimateSummary, ForecastSummary, PredictionRow, SubjectsSummary};
use crate::subjects::SubjectProfile;

pub const TOOL_NAME: &str = "gradecast";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Both,
}

impl ReportFormat {
    fn text(self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::Both)
    }

    fn json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

pub fn build_forecast_summary(
    forecast: &Forecast,
    known_scores: &[f32],
    input_source: &str,
    grade_counts: Option<BTreeMap<char, u32>>,
) -> ForecastSummary {
    let predicted = forecast
        .predictions
        .iter()
        .map(|p| p.value)
        .collect::<Vec<_>>();

    ForecastSummary {
        tool: TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        input_source: input_source.to_string(),
        known_terms: forecast.known_terms,
        known_scores: known_scores.to_vec(),
        current_average: forecast.current_average,
        trend_label: forecast.trend.direction.label().to_string(),
        slope: forecast.trend.slope,
        predictions: forecast
            .predictions
            .iter()
            .map(|p| PredictionRow {
                term: p.term,
                predicted_sgpa: p.value,
            })
            .collect(),
        predicted_average: round2(mean(&predicted)),
        risk_label: forecast.risk.label().to_string(),
        risk_message: forecast.risk.message().to_string(),
        grade_counts,
    }
}

pub fn build_subjects_summary(subjects: Vec<SubjectProfile>, input_source: &str) -> SubjectsSummary {
    SubjectsSummary {
        tool: TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        input_source: input_source.to_string(),
        subjects,
    }
}

pub fn build_estimate_summary(
    estimate: &EarlyEstimate,
    midterm: f32,
    attendance: f32,
) -> EstimateSummary {
    EstimateSummary {
        tool: TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        midterm,
        attendance,
        estimated_sgpa: estimate.estimated_sgpa,
        pass_probability: estimate.pass_probability,
    }
}

pub fn emit_forecast(
    summary: &ForecastSummary,
    out_dir: Option<&Path>,
    format: ReportFormat,
) -> io::Result<()> {
    let json = render_json(summary)?;
    emit("forecast", &render_forecast_text(summary), &json, out_dir, format)
}

pub fn emit_subjects(
    summary: &SubjectsSummary,
    out_dir: Option<&Path>,
    format: ReportFormat,
) -> io::Result<()> {
    let json = render_json(summary)?;
    emit("subjects", &render_subjects_text(summary), &json, out_dir, format)
}

pub fn emit_estimate(
    summary: &EstimateSummary,
    out_dir: Option<&Path>,
    format: ReportFormat,
) -> io::Result<()> {
    let json = render_json(summary)?;
    emit("estimate", &render_estimate_text(summary), &json, out_dir, format)
}

fn emit(
    stem: &str,
    text: &str,
    json: &str,
    out_dir: Option<&Path>,
    format: ReportFormat,
) -> io::Result<()> {
    match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            if format.text() {
                let path = dir.join(format!("{stem}.txt"));
                write_text(&path, text)?;
                info!("wrote {}", path.display());
            }
            if format.json() {
                let path = dir.join(format!("{stem}.json"));
                write_text(&path, json)?;
                info!("wrote {}", path.display());
            }
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            if format.text() {
                writeln!(stdout, "{text}")?;
            }
            if format.json() {
                writeln!(stdout, "{json}")?;
            }
            Ok(())
        }
    }
}

fn write_text(path: &Path, content: &str) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
