mod estimate;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod subjects;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::input::grades::bucket_counts;
use crate::pipeline::stage5_report::{
    ReportFormat, build_estimate_summary, build_forecast_summary, build_subjects_summary,
    emit_estimate, emit_forecast, emit_subjects,
};

#[derive(Parser, Debug)]
#[command(
    name = "gradecast",
    version,
    about = "Per-term SGPA forecasting and academic risk assessment"
)]
struct Args {
    /// Log level when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Forecast SGPA for the remaining terms of the program
    Forecast {
        /// Comma-separated SGPA values for completed terms, oldest first
        #[arg(long, conflicts_with = "transcript")]
        scores: Option<String>,

        /// Transcript file with one term,course,credits,grade row per line
        #[arg(long)]
        transcript: Option<PathBuf>,

        /// Output directory for report files; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Per-subject performance profile from a transcript
    Subjects {
        /// Transcript file with one term,course,credits,grade row per line
        #[arg(long)]
        transcript: PathBuf,

        /// Output directory for report files; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// First-term estimate from midterm marks and attendance
    Estimate {
        /// Midterm marks out of 50
        #[arg(long)]
        midterm: f32,

        /// Attendance percentage
        #[arg(long)]
        attendance: f32,

        /// Output directory for report files; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    logging::init(&args.log_level);

    match args.command {
        Command::Forecast {
            scores,
            transcript,
            out,
            format,
        } => run_forecast_command(scores, transcript, out.as_deref(), format),
        Command::Subjects {
            transcript,
            out,
            format,
        } => run_subjects_command(&transcript, out.as_deref(), format),
        Command::Estimate {
            midterm,
            attendance,
            out,
            format,
        } => run_estimate_command(midterm, attendance, out.as_deref(), format),
    }
}

fn run_forecast_command(
    scores: Option<String>,
    transcript: Option<PathBuf>,
    out: Option<&Path>,
    format: ReportFormat,
) -> Result<(), String> {
    let (history, input_source, grade_counts) = resolve_history(scores, transcript)?;
    let forecast = pipeline::run_forecast(&history).map_err(|e| e.to_string())?;
    info!(
        "forecast: {} known terms, {} predicted, trend {}",
        forecast.known_terms,
        forecast.predictions.len(),
        forecast.trend.direction.label()
    );
    let summary = build_forecast_summary(&forecast, &history, &input_source, grade_counts);
    emit_forecast(&summary, out, format).map_err(|e| e.to_string())
}

fn run_subjects_command(
    transcript: &Path,
    out: Option<&Path>,
    format: ReportFormat,
) -> Result<(), String> {
    let transcript_data = input::load_transcript(transcript).map_err(|e| e.to_string())?;
    let profiles = subjects::analyze_subjects(&transcript_data);
    if profiles.is_empty() {
        return Err("transcript holds no graded courses".to_string());
    }
    info!("profiled {} subjects", profiles.len());
    let summary = build_subjects_summary(profiles, &transcript.display().to_string());
    emit_subjects(&summary, out, format).map_err(|e| e.to_string())
}

fn run_estimate_command(
    midterm: f32,
    attendance: f32,
    out: Option<&Path>,
    format: ReportFormat,
) -> Result<(), String> {
    let estimate = estimate::estimate_first_term(midterm, attendance).map_err(|e| e.to_string())?;
    let summary = build_estimate_summary(&estimate, midterm, attendance);
    emit_estimate(&summary, out, format).map_err(|e| e.to_string())
}

type ResolvedHistory = (Vec<f32>, String, Option<BTreeMap<char, u32>>);

fn resolve_history(
    scores: Option<String>,
    transcript: Option<PathBuf>,
) -> Result<ResolvedHistory, String> {
    match (scores, transcript) {
        (Some(raw), None) => {
            let history = input::parse_score_list(&raw).map_err(|e| e.to_string())?;
            Ok((history, "scores".to_string(), None))
        }
        (None, Some(path)) => {
            let transcript = input::load_transcript(&path).map_err(|e| e.to_string())?;
            let history = transcript.score_sequence().map_err(|e| e.to_string())?;
            if (transcript.max_term() as usize) > history.len() {
                warn!(
                    "term {} has no graded courses yet; forecasting from {} graded terms",
                    history.len() + 1,
                    history.len()
                );
            }
            let counts = bucket_counts(&transcript.letter_grades());
            Ok((history, path.display().to_string(), Some(counts)))
        }
        _ => Err("exactly one of --scores or --transcript is required".to_string()),
    }
}
