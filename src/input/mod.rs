use std::path::Path;

pub mod grades;
pub mod transcript;

use thiserror::Error;
use tracing::info;

use transcript::Transcript;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn parse_score_list(raw: &str) -> Result<Vec<f32>, InputError> {
    if raw.trim().is_empty() {
        // the engine reports the empty-history contract violation itself
        return Ok(Vec::new());
    }

    let mut scores = Vec::new();
    for (idx, item) in raw.split(',').enumerate() {
        let item = item.trim();
        if item.is_empty() {
            return Err(InputError::Parse(format!(
                "empty score at position {}",
                idx + 1
            )));
        }
        let value = item.parse::<f32>().map_err(|_| {
            InputError::Parse(format!("invalid score '{}' at position {}", item, idx + 1))
        })?;
        scores.push(value);
    }
    Ok(scores)
}

pub fn load_transcript(path: &Path) -> Result<Transcript, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "transcript file {} does not exist",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let transcript = transcript::parse_transcript(&content)?;
    info!(
        "loaded transcript {}: {} course rows across {} graded terms",
        path.display(),
        transcript.rows.len(),
        transcript.term_sgpa().len()
    );
    Ok(transcript)
}
