use thiserror::Error;

use crate::model::coefficients::CoefficientProfile;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("score history is empty; at least one completed term is required")]
    EmptyHistory,
    #[error("score history has {got} terms; at most {max} completed terms can be forecast")]
    TooManyTerms { got: usize, max: usize },
    #[error("term {term} score {value} is outside the {min}..{max} scale")]
    ScoreOutOfRange {
        term: usize,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("term {term} score is not a finite number")]
    NonFiniteScore { term: usize },
    #[error("{field} must be between {min} and {max}, got {value}")]
    FieldOutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

pub fn run_stage1(history: &[f32], profile: &CoefficientProfile) -> Result<(), ValidationError> {
    if history.is_empty() {
        return Err(ValidationError::EmptyHistory);
    }
    if history.len() > profile.max_known_terms {
        return Err(ValidationError::TooManyTerms {
            got: history.len(),
            max: profile.max_known_terms,
        });
    }
    for (idx, &value) in history.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteScore { term: idx + 1 });
        }
        if value < profile.score_min || value > profile.score_max {
            return Err(ValidationError::ScoreOutOfRange {
                term: idx + 1,
                value,
                min: profile.score_min,
                max: profile.score_max,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
