use std::collections::BTreeMap;

use crate::input::InputError;
use crate::input::grades::LetterGrade;
use crate::model::coefficients::PROGRAM_TERMS;

#[derive(Debug, Clone)]
pub struct CourseRow {
    pub term: u8,
    pub course: String,
    pub credits: f32,
    pub grade: LetterGrade,
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub rows: Vec<CourseRow>,
}

impl Transcript {
    // Credit-weighted mean of graded courses per term; Incomplete rows are
    // skipped. A term with no graded courses yields no entry.
    pub fn term_sgpa(&self) -> BTreeMap<u8, f32> {
        let mut acc: BTreeMap<u8, (f32, f32)> = BTreeMap::new();
        for row in &self.rows {
            if let Some(points) = row.grade.points() {
                let entry = acc.entry(row.term).or_insert((0.0, 0.0));
                entry.0 += points * row.credits;
                entry.1 += row.credits;
            }
        }
        acc.into_iter()
            .map(|(term, (weighted, credits))| (term, (weighted / credits).max(0.0).min(4.0)))
            .collect()
    }

    // The engine's history: SGPAs for a contiguous run of terms from term 1.
    pub fn score_sequence(&self) -> Result<Vec<f32>, InputError> {
        let by_term = self.term_sgpa();
        if by_term.is_empty() {
            return Err(InputError::InvalidInput(
                "transcript holds no graded courses".to_string(),
            ));
        }
        let mut scores = Vec::with_capacity(by_term.len());
        for (idx, (&term, &sgpa)) in by_term.iter().enumerate() {
            let expected = (idx + 1) as u8;
            if term != expected {
                return Err(InputError::InvalidInput(format!(
                    "transcript terms must be contiguous from term 1; term {} has no graded courses",
                    expected
                )));
            }
            scores.push(sgpa);
        }
        Ok(scores)
    }

    pub fn letter_grades(&self) -> Vec<LetterGrade> {
        self.rows.iter().map(|row| row.grade).collect()
    }

    pub fn max_term(&self) -> u8 {
        self.rows.iter().map(|row| row.term).max().unwrap_or(0)
    }
}

pub fn parse_transcript(content: &str) -> Result<Transcript, InputError> {
    let mut rows = Vec::new();
    for (lineno, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
        if fields.len() != 4 {
            return Err(InputError::Parse(format!(
                "line {}: expected term,course,credits,grade",
                lineno + 1
            )));
        }

        let term = fields[0].parse::<u8>().map_err(|_| {
            InputError::Parse(format!("line {}: invalid term '{}'", lineno + 1, fields[0]))
        })?;
        if term == 0 || term > PROGRAM_TERMS {
            return Err(InputError::InvalidInput(format!(
                "line {}: term {} is outside 1..={}",
                lineno + 1,
                term,
                PROGRAM_TERMS
            )));
        }

        let course = fields[1].to_string();
        if course.is_empty() {
            return Err(InputError::Parse(format!(
                "line {}: course code is empty",
                lineno + 1
            )));
        }

        let credits = fields[2].parse::<f32>().map_err(|_| {
            InputError::Parse(format!(
                "line {}: invalid credits '{}'",
                lineno + 1,
                fields[2]
            ))
        })?;
        if !(credits > 0.0) || !credits.is_finite() {
            return Err(InputError::InvalidInput(format!(
                "line {}: credits must be positive",
                lineno + 1
            )));
        }

        let grade = LetterGrade::parse(fields[3]).ok_or_else(|| {
            InputError::Parse(format!(
                "line {}: unknown letter grade '{}'",
                lineno + 1,
                fields[3]
            ))
        })?;

        rows.push(CourseRow {
            term,
            course,
            credits,
            grade,
        });
    }
    Ok(Transcript { rows })
}
