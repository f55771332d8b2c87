use std::collections::BTreeMap;

use serde::Serialize;

use crate::input::grades::LetterGrade;
use crate::input::transcript::Transcript;
use crate::model::forecast::{mean, round2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectTrend {
    Improving,
    Declining,
    Stable,
}

impl SubjectTrend {
    pub fn label(&self) -> &'static str {
        match self {
            SubjectTrend::Improving => "Improving",
            SubjectTrend::Declining => "Declining",
            SubjectTrend::Stable => "Stable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionTier {
    Critical,
    High,
    Moderate,
    Low,
}

impl AttentionTier {
    pub fn label(&self) -> &'static str {
        match self {
            AttentionTier::Critical => "Critical",
            AttentionTier::High => "High Risk",
            AttentionTier::Moderate => "Moderate",
            AttentionTier::Low => "Low Risk",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectProfile {
    pub course: String,
    pub grade_values: Vec<f32>,
    pub average: f32,
    pub trend: SubjectTrend,
    pub predicted_next: f32,
    pub consistency: f32,
    pub attention: AttentionTier,
    pub last_grade: String,
}

// Profiles are ordered weakest subject first.
pub fn analyze_subjects(transcript: &Transcript) -> Vec<SubjectProfile> {
    let mut by_course: BTreeMap<&str, Vec<(u8, LetterGrade)>> = BTreeMap::new();
    for row in &transcript.rows {
        if row.grade.points().is_some() {
            by_course
                .entry(row.course.as_str())
                .or_default()
                .push((row.term, row.grade));
        }
    }

    let mut profiles = Vec::with_capacity(by_course.len());
    for (course, mut graded) in by_course {
        graded.sort_by_key(|(term, _)| *term);
        let values = graded
            .iter()
            .filter_map(|(_, grade)| grade.points())
            .collect::<Vec<_>>();
        let last_grade = graded
            .last()
            .map(|(_, grade)| grade.symbol().to_string())
            .unwrap_or_else(|| "N/A".to_string());
        profiles.push(profile_for(course, &values, last_grade));
    }

    profiles.sort_by(|a, b| {
        match a
            .average
            .partial_cmp(&b.average)
            .unwrap_or(std::cmp::Ordering::Equal)
        {
            std::cmp::Ordering::Equal => a.course.cmp(&b.course),
            other => other,
        }
    });
    profiles
}

fn profile_for(course: &str, values: &[f32], last_grade: String) -> SubjectProfile {
    let average = mean(values);
    let trend = half_split_trend(values);

    let predicted_next = match trend {
        SubjectTrend::Improving => (average + 0.2).min(4.0),
        SubjectTrend::Declining => (average - 0.2).max(0.0),
        SubjectTrend::Stable => average,
    };

    let variance = if values.len() > 1 {
        values
            .iter()
            .map(|v| (v - average) * (v - average))
            .sum::<f32>()
            / values.len() as f32
    } else {
        0.0
    };
    let consistency = (100.0 - variance * 50.0).max(0.0);

    let attention = if average < 2.0 {
        AttentionTier::Critical
    } else if average < 2.5 {
        AttentionTier::High
    } else if average < 3.0 {
        AttentionTier::Moderate
    } else {
        AttentionTier::Low
    };

    SubjectProfile {
        course: course.to_string(),
        grade_values: values.to_vec(),
        average: round2(average),
        trend,
        predicted_next: round2(predicted_next),
        consistency: round2(consistency),
        attention,
        last_grade,
    }
}

// Recent half versus earlier half, with a 0.3 dead band.
fn half_split_trend(values: &[f32]) -> SubjectTrend {
    if values.len() < 2 {
        return SubjectTrend::Stable;
    }
    let split = values.len().div_ceil(2);
    let first_avg = mean(&values[..split]);
    let second_avg = mean(&values[split..]);
    if second_avg > first_avg + 0.3 {
        SubjectTrend::Improving
    } else if second_avg < first_avg - 0.3 {
        SubjectTrend::Declining
    } else {
        SubjectTrend::Stable
    }
}
