use serde::Serialize;

use crate::model::forecast::round2;
use crate::pipeline::stage1_validate::ValidationError;

pub const MIDTERM_MAX: f32 = 50.0;
pub const ATTENDANCE_MAX: f32 = 100.0;

const MIDTERM_WEIGHT: f32 = 0.7;
const ATTENDANCE_WEIGHT: f32 = 0.3;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EarlyEstimate {
    pub estimated_sgpa: f32,
    pub pass_probability: u8,
}

// First-term projection when no completed term exists yet: midterm marks
// carry most of the signal, attendance the rest.
pub fn estimate_first_term(midterm: f32, attendance: f32) -> Result<EarlyEstimate, ValidationError> {
    if !(0.0..=MIDTERM_MAX).contains(&midterm) {
        return Err(ValidationError::FieldOutOfRange {
            field: "midterm",
            value: midterm,
            min: 0.0,
            max: MIDTERM_MAX,
        });
    }
    if !(0.0..=ATTENDANCE_MAX).contains(&attendance) {
        return Err(ValidationError::FieldOutOfRange {
            field: "attendance",
            value: attendance,
            min: 0.0,
            max: ATTENDANCE_MAX,
        });
    }

    let midterm_part = (midterm / MIDTERM_MAX) * 4.0 * MIDTERM_WEIGHT;
    let attendance_part = (attendance / ATTENDANCE_MAX) * 4.0 * ATTENDANCE_WEIGHT;
    let estimated = (midterm_part + attendance_part).max(0.0).min(4.0);

    Ok(EarlyEstimate {
        estimated_sgpa: round2(estimated),
        pass_probability: pass_probability_for(estimated),
    })
}

pub fn pass_probability_for(estimated_sgpa: f32) -> u8 {
    if estimated_sgpa >= 3.5 {
        95
    } else if estimated_sgpa >= 3.0 {
        85
    } else if estimated_sgpa >= 2.5 {
        70
    } else if estimated_sgpa >= 2.0 {
        55
    } else {
        30
    }
}
