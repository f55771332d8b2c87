use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    F,
    Incomplete,
}

impl LetterGrade {
    pub fn parse(s: &str) -> Option<LetterGrade> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Some(LetterGrade::A),
            "A-" => Some(LetterGrade::AMinus),
            "B+" => Some(LetterGrade::BPlus),
            "B" => Some(LetterGrade::B),
            "B-" => Some(LetterGrade::BMinus),
            "C+" => Some(LetterGrade::CPlus),
            "C" => Some(LetterGrade::C),
            "C-" => Some(LetterGrade::CMinus),
            "D+" => Some(LetterGrade::DPlus),
            "D" => Some(LetterGrade::D),
            "F" => Some(LetterGrade::F),
            "I" => Some(LetterGrade::Incomplete),
            _ => None,
        }
    }

    // Incomplete carries no points and is excluded from SGPA.
    pub fn points(&self) -> Option<f32> {
        match self {
            LetterGrade::A => Some(4.0),
            LetterGrade::AMinus => Some(3.7),
            LetterGrade::BPlus => Some(3.3),
            LetterGrade::B => Some(3.0),
            LetterGrade::BMinus => Some(2.7),
            LetterGrade::CPlus => Some(2.3),
            LetterGrade::C => Some(2.0),
            LetterGrade::CMinus => Some(1.7),
            LetterGrade::DPlus => Some(1.3),
            LetterGrade::D => Some(1.0),
            LetterGrade::F => Some(0.0),
            LetterGrade::Incomplete => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
            LetterGrade::Incomplete => "I",
        }
    }

    // Coarse histogram bucket; modifiers fold into the base letter.
    pub fn bucket(&self) -> Option<char> {
        match self {
            LetterGrade::A | LetterGrade::AMinus => Some('A'),
            LetterGrade::BPlus | LetterGrade::B | LetterGrade::BMinus => Some('B'),
            LetterGrade::CPlus | LetterGrade::C | LetterGrade::CMinus => Some('C'),
            LetterGrade::DPlus | LetterGrade::D => Some('D'),
            LetterGrade::F => Some('F'),
            LetterGrade::Incomplete => None,
        }
    }
}

pub fn bucket_counts(grades: &[LetterGrade]) -> BTreeMap<char, u32> {
    let mut counts = BTreeMap::new();
    for grade in grades {
        if let Some(bucket) = grade.bucket() {
            *counts.entry(bucket).or_insert(0u32) += 1;
        }
    }
    counts
}
