pub const PROGRAM_TERMS: u8 = 8;

#[derive(Debug, Clone)]
pub struct CoefficientProfile {
    pub program_terms: u8,
    pub max_known_terms: usize,
    pub score_min: f32,
    pub score_max: f32,
    pub neutral_center: f32,
    pub single_point_weight: f32,
    pub center_weight: f32,
    pub momentum_weight: f32,
    pub trend_weight: f32,
    pub trend_decay: f32,
    pub slope_threshold: f32,
    pub recency_window: usize,
}

impl CoefficientProfile {
    pub fn default_v1() -> Self {
        Self {
            program_terms: PROGRAM_TERMS,
            max_known_terms: 7,
            score_min: 0.0,
            score_max: 4.0,
            neutral_center: 2.5,
            single_point_weight: 0.9,
            center_weight: 0.1,
            momentum_weight: 0.3,
            trend_weight: 0.2,
            trend_decay: 0.9,
            slope_threshold: 0.05,
            recency_window: 3,
        }
    }
}

pub fn clip_to_scale(x: f32, profile: &CoefficientProfile) -> f32 {
    if x < profile.score_min {
        profile.score_min
    } else if x > profile.score_max {
        profile.score_max
    } else {
        x
    }
}
