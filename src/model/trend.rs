use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
    FirstTermOnly,
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "Improving",
            TrendDirection::Declining => "Declining",
            TrendDirection::Stable => "Stable",
            TrendDirection::FirstTermOnly => "First Term Only",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendEstimate {
    pub direction: TrendDirection,
    pub slope: f32,
}
