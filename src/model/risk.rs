use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Excellent,
    Good,
    Fair,
    BelowAverage,
    Poor,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Excellent => "EXCELLENT",
            RiskTier::Good => "GOOD",
            RiskTier::Fair => "FAIR",
            RiskTier::BelowAverage => "BELOW_AVERAGE",
            RiskTier::Poor => "POOR",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskTier::Excellent => "Strong Performance - Excellent Track Record",
            RiskTier::Good => "Good Performance - On Track",
            RiskTier::Fair => "Fair Performance - Moderate Effort Needed",
            RiskTier::BelowAverage => "Below Average - Intervention Recommended",
            RiskTier::Poor => "Poor Performance - Immediate Action Needed",
        }
    }
}
