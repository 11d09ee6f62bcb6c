use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall risk classification of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Weighted totals at or above this are HIGH.
    pub const HIGH_THRESHOLD: u32 = 15;
    /// Weighted totals at or above this (and below HIGH) are MEDIUM.
    pub const MEDIUM_THRESHOLD: u32 = 8;

    #[must_use]
    pub fn from_weighted_total(total: u32) -> Self {
        if total >= Self::HIGH_THRESHOLD {
            Self::High
        } else if total >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted vocabulary bucket a risk term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    HighRisk,
    MediumRisk,
    LowRisk,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [Self::HighRisk, Self::MediumRisk, Self::LowRisk];

    #[must_use]
    pub fn weight(&self) -> u32 {
        match self {
            Self::HighRisk => 3,
            Self::MediumRisk => 2,
            Self::LowRisk => 1,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighRisk => "high_risk",
            Self::MediumRisk => "medium_risk",
            Self::LowRisk => "low_risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
