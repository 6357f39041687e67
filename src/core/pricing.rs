use crate::domain::model::PricingInput;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RUSH_MULTIPLIER: f64 = 1.5;

/// Interchangeable cost-calculation rules.
///
/// Inputs are trusted: out-of-range complexity or hours flow through the
/// arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PricingPolicy {
    /// `base_rate * hours`
    Standard,
    /// `base_rate * hours * multiplier`
    Rush { multiplier: f64 },
    /// `base_rate * hours * (1 + complexity / 10)`
    PremiumComplexity,
}

impl PricingPolicy {
    pub fn rush() -> Self {
        Self::Rush {
            multiplier: DEFAULT_RUSH_MULTIPLIER,
        }
    }

    pub fn calculate(&self, input: &PricingInput) -> f64 {
        let flat = input.base_rate * input.hours;
        match self {
            Self::Standard => flat,
            Self::Rush { multiplier } => flat * multiplier,
            Self::PremiumComplexity => flat * (1.0 + f64::from(input.complexity) / 10.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Rush { .. } => "Rush",
            Self::PremiumComplexity => "Premium Complexity",
        }
    }
}

/// Caller-side selection of a [`PricingPolicy`]. Rush takes precedence over
/// complexity; premium applies strictly above the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    pub rush_multiplier: f64,
    pub premium_threshold: u8,
}

impl PricingRules {
    pub fn select(&self, is_rush: bool, complexity: u8) -> PricingPolicy {
        if is_rush {
            PricingPolicy::Rush {
                multiplier: self.rush_multiplier,
            }
        } else if complexity > self.premium_threshold {
            PricingPolicy::PremiumComplexity
        } else {
            PricingPolicy::Standard
        }
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            rush_multiplier: DEFAULT_RUSH_MULTIPLIER,
            premium_threshold: 5,
        }
    }
}

pub fn select_policy(is_rush: bool, complexity: u8) -> PricingPolicy {
    PricingRules::default().select(is_rush, complexity)
}
