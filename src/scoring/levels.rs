use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-band classification of a 0-100 score.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Text shown under the overall difficulty card
    pub fn description(self) -> &'static str {
        match self {
            RiskLevel::High => "Hay varios factores significativos que están frenando tu progreso. Un plan estructurado puede ayudarte.",
            RiskLevel::Medium => "Tienes algunos obstáculos identificables. Con los cambios correctos, puedes ver resultados.",
            RiskLevel::Low => "Tus hábitos base son buenos. Pequeños ajustes pueden marcar la diferencia.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bounds (inclusive) of the medium and high bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub high: f64,
    pub medium: f64,
}

/// Bands for a single category's normalized score.
pub const CATEGORY_BANDS: Bands = Bands {
    high: 70.0,
    medium: 40.0,
};

/// Bands for the mean of all category scores. The high cutoff is lower
/// than the per-category one.
pub const OVERALL_BANDS: Bands = Bands {
    high: 65.0,
    medium: 40.0,
};

impl Bands {
    pub fn classify(&self, score: f64) -> RiskLevel {
        if score >= self.high {
            RiskLevel::High
        } else if score >= self.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
