//! Silhouette stability grading.
//!
//! Three skeletal features feed a deduction score; the score maps onto a
//! five-level ordinal grade. The function is pure: identical inputs always
//! produce the identical grade.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::selection::{CheekboneType, ForeheadType, JawType};

/// Ordinal stability grade, A (best) through F (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StabilityGrade {
    A,
    B,
    C,
    D,
    F,
}

impl StabilityGrade {
    /// All grades, best first.
    pub const ALL: [StabilityGrade; 5] = [
        StabilityGrade::A,
        StabilityGrade::B,
        StabilityGrade::C,
        StabilityGrade::D,
        StabilityGrade::F,
    ];

    /// Letter token used in records and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            StabilityGrade::A => "A",
            StabilityGrade::B => "B",
            StabilityGrade::C => "C",
            StabilityGrade::D => "D",
            StabilityGrade::F => "F",
        }
    }

    /// Human-readable meaning of the grade.
    pub fn label(&self) -> &'static str {
        match self {
            StabilityGrade::A => "very stable",
            StabilityGrade::B => "stable",
            StabilityGrade::C => "moderate",
            StabilityGrade::D => "caution advised",
            StabilityGrade::F => "risky combination",
        }
    }

    /// Indicator symbol shown next to the grade.
    pub fn symbol(&self) -> &'static str {
        match self {
            StabilityGrade::A => "\u{1f7e2}",
            StabilityGrade::B => "\u{1f7e1}",
            StabilityGrade::C => "\u{1f7e0}",
            StabilityGrade::D => "\u{1f534}",
            StabilityGrade::F => "\u{26a0}\u{fe0f}",
        }
    }

    /// Background color token for display surfaces.
    pub fn color(&self) -> &'static str {
        match self {
            StabilityGrade::A => "#d1ffd6",
            StabilityGrade::B => "#fff9c4",
            StabilityGrade::C => "#ffe0b2",
            StabilityGrade::D => "#ffcccb",
            StabilityGrade::F => "#ffb3b3",
        }
    }

    /// Full display form, e.g. `🟢 A (very stable)`.
    pub fn display(&self) -> String {
        format!("{} {} ({})", self.symbol(), self.as_str(), self.label())
    }

    /// Parse a letter token back into a grade.
    pub fn parse(token: &str) -> Result<StabilityGrade, AppError> {
        Self::ALL.iter().copied().find(|g| g.as_str() == token).ok_or_else(|| {
            AppError::InvalidSelection {
                field: "grade",
                value: token.to_string(),
                expected: "A, B, C, D, F".to_string(),
            }
        })
    }

    fn from_score(score: i8) -> StabilityGrade {
        match score {
            3 => StabilityGrade::A,
            2 => StabilityGrade::B,
            1 => StabilityGrade::C,
            0 => StabilityGrade::D,
            // Unreachable from the closed enumerations (three deduction
            // opportunities from a base of 3), kept for robustness.
            _ => StabilityGrade::F,
        }
    }
}

impl fmt::Display for StabilityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Grade how "set" a hairstyle silhouette will appear on this skeleton.
///
/// Starts from a base score of 3 and applies three independent deductions:
/// wide forehead, wide cheekbones, and a round or recessed jaw (the two jaw
/// conditions share a single deduction).
pub fn grade(forehead: ForeheadType, cheekbone: CheekboneType, jaw: JawType) -> StabilityGrade {
    let mut score: i8 = 3;
    if forehead == ForeheadType::Wide {
        score -= 1;
    }
    if cheekbone == CheekboneType::Wide {
        score -= 1;
    }
    if matches!(jaw, JawType::Round | JawType::Recessed) {
        score -= 1;
    }
    StabilityGrade::from_score(score)
}
