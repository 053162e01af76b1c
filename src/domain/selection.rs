//! Consultation form enumerations.
//!
//! Each selection is a closed set of tokens. Parsing is strict: a token
//! outside the enumeration is rejected with an error naming the field and the
//! offending value, rather than silently matching nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AppError;

/// A closed selection enumeration captured on the consultation form.
pub trait Selection: Sized + Copy + 'static {
    /// CLI flag and record column name for this field.
    const FIELD: &'static str;
    /// Human-readable label used in reports.
    const LABEL: &'static str;
    /// All variants in display order.
    const ALL: &'static [Self];

    /// Token used on the CLI and in records.
    fn as_str(&self) -> &'static str;

    /// Parse a raw token into a variant.
    ///
    /// Tokens are trimmed and lowercased before matching. Anything outside
    /// the enumeration is an `InvalidSelection` error.
    fn parse(token: &str) -> Result<Self, AppError> {
        let normalized = token.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|v| v.as_str() == normalized).ok_or_else(|| {
            AppError::InvalidSelection {
                field: Self::FIELD,
                value: token.to_string(),
                expected: Self::expected(),
            }
        })
    }

    /// Comma-separated list of valid tokens, for error messages and help.
    fn expected() -> String {
        Self::ALL.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(", ")
    }
}

/// Overall face outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceShape {
    Round,
    Oval,
    Square,
    Heart,
    Long,
}

impl Selection for FaceShape {
    const FIELD: &'static str = "face";
    const LABEL: &'static str = "Face shape";
    const ALL: &'static [Self] =
        &[Self::Round, Self::Oval, Self::Square, Self::Heart, Self::Long];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Oval => "oval",
            Self::Square => "square",
            Self::Heart => "heart",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Forehead width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeheadType {
    Wide,
    Narrow,
    Medium,
}

impl Selection for ForeheadType {
    const FIELD: &'static str = "forehead";
    const LABEL: &'static str = "Forehead";
    const ALL: &'static [Self] = &[Self::Wide, Self::Narrow, Self::Medium];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Narrow => "narrow",
            Self::Medium => "medium",
        }
    }
}

impl fmt::Display for ForeheadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cheekbone prominence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheekboneType {
    Wide,
    Low,
    Average,
}

impl Selection for CheekboneType {
    const FIELD: &'static str = "cheekbone";
    const LABEL: &'static str = "Cheekbone";
    const ALL: &'static [Self] = &[Self::Wide, Self::Low, Self::Average];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Low => "low",
            Self::Average => "average",
        }
    }
}

impl fmt::Display for CheekboneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Jawline definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JawType {
    Defined,
    Round,
    Recessed,
}

impl Selection for JawType {
    const FIELD: &'static str = "jaw";
    const LABEL: &'static str = "Jawline";
    const ALL: &'static [Self] = &[Self::Defined, Self::Round, Self::Recessed];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Defined => "defined",
            Self::Round => "round",
            Self::Recessed => "recessed",
        }
    }
}

impl fmt::Display for JawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Neck length. Recorded for the consultation but not consumed by grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeckLength {
    Short,
    Average,
    Long,
}

impl Selection for NeckLength {
    const FIELD: &'static str = "neck-length";
    const LABEL: &'static str = "Neck length";
    const ALL: &'static [Self] = &[Self::Short, Self::Average, Self::Long];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Average => "average",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for NeckLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Neck thickness. Recorded for the consultation but not consumed by grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeckThickness {
    Thin,
    Average,
    Thick,
}

impl Selection for NeckThickness {
    const FIELD: &'static str = "neck-thickness";
    const LABEL: &'static str = "Neck thickness";
    const ALL: &'static [Self] = &[Self::Thin, Self::Average, Self::Thick];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Average => "average",
            Self::Thick => "thick",
        }
    }
}

impl fmt::Display for NeckThickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shoulder line. Recorded for the consultation but not consumed by grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoulderShape {
    Narrow,
    Average,
    Wide,
}

impl Selection for ShoulderShape {
    const FIELD: &'static str = "shoulder";
    const LABEL: &'static str = "Shoulder shape";
    const ALL: &'static [Self] = &[Self::Narrow, Self::Average, Self::Wide];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Average => "average",
            Self::Wide => "wide",
        }
    }
}

impl fmt::Display for ShoulderShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Candidate hairstyle under consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairStyle {
    ShortCut,
    Bob,
    HushCut,
    MediumLayered,
}

impl Selection for HairStyle {
    const FIELD: &'static str = "style";
    const LABEL: &'static str = "Hairstyle";
    const ALL: &'static [Self] = &[Self::ShortCut, Self::Bob, Self::HushCut, Self::MediumLayered];

    fn as_str(&self) -> &'static str {
        match self {
            Self::ShortCut => "short_cut",
            Self::Bob => "bob",
            Self::HushCut => "hush_cut",
            Self::MediumLayered => "medium_layered",
        }
    }
}

impl fmt::Display for HairStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_roundtrip_through_parse() {
        for face in FaceShape::ALL {
            assert_eq!(FaceShape::parse(face.as_str()).unwrap(), *face);
        }
        for style in HairStyle::ALL {
            assert_eq!(HairStyle::parse(style.as_str()).unwrap(), *style);
        }
        for jaw in JawType::ALL {
            assert_eq!(JawType::parse(jaw.as_str()).unwrap(), *jaw);
        }
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert_eq!(FaceShape::parse("  Round ").unwrap(), FaceShape::Round);
        assert_eq!(HairStyle::parse("HUSH_CUT").unwrap(), HairStyle::HushCut);
    }

    #[test]
    fn parse_rejects_unknown_token_naming_field_and_value() {
        let err = ForeheadType::parse("enormous").unwrap_err();
        match err {
            AppError::InvalidSelection { field, value, expected } => {
                assert_eq!(field, "forehead");
                assert_eq!(value, "enormous");
                assert_eq!(expected, "wide, narrow, medium");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serde_tokens_match_cli_tokens() {
        let json = serde_json::to_string(&HairStyle::MediumLayered).unwrap();
        assert_eq!(json, "\"medium_layered\"");
        let back: HairStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HairStyle::MediumLayered);
    }

    #[test]
    fn all_variants_have_nonempty_tokens() {
        for face in FaceShape::ALL {
            assert!(!face.as_str().is_empty());
        }
        for shoulder in ShoulderShape::ALL {
            assert!(!shoulder.as_str().is_empty());
        }
    }
}
