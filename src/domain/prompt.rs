//! Image-prompt composition.
//!
//! Two independent phrase tables map the face-shape and hairstyle tokens to
//! English descriptive phrases, which are substituted into one fixed template.
//! Lookup is deliberately permissive: an unrecognized token falls back to a
//! neutral phrase so prompt generation never aborts the consultation flow.

use super::selection::{FaceShape, HairStyle, Selection};

/// Fallback phrase for an unrecognized face-shape token.
pub const NEUTRAL_FACE_PHRASE: &str = "neutral face shape";

/// Fallback phrase for an unrecognized hairstyle token.
pub const NEUTRAL_STYLE_PHRASE: &str = "hairstyle";

/// Descriptive phrase for a raw face-shape token.
pub fn face_phrase(token: &str) -> &'static str {
    match token {
        "round" => "round face shape",
        "oval" => "oval face shape",
        "square" => "square face shape",
        "heart" => "heart-shaped face",
        "long" => "long face shape",
        _ => NEUTRAL_FACE_PHRASE,
    }
}

/// Descriptive phrase for a raw hairstyle token.
pub fn style_phrase(token: &str) -> &'static str {
    match token {
        "short_cut" => "short haircut",
        "bob" => "bob haircut",
        "hush_cut" => "hush cut hairstyle",
        "medium_layered" => "medium layered hairstyle",
        _ => NEUTRAL_STYLE_PHRASE,
    }
}

/// Compose the image-generation prompt for a face shape and hairstyle.
pub fn compose(face: FaceShape, style: HairStyle) -> String {
    compose_tokens(face.as_str(), style.as_str())
}

/// Compose the prompt from raw tokens. Total over all inputs: unrecognized
/// tokens use the fallback phrases.
pub fn compose_tokens(face: &str, style: &str) -> String {
    format!(
        "A digital illustration of a Korean woman with a {} and a {}. \
         She is facing front with soft lighting and a neutral background. \
         The hairstyle frames her face gently, creating a calm and balanced impression. \
         Modern, natural, beauty consultation style.",
        face_phrase(face),
        style_phrase(style)
    )
}
