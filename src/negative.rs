//! Auto-generated negative-prompt vocabulary.
//!
//! The negative prompt is tier-cumulative: each strength tier keeps every
//! term of the tier below it and appends more. At Standard and above, one
//! extra exclusion group is chosen from the raw text of the style value by
//! substring matching, first match wins, in a fixed priority order. Terms
//! are appended in rule order and never deduplicated.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength tier for the auto-generated negative prompt.
///
/// Declaration order is tier order; the `Ord` derive relies on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
    ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStrength {
    /// No negative prompt at all.
    Off,
    /// Minimal cleanup terms only.
    Soft,
    /// Cleanup plus anatomy terms and a style-conditional exclusion group.
    #[default]
    Standard,
    /// Everything, plus heavy artifact terms.
    Aggressive,
}

impl fmt::Display for NegativeStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NegativeStrength::Off => "Off",
            NegativeStrength::Soft => "Soft",
            NegativeStrength::Standard => "Standard",
            NegativeStrength::Aggressive => "Aggressive",
        };
        write!(f, "{}", label)
    }
}

/// Minimal cleanup terms, included from Soft upward.
const BASE_TERMS: &[&str] = &["blur", "low quality", "watermark", "text"];

/// Anatomy and duplication terms, included from Standard upward.
const DEFORMITY_TERMS: &[&str] = &["deformed", "ugly", "duplicate", "disfigured", "bad anatomy"];

/// Heavy artifact terms, Aggressive only.
const AGGRESSIVE_TERMS: &[&str] = &[
    "mutated",
    "extra limbs",
    "missing limbs",
    "floating limbs",
    "disconnected limbs",
    "pixelated",
    "noise",
    "grainy",
    "cropped",
    "out of frame",
    "worst quality",
    "lowres",
];

const PHOTOREAL_EXCLUSIONS: &[&str] = &[
    "cartoon",
    "anime",
    "illustration",
    "painting",
    "cgi",
    "3d render",
    "drawing",
    "sketch",
];

const ANIME_EXCLUSIONS: &[&str] =
    &["photograph", "realistic", "photo", "photorealistic", "3d"];

const PAINTING_EXCLUSIONS: &[&str] =
    &["photograph", "realistic", "photo", "digital", "3d render"];

const CGI_EXCLUSIONS: &[&str] = &["photograph", "realistic", "2d", "flat", "hand drawn"];

/// Broad family of a style string, used to pick the exclusion group.
///
/// This is an internal tag over the substring rules; the observable
/// behavior is the rules themselves, including their priority order and
/// the silent no-match case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StyleFamily {
    Photoreal,
    Anime,
    Painting,
    Cgi,
}

impl StyleFamily {
    fn exclusions(self) -> &'static [&'static str] {
        match self {
            StyleFamily::Photoreal => PHOTOREAL_EXCLUSIONS,
            StyleFamily::Anime => ANIME_EXCLUSIONS,
            StyleFamily::Painting => PAINTING_EXCLUSIONS,
            StyleFamily::Cgi => CGI_EXCLUSIONS,
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Classify a style string by case-sensitive substring, first match wins.
fn classify_style(style: &str) -> Option<StyleFamily> {
    if contains_any(style, &["Photorealistic", "Cinematic", "Documentary"]) {
        Some(StyleFamily::Photoreal)
    } else if style.contains("Anime") {
        Some(StyleFamily::Anime)
    } else if contains_any(style, &["Painting", "Oil"]) {
        Some(StyleFamily::Painting)
    } else if contains_any(style, &["CGI", "Unreal", "3D"]) {
        Some(StyleFamily::Cgi)
    } else {
        None
    }
}

/// Accumulate the negative terms for a strength tier and style string.
///
/// `style` is the resolved style value; the `"None"` sentinel and the
/// empty string both simply match no exclusion group.
pub fn negative_terms(strength: NegativeStrength, style: &str) -> Vec<&'static str> {
    let mut terms = Vec::new();

    if strength == NegativeStrength::Off {
        return terms;
    }

    terms.extend_from_slice(BASE_TERMS);

    if strength >= NegativeStrength::Standard {
        terms.extend_from_slice(DEFORMITY_TERMS);

        if let Some(family) = classify_style(style) {
            terms.extend_from_slice(family.exclusions());
        }
    }

    if strength == NegativeStrength::Aggressive {
        terms.extend_from_slice(AGGRESSIVE_TERMS);
    }

    terms
}

/// The joined negative prompt for a strength tier and style string.
pub fn negative_prompt(strength: NegativeStrength, style: &str) -> String {
    negative_terms(strength, style).join(", ")
}
