//! The prompt composer.
//!
//! Builds the positive prompt as an ordered concatenation of optional
//! clauses and derives the companion negative prompt. A clause is emitted
//! only when its underlying value is set (not the `"None"` sentinel);
//! omission never reorders the remaining clauses. Composition is a pure
//! function of its inputs and never fails: unknown values are emitted
//! verbatim, free text is used as-is.

use crate::catalog::Category;
use crate::negative::{self, NegativeStrength};
use crate::shot::ShotSettings;

/// Year treated as "present day". The era marker is omitted for it unless
/// the style text mentions "Vintage" or "Classic".
pub const DEFAULT_YEAR: i32 = 2024;

/// Maximum characters of positive prompt shown in a preview line.
pub const PREVIEW_MAX_CHARS: usize = 300;

/// The two output strings of one composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    /// The assembled cinematic prompt.
    pub positive: String,

    /// The auto-generated negative prompt; empty at strength Off.
    pub negative: String,
}

impl ComposedPrompt {
    /// Single-line preview of the positive prompt.
    ///
    /// Truncated to [`PREVIEW_MAX_CHARS`] characters with a trailing
    /// `"..."` when truncation occurred. Counts characters, not bytes.
    pub fn preview(&self) -> String {
        let mut chars = self.positive.chars();
        let head: String = chars.by_ref().take(PREVIEW_MAX_CHARS).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }
}

/// Compose the positive and negative prompts for one shot.
///
/// Clause order is fixed: subject, technical camera specs, lighting,
/// grading, finish (style / film stock / era marker), aspect ratio,
/// custom details. `settings` must already be preset-resolved; this
/// function applies no overrides of its own.
pub fn compose(
    base: &str,
    settings: &ShotSettings,
    custom_details: &str,
    year: i32,
    negative_strength: NegativeStrength,
) -> ComposedPrompt {
    let mut parts: Vec<String> = Vec::new();

    // The style text feeds the finish clause, the era marker, and the
    // negative vocabulary.
    let style = settings.selected(Category::Style).unwrap_or("");

    // 1. Subject, framed or bare
    if let Some(framing) = settings.selected(Category::Framing) {
        parts.push(format!("{} of {}.", framing, base));
    } else {
        parts.push(format!("{}.", base));
    }

    // 2. Technical camera specs, one clause
    let mut tech: Vec<String> = Vec::new();
    if let Some(camera) = settings.selected(Category::Camera) {
        tech.push(format!("Shot on {}", camera));
    }
    if let Some(lens) = settings.selected(Category::Lens) {
        tech.push(format!("with {}", lens));
    }
    if let Some(aperture) = settings.selected(Category::Aperture) {
        tech.push(format!("at {}", aperture));
    }
    if let Some(shutter) = settings.selected(Category::ShutterSpeed) {
        tech.push(format!("shutter speed {}", shutter));
    }
    if !tech.is_empty() {
        parts.push(format!("{}.", tech.join(" ")));
    }

    // 3. Lighting, then 4. grading, independently
    if let Some(lighting) = settings.selected(Category::Lighting) {
        parts.push(format!("Lighting is {}.", lighting));
    }
    if let Some(grade) = settings.selected(Category::ColorGrading) {
        parts.push(format!("Color graded in {}.", grade));
    }

    // 5. Finish: style, film stock, era marker
    let mut finish: Vec<String> = Vec::new();
    if !style.is_empty() {
        finish.push(style.to_string());
    }
    if let Some(stock) = settings.selected(Category::FilmStock) {
        finish.push(format!("on {}", stock));
    }
    if year != DEFAULT_YEAR || style.contains("Vintage") || style.contains("Classic") {
        // The marker carries its own period and the clause adds another;
        // the doubled period is long-standing output, kept as-is.
        finish.push(format!("Est. Year {}.", year));
    }
    if !finish.is_empty() {
        parts.push(format!("{}.", finish.join(", ")));
    }

    // 6. Aspect ratio token
    if let Some(ratio) = settings.selected(Category::AspectRatio) {
        parts.push(format!("{} format.", ratio));
    }

    // 7. Custom details, verbatim, no added punctuation
    let details = custom_details.trim();
    if !details.is_empty() {
        parts.push(details.to_string());
    }

    let positive = parts.join(" ").trim().to_string();
    let negative = negative::negative_prompt(negative_strength, style);

    ComposedPrompt { positive, negative }
}
