//! Shot settings and the per-call request surface.
//!
//! This module defines:
//! - `ShotSettings`: the category → value record one composition consumes
//! - `ShotRequest`: everything a single call needs (subject, preset,
//!   settings, extras, negative strength, clip skip), loadable from a
//!   YAML shot file
//!
//! Shot files use forward-compatible parsing (unknown fields are ignored,
//! missing fields take defaults), so a file that only says `framing:` and
//! `camera:` is valid.

use crate::catalog::{Category, NONE_VALUE};
use crate::compose::{self, ComposedPrompt};
use crate::error::{Result, ShotwrightError};
use crate::negative::NegativeStrength;
use crate::presets;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The resolved category → value record for one composition call.
///
/// Every field holds either a catalog option or the `"None"` sentinel.
/// Nothing here validates membership; the composer treats unexpected
/// strings as opaque text and degrades gracefully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotSettings {
    #[serde(default = "default_none")]
    pub framing: String,

    #[serde(default = "default_none")]
    pub camera: String,

    #[serde(default = "default_none")]
    pub lens: String,

    #[serde(default = "default_none")]
    pub aperture: String,

    #[serde(default = "default_none")]
    pub lighting: String,

    #[serde(default = "default_none")]
    pub style: String,

    #[serde(default = "default_none")]
    pub film_stock: String,

    #[serde(default = "default_none")]
    pub shutter_speed: String,

    #[serde(default = "default_none")]
    pub color_grading: String,

    #[serde(default = "default_none")]
    pub aspect_ratio: String,
}

fn default_none() -> String {
    NONE_VALUE.to_string()
}

impl Default for ShotSettings {
    fn default() -> Self {
        Self {
            framing: default_none(),
            camera: default_none(),
            lens: default_none(),
            aperture: default_none(),
            lighting: default_none(),
            style: default_none(),
            film_stock: default_none(),
            shutter_speed: default_none(),
            color_grading: default_none(),
            aspect_ratio: default_none(),
        }
    }
}

impl ShotSettings {
    /// Current value for a category (possibly the `"None"` sentinel).
    pub fn value(&self, category: Category) -> &str {
        match category {
            Category::Framing => &self.framing,
            Category::Camera => &self.camera,
            Category::Lens => &self.lens,
            Category::Aperture => &self.aperture,
            Category::Lighting => &self.lighting,
            Category::Style => &self.style,
            Category::FilmStock => &self.film_stock,
            Category::ShutterSpeed => &self.shutter_speed,
            Category::ColorGrading => &self.color_grading,
            Category::AspectRatio => &self.aspect_ratio,
        }
    }

    /// Set the value for a category.
    pub fn set_value(&mut self, category: Category, value: impl Into<String>) {
        let value = value.into();
        match category {
            Category::Framing => self.framing = value,
            Category::Camera => self.camera = value,
            Category::Lens => self.lens = value,
            Category::Aperture => self.aperture = value,
            Category::Lighting => self.lighting = value,
            Category::Style => self.style = value,
            Category::FilmStock => self.film_stock = value,
            Category::ShutterSpeed => self.shutter_speed = value,
            Category::ColorGrading => self.color_grading = value,
            Category::AspectRatio => self.aspect_ratio = value,
        }
    }

    /// The value for a category, filtered through the sentinel.
    ///
    /// Returns `None` when the category holds `"None"`, i.e. when the
    /// dimension should be omitted from prose.
    pub fn selected(&self, category: Category) -> Option<&str> {
        let value = self.value(category);
        (value != NONE_VALUE).then_some(value)
    }
}

/// Everything one composition/encoding call consumes.
///
/// This mirrors the original node's input surface. Defaults are neutral:
/// no preset, every category `"None"`, standard negative strength. Only
/// the subject text keeps the node's placeholder default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotRequest {
    /// Core subject/scene description.
    #[serde(default = "default_base")]
    pub base: String,

    /// Preset name, or `"None (Custom)"` for no preset.
    ///
    /// Applied last, over the category fields, per the resolver rules.
    #[serde(default = "default_preset")]
    pub preset: String,

    /// The ten category selections, flattened to top-level keys.
    #[serde(flatten)]
    pub settings: ShotSettings,

    /// Free-text details appended verbatim as the final clause.
    #[serde(default)]
    pub details: String,

    /// Era year for the `"Est. Year"` marker. 2024 means "present day".
    #[serde(default = "default_year")]
    pub year: i32,

    /// Strength tier for the auto-generated negative prompt.
    #[serde(default)]
    pub negative_strength: NegativeStrength,

    /// Encoder layers to skip (0 = use all layers).
    #[serde(default)]
    pub clip_skip: u32,
}

fn default_base() -> String {
    "A cinematic scene...".to_string()
}

fn default_preset() -> String {
    presets::NO_PRESET.to_string()
}

fn default_year() -> i32 {
    compose::DEFAULT_YEAR
}

impl Default for ShotRequest {
    fn default() -> Self {
        Self {
            base: default_base(),
            preset: default_preset(),
            settings: ShotSettings::default(),
            details: String::new(),
            year: default_year(),
            negative_strength: NegativeStrength::default(),
            clip_skip: 0,
        }
    }
}

impl ShotRequest {
    /// Load a shot request from a YAML file.
    ///
    /// Unknown fields are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ShotwrightError::UserError(format!(
                "failed to read shot file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a shot request from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let request: ShotRequest = serde_yaml::from_str(yaml)
            .map_err(|e| ShotwrightError::UserError(format!("failed to parse shot YAML: {}", e)))?;

        request.validate()?;
        Ok(request)
    }

    /// Serialize the shot request to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ShotwrightError::UserError(format!("failed to serialize shot to YAML: {}", e)))
    }

    /// Validate file-surface ranges.
    ///
    /// The composer itself accepts any year; these bounds mirror the
    /// original input widgets, so a hand-written shot file gets the same
    /// guardrails the UI had.
    pub fn validate(&self) -> Result<()> {
        if !(1800..=2100).contains(&self.year) {
            return Err(ShotwrightError::UserError(format!(
                "shot validation failed: year must be between 1800 and 2100 (found {})",
                self.year
            )));
        }

        if self.clip_skip > 24 {
            return Err(ShotwrightError::UserError(format!(
                "shot validation failed: clip_skip must be at most 24 (found {})",
                self.clip_skip
            )));
        }

        Ok(())
    }

    /// Resolve the preset over the category fields.
    ///
    /// Unknown preset names (and the `"None (Custom)"` sentinel) leave the
    /// settings unchanged.
    pub fn resolve(&self) -> ShotSettings {
        presets::apply(&self.preset, &self.settings)
    }

    /// Resolve and compose in one step.
    pub fn compose(&self) -> ComposedPrompt {
        let resolved = self.resolve();
        compose::compose(
            &self.base,
            &resolved,
            &self.details,
            self.year,
            self.negative_strength,
        )
    }
}
