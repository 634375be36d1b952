//! Random look generation.
//!
//! Ported from the original UI helper: most of the time a random look is
//! one canned preset applied whole, so the result stays cohesive; the
//! rest of the time every category gets an independent uniform pick. The
//! sentinel is never picked. Deterministic under a seeded RNG.

use crate::catalog::Category;
use crate::presets::{self, Preset};
use crate::shot::ShotSettings;
use rand::Rng;

/// Probability that a random look uses one canned preset instead of
/// independent per-category picks.
pub const PRESET_BIAS: f64 = 0.7;

/// A generated look: the settings plus the preset they came from, if any.
#[derive(Debug, Clone)]
pub struct RandomLook {
    pub settings: ShotSettings,
    pub preset: Option<&'static Preset>,
}

/// Generate a random look.
///
/// With probability [`PRESET_BIAS`], picks one preset uniformly at random
/// and applies it to neutral settings. Otherwise picks, for every category
/// independently, one non-sentinel option uniformly at random.
pub fn random_look<R: Rng>(rng: &mut R) -> RandomLook {
    if rng.gen_bool(PRESET_BIAS) {
        let preset = &presets::PRESETS[rng.gen_range(0..presets::PRESETS.len())];
        let settings = presets::apply(preset.name, &ShotSettings::default());
        return RandomLook {
            settings,
            preset: Some(preset),
        };
    }

    let mut settings = ShotSettings::default();
    for category in Category::ALL {
        let options = category.options();
        // index 0 is the sentinel
        let index = rng.gen_range(1..options.len());
        settings.set_value(category, options[index]);
    }

    RandomLook {
        settings,
        preset: None,
    }
}
