//! Named look presets and the preset resolver.
//!
//! A preset is a partial settings record: a bundle of category overrides
//! that produces a canned visual look in one step. Applying a preset is a
//! right-biased shallow merge (the preset wins on every key it mentions,
//! untouched keys keep their current value). The `"None (Custom)"` sentinel
//! and any unrecognized name resolve as the identity, never as an error,
//! because preset names travel through user-editable surfaces.
//!
//! Preset values are validated against the catalog once, by a test over the
//! whole table, not at call time.

use crate::catalog::Category;
use crate::shot::ShotSettings;

/// Preset-selector sentinel meaning "no preset, keep my settings".
pub const NO_PRESET: &str = "None (Custom)";

/// A named bundle of category overrides.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Display name, emoji tag included.
    pub name: &'static str,

    /// Category overrides, in display order.
    pub overrides: &'static [(Category, &'static str)],
}

/// All presets, in display order.
///
/// Note that overrides to `"None"` are meaningful: a preset that maps a
/// category to the sentinel actively clears it (e.g. Documentary removes
/// any film stock). Only the Action look sets a shutter speed; every other
/// preset leaves shutter speed alone.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "🎬 Classic Hollywood",
        overrides: &[
            (Category::Framing, "Medium Shot (MS)"),
            (Category::Camera, "Panavision Panaflex Gold II (35mm)"),
            (Category::Lens, "50mm Standard Prime"),
            (Category::Aperture, "f/2.8 (Cinematic Separation)"),
            (Category::Lighting, "Paramount Lighting"),
            (Category::Style, "Cinematic Movie Still"),
            (Category::FilmStock, "Kodak Vision3 500T"),
            (Category::ColorGrading, "Technicolor (Vintage)"),
            (Category::AspectRatio, "2.39:1 (Anamorphic Scope)"),
        ],
    },
    Preset {
        name: "🌃 Film Noir",
        overrides: &[
            (Category::Framing, "Low Angle (Hero Shot)"),
            (Category::Camera, "ARRI Alexa 35"),
            (Category::Lens, "35mm Classic Wide"),
            (Category::Aperture, "f/2.8 (Cinematic Separation)"),
            (Category::Lighting, "Film Noir Lighting"),
            (Category::Style, "Monochrome Noir"),
            (Category::FilmStock, "Kodak Tri-X 400 (B&W)"),
            (Category::ColorGrading, "Bleach Bypass (Gritty)"),
            (Category::AspectRatio, "2.39:1 (Anamorphic Scope)"),
        ],
    },
    Preset {
        name: "🚀 Sci-Fi Cinematic",
        overrides: &[
            (Category::Framing, "Extreme Wide Shot (EWS)"),
            (Category::Camera, "ARRI Alexa 65 (IMAX)"),
            (Category::Lens, "ARRI Master Anamorphic"),
            (Category::Aperture, "f/4.0 (Balanced)"),
            (Category::Lighting, "Cinematic Haze / Volumetric Fog"),
            (Category::Style, "Blade Runner Atmosphere"),
            (Category::FilmStock, "None"),
            (Category::ColorGrading, "Teal and Orange (Blockbuster)"),
            (Category::AspectRatio, "2.39:1 (Anamorphic Scope)"),
        ],
    },
    Preset {
        name: "🌆 Cyberpunk",
        overrides: &[
            (Category::Framing, "Dutch Angle (Canted)"),
            (Category::Camera, "Sony Venice 2"),
            (Category::Lens, "Anamorphic Lens"),
            (Category::Aperture, "f/1.8 (Soft Background)"),
            (Category::Lighting, "Neon Cyberpunk Lighting"),
            (Category::Style, "Cyberpunk 2077 Aesthetic"),
            (Category::FilmStock, "Cinestill 800T"),
            (Category::ColorGrading, "Cyberpunk Neon Grading"),
            (Category::AspectRatio, "21:9 (Ultrawide)"),
        ],
    },
    Preset {
        name: "🎭 Drama / Emotional",
        overrides: &[
            (Category::Framing, "Close-Up (CU)"),
            (Category::Camera, "ARRI Alexa Mini LF"),
            (Category::Lens, "85mm Portrait Prime"),
            (Category::Aperture, "f/1.2 (Dreamy Bokeh)"),
            (Category::Lighting, "Rembrandt Lighting"),
            (Category::Style, "Cinematic Movie Still"),
            (Category::FilmStock, "Kodak Portra 400"),
            (Category::ColorGrading, "Desaturated (Muted)"),
            (Category::AspectRatio, "2.39:1 (Anamorphic Scope)"),
        ],
    },
    Preset {
        name: "🏔️ Epic Landscape",
        overrides: &[
            (Category::Framing, "Extreme Wide Shot (EWS)"),
            (Category::Camera, "ARRI Alexa 65 (IMAX)"),
            (Category::Lens, "14mm Ultra-Wide Angle"),
            (Category::Aperture, "f/11 (Landscape Sharpness)"),
            (Category::Lighting, "Golden Hour (Magic Hour)"),
            (Category::Style, "National Geographic Style"),
            (Category::FilmStock, "Fujifilm Velvia 50"),
            (Category::ColorGrading, "Vibrant High Contrast"),
            (Category::AspectRatio, "21:9 (Ultrawide)"),
        ],
    },
    Preset {
        name: "👤 Portrait Pro",
        overrides: &[
            (Category::Framing, "Medium Close-Up (MCU)"),
            (Category::Camera, "Sony A7S III"),
            (Category::Lens, "85mm Portrait Prime"),
            (Category::Aperture, "f/1.2 (Dreamy Bokeh)"),
            (Category::Lighting, "Soft Window Light"),
            (Category::Style, "Editorial Photography"),
            (Category::FilmStock, "Kodak Portra 400"),
            (Category::ColorGrading, "Pastel Soft Tones"),
            (Category::AspectRatio, "4:3 (Academy Ratio)"),
        ],
    },
    Preset {
        name: "📰 Documentary",
        overrides: &[
            (Category::Framing, "Medium Shot (MS)"),
            (Category::Camera, "Canon C700 FF"),
            (Category::Lens, "35mm Classic Wide"),
            (Category::Aperture, "f/4.0 (Balanced)"),
            (Category::Lighting, "Practical Lighting"),
            (Category::Style, "Documentary Texture"),
            (Category::FilmStock, "None"),
            (Category::ColorGrading, "Desaturated (Muted)"),
            (Category::AspectRatio, "16:9 (Widescreen)"),
        ],
    },
    Preset {
        name: "🎨 Artistic / Painterly",
        overrides: &[
            (Category::Framing, "Medium Shot (MS)"),
            (Category::Camera, "None"),
            (Category::Lens, "Petzval 85mm (Classic Swirl)"),
            (Category::Aperture, "f/1.8 (Soft Background)"),
            (Category::Lighting, "Soft Window Light"),
            (Category::Style, "Oil Painting (Classic)"),
            (Category::FilmStock, "None"),
            (Category::ColorGrading, "Pastel Soft Tones"),
            (Category::AspectRatio, "4:3 (Academy Ratio)"),
        ],
    },
    Preset {
        name: "📼 Retro VHS",
        overrides: &[
            (Category::Framing, "Medium Shot (MS)"),
            (Category::Camera, "Super 8mm Camera"),
            (Category::Lens, "50mm Standard Prime"),
            (Category::Aperture, "f/4.0 (Balanced)"),
            (Category::Lighting, "Practical Lighting"),
            (Category::Style, "Vintage 1990s VHS"),
            (Category::FilmStock, "Polaroid 600"),
            (Category::ColorGrading, "Cross Processed"),
            (Category::AspectRatio, "4:3 (Academy Ratio)"),
        ],
    },
    Preset {
        name: "🌅 Golden Hour Magic",
        overrides: &[
            (Category::Framing, "Full Body Shot (Wide)"),
            (Category::Camera, "Sony Venice 2"),
            (Category::Lens, "85mm Portrait Prime"),
            (Category::Aperture, "f/1.8 (Soft Background)"),
            (Category::Lighting, "Golden Hour (Magic Hour)"),
            (Category::Style, "Photorealistic (Raw)"),
            (Category::FilmStock, "Kodak Ektar 100"),
            (Category::ColorGrading, "Vibrant High Contrast"),
            (Category::AspectRatio, "16:9 (Widescreen)"),
        ],
    },
    Preset {
        name: "🌙 Moody Night",
        overrides: &[
            (Category::Framing, "Medium Shot (MS)"),
            (Category::Camera, "Sony A7S III"),
            (Category::Lens, "35mm Classic Wide"),
            (Category::Aperture, "f/1.2 (Dreamy Bokeh)"),
            (Category::Lighting, "Moonlight"),
            (Category::Style, "Cinematic Movie Still"),
            (Category::FilmStock, "Cinestill 800T"),
            (Category::ColorGrading, "Teal and Orange (Blockbuster)"),
            (Category::AspectRatio, "2.39:1 (Anamorphic Scope)"),
        ],
    },
    Preset {
        name: "⚡ Action / Dynamic",
        overrides: &[
            (Category::Framing, "Low Angle (Hero Shot)"),
            (Category::Camera, "RED V-Raptor XL"),
            (Category::Lens, "24mm Wide Angle"),
            (Category::Aperture, "f/5.6 (Sharp Subject)"),
            (Category::Lighting, "Harsh Sunlight"),
            (Category::Style, "Hyper-Realism"),
            (Category::FilmStock, "None"),
            (Category::ShutterSpeed, "1/1000th sec (Frozen Action)"),
            (Category::ColorGrading, "Teal and Orange (Blockbuster)"),
            (Category::AspectRatio, "2.39:1 (Anamorphic Scope)"),
        ],
    },
    Preset {
        name: "🎪 Wes Anderson",
        overrides: &[
            (Category::Framing, "Symmetrical Composition"),
            (Category::Camera, "ARRI Alexa 35"),
            (Category::Lens, "35mm Classic Wide"),
            (Category::Aperture, "f/8.0 (Deep Focus)"),
            (Category::Lighting, "Soft Window Light"),
            (Category::Style, "Wes Anderson Symmetric"),
            (Category::FilmStock, "Kodak Portra 400"),
            (Category::ColorGrading, "Pastel Soft Tones"),
            (Category::AspectRatio, "2.39:1 (Anamorphic Scope)"),
        ],
    },
    Preset {
        name: "🎞️ 1970s New Hollywood",
        overrides: &[
            (Category::Framing, "Medium Shot (MS)"),
            (Category::Camera, "Panavision Panaflex Gold II (35mm)"),
            (Category::Lens, "35mm Classic Wide"),
            (Category::Aperture, "f/2.8 (Cinematic Separation)"),
            (Category::Lighting, "Practical Lighting"),
            (Category::Style, "Cinematic Movie Still"),
            (Category::FilmStock, "Kodak Vision3 500T"),
            (Category::ColorGrading, "Technicolor (Vintage)"),
            (Category::AspectRatio, "2.39:1 (Anamorphic Scope)"),
        ],
    },
    Preset {
        name: "📼 1980s Retro Action",
        overrides: &[
            (Category::Framing, "Low Angle (Hero Shot)"),
            (Category::Camera, "ARRI Alexa 35"),
            (Category::Lens, "Anamorphic Lens"),
            (Category::Aperture, "f/4.0 (Balanced)"),
            (Category::Lighting, "Cinematic Haze / Volumetric Fog"),
            (Category::Style, "Hyper-Realism"),
            (Category::FilmStock, "None"),
            (Category::ColorGrading, "Teal and Orange (Blockbuster)"),
            (Category::AspectRatio, "2.39:1 (Anamorphic Scope)"),
        ],
    },
    Preset {
        name: "📺 1990s Music Video",
        overrides: &[
            (Category::Framing, "Extreme Close-Up (ECU)"),
            (Category::Camera, "Super 8mm Camera"),
            (Category::Lens, "Fish-Eye Lens"),
            (Category::Aperture, "f/1.8 (Soft Background)"),
            (Category::Lighting, "Neon Cyberpunk Lighting"),
            (Category::Style, "Vintage 1990s VHS"),
            (Category::FilmStock, "Polaroid 600"),
            (Category::ColorGrading, "Cross Processed"),
            (Category::AspectRatio, "4:3 (Academy Ratio)"),
        ],
    },
    Preset {
        name: "📹 2000s Digital Look",
        overrides: &[
            (Category::Framing, "Medium Shot (MS)"),
            (Category::Camera, "Sony A7S III"),
            (Category::Lens, "24mm Wide Angle"),
            (Category::Aperture, "f/5.6 (Sharp Subject)"),
            (Category::Lighting, "Harsh Sunlight"),
            (Category::Style, "Editorial Photography"),
            (Category::FilmStock, "None"),
            (Category::ColorGrading, "Vibrant High Contrast"),
            (Category::AspectRatio, "16:9 (Widescreen)"),
        ],
    },
];

impl Preset {
    /// True when every override of this preset already holds in `settings`.
    ///
    /// Used to label a settings record with the canned look it matches,
    /// and to detect when a manual edit has drifted away from one.
    pub fn matches(&self, settings: &ShotSettings) -> bool {
        self.overrides
            .iter()
            .all(|&(category, value)| settings.value(category) == value)
    }
}

/// Find a preset by its exact display name.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// All preset names, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}

/// Apply a preset to a settings record.
///
/// Returns a new record with every category mentioned by the preset
/// replaced by the preset's value; unmentioned categories keep their
/// current value. The `"None (Custom)"` sentinel and unrecognized names
/// return the input unchanged.
pub fn apply(preset_name: &str, current: &ShotSettings) -> ShotSettings {
    let Some(preset) = find(preset_name) else {
        return current.clone();
    };

    let mut updated = current.clone();
    for &(category, value) in preset.overrides {
        updated.set_value(category, value);
    }
    updated
}

/// First preset, in display order, fully satisfied by `settings`.
pub fn matching_preset(settings: &ShotSettings) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.matches(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, NONE_VALUE};

    #[test]
    fn test_every_preset_value_is_a_catalog_option() {
        for preset in PRESETS {
            for &(category, value) in preset.overrides {
                assert!(
                    catalog::is_option(category, value),
                    "preset '{}' references '{}' which is not in '{}'",
                    preset.name,
                    value,
                    category.key()
                );
            }
        }
    }

    #[test]
    fn test_preset_names_are_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_only_the_action_preset_sets_shutter_speed() {
        for preset in PRESETS {
            let sets_shutter = preset
                .overrides
                .iter()
                .any(|&(category, _)| category == Category::ShutterSpeed);
            assert_eq!(
                sets_shutter,
                preset.name == "⚡ Action / Dynamic",
                "preset '{}'",
                preset.name
            );
        }
    }

    #[test]
    fn test_no_preset_sentinel_is_not_a_preset() {
        assert!(find(NO_PRESET).is_none());
    }

    #[test]
    fn test_find_is_exact() {
        assert!(find("🌃 Film Noir").is_some());
        assert!(find("Film Noir").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_names_in_display_order() {
        let names: Vec<_> = names().collect();
        assert_eq!(names[0], "🎬 Classic Hollywood");
        assert_eq!(names[1], "🌃 Film Noir");
        assert_eq!(names.len(), PRESETS.len());
    }

    #[test]
    fn test_apply_unknown_name_is_identity() {
        let mut settings = ShotSettings::default();
        settings.set_value(Category::Camera, "ARRI Alexa 35");

        let resolved = apply("Nonexistent Look", &settings);
        assert_eq!(resolved, settings);
    }

    #[test]
    fn test_apply_no_preset_sentinel_is_identity() {
        let mut settings = ShotSettings::default();
        settings.set_value(Category::Lighting, "Moonlight");

        let resolved = apply(NO_PRESET, &settings);
        assert_eq!(resolved, settings);
    }

    #[test]
    fn test_apply_overrides_mentioned_keys_only() {
        let mut settings = ShotSettings::default();
        settings.set_value(Category::ColorGrading, "Sepia Tone");
        settings.set_value(Category::ShutterSpeed, "Long Exposure (Light Trails)");

        let resolved = apply("🌃 Film Noir", &settings);

        // Mentioned key is forced regardless of prior value
        assert_eq!(resolved.value(Category::ColorGrading), "Bleach Bypass (Gritty)");
        // Film Noir says nothing about shutter speed, so it survives
        assert_eq!(
            resolved.value(Category::ShutterSpeed),
            "Long Exposure (Light Trails)"
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut settings = ShotSettings::default();
        settings.set_value(Category::Camera, "GoPro Hero 12");

        let once = apply("🌆 Cyberpunk", &settings);
        let twice = apply("🌆 Cyberpunk", &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_can_clear_a_category() {
        let mut settings = ShotSettings::default();
        settings.set_value(Category::FilmStock, "Kodak Portra 400");

        // Documentary maps film stock to the sentinel on purpose
        let resolved = apply("📰 Documentary", &settings);
        assert_eq!(resolved.value(Category::FilmStock), NONE_VALUE);
    }

    #[test]
    fn test_matches_after_apply() {
        let preset = find("🎪 Wes Anderson").unwrap();
        let resolved = apply(preset.name, &ShotSettings::default());
        assert!(preset.matches(&resolved));
    }

    #[test]
    fn test_matches_detects_drift() {
        let preset = find("🎪 Wes Anderson").unwrap();
        let mut resolved = apply(preset.name, &ShotSettings::default());
        resolved.set_value(Category::Camera, "GoPro Hero 12");
        assert!(!preset.matches(&resolved));
    }

    #[test]
    fn test_matching_preset_finds_applied_look() {
        let resolved = apply("🌙 Moody Night", &ShotSettings::default());
        let matched = matching_preset(&resolved).unwrap();
        assert_eq!(matched.name, "🌙 Moody Night");
    }

    #[test]
    fn test_matching_preset_none_for_neutral_settings() {
        // Every preset pins at least one non-sentinel value, so the
        // all-None record matches nothing.
        assert!(matching_preset(&ShotSettings::default()).is_none());
    }
}
