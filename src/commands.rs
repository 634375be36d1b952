//! Command implementations for shotwright.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Output assembly is split into `render_*` helpers that
//! return strings, so the printed shapes are testable without capturing
//! stdout.

use crate::catalog::Category;
use crate::cli::{Command, ComposeArgs, OptionsArgs, PresetsArgs, RandomArgs};
use crate::compose::ComposedPrompt;
use crate::error::{Result, ShotwrightError};
use crate::presets::{self, Preset};
use crate::random::{random_look, RandomLook};
use crate::shot::{ShotRequest, ShotSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Compose(args) => cmd_compose(args),
        Command::Presets(args) => cmd_presets(args),
        Command::Options(args) => cmd_options(args),
        Command::Random(args) => cmd_random(args),
    }
}

// ============================================================================
// compose
// ============================================================================

fn cmd_compose(args: ComposeArgs) -> Result<()> {
    let request = build_request(&args)?;
    let prompt = request.compose();

    if args.json {
        return print_json(&json!({
            "positive": prompt.positive,
            "negative": prompt.negative,
        }));
    }

    if args.preview {
        println!("{}", prompt.preview());
        return Ok(());
    }

    print!("{}", render_prompt(&prompt));
    Ok(())
}

/// Build the effective request for one compose invocation.
///
/// Precedence, lowest to highest: shot file (or defaults when no file),
/// explicit category/field flags, then the preset name. The preset is
/// applied at compose time and wins over every category it mentions.
fn build_request(args: &ComposeArgs) -> Result<ShotRequest> {
    let mut request = match &args.shot {
        Some(path) => ShotRequest::load(path)?,
        None => ShotRequest::default(),
    };

    if let Some(base) = &args.base {
        request.base = base.clone();
    }
    if let Some(details) = &args.details {
        request.details = details.clone();
    }
    if let Some(year) = args.year {
        request.year = year;
    }
    if let Some(strength) = args.negative_strength {
        request.negative_strength = strength;
    }

    let overrides = [
        (Category::Framing, &args.framing),
        (Category::Camera, &args.camera),
        (Category::Lens, &args.lens),
        (Category::Aperture, &args.aperture),
        (Category::Lighting, &args.lighting),
        (Category::Style, &args.style),
        (Category::FilmStock, &args.film_stock),
        (Category::ShutterSpeed, &args.shutter_speed),
        (Category::ColorGrading, &args.color_grading),
        (Category::AspectRatio, &args.aspect_ratio),
    ];
    for (category, value) in overrides {
        if let Some(value) = value {
            request.settings.set_value(category, value.clone());
        }
    }

    if let Some(preset) = &args.preset {
        request.preset = preset.clone();
    }

    Ok(request)
}

fn render_prompt(prompt: &ComposedPrompt) -> String {
    let mut out = String::new();
    out.push_str("Positive:\n");
    out.push_str(&format!("  {}\n", prompt.positive));
    out.push('\n');
    out.push_str("Negative:\n");
    if prompt.negative.is_empty() {
        out.push_str("  (empty)\n");
    } else {
        out.push_str(&format!("  {}\n", prompt.negative));
    }
    out
}

// ============================================================================
// presets
// ============================================================================

fn cmd_presets(args: PresetsArgs) -> Result<()> {
    match &args.name {
        Some(name) => {
            let preset = presets::find(name).ok_or_else(|| {
                ShotwrightError::UserError(format!(
                    "unknown preset '{}'. Run `shotwright presets` to list available presets.",
                    name
                ))
            })?;

            if args.json {
                print_json(&preset_json(preset))?;
            } else {
                print!("{}", render_preset(preset));
            }
        }
        None => {
            if args.json {
                let names: Vec<&str> = presets::names().collect();
                print_json(&json!(names))?;
            } else {
                print!("{}", render_preset_list());
            }
        }
    }
    Ok(())
}

fn render_preset_list() -> String {
    let mut out = String::new();
    out.push_str(&format!("Presets ({}):\n", presets::PRESETS.len()));
    for name in presets::names() {
        out.push_str(&format!("  {}\n", name));
    }
    out.push('\n');
    out.push_str("Use `shotwright compose --preset NAME` to apply one.\n");
    out
}

fn render_preset(preset: &Preset) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", preset.name));
    for &(category, value) in preset.overrides {
        out.push_str(&format!(
            "  {:<15}{}\n",
            format!("{}:", category.key()),
            value
        ));
    }
    out
}

fn preset_json(preset: &Preset) -> serde_json::Value {
    let mut overrides = serde_json::Map::new();
    for &(category, value) in preset.overrides {
        overrides.insert(category.key().to_string(), json!(value));
    }
    json!({
        "name": preset.name,
        "overrides": overrides,
    })
}

// ============================================================================
// options
// ============================================================================

fn cmd_options(args: OptionsArgs) -> Result<()> {
    match &args.category {
        Some(key) => {
            let category = Category::from_key(key).ok_or_else(|| {
                ShotwrightError::UserError(format!(
                    "unknown category '{}'. Run `shotwright options` to list categories.",
                    key
                ))
            })?;

            if args.json {
                print_json(&json!(category.options()))?;
            } else {
                print!("{}", render_options(category));
            }
        }
        None => {
            if args.json {
                let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
                print_json(&json!(keys))?;
            } else {
                print!("{}", render_category_list());
            }
        }
    }
    Ok(())
}

fn render_category_list() -> String {
    let mut out = String::new();
    out.push_str("Categories:\n");
    for category in Category::ALL {
        out.push_str(&format!(
            "  {:<15}{:>3} options\n",
            category.key(),
            category.options().len()
        ));
    }
    out.push('\n');
    out.push_str("Use `shotwright options CATEGORY` to list its values.\n");
    out
}

fn render_options(category: Category) -> String {
    let options = category.options();
    let mut out = String::new();
    out.push_str(&format!("{} ({} options):\n", category.key(), options.len()));
    for option in options {
        out.push_str(&format!("  {}\n", option));
    }
    out
}

// ============================================================================
// random
// ============================================================================

fn cmd_random(args: RandomArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let RandomLook { settings, preset } = random_look(&mut rng);

    let mut request = ShotRequest::default();
    request.base = args.base;
    request.settings = settings;
    request.negative_strength = args.negative_strength;

    // Mixed rolls that happen to land exactly on a canned look get its
    // label too.
    let label = preset
        .map(|p| p.name)
        .or_else(|| presets::matching_preset(&request.settings).map(|p| p.name));

    let prompt = request.compose();

    if args.json {
        return print_json(&json!({
            "seed": seed,
            "preset": label,
            "settings": &request.settings,
            "positive": prompt.positive,
            "negative": prompt.negative,
        }));
    }

    print!("{}", render_random(seed, label, &request.settings, &prompt));
    Ok(())
}

fn render_random(
    seed: u64,
    label: Option<&str>,
    settings: &ShotSettings,
    prompt: &ComposedPrompt,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Seed:  {}\n", seed));
    out.push_str(&format!("Look:  {}\n", label.unwrap_or("mixed")));
    out.push('\n');
    out.push_str(&render_settings(settings));
    out.push('\n');
    out.push_str(&render_prompt(prompt));
    out.push('\n');
    out.push_str(&format!(
        "Re-run with `shotwright random --seed {}` to reproduce.\n",
        seed
    ));
    out
}

fn render_settings(settings: &ShotSettings) -> String {
    let mut out = String::new();
    out.push_str("Settings:\n");
    for category in Category::ALL {
        if let Some(value) = settings.selected(category) {
            out.push_str(&format!(
                "  {:<15}{}\n",
                format!("{}:", category.key()),
                value
            ));
        }
    }
    out
}

// ============================================================================
// shared helpers
// ============================================================================

fn print_json(value: &serde_json::Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| ShotwrightError::UserError(format!("failed to render JSON output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::negative::NegativeStrength;
    use std::io::Write;
    use std::path::PathBuf;

    fn compose_args() -> ComposeArgs {
        ComposeArgs {
            base: None,
            shot: None,
            preset: None,
            framing: None,
            camera: None,
            lens: None,
            aperture: None,
            lighting: None,
            style: None,
            film_stock: None,
            shutter_speed: None,
            color_grading: None,
            aspect_ratio: None,
            details: None,
            year: None,
            negative_strength: None,
            preview: false,
            json: false,
        }
    }

    #[test]
    fn build_request_defaults_without_file() {
        let request = build_request(&compose_args()).unwrap();
        assert_eq!(request, ShotRequest::default());
    }

    #[test]
    fn build_request_applies_field_flags() {
        let mut args = compose_args();
        args.base = Some("a lone astronaut".to_string());
        args.camera = Some("ARRI Alexa 35".to_string());
        args.year = Some(1948);
        args.negative_strength = Some(NegativeStrength::Aggressive);

        let request = build_request(&args).unwrap();
        assert_eq!(request.base, "a lone astronaut");
        assert_eq!(request.settings.camera, "ARRI Alexa 35");
        assert_eq!(request.year, 1948);
        assert_eq!(request.negative_strength, NegativeStrength::Aggressive);
    }

    #[test]
    fn build_request_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base: from the file").unwrap();
        writeln!(file, "framing: Full Body Shot (Wide)").unwrap();
        writeln!(file, "lighting: Moonlight").unwrap();

        let mut args = compose_args();
        args.shot = Some(file.path().to_path_buf());
        args.framing = Some("Close-Up (CU)".to_string());

        let request = build_request(&args).unwrap();
        // Flag wins over the file; untouched file fields survive
        assert_eq!(request.settings.framing, "Close-Up (CU)");
        assert_eq!(request.base, "from the file");
        assert_eq!(request.settings.lighting, "Moonlight");
    }

    #[test]
    fn build_request_preset_wins_over_category_flags() {
        let mut args = compose_args();
        args.color_grading = Some("Sepia Tone".to_string());
        args.preset = Some("🌃 Film Noir".to_string());

        let request = build_request(&args).unwrap();
        let resolved = request.resolve();
        assert_eq!(resolved.color_grading, "Bleach Bypass (Gritty)");
    }

    #[test]
    fn build_request_missing_shot_file_is_user_error() {
        let mut args = compose_args();
        args.shot = Some(PathBuf::from("/nonexistent/path/shot.yaml"));

        let result = build_request(&args);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn compose_with_unknown_preset_still_succeeds() {
        // Unknown preset names resolve as the identity, not an error
        let mut args = compose_args();
        args.preset = Some("Totally Made Up".to_string());

        let result = cmd_compose(args);
        assert!(result.is_ok());
    }

    #[test]
    fn presets_unknown_name_is_user_error() {
        let args = PresetsArgs {
            name: Some("Totally Made Up".to_string()),
            json: false,
        };

        let result = cmd_presets(args);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("unknown preset"));
    }

    #[test]
    fn presets_list_succeeds() {
        let args = PresetsArgs {
            name: None,
            json: false,
        };
        assert!(cmd_presets(args).is_ok());
    }

    #[test]
    fn options_unknown_category_is_user_error() {
        let args = OptionsArgs {
            category: Some("nonsense".to_string()),
            json: false,
        };

        let result = cmd_options(args);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("unknown category"));
    }

    #[test]
    fn options_accepts_hyphenated_category_key() {
        let args = OptionsArgs {
            category: Some("film-stock".to_string()),
            json: false,
        };
        assert!(cmd_options(args).is_ok());
    }

    #[test]
    fn random_with_seed_succeeds() {
        let args = RandomArgs {
            seed: Some(7),
            base: "a test subject".to_string(),
            negative_strength: NegativeStrength::Standard,
            json: false,
        };
        assert!(cmd_random(args).is_ok());
    }

    #[test]
    fn random_json_with_seed_succeeds() {
        let args = RandomArgs {
            seed: Some(7),
            base: "a test subject".to_string(),
            negative_strength: NegativeStrength::Off,
            json: true,
        };
        assert!(cmd_random(args).is_ok());
    }

    #[test]
    fn render_prompt_labels_both_strings() {
        let prompt = ComposedPrompt {
            positive: "a harbor.".to_string(),
            negative: "blur, low quality".to_string(),
        };

        let rendered = render_prompt(&prompt);
        assert!(rendered.contains("Positive:\n  a harbor.\n"));
        assert!(rendered.contains("Negative:\n  blur, low quality\n"));
    }

    #[test]
    fn render_prompt_marks_empty_negative() {
        let prompt = ComposedPrompt {
            positive: "a harbor.".to_string(),
            negative: String::new(),
        };

        let rendered = render_prompt(&prompt);
        assert!(rendered.contains("Negative:\n  (empty)\n"));
    }

    #[test]
    fn render_preset_list_names_every_preset() {
        let rendered = render_preset_list();
        for name in presets::names() {
            assert!(rendered.contains(name), "missing preset: {}", name);
        }
    }

    #[test]
    fn render_preset_shows_override_lines() {
        let preset = presets::find("🌃 Film Noir").unwrap();
        let rendered = render_preset(preset);

        assert!(rendered.starts_with("🌃 Film Noir\n"));
        assert!(rendered.contains("Bleach Bypass (Gritty)"));
        assert!(rendered.contains("color_grading:"));
    }

    #[test]
    fn preset_json_carries_name_and_overrides() {
        let preset = presets::find("🌃 Film Noir").unwrap();
        let value = preset_json(preset);

        assert_eq!(value["name"], "🌃 Film Noir");
        assert_eq!(value["overrides"]["color_grading"], "Bleach Bypass (Gritty)");
    }

    #[test]
    fn render_options_lists_sentinel_first() {
        let rendered = render_options(Category::Framing);
        assert!(rendered.starts_with("framing (18 options):\n  None\n"));
    }

    #[test]
    fn render_category_list_names_every_category() {
        let rendered = render_category_list();
        for category in Category::ALL {
            assert!(rendered.contains(category.key()), "missing category: {}", category.key());
        }
    }

    #[test]
    fn render_random_shows_seed_and_label() {
        let prompt = ComposedPrompt {
            positive: "a harbor.".to_string(),
            negative: String::new(),
        };

        let rendered = render_random(42, Some("🌃 Film Noir"), &ShotSettings::default(), &prompt);
        assert!(rendered.contains("Seed:  42"));
        assert!(rendered.contains("Look:  🌃 Film Noir"));
        assert!(rendered.contains("--seed 42"));
    }

    #[test]
    fn render_random_falls_back_to_mixed_label() {
        let prompt = ComposedPrompt {
            positive: "a harbor.".to_string(),
            negative: String::new(),
        };

        let rendered = render_random(7, None, &ShotSettings::default(), &prompt);
        assert!(rendered.contains("Look:  mixed"));
    }

    #[test]
    fn render_settings_skips_none_categories() {
        let mut settings = ShotSettings::default();
        settings.set_value(Category::Camera, "ARRI Alexa 35");

        let rendered = render_settings(&settings);
        assert!(rendered.contains("camera:"));
        assert!(!rendered.contains("lens:"));
    }

    #[test]
    fn dispatch_routes_to_correct_handler() {
        let result = dispatch(Command::Options(OptionsArgs {
            category: Some("nonsense".to_string()),
            json: false,
        }));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown category"));
    }
}
