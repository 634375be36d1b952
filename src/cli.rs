//! CLI argument parsing for shotwright.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::negative::NegativeStrength;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shotwright: cinematic shot prompt composer.
///
/// Builds diffusion-model prompts from a catalog of cinematographic
/// options (framing, camera, lens, lighting, ...), applies one-click look
/// presets, and derives a matching negative prompt.
#[derive(Parser, Debug)]
#[command(name = "shotwright")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for shotwright.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the positive and negative prompts for one shot.
    ///
    /// Starts from an optional YAML shot file, applies category flags on
    /// top, then applies the preset (which wins over both). Prints the
    /// positive and negative prompt strings.
    Compose(ComposeArgs),

    /// List presets, or show one preset's overrides.
    ///
    /// Without a name, prints all preset names in display order.
    Presets(PresetsArgs),

    /// List categories, or the option values of one category.
    ///
    /// Without a category, prints the category keys. Option lists start
    /// with the "None" sentinel.
    Options(OptionsArgs),

    /// Generate a random look and compose it.
    ///
    /// Usually applies one canned preset whole; sometimes mixes every
    /// category independently. Reproducible via --seed.
    Random(RandomArgs),
}

/// Arguments for the `compose` command.
#[derive(Parser, Debug)]
pub struct ComposeArgs {
    /// Core subject/scene description.
    #[arg(short, long)]
    pub base: Option<String>,

    /// YAML shot file to start from; flags override its fields.
    #[arg(long, value_name = "FILE")]
    pub shot: Option<PathBuf>,

    /// Preset to apply (applied last, wins over category flags).
    /// Unknown names compose without a preset.
    #[arg(long)]
    pub preset: Option<String>,

    /// Camera framing and shot type.
    #[arg(long)]
    pub framing: Option<String>,

    /// Camera body.
    #[arg(long)]
    pub camera: Option<String>,

    /// Lens choice.
    #[arg(long)]
    pub lens: Option<String>,

    /// Aperture / depth of field.
    #[arg(long)]
    pub aperture: Option<String>,

    /// Lighting style and atmosphere.
    #[arg(long)]
    pub lighting: Option<String>,

    /// Overall visual style and aesthetic.
    #[arg(long)]
    pub style: Option<String>,

    /// Film stock emulation.
    #[arg(long)]
    pub film_stock: Option<String>,

    /// Motion blur characteristics.
    #[arg(long)]
    pub shutter_speed: Option<String>,

    /// Color grading look.
    #[arg(long)]
    pub color_grading: Option<String>,

    /// Frame aspect ratio.
    #[arg(long)]
    pub aspect_ratio: Option<String>,

    /// Additional free-text details, appended verbatim.
    #[arg(long)]
    pub details: Option<String>,

    /// Time period for era-specific looks.
    #[arg(long, value_parser = clap::value_parser!(i32).range(1800..=2100))]
    pub year: Option<i32>,

    /// Strength of the auto-generated negative prompt.
    #[arg(long, value_enum)]
    pub negative_strength: Option<NegativeStrength>,

    /// Print a truncated single-line preview instead of full output.
    #[arg(long)]
    pub preview: bool,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `presets` command.
#[derive(Parser, Debug)]
pub struct PresetsArgs {
    /// Preset name to show in full. Omit to list all names.
    pub name: Option<String>,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `options` command.
#[derive(Parser, Debug)]
pub struct OptionsArgs {
    /// Category key (e.g. framing, film-stock). Omit to list categories.
    pub category: Option<String>,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `random` command.
#[derive(Parser, Debug)]
pub struct RandomArgs {
    /// Seed for reproducible output. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Core subject/scene description.
    #[arg(short, long, default_value = "A cinematic scene...")]
    pub base: String,

    /// Strength of the auto-generated negative prompt.
    #[arg(long, value_enum, default_value = "standard")]
    pub negative_strength: NegativeStrength,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
