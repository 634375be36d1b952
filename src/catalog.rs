//! Static attribute catalog for cinematic shot prompts.
//!
//! This module provides:
//! - The ten categorical dimensions of a shot (framing, camera, lens, ...)
//! - The ordered option values for each category
//! - Key-based lookup for CLI and file surfaces
//!
//! Every option list begins with the `"None"` sentinel, which means "omit
//! this dimension from the prompt". The tables are compile-time data and
//! are never mutated.

/// Sentinel option value meaning "omit this dimension".
pub const NONE_VALUE: &str = "None";

/// One categorical dimension of a cinematographic shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Framing,
    Camera,
    Lens,
    Aperture,
    Lighting,
    Style,
    FilmStock,
    ShutterSpeed,
    ColorGrading,
    AspectRatio,
}

/// Camera bodies, from IMAX film cameras down to phones.
pub const CAMERAS: &[&str] = &[
    NONE_VALUE,
    "ARRI Alexa 65 (IMAX)",
    "ARRI Alexa Mini LF",
    "ARRI Alexa 35",
    "Sony Venice 2",
    "Sony FX9",
    "Sony A7S III",
    "RED V-Raptor XL",
    "RED Komodo",
    "RED Monstro 8K VV",
    "Panavision Millennium DXL2",
    "Panavision Panaflex Gold II (35mm)",
    "IMAX 15/70mm Film Camera",
    "Bolex H16 (16mm Film)",
    "Super 8mm Camera",
    "Canon C700 FF",
    "Blackmagic URSA Mini Pro 12K",
    "GoPro Hero 12",
    "iPhone 15 Pro Max",
    "Polaroid SX-70",
    "Vintage Daguerreotype Camera",
];

/// Lens choices. Grouped by character rather than focal length alone.
pub const LENSES: &[&str] = &[
    NONE_VALUE,
    // prime focal lengths
    "14mm Ultra-Wide Angle",
    "24mm Wide Angle",
    "35mm Classic Wide",
    "50mm Standard Prime",
    "85mm Portrait Prime",
    "105mm Macro",
    "135mm Medium Telephoto",
    "200mm Telephoto Compression",
    "600mm Super Telephoto",
    // specialty
    "Anamorphic Lens",
    "Fish-Eye Lens",
    "Tilt-Shift Lens",
    // cinema primes
    "Cooke S7/i Full Frame",
    "Cooke Speed Panchro Vintage",
    "Zeiss Master Prime",
    "Zeiss Supreme Prime",
    "ARRI/Zeiss Signature Prime",
    "ARRI Master Anamorphic",
    "Panavision Primo 70",
    "Panavision C-Series Anamorphic",
    // vintage and character glass
    "Canon K35 Vintage",
    "Canon FD 50mm L",
    "Helios 44-2 58mm (Swirly Bokeh)",
    "Lensbaby Velvet (Soft Focus)",
    "Petzval 85mm (Classic Swirl)",
    // modern professional
    "Leica Summilux 50mm f/1.4",
    "Leica Summicron 35mm",
    "Sigma Art 35mm f/1.4",
    "Sigma Art 85mm f/1.4",
    "Sony G Master 24-70mm",
    "Sony G Master 85mm",
    // macro, probe, and zooms
    "Laowa Probe Lens (Macro)",
    "Freefly Wave (High-Speed)",
    "Angenieux Optimo Zoom",
    "Fujinon Premista Zoom",
];

pub const APERTURES: &[&str] = &[
    NONE_VALUE,
    "f/0.95 (Razor Thin DoF)",
    "f/1.2 (Dreamy Bokeh)",
    "f/1.8 (Soft Background)",
    "f/2.8 (Cinematic Separation)",
    "f/4.0 (Balanced)",
    "f/5.6 (Sharp Subject)",
    "f/8.0 (Deep Focus)",
    "f/11 (Landscape Sharpness)",
    "f/16 (Everything in Focus)",
    "f/22 (Diffraction Starbursts)",
];

pub const FRAMINGS: &[&str] = &[
    NONE_VALUE,
    "Extreme Close-Up (ECU)",
    "Close-Up (CU)",
    "Medium Close-Up (MCU)",
    "Medium Shot (MS)",
    "Cowboy Shot (American Shot)",
    "Full Body Shot (Wide)",
    "Extreme Wide Shot (EWS)",
    "Establishing Shot",
    "Over-The-Shoulder (OTS)",
    "Point of View (POV)",
    "Low Angle (Hero Shot)",
    "High Angle (Vulnerability)",
    "Bird's Eye View (Overhead)",
    "Worm's Eye View",
    "Dutch Angle (Canted)",
    "Symmetrical Composition",
    "Rule of Thirds",
];

pub const LIGHTING: &[&str] = &[
    NONE_VALUE,
    "Rembrandt Lighting",
    "Chiaroscuro (High Contrast)",
    "Film Noir Lighting",
    "Split Lighting",
    "Butterfly Lighting",
    "Paramount Lighting",
    "Soft Window Light",
    "Golden Hour (Magic Hour)",
    "Blue Hour",
    "Cinematic Haze / Volumetric Fog",
    "God Rays (Crepuscular Rays)",
    "Neon Cyberpunk Lighting",
    "Practical Lighting",
    "Bioluminescence",
    "Studio Strobe 3-Point Setup",
    "Ring Light",
    "Candlelight",
    "Moonlight",
    "Overcast Soft Light",
    "Harsh Sunlight",
];

/// Overall visual aesthetics. The raw text of the selected style also drives
/// the style-conditional negative terms and the era marker, so these strings
/// are matched by substring elsewhere and must not be reworded casually.
pub const STYLES: &[&str] = &[
    NONE_VALUE,
    "Photorealistic (Raw)",
    "Cinematic Movie Still",
    "Hyper-Realism",
    "Editorial Photography",
    "National Geographic Style",
    "Documentary Texture",
    "Vintage 1990s VHS",
    "Analog Film (Kodak Portra 400)",
    "Fujifilm Velvia 50",
    "Black and White (Ilford HP5)",
    "Monochrome Noir",
    "CGI 3D Render (Octane)",
    "Unreal Engine 5",
    "Pixar Animation Style",
    "Anime (Makoto Shinkai)",
    "Oil Painting (Classic)",
    "Concept Art",
    "Cyberpunk 2077 Aesthetic",
    "Wes Anderson Symmetric",
    "Tarantino Violence",
    "Kubrick One-Point Perspective",
    "Blade Runner Atmosphere",
];

pub const FILM_STOCKS: &[&str] = &[
    NONE_VALUE,
    "Kodak Vision3 500T",
    "Kodak Portra 400",
    "Kodak Ektar 100",
    "Kodak Tri-X 400 (B&W)",
    "Fujifilm Pro 400H",
    "Cinestill 800T",
    "Ilford Delta 3200",
    "Polaroid 600",
    "Wet Plate Collodion",
];

pub const SHUTTER_SPEEDS: &[&str] = &[
    NONE_VALUE,
    "1/50th sec (Standard Motion Blur)",
    "1/1000th sec (Frozen Action)",
    "Long Exposure (Light Trails)",
    "Slow Shutter (Dreamy Blur)",
];

pub const COLOR_GRADES: &[&str] = &[
    NONE_VALUE,
    "Teal and Orange (Blockbuster)",
    "Bleach Bypass (Gritty)",
    "Technicolor (Vintage)",
    "Cross Processed",
    "Desaturated (Muted)",
    "Vibrant High Contrast",
    "Sepia Tone",
    "Monochrome High Key",
    "Cyberpunk Neon Grading",
    "Pastel Soft Tones",
];

pub const ASPECT_RATIOS: &[&str] = &[
    NONE_VALUE,
    "16:9 (Widescreen)",
    "2.39:1 (Anamorphic Scope)",
    "4:3 (Academy Ratio)",
    "1:1 (Square)",
    "9:16 (Social Vertical)",
    "21:9 (Ultrawide)",
];

impl Category {
    /// All categories, in the order they flow through a settings record.
    pub const ALL: [Category; 10] = [
        Category::Framing,
        Category::Camera,
        Category::Lens,
        Category::Aperture,
        Category::Lighting,
        Category::Style,
        Category::FilmStock,
        Category::ShutterSpeed,
        Category::ColorGrading,
        Category::AspectRatio,
    ];

    /// The ordered option values for this category, sentinel first.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Category::Framing => FRAMINGS,
            Category::Camera => CAMERAS,
            Category::Lens => LENSES,
            Category::Aperture => APERTURES,
            Category::Lighting => LIGHTING,
            Category::Style => STYLES,
            Category::FilmStock => FILM_STOCKS,
            Category::ShutterSpeed => SHUTTER_SPEEDS,
            Category::ColorGrading => COLOR_GRADES,
            Category::AspectRatio => ASPECT_RATIOS,
        }
    }

    /// Stable snake_case key used in shot files and CLI listings.
    pub fn key(self) -> &'static str {
        match self {
            Category::Framing => "framing",
            Category::Camera => "camera",
            Category::Lens => "lens",
            Category::Aperture => "aperture",
            Category::Lighting => "lighting",
            Category::Style => "style",
            Category::FilmStock => "film_stock",
            Category::ShutterSpeed => "shutter_speed",
            Category::ColorGrading => "color_grading",
            Category::AspectRatio => "aspect_ratio",
        }
    }

    /// Look up a category by key.
    ///
    /// Case-insensitive; accepts hyphens in place of underscores so CLI
    /// flag spellings like `film-stock` resolve too. Returns `None` for
    /// anything unrecognized.
    pub fn from_key(key: &str) -> Option<Category> {
        let normalized = key.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "framing" => Some(Category::Framing),
            "camera" => Some(Category::Camera),
            "lens" => Some(Category::Lens),
            "aperture" => Some(Category::Aperture),
            "lighting" => Some(Category::Lighting),
            "style" => Some(Category::Style),
            "film_stock" => Some(Category::FilmStock),
            "shutter_speed" => Some(Category::ShutterSpeed),
            "color_grading" => Some(Category::ColorGrading),
            "aspect_ratio" => Some(Category::AspectRatio),
            _ => None,
        }
    }
}

/// Check whether a value is a member of a category's option list.
///
/// The composer never requires this (any string degrades gracefully); it
/// exists for table-integrity tests and diagnostic surfaces.
pub fn is_option(category: Category, value: &str) -> bool {
    category.options().contains(&value)
}
