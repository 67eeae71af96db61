//! # Hue Toolkit
//!
//! A Rust crate for everyday color math on the web's HEX/RGB/HSL models.
//!
//! This library provides:
//! - Conversions between `#RRGGBB`, 8-bit RGB and HSL
//! - WCAG relative luminance, contrast ratio and AA/AAA grading
//! - Mood-based random colors (calm, energetic, professional)
//! - Palette harmonies (analogous, monochromatic, triad, complementary)
//!
//! Every function is pure apart from drawing entropy in the generators.
//!
//! ## Example
//!
//! ```rust
//! use hue_toolkit::{contrast_ratio, generate_harmony, AccessibilityLevel, HarmonyMode, HexColor};
//!
//! let base: HexColor = "#3366cc".parse()?;
//! let palette = generate_harmony(&base, HarmonyMode::Complementary, 2);
//! assert_eq!(palette[1].to_string(), "#CC9933");
//!
//! let ratio = contrast_ratio(&base, &HexColor::WHITE);
//! assert_eq!(AccessibilityLevel::from_ratio(ratio), AccessibilityLevel::Aa);
//! # Ok::<(), hue_toolkit::ColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod generation;

pub use color::{
    accessibility_level, contrast_ratio, contrast_ratio_hex, generate_random_hex, hex_to_rgb,
    hsl_to_hex, random_hex_with, rgb_to_hsl, AccessibilityLevel, ContrastReport, HexColor,
    HslColor, RgbColor,
};
pub use config::PaletteConfig;
pub use error::{ColorError, Result};
pub use generation::{
    generate_harmony, generate_harmony_str, generate_mood_color, generate_mood_color_for,
    harmony_with, mood_color_with, HarmonyMode, Mood,
};
