//! Color representation, conversion and contrast module
//!
//! This module handles HEX/RGB/HSL conversions and WCAG luminance,
//! contrast ratio and accessibility grading.

pub mod contrast;
pub mod conversion;

pub use contrast::{accessibility_level, contrast_ratio, contrast_ratio_hex, AccessibilityLevel, ContrastReport};
pub use conversion::{
    generate_random_hex, hex_to_rgb, hsl_to_hex, random_hex_with, rgb_to_hsl, HexColor, HslColor, RgbColor,
};
