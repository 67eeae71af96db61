//! Reference values for contrast grading and palette generation
//!
//! This module contains compile-time constants for WCAG luminance and
//! contrast, mood sampling ranges and harmony step sizes.

/// WCAG 2.x relative luminance
///
/// Channels are linearized with the sRGB curve, then weighted by the
/// Rec. 709 luma coefficients.
pub mod wcag {
    /// Linearization breakpoint on the encoded channel value
    /// Note: WCAG 2.x still publishes 0.03928 rather than IEC's 0.04045
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Divisor for the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset and scale of the power segment
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_SCALE: f64 = 1.055;
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Channel weights
    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;

    /// Flare term added to both luminances in the contrast ratio
    pub const FLARE: f64 = 0.05;
}

/// Contrast ratio thresholds for accessibility grading (inclusive)
pub mod thresholds {
    /// Enhanced contrast for normal text
    pub const AAA: f64 = 7.0;

    /// Minimum contrast for normal text
    pub const AA: f64 = 4.5;

    /// Minimum contrast for large text (18pt, or 14pt bold)
    pub const AA_LARGE: f64 = 3.0;
}

/// Half-open `[start, end)` sampling ranges for mood colors as `(h, s, l)`
pub mod moods {
    use std::ops::Range;

    /// Any hue, low saturation, high lightness
    pub const CALM: [Range<u16>; 3] = [0..360, 20..60, 60..90];

    /// Any hue, high saturation, mid lightness
    pub const ENERGETIC: [Range<u16>; 3] = [0..360, 70..100, 45..75];

    /// Cyan through blue to violet, muted
    pub const PROFESSIONAL: [Range<u16>; 3] = [180..260, 10..50, 30..70];
}

/// Step sizes for the geometric harmony modes
pub mod harmony {
    /// Hue step between analogous colors, in degrees
    pub const ANALOGOUS_STEP: f64 = 30.0;

    /// Hue step between triad colors, in degrees
    pub const TRIAD_STEP: f64 = 120.0;

    /// Hue step between complementary colors, in degrees
    pub const COMPLEMENTARY_STEP: f64 = 180.0;

    /// Lightness step between monochromatic colors, in percent
    pub const MONOCHROMATIC_STEP: f64 = 15.0;

    /// Lightness bounds for monochromatic colors, in percent
    pub const MONOCHROMATIC_MIN_LIGHTNESS: f64 = 10.0;
    pub const MONOCHROMATIC_MAX_LIGHTNESS: f64 = 90.0;
}

/// Largest palette a configuration may request
pub const MAX_PALETTE_SIZE: usize = 64;

/// Largest value of a 24-bit RGB color
pub const MAX_RGB24: u32 = 0xFF_FFFF;
