//! WCAG contrast ratio computation and accessibility grading
//!
//! Luminance follows the WCAG 2.x definition (sRGB linearization with the
//! 0.03928 breakpoint, Rec. 709 weights). The contrast ratio is
//! `(L_lighter + 0.05) / (L_darker + 0.05)` and always lies in [1, 21].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::conversion::{HexColor, RgbColor};
use crate::constants::{thresholds, wcag};
use crate::Result;

/// WCAG conformance level reached by a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccessibilityLevel {
    #[serde(rename = "Fail")]
    Fail,
    #[serde(rename = "AA Large")]
    AaLarge,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl AccessibilityLevel {
    /// Grade a contrast ratio. Thresholds are inclusive and the highest
    /// matching level wins; `NaN` grades as `Fail`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= thresholds::AAA {
            AccessibilityLevel::Aaa
        } else if ratio >= thresholds::AA {
            AccessibilityLevel::Aa
        } else if ratio >= thresholds::AA_LARGE {
            AccessibilityLevel::AaLarge
        } else {
            AccessibilityLevel::Fail
        }
    }

    /// Smallest contrast ratio that reaches this level
    pub fn min_ratio(self) -> f64 {
        match self {
            AccessibilityLevel::Aaa => thresholds::AAA,
            AccessibilityLevel::Aa => thresholds::AA,
            AccessibilityLevel::AaLarge => thresholds::AA_LARGE,
            AccessibilityLevel::Fail => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccessibilityLevel::Aaa => "AAA",
            AccessibilityLevel::Aa => "AA",
            AccessibilityLevel::AaLarge => "AA Large",
            AccessibilityLevel::Fail => "Fail",
        }
    }

    pub fn is_pass(self) -> bool {
        self != AccessibilityLevel::Fail
    }
}

impl fmt::Display for AccessibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Contrast ratio and grade for a foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    pub foreground: HexColor,
    pub background: HexColor,
    pub ratio: f64,
    pub level: AccessibilityLevel,
}

impl ContrastReport {
    pub fn new(foreground: HexColor, background: HexColor) -> Self {
        let ratio = contrast_ratio(&foreground, &background);
        Self {
            foreground,
            background,
            ratio,
            level: AccessibilityLevel::from_ratio(ratio),
        }
    }
}

/// Linearize one encoded sRGB channel in [0, 1]
fn linearize(v: f64) -> f64 {
    if v <= wcag::LINEAR_THRESHOLD {
        v / wcag::LINEAR_DIVISOR
    } else {
        ((v + wcag::GAMMA_OFFSET) / wcag::GAMMA_SCALE).powf(wcag::GAMMA_EXPONENT)
    }
}

/// WCAG relative luminance in [0, 1]; 0 is black and 1 is white
pub(crate) fn relative_luminance(rgb: RgbColor) -> f64 {
    let r = linearize(f64::from(rgb.r) / 255.0);
    let g = linearize(f64::from(rgb.g) / 255.0);
    let b = linearize(f64::from(rgb.b) / 255.0);
    wcag::RED_WEIGHT * r + wcag::GREEN_WEIGHT * g + wcag::BLUE_WEIGHT * b
}

/// Compute the WCAG contrast ratio between two colors
///
/// Symmetric in its arguments; identical colors give exactly 1.0 and
/// black on white gives 21.0.
pub fn contrast_ratio(a: &HexColor, b: &HexColor) -> f64 {
    let la = relative_luminance(a.to_rgb());
    let lb = relative_luminance(b.to_rgb());
    let brightest = la.max(lb);
    let darkest = la.min(lb);
    (brightest + wcag::FLARE) / (darkest + wcag::FLARE)
}

/// Compute the contrast ratio between two hex strings
///
/// # Errors
///
/// Returns `ColorError::InvalidHexFormat` if either string is not a valid hex color
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64> {
    let a: HexColor = a.parse()?;
    let b: HexColor = b.parse()?;
    Ok(contrast_ratio(&a, &b))
}

/// Grade a contrast ratio, see [`AccessibilityLevel::from_ratio`]
pub fn accessibility_level(ratio: f64) -> AccessibilityLevel {
    AccessibilityLevel::from_ratio(ratio)
}
