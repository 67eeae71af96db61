//! Color format conversion utilities
//!
//! Provides conversions between the three supported representations:
//! - HEX strings (`#RRGGBB`) to RGB channels
//! - RGB channels to HSL (hue in degrees, saturation/lightness in percent)
//! - HSL back to canonical HEX
//!
//! Interop with the `palette` crate is provided through `From` impls.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, Srgb};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{constants::MAX_RGB24, ColorError, Result};

/// An 8-bit per channel sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack the channels into a 24-bit `0xRRGGBB` value
    pub const fn to_u24(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack the low 24 bits of `value`; higher bits are ignored
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn to_hsl(self) -> HslColor {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn to_hex(self) -> HexColor {
        HexColor::from_rgb(self)
    }
}

impl From<RgbColor> for Srgb<u8> {
    fn from(color: RgbColor) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl From<Srgb<u8>> for RgbColor {
    fn from(color: Srgb<u8>) -> Self {
        RgbColor::new(color.red, color.green, color.blue)
    }
}

/// An HSL color with hue in degrees and saturation/lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation in percent, [0, 100]
    pub s: f64,
    /// Lightness in percent, [0, 100]
    pub l: f64,
}

impl HslColor {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

impl From<HslColor> for Hsl {
    fn from(color: HslColor) -> Self {
        Self::new(
            color.h as f32,
            color.s as f32 / 100.0,
            color.l as f32 / 100.0,
        )
    }
}

impl From<Hsl> for HslColor {
    fn from(color: Hsl) -> Self {
        HslColor::new(
            f64::from(color.hue.into_positive_degrees()),
            f64::from(color.saturation) * 100.0,
            f64::from(color.lightness) * 100.0,
        )
    }
}

/// A validated hex color, displayed in canonical `#RRGGBB` uppercase form
///
/// Parsing accepts an optional leading `#`, either letter case and
/// surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(RgbColor);

impl HexColor {
    pub const BLACK: HexColor = HexColor(RgbColor::new(0, 0, 0));
    pub const WHITE: HexColor = HexColor(RgbColor::new(255, 255, 255));

    pub const fn from_rgb(rgb: RgbColor) -> Self {
        Self(rgb)
    }

    pub const fn to_rgb(self) -> RgbColor {
        self.0
    }

    pub fn to_hsl(self) -> HslColor {
        self.0.to_hsl()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.r, self.0.g, self.0.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s).map(HexColor)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        HexColor(rgb)
    }
}

/// Generate a hex color uniformly from the full 24-bit space
pub fn generate_random_hex() -> HexColor {
    random_hex_with(&mut rand::thread_rng())
}

/// Generate a uniformly random hex color from the given RNG
pub fn random_hex_with<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    HexColor(RgbColor::from_u24(rng.gen_range(0..=MAX_RGB24)))
}

/// Parse a hex color string into RGB channels
///
/// # Arguments
///
/// * `hex` - Hex color string (e.g., "#3366CC" or "3366cc")
///
/// # Returns
///
/// RGB channels, red from bits 16-23, green from bits 8-15, blue from bits 0-7
///
/// # Errors
///
/// Returns `ColorError::InvalidHexFormat` if the string is not exactly six
/// hex digits after the optional `#`
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if digits.len() != 6 {
        return Err(ColorError::invalid_hex(
            hex,
            format!("expected 6 hex digits, got {}", digits.chars().count()),
        ));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex(
            hex,
            format!("{:?} is not a hex digit", bad),
        ));
    }

    let value = u32::from_str_radix(digits, 16)
        .map_err(|e| ColorError::invalid_hex(hex, e.to_string()))?;
    Ok(RgbColor::from_u24(value))
}

/// Convert RGB channels (0-255) to HSL
///
/// Achromatic colors (all channels equal) get hue and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> HslColor {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return HslColor::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    HslColor::new(sector / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL (hue in degrees, saturation/lightness in percent) to hex
///
/// Hue is wrapped into [0, 360) and each channel is clamped to [0, 255]
/// before formatting.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    let h = h.rem_euclid(360.0);
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * color).round().clamp(0.0, 255.0) as u8
    };

    HexColor(RgbColor::new(channel(0.0), channel(8.0), channel(4.0)))
}
