//! Palette generation from a base color
//!
//! Geometric modes rotate the base hue or step its lightness; mood modes
//! ignore the base and sample independent colors; random mode keeps the
//! base as the first swatch and fills the rest with random colors.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color::{hsl_to_hex, random_hex_with, HexColor, HslColor};
use crate::constants::harmony;
use crate::generation::mood::{mood_color_with, Mood};
use crate::{ColorError, Result};

/// Palette generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HarmonyMode {
    /// Hue steps of 30 degrees
    Analogous,
    /// Lightness steps of 15 percent centered on the base, clamped to [10, 90]
    Monochromatic,
    /// Hue steps of 120 degrees
    Triad,
    /// Hue steps of 180 degrees
    Complementary,
    /// Independent colors sampled from a mood, base is ignored
    Mood(Mood),
    /// The base followed by uniformly random colors
    Random,
}

impl HarmonyMode {
    pub fn keyword(self) -> &'static str {
        match self {
            HarmonyMode::Analogous => "analogous",
            HarmonyMode::Monochromatic => "monochromatic",
            HarmonyMode::Triad => "triad",
            HarmonyMode::Complementary => "complementary",
            HarmonyMode::Mood(mood) => mood.keyword(),
            HarmonyMode::Random => "random",
        }
    }

    /// Derive the `index`-th swatch of a `count`-sized palette from `base`.
    /// Returns `None` for modes that do not derive from the base.
    fn derive(self, base: HslColor, index: usize, count: usize) -> Option<HslColor> {
        let i = index as f64;
        let rotate = |step: f64| HslColor::new((base.h + i * step) % 360.0, base.s, base.l);

        match self {
            HarmonyMode::Analogous => Some(rotate(harmony::ANALOGOUS_STEP)),
            HarmonyMode::Triad => Some(rotate(harmony::TRIAD_STEP)),
            HarmonyMode::Complementary => Some(rotate(harmony::COMPLEMENTARY_STEP)),
            HarmonyMode::Monochromatic => {
                let offset = i * harmony::MONOCHROMATIC_STEP
                    - count as f64 * harmony::MONOCHROMATIC_STEP / 2.0;
                let l = (base.l + offset).clamp(
                    harmony::MONOCHROMATIC_MIN_LIGHTNESS,
                    harmony::MONOCHROMATIC_MAX_LIGHTNESS,
                );
                Some(HslColor::new(base.h, base.s, l))
            }
            HarmonyMode::Mood(_) | HarmonyMode::Random => None,
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for HarmonyMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let keyword = s.trim().to_ascii_lowercase();
        let mode = match keyword.as_str() {
            "analogous" => HarmonyMode::Analogous,
            "monochromatic" => HarmonyMode::Monochromatic,
            "triad" => HarmonyMode::Triad,
            "complementary" => HarmonyMode::Complementary,
            "random" => HarmonyMode::Random,
            other => match Mood::from_keyword(other) {
                Some(mood) => HarmonyMode::Mood(mood),
                None => {
                    return Err(ColorError::UnknownHarmonyMode {
                        mode: s.to_string(),
                    })
                }
            },
        };
        Ok(mode)
    }
}

impl TryFrom<String> for HarmonyMode {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HarmonyMode> for String {
    fn from(mode: HarmonyMode) -> Self {
        mode.keyword().to_string()
    }
}

impl From<Mood> for HarmonyMode {
    fn from(mood: Mood) -> Self {
        HarmonyMode::Mood(mood)
    }
}

/// Generate a palette of `count` colors from `base`
///
/// # Arguments
///
/// * `base` - Base color; ignored by mood modes
/// * `mode` - Palette strategy
/// * `count` - Number of swatches; 0 yields an empty palette
pub fn generate_harmony(base: &HexColor, mode: HarmonyMode, count: usize) -> Vec<HexColor> {
    harmony_with(base, mode, count, &mut rand::thread_rng())
}

/// Generate a palette drawing any randomness from the given RNG
pub fn harmony_with<R: Rng + ?Sized>(
    base: &HexColor,
    mode: HarmonyMode,
    count: usize,
    rng: &mut R,
) -> Vec<HexColor> {
    debug!(base = %base, mode = %mode, count, "generating harmony");

    match mode {
        HarmonyMode::Mood(mood) => (0..count).map(|_| mood_color_with(mood, &mut *rng)).collect(),
        HarmonyMode::Random => (0..count)
            .map(|i| if i == 0 { *base } else { random_hex_with(&mut *rng) })
            .collect(),
        _ => {
            let hsl = base.to_hsl();
            (0..count)
                .filter_map(|i| mode.derive(hsl, i, count))
                .map(|candidate| {
                    trace!(h = candidate.h, s = candidate.s, l = candidate.l, "harmony swatch");
                    hsl_to_hex(candidate.h, candidate.s, candidate.l)
                })
                .collect()
        }
    }
}

/// Generate a palette from string inputs
///
/// # Errors
///
/// Returns `ColorError::InvalidHexFormat` for a malformed base color and
/// `ColorError::UnknownHarmonyMode` for an unrecognized mode keyword
pub fn generate_harmony_str(base: &str, mode: &str, count: usize) -> Result<Vec<HexColor>> {
    let mode: HarmonyMode = mode.parse()?;
    let base: HexColor = base.parse()?;
    Ok(generate_harmony(&base, mode, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    fn palette(base: &str, mode: HarmonyMode, count: usize) -> Vec<HexColor> {
        harmony_with(&hex(base), mode, count, &mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_mode_keywords() {
        assert_eq!("analogous".parse::<HarmonyMode>().unwrap(), HarmonyMode::Analogous);
        assert_eq!("TRIAD".parse::<HarmonyMode>().unwrap(), HarmonyMode::Triad);
        assert_eq!(
            "calm".parse::<HarmonyMode>().unwrap(),
            HarmonyMode::Mood(Mood::Calm)
        );
        assert_eq!("random".parse::<HarmonyMode>().unwrap(), HarmonyMode::Random);
        assert_eq!(HarmonyMode::Mood(Mood::Energetic).to_string(), "energetic");
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        match "unknownmode".parse::<HarmonyMode>() {
            Err(ColorError::UnknownHarmonyMode { mode }) => assert_eq!(mode, "unknownmode"),
            other => panic!("Expected UnknownHarmonyMode, got: {:?}", other),
        }
    }

    #[test]
    fn test_analogous_red() {
        let colors = palette("#FF0000", HarmonyMode::Analogous, 3);
        let strings: Vec<String> = colors.iter().map(ToString::to_string).collect();
        assert_eq!(strings, ["#FF0000", "#FF8000", "#FFFF00"]);
    }

    #[test]
    fn test_analogous_matches_direct_conversion() {
        let base = hex("#3366CC").to_hsl();
        let colors = palette("#3366CC", HarmonyMode::Analogous, 4);
        for (i, color) in colors.iter().enumerate() {
            let expected = hsl_to_hex((base.h + i as f64 * 30.0) % 360.0, base.s, base.l);
            assert_eq!(*color, expected);
        }
    }

    #[test]
    fn test_complementary_offsets_hue_by_180() {
        let base = hex("#3366CC").to_hsl();
        let colors = palette("#3366CC", HarmonyMode::Complementary, 2);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], hsl_to_hex(base.h, base.s, base.l));
        assert_eq!(colors[1], hsl_to_hex((base.h + 180.0) % 360.0, base.s, base.l));
        assert_eq!(colors[1].to_string(), "#CC9933");
    }

    #[test]
    fn test_triad_wraps_hue() {
        let colors = palette("#FF0000", HarmonyMode::Triad, 4);
        let strings: Vec<String> = colors.iter().map(ToString::to_string).collect();
        assert_eq!(strings, ["#FF0000", "#00FF00", "#0000FF", "#FF0000"]);
    }

    #[test]
    fn test_monochromatic_steps_and_clamps() {
        // Base lightness 50, count 5: offsets -37.5, -22.5, -7.5, 7.5, 22.5
        let base = hex("#3366CC").to_hsl();
        let colors = palette("#3366CC", HarmonyMode::Monochromatic, 5);
        let expected: Vec<HexColor> = [12.5, 27.5, 42.5, 57.5, 72.5]
            .iter()
            .map(|l| hsl_to_hex(base.h, base.s, base.l - 50.0 + l))
            .collect();
        assert_eq!(colors, expected);

        // Large palettes hit the [10, 90] clamp at both ends
        let colors = palette("#3366CC", HarmonyMode::Monochromatic, 10);
        assert_eq!(colors[0], hsl_to_hex(base.h, base.s, 10.0));
        assert_eq!(colors[9], hsl_to_hex(base.h, base.s, 90.0));
    }

    #[test]
    fn test_mood_mode_ignores_base() {
        let a = palette("#000000", HarmonyMode::Mood(Mood::Professional), 6);
        let b = palette("#FFFFFF", HarmonyMode::Mood(Mood::Professional), 6);
        assert_eq!(a.len(), 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_mode_keeps_base_first() {
        let colors = palette("#3366CC", HarmonyMode::Random, 5);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], hex("#3366CC"));
    }

    #[test]
    fn test_zero_count_is_empty() {
        for mode in ["analogous", "monochromatic", "triad", "complementary", "calm", "random"] {
            let mode: HarmonyMode = mode.parse().unwrap();
            assert!(palette("#3366CC", mode, 0).is_empty(), "{mode}");
        }
    }

    #[test]
    fn test_generate_harmony_str() {
        let colors = generate_harmony_str("ff0000", "analogous", 3).unwrap();
        assert_eq!(colors.len(), 3);

        assert!(matches!(
            generate_harmony_str("#FF0000", "unknownmode", 5),
            Err(ColorError::UnknownHarmonyMode { .. })
        ));
        assert!(matches!(
            generate_harmony_str("#F00", "analogous", 5),
            Err(ColorError::InvalidHexFormat { .. })
        ));
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&HarmonyMode::Mood(Mood::Calm)).unwrap();
        assert_eq!(json, "\"calm\"");
        let mode: HarmonyMode = serde_json::from_str("\"complementary\"").unwrap();
        assert_eq!(mode, HarmonyMode::Complementary);
        assert!(serde_json::from_str::<HarmonyMode>("\"sparkly\"").is_err());
    }
}
