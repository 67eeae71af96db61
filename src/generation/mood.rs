//! Mood-based random color generation
//!
//! Each mood samples integer hue, saturation and lightness uniformly from a
//! fixed half-open range (see [`crate::constants::moods`]) and converts the
//! sample to hex.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{generate_random_hex, hsl_to_hex, HexColor, HslColor};
use crate::constants::moods;
use crate::{ColorError, Result};

/// Named HSL sampling range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Any hue, soft and light
    Calm,
    /// Any hue, vivid
    Energetic,
    /// Cool blues and violets, muted
    Professional,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Calm, Mood::Energetic, Mood::Professional];

    pub fn keyword(self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
            Mood::Professional => "professional",
        }
    }

    /// Look up a mood by keyword, ignoring ASCII case and surrounding whitespace
    pub fn from_keyword(keyword: &str) -> Option<Mood> {
        let keyword = keyword.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.keyword().eq_ignore_ascii_case(keyword))
    }

    /// `[hue, saturation, lightness]` sampling ranges
    pub fn ranges(self) -> [Range<u16>; 3] {
        match self {
            Mood::Calm => moods::CALM,
            Mood::Energetic => moods::ENERGETIC,
            Mood::Professional => moods::PROFESSIONAL,
        }
    }

    /// Sample an integer-valued HSL triple from this mood's ranges
    pub fn sample_hsl<R: Rng + ?Sized>(self, rng: &mut R) -> HslColor {
        let [h, s, l] = self.ranges();
        HslColor::new(
            f64::from(rng.gen_range(h)),
            f64::from(rng.gen_range(s)),
            f64::from(rng.gen_range(l)),
        )
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Mood {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Mood::from_keyword(s).ok_or_else(|| ColorError::UnknownMood { mood: s.to_string() })
    }
}

/// Generate a random color in the given mood
pub fn generate_mood_color(mood: Mood) -> HexColor {
    mood_color_with(mood, &mut rand::thread_rng())
}

/// Generate a random color in the given mood from the given RNG
pub fn mood_color_with<R: Rng + ?Sized>(mood: Mood, rng: &mut R) -> HexColor {
    let hsl = mood.sample_hsl(rng);
    hsl_to_hex(hsl.h, hsl.s, hsl.l)
}

/// Generate a mood color from a keyword
///
/// Unrecognized keywords fall back to a uniformly random color.
pub fn generate_mood_color_for(keyword: &str) -> HexColor {
    match Mood::from_keyword(keyword) {
        Some(mood) => generate_mood_color(mood),
        None => {
            debug!(keyword, "unknown mood keyword, using a random color");
            generate_random_hex()
        }
    }
}
