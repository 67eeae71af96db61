//! Palette generation module
//!
//! Mood sampling and harmony (palette) construction on top of the
//! color conversions.

pub mod harmony;
pub mod mood;

pub use harmony::{generate_harmony, generate_harmony_str, harmony_with, HarmonyMode};
pub use mood::{generate_mood_color, generate_mood_color_for, mood_color_with, Mood};
