//! Integration tests for the public color toolkit API
//!
//! These tests exercise the library the way a host application would:
//! - Parsing loosely formatted hex input
//! - Converting through RGB and HSL and back
//! - Grading contrast between palette colors
//! - Generating palettes from keywords and configuration files
//! - Error handling for malformed input

use hue_toolkit::{
    accessibility_level, contrast_ratio, contrast_ratio_hex, generate_harmony,
    generate_harmony_str, generate_mood_color, harmony_with, hex_to_rgb, hsl_to_hex, rgb_to_hsl,
    AccessibilityLevel, ColorError, ContrastReport, HarmonyMode, HexColor, Mood, PaletteConfig,
    RgbColor,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn hex(s: &str) -> HexColor {
    s.parse().unwrap()
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_random_rgb_roundtrip_within_one() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..5000 {
        let (r, g, b): (u8, u8, u8) = (rng.gen(), rng.gen(), rng.gen());
        let hsl = rgb_to_hsl(r, g, b);
        let back = hex_to_rgb(&hsl_to_hex(hsl.h, hsl.s, hsl.l).to_string()).unwrap();

        assert!(
            back.r.abs_diff(r) <= 1 && back.g.abs_diff(g) <= 1 && back.b.abs_diff(b) <= 1,
            "({}, {}, {}) came back as {:?}",
            r,
            g,
            b,
            back
        );
    }
}

#[test]
fn test_hex_input_normalization() {
    for input in ["#3366cc", "3366CC", "  #3366Cc\n"] {
        assert_eq!(hex(input).to_string(), "#3366CC");
    }
    assert_eq!(hex_to_rgb("#3366CC").unwrap(), RgbColor::new(0x33, 0x66, 0xCC));
}

#[test]
fn test_malformed_hex_fails_fast() {
    for input in ["", "#", "#12345", "#1234567", "#12345G", "rgb(1,2,3)", "#ÿÿÿ"] {
        match hex_to_rgb(input) {
            Err(ColorError::InvalidHexFormat { .. }) => {}
            other => panic!("Expected InvalidHexFormat for {:?}, got: {:?}", input, other),
        }
    }
}

// ============================================================================
// Contrast Tests
// ============================================================================

#[test]
fn test_contrast_extremes() {
    let max = contrast_ratio_hex("#000000", "#FFFFFF").unwrap();
    assert!((max - 21.0).abs() < 1e-9);

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..500 {
        let a = HexColor::from_rgb(RgbColor::new(rng.gen(), rng.gen(), rng.gen()));
        let b = HexColor::from_rgb(RgbColor::new(rng.gen(), rng.gen(), rng.gen()));

        let ab = contrast_ratio(&a, &b);
        assert_eq!(ab, contrast_ratio(&b, &a));
        assert!((1.0..=21.0 + 1e-9).contains(&ab));
        assert_eq!(contrast_ratio(&a, &a), 1.0);
    }
}

#[test]
fn test_accessibility_thresholds() {
    assert_eq!(accessibility_level(7.0).to_string(), "AAA");
    assert_eq!(accessibility_level(4.5).to_string(), "AA");
    assert_eq!(accessibility_level(3.0).to_string(), "AA Large");
    assert_eq!(accessibility_level(2.9).to_string(), "Fail");
}

#[test]
fn test_text_on_palette() {
    // Black text is at least large-text readable on every calm swatch
    let mut rng = StdRng::seed_from_u64(77);
    let palette = harmony_with(&HexColor::WHITE, HarmonyMode::Mood(Mood::Calm), 20, &mut rng);

    for swatch in palette {
        let report = ContrastReport::new(HexColor::BLACK, swatch);
        assert!(report.level >= AccessibilityLevel::AaLarge, "{:?}", report);
        assert!(report.level.is_pass());
    }
}

// ============================================================================
// Palette Generation Tests
// ============================================================================

#[test]
fn test_analogous_from_red() {
    let colors = generate_harmony(&hex("#FF0000"), HarmonyMode::Analogous, 3);
    let expected: Vec<HexColor> = [0.0, 30.0, 60.0]
        .iter()
        .map(|h| hsl_to_hex(*h, 100.0, 50.0))
        .collect();
    assert_eq!(colors, expected);
}

#[test]
fn test_complementary_pair() {
    let base = hex("#3366CC");
    let hsl = base.to_hsl();
    let colors = generate_harmony(&base, HarmonyMode::Complementary, 2);

    assert_eq!(colors, [base, hsl_to_hex(hsl.h + 180.0, hsl.s, hsl.l)]);
}

#[test]
fn test_string_entry_point() {
    let colors = generate_harmony_str("#3366cc", "triad", 3).unwrap();
    assert_eq!(colors.len(), 3);
    assert_eq!(colors[0], hex("#3366CC"));

    let err = generate_harmony_str("#3366CC", "unknownmode", 5).unwrap_err();
    assert!(matches!(err, ColorError::UnknownHarmonyMode { .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_random_mode_returns_count_colors() {
    let base = hex("#ABCDEF");
    let colors = generate_harmony(&base, HarmonyMode::Random, 5);
    assert_eq!(colors.len(), 5);
    assert_eq!(colors[0], base);
}

#[test]
fn test_mood_modes_produce_count_colors() {
    for mood in Mood::ALL {
        let colors = generate_harmony(&HexColor::BLACK, mood.into(), 7);
        assert_eq!(colors.len(), 7);
    }
    // Professional colors stay in the cyan-to-violet band
    for _ in 0..100 {
        let hsl = generate_mood_color(Mood::Professional).to_hsl();
        assert!(hsl.s < 1.0 || (170.0..=270.0).contains(&hsl.h), "{:?}", hsl);
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_config_file_drives_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.json");
    std::fs::write(&path, r##"{ "base": "#ff0000", "mode": "complementary", "count": 2 }"##)
        .unwrap();

    let config = PaletteConfig::from_json_file(&path).unwrap();
    let colors = config.generate().unwrap();

    let strings: Vec<String> = colors.iter().map(ToString::to_string).collect();
    assert_eq!(strings, ["#FF0000", "#00FFFF"]);
}
