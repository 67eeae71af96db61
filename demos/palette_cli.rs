//! Command-line interface for hue_toolkit
//!
//! Generates a palette and prints each swatch with its contrast against
//! black and white text

use hue_toolkit::{ColorError, ContrastReport, HexColor, PaletteConfig};
use serde::Serialize;
use std::{env, path::PathBuf, process};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Swatch {
    hex: HexColor,
    on_white: ContrastReport,
    on_black: ContrastReport,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config = PaletteConfig::default();
    let mut config_path = None;
    let mut base_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" | "-m" if i + 1 < args.len() => {
                config.mode = parse_or_exit(&args[i + 1]);
                i += 1;
            }
            "--count" | "-n" if i + 1 < args.len() => {
                config.count = match args[i + 1].parse() {
                    Ok(count) => count,
                    Err(_) => {
                        eprintln!("Error: --count expects a number, got '{}'", args[i + 1]);
                        process::exit(1);
                    }
                };
                i += 1;
            }
            "--config" | "-c" if i + 1 < args.len() => {
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if base_arg.is_none() {
                    base_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple base colors provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    if let Some(path) = config_path {
        config = match PaletteConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(error) => fail(error),
        };
    }
    if let Some(base) = base_arg {
        config.base = parse_or_exit(&base);
    }

    let colors = match config.generate() {
        Ok(colors) => colors,
        Err(error) => fail(error),
    };

    let swatches: Vec<Swatch> = colors
        .into_iter()
        .map(|hex| Swatch {
            hex,
            on_white: ContrastReport::new(HexColor::WHITE, hex),
            on_black: ContrastReport::new(HexColor::BLACK, hex),
        })
        .collect();

    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(&swatches) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing palette: {}", e);
            process::exit(1);
        }
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Palette: {} x{} from {}", config.mode, config.count, config.base);
    for swatch in &swatches {
        eprintln!(
            "  {}  white text {:>5.2} ({:<8})  black text {:>5.2} ({})",
            swatch.hex,
            swatch.on_white.ratio,
            swatch.on_white.level,
            swatch.on_black.ratio,
            swatch.on_black.level
        );
    }
}

fn parse_or_exit<T>(value: &str) -> T
where
    T: std::str::FromStr<Err = ColorError>,
{
    match value.parse() {
        Ok(parsed) => parsed,
        Err(error) => fail(error),
    }
}

fn fail(error: ColorError) -> ! {
    eprintln!("Error: {}", error);
    if error.is_input_error() {
        eprintln!("Suggestion: {}", error.user_message());
    }
    process::exit(1);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] [BASE_COLOR]", program_name);
    eprintln!();
    eprintln!("Generate a color palette and grade its contrast against black and white text.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --mode, -m MODE      analogous, monochromatic, triad, complementary,");
    eprintln!("                       calm, energetic, professional or random (default: analogous)");
    eprintln!("  --count, -n N        Number of swatches (default: 5)");
    eprintln!("  --config, -c FILE    Load base, mode and count from a JSON file");
    eprintln!("  --help, -h           Show this help message");
    eprintln!();
    eprintln!("Set RUST_LOG=hue_toolkit=debug to trace generation.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '#3366CC'", program_name);
    eprintln!("  {} --mode triad --count 3 ff0000", program_name);
    eprintln!("  {} --config palette.json", program_name);
}
