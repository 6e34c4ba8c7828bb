//! Command-line interface for scan_bands
//!
//! Basic CLI tool for testing band scanning against photo files:
//! decodes an image to RGBA8, runs the scan pipeline, and prints the
//! result as JSON.

use scan_bands::{scan_frame, PixelBuffer, ScanConfig};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut image_path_arg = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
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

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);
    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => match ScanConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: Failed to load config '{path}': {e}");
                process::exit(1);
            }
        },
        None => ScanConfig::default_calibration_0(),
    };

    let decoded = match image::open(image_path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            eprintln!("Error: Failed to decode image: {e}");
            process::exit(1);
        }
    };

    let (width, height) = decoded.dimensions();
    let buffer = match PixelBuffer::from_raw(width as usize, height as usize, decoded.as_raw()) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match scan_frame(&buffer, &config) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {program} [--config <config.json>] <image>");
    println!();
    println!("Scans a photo of a resistor and prints the detected band");
    println!("sequence and edge positions as JSON.");
    println!();
    println!("Options:");
    println!("  --config <path>  Load scan configuration from a JSON file");
    println!("  --help, -h       Show this help message");
}
