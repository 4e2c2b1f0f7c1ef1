//! Generate a matcher configuration file
//!
//! Creates a JSON config with the five-swatch, five-match limits

use chroma_tag::MatcherConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = MatcherConfig::five_color();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!("  Swatch limit: {:?}", config.swatch_limit);
            eprintln!("  Match limit:  {:?}", config.match_limit);
        }
        Err(e) => {
            eprintln!("Error saving configuration: {}", e);
            process::exit(1);
        }
    }
}
