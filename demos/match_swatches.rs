//! Match swatch colors against a palette document
//!
//! Usage: cargo run --example match_swatches -- <palette.json> <#rrggbb>...
//!
//! The palette document has the form
//! `{ "entries": [ { "id": "red", "hex": "#ff0000" }, ... ] }`.
//! Swatches are given in rank order, most dominant first.

use chroma_tag::{DominantColorPipeline, HexColor, PaletteFile};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <palette.json> <#rrggbb>...", args[0]);
        eprintln!("Example: {} palette.json '#c0392b' '#2c3e50'", args[0]);
        process::exit(1);
    }

    let palette = match PaletteFile::<String>::from_json_file(Path::new(&args[1]))
        .and_then(PaletteFile::into_palette)
    {
        Ok(palette) => palette,
        Err(e) => {
            eprintln!("Error loading palette: {}", e);
            process::exit(1);
        }
    };

    let mut swatches = Vec::new();
    for raw in &args[2..] {
        match HexColor::parse(raw) {
            Ok(hex) => swatches.push(hex.to_rgb()),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    let pipeline = DominantColorPipeline::new();
    let detailed = match pipeline.match_detailed(&swatches, &palette) {
        Ok(detailed) => detailed,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    for (rank, (swatch, found)) in swatches.iter().zip(&detailed).enumerate() {
        println!(
            "#{rank} {} -> {} (ΔE00 {:.2}, {:?})",
            HexColor::from(*swatch),
            found.id,
            found.distance,
            found.category()
        );
    }

    match pipeline.match_swatches(&swatches, &palette) {
        Ok(result) => {
            println!("Dominant: {}", result.dominant());
            println!("Matches:  {}", result.matches().join(", "));
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    }
}
