//! Generate a grass point cloud over a noise heightfield.
//!
//! Usage: cargo run --release --bin generate_grass -- --config meadow.json [--out cloud.json]

use std::path::PathBuf;
use std::time::Instant;

use bladecast::core::logging;
use bladecast::grass::{GrassField, GrassFieldConfig};
use bladecast::surface::HeightfieldSurface;

fn arg_value(args: &[String], flag: &str) -> Option<PathBuf> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}

fn main() -> bladecast::core::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(config_path) = arg_value(&args, "--config") else {
        eprintln!("Usage: generate_grass --config <file.json> [--out <file.json>]");
        std::process::exit(2);
    };
    let out_path = arg_value(&args, "--out")
        .unwrap_or_else(|| config_path.with_extension("cloud.json"));

    let config = GrassFieldConfig::load(&config_path)?;
    log::info!(
        "Loaded '{}': {} blades over {:?} at {:?}",
        config_path.display(),
        config.parameters.blade_count,
        config.parameters.footprint_size,
        config.anchor,
    );

    let surface = HeightfieldSurface::from_params(config.terrain.clone());
    let mut field = GrassField::from_config(&config);

    let start = Instant::now();
    let cloud = field.generate(&surface)?;
    let elapsed = start.elapsed();

    log::info!(
        "Generated {} blade origins in {:.2}ms",
        cloud.len(),
        elapsed.as_secs_f64() * 1000.0,
    );
    if let Some(bounds) = cloud.bounds() {
        log::info!("Bounds: {:?} .. {:?}", bounds.min, bounds.max);
    }

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out_path, serde_json::to_string(cloud)?)?;
    log::info!("Wrote {}", out_path.display());

    Ok(())
}
