//! Cairn CLI - render a JSON tile scene to a PNG.
//!
//! The scene file carries what the upstream pipeline would normally
//! supply in memory: a tile address, a background color, way geometry
//! bucketed by (layer, level), and prioritized point symbols. The
//! rasterizer turns it into pixels in one fill → ways → elements pass.

mod scene;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;

use cairn_graphics::{SoftwareCanvas, create_surface, surface_to_rgba};
use cairn_render::CanvasRasterizer;

use crate::scene::Scene;

/// Cairn - render one map tile scene to a raster image
#[derive(Parser, Debug)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Render a scene with its own tile size
    cairn demos/scene.json

    # Choose the output file
    cairn demos/scene.json -o tile.png

    # Render at a different tile edge length
    cairn demos/scene.json --tile-size 512
")]
struct Cli {
    /// Path to the JSON scene file
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "tile.png", value_name = "FILE")]
    output: PathBuf,

    /// Override the tile edge length in pixels
    #[arg(long, value_name = "PIXELS")]
    tile_size: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.scene)
        .with_context(|| format!("failed to read scene file {}", cli.scene.display()))?;
    let mut scene = Scene::from_json(&text)?;
    if let Some(tile_size) = cli.tile_size {
        scene.set_tile_size(tile_size);
    }
    let draw = scene.into_tile_draw()?;

    let size = draw.tile.tile_size;
    let mut rasterizer = CanvasRasterizer::new(SoftwareCanvas::new());
    rasterizer.bind(create_surface(size, size)?);
    rasterizer.fill(draw.background);
    rasterizer.draw_ways(&draw.ways, &draw.tile);
    rasterizer.draw_map_elements(&draw.elements, &draw.tile);

    let surface = rasterizer
        .take_surface()
        .context("rasterizer lost its surface")?;
    let rgba = surface_to_rgba(&surface);
    let image = image::RgbaImage::from_raw(size, size, rgba)
        .context("rendered surface has unexpected dimensions")?;
    image
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    eprintln!(
        "{} tile {}/{}/{} ({} layers, {} elements) -> {}",
        "Rendered".green().bold(),
        draw.tile.zoom_level,
        draw.tile.x,
        draw.tile.y,
        draw.ways.layer_count(),
        draw.elements.len(),
        cli.output.display()
    );

    Ok(())
}
