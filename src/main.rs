//! Headless editor demo — generates terrain, runs a scripted editing
//! session, and saves the result as a project file.
//!
//! Usage: cargo run --release --bin relief-demo -- [OPTIONS]
//!
//! Options:
//!   --seed <SEED>     Terrain noise seed (default: 12345)
//!   --scale <SCALE>   Terrain noise scale (default: 40.0)
//!   --height <H>      Terrain height scale (default: 3.0)
//!   --out <PATH>      Output project file (default: "project.json")

use std::path::PathBuf;

use glam::{Vec2, Vec3};

use relief::brush::{SculptMode, SculptParamUpdate};
use relief::core::camera::Camera;
use relief::core::logging;
use relief::editor::{Editor, Tool};
use relief::instance::Category;
use relief::scene::WaterUpdate;
use relief::terrain::{self, GeneratorParams, Heightfield};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let seed = parse_u32_arg(&args, "--seed").unwrap_or(12345);
    let scale = parse_f32_arg(&args, "--scale").unwrap_or(40.0);
    let height_scale = parse_f32_arg(&args, "--height").unwrap_or(3.0);
    let out = parse_str_arg(&args, "--out").unwrap_or_else(|| "project.json".to_string());
    let out = PathBuf::from(out);

    println!("=== Relief Editor Demo ===");
    println!("Seed:   {}", seed);
    println!("Scale:  {}, Height: {}", scale, height_scale);
    println!("Output: {}", out.display());
    println!();

    let mut heightfield = Heightfield::default();
    terrain::generate(
        &mut heightfield,
        &GeneratorParams { seed, scale, height_scale, ..Default::default() },
    );
    let mut editor = Editor::with_heightfield(heightfield);

    let camera = Camera::look_at(Vec3::new(0.0, 120.0, 0.01), Vec3::ZERO, Vec3::Y);

    // Carve a ridge with a few sculpt strokes
    editor.set_sculpt_params(&SculptParamUpdate {
        mode: Some(SculptMode::Raise),
        radius: Some(20.0),
        intensity: Some(0.8),
        ..Default::default()
    });
    for step in 0..5 {
        let ndc = Vec2::new(-0.4 + step as f32 * 0.2, 0.0);
        editor.stroke_begin(ndc, &camera);
        editor.stroke_move(ndc + Vec2::new(0.05, 0.05), &camera);
        editor.stroke_end();
    }

    // Paint the ridge line
    editor.set_tool(Tool::Paint);
    editor.set_paint_material("stone");
    editor.stroke_begin(Vec2::ZERO, &camera);
    editor.stroke_move(Vec2::new(0.2, 0.0), &camera);
    editor.stroke_end();

    // Scatter some trees off to the side
    editor.set_tool(Tool::Vegetation);
    editor.set_vegetation_category(Category::Tree);
    for step in 0..10 {
        let ndc = Vec2::new(-0.3 + step as f32 * 0.05, 0.5);
        editor.stroke_begin(ndc, &camera);
        editor.stroke_end();
    }

    editor.set_water(&WaterUpdate {
        enabled: Some(true),
        level: Some(-0.5),
        ..Default::default()
    });

    println!("Vertices:  {}", editor.heightfield.vertex_count());
    println!("Instances: {}", editor.instances.total());
    println!("History:   {} snapshots", editor.history.len());

    match editor.save_to(&out) {
        Ok(()) => println!("Saved {}", out.display()),
        Err(e) => {
            eprintln!("Save failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
