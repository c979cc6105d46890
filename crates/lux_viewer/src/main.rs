mod cli;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::Args;
use lux_renderer::{render, FrameBuffer, RenderSettings};

/// Settings from the config file (if any), then command line overrides.
fn load_settings(args: &Args) -> Result<RenderSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&json).with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => RenderSettings::default(),
    };

    if let Some(mode) = args.lighting_mode {
        settings.lighting_mode = mode;
    }
    if args.no_shadows {
        settings.shadows_enabled = false;
    }

    Ok(settings)
}

fn save_png(frame: &FrameBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let image = image::RgbImage::from_raw(frame.width(), frame.height(), frame.to_rgb8())
        .ok_or_else(|| anyhow!("Frame buffer doesn't match {}x{}", frame.width(), frame.height()))?;
    image
        .save(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Lux Viewer");

    let settings = load_settings(&args)?;
    let mut scene = args
        .scene
        .build(&args.resources)
        .with_context(|| format!("Failed to build scene '{}'", args.scene))?;
    scene.validate()?;

    log::info!(
        "Scene '{}': {} triangles, lighting {}, shadows {}",
        scene.name,
        scene.total_triangle_count(),
        settings.lighting_mode,
        if settings.shadows_enabled { "on" } else { "off" }
    );

    let mut frame = FrameBuffer::new(args.width, args.height);
    let start = Instant::now();

    for index in 0..args.frames.max(1) {
        let total_time = index as f32 / args.fps.max(f32::EPSILON);
        args.scene.animate(&mut scene, total_time);

        render(&scene, &settings, &mut frame);

        let path = args.frame_path(index);
        save_png(&frame, &path)?;
        log::info!("Saved {}", path.display());
    }

    log::info!("Finished {} frame(s) in {:.2?}", args.frames.max(1), start.elapsed());
    Ok(())
}
