use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lux_core::ReferenceScene;
use lux_renderer::LightingMode;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lux_viewer")]
#[command(about = "Render Lux reference scenes to PNG")]
pub struct Args {
    /// Scene to render: solid-colors, solid-colors-lit, lambert-test,
    /// cook-torrance, mesh-test, reference or bunny
    #[arg(short, long, default_value = "reference")]
    pub scene: ReferenceScene,

    /// Directory holding OBJ resources
    #[arg(long, default_value = "resources")]
    pub resources: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value = "640")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    pub height: u32,

    /// Number of animation frames to render
    #[arg(short, long, default_value = "1")]
    pub frames: u32,

    /// Animation frames per second, used to compute each frame's time
    #[arg(long, default_value = "30")]
    pub fps: f32,

    /// Output PNG path. With more than one frame the frame number is
    /// appended to the file stem.
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// observed-area, radiance, brdf or combined (overrides the config file)
    #[arg(short, long)]
    pub lighting_mode: Option<LightingMode>,

    /// Disable shadow rays (overrides the config file)
    #[arg(long)]
    pub no_shadows: bool,

    /// JSON render settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Output path for `frame`.
    pub fn frame_path(&self, frame: u32) -> PathBuf {
        if self.frames <= 1 {
            return self.output.clone();
        }

        let stem = self
            .output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "frame".to_string());
        self.output.with_file_name(format!("{}_{:04}.png", stem, frame))
    }
}
