//! Command-line argument parsing for the burst renderer.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, QualityPreset};

/// Burst command-line arguments.
///
/// Every flag is optional; present flags win over `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "burst", about = "Exploded geodesic sphere logo renderer")]
pub struct CliArgs {
    /// Scene to render (still, turntable, model).
    #[arg(long)]
    pub scene: Option<String>,

    /// Subdivision rounds applied to the icosahedron.
    #[arg(long)]
    pub subdivisions: Option<u32>,

    /// Face shrink factor in (0, 1].
    #[arg(long)]
    pub shrink_factor: Option<f64>,

    /// Uniform scale applied after shrinking.
    #[arg(long)]
    pub scale: Option<f64>,

    /// View tilt about the X axis, radians.
    #[arg(long)]
    pub angle_x: Option<f64>,

    /// View turn about the Y axis, radians.
    #[arg(long)]
    pub angle_y: Option<f64>,

    /// Turntable frame count.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Output directory for rendered files.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Output quality preset (low, high, ultra).
    #[arg(long)]
    pub quality: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(n) = args.subdivisions {
            self.sphere.subdivisions = n;
        }
        if let Some(factor) = args.shrink_factor {
            self.sphere.shrink_factor = factor;
        }
        if let Some(scale) = args.scale {
            self.sphere.scale = scale;
        }
        if let Some(angle) = args.angle_x {
            self.view.angle_x = angle;
        }
        if let Some(angle) = args.angle_y {
            self.view.angle_y = angle;
        }
        if let Some(frames) = args.frames {
            self.turntable.frames = frames;
        }
        if let Some(ref dir) = args.out_dir {
            self.export.out_dir = dir.clone();
        }
        if let Some(ref name) = args.quality {
            match QualityPreset::parse(name) {
                Some(preset) => self.export.frame_size = preset.frame_size(),
                None => log::warn!(
                    "Unknown quality preset '{name}', keeping frame size {}",
                    self.export.frame_size
                ),
            }
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
