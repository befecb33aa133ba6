//! Configuration sections, their defaults, and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level renderer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Geodesic sphere geometry.
    pub sphere: SphereConfig,
    /// Viewing angles for the 2D projection.
    pub view: ViewConfig,
    /// Colors and stroke styling applied at the render boundary.
    pub style: StyleConfig,
    /// Turntable animation settings.
    pub turntable: TurntableConfig,
    /// Output location and frame size.
    pub export: ExportConfig,
    /// Development settings.
    pub debug: DebugConfig,
}

/// Geodesic sphere geometry parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SphereConfig {
    /// Subdivision rounds applied to the base icosahedron.
    pub subdivisions: u32,
    /// Per-face shrink factor in (0, 1]; smaller opens wider gaps.
    pub shrink_factor: f64,
    /// Uniform scale applied after shrinking.
    pub scale: f64,
}

/// Viewing angles for the projected 2D scenes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Tilt about the X axis, radians. Applied before the Y turn.
    pub angle_x: f64,
    /// Turn about the Y axis, radians.
    pub angle_y: f64,
}

/// Style constants consumed by the exporters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    /// Face fill color (CSS hex string).
    pub fill_color: String,
    /// Face outline color.
    pub stroke_color: String,
    /// Face outline width in viewport units.
    pub stroke_width: f64,
    /// Frame background color.
    pub background_color: String,
    /// Uniform fill opacity for the 3D model material.
    pub model_fill_opacity: f64,
}

/// Turntable animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TurntableConfig {
    /// Frames per full revolution about the Y axis.
    pub frames: u32,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory rendered files are written to.
    pub out_dir: PathBuf,
    /// Square frame edge in pixels.
    pub frame_size: u32,
}

/// Development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Fallback log level when `RUST_LOG` is unset ("debug", "info", ...).
    pub log_level: String,
}

/// Output-resolution presets, fastest preview to print quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityPreset {
    /// 480 px preview frames.
    Low,
    /// 1080 px frames.
    High,
    /// 2160 px frames.
    Ultra,
}

impl QualityPreset {
    /// Parse a preset name as given on the command line.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "high" | "h" => Some(Self::High),
            "ultra" | "u" | "4k" => Some(Self::Ultra),
            _ => None,
        }
    }

    /// Square frame edge this preset renders at.
    #[must_use]
    pub const fn frame_size(self) -> u32 {
        match self {
            Self::Low => 480,
            Self::High => 1080,
            Self::Ultra => 2160,
        }
    }
}

// --- Default implementations ---

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            subdivisions: 2,
            shrink_factor: 0.75,
            scale: 2.5,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            angle_x: 0.4,
            angle_y: 0.3,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fill_color: "#4169E1".to_string(),
            stroke_color: "#4169E1".to_string(),
            stroke_width: 0.5,
            background_color: "#000000".to_string(),
            model_fill_opacity: 0.9,
        }
    }
}

impl Default for TurntableConfig {
    fn default() -> Self {
        Self { frames: 120 }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("renders"),
            frame_size: 1080,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Default config directory: `<platform config dir>/burst`.
///
/// Falls back to `./burst-config` when the platform reports none.
#[must_use]
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("burst"))
        .unwrap_or_else(|| PathBuf::from("burst-config"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Read `config.ron` from the directory, writing defaults first if
    /// the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Wrote default config to {}", config_path.display());
            Ok(config)
        }
    }

    /// Persist as pretty-printed `config.ron`, creating the directory if
    /// needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }

    /// Re-read the file and report whether it differs from `self`.
    ///
    /// Returns the on-disk config only when it changed, so callers can
    /// poll without reapplying identical settings.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
        let on_disk: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;

        if &on_disk != self {
            log::info!("Config file changed on disk, reloading");
            Ok(Some(on_disk))
        } else {
            Ok(None)
        }
    }
}
