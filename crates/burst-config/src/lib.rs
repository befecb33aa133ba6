//! Configuration for the burst renderer.
//!
//! Settings persist to disk as RON, with CLI overrides via clap and
//! hot-reload detection. Geometry parameters, viewing angles, and the
//! style constants consumed at the render boundary all live here so the
//! pure pipeline crates stay free of policy.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, ExportConfig, QualityPreset, SphereConfig, StyleConfig, TurntableConfig,
    ViewConfig, default_config_dir,
};
pub use error::ConfigError;
