//! Logging bootstrap for the burst renderer.
//!
//! One call wires up the `tracing` subscriber stack: a human-readable
//! console layer, an optional JSON file copy in debug builds, and a
//! filter that falls back from `RUST_LOG` to the configured level. The
//! geometry crates stay silent; only the binary and the config loader
//! emit events.

use burst_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// The filter resolves in priority order: `RUST_LOG` when set, else the
/// config's `debug.log_level`, else `info`. Console output goes to the
/// fmt layer with uptime timestamps and module targets. When `log_dir`
/// is given in a debug build, a second layer mirrors everything to
/// `burst.log` as JSON lines.
///
/// Call once at startup, before the first render stage runs; events
/// emitted earlier are dropped.
///
/// ```no_run
/// use burst_config::Config;
///
/// let config = Config::default();
/// burst_log::init_logging(None, cfg!(debug_assertions), Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => "info".to_string(),
    };

    // RUST_LOG wins over the config level
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true) // module path prefixes
        .with_thread_ids(false)
        .with_thread_names(false) // single-threaded pipeline
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    // Debug builds keep a machine-readable copy on disk
    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("burst.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The filter used when neither `RUST_LOG` nor the config says otherwise.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        assert!(format!("{}", default_env_filter()).contains("info"));
    }

    #[test]
    fn test_per_crate_directives_parse() {
        let filter = EnvFilter::new("info,burst_geodesic=debug");
        let rendered = format!("{filter}");
        assert!(rendered.contains("burst_geodesic=debug"));
        assert!(rendered.contains("info"));
    }

    #[test]
    fn test_documented_filter_strings_parse() {
        for filter_str in [
            "info",
            "debug,burst_view=trace",
            "warn,burst_config=debug,burst_export=trace",
            "error",
        ] {
            assert!(
                EnvFilter::try_from(filter_str).is_ok(),
                "filter {filter_str:?} did not parse"
            );
        }

        // EnvFilter swallows malformed directives instead of panicking
        let _ = EnvFilter::try_from("weird=input=with=equals");
    }

    #[test]
    fn test_config_level_used_as_fallback() {
        let mut config = Config::default();
        config.debug.log_level = "trace".to_string();
        let filter = EnvFilter::new(&config.debug.log_level);
        assert!(format!("{filter}").contains("trace"));
    }

    #[test]
    fn test_debug_file_layer_writes_json_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.debug.log_level = "debug".to_string();

        // The global subscriber can only be set once per process, so this
        // is the single test that installs it.
        init_logging(Some(temp_dir.path()), true, Some(&config));
        tracing::info!(target: "burst_log::file_check", frames = 120, "render pass done");
        log::warn!(target: "burst_log::file_check", "config fallback engaged");

        let contents = std::fs::read_to_string(temp_dir.path().join("burst.log")).unwrap();
        let line = contents
            .lines()
            .find(|line| line.contains("render pass done"))
            .expect("tracing event missing from burst.log");
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["target"], "burst_log::file_check");
        assert_eq!(event["level"], "INFO");
        assert_eq!(event["fields"]["message"], "render pass done");
        assert_eq!(event["fields"]["frames"], 120);

        // Records emitted through `log` reach the same sink once the
        // subscriber is installed.
        assert!(
            contents.contains("config fallback engaged"),
            "log-crate record missing from burst.log"
        );
    }
}
