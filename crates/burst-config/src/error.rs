//! Errors for config persistence.

/// Errors from loading, saving, or parsing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the config file from disk.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// Could not write the config file to disk.
    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    /// The file exists but is not valid RON for this config version.
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The in-memory config could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
