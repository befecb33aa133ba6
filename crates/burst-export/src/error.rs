//! Export error types.

use thiserror::Error;

/// Errors from building export documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// A color string is not `#RRGGBB` hex.
    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}
