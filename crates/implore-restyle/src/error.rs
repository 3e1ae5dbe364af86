//! Error types for implore-restyle
//!
//! Every error here is raised while building a [`Formatter`](crate::Formatter)
//! from configuration. The formatting pass itself does not fail.

use thiserror::Error;

/// Main error type for restyle operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RestyleError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Color lookup errors
    #[error("Color lookup failed: {0}")]
    Color(#[from] ColorError),
}

/// Configuration errors, fatal before any scene mutation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Palette has no entries
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// Style pattern has no entries
    #[error("style pattern must contain at least one dash pattern")]
    EmptyStylePattern,

    /// Value is out of its valid range
    #[error("{field} is out of range: {message}")]
    OutOfRange { field: String, message: String },

    /// Configuration document could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Errors from the color-name table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Name is not in the table. Carries every valid name so the caller can
    /// show the user what to pick instead.
    #[error(
        "unknown color name '{name}' ({} valid names available, see ColorTable::help_table)",
        .valid_names.len()
    )]
    UnknownName {
        name: String,
        valid_names: Vec<String>,
    },

    /// Color name input was not a string
    #[error("color name must be a string, got {found}")]
    MalformedName { found: String },

    /// Explicit RGB channel outside [0, 1]
    #[error("color channel {channel} = {value} is outside [0, 1]")]
    ChannelOutOfRange { channel: usize, value: f64 },
}

impl ColorError {
    /// Valid names carried by an unknown-name diagnostic
    pub fn valid_names(&self) -> &[String] {
        match self {
            ColorError::UnknownName { valid_names, .. } => valid_names,
            _ => &[],
        }
    }
}

/// Result type alias for restyle operations
pub type RestyleResult<T> = Result<T, RestyleError>;

/// Result type alias for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for color lookups
pub type ColorResult<T> = Result<T, ColorError>;
