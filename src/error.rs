//! Error types for the chroma_tag library

use thiserror::Error;

/// Result type alias for chroma_tag operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Failures surfaced by palette loading and swatch matching.
///
/// Every variant is terminal for the call that produced it: no partial
/// palette snapshot and no partial match result is ever returned.
#[derive(Error, Debug)]
pub enum MatchError {
    /// A color string is not of the form `#rrggbb`
    #[error("Invalid color format: {value:?} ({reason})")]
    InvalidColorFormat { value: String, reason: String },

    /// Matching was attempted against a palette with no entries
    #[error("Palette has no entries")]
    EmptyPalette,

    /// Matching was attempted with no swatches
    #[error("Swatch list is empty")]
    EmptySwatchList,

    /// The palette source supplied the same identifier twice
    #[error("Duplicate palette identifier: {id}")]
    DuplicatePaletteId { id: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration or palette file could not be read or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MatchError {
    /// Create an invalid color format error for `value`
    pub fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a condition that may clear up on retry
    ///
    /// An empty palette usually means the palette store has not been
    /// populated yet; the same swatches can be matched again later.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MatchError::EmptyPalette)
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MatchError::InvalidColorFormat { value, .. } => {
                format!("The color {value:?} is not a valid #rrggbb value.")
            }
            MatchError::EmptyPalette => {
                "No reference colors are configured yet. Try again once the palette is populated."
                    .to_string()
            }
            MatchError::EmptySwatchList => {
                "No colors could be extracted from the image.".to_string()
            }
            MatchError::DuplicatePaletteId { id } => {
                format!("The reference color {id} is defined more than once.")
            }
            _ => "Color matching failed. Please check the configuration and try again.".to_string(),
        }
    }
}
