//! Error types for the hue_toolkit library

use thiserror::Error;

/// Result type alias for hue_toolkit operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color parsing, palette generation and configuration
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex color string is not six hex digits (optionally prefixed with `#`)
    #[error("Invalid hex color {input:?}: {reason}")]
    InvalidHexFormat { input: String, reason: String },

    /// Harmony mode keyword is not recognized
    #[error("Unknown harmony mode: {mode:?}")]
    UnknownHarmonyMode { mode: String },

    /// Mood keyword is not recognized
    #[error("Unknown mood: {mood:?}")]
    UnknownMood { mood: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration I/O error: {message}")]
    ConfigIo {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be encoded or decoded as JSON
    #[error("Configuration format error: {message}")]
    ConfigFormat {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ColorError {
    /// Create an invalid hex error for the given input
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHexFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration I/O error with context
    pub fn config_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration format error with context
    pub fn config_format(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ConfigFormat {
            message: message.into(),
            source,
        }
    }

    /// Check if this error was caused by caller-supplied input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidHexFormat { .. }
                | ColorError::UnknownHarmonyMode { .. }
                | ColorError::UnknownMood { .. }
                | ColorError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidHexFormat { input, .. } => {
                format!("\"{}\" is not a valid color. Use six hex digits such as #3366CC.", input)
            }
            ColorError::UnknownHarmonyMode { mode } => format!(
                "\"{}\" is not a palette mode. Try analogous, monochromatic, triad, complementary, calm, energetic, professional or random.",
                mode
            ),
            ColorError::UnknownMood { mood } => {
                format!("\"{}\" is not a mood. Try calm, energetic or professional.", mood)
            }
            ColorError::InvalidParameter { parameter, value } => {
                format!("The value {} is not allowed for {}.", value, parameter)
            }
            _ => "Could not load or save the palette configuration.".to_string(),
        }
    }
}
