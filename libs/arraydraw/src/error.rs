//! # Drawing Errors
//!
//! Error types for configuration validation. Every error is raised before
//! any layout work starts, so a caller never sees a partial document.

use thiserror::Error;

/// Errors that can occur while validating a drawing configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// Wrong arity, more than one zero dimension, or too many tiles.
    #[error("Invalid shape: {message}")]
    InvalidShape { message: String },

    /// Malformed hex color or a color grid that does not match its tile grid.
    #[error("Invalid color: {message}")]
    InvalidColor { message: String },

    /// Depth angle outside [0, 90] degrees or a non-positive scale.
    #[error("Invalid projection: {message}")]
    InvalidProjection { message: String },

    /// Non-positive or non-finite cube, stroke or font size.
    #[error("Invalid size: {message}")]
    InvalidSize { message: String },
}

impl DrawError {
    /// Creates an invalid shape error.
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }

    /// Creates an invalid color error.
    pub fn invalid_color(message: impl Into<String>) -> Self {
        Self::InvalidColor {
            message: message.into(),
        }
    }

    /// Creates an invalid projection error.
    pub fn invalid_projection(message: impl Into<String>) -> Self {
        Self::InvalidProjection {
            message: message.into(),
        }
    }

    /// Creates an invalid size error.
    pub fn invalid_size(message: impl Into<String>) -> Self {
        Self::InvalidSize {
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DrawError::invalid_color("expected #RRGGBB, got \"red\"");
        assert!(err.to_string().starts_with("Invalid color"));
    }

    #[test]
    fn test_constructors_pick_variant() {
        assert!(matches!(
            DrawError::invalid_shape("x"),
            DrawError::InvalidShape { .. }
        ));
        assert!(matches!(
            DrawError::invalid_projection("x"),
            DrawError::InvalidProjection { .. }
        ));
        assert!(matches!(
            DrawError::invalid_size("x"),
            DrawError::InvalidSize { .. }
        ));
    }
}
