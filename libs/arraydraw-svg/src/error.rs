//! # SVG Errors

use std::io;
use std::path::PathBuf;

use arraydraw::DrawError;
use thiserror::Error;

/// Errors from rendering or writing SVG output.
#[derive(Debug, Error)]
pub enum SvgError {
    /// The drawing options were rejected before any output was produced.
    #[error(transparent)]
    Draw(#[from] DrawError),

    /// Writing the markup failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SvgError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_message_names_path() {
        let err = SvgError::io("out/example_1.svg", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("out/example_1.svg"));
    }

    #[test]
    fn test_draw_error_is_transparent() {
        let err: SvgError = DrawError::invalid_color("bad").into();
        assert_eq!(err.to_string(), DrawError::invalid_color("bad").to_string());
    }
}
