//! CLI error handling with user-facing messages.

use std::fmt;
use std::path::PathBuf;
use std::process;

use arraydraw::DrawError;
use arraydraw_svg::SvgError;

/// Everything that can stop the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Flags combined in a way that cannot describe a drawing
    Usage(String),
    /// Drawing options rejected
    Draw(DrawError),
    /// Writing SVG failed
    Svg(SvgError),
    /// Writing JSON failed
    Json {
        path: PathBuf,
        error: serde_json::Error,
    },
    /// Creating a file or directory failed
    FileWrite {
        path: PathBuf,
        error: std::io::Error,
    },
}

impl CliError {
    /// Prints the error to stderr and exits with status 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        if let CliError::Usage(_) = self {
            eprintln!();
            eprintln!("Run `arraydraw render --help` for the full list of flags.");
        }
        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Draw(e) => write!(f, "Invalid drawing: {}", e),
            CliError::Svg(e) => write!(f, "{}", e),
            CliError::Json { path, error } => {
                write!(f, "Failed to write JSON '{}': {}", path.display(), error)
            }
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write '{}': {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Draw(e) => Some(e),
            CliError::Svg(e) => Some(e),
            CliError::Json { error, .. } => Some(error),
            CliError::FileWrite { error, .. } => Some(error),
            CliError::Usage(_) => None,
        }
    }
}

impl From<DrawError> for CliError {
    fn from(e: DrawError) -> Self {
        CliError::Draw(e)
    }
}

impl From<SvgError> for CliError {
    fn from(e: SvgError) -> Self {
        match e {
            SvgError::Draw(e) => CliError::Draw(e),
            other => CliError::Svg(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_draw_error_unwrapped() {
        let err: CliError = SvgError::Draw(DrawError::invalid_shape("bad")).into();
        assert!(matches!(err, CliError::Draw(_)));
    }

    #[test]
    fn test_file_write_message() {
        let err = CliError::FileWrite {
            path: PathBuf::from("out"),
            error: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("Failed to write 'out'"));
    }
}
