//! Configuration errors
//!
//! The simulation itself never fails; only loading tuning/settings documents can.

use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading or validating configuration
#[derive(Debug)]
pub enum Error {
    /// Reading a config file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A config document was not valid JSON for the target type
    Parse(serde_json::Error),
    /// A tuning value is outside the range the simulation can handle
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Error::Parse(e) => write!(f, "invalid config: {e}"),
            Error::InvalidTuning { field, reason } => {
                write!(f, "invalid tuning value `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Parse(e) => Some(e),
            Error::InvalidTuning { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e)
    }
}

/// Read a config file to a string, tagging failures with the path
pub(crate) fn read_config(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_tuning() {
        let e = Error::InvalidTuning {
            field: "player_radius",
            reason: "must be positive",
        };
        assert_eq!(
            e.to_string(),
            "invalid tuning value `player_radius`: must be positive"
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_config(std::path::Path::new("/nonexistent/tuning.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/tuning.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
