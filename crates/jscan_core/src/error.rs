//! Fatal errors.
//!
//! Only the edges of the pipeline can fail: reading the input, reading
//! the configuration, writing the report. Scanning itself never fails;
//! malformed source is classified, not rejected.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = JscanError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum JscanError {
    #[error("cannot read input file '{}'", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file '{}' is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("cannot read configuration file '{}'", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration file '{}'", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write report file '{}'", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize report")]
    SerializeReport(#[from] serde_json::Error),
}

impl JscanError {
    /// The file the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            JscanError::ReadInput { path, .. }
            | JscanError::InvalidUtf8 { path }
            | JscanError::ReadConfig { path, .. }
            | JscanError::ParseConfig { path, .. }
            | JscanError::WriteReport { path, .. } => Some(path),
            JscanError::SerializeReport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_read_input_message_names_path() {
        let err = JscanError::ReadInput {
            path: PathBuf::from("missing.js"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "cannot read input file 'missing.js'");
        assert!(err.source().is_some());
        assert_eq!(err.path(), Some(std::path::Path::new("missing.js")));
    }
}
