//! jscan_options: Scan configuration.
//!
//! Options come from an optional JSON file (camelCase keys, every key
//! optional) and are then overridden by command-line flags.
//!
//! ```json
//! { "checkSemicolons": true, "maxTokenLength": 100, "statsPath": "out/stats.json" }
//! ```

use jscan_core::{JscanError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The report file written when no other path is configured.
pub const DEFAULT_STATS_PATH: &str = "stats.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ScanOptions {
    /// Run the missing-semicolon lint.
    pub check_semicolons: bool,
    /// Clip token text to this many characters.
    pub max_token_length: Option<usize>,
    /// Where to write the report.
    pub stats_path: Option<String>,
    /// Print the token trace; warnings are printed regardless.
    pub trace: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            check_semicolons: false,
            max_token_length: None,
            stats_path: None,
            trace: true,
        }
    }
}

impl ScanOptions {
    pub fn stats_path(&self) -> PathBuf {
        PathBuf::from(self.stats_path.as_deref().unwrap_or(DEFAULT_STATS_PATH))
    }
}

/// Parse options from a JSON string.
pub fn parse_options(content: &str) -> std::result::Result<ScanOptions, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse options from a JSON file.
pub fn parse_options_file(path: &Path) -> Result<ScanOptions> {
    let content = std::fs::read_to_string(path).map_err(|source| JscanError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    parse_options(&content).map_err(|source| JscanError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}
