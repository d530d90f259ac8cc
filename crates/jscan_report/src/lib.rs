//! jscan_report: End-of-scan reporting.
//!
//! The [`Reporter`] takes the finished [`ScanState`], appends one
//! unused-variable warning per symbol that was never referenced, and
//! produces the [`Report`] written to the stats file.

use jscan_binder::SymbolTable;
use jscan_core::text::Location;
use jscan_core::{JscanError, Result};
use jscan_diagnostics::{messages, Warning, WarningCollection};
use jscan_scanner::ScanState;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// A declared variable as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableEntry {
    pub name: String,
    pub used: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningEntry {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl From<&Warning> for WarningEntry {
    fn from(warning: &Warning) -> Self {
        Self {
            message: warning.message.clone(),
            location: warning.location,
        }
    }
}

/// The contents of the stats file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Every declared variable, in declaration order.
    pub variables: Vec<VariableEntry>,
    pub total_lines: u32,
    /// Scan-time warnings followed by unused-variable warnings.
    pub warnings: Vec<WarningEntry>,
}

impl Report {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut json = self.to_json()?;
        json.push('\n');
        std::fs::write(path, json).map_err(|source| JscanError::WriteReport {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), variables = self.variables.len(), "wrote report");
        Ok(())
    }
}

/// Finalizes a scan.
#[derive(Debug)]
pub struct Reporter {
    symbols: SymbolTable,
    warnings: WarningCollection,
    total_lines: u32,
}

impl Reporter {
    /// Take ownership of a finished scan and append the unused-variable
    /// warnings after everything the scan recorded.
    pub fn new(state: ScanState) -> Self {
        let (symbols, mut warnings, total_lines) = state.into_parts();
        for warning in unused_variable_warnings(&symbols) {
            warnings.add(warning);
        }
        Self {
            symbols,
            warnings,
            total_lines,
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// All warnings, in emission order.
    pub fn warnings(&self) -> &WarningCollection {
        &self.warnings
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    pub fn report(&self) -> Report {
        Report {
            variables: self
                .symbols
                .symbols()
                .map(|symbol| VariableEntry {
                    name: symbol.name.clone(),
                    used: symbol.used,
                })
                .collect(),
            total_lines: self.total_lines,
            warnings: self.warnings.iter().map(WarningEntry::from).collect(),
        }
    }
}

/// One warning per never-referenced symbol, at its declaration.
pub fn unused_variable_warnings(symbols: &SymbolTable) -> impl Iterator<Item = Warning> + '_ {
    symbols.unused_symbols().map(|symbol| {
        Warning::with_location(symbol.location(), &messages::UNUSED_VARIABLE_0, &[symbol.name.as_str()])
    })
}
