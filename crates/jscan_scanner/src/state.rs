//! The result of one complete scan.

use jscan_binder::{Binder, Symbol, SymbolTable};
use jscan_diagnostics::WarningCollection;

/// Everything that survives a scan: the symbol table, the warnings
/// recorded while scanning, and the number of lines consumed.
///
/// Produced by [`Scanner::finish`](crate::Scanner::finish) once the
/// input is exhausted; read-only from then on.
#[derive(Debug, Default)]
pub struct ScanState {
    binder: Binder,
    total_lines: u32,
}

impl ScanState {
    pub(crate) fn new(binder: Binder, total_lines: u32) -> Self {
        Self {
            binder,
            total_lines,
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        self.binder.symbols()
    }

    pub fn unused_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.binder.unused_symbols()
    }

    pub fn warnings(&self) -> &WarningCollection {
        self.binder.diagnostics()
    }

    /// Number of newline characters consumed.
    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    pub fn into_parts(self) -> (SymbolTable, WarningCollection, u32) {
        let (symbols, warnings) = self.binder.into_parts();
        (symbols, warnings, self.total_lines)
    }
}
