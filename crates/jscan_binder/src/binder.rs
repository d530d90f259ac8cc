//! The binder: declaration/use bookkeeping that rides alongside the scanner.

use crate::symbol::{Symbol, SymbolTable};
use jscan_diagnostics::{messages, Warning, WarningCollection};
use tracing::trace;

/// Tracks declared names and collects the warnings produced while
/// scanning one source.
///
/// A binder belongs to exactly one scan; scanning another source needs a
/// fresh binder.
#[derive(Debug, Default)]
pub struct Binder {
    symbols: SymbolTable,
    diagnostics: WarningCollection,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration. Redeclaring a name is ignored: the first
    /// declaration keeps its location and usage flag.
    pub fn declare(&mut self, name: &str, line: u32, column: u32) {
        if self.symbols.declare(name, line, column) {
            trace!(name, line, column, "declared");
        } else {
            trace!(name, line, column, "ignored redeclaration");
        }
    }

    /// Register a reference to `name`. Unknown names produce an
    /// undeclared-variable warning; nothing is inserted for them.
    pub fn mark_used(&mut self, name: &str) {
        if !self.symbols.mark_used(name) {
            self.diagnostics
                .add(Warning::new(&messages::UNDECLARED_VARIABLE_USED_0, &[name]));
        }
    }

    /// Record a warning found by the scanner itself.
    pub fn report(&mut self, warning: Warning) {
        self.diagnostics.add(warning);
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn unused_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.unused_symbols()
    }

    pub fn diagnostics(&self) -> &WarningCollection {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (SymbolTable, WarningCollection) {
        (self.symbols, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_before_declare_warns_and_does_not_insert() {
        let mut binder = Binder::new();
        binder.mark_used("x");
        assert!(binder.symbols().is_empty());
        assert_eq!(binder.diagnostics().len(), 1);
        assert_eq!(
            binder.diagnostics().warnings()[0].message,
            "Undeclared variable used: x"
        );

        binder.declare("x", 2, 10);
        assert_eq!(binder.unused_symbols().count(), 1);
    }
}
