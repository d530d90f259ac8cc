//! Symbol and symbol table definitions.

use indexmap::map::Entry;
use indexmap::IndexMap;
use jscan_core::text::Location;
use rustc_hash::FxBuildHasher;

/// A declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    /// Line of the declaration (1-based).
    pub declared_line: u32,
    /// Byte offset of the declared name, standing in for a column.
    pub declared_column: u32,
    /// Whether the name was referenced after its declaration.
    pub used: bool,
}

impl Symbol {
    pub fn new(name: String, declared_line: u32, declared_column: u32) -> Self {
        Self {
            name,
            declared_line,
            declared_column,
            used: false,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.declared_line, self.declared_column)
    }
}

/// A symbol table maps names to symbols, preserving declaration order.
///
/// Names are unique and the table is append-only.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    table: IndexMap<String, Symbol, FxBuildHasher>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            table: IndexMap::default(),
        }
    }

    /// Record a declaration. Returns `false` if the name was already
    /// declared, in which case the existing symbol is left untouched.
    pub fn declare(&mut self, name: &str, line: u32, column: u32) -> bool {
        match self.table.entry(name.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Symbol::new(name.to_string(), line, column));
                true
            }
        }
    }

    /// Mark a declared name as used. Returns `false` if no such name exists.
    pub fn mark_used(&mut self, name: &str) -> bool {
        match self.table.get_mut(name) {
            Some(symbol) => {
                symbol.used = true;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.table.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// All symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.table.values()
    }

    /// Symbols never referenced after their declaration, in declaration order.
    pub fn unused_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.table.values().filter(|symbol| !symbol.used)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl IntoIterator for SymbolTable {
    type Item = Symbol;
    type IntoIter = indexmap::map::IntoValues<String, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.into_values()
    }
}
