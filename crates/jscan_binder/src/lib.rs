//! jscan_binder: The flat symbol table and declaration/use tracking.
//!
//! The binder records every `var`/`let`/`const` declaration the scanner
//! reports, marks names as used when they are referenced, and warns on
//! references to names that were never declared.

mod binder;
mod symbol;

pub use binder::Binder;
pub use symbol::{Symbol, SymbolTable};
