//! jscan_diagnostics: Warning messages and the warning list.
//!
//! Every recoverable condition found while scanning is recorded as a
//! [`Warning`]. Warnings are built from static [`DiagnosticMessage`]
//! templates so that each kind has a stable code and wording.

use jscan_core::text::Location;
use std::fmt;

/// The kind of condition a warning reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    UndeclaredVariable,
    UnusedVariable,
    MissingSemicolon,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::UndeclaredVariable => write!(f, "undeclared-variable"),
            WarningKind::UnusedVariable => write!(f, "unused-variable"),
            WarningKind::MissingSemicolon => write!(f, "missing-semicolon"),
        }
    }
}

/// A diagnostic message template with a code and kind.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The stable warning code.
    pub code: u32,
    /// What the message reports.
    pub kind: WarningKind,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized warning with resolved message text and optional location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub code: u32,
    pub kind: WarningKind,
    pub message: String,
    pub location: Option<Location>,
}

impl Warning {
    /// Create a warning without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            code: message.code,
            kind: message.kind,
            message: format_message(message.message, args),
            location: None,
        }
    }

    /// Create a warning pinned to a source location.
    pub fn with_location(location: Location, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            location: Some(location),
            ..Self::new(message, args)
        }
    }
}

/// The trace line for this warning, e.g. `[WARNING] Unused variable: x`.
impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[WARNING] {}", self.message)
    }
}

/// Format a message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Append-only list of warnings, in emission order.
#[derive(Debug, Clone, Default)]
pub struct WarningCollection {
    warnings: Vec<Warning>,
}

impl WarningCollection {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    pub fn add(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Warnings recorded at or after index `start`.
    ///
    /// Callers that forward warnings as they appear remember `len()` and
    /// ask for everything since.
    pub fn since(&self, start: usize) -> &[Warning] {
        self.warnings.get(start..).unwrap_or(&[])
    }

    pub fn count_of(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.warnings.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }
}

impl<'a> IntoIterator for &'a WarningCollection {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.iter()
    }
}

// ============================================================================
// Warning messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $kind:ident, $msg:expr) => {
            DiagnosticMessage { code: $code, kind: WarningKind::$kind, message: $msg }
        };
    }

    pub const UNDECLARED_VARIABLE_USED_0: DiagnosticMessage = diag!(101, UndeclaredVariable, "Undeclared variable used: {0}");
    pub const UNUSED_VARIABLE_0: DiagnosticMessage = diag!(102, UnusedVariable, "Unused variable: {0}");
    pub const MISSING_SEMICOLON: DiagnosticMessage = diag!(103, MissingSemicolon, "Missing semicolon");
}
