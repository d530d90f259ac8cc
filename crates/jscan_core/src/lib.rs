//! jscan_core: Core types shared by every stage of the jscan pipeline.
//!
//! Provides source positions and the error type returned by the
//! fallible (I/O and configuration) edges of the workspace.

pub mod error;
pub mod text;

// Re-export commonly used types
pub use error::{JscanError, Result};
pub use text::{Location, TextPos, TextSpan};
