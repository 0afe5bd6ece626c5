//! Foundation types for the ION reader.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`DocumentLine`] - 0-based source line with 1-based display
//! - Format constants (signs, text block markers, parser directives)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod position;

pub use position::DocumentLine;
