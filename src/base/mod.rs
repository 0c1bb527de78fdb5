//! Foundation types for the descriptor toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Fqsen`] - Fully qualified structural element names
//! - [`LineIndex`] - Byte offset to line conversion
//! - Domain constants (separators, default project name, file extensions)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod fqsen;
mod span;

pub use fqsen::{Fqsen, FqsenError};
pub use span::LineIndex;

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
