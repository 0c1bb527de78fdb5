//! # phpdoc-base
//!
//! Core library that turns PHP source into a documentation model: every
//! class, interface, trait, function and constant as a descriptor keyed by
//! its fully qualified structural element name (FQSEN).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project    → Analyzer, ProjectFactory (batch builds, visibility filter)
//!   ↓
//! builder    → Assemblers, AssemblerRegistry, Aggregator
//!   ↓
//! descriptor → Project/File/Class/... descriptors, Settings, Diagnostic
//!   ↓
//! docblock   → Doc comment tokenizer, tags, type expressions
//!   ↓
//! resolve    → Name resolution against namespace and imports
//!   ↓
//! parser     → Logos lexer, recursive-descent declaration parser
//!   ↓
//! syntax     → Declaration-level syntax tree
//!   ↓
//! base       → Primitives (Fqsen, LineIndex, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → resolve → docblock →
// descriptor → builder → project)
// ============================================================================

/// Foundation types: Fqsen, LineIndex, constants
pub mod base;

/// Syntax: declaration nodes and reference names
pub mod syntax;

/// Parser: Logos lexer, recursive-descent parser
pub mod parser;

/// Name resolution: namespace and import context
pub mod resolve;

/// Doc comments: tokenizer, tags, type expressions
pub mod docblock;

/// Descriptor model
pub mod descriptor;

/// Assembly of descriptors from syntax trees
pub mod builder;

/// Analyzer and project loading
pub mod project;

// Re-export foundation types
pub use base::{Fqsen, FqsenError, LineIndex, TextRange, TextSize};
