//! Diagnostics: non-fatal problems found while building the model.
//!
//! Nothing in assembly aborts a run. Skipped declarations, rejected
//! duplicates and recovered syntax errors are reported as [`Diagnostic`]s
//! attached to the file they concern.

use std::fmt;
use std::sync::Arc;

use crate::base::Fqsen;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Path of the file, as supplied by the caller.
    pub path: Arc<str>,
    /// 1-based line, 0 when not tied to a line.
    pub line: u32,
    /// Severity level.
    pub severity: Severity,
    /// Error/warning code (e.g., "E0001").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// The element the diagnostic is about, if any.
    pub element: Option<Fqsen>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(path: impl Into<Arc<str>>, line: u32, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Error, path, line, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(path: impl Into<Arc<str>>, line: u32, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Warning, path, line, message)
    }

    fn new(
        severity: Severity,
        path: impl Into<Arc<str>>,
        line: u32,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            path: path.into(),
            line,
            severity,
            code: None,
            message: message.into(),
            element: None,
        }
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the element this diagnostic is about.
    pub fn with_element(mut self, element: Fqsen) -> Self {
        self.element = Some(element);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path, self.line, self.severity.as_str())?;
        if let Some(code) = &self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes.
///
/// ## Code Ranges
///
/// - **E0001-E0099**: model errors (the element was not registered as written)
/// - **W0001-W0099**: warnings (the element was skipped)
pub mod codes {
    /// Two declarations share an FQSEN; the later one was rejected.
    pub const DUPLICATE_DECLARATION: &str = "E0001";
    /// The parser recovered from a syntax error.
    pub const SYNTAX_ERROR: &str = "E0002";

    /// No assembler is registered for the declaration kind.
    pub const UNSUPPORTED_DECLARATION: &str = "W0001";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics for one file.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the collector, returning the diagnostics in report order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
