//! Error types for descriptor assembly.

use thiserror::Error;

use crate::syntax::DeclarationKind;

/// Errors raised while turning a declaration into a descriptor.
///
/// Neither aborts a run: the aggregator turns them into diagnostics and
/// moves on to the next declaration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// No assembler is registered for this kind of declaration.
    #[error("no assembler registered for {kind} declarations (line {line})")]
    UnsupportedDeclarationKind { kind: DeclarationKind, line: u32 },

    /// An assembler was handed a declaration of another kind.
    #[error("assembler for {expected} declarations received a {found}")]
    KindMismatch {
        expected: DeclarationKind,
        found: DeclarationKind,
    },
}
