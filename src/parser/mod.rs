//! Declaration-level parser for PHP
//!
//! This is the "parser collaborator" of the descriptor builder: it turns
//! source text into the [`crate::syntax`] tree the assemblers consume.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → SourceFile (namespaces, imports, declarations, members)
//!     ↓
//! Builder → Descriptors
//! ```
//!
//! Only declarations are modelled. Bodies are skipped with balanced
//! delimiter matching, so unknown constructs never abort a file.

#[allow(clippy::module_inception)]
mod parser;

mod lexer;
mod syntax_kind;

pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse};
pub use syntax_kind::SyntaxKind;

use crate::syntax::SourceFile;

/// The parser collaborator seen by the analyzer.
///
/// Implementations turn one file's text into a syntax tree plus the
/// syntax errors they recovered from.
pub trait SourceParser: Send + Sync {
    fn parse(&self, path: &str, text: &str) -> Parse;
}

/// Default [`SourceParser`] backed by [`parse`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PhpParser;

impl SourceParser for PhpParser {
    fn parse(&self, _path: &str, text: &str) -> Parse {
        parse(text)
    }
}

impl Parse {
    /// Consume the result, keeping only the tree.
    pub fn into_file(self) -> SourceFile {
        self.file
    }
}

#[cfg(test)]
mod tests;
