//! Documentation comments.
//!
//! A raw `/** ... */` comment goes through two steps:
//!
//! 1. The [`CommentTokenizer`] splits it into summary, description and raw
//!    `(name, body)` tag occurrences.
//! 2. The [`DocBlockFactory`] interprets each occurrence as a [`Tag`],
//!    parsing embedded type expressions into [`Type`] trees whose class
//!    names are resolved against the declaring element's
//!    [`NameContext`](crate::resolve::NameContext).

mod factory;
mod tag;
mod tokenizer;
mod types;

pub use factory::{DocBlock, DocBlockFactory};
pub use tag::{PropertyMode, Tag};
pub use tokenizer::{CommentTokenizer, DocCommentTokenizer, RawDocBlock, RawTag};
pub use types::Type;
