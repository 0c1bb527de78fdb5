//! The descriptor model.
//!
//! Descriptors are the semantic representation of declared elements,
//! independent of the syntax they came from. Every element is addressed
//! by its [`Fqsen`](crate::base::Fqsen); collections are keyed by it and
//! keep declaration order.
//!
//! ```text
//! ProjectDescriptor
//! ├── files: path → FileDescriptor
//! │   ├── classes / interfaces / traits → constants, properties, methods
//! │   └── functions, constants
//! └── index: Fqsen → (path, kind)      non-owning
//! ```

mod class;
mod diagnostics;
mod element;
mod file;
mod function;
mod member;
mod project;
mod settings;
mod visibility;

pub use class::{ClassDescriptor, ClassLike, FqsenSet, InterfaceDescriptor, TraitDescriptor};
pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use element::{Element, ElementKind};
pub use file::FileDescriptor;
pub use function::{ArgumentDescriptor, FunctionDescriptor, MethodDescriptor};
pub use member::{ConstantDescriptor, PropertyDescriptor};
pub use project::{IndexEntry, ProjectDescriptor};
pub use settings::Settings;
pub use visibility::{Visibility, VisibilityFilter};
