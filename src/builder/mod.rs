//! Descriptor assembly.
//!
//! Turns syntax trees into descriptors:
//!
//! ```text
//! Parse ──► Aggregator ──► AssemblerRegistry ──► ClassAssembler, ...
//!              │                                     │
//!              │        NameContext + DocBlockFactory │
//!              ▼                                     ▼
//!        FileDescriptor ◄──────────────────────── Assembled
//!              │
//!              ▼
//!      ProjectDescriptor::add_file
//! ```
//!
//! Assembly never fails a file: declarations without an assembler and
//! duplicates become [`Diagnostic`](crate::descriptor::Diagnostic)s.

mod aggregator;
mod assembler;
mod error;
mod kinds;
mod members;
mod registry;

pub use aggregator::Aggregator;
pub use assembler::{Assembled, Assembler, AssemblyContext};
pub use error::AssemblyError;
pub use kinds::{
    ClassAssembler, ConstantAssembler, FunctionAssembler, InterfaceAssembler, TraitAssembler,
};
pub use registry::AssemblerRegistry;
