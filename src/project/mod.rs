//! Project-level entry points.
//!
//! [`Analyzer`] owns a [`ProjectDescriptor`](crate::descriptor::ProjectDescriptor)
//! and builds it from source units: parsing and assembly run per file
//! (in parallel by default), merging into the project index happens on
//! one thread in input order. [`ProjectFactory`] adds reading from disk.

mod analyzer;
mod error;
mod factory;

pub use analyzer::{Analyzer, AnalyzerOptions, SourceUnit};
pub use error::ProjectError;
pub use factory::{ProjectFactory, source_files};
