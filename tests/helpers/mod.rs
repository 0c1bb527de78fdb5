//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use phpdoc::Fqsen;
use phpdoc::descriptor::ProjectDescriptor;
use phpdoc::project::ProjectFactory;

/// Directory holding the PHP fixture project.
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project")
}

/// Path of one fixture file, relative to the fixture project.
pub fn fixture(relative: &str) -> PathBuf {
    fixture_root().join(relative)
}

/// The key a fixture file gets in `ProjectDescriptor::files`.
pub fn file_key(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

pub fn fqsen(value: &str) -> Fqsen {
    Fqsen::new(value).expect("valid fqsen")
}

/// Build a project from fixture files with the default factory.
pub fn project_from(paths: &[PathBuf]) -> ProjectDescriptor {
    ProjectFactory::create_instance()
        .create("MyProject", paths)
        .expect("fixture project builds")
}
