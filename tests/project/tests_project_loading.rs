//! Loading projects from directories on disk.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use phpdoc::descriptor::{ElementKind, VisibilityFilter, codes};
use phpdoc::project::{ProjectError, ProjectFactory, source_files};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::helpers::{file_key, fixture_root, fqsen, project_from};

fn write(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_directory_is_loaded_recursively() {
    let project = project_from(&[fixture_root()]);

    let php_files = WalkDir::new(fixture_root())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "php"))
        .count();
    assert_eq!(project.file_count(), php_files);

    assert_eq!(
        project.ancestors(&fqsen("\\Luigi\\StyleFactory")),
        vec![fqsen("\\Luigi\\Pizza\\PizzaComponentFactory")]
    );
    assert_eq!(
        project.ancestors(&fqsen("\\Luigi\\Pizza")),
        vec![fqsen("\\Pizza")]
    );
    assert!(project.namespaces().contains(&fqsen("\\Luigi\\Pizza")));
}

#[test]
fn test_source_files_are_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    let b = write(&dir, "b.php", "<?php\n");
    let a = write(&dir, "nested/a.inc", "<?php\n");
    write(&dir, "notes.txt", "not php");

    let files = source_files(dir.path()).unwrap();
    let mut expected = vec![b, a];
    expected.sort();
    assert_eq!(files, expected);
}

#[test]
fn test_first_file_wins_across_directory() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "a.php", "<?php\nnamespace Dup;\nclass Shared {}\n");
    let second = write(&dir, "b.php", "<?php\nnamespace Dup;\nclass Shared {}\n");

    let project = project_from(&[dir.path().to_path_buf()]);
    let entry = project.index_entry(&fqsen("\\Dup\\Shared")).unwrap();
    assert_eq!(&*entry.path, file_key(&first));
    assert_eq!(entry.kind, ElementKind::Class);

    let rejected = project.file(&file_key(&second)).unwrap();
    assert!(rejected.classes.contains_key(&fqsen("\\Dup\\Shared")));
    assert_eq!(
        rejected.diagnostics()[0].code.as_deref(),
        Some(codes::DUPLICATE_DECLARATION)
    );
}

#[test]
fn test_duplicate_class_members_stay_with_the_winner() {
    let dir = TempDir::new().unwrap();
    let first = write(
        &dir,
        "a.php",
        "<?php\n/** The first one. */\nclass Shared {\n    public function keep() {}\n}\n",
    );
    let second = write(
        &dir,
        "b.php",
        "<?php\n/**\n * The second one.\n */\nclass Shared {\n    public function keep() {}\n    public function extra() {}\n}\n",
    );

    let project = project_from(&[dir.path().to_path_buf()]);
    assert_eq!(
        project.class(&fqsen("\\Shared")).unwrap().docblock.summary(),
        "The first one."
    );
    assert_eq!(
        &*project.index_entry(&fqsen("\\Shared::keep()")).unwrap().path,
        file_key(&first)
    );
    assert!(!project.contains(&fqsen("\\Shared::extra()")));

    let rejected = project.file(&file_key(&second)).unwrap();
    let shared = &rejected.classes[&fqsen("\\Shared")];
    assert_eq!(shared.docblock.summary(), "The second one.");
    assert_eq!(shared.methods.len(), 2);
    assert_eq!(rejected.diagnostics().len(), 1);
    assert_eq!(rejected.diagnostics()[0].element, Some(fqsen("\\Shared")));
}

#[test]
fn test_factory_visibility_override() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "a.php",
        "<?php\nclass A {\n    public $kept;\n    private $dropped;\n}\n",
    );

    let project = ProjectFactory::create_instance()
        .with_visibility(VisibilityFilter::PUBLIC)
        .create("Public API", &[dir.path().to_path_buf()])
        .unwrap();
    let class = project.class(&fqsen("\\A")).unwrap();
    assert!(class.properties.contains_key(&fqsen("\\A::$kept")));
    assert!(!class.properties.contains_key(&fqsen("\\A::$dropped")));
    assert_eq!(project.settings().visibility(), VisibilityFilter::PUBLIC);
}

#[test]
fn test_missing_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.php");

    let err = ProjectFactory::create_instance()
        .create("Broken", &[missing.clone()])
        .unwrap_err();
    match err {
        ProjectError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}
