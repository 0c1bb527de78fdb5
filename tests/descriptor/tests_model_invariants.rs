//! Structural properties of a fully built project.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use phpdoc::Fqsen;
use phpdoc::descriptor::{ElementKind, VisibilityFilter};
use phpdoc::project::ProjectFactory;
use rustc_hash::FxHashMap;

use crate::helpers::{fixture_root, fqsen, project_from};

#[test]
fn test_every_fqsen_is_fully_qualified() {
    let project = project_from(&[fixture_root()]);
    for fqsen in project.indexed() {
        assert!(fqsen.as_str().starts_with('\\'), "{fqsen} is not qualified");
    }
}

#[test]
fn test_each_declaration_lives_in_one_file() {
    let project = project_from(&[fixture_root()]);

    let mut owners: FxHashMap<&Fqsen, Vec<&str>> = FxHashMap::default();
    for file in project.files().values() {
        for (fqsen, kind) in file.elements() {
            if !kind.is_member() {
                owners.entry(fqsen).or_default().push(file.path());
            }
        }
    }

    for (fqsen, paths) in &owners {
        assert_eq!(paths.len(), 1, "{fqsen} declared in {paths:?}");
        let entry = project.index_entry(fqsen).unwrap();
        assert_eq!(&*entry.path, paths[0]);
    }
    assert_eq!(
        project.index_entry(&fqsen("\\Luigi\\Valued")).unwrap().kind,
        ElementKind::Interface
    );
}

#[test]
fn test_index_points_at_existing_elements() {
    let project = project_from(&[fixture_root()]);
    for fqsen in project.indexed() {
        let element = project.find(fqsen).expect("indexed element resolves");
        assert_eq!(element.fqsen(), fqsen);
    }
}

#[test]
fn test_namespaces_cover_the_tree() {
    let project = project_from(&[fixture_root()]);
    let namespaces: Vec<_> = project.namespaces().iter().map(Fqsen::as_str).collect();
    assert_eq!(namespaces, ["\\", "\\Luigi", "\\Luigi\\Pizza"]);
}

#[test]
fn test_internal_members_follow_visibility() {
    let reset = fqsen("\\Luigi\\Pizza\\PizzaComponentFactory::reset()");

    let project = project_from(&[fixture_root()]);
    assert!(!project.contains(&reset));
    assert!(project.contains(&fqsen(
        "\\Luigi\\Pizza\\PizzaComponentFactory::calculatePrice()"
    )));

    let project = ProjectFactory::create_instance()
        .with_visibility(VisibilityFilter::ALL)
        .create("Everything", &[fixture_root()])
        .unwrap();
    assert!(project.contains(&reset));
}
