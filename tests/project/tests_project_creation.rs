//! End-to-end: fixture files through `ProjectFactory` into descriptors.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use phpdoc::docblock::{Tag, Type};

use crate::helpers::{file_key, fixture, fqsen, project_from};

#[test]
fn test_create_project_with_functions() {
    let path = fixture("simpleFunction.php");
    let project = project_from(&[path.clone()]);

    assert_eq!(project.name(), "MyProject");
    let file = project.file(&file_key(&path)).expect("file is keyed by its path");
    assert!(file.functions.contains_key(&fqsen("\\simpleFunction()")));
}

#[test]
fn test_create_project_with_class() {
    let path = fixture("Pizza.php");
    let project = project_from(&[path.clone()]);

    let file = project.file(&file_key(&path)).unwrap();
    let pizza = &file.classes[&fqsen("\\Pizza")];
    assert!(pizza.constants.contains_key(&fqsen("\\Pizza::PACKAGING")));
    assert_eq!(pizza.docblock.summary(), "A pizza in the global namespace.");
    assert_eq!(
        file.docblock.summary(),
        "The plain pizza everything else builds on."
    );
}

#[test]
fn test_with_namespaced_class() {
    let path = fixture("Luigi/Pizza.php");
    let project = project_from(&[path.clone()]);

    let file = project.file(&file_key(&path)).unwrap();
    let pizza = &file.classes[&fqsen("\\Luigi\\Pizza")];
    assert_eq!(pizza.parent(), Some(&fqsen("\\Pizza")));
    assert!(pizza.properties.contains_key(&fqsen("\\Luigi\\Pizza::$instance")));

    let ctor = &pizza.methods[&fqsen("\\Luigi\\Pizza::__construct()")];
    assert_eq!(ctor.arguments()[0].name(), "style");
}

#[test]
fn test_docblock_of_method_is_processed() {
    let path = fixture("Luigi/Pizza.php");
    let project = project_from(&[path.clone()]);

    let pizza = &project.file(&file_key(&path)).unwrap().classes[&fqsen("\\Luigi\\Pizza")];
    let create = &pizza.methods[&fqsen("\\Luigi\\Pizza::createInstance()")];

    let params = create.docblock.tags_by_name("param");
    assert_eq!(params.len(), 1);
    assert_eq!(
        params[0].ty(),
        Some(&Type::Object(fqsen("\\Luigi\\Pizza\\Style")))
    );
    assert_eq!(
        create.arguments()[0].documented_type,
        Some(Type::Object(fqsen("\\Luigi\\Pizza\\Style")))
    );
    assert_eq!(create.arguments()[0].type_hint.as_deref(), Some("Pizza\\Style"));
    assert!(matches!(
        create.docblock.return_tag(),
        Some(Tag::Return { ty: Some(ty), .. }) if ty.to_string() == "void"
    ));
}

#[test]
fn test_documented_property_types() {
    let path = fixture("Luigi/Pizza.php");
    let project = project_from(&[path]);
    let pizza = project.class(&fqsen("\\Luigi\\Pizza")).unwrap();

    let style = &pizza.properties[&fqsen("\\Luigi\\Pizza::$style")];
    assert_eq!(
        style.documented_type.as_ref().map(ToString::to_string).as_deref(),
        Some("\\Luigi\\Pizza\\Style|\\Luigi\\Pizza\\Sauce|\\Luigi\\Pizza\\Topping[]")
    );

    let instance = &pizza.properties[&fqsen("\\Luigi\\Pizza::$instance")];
    assert_eq!(
        instance.documented_type,
        Some(Type::Object(fqsen("\\Luigi\\Pizza")))
    );
    assert!(instance.is_static);

    let get_instance = &pizza.methods[&fqsen("\\Luigi\\Pizza::getInstance()")];
    assert_eq!(
        get_instance.documented_return_type,
        Some(Type::Object(fqsen("\\Luigi\\Pizza")))
    );
}

#[test]
fn test_with_used_parent() {
    let path = fixture("Luigi/StyleFactory.php");
    let project = project_from(&[path.clone()]);

    let file = project.file(&file_key(&path)).unwrap();
    assert_eq!(
        file.classes[&fqsen("\\Luigi\\StyleFactory")].parent(),
        Some(&fqsen("\\Luigi\\Pizza\\PizzaComponentFactory"))
    );
}

#[test]
fn test_with_interface() {
    let path = fixture("Luigi/Valued.php");
    let project = project_from(&[path.clone()]);

    let file = project.file(&file_key(&path)).unwrap();
    assert!(file.interfaces.contains_key(&fqsen("\\Luigi\\Valued")));
    assert!(file.classes.is_empty());
}

#[test]
fn test_with_trait() {
    let path = fixture("Luigi/ExampleNestedTrait.php");
    let project = project_from(&[path.clone()]);

    let file = project.file(&file_key(&path)).unwrap();
    assert!(file.traits.contains_key(&fqsen("\\Luigi\\ExampleNestedTrait")));
    assert!(file.classes.is_empty());
}
