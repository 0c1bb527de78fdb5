#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::syntax::{Declaration, Member, NameKind, Statement, UseKind, VisibilityModifier};

fn parse_ok(source: &str) -> SourceFile {
    let parse = parse(source);
    assert!(parse.ok(), "unexpected errors: {:?}", parse.errors);
    parse.into_file()
}

fn declarations(statements: &[Statement]) -> Vec<&Declaration> {
    let mut out = Vec::new();
    for statement in statements {
        match statement {
            Statement::Declaration(decl) => out.push(decl),
            Statement::Namespace(ns) => {
                if let Some(body) = &ns.body {
                    out.extend(declarations(body));
                }
            }
            Statement::Use(_) => {}
        }
    }
    out
}

fn only_class(file: &SourceFile) -> &crate::syntax::ClassNode {
    match declarations(&file.statements).as_slice() {
        [Declaration::Class(class)] => class,
        other => panic!("expected one class, got {:?}", other),
    }
}

#[test]
fn test_namespace_and_use_statements() {
    let file = parse_ok(
        r#"<?php
namespace Luigi\Pizza;

use Luigi\Pizza\PizzaComponentFactory as Factory;
use function Luigi\helper;
use const Luigi\VERSION, Other\Thing;
"#,
    );

    let Statement::Namespace(ns) = &file.statements[0] else {
        panic!("expected namespace");
    };
    let name = ns.name.as_ref().unwrap();
    assert_eq!(name.text, "Luigi\\Pizza");
    assert_eq!(name.kind, NameKind::FullyQualified);
    assert!(ns.body.is_none());
    assert_eq!(ns.line, 2);

    let uses: Vec<_> = file
        .statements
        .iter()
        .filter_map(|s| match s {
            Statement::Use(u) => Some(u),
            _ => None,
        })
        .collect();
    assert_eq!(uses.len(), 3);
    assert_eq!(uses[0].items[0].name.text, "Luigi\\Pizza\\PizzaComponentFactory");
    assert_eq!(uses[0].items[0].visible_name(), "Factory");
    assert_eq!(uses[1].items[0].kind, UseKind::Function);
    assert_eq!(uses[1].items[0].visible_name(), "helper");
    assert_eq!(uses[2].items.len(), 2);
    assert!(uses[2].items.iter().all(|item| item.kind == UseKind::Constant));
    assert_eq!(uses[2].items[1].visible_name(), "Thing");
}

#[test]
fn test_group_use() {
    let file = parse_ok("<?php use Acme\\Model\\{User, Group as Team, function make};");
    let Statement::Use(stmt) = &file.statements[0] else {
        panic!("expected use");
    };
    let names: Vec<_> = stmt
        .items
        .iter()
        .map(|item| (item.name.text.as_str(), item.visible_name(), item.kind))
        .collect();
    assert_eq!(
        names,
        vec![
            ("Acme\\Model\\User", "User", UseKind::Class),
            ("Acme\\Model\\Group", "Team", UseKind::Class),
            ("Acme\\Model\\make", "make", UseKind::Function),
        ]
    );
}

#[test]
fn test_braced_namespaces() {
    let file = parse_ok(
        r#"<?php
namespace A { class One {} }
namespace { function two() {} }
"#,
    );
    assert_eq!(file.statements.len(), 2);
    let Statement::Namespace(global) = &file.statements[1] else {
        panic!("expected namespace");
    };
    assert!(global.name.is_none());
    assert_eq!(global.body.as_ref().map(Vec::len), Some(1));
}

#[test]
fn test_relative_namespace_call_is_not_a_declaration() {
    let file = parse_ok("<?php namespace\\foo(); function bar() {}");
    let decls = declarations(&file.statements);
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].name(), "bar");
}

#[test]
fn test_class_header() {
    let file = parse_ok(
        r#"<?php
/**
 * A factory.
 */
final class StyleFactory extends PizzaComponentFactory implements \Countable, Valued
{
}
"#,
    );
    let class = only_class(&file);
    assert_eq!(class.name, "StyleFactory");
    assert_eq!(class.line, 5);
    assert!(class.modifiers.is_final);
    let parent = class.extends.as_ref().unwrap();
    assert_eq!(parent.text, "PizzaComponentFactory");
    assert_eq!(parent.kind, NameKind::Unqualified);
    assert_eq!(class.implements.len(), 2);
    assert_eq!(class.implements[0].kind, NameKind::FullyQualified);
    assert_eq!(class.implements[0].text, "Countable");
    assert!(class.doc_comment.as_ref().unwrap().text.contains("A factory."));
    assert!(file.doc_comment.is_none());
}

#[test]
fn test_class_members() {
    let file = parse_ok(
        r#"<?php
class Pizza
{
    use Sliceable, \Luigi\Boxed;

    const PACKAGING = 'box';
    public const string SIZE = 'large', CRUST = 'thin';

    /** @var Style */
    private static ?Style $style = null;
    protected $toppings = [1, 2], $sauce;

    abstract public function &setStyle(Style $style, array &$opts = [], string ...$rest): static;

    final public function __construct(private readonly int $slices = 8) {
        if ($slices) { return; }
    }
}
"#,
    );
    let class = only_class(&file);
    let members = &class.members;
    assert_eq!(members.len(), 9);

    let Member::TraitUse(uses) = &members[0] else {
        panic!("expected trait use");
    };
    assert_eq!(uses.names.len(), 2);
    assert_eq!(uses.names[1].kind, NameKind::FullyQualified);

    let Member::Constant(packaging) = &members[1] else {
        panic!("expected constant");
    };
    assert_eq!(packaging.value.as_deref(), Some("'box'"));
    assert!(packaging.type_hint.is_none());

    let Member::Constant(size) = &members[2] else {
        panic!("expected constant");
    };
    assert_eq!(size.type_hint.as_deref(), Some("string"));
    assert_eq!(
        size.modifiers.visibility,
        Some(VisibilityModifier::Public)
    );
    let Member::Constant(crust) = &members[3] else {
        panic!("expected constant");
    };
    assert_eq!(crust.name, "CRUST");
    assert_eq!(crust.type_hint.as_deref(), Some("string"));

    let Member::Property(style) = &members[4] else {
        panic!("expected property");
    };
    assert_eq!(style.name, "style");
    assert_eq!(style.type_hint.as_deref(), Some("?Style"));
    assert!(style.modifiers.is_static);
    assert_eq!(style.default.as_deref(), Some("null"));
    assert!(style.doc_comment.is_some());

    let Member::Property(toppings) = &members[5] else {
        panic!("expected property");
    };
    assert_eq!(toppings.default.as_deref(), Some("[1, 2]"));
    let Member::Property(sauce) = &members[6] else {
        panic!("expected property");
    };
    assert_eq!(sauce.name, "sauce");
    assert_eq!(sauce.modifiers.visibility, Some(VisibilityModifier::Protected));
    assert!(sauce.default.is_none());

    let Member::Method(set_style) = &members[7] else {
        panic!("expected method");
    };
    assert_eq!(set_style.name, "setStyle");
    assert!(set_style.by_ref);
    assert!(set_style.modifiers.is_abstract);
    assert!(!set_style.has_body);
    assert_eq!(set_style.return_type.as_deref(), Some("static"));
    let params = &set_style.params;
    assert_eq!(params.len(), 3);
    assert_eq!(params[0].type_hint.as_deref(), Some("Style"));
    assert!(params[1].by_ref);
    assert_eq!(params[1].default.as_deref(), Some("[]"));
    assert!(params[2].variadic);
    assert_eq!(params[2].name, "rest");

    let Member::Method(ctor) = &members[8] else {
        panic!("expected method");
    };
    assert!(ctor.has_body);
    let promoted = ctor.params[0].promoted.unwrap();
    assert_eq!(promoted.visibility, Some(VisibilityModifier::Private));
    assert!(promoted.is_readonly);
    assert_eq!(ctor.params[0].default.as_deref(), Some("8"));
}

#[test]
fn test_interface_trait_and_function() {
    let file = parse_ok(
        r#"<?php
interface Valued extends Countable, \Stringable
{
    public function getPrice(): int|float;
}

trait ExampleNestedTrait
{
    protected $nested;
}

function &simple(?\DateTime $when = null, (A&B)|null $both = null): void
{
    $x = function () use ($when) { return 1; };
}
"#,
    );
    let decls = declarations(&file.statements);
    assert_eq!(decls.len(), 3);

    let Declaration::Interface(iface) = decls[0] else {
        panic!("expected interface");
    };
    assert_eq!(iface.extends.len(), 2);
    let Member::Method(get_price) = &iface.members[0] else {
        panic!("expected method");
    };
    assert_eq!(get_price.return_type.as_deref(), Some("int|float"));
    assert!(!get_price.has_body);

    let Declaration::Trait(tr) = decls[1] else {
        panic!("expected trait");
    };
    assert_eq!(tr.members.len(), 1);

    let Declaration::Function(func) = decls[2] else {
        panic!("expected function");
    };
    assert!(func.by_ref);
    assert_eq!(func.line, 12);
    assert_eq!(func.params[0].type_hint.as_deref(), Some("?\\DateTime"));
    assert_eq!(func.params[1].type_hint.as_deref(), Some("(A&B)|null"));
    assert_eq!(func.return_type.as_deref(), Some("void"));
}

#[test]
fn test_multiple_file_constants() {
    let file = parse_ok("<?php\nconst A = 1,\n    B = 'two';\n");
    let decls = declarations(&file.statements);
    assert_eq!(decls.len(), 2);
    let Declaration::Constant(b) = decls[1] else {
        panic!("expected constant");
    };
    assert_eq!(b.name, "B");
    assert_eq!(b.line, 3);
    assert_eq!(b.value.as_deref(), Some("'two'"));
}

#[test]
fn test_enum_is_kept_as_declaration() {
    let file = parse_ok("<?php enum Suit: string { case Hearts = 'H'; }\nfunction after() {}");
    let decls = declarations(&file.statements);
    assert_eq!(decls.len(), 2);
    assert_eq!(decls[0].kind(), crate::syntax::DeclarationKind::Enum);
    assert_eq!(decls[1].name(), "after");
}

#[test]
fn test_file_level_doc_comment() {
    let file = parse_ok(
        r#"<?php
/**
 * File summary.
 */

/**
 * Class summary.
 */
class Pizza {}
"#,
    );
    assert!(file.doc_comment.unwrap().text.contains("File summary."));

    let class = {
        let file = parse_ok("<?php\n/** File only. */\nrequire 'x.php';\nclass A {}\n");
        assert!(file.doc_comment.is_some());
        only_class(&file).doc_comment.clone()
    };
    assert!(class.is_none());
}

#[test]
fn test_doc_comment_before_attribute() {
    let file = parse_ok("<?php\n/** Documented. */\n#[Attr(1)]\nclass A {}\n");
    let class = only_class(&file);
    assert!(class.doc_comment.is_some());
    assert_eq!(class.line, 4);
}

#[test]
fn test_statements_are_skipped() {
    let file = parse_ok(
        r#"<?php
echo "hello";
if ($a) { class_exists('Foo'); }
$x = new Foo();
function kept() {}
"#,
    );
    let decls = declarations(&file.statements);
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].name(), "kept");
}

#[test]
fn test_error_recovery_keeps_later_declarations() {
    let parse = parse(
        r#"<?php
class Broken {
    public 123;
}
function fine() {}
"#,
    );
    assert!(!parse.ok());
    let error = &parse.errors[0];
    assert_eq!(error.line, 3);

    let decls = declarations(&parse.file.statements);
    assert!(decls.iter().any(|d| d.name() == "fine"));
}

#[test]
fn test_php_parser_collaborator() {
    let parser: &dyn SourceParser = &PhpParser;
    let parse = parser.parse("a.php", "<?php function a() {}");
    assert!(parse.ok());
    assert_eq!(parse.file.statements.len(), 1);
}
