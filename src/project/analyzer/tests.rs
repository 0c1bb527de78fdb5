#![allow(clippy::unwrap_used, clippy::expect_used)]

use rstest::rstest;

use super::*;
use crate::base::Fqsen;
use crate::parser::Parse;
use crate::syntax::{Declaration, FunctionNode, SourceFile, Statement};

fn fqsen(value: &str) -> Fqsen {
    Fqsen::new(value).unwrap()
}

/// Ignores the text and always yields one function named after the path.
struct StubParser;

impl SourceParser for StubParser {
    fn parse(&self, path: &str, _text: &str) -> Parse {
        let name = path.trim_end_matches(".php");
        Parse {
            file: SourceFile {
                doc_comment: None,
                statements: vec![Statement::Declaration(Declaration::Function(FunctionNode {
                    name: name.into(),
                    line: 1,
                    doc_comment: None,
                    by_ref: false,
                    params: Vec::new(),
                    return_type: None,
                }))],
            },
            errors: Vec::new(),
        }
    }
}

#[test]
fn test_project_is_created_on_demand() {
    let mut analyzer = Analyzer::default();
    assert_eq!(analyzer.project_descriptor().name(), "Untitled project");

    analyzer.create_project_descriptor("My Descriptor");
    assert_eq!(analyzer.project_descriptor().name(), "My Descriptor");

    analyzer.set_project_descriptor(ProjectDescriptor::new("Other"));
    assert_eq!(analyzer.finish().name(), "Other");
}

#[rstest]
#[case(VisibilityFilter::PUBLIC, true)]
#[case(VisibilityFilter::PRIVATE, false)]
#[case(VisibilityFilter::PRIVATE | VisibilityFilter::PUBLIC, true)]
#[case(VisibilityFilter::INTERNAL, false)]
fn test_visibility_allowed(#[case] visibility: VisibilityFilter, #[case] allowed: bool) {
    let mut analyzer = Analyzer::default();
    let mut project = ProjectDescriptor::new("My Descriptor");
    project
        .settings_mut()
        .set_visibility(VisibilityFilter::PUBLIC);
    analyzer.set_project_descriptor(project);

    assert_eq!(analyzer.is_visibility_allowed(visibility), allowed);
}

#[test]
fn test_member_visibility_respects_internal() {
    let mut analyzer = Analyzer::default();
    assert!(analyzer.is_member_visible(Visibility::Private, false));
    assert!(!analyzer.is_member_visible(Visibility::Public, true));

    analyzer
        .project_descriptor()
        .settings_mut()
        .set_visibility(VisibilityFilter::ALL);
    assert!(analyzer.is_member_visible(Visibility::Public, true));
}

#[test]
fn test_build_file_using_source_data() {
    let mut analyzer = Analyzer::default();
    let unit = SourceUnit::new("simple.php", "<?php\nfunction simpleFunction() {}\n");
    let file = analyzer.build_file_using_source_data(&unit);
    assert_eq!(file.path(), "simple.php");
    assert!(file.functions.contains_key(&fqsen("\\simpleFunction()")));
    assert!(analyzer.project_descriptor().contains(&fqsen("\\simpleFunction()")));
}

#[test]
fn test_injected_parser_is_used() {
    let mut analyzer = Analyzer::new(Arc::new(StubParser), Aggregator::default());
    analyzer.build_files(&[SourceUnit::new("alpha.php", ""), SourceUnit::new("beta.php", "")]);
    let project = analyzer.finish();
    assert!(project.contains(&fqsen("\\alpha()")));
    assert!(project.contains(&fqsen("\\beta()")));
}

#[rstest]
#[case(true)]
#[case(false)]
fn test_duplicates_follow_input_order(#[case] parallel: bool) {
    let units: Vec<_> = (0..16)
        .map(|i| SourceUnit::new(format!("f{i:02}.php"), "<?php\nclass Shared {}\n"))
        .collect();
    let mut analyzer = Analyzer::default().with_options(AnalyzerOptions { parallel });
    let diagnostics = analyzer.build_files(&units);
    assert_eq!(diagnostics.len(), 15);

    let project = analyzer.finish();
    assert_eq!(project.file_count(), 16);
    assert_eq!(&*project.index_entry(&fqsen("\\Shared")).unwrap().path, "f00.php");
}

#[test]
fn test_finish_filters_members() {
    let mut analyzer = Analyzer::default();
    analyzer
        .create_project_descriptor("Pizza")
        .settings_mut()
        .set_visibility(VisibilityFilter::PUBLIC | VisibilityFilter::PROTECTED);
    analyzer.build_files(&[SourceUnit::new(
        "Pizza.php",
        r#"<?php
class Pizza
{
    private static $instance;
    protected $size;
    public function bake() {}
    private function burn() {}
    /** @internal */
    public function secret() {}
}
function helper() {}
"#,
    )]);

    let project = analyzer.finish();
    let pizza = project.class(&fqsen("\\Pizza")).unwrap();
    let members: Vec<_> = pizza
        .properties
        .keys()
        .chain(pizza.methods.keys())
        .map(Fqsen::as_str)
        .collect();
    assert_eq!(members, ["\\Pizza::$size", "\\Pizza::bake()"]);
    assert!(project.contains(&fqsen("\\helper()")));
    assert!(!project.contains(&fqsen("\\Pizza::burn()")));
}
