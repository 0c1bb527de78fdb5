//! Turns a parsed file into a [`FileDescriptor`] and adds it to a project.

use super::assembler::AssemblyContext;
use super::registry::AssemblerRegistry;
use crate::base::Fqsen;
use crate::descriptor::{
    Diagnostic, DiagnosticCollector, FileDescriptor, ProjectDescriptor, codes,
};
use crate::docblock::DocBlockFactory;
use crate::parser::Parse;
use crate::resolve::NameContext;
use crate::syntax::{Declaration, Statement, UseKind, UseStmt};

/// Walks the statements of a file and dispatches every declaration.
///
/// Assembling a file touches nothing shared, so [`Aggregator::assemble_file`]
/// can run for many files at once; merging into the project is the only
/// step that needs exclusive access.
#[derive(Debug, Default)]
pub struct Aggregator {
    registry: AssemblerRegistry,
    docblocks: DocBlockFactory,
}

impl Aggregator {
    pub fn new(registry: AssemblerRegistry, docblocks: DocBlockFactory) -> Self {
        Self {
            registry,
            docblocks,
        }
    }

    pub fn registry(&self) -> &AssemblerRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AssemblerRegistry {
        &mut self.registry
    }

    pub fn docblocks(&self) -> &DocBlockFactory {
        &self.docblocks
    }

    /// Assemble `parse` and add the result to `project`.
    ///
    /// The returned descriptor carries every diagnostic of the file,
    /// including declarations rejected as duplicates by the project.
    pub fn add_file<'p>(
        &self,
        project: &'p mut ProjectDescriptor,
        path: &str,
        parse: &Parse,
    ) -> &'p FileDescriptor {
        project.add_file(self.assemble_file(path, parse))
    }

    /// Build the descriptor of one file without touching any project.
    pub fn assemble_file(&self, path: &str, parse: &Parse) -> FileDescriptor {
        let mut file = FileDescriptor::new(path);
        let mut diagnostics = DiagnosticCollector::new();
        for error in &parse.errors {
            diagnostics.add(
                Diagnostic::error(file.path.clone(), error.line, error.message.as_str())
                    .with_code(codes::SYNTAX_ERROR),
            );
        }

        file.docblock = self.docblocks.create(
            parse.file.doc_comment.as_ref().map(|c| c.text.as_str()),
            &NameContext::default(),
        );

        let mut walker = Walker {
            aggregator: self,
            file: &mut file,
            diagnostics: &mut diagnostics,
        };
        walker.statements(&parse.file.statements, NameContext::default());

        file.diagnostics = diagnostics.finish();
        tracing::debug!(
            path,
            classes = file.classes.len(),
            interfaces = file.interfaces.len(),
            traits = file.traits.len(),
            functions = file.functions.len(),
            constants = file.constants.len(),
            diagnostics = file.diagnostics.len(),
            "assembled file"
        );
        file
    }
}

struct Walker<'a> {
    aggregator: &'a Aggregator,
    file: &'a mut FileDescriptor,
    diagnostics: &'a mut DiagnosticCollector,
}

impl Walker<'_> {
    /// Walk one statement list. An unbraced `namespace X;` switches the
    /// namespace for the statements after it and drops earlier imports.
    fn statements(&mut self, statements: &[Statement], mut names: NameContext) {
        for statement in statements {
            match statement {
                Statement::Namespace(ns) => {
                    let namespace = ns
                        .name
                        .as_ref()
                        .map_or_else(Fqsen::root, |name| Fqsen::root().join(&name.text));
                    self.file.namespaces.insert(namespace.clone());
                    match &ns.body {
                        Some(body) => self.statements(body, NameContext::new(namespace)),
                        None => names = NameContext::new(namespace),
                    }
                }
                Statement::Use(stmt) => self.imports(stmt, &mut names),
                Statement::Declaration(node) => self.declaration(node, &names),
            }
        }
    }

    fn imports(&mut self, stmt: &UseStmt, names: &mut NameContext) {
        for item in stmt.items.iter().filter(|item| item.kind == UseKind::Class) {
            let target = Fqsen::root().join(&item.name.text);
            let alias = item.visible_name();
            names.add_import(alias, target.clone());
            self.file.namespace_aliases.insert(alias.into(), target);
        }
    }

    fn declaration(&mut self, node: &Declaration, names: &NameContext) {
        self.file.namespaces.insert(names.namespace().clone());
        let ctx = AssemblyContext::new(names, &self.aggregator.docblocks);

        let assembled = match self.aggregator.registry.dispatch(node, &ctx) {
            Ok(assembled) => assembled,
            Err(error) => {
                tracing::debug!(
                    path = %self.file.path,
                    kind = %node.kind(),
                    name = node.name(),
                    "declaration skipped"
                );
                self.diagnostics.add(
                    Diagnostic::warning(
                        self.file.path.clone(),
                        node.line(),
                        format!("skipped '{}': {error}", node.name()),
                    )
                    .with_code(codes::UNSUPPORTED_DECLARATION)
                    .with_element(names.qualify(node.name())),
                );
                return;
            }
        };

        let kind = assembled.kind();
        if self.file.element(assembled.fqsen(), kind).is_some() {
            self.diagnostics.add(
                Diagnostic::error(
                    self.file.path.clone(),
                    assembled.line(),
                    format!("{kind} '{}' is declared more than once in this file", assembled.fqsen()),
                )
                .with_code(codes::DUPLICATE_DECLARATION)
                .with_element(assembled.fqsen().clone()),
            );
            return;
        }
        assembled.insert_into(self.file);
    }
}
