//! The analyzer: owns the project and drives assembly of source units.

use std::sync::Arc;

use rayon::prelude::*;
use smol_str::SmolStr;

use crate::builder::Aggregator;
use crate::descriptor::{
    Diagnostic, FileDescriptor, ProjectDescriptor, Visibility, VisibilityFilter,
};
use crate::parser::{PhpParser, SourceParser};

/// One file handed to the analyzer: its path and its text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: Arc<str>,
    pub source: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<Arc<str>>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Options for batch builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Assemble files on the rayon pool before merging them in order.
    pub parallel: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Builds a [`ProjectDescriptor`] from source units.
///
/// The parser and the aggregator are injected; [`Analyzer::default`] uses
/// [`PhpParser`] and the default assembler registry. The project is
/// created on first use.
pub struct Analyzer {
    parser: Arc<dyn SourceParser>,
    aggregator: Aggregator,
    options: AnalyzerOptions,
    project: Option<ProjectDescriptor>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Arc::new(PhpParser), Aggregator::default())
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("aggregator", &self.aggregator)
            .field("options", &self.options)
            .field("project", &self.project.as_ref().map(ProjectDescriptor::name))
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    pub fn new(parser: Arc<dyn SourceParser>, aggregator: Aggregator) -> Self {
        Self {
            parser,
            aggregator,
            options: AnalyzerOptions::default(),
            project: None,
        }
    }

    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> AnalyzerOptions {
        self.options
    }

    pub fn aggregator_mut(&mut self) -> &mut Aggregator {
        &mut self.aggregator
    }

    // =========================================================================
    // Project
    // =========================================================================

    /// Start a new project named `name`, replacing the current one.
    pub fn create_project_descriptor(&mut self, name: impl Into<SmolStr>) -> &mut ProjectDescriptor {
        self.project.insert(ProjectDescriptor::new(name))
    }

    pub fn set_project_descriptor(&mut self, project: ProjectDescriptor) {
        self.project = Some(project);
    }

    /// The current project, created with the default name if there is none.
    pub fn project_descriptor(&mut self) -> &mut ProjectDescriptor {
        self.project.get_or_insert_with(ProjectDescriptor::default)
    }

    fn configured_visibility(&self) -> VisibilityFilter {
        self.project
            .as_ref()
            .map_or_else(VisibilityFilter::default, |project| {
                project.settings().visibility()
            })
    }

    /// Whether any of the bits in `visibility` is enabled in the project
    /// settings.
    pub fn is_visibility_allowed(&self, visibility: VisibilityFilter) -> bool {
        self.configured_visibility().intersects(visibility)
    }

    /// Whether a member survives the final filtering pass.
    pub fn is_member_visible(&self, visibility: Visibility, internal: bool) -> bool {
        self.configured_visibility().allows(visibility, internal)
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Parse and assemble one unit into the project.
    pub fn build_file_using_source_data(&mut self, unit: &SourceUnit) -> &FileDescriptor {
        let file = assemble(self.parser.as_ref(), &self.aggregator, unit);
        self.project
            .get_or_insert_with(ProjectDescriptor::default)
            .add_file(file)
    }

    /// Build every unit, in input order for duplicate resolution, and
    /// return the diagnostics of all of them.
    pub fn build_files(&mut self, units: &[SourceUnit]) -> Vec<Diagnostic> {
        let parser = self.parser.as_ref();
        let aggregator = &self.aggregator;
        let files: Vec<FileDescriptor> = if self.options.parallel {
            units
                .par_iter()
                .map(|unit| assemble(parser, aggregator, unit))
                .collect()
        } else {
            units
                .iter()
                .map(|unit| assemble(parser, aggregator, unit))
                .collect()
        };

        let project = self.project.get_or_insert_with(ProjectDescriptor::default);
        let mut diagnostics = Vec::new();
        for file in files {
            diagnostics.extend_from_slice(project.add_file(file).diagnostics());
        }
        tracing::info!(
            project = project.name(),
            files = units.len(),
            indexed = project.index_len(),
            diagnostics = diagnostics.len(),
            "built project files"
        );
        diagnostics
    }

    /// Apply the visibility filter and hand out the finished project.
    pub fn finish(&mut self) -> ProjectDescriptor {
        let mut project = self.project.take().unwrap_or_default();
        let removed = project.apply_visibility();
        tracing::debug!(
            project = project.name(),
            removed,
            "applied visibility filter"
        );
        project
    }
}

fn assemble(parser: &dyn SourceParser, aggregator: &Aggregator, unit: &SourceUnit) -> FileDescriptor {
    let parse = parser.parse(&unit.path, &unit.source);
    aggregator.assemble_file(&unit.path, &parse)
}

#[cfg(test)]
mod tests;
