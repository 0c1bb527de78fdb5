//! Loading a project from files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::analyzer::{Analyzer, SourceUnit};
use super::error::ProjectError;
use crate::base::constants::is_php_path;
use crate::descriptor::{ProjectDescriptor, VisibilityFilter};

/// Reads source files, analyzes them and returns the finished project.
#[derive(Debug, Default)]
pub struct ProjectFactory {
    analyzer: Analyzer,
    visibility: Option<VisibilityFilter>,
}

impl ProjectFactory {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            visibility: None,
        }
    }

    /// A factory with the default parser and assemblers.
    pub fn create_instance() -> Self {
        Self::default()
    }

    /// Override the visibility filter of projects created from now on.
    pub fn with_visibility(mut self, visibility: VisibilityFilter) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Build a project named `name` from `paths`.
    ///
    /// Directories are searched recursively for PHP sources; files are
    /// taken as given. Paths are processed in the order supplied, with
    /// each directory's files sorted, so duplicate resolution is stable.
    pub fn create(
        &mut self,
        name: &str,
        paths: &[PathBuf],
    ) -> Result<ProjectDescriptor, ProjectError> {
        let mut units = Vec::new();
        for path in paths {
            for file in source_files(path)? {
                let source =
                    fs::read_to_string(&file).map_err(|err| ProjectError::io(&file, err))?;
                units.push(SourceUnit::new(file.to_string_lossy(), source));
            }
        }

        let project = self.analyzer.create_project_descriptor(name);
        if let Some(visibility) = self.visibility {
            project.settings_mut().set_visibility(visibility);
        }
        self.analyzer.build_files(&units);
        Ok(self.analyzer.finish())
    }
}

/// The PHP source files under `path`, sorted.
pub fn source_files(path: &Path) -> Result<Vec<PathBuf>, ProjectError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(match fs::metadata(path) {
            Err(err) => ProjectError::io(path, err),
            Ok(_) => ProjectError::NotSource {
                path: path.to_path_buf(),
            },
        });
    }

    let mut out = Vec::new();
    collect(path, &mut out)?;
    out.sort();
    Ok(out)
}

fn collect(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), ProjectError> {
    let entries = fs::read_dir(dir).map_err(|err| ProjectError::io(dir, err))?;
    for entry in entries {
        let path = entry.map_err(|err| ProjectError::io(dir, err))?.path();
        if path.is_dir() {
            collect(&path, out)?;
        } else if is_php_path(&path) {
            out.push(path);
        }
    }
    Ok(())
}
