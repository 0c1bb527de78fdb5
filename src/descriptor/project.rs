//! The project: all files plus the project-wide FQSEN index.

use std::collections::BTreeSet;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use super::class::ClassDescriptor;
use super::diagnostics::{Diagnostic, codes};
use super::element::{Element, ElementKind};
use super::file::FileDescriptor;
use super::settings::Settings;
use crate::base::Fqsen;
use crate::base::constants::DEFAULT_PROJECT_NAME;

/// Where an indexed FQSEN is declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    pub path: Arc<str>,
    pub kind: ElementKind,
}

/// The root of the model.
///
/// Owns every [`FileDescriptor`] by path. The FQSEN index is a
/// non-owning cross-reference: each entry names the file that declares
/// the element, and lookups go through that file.
#[derive(Clone, Debug)]
pub struct ProjectDescriptor {
    name: SmolStr,
    settings: Settings,
    files: IndexMap<Arc<str>, FileDescriptor>,
    index: FxHashMap<Fqsen, IndexEntry>,
    namespaces: BTreeSet<Fqsen>,
}

impl Default for ProjectDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME)
    }
}

impl ProjectDescriptor {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        let mut namespaces = BTreeSet::new();
        namespaces.insert(Fqsen::root());
        Self {
            name: name.into(),
            settings: Settings::default(),
            files: IndexMap::new(),
            index: FxHashMap::default(),
            namespaces,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<SmolStr>) {
        self.name = name.into();
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    // =========================================================================
    // Files
    // =========================================================================

    /// Add a file and commit all of its index entries together.
    ///
    /// An FQSEN already registered by another file stays with that file:
    /// the later declaration is kept in its own file descriptor but not
    /// indexed, and a diagnostic is recorded on the file.
    /// Re-adding a path first removes the previous version of that file.
    pub fn add_file(&mut self, mut file: FileDescriptor) -> &FileDescriptor {
        self.remove_file(&file.path);

        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        let mut seen = FxHashSet::default();
        // Members follow their owner; a rejected owner takes them along.
        let mut owner_rejected = false;
        for (fqsen, kind) in file.elements() {
            if kind.is_member() {
                if owner_rejected {
                    continue;
                }
            } else {
                owner_rejected = false;
            }
            let taken = !seen.insert(fqsen.clone()) || self.index.contains_key(fqsen);
            if taken {
                owner_rejected = !kind.is_member();
                rejected.push((fqsen.clone(), kind));
            } else {
                accepted.push((fqsen.clone(), kind));
            }
        }

        let diagnostics: Vec<Diagnostic> = rejected
            .into_iter()
            .map(|(fqsen, kind)| self.duplicate_diagnostic(&file, fqsen, kind))
            .collect();
        for diagnostic in &diagnostics {
            tracing::warn!(
                path = %file.path,
                element = ?diagnostic.element,
                "duplicate declaration rejected"
            );
        }
        file.diagnostics.extend(diagnostics);

        for (fqsen, kind) in accepted {
            self.index.insert(
                fqsen,
                IndexEntry {
                    path: file.path.clone(),
                    kind,
                },
            );
        }
        for namespace in &file.namespaces {
            self.add_namespace(namespace.clone());
        }
        let (index, _) = self.files.insert_full(file.path.clone(), file);
        &self.files[index]
    }

    fn duplicate_diagnostic(
        &self,
        file: &FileDescriptor,
        fqsen: Fqsen,
        kind: ElementKind,
    ) -> Diagnostic {
        let line = file
            .element(&fqsen, kind)
            .map(|element| element.line())
            .unwrap_or(0);
        let message = match self.index.get(&fqsen) {
            Some(first) => format!(
                "{kind} '{fqsen}' is already declared in '{}'",
                first.path
            ),
            None => format!("{kind} '{fqsen}' is declared more than once in this file"),
        };
        Diagnostic::error(file.path.clone(), line, message)
            .with_code(codes::DUPLICATE_DECLARATION)
            .with_element(fqsen)
    }

    /// Remove a file and the index entries pointing into it.
    pub fn remove_file(&mut self, path: &str) -> Option<FileDescriptor> {
        let file = self.files.shift_remove(path)?;
        self.index.retain(|_, entry| &*entry.path != path);
        Some(file)
    }

    pub fn files(&self) -> &IndexMap<Arc<str>, FileDescriptor> {
        &self.files
    }

    pub fn file(&self, path: &str) -> Option<&FileDescriptor> {
        self.files.get(path)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    // =========================================================================
    // Index
    // =========================================================================

    /// Look up any element through the index.
    pub fn find(&self, fqsen: &Fqsen) -> Option<Element<'_>> {
        let entry = self.index.get(fqsen)?;
        self.files.get(&entry.path)?.element(fqsen, entry.kind)
    }

    pub fn index_entry(&self, fqsen: &Fqsen) -> Option<&IndexEntry> {
        self.index.get(fqsen)
    }

    pub fn contains(&self, fqsen: &Fqsen) -> bool {
        self.index.contains_key(fqsen)
    }

    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    /// All indexed FQSENs, sorted.
    pub fn indexed(&self) -> Vec<&Fqsen> {
        let mut out: Vec<_> = self.index.keys().collect();
        out.sort();
        out
    }

    pub fn class(&self, fqsen: &Fqsen) -> Option<&ClassDescriptor> {
        match self.find(fqsen)? {
            Element::Class(class) => Some(class),
            _ => None,
        }
    }

    /// The parent class of `class`, if it is declared in the project.
    pub fn parent_of(&self, class: &Fqsen) -> Option<&ClassDescriptor> {
        let parent = self.class(class)?.parent.as_ref()?;
        self.class(parent)
    }

    /// The `extends` chain of `class`, nearest first.
    ///
    /// Stops at the first parent not declared in the project (which is
    /// still listed) and at a cycle.
    pub fn ancestors(&self, class: &Fqsen) -> Vec<Fqsen> {
        let mut out = Vec::new();
        let mut seen = FxHashSet::default();
        seen.insert(class.clone());
        let mut current = self.class(class);
        while let Some(parent) = current.and_then(|c| c.parent.as_ref()) {
            if !seen.insert(parent.clone()) {
                break;
            }
            out.push(parent.clone());
            current = self.class(parent);
        }
        out
    }

    // =========================================================================
    // Namespaces
    // =========================================================================

    /// Register a namespace and all enclosing namespaces.
    pub fn add_namespace(&mut self, namespace: Fqsen) {
        let mut current = Some(namespace);
        while let Some(ns) = current {
            current = ns.parent();
            if !self.namespaces.insert(ns) {
                break;
            }
        }
    }

    /// Known namespaces, sorted; always includes the global one.
    pub fn namespaces(&self) -> &BTreeSet<Fqsen> {
        &self.namespaces
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Drop members not allowed by the configured visibility, along with
    /// their index entries. Returns the number of removed members.
    pub fn apply_visibility(&mut self) -> usize {
        let filter = self.settings.visibility();
        let mut removed = 0;
        for file in self.files.values_mut() {
            for fqsen in file.retain_visible_members(filter) {
                if self
                    .index
                    .get(&fqsen)
                    .is_some_and(|entry| entry.path == file.path)
                {
                    self.index.remove(&fqsen);
                }
                removed += 1;
            }
        }
        removed
    }
}
