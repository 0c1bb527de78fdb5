//! The descriptor of one source file.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;

use super::class::{ClassDescriptor, ClassLike, InterfaceDescriptor, TraitDescriptor};
use super::diagnostics::Diagnostic;
use super::element::{Element, ElementKind};
use super::function::FunctionDescriptor;
use super::member::ConstantDescriptor;
use super::visibility::VisibilityFilter;
use crate::base::Fqsen;
use crate::docblock::DocBlock;

/// Everything declared in one file, keyed by FQSEN.
///
/// A declaration belongs to exactly one file; the project index only
/// refers back to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Path as supplied by the caller.
    pub path: Arc<str>,
    /// The file-level doc comment.
    pub docblock: DocBlock,
    /// Namespaces declared in the file, in order.
    pub namespaces: IndexSet<Fqsen>,
    /// Class imports (`use X as Y;`), alias to target.
    pub namespace_aliases: IndexMap<SmolStr, Fqsen>,
    pub classes: IndexMap<Fqsen, ClassDescriptor>,
    pub interfaces: IndexMap<Fqsen, InterfaceDescriptor>,
    pub traits: IndexMap<Fqsen, TraitDescriptor>,
    pub functions: IndexMap<Fqsen, FunctionDescriptor>,
    pub constants: IndexMap<Fqsen, ConstantDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileDescriptor {
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self {
            path: path.into(),
            docblock: DocBlock::empty(),
            namespaces: IndexSet::new(),
            namespace_aliases: IndexMap::new(),
            classes: IndexMap::new(),
            interfaces: IndexMap::new(),
            traits: IndexMap::new(),
            functions: IndexMap::new(),
            constants: IndexMap::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Every element of the file with its kind, members after their
    /// owner, in declaration order within each collection.
    pub fn elements(&self) -> Vec<(&Fqsen, ElementKind)> {
        let mut out = Vec::new();
        for class in self.classes.values() {
            out.push((&class.fqsen, ElementKind::Class));
            push_members(&mut out, class);
        }
        for interface in self.interfaces.values() {
            out.push((&interface.fqsen, ElementKind::Interface));
            push_members(&mut out, interface);
        }
        for tr in self.traits.values() {
            out.push((&tr.fqsen, ElementKind::Trait));
            push_members(&mut out, tr);
        }
        out.extend(self.functions.keys().map(|f| (f, ElementKind::Function)));
        out.extend(self.constants.keys().map(|c| (c, ElementKind::Constant)));
        out
    }

    /// Number of top-level declarations.
    pub fn declaration_count(&self) -> usize {
        self.classes.len()
            + self.interfaces.len()
            + self.traits.len()
            + self.functions.len()
            + self.constants.len()
    }

    /// Look up an element declared in this file.
    pub fn element(&self, fqsen: &Fqsen, kind: ElementKind) -> Option<Element<'_>> {
        match kind {
            ElementKind::Class => self.classes.get(fqsen).map(Element::Class),
            ElementKind::Interface => self.interfaces.get(fqsen).map(Element::Interface),
            ElementKind::Trait => self.traits.get(fqsen).map(Element::Trait),
            ElementKind::Function => self.functions.get(fqsen).map(Element::Function),
            ElementKind::Constant => self.constants.get(fqsen).map(Element::Constant),
            ElementKind::ClassConstant | ElementKind::Property | ElementKind::Method => {
                let owner = fqsen.parent()?;
                let class_like = self.class_like(&owner)?;
                match kind {
                    ElementKind::ClassConstant => {
                        class_like.constants().get(fqsen).map(Element::ClassConstant)
                    }
                    ElementKind::Property => {
                        class_like.properties().get(fqsen).map(Element::Property)
                    }
                    _ => class_like.methods().get(fqsen).map(Element::Method),
                }
            }
        }
    }

    /// The class, interface or trait declared under `fqsen`.
    pub fn class_like(&self, fqsen: &Fqsen) -> Option<&dyn ClassLike> {
        if let Some(class) = self.classes.get(fqsen) {
            return Some(class as &dyn ClassLike);
        }
        if let Some(interface) = self.interfaces.get(fqsen) {
            return Some(interface as &dyn ClassLike);
        }
        self.traits.get(fqsen).map(|tr| tr as &dyn ClassLike)
    }

    /// Apply a visibility filter to the members of every class-like.
    /// Returns the removed member FQSENs.
    pub fn retain_visible_members(&mut self, filter: VisibilityFilter) -> Vec<Fqsen> {
        let mut removed = Vec::new();
        for class in self.classes.values_mut() {
            removed.extend(class.retain_visible(filter));
        }
        for interface in self.interfaces.values_mut() {
            removed.extend(interface.retain_visible(filter));
        }
        for tr in self.traits.values_mut() {
            removed.extend(tr.retain_visible(filter));
        }
        removed
    }
}

fn push_members<'a>(out: &mut Vec<(&'a Fqsen, ElementKind)>, class_like: &'a dyn ClassLike) {
    out.extend(
        class_like
            .constants()
            .keys()
            .map(|f| (f, ElementKind::ClassConstant)),
    );
    out.extend(
        class_like
            .properties()
            .keys()
            .map(|f| (f, ElementKind::Property)),
    );
    out.extend(class_like.methods().keys().map(|f| (f, ElementKind::Method)));
}
