//! The assembler capability and what it produces.

use crate::base::Fqsen;
use crate::descriptor::{
    ClassDescriptor, ConstantDescriptor, ElementKind, FileDescriptor, FunctionDescriptor,
    InterfaceDescriptor, TraitDescriptor,
};
use crate::docblock::{DocBlock, DocBlockFactory};
use crate::resolve::NameContext;
use crate::syntax::{Declaration, DeclarationKind, DocComment};

use super::error::AssemblyError;

/// Converts one declaration node into its descriptor.
///
/// One implementation exists per [`DeclarationKind`]; the
/// [`AssemblerRegistry`](super::AssemblerRegistry) picks it by kind.
pub trait Assembler: Send + Sync {
    fn assemble(
        &self,
        node: &Declaration,
        ctx: &AssemblyContext<'_>,
    ) -> Result<Assembled, AssemblyError>;
}

/// What an assembler needs besides the node: the names in scope and the
/// doc comment integrator.
#[derive(Clone, Copy, Debug)]
pub struct AssemblyContext<'a> {
    names: &'a NameContext,
    docblocks: &'a DocBlockFactory,
}

impl<'a> AssemblyContext<'a> {
    pub fn new(names: &'a NameContext, docblocks: &'a DocBlockFactory) -> Self {
        Self { names, docblocks }
    }

    pub fn names(&self) -> &'a NameContext {
        self.names
    }

    pub fn docblocks(&self) -> &'a DocBlockFactory {
        self.docblocks
    }

    /// The same integrator with other names in scope.
    pub fn with_names<'b>(&self, names: &'b NameContext) -> AssemblyContext<'b>
    where
        'a: 'b,
    {
        AssemblyContext::new(names, self.docblocks)
    }

    /// Integrate the comment attached to a node.
    pub fn docblock(&self, comment: Option<&DocComment>) -> DocBlock {
        self.docblocks
            .create(comment.map(|comment| comment.text.as_str()), self.names)
    }
}

/// A top-level descriptor fresh out of an assembler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Assembled {
    Class(ClassDescriptor),
    Interface(InterfaceDescriptor),
    Trait(TraitDescriptor),
    Function(FunctionDescriptor),
    Constant(ConstantDescriptor),
}

impl Assembled {
    pub fn fqsen(&self) -> &Fqsen {
        match self {
            Assembled::Class(d) => &d.fqsen,
            Assembled::Interface(d) => &d.fqsen,
            Assembled::Trait(d) => &d.fqsen,
            Assembled::Function(d) => &d.fqsen,
            Assembled::Constant(d) => &d.fqsen,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            Assembled::Class(d) => d.line,
            Assembled::Interface(d) => d.line,
            Assembled::Trait(d) => d.line,
            Assembled::Function(d) => d.line,
            Assembled::Constant(d) => d.line,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Assembled::Class(_) => ElementKind::Class,
            Assembled::Interface(_) => ElementKind::Interface,
            Assembled::Trait(_) => ElementKind::Trait,
            Assembled::Function(_) => ElementKind::Function,
            Assembled::Constant(_) => ElementKind::Constant,
        }
    }

    /// Store the descriptor in the collection of `file` matching its kind.
    pub fn insert_into(self, file: &mut FileDescriptor) {
        match self {
            Assembled::Class(d) => {
                file.classes.insert(d.fqsen.clone(), d);
            }
            Assembled::Interface(d) => {
                file.interfaces.insert(d.fqsen.clone(), d);
            }
            Assembled::Trait(d) => {
                file.traits.insert(d.fqsen.clone(), d);
            }
            Assembled::Function(d) => {
                file.functions.insert(d.fqsen.clone(), d);
            }
            Assembled::Constant(d) => {
                file.constants.insert(d.fqsen.clone(), d);
            }
        }
    }
}

pub(super) fn mismatch(expected: DeclarationKind, found: &Declaration) -> AssemblyError {
    AssemblyError::KindMismatch {
        expected,
        found: found.kind(),
    }
}
