//! Dispatch from declaration kind to assembler.

use std::fmt;

use rustc_hash::FxHashMap;

use super::assembler::{Assembled, Assembler, AssemblyContext};
use super::error::AssemblyError;
use super::kinds::{
    ClassAssembler, ConstantAssembler, FunctionAssembler, InterfaceAssembler, TraitAssembler,
};
use crate::syntax::{Declaration, DeclarationKind};

/// Maps each [`DeclarationKind`] to the assembler that handles it.
///
/// The default registry handles classes, interfaces, traits, functions and
/// file-level constants. Enums are recognised by the parser but have no
/// assembler until one is registered.
pub struct AssemblerRegistry {
    assemblers: FxHashMap<DeclarationKind, Box<dyn Assembler>>,
}

impl AssemblerRegistry {
    /// A registry without any assembler.
    pub fn empty() -> Self {
        Self {
            assemblers: FxHashMap::default(),
        }
    }

    /// Register `assembler` for `kind`, returning the one it replaces.
    pub fn register(
        &mut self,
        kind: DeclarationKind,
        assembler: impl Assembler + 'static,
    ) -> Option<Box<dyn Assembler>> {
        self.assemblers.insert(kind, Box::new(assembler))
    }

    pub fn unregister(&mut self, kind: DeclarationKind) -> Option<Box<dyn Assembler>> {
        self.assemblers.remove(&kind)
    }

    pub fn is_registered(&self, kind: DeclarationKind) -> bool {
        self.assemblers.contains_key(&kind)
    }

    /// Assemble `node` with the assembler registered for its kind.
    pub fn dispatch(
        &self,
        node: &Declaration,
        ctx: &AssemblyContext<'_>,
    ) -> Result<Assembled, AssemblyError> {
        let kind = node.kind();
        let assembler =
            self.assemblers
                .get(&kind)
                .ok_or(AssemblyError::UnsupportedDeclarationKind {
                    kind,
                    line: node.line(),
                })?;
        assembler.assemble(node, ctx)
    }
}

impl Default for AssemblerRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(DeclarationKind::Class, ClassAssembler);
        registry.register(DeclarationKind::Interface, InterfaceAssembler);
        registry.register(DeclarationKind::Trait, TraitAssembler);
        registry.register(DeclarationKind::Function, FunctionAssembler);
        registry.register(DeclarationKind::Constant, ConstantAssembler);
        registry
    }
}

impl fmt::Debug for AssemblerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.assemblers.keys().map(DeclarationKind::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("AssemblerRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}
