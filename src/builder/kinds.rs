//! One assembler per top-level declaration kind.

use super::assembler::{Assembled, Assembler, AssemblyContext, mismatch};
use super::error::AssemblyError;
use super::members::{self, Owner};
use crate::descriptor::{
    ClassDescriptor, ConstantDescriptor, FqsenSet, FunctionDescriptor, InterfaceDescriptor,
    TraitDescriptor, Visibility,
};
use crate::resolve::NameContext;
use crate::syntax::{Declaration, DeclarationKind, Name};

// =============================================================================
// Class-likes
// =============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct ClassAssembler;

impl Assembler for ClassAssembler {
    fn assemble(
        &self,
        node: &Declaration,
        ctx: &AssemblyContext<'_>,
    ) -> Result<Assembled, AssemblyError> {
        let Declaration::Class(node) = node else {
            return Err(mismatch(DeclarationKind::Class, node));
        };
        let fqsen = ctx.names().qualify(&node.name);
        let names = ctx.names().with_class(fqsen.clone());
        let ctx = ctx.with_names(&names);
        let members = members::assemble_members(&fqsen, Owner::Class, &node.members, &ctx);

        Ok(Assembled::Class(ClassDescriptor {
            name: node.name.clone(),
            namespace: ctx.names().namespace().clone(),
            docblock: ctx.docblock(node.doc_comment.as_ref()),
            line: node.line,
            parent: node.extends.as_ref().map(|name| ctx.names().resolve(name)),
            interfaces: resolve_set(ctx.names(), &node.implements),
            used_traits: members.used_traits,
            is_abstract: node.modifiers.is_abstract,
            is_final: node.modifiers.is_final,
            is_readonly: node.modifiers.is_readonly,
            constants: members.constants,
            properties: members.properties,
            methods: members.methods,
            fqsen,
        }))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InterfaceAssembler;

impl Assembler for InterfaceAssembler {
    fn assemble(
        &self,
        node: &Declaration,
        ctx: &AssemblyContext<'_>,
    ) -> Result<Assembled, AssemblyError> {
        let Declaration::Interface(node) = node else {
            return Err(mismatch(DeclarationKind::Interface, node));
        };
        let fqsen = ctx.names().qualify(&node.name);
        let names = ctx.names().with_class(fqsen.clone());
        let ctx = ctx.with_names(&names);
        let members = members::assemble_members(&fqsen, Owner::Interface, &node.members, &ctx);

        Ok(Assembled::Interface(InterfaceDescriptor {
            name: node.name.clone(),
            namespace: ctx.names().namespace().clone(),
            docblock: ctx.docblock(node.doc_comment.as_ref()),
            line: node.line,
            parents: resolve_set(ctx.names(), &node.extends),
            constants: members.constants,
            properties: members.properties,
            methods: members.methods,
            fqsen,
        }))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TraitAssembler;

impl Assembler for TraitAssembler {
    fn assemble(
        &self,
        node: &Declaration,
        ctx: &AssemblyContext<'_>,
    ) -> Result<Assembled, AssemblyError> {
        let Declaration::Trait(node) = node else {
            return Err(mismatch(DeclarationKind::Trait, node));
        };
        let fqsen = ctx.names().qualify(&node.name);
        let names = ctx.names().with_class(fqsen.clone());
        let ctx = ctx.with_names(&names);
        let members = members::assemble_members(&fqsen, Owner::Trait, &node.members, &ctx);

        Ok(Assembled::Trait(TraitDescriptor {
            name: node.name.clone(),
            namespace: ctx.names().namespace().clone(),
            docblock: ctx.docblock(node.doc_comment.as_ref()),
            line: node.line,
            used_traits: members.used_traits,
            constants: members.constants,
            properties: members.properties,
            methods: members.methods,
            fqsen,
        }))
    }
}

/// Resolve a list of names into a self-mapped set, keeping the first
/// occurrence of each.
fn resolve_set(names: &NameContext, list: &[Name]) -> FqsenSet {
    let mut set = FqsenSet::new();
    for name in list {
        let fqsen = names.resolve(name);
        set.entry(fqsen.clone()).or_insert(fqsen);
    }
    set
}

// =============================================================================
// Functions and constants
// =============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct FunctionAssembler;

impl Assembler for FunctionAssembler {
    fn assemble(
        &self,
        node: &Declaration,
        ctx: &AssemblyContext<'_>,
    ) -> Result<Assembled, AssemblyError> {
        let Declaration::Function(node) = node else {
            return Err(mismatch(DeclarationKind::Function, node));
        };
        let namespace = ctx.names().namespace().clone();
        let docblock = ctx.docblock(node.doc_comment.as_ref());

        Ok(Assembled::Function(FunctionDescriptor {
            name: node.name.clone(),
            fqsen: namespace.function(&node.name),
            namespace,
            line: node.line,
            arguments: members::assemble_arguments(&node.params, &docblock),
            return_type: node.return_type.clone(),
            documented_return_type: members::documented_return_type(&docblock),
            by_ref: node.by_ref,
            docblock,
        }))
    }
}

/// File-level `const` declarations.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantAssembler;

impl Assembler for ConstantAssembler {
    fn assemble(
        &self,
        node: &Declaration,
        ctx: &AssemblyContext<'_>,
    ) -> Result<Assembled, AssemblyError> {
        let Declaration::Constant(node) = node else {
            return Err(mismatch(DeclarationKind::Constant, node));
        };
        let docblock = ctx.docblock(node.doc_comment.as_ref());

        Ok(Assembled::Constant(ConstantDescriptor {
            name: node.name.clone(),
            fqsen: ctx.names().qualify(&node.name),
            line: node.line,
            visibility: Visibility::Public,
            is_final: false,
            type_hint: None,
            documented_type: members::documented_var_type(&docblock),
            value: node.value.clone(),
            docblock,
        }))
    }
}
