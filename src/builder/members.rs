//! Member assembly shared by classes, interfaces and traits.

use indexmap::IndexMap;

use super::assembler::AssemblyContext;
use crate::base::Fqsen;
use crate::descriptor::{
    ArgumentDescriptor, ConstantDescriptor, FqsenSet, MethodDescriptor, PropertyDescriptor,
    Visibility,
};
use crate::docblock::{DocBlock, Tag, Type};
use crate::syntax::{ClassConstantNode, Member, MethodNode, Modifiers, Param, PropertyNode};

/// Members of one class-like, keyed by member FQSEN.
#[derive(Debug, Default)]
pub(super) struct Members {
    pub constants: IndexMap<Fqsen, ConstantDescriptor>,
    pub properties: IndexMap<Fqsen, PropertyDescriptor>,
    pub methods: IndexMap<Fqsen, MethodDescriptor>,
    pub used_traits: FqsenSet,
}

/// Where the members are declared; interface members are implicitly
/// public and interface methods abstract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Owner {
    Class,
    Interface,
    Trait,
}

impl Owner {
    fn visibility(self, modifiers: &Modifiers) -> Visibility {
        match self {
            Owner::Interface => Visibility::Public,
            Owner::Class | Owner::Trait => Visibility::from_modifier(modifiers.visibility),
        }
    }
}

/// Assemble every member of `owner`. `ctx` carries the class-like as
/// the target of `self`.
pub(super) fn assemble_members(
    fqsen: &Fqsen,
    owner: Owner,
    members: &[Member],
    ctx: &AssemblyContext<'_>,
) -> Members {
    let mut out = Members::default();
    for member in members {
        match member {
            Member::Constant(node) => {
                let constant = class_constant(fqsen, owner, node, ctx);
                out.constants.entry(constant.fqsen.clone()).or_insert(constant);
            }
            Member::Property(node) => {
                let property = property(fqsen, owner, node, ctx);
                out.properties.entry(property.fqsen.clone()).or_insert(property);
            }
            Member::Method(node) => {
                let method = method(fqsen, owner, node, ctx);
                for property in promoted_properties(fqsen, node, &method.docblock) {
                    out.properties.entry(property.fqsen.clone()).or_insert(property);
                }
                out.methods.entry(method.fqsen.clone()).or_insert(method);
            }
            Member::TraitUse(node) => {
                for name in &node.names {
                    let target = ctx.names().resolve(name);
                    out.used_traits.insert(target.clone(), target);
                }
            }
        }
    }
    out
}

fn class_constant(
    fqsen: &Fqsen,
    owner: Owner,
    node: &ClassConstantNode,
    ctx: &AssemblyContext<'_>,
) -> ConstantDescriptor {
    let docblock = ctx.docblock(node.doc_comment.as_ref());
    ConstantDescriptor {
        name: node.name.clone(),
        fqsen: fqsen.constant(&node.name),
        line: node.line,
        visibility: owner.visibility(&node.modifiers),
        is_final: node.modifiers.is_final,
        type_hint: node.type_hint.clone(),
        documented_type: documented_var_type(&docblock),
        value: node.value.clone(),
        docblock,
    }
}

fn property(
    fqsen: &Fqsen,
    owner: Owner,
    node: &PropertyNode,
    ctx: &AssemblyContext<'_>,
) -> PropertyDescriptor {
    let docblock = ctx.docblock(node.doc_comment.as_ref());
    PropertyDescriptor {
        name: node.name.clone(),
        fqsen: fqsen.property(&node.name),
        line: node.line,
        visibility: owner.visibility(&node.modifiers),
        is_static: node.modifiers.is_static,
        is_readonly: node.modifiers.is_readonly,
        type_hint: node.type_hint.clone(),
        documented_type: documented_var_type(&docblock),
        default: node.default.clone(),
        docblock,
    }
}

fn method(
    fqsen: &Fqsen,
    owner: Owner,
    node: &MethodNode,
    ctx: &AssemblyContext<'_>,
) -> MethodDescriptor {
    let docblock = ctx.docblock(node.doc_comment.as_ref());
    MethodDescriptor {
        name: node.name.clone(),
        fqsen: fqsen.method(&node.name),
        line: node.line,
        visibility: owner.visibility(&node.modifiers),
        is_static: node.modifiers.is_static,
        is_abstract: owner == Owner::Interface || node.modifiers.is_abstract,
        is_final: node.modifiers.is_final,
        by_ref: node.by_ref,
        arguments: assemble_arguments(&node.params, &docblock),
        return_type: node.return_type.clone(),
        documented_return_type: documented_return_type(&docblock),
        docblock,
    }
}

/// Constructor parameters with a visibility or `readonly` modifier
/// also declare a property.
fn promoted_properties<'a>(
    fqsen: &'a Fqsen,
    node: &'a MethodNode,
    docblock: &'a DocBlock,
) -> impl Iterator<Item = PropertyDescriptor> + 'a {
    node.params
        .iter()
        .filter(move |_| node.name.eq_ignore_ascii_case("__construct"))
        .filter_map(move |param| {
            let modifiers = param.promoted?;
            Some(PropertyDescriptor {
                name: param.name.clone(),
                fqsen: fqsen.property(&param.name),
                line: param.line,
                visibility: Visibility::from_modifier(modifiers.visibility),
                is_static: false,
                is_readonly: modifiers.is_readonly,
                type_hint: param.type_hint.clone(),
                documented_type: docblock.param(&param.name).and_then(Tag::ty).cloned(),
                default: None,
                docblock: DocBlock::empty(),
            })
        })
}

/// Arguments in declaration order, each cross-linked with the first
/// `@param` tag naming it.
pub(super) fn assemble_arguments(params: &[Param], docblock: &DocBlock) -> Vec<ArgumentDescriptor> {
    params
        .iter()
        .map(|param| {
            let tag = docblock.param(&param.name);
            ArgumentDescriptor {
                name: param.name.clone(),
                line: param.line,
                type_hint: param.type_hint.clone(),
                documented_type: tag.and_then(Tag::ty).cloned(),
                description: tag.map(|tag| tag.description().to_string()).unwrap_or_default(),
                default: param.default.clone(),
                by_ref: param.by_ref,
                variadic: param.variadic,
            }
        })
        .collect()
}

pub(super) fn documented_return_type(docblock: &DocBlock) -> Option<Type> {
    docblock.return_tag().and_then(Tag::ty).cloned()
}

pub(super) fn documented_var_type(docblock: &DocBlock) -> Option<Type> {
    docblock.var_tag().and_then(Tag::ty).cloned()
}
