//! Syntax tree consumed by the assemblers.
//!
//! This is the contract with the parser collaborator: a per-file list of
//! statements whose declaration nodes expose their kind, simple name, source
//! line, attached doc comment and already-classified reference names.
//! Function bodies and expressions are not represented; default values are
//! kept as raw source text.

mod name;
mod nodes;

pub use name::{Name, NameKind};
pub use nodes::{
    ClassConstantNode, ClassNode, ConstantNode, Declaration, DeclarationKind, DocComment,
    EnumNode, FunctionNode, InterfaceNode, Member, MethodNode, Modifiers, NamespaceStmt, Param,
    PropertyNode, SourceFile, Statement, TraitNode, TraitUseNode, UseItem, UseKind, UseStmt,
    VisibilityModifier,
};
