//! Declaration-level syntax nodes.

use std::fmt;

use smol_str::SmolStr;

use super::name::Name;

/// A raw `/** ... */` comment and the line it starts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocComment {
    pub text: String,
    pub line: u32,
}

impl DocComment {
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

/// Root of a parsed file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceFile {
    /// The file-level doc comment, if the first one is not attached to a declaration.
    pub doc_comment: Option<DocComment>,
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Namespace(NamespaceStmt),
    Use(UseStmt),
    Declaration(Declaration),
}

/// `namespace Foo;` (body is `None`) or `namespace Foo { ... }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceStmt {
    /// `None` for the braced global namespace `namespace { ... }`.
    pub name: Option<Name>,
    pub body: Option<Vec<Statement>>,
    pub line: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UseKind {
    Class,
    Function,
    Constant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UseStmt {
    pub items: Vec<UseItem>,
    pub line: u32,
}

/// One imported name. Imported names are always absolute, so `name`
/// is stored without a leading separator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UseItem {
    pub kind: UseKind,
    pub name: Name,
    pub alias: Option<SmolStr>,
}

impl UseItem {
    /// The name this import is visible under.
    pub fn visible_name(&self) -> &str {
        self.alias
            .as_deref()
            .unwrap_or_else(|| self.name.last_segment())
    }
}

/// Discriminant of a top-level declaration, used for assembler dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
    Trait,
    Function,
    Constant,
    Enum,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Trait => "trait",
            DeclarationKind::Function => "function",
            DeclarationKind::Constant => "constant",
            DeclarationKind::Enum => "enum",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    Class(ClassNode),
    Interface(InterfaceNode),
    Trait(TraitNode),
    Function(FunctionNode),
    Constant(ConstantNode),
    Enum(EnumNode),
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Class(_) => DeclarationKind::Class,
            Declaration::Interface(_) => DeclarationKind::Interface,
            Declaration::Trait(_) => DeclarationKind::Trait,
            Declaration::Function(_) => DeclarationKind::Function,
            Declaration::Constant(_) => DeclarationKind::Constant,
            Declaration::Enum(_) => DeclarationKind::Enum,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Class(node) => &node.name,
            Declaration::Interface(node) => &node.name,
            Declaration::Trait(node) => &node.name,
            Declaration::Function(node) => &node.name,
            Declaration::Constant(node) => &node.name,
            Declaration::Enum(node) => &node.name,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            Declaration::Class(node) => node.line,
            Declaration::Interface(node) => node.line,
            Declaration::Trait(node) => node.line,
            Declaration::Function(node) => node.line,
            Declaration::Constant(node) => node.line,
            Declaration::Enum(node) => node.line,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisibilityModifier {
    Public,
    Protected,
    Private,
}

/// Modifier keywords in front of a declaration or member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub visibility: Option<VisibilityModifier>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_readonly: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNode {
    pub name: SmolStr,
    pub line: u32,
    pub doc_comment: Option<DocComment>,
    pub modifiers: Modifiers,
    pub extends: Option<Name>,
    pub implements: Vec<Name>,
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceNode {
    pub name: SmolStr,
    pub line: u32,
    pub doc_comment: Option<DocComment>,
    pub extends: Vec<Name>,
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitNode {
    pub name: SmolStr,
    pub line: u32,
    pub doc_comment: Option<DocComment>,
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumNode {
    pub name: SmolStr,
    pub line: u32,
    pub doc_comment: Option<DocComment>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionNode {
    pub name: SmolStr,
    pub line: u32,
    pub doc_comment: Option<DocComment>,
    pub by_ref: bool,
    pub params: Vec<Param>,
    /// Raw return type hint, e.g. `?Style` or `int|false`.
    pub return_type: Option<SmolStr>,
}

/// A file-level `const NAME = value;`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantNode {
    pub name: SmolStr,
    pub line: u32,
    pub doc_comment: Option<DocComment>,
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Member {
    Constant(ClassConstantNode),
    Property(PropertyNode),
    Method(MethodNode),
    TraitUse(TraitUseNode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassConstantNode {
    pub name: SmolStr,
    pub line: u32,
    pub doc_comment: Option<DocComment>,
    pub modifiers: Modifiers,
    pub type_hint: Option<SmolStr>,
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyNode {
    /// Name without the `$` sigil.
    pub name: SmolStr,
    pub line: u32,
    pub doc_comment: Option<DocComment>,
    pub modifiers: Modifiers,
    pub type_hint: Option<SmolStr>,
    pub default: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodNode {
    pub name: SmolStr,
    pub line: u32,
    pub doc_comment: Option<DocComment>,
    pub modifiers: Modifiers,
    pub by_ref: bool,
    pub params: Vec<Param>,
    pub return_type: Option<SmolStr>,
    pub has_body: bool,
}

/// `use TraitA, TraitB;` inside a class-like body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitUseNode {
    pub names: Vec<Name>,
    pub line: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    /// Name without the `$` sigil.
    pub name: SmolStr,
    pub line: u32,
    pub type_hint: Option<SmolStr>,
    pub default: Option<String>,
    pub by_ref: bool,
    pub variadic: bool,
    /// Constructor promotion modifiers (`public`, `private readonly`, ...).
    pub promoted: Option<Modifiers>,
}
