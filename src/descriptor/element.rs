//! Uniform access to any registered element.

use std::fmt;

use super::class::{ClassDescriptor, InterfaceDescriptor, TraitDescriptor};
use super::function::{FunctionDescriptor, MethodDescriptor};
use super::member::{ConstantDescriptor, PropertyDescriptor};
use crate::base::Fqsen;
use crate::docblock::DocBlock;

/// What an FQSEN in the project index points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Class,
    Interface,
    Trait,
    Function,
    /// A file-level constant.
    Constant,
    ClassConstant,
    Property,
    Method,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match *self {
            ElementKind::Class => "class",
            ElementKind::Interface => "interface",
            ElementKind::Trait => "trait",
            ElementKind::Function => "function",
            ElementKind::Constant => "constant",
            ElementKind::ClassConstant => "class constant",
            ElementKind::Property => "property",
            ElementKind::Method => "method",
        }
    }

    pub fn is_member(&self) -> bool {
        matches!(
            self,
            ElementKind::ClassConstant | ElementKind::Property | ElementKind::Method
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed descriptor of any kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element<'a> {
    Class(&'a ClassDescriptor),
    Interface(&'a InterfaceDescriptor),
    Trait(&'a TraitDescriptor),
    Function(&'a FunctionDescriptor),
    Constant(&'a ConstantDescriptor),
    ClassConstant(&'a ConstantDescriptor),
    Property(&'a PropertyDescriptor),
    Method(&'a MethodDescriptor),
}

impl<'a> Element<'a> {
    pub fn kind(&self) -> ElementKind {
        match *self {
            Element::Class(_) => ElementKind::Class,
            Element::Interface(_) => ElementKind::Interface,
            Element::Trait(_) => ElementKind::Trait,
            Element::Function(_) => ElementKind::Function,
            Element::Constant(_) => ElementKind::Constant,
            Element::ClassConstant(_) => ElementKind::ClassConstant,
            Element::Property(_) => ElementKind::Property,
            Element::Method(_) => ElementKind::Method,
        }
    }

    pub fn fqsen(&self) -> &'a Fqsen {
        match *self {
            Element::Class(d) => &d.fqsen,
            Element::Interface(d) => &d.fqsen,
            Element::Trait(d) => &d.fqsen,
            Element::Function(d) => &d.fqsen,
            Element::Constant(d) | Element::ClassConstant(d) => &d.fqsen,
            Element::Property(d) => &d.fqsen,
            Element::Method(d) => &d.fqsen,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Element::Class(d) => &d.name,
            Element::Interface(d) => &d.name,
            Element::Trait(d) => &d.name,
            Element::Function(d) => &d.name,
            Element::Constant(d) | Element::ClassConstant(d) => &d.name,
            Element::Property(d) => &d.name,
            Element::Method(d) => &d.name,
        }
    }

    pub fn line(&self) -> u32 {
        match *self {
            Element::Class(d) => d.line,
            Element::Interface(d) => d.line,
            Element::Trait(d) => d.line,
            Element::Function(d) => d.line,
            Element::Constant(d) | Element::ClassConstant(d) => d.line,
            Element::Property(d) => d.line,
            Element::Method(d) => d.line,
        }
    }

    pub fn docblock(&self) -> &'a DocBlock {
        match *self {
            Element::Class(d) => &d.docblock,
            Element::Interface(d) => &d.docblock,
            Element::Trait(d) => &d.docblock,
            Element::Function(d) => &d.docblock,
            Element::Constant(d) | Element::ClassConstant(d) => &d.docblock,
            Element::Property(d) => &d.docblock,
            Element::Method(d) => &d.docblock,
        }
    }
}
