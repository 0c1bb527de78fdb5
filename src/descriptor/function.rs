//! Functions, methods and their arguments.

use smol_str::SmolStr;

use super::visibility::Visibility;
use crate::base::Fqsen;
use crate::docblock::{DocBlock, Type};

/// One declared parameter of a function or method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    /// Name without the `$` sigil.
    pub name: SmolStr,
    pub line: u32,
    /// Type hint from the signature, as written.
    pub type_hint: Option<SmolStr>,
    /// Type from the matching `@param` tag.
    pub documented_type: Option<Type>,
    /// Description from the matching `@param` tag.
    pub description: String,
    /// Default value as source text.
    pub default: Option<String>,
    pub by_ref: bool,
    pub variadic: bool,
}

impl ArgumentDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A function declared at file scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: SmolStr,
    pub namespace: Fqsen,
    pub fqsen: Fqsen,
    pub line: u32,
    pub docblock: DocBlock,
    /// Arguments in declaration order.
    pub arguments: Vec<ArgumentDescriptor>,
    /// Return type hint from the signature.
    pub return_type: Option<SmolStr>,
    /// Type from the `@return` tag.
    pub documented_return_type: Option<Type>,
    pub by_ref: bool,
}

impl FunctionDescriptor {
    pub fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentDescriptor> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

/// A method of a class, interface or trait.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: SmolStr,
    pub fqsen: Fqsen,
    pub line: u32,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
    pub by_ref: bool,
    pub docblock: DocBlock,
    /// Arguments in declaration order.
    pub arguments: Vec<ArgumentDescriptor>,
    pub return_type: Option<SmolStr>,
    pub documented_return_type: Option<Type>,
}

impl MethodDescriptor {
    pub fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentDescriptor> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}
