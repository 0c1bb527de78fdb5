//! Properties and constants.

use smol_str::SmolStr;

use super::visibility::Visibility;
use crate::base::Fqsen;
use crate::docblock::{DocBlock, Type};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Name without the `$` sigil.
    pub name: SmolStr,
    pub fqsen: Fqsen,
    pub line: u32,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_readonly: bool,
    /// Type hint from the declaration.
    pub type_hint: Option<SmolStr>,
    /// Type from the `@var` tag.
    pub documented_type: Option<Type>,
    /// Default value as source text.
    pub default: Option<String>,
    pub docblock: DocBlock,
}

/// A class constant or a file-level constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantDescriptor {
    pub name: SmolStr,
    pub fqsen: Fqsen,
    pub line: u32,
    /// File-level constants are always public.
    pub visibility: Visibility,
    pub is_final: bool,
    /// Type of a typed class constant.
    pub type_hint: Option<SmolStr>,
    /// Type from the `@var` tag.
    pub documented_type: Option<Type>,
    /// Value as source text.
    pub value: Option<String>,
    pub docblock: DocBlock,
}
