//! Class-like descriptors: classes, interfaces and traits.
//!
//! Links to other types (parent, interfaces, used traits) are stored as
//! [`Fqsen`]s and looked up on demand through the project index, so a
//! parent declared in a later file, or never, is not a problem.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::function::MethodDescriptor;
use super::member::{ConstantDescriptor, PropertyDescriptor};
use super::visibility::VisibilityFilter;
use crate::base::Fqsen;
use crate::docblock::DocBlock;

/// A set of type references; each key maps to itself.
pub type FqsenSet = IndexMap<Fqsen, Fqsen>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: SmolStr,
    pub namespace: Fqsen,
    pub fqsen: Fqsen,
    pub line: u32,
    pub docblock: DocBlock,
    /// The `extends` target.
    pub parent: Option<Fqsen>,
    /// Implemented interfaces.
    pub interfaces: FqsenSet,
    /// Traits pulled in with `use`.
    pub used_traits: FqsenSet,
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_readonly: bool,
    pub constants: IndexMap<Fqsen, ConstantDescriptor>,
    pub properties: IndexMap<Fqsen, PropertyDescriptor>,
    pub methods: IndexMap<Fqsen, MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn parent(&self) -> Option<&Fqsen> {
        self.parent.as_ref()
    }

    pub fn interfaces(&self) -> &FqsenSet {
        &self.interfaces
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    pub name: SmolStr,
    pub namespace: Fqsen,
    pub fqsen: Fqsen,
    pub line: u32,
    pub docblock: DocBlock,
    /// The `extends` targets; interfaces may extend several.
    pub parents: FqsenSet,
    pub constants: IndexMap<Fqsen, ConstantDescriptor>,
    pub properties: IndexMap<Fqsen, PropertyDescriptor>,
    pub methods: IndexMap<Fqsen, MethodDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitDescriptor {
    pub name: SmolStr,
    pub namespace: Fqsen,
    pub fqsen: Fqsen,
    pub line: u32,
    pub docblock: DocBlock,
    pub used_traits: FqsenSet,
    pub constants: IndexMap<Fqsen, ConstantDescriptor>,
    pub properties: IndexMap<Fqsen, PropertyDescriptor>,
    pub methods: IndexMap<Fqsen, MethodDescriptor>,
}

/// Shared view of classes, interfaces and traits.
pub trait ClassLike {
    fn fqsen(&self) -> &Fqsen;
    fn constants(&self) -> &IndexMap<Fqsen, ConstantDescriptor>;
    fn properties(&self) -> &IndexMap<Fqsen, PropertyDescriptor>;
    fn methods(&self) -> &IndexMap<Fqsen, MethodDescriptor>;

    /// Drop members the filter does not allow. Returns the removed FQSENs.
    fn retain_visible(&mut self, filter: VisibilityFilter) -> Vec<Fqsen>;
}

macro_rules! class_like {
    ($ty:ty) => {
        impl ClassLike for $ty {
            fn fqsen(&self) -> &Fqsen {
                &self.fqsen
            }

            fn constants(&self) -> &IndexMap<Fqsen, ConstantDescriptor> {
                &self.constants
            }

            fn properties(&self) -> &IndexMap<Fqsen, PropertyDescriptor> {
                &self.properties
            }

            fn methods(&self) -> &IndexMap<Fqsen, MethodDescriptor> {
                &self.methods
            }

            fn retain_visible(&mut self, filter: VisibilityFilter) -> Vec<Fqsen> {
                let mut removed = Vec::new();
                retain(&mut self.constants, &mut removed, |c| {
                    filter.allows(c.visibility, c.docblock.is_internal())
                });
                retain(&mut self.properties, &mut removed, |p| {
                    filter.allows(p.visibility, p.docblock.is_internal())
                });
                retain(&mut self.methods, &mut removed, |m| {
                    filter.allows(m.visibility, m.docblock.is_internal())
                });
                removed
            }
        }
    };
}

class_like!(ClassDescriptor);
class_like!(InterfaceDescriptor);
class_like!(TraitDescriptor);

fn retain<T>(
    members: &mut IndexMap<Fqsen, T>,
    removed: &mut Vec<Fqsen>,
    mut keep: impl FnMut(&T) -> bool,
) {
    members.retain(|fqsen, member| {
        let kept = keep(member);
        if !kept {
            removed.push(fqsen.clone());
        }
        kept
    });
}
