//! Name resolution: turning reference names into [`Fqsen`]s.
//!
//! A [`NameContext`] is the scope a reference is written in: the current
//! namespace, the class imports (`use` aliases) visible in it and, inside
//! a class-like body, the enclosing type. Resolution is total; whether
//! anything is declared under the result is not checked here.
//!
//! ```text
//! \Foo\Bar          → \Foo\Bar                    (fully qualified)
//! namespace\Bar     → <namespace>\Bar             (relative)
//! Alias\Bar         → <import of Alias>\Bar       (first segment imported)
//! Bar               → <namespace>\Bar             (otherwise)
//! ```

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::Fqsen;
use crate::syntax::{Name, NameKind};

/// An import visible in a namespace: the alias as written and its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Import {
    pub alias: SmolStr,
    pub target: Fqsen,
}

/// Namespace and import context for resolving class-like names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameContext {
    namespace: Fqsen,

    /// Class imports, keyed by lowercased alias (PHP class names are
    /// case-insensitive).
    imports: IndexMap<SmolStr, Import>,

    /// The class-like whose body is being assembled, for `self`/`static`.
    class: Option<Fqsen>,
}

impl Default for NameContext {
    fn default() -> Self {
        Self::new(Fqsen::root())
    }
}

impl NameContext {
    pub fn new(namespace: Fqsen) -> Self {
        Self {
            namespace,
            imports: IndexMap::new(),
            class: None,
        }
    }

    pub fn namespace(&self) -> &Fqsen {
        &self.namespace
    }

    /// Register `use target as alias;`. A later import of the same alias
    /// replaces the earlier one.
    pub fn add_import(&mut self, alias: impl Into<SmolStr>, target: Fqsen) {
        let alias = alias.into();
        let key = SmolStr::new(alias.to_lowercase());
        self.imports.insert(key, Import { alias, target });
    }

    pub fn lookup_import(&self, alias: &str) -> Option<&Fqsen> {
        self.imports
            .get(alias.to_lowercase().as_str())
            .map(|import| &import.target)
    }

    /// Imports in declaration order.
    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.imports.values()
    }

    /// A copy of this context for the body of `class`.
    pub fn with_class(&self, class: Fqsen) -> Self {
        Self {
            class: Some(class),
            ..self.clone()
        }
    }

    pub fn class(&self) -> Option<&Fqsen> {
        self.class.as_ref()
    }

    /// Element name of a declaration named `name` in the current namespace.
    pub fn qualify(&self, name: &str) -> Fqsen {
        self.namespace.join(name)
    }

    /// Resolve a classified reference name.
    pub fn resolve(&self, name: &Name) -> Fqsen {
        match name.kind {
            NameKind::FullyQualified => Fqsen::root().join(&name.text),
            NameKind::Relative => self.namespace.join(&name.text),
            NameKind::Qualified | NameKind::Unqualified => {
                match self.lookup_import(name.first_segment()) {
                    Some(target) => match name.rest() {
                        Some(rest) => target.join(rest),
                        None => target.clone(),
                    },
                    None => self.namespace.join(&name.text),
                }
            }
        }
    }

    /// Resolve a name written in free text, such as a doc comment type.
    ///
    /// `self`, `static` and `$this` name the enclosing class-like when
    /// there is one.
    pub fn resolve_str(&self, raw: &str) -> Fqsen {
        if let Some(class) = &self.class {
            if is_self_reference(raw) {
                return class.clone();
            }
        }
        self.resolve(&Name::parse(raw))
    }
}

/// `self`, `static` or `$this` (keywords are case-insensitive).
pub fn is_self_reference(raw: &str) -> bool {
    raw == "$this" || raw.eq_ignore_ascii_case("self") || raw.eq_ignore_ascii_case("static")
}
