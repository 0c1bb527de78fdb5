//! Fully Qualified Structural Element Names.
//!
//! An [`Fqsen`] is the absolute address of a declared element:
//!
//! ```text
//! \                         global namespace
//! \Luigi\Pizza              namespace / class / interface / trait / constant
//! \Luigi\make()             function
//! \Luigi\Pizza::make()      method
//! \Luigi\Pizza::$style      property
//! \Luigi\Pizza::PACKAGING   class constant
//! ```

use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;

use super::constants::{MEMBER_CONNECTOR, NAMESPACE_SEPARATOR};

/// Error raised by the checked [`Fqsen::new`] constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FqsenError {
    #[error("'{0}' is not a valid FQSEN: it must start with a namespace separator")]
    NotAbsolute(String),

    #[error("'{0}' is not a valid FQSEN: it contains an empty segment")]
    EmptySegment(String),
}

/// An absolute, normalized element name.
///
/// Equality is string equality of the normalized form.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fqsen(SmolStr);

impl Fqsen {
    /// Validate and normalize an absolute name.
    pub fn new(value: &str) -> Result<Self, FqsenError> {
        let trimmed = value.trim();
        if !trimmed.starts_with(NAMESPACE_SEPARATOR) {
            return Err(FqsenError::NotAbsolute(value.to_string()));
        }
        let normalized = normalize(trimmed);
        if normalized.len() > 1 && normalized[1..].split(NAMESPACE_SEPARATOR).any(str::is_empty) {
            return Err(FqsenError::EmptySegment(value.to_string()));
        }
        Ok(Self(normalized.into()))
    }

    /// The global namespace, `\`.
    pub fn root() -> Self {
        Self(SmolStr::new_static("\\"))
    }

    /// Build an absolute name from namespace segments (`["Luigi", "Pizza"]`).
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for segment in segments {
            let segment = segment.as_ref().trim_matches(NAMESPACE_SEPARATOR);
            if segment.is_empty() {
                continue;
            }
            out.push(NAMESPACE_SEPARATOR);
            out.push_str(segment);
        }
        if out.is_empty() {
            Self::root()
        } else {
            Self(out.into())
        }
    }

    /// Append a (possibly qualified) relative name: `\Luigi` + `Pizza\Style`.
    pub fn join(&self, relative: &str) -> Self {
        let relative = relative.trim_matches(NAMESPACE_SEPARATOR);
        if relative.is_empty() {
            return self.clone();
        }
        if self.is_root() {
            Self(format!("{NAMESPACE_SEPARATOR}{relative}").into())
        } else {
            Self(format!("{}{NAMESPACE_SEPARATOR}{relative}", self.0).into())
        }
    }

    /// Element name of a function declared in this namespace: `\Ns\name()`.
    pub fn function(&self, name: &str) -> Self {
        let base = self.join(name);
        Self(format!("{}()", base.0).into())
    }

    /// Member of this class-like: `\Cls::method()`.
    pub fn method(&self, name: &str) -> Self {
        Self(format!("{}{MEMBER_CONNECTOR}{name}()", self.0).into())
    }

    /// Member of this class-like: `\Cls::$property`.
    pub fn property(&self, name: &str) -> Self {
        let name = name.trim_start_matches('$');
        Self(format!("{}{MEMBER_CONNECTOR}${name}", self.0).into())
    }

    /// Member of this class-like: `\Cls::CONSTANT`.
    pub fn constant(&self, name: &str) -> Self {
        Self(format!("{}{MEMBER_CONNECTOR}{name}", self.0).into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "\\"
    }

    /// Whether this names a class member (contains `::`).
    pub fn is_member(&self) -> bool {
        self.0.contains(MEMBER_CONNECTOR)
    }

    /// The trailing element name, without `()` or `$`.
    pub fn name(&self) -> &str {
        if let Some((_, member)) = self.0.rsplit_once(MEMBER_CONNECTOR) {
            return member.trim_start_matches('$').trim_end_matches("()");
        }
        let last = self
            .0
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or_default();
        last.trim_end_matches("()")
    }

    /// The enclosing namespace, or the owning class-like for members.
    ///
    /// The root namespace has no parent.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        if let Some((owner, _)) = self.0.rsplit_once(MEMBER_CONNECTOR) {
            return Some(Self(owner.into()));
        }
        match self.0.rfind(NAMESPACE_SEPARATOR) {
            Some(0) | None => Some(Self::root()),
            Some(idx) => Some(Self(self.0[..idx].into())),
        }
    }
}

fn normalize(value: &str) -> String {
    let mut out = value.to_string();
    while out.len() > 1 && out.ends_with(NAMESPACE_SEPARATOR) {
        out.pop();
    }
    out
}

impl fmt::Display for Fqsen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Fqsen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fqsen({})", self.0)
    }
}

impl AsRef<str> for Fqsen {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Fqsen {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Fqsen {
    type Err = FqsenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for Fqsen {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Fqsen {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
