//! Member visibility and the visibility filter.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::syntax::VisibilityModifier;

/// Declared visibility of a class member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }

    /// Visibility written in source; members without a keyword are public.
    pub fn from_modifier(modifier: Option<VisibilityModifier>) -> Self {
        match modifier {
            Some(VisibilityModifier::Protected) => Visibility::Protected,
            Some(VisibilityModifier::Private) => Visibility::Private,
            Some(VisibilityModifier::Public) | None => Visibility::Public,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bitmask of visibilities kept in the final model.
///
/// `INTERNAL` governs elements marked `@internal`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibilityFilter(u8);

impl VisibilityFilter {
    pub const NONE: Self = Self(0);
    pub const PUBLIC: Self = Self(1);
    pub const PROTECTED: Self = Self(2);
    pub const PRIVATE: Self = Self(4);
    pub const INTERNAL: Self = Self(8);
    pub const DEFAULT: Self = Self(Self::PUBLIC.0 | Self::PROTECTED.0 | Self::PRIVATE.0);
    pub const ALL: Self = Self(Self::DEFAULT.0 | Self::INTERNAL.0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether any bit of `other` is set in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether a member with this visibility and `@internal` marker is kept.
    pub fn allows(self, visibility: Visibility, internal: bool) -> bool {
        self.intersects(visibility.into()) && (!internal || self.contains(Self::INTERNAL))
    }
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Visibility> for VisibilityFilter {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Public => Self::PUBLIC,
            Visibility::Protected => Self::PROTECTED,
            Visibility::Private => Self::PRIVATE,
        }
    }
}

impl BitOr for VisibilityFilter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for VisibilityFilter {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (Self::PUBLIC, "PUBLIC"),
            (Self::PROTECTED, "PROTECTED"),
            (Self::PRIVATE, "PRIVATE"),
            (Self::INTERNAL, "INTERNAL"),
        ]
        .into_iter()
        .filter(|(bit, _)| self.contains(*bit))
        .map(|(_, name)| name)
        .collect();
        write!(f, "VisibilityFilter({})", names.join(" | "))
    }
}
