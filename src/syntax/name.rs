//! Reference names as written in source.

use std::fmt;

use smol_str::SmolStr;

use crate::base::constants::NAMESPACE_SEPARATOR;

/// How a name was written, which decides how it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// `\Foo\Bar` - already absolute.
    FullyQualified,
    /// `Foo\Bar` - first segment may be an import alias.
    Qualified,
    /// `Bar` - may be an import alias.
    Unqualified,
    /// `namespace\Bar` - relative to the current namespace, never aliased.
    Relative,
}

/// A classified reference name.
///
/// `text` never carries the leading separator or the `namespace\` prefix;
/// that information lives in `kind`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    pub text: SmolStr,
    pub kind: NameKind,
}

impl Name {
    pub fn new(text: impl Into<SmolStr>, kind: NameKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Classify a name as it appears in source or in a doc comment.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(rest) = raw.strip_prefix(NAMESPACE_SEPARATOR) {
            return Self::new(rest, NameKind::FullyQualified);
        }
        if raw.len() > 10
            && raw
                .get(..10)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("namespace\\"))
        {
            return Self::new(&raw[10..], NameKind::Relative);
        }
        if raw.contains(NAMESPACE_SEPARATOR) {
            Self::new(raw, NameKind::Qualified)
        } else {
            Self::new(raw, NameKind::Unqualified)
        }
    }

    pub fn is_fully_qualified(&self) -> bool {
        self.kind == NameKind::FullyQualified
    }

    /// First segment, the part an import alias can replace.
    pub fn first_segment(&self) -> &str {
        self.text
            .split(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or_default()
    }

    /// Everything after the first segment, if the name is qualified.
    pub fn rest(&self) -> Option<&str> {
        self.text
            .split_once(NAMESPACE_SEPARATOR)
            .map(|(_, rest)| rest)
    }

    /// Last segment.
    pub fn last_segment(&self) -> &str {
        self.text
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or_default()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NameKind::FullyQualified => write!(f, "\\{}", self.text),
            NameKind::Relative => write!(f, "namespace\\{}", self.text),
            NameKind::Qualified | NameKind::Unqualified => f.write_str(&self.text),
        }
    }
}
