//! Interpreted doc comment tags.

use smol_str::SmolStr;

use super::types::Type;
use crate::resolve::NameContext;

/// Access mode of a `@property` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyMode {
    ReadWrite,
    Read,
    Write,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    /// Any tag without a dedicated structure.
    Generic { name: SmolStr, body: String },
    Author {
        name: String,
        email: Option<String>,
    },
    Param {
        ty: Option<Type>,
        /// Variable name without the `$` sigil.
        variable: Option<SmolStr>,
        variadic: bool,
        by_ref: bool,
        description: String,
    },
    Return {
        ty: Option<Type>,
        description: String,
    },
    Var {
        ty: Option<Type>,
        variable: Option<SmolStr>,
        description: String,
    },
    Property {
        mode: PropertyMode,
        ty: Option<Type>,
        variable: Option<SmolStr>,
        description: String,
    },
    Throws {
        ty: Option<Type>,
        description: String,
    },
}

impl Tag {
    /// Interpret a raw `@name body` occurrence, resolving type expressions
    /// against `ctx`.
    pub fn from_raw(name: &str, body: &str, ctx: &NameContext) -> Tag {
        match name {
            "param" => {
                let (ty, rest) = split_type(body, ctx);
                let (variable, description) = split_variable(rest);
                let (by_ref, variadic, variable) = match variable {
                    Some(var) => {
                        let (by_ref, variadic, name) = strip_variable(var);
                        (by_ref, variadic, Some(name))
                    }
                    None => (false, false, None),
                };
                Tag::Param {
                    ty,
                    variable,
                    variadic,
                    by_ref,
                    description: description.to_string(),
                }
            }
            "return" => {
                let (ty, rest) = split_type(body, ctx);
                Tag::Return {
                    ty,
                    description: rest.to_string(),
                }
            }
            "var" => {
                let (ty, rest) = split_type(body, ctx);
                let (variable, description) = split_variable(rest);
                Tag::Var {
                    ty,
                    variable: variable.map(|var| strip_variable(var).2),
                    description: description.to_string(),
                }
            }
            "property" | "property-read" | "property-write" => {
                let mode = match name {
                    "property-read" => PropertyMode::Read,
                    "property-write" => PropertyMode::Write,
                    _ => PropertyMode::ReadWrite,
                };
                let (ty, rest) = split_type(body, ctx);
                let (variable, description) = split_variable(rest);
                Tag::Property {
                    mode,
                    ty,
                    variable: variable.map(|var| strip_variable(var).2),
                    description: description.to_string(),
                }
            }
            "throws" | "throw" => {
                let (ty, rest) = split_type(body, ctx);
                Tag::Throws {
                    ty,
                    description: rest.to_string(),
                }
            }
            "author" => parse_author(body),
            _ => Tag::Generic {
                name: SmolStr::new(name),
                body: body.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Tag::Generic { name, .. } => name,
            Tag::Author { .. } => "author",
            Tag::Param { .. } => "param",
            Tag::Return { .. } => "return",
            Tag::Var { .. } => "var",
            Tag::Property { mode, .. } => match mode {
                PropertyMode::ReadWrite => "property",
                PropertyMode::Read => "property-read",
                PropertyMode::Write => "property-write",
            },
            Tag::Throws { .. } => "throws",
        }
    }

    /// The documented type, for tags that carry one.
    pub fn ty(&self) -> Option<&Type> {
        match self {
            Tag::Param { ty, .. }
            | Tag::Return { ty, .. }
            | Tag::Var { ty, .. }
            | Tag::Property { ty, .. }
            | Tag::Throws { ty, .. } => ty.as_ref(),
            Tag::Generic { .. } | Tag::Author { .. } => None,
        }
    }

    pub fn variable(&self) -> Option<&str> {
        match self {
            Tag::Param { variable, .. }
            | Tag::Var { variable, .. }
            | Tag::Property { variable, .. } => variable.as_deref(),
            _ => None,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Tag::Generic { body, .. } => body,
            Tag::Author { .. } => "",
            Tag::Param { description, .. }
            | Tag::Return { description, .. }
            | Tag::Var { description, .. }
            | Tag::Property { description, .. }
            | Tag::Throws { description, .. } => description,
        }
    }
}

/// Split a leading type expression off `body`.
///
/// The type ends at the first whitespace outside of `<>` or `()`. A body
/// that starts with a variable has no type.
fn split_type<'b>(body: &'b str, ctx: &NameContext) -> (Option<Type>, &'b str) {
    let body = body.trim_start();
    if body.is_empty() || (starts_with_variable(body) && !starts_with_this(body)) {
        return (None, body);
    }

    let mut depth = 0usize;
    let mut end = body.len();
    for (idx, c) in body.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                // `array<int, string>` and `A | B` keep going past the space;
                // `&$name` is a by-reference variable, not an intersection.
                let before = body[..idx].trim_end();
                let after = body[idx..].trim_start();
                let union = before.ends_with(['|', ',']) || after.starts_with('|');
                let intersection = (before.ends_with('&') || after.starts_with('&'))
                    && !starts_with_variable(after);
                if union || intersection {
                    continue;
                }
                end = idx;
                break;
            }
            _ => {}
        }
    }

    let (ty, rest) = body.split_at(end);
    (Type::parse(ty, ctx), rest.trim_start())
}

fn starts_with_variable(text: &str) -> bool {
    let text = text.trim_start_matches('&').trim_start_matches("...");
    text.starts_with('$')
}

/// `$this` in type position, as in `@return $this`.
fn starts_with_this(text: &str) -> bool {
    text.strip_prefix("$this").is_some_and(|rest| {
        rest.chars()
            .next()
            .is_none_or(|c| c.is_whitespace() || matches!(c, '|' | '[' | '&'))
    })
}

/// Split a leading `$name` (with `&`/`...` prefixes) off `text`.
fn split_variable(text: &str) -> (Option<&str>, &str) {
    let text = text.trim_start();
    if !starts_with_variable(text) {
        return (None, text);
    }
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    (Some(&text[..end]), text[end..].trim_start())
}

/// `&...$name` → (by_ref, variadic, `name`)
fn strip_variable(var: &str) -> (bool, bool, SmolStr) {
    let by_ref = var.starts_with('&');
    let var = var.trim_start_matches('&');
    let variadic = var.starts_with("...");
    let var = var.trim_start_matches("...").trim_start_matches('$');
    let name = var.trim_end_matches([',', ';']);
    (by_ref, variadic, SmolStr::new(name))
}

/// `Name <email>` or just `Name`.
fn parse_author(body: &str) -> Tag {
    if let Some((name, rest)) = body.split_once('<') {
        if let Some((email, _)) = rest.split_once('>') {
            return Tag::Author {
                name: name.trim().to_string(),
                email: Some(email.trim().to_string()),
            };
        }
    }
    Tag::Author {
        name: body.trim().to_string(),
        email: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Fqsen;

    fn ctx() -> NameContext {
        NameContext::new(Fqsen::new("\\Luigi\\Pizza").unwrap())
    }

    fn object(value: &str) -> Type {
        Type::Object(Fqsen::new(value).unwrap())
    }

    #[test]
    fn test_param_tag() {
        let tag = Tag::from_raw("param", "Style $style the style to use", &ctx());
        assert_eq!(
            tag,
            Tag::Param {
                ty: Some(object("\\Luigi\\Pizza\\Style")),
                variable: Some("style".into()),
                variadic: false,
                by_ref: false,
                description: "the style to use".to_string(),
            }
        );
        assert_eq!(tag.name(), "param");
    }

    #[test]
    fn test_param_variants() {
        let ctx = ctx();
        let tag = Tag::from_raw("param", "int ...$sizes", &ctx);
        assert!(matches!(tag, Tag::Param { variadic: true, .. }));
        assert_eq!(tag.variable(), Some("sizes"));

        let tag = Tag::from_raw("param", "array &$opts the options", &ctx);
        assert!(matches!(tag, Tag::Param { by_ref: true, .. }));
        assert_eq!(tag.ty(), Some(&Type::array_of(Type::scalar("mixed"))));
        assert_eq!(tag.variable(), Some("opts"));
        assert_eq!(tag.description(), "the options");

        let tag = Tag::from_raw("param", "int &...$counts", &ctx);
        assert!(matches!(tag, Tag::Param { by_ref: true, variadic: true, .. }));
        assert_eq!(tag.variable(), Some("counts"));

        let tag = Tag::from_raw("param", "Countable & Traversable $items", &ctx);
        assert!(matches!(tag.ty(), Some(Type::Compound(parts)) if parts.len() == 2));
        assert_eq!(tag.variable(), Some("items"));

        let tag = Tag::from_raw("param", "$untyped Some text", &ctx);
        assert_eq!(tag.ty(), None);
        assert_eq!(tag.variable(), Some("untyped"));
        assert_eq!(tag.description(), "Some text");

        let tag = Tag::from_raw("param", "array<int, Style> $map", &ctx);
        assert!(matches!(tag.ty(), Some(Type::Array { key: Some(_), .. })));
        assert_eq!(tag.variable(), Some("map"));

        let tag = Tag::from_raw("param", "int | null $maybe", &ctx);
        assert!(matches!(tag.ty(), Some(Type::Compound(parts)) if parts.len() == 2));
        assert_eq!(tag.variable(), Some("maybe"));
    }

    #[test]
    fn test_return_var_throws() {
        let ctx = ctx();
        let tag = Tag::from_raw("return", "Pizza|null the pizza", &ctx);
        assert_eq!(tag.description(), "the pizza");
        assert!(matches!(tag.ty(), Some(Type::Compound(_))));

        let tag = Tag::from_raw("return", "$this fluent", &ctx);
        assert_eq!(tag.ty(), Some(&Type::scalar("$this")));
        assert_eq!(tag.description(), "fluent");

        let tag = Tag::from_raw("var", "Style", &ctx);
        assert_eq!(tag.ty(), Some(&object("\\Luigi\\Pizza\\Style")));
        assert_eq!(tag.variable(), None);

        let tag = Tag::from_raw("throws", "\\RuntimeException when burnt", &ctx);
        assert_eq!(tag.ty(), Some(&object("\\RuntimeException")));
        assert_eq!(tag.name(), "throws");
    }

    #[test]
    fn test_property_modes() {
        let tag = Tag::from_raw("property-read", "int $slices", &ctx());
        assert!(matches!(
            tag,
            Tag::Property {
                mode: PropertyMode::Read,
                ..
            }
        ));
        assert_eq!(tag.name(), "property-read");
        assert_eq!(tag.variable(), Some("slices"));
    }

    #[test]
    fn test_author() {
        let tag = Tag::from_raw("author", "Mario Rossi <mario@example.com>", &ctx());
        assert_eq!(
            tag,
            Tag::Author {
                name: "Mario Rossi".to_string(),
                email: Some("mario@example.com".to_string()),
            }
        );
        let tag = Tag::from_raw("author", "Luigi", &ctx());
        assert!(matches!(tag, Tag::Author { email: None, .. }));
    }

    #[test]
    fn test_generic_and_malformed_type() {
        let ctx = ctx();
        let tag = Tag::from_raw("since", "1.0", &ctx);
        assert_eq!(tag.name(), "since");
        assert_eq!(tag.description(), "1.0");

        let tag = Tag::from_raw("return", "{weird} text", &ctx);
        assert_eq!(tag.ty(), None);
        assert_eq!(tag.description(), "text");
    }
}
