//! Type expressions written in doc comments.
//!
//! ```text
//! union        := intersection ('|' intersection)*
//! intersection := postfix ('&' postfix)*
//! postfix      := primary ('[]')*
//! primary      := '?' primary | '(' union ')' | name ('<' union (',' union)* '>')?
//! ```
//!
//! Intersections are kept as a [`Type::Compound`] like unions. Class-like
//! names are resolved through a [`NameContext`] while parsing.

use std::fmt;

use smol_str::SmolStr;

use crate::base::Fqsen;
use crate::resolve::{NameContext, is_self_reference};

/// A documented type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// A keyword type: `int`, `string`, `mixed`, `null`, ...
    Scalar(SmolStr),
    /// A class-like reference.
    Object(Fqsen),
    /// `array`, `T[]`, `array<T>`, `array<K, T>`.
    Array {
        key: Option<Box<Type>>,
        element: Box<Type>,
    },
    /// `A|B` (and `A&B`).
    Compound(Vec<Type>),
    /// `?T`
    Nullable(Box<Type>),
}

/// Keyword types, lowercase. Aliases are mapped by [`canonical_keyword`].
const KEYWORDS: &[&str] = &[
    "string",
    "int",
    "float",
    "bool",
    "true",
    "false",
    "null",
    "mixed",
    "void",
    "never",
    "object",
    "callable",
    "iterable",
    "resource",
    "scalar",
    "numeric",
    "array-key",
    "class-string",
    "positive-int",
    "negative-int",
    "non-empty-string",
];

fn canonical_keyword(name: &str) -> Option<&'static str> {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "integer" => Some("int"),
        "boolean" => Some("bool"),
        "double" => Some("float"),
        other => KEYWORDS.iter().copied().find(|kw| *kw == other),
    }
}

impl Type {
    pub fn scalar(name: &str) -> Self {
        Type::Scalar(SmolStr::new(name))
    }

    /// `T[]`
    pub fn array_of(element: Type) -> Self {
        Type::Array {
            key: None,
            element: Box::new(element),
        }
    }

    /// Parse and resolve a type expression. Returns `None` for text that is
    /// not a well-formed type.
    pub fn parse(text: &str, ctx: &NameContext) -> Option<Type> {
        let tokens = lex(text)?;
        if tokens.is_empty() {
            return None;
        }
        let mut parser = TypeParser {
            tokens,
            pos: 0,
            ctx,
        };
        let ty = parser.union()?;
        (parser.pos == parser.tokens.len()).then_some(ty)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Scalar(name) => f.write_str(name),
            Type::Object(fqsen) => write!(f, "{fqsen}"),
            Type::Array { key: None, element } => match element.as_ref() {
                Type::Scalar(name) if name == "mixed" => f.write_str("array"),
                Type::Scalar(_) | Type::Object(_) | Type::Array { .. } => {
                    write!(f, "{element}[]")
                }
                _ => write!(f, "array<{element}>"),
            },
            Type::Array {
                key: Some(key),
                element,
            } => write!(f, "array<{key}, {element}>"),
            Type::Compound(types) => {
                for (idx, ty) in types.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("|")?;
                    }
                    match ty {
                        Type::Compound(_) => write!(f, "({ty})")?,
                        _ => write!(f, "{ty}")?,
                    }
                }
                Ok(())
            }
            Type::Nullable(inner) => write!(f, "?{inner}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token<'a> {
    Name(&'a str),
    Pipe,
    Amp,
    Question,
    LParen,
    RParen,
    Lt,
    Gt,
    Comma,
    Brackets,
}

fn lex(text: &str) -> Option<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut rest = text.trim();
    while let Some(c) = rest.chars().next() {
        let (token, len) = match c {
            c if c.is_whitespace() => {
                rest = rest.trim_start();
                continue;
            }
            '|' => (Token::Pipe, 1),
            '&' => (Token::Amp, 1),
            '?' => (Token::Question, 1),
            '(' => (Token::LParen, 1),
            ')' => (Token::RParen, 1),
            '<' => (Token::Lt, 1),
            '>' => (Token::Gt, 1),
            ',' => (Token::Comma, 1),
            '[' if rest.starts_with("[]") => (Token::Brackets, 2),
            c if is_name_char(c) || c == '$' => {
                let len = rest
                    .char_indices()
                    .skip(1)
                    .find(|(_, c)| !is_name_char(*c))
                    .map(|(idx, _)| idx)
                    .unwrap_or(rest.len());
                (Token::Name(&rest[..len]), len)
            }
            _ => return None,
        };
        tokens.push(token);
        rest = &rest[len..];
    }
    Some(tokens)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '\\' | '-') || !c.is_ascii()
}

struct TypeParser<'t, 'c> {
    tokens: Vec<Token<'t>>,
    pos: usize,
    ctx: &'c NameContext,
}

impl<'t> TypeParser<'t, '_> {
    fn peek(&self) -> Option<&Token<'t>> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, token: &Token<'_>) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn union(&mut self) -> Option<Type> {
        self.list(&Token::Pipe, Self::intersection)
    }

    fn intersection(&mut self) -> Option<Type> {
        self.list(&Token::Amp, Self::postfix)
    }

    fn list(
        &mut self,
        separator: &Token<'_>,
        mut item: impl FnMut(&mut Self) -> Option<Type>,
    ) -> Option<Type> {
        let mut types = vec![item(self)?];
        while self.eat(separator) {
            types.push(item(self)?);
        }
        if types.len() == 1 {
            types.pop()
        } else {
            Some(Type::Compound(types))
        }
    }

    fn postfix(&mut self) -> Option<Type> {
        let mut ty = self.primary()?;
        while self.eat(&Token::Brackets) {
            ty = Type::array_of(ty);
        }
        Some(ty)
    }

    fn primary(&mut self) -> Option<Type> {
        if self.eat(&Token::Question) {
            return Some(Type::Nullable(Box::new(self.primary()?)));
        }
        if self.eat(&Token::LParen) {
            let inner = self.union()?;
            return self.eat(&Token::RParen).then_some(inner);
        }
        let Some(Token::Name(name)) = self.peek().cloned() else {
            return None;
        };
        self.pos += 1;

        let args = if self.eat(&Token::Lt) {
            let mut args = vec![self.union()?];
            while self.eat(&Token::Comma) {
                args.push(self.union()?);
            }
            if !self.eat(&Token::Gt) {
                return None;
            }
            args
        } else {
            Vec::new()
        };

        Some(self.named(name, args))
    }

    fn named(&self, name: &str, mut args: Vec<Type>) -> Type {
        if name.eq_ignore_ascii_case("array") || name.eq_ignore_ascii_case("list") {
            let element = args.pop().unwrap_or_else(|| Type::scalar("mixed"));
            return Type::Array {
                key: args.pop().map(Box::new),
                element: Box::new(element),
            };
        }
        if let Some(keyword) = canonical_keyword(name) {
            return Type::scalar(keyword);
        }
        if is_self_reference(name) {
            return match self.ctx.class() {
                Some(class) => Type::Object(class.clone()),
                None => Type::Scalar(SmolStr::new(name.to_ascii_lowercase())),
            };
        }
        if name.starts_with('$') {
            return Type::Scalar(SmolStr::new(name));
        }
        // Generic arguments of class types are not modelled.
        Type::Object(self.ctx.resolve_str(name))
    }
}
