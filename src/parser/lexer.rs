//! Logos-based lexer for PHP
//!
//! Fast tokenization using the logos crate. Text outside `<?php ... ?>`
//! and heredoc bodies are not regular, so the wrapper handles them by
//! bumping the logos lexer past them.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Offset one past the last byte of this token.
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    input: &'a str,
    inner: logos::Lexer<'a, LogosToken>,
    started: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            inner: LogosToken::lexer(input),
            started: false,
        }
    }

    fn token(&self, kind: SyntaxKind) -> Token<'a> {
        let span = self.inner.span();
        Token {
            kind,
            text: &self.input[span.clone()],
            offset: TextSize::new(span.start as u32),
        }
    }

    /// Text before the first open tag is markup.
    fn leading_html(&mut self) -> Option<Token<'a>> {
        let html_len = find_open_tag(self.input).unwrap_or(self.input.len());
        if html_len == 0 {
            return None;
        }
        self.inner.bump(html_len);
        Some(Token {
            kind: SyntaxKind::INLINE_HTML,
            text: &self.input[..html_len],
            offset: TextSize::new(0),
        })
    }

    /// `?>` swallows the markup up to the next open tag.
    fn finish_close_tag(&mut self) {
        let remainder = self.inner.remainder();
        let html_len = find_open_tag(remainder).unwrap_or(remainder.len());
        self.inner.bump(html_len);
    }

    /// Extend a heredoc/nowdoc opener up to and including its closing label.
    fn finish_heredoc(&mut self) {
        let label: String = self
            .inner
            .slice()
            .trim_start_matches('<')
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string();
        let remainder = self.inner.remainder();
        let end = find_heredoc_end(remainder, &label).unwrap_or(remainder.len());
        self.inner.bump(end);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            if let Some(html) = self.leading_html() {
                return Some(html);
            }
        }

        let logos_token = self.inner.next()?;
        let kind = match logos_token {
            Ok(LogosToken::CloseTag) => {
                self.finish_close_tag();
                SyntaxKind::CLOSE_TAG
            }
            Ok(LogosToken::HeredocStart) => {
                self.finish_heredoc();
                SyntaxKind::STRING
            }
            Ok(LogosToken::BlockComment) if is_doc_comment(self.inner.slice()) => {
                SyntaxKind::DOC_COMMENT
            }
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(self.token(kind))
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Extend `/*` up to and including the next `*/`. An unterminated
/// comment runs to the end of input.
fn block_comment(lex: &mut logos::Lexer<'_, LogosToken>) {
    let remainder = lex.remainder();
    let end = remainder.find("*/").map_or(remainder.len(), |idx| idx + 2);
    lex.bump(end);
}

fn is_doc_comment(text: &str) -> bool {
    text.starts_with("/**") && text.len() > 4 && !text.starts_with("/***/")
}

/// Byte position of the next `<?php` / `<?=` open tag.
fn find_open_tag(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(idx) = text[from..].find("<?") {
        let at = from + idx;
        let rest = &bytes[at + 2..];
        if rest.first() == Some(&b'=')
            || (rest.len() >= 3 && rest[..3].eq_ignore_ascii_case(b"php"))
        {
            return Some(at);
        }
        from = at + 2;
    }
    None
}

/// Byte position just past the closing label of a heredoc body.
fn find_heredoc_end(body: &str, label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut line_start = body.find('\n')? + 1;
    loop {
        let line = &body[line_start..];
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        let candidate = &line[indent..];
        if let Some(after) = candidate.strip_prefix(label) {
            let boundary = after
                .chars()
                .next()
                .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
            if boundary {
                return Some(line_start + indent + label.len());
            }
        }
        line_start += line.find('\n')? + 1;
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    #[regex(r"#([^\[\n][^\n]*)?")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("<?php", ignore(ascii_case))]
    #[token("<?=")]
    OpenTag,

    #[token("?>")]
    CloseTag,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Name,

    #[regex(r"\$[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Variable,

    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9_]+)?")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    Number,

    #[regex(r"'([^'\\]|\\.)*'")]
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"`([^`\\]|\\.)*`")]
    String,

    #[regex(r#"<<<[ \t]*["']?[a-zA-Z_][a-zA-Z0-9_]*["']?"#)]
    HeredocStart,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("#[")]
    AttrStart,

    #[token("::")]
    ColonColon,

    #[token("...")]
    Ellipsis,

    #[token("=>")]
    FatArrow,

    #[token("->")]
    #[token("?->")]
    Arrow,

    #[token("===")]
    #[token("!==")]
    #[token("==")]
    #[token("!=")]
    #[token("<>")]
    #[token("<=>")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("??")]
    #[token("??=")]
    #[token("**")]
    #[token("++")]
    #[token("--")]
    #[token("<<")]
    #[token(">>")]
    #[token(".=")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("|=")]
    #[token("&=")]
    #[token("^=")]
    #[regex(r"[-+*/%.!<>^~@$]")]
    Operator,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("\\")]
    Backslash,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            OpenTag => SyntaxKind::OPEN_TAG,
            CloseTag => SyntaxKind::CLOSE_TAG,

            // Literals
            Name => SyntaxKind::NAME,
            Variable => SyntaxKind::VARIABLE,
            Number => SyntaxKind::NUMBER,
            String | HeredocStart => SyntaxKind::STRING,

            // Punctuation
            AttrStart => SyntaxKind::ATTR_START,
            ColonColon => SyntaxKind::COLON_COLON,
            Ellipsis => SyntaxKind::ELLIPSIS,
            FatArrow => SyntaxKind::FAT_ARROW,
            Arrow => SyntaxKind::ARROW,
            Operator => SyntaxKind::OPERATOR,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            Semicolon => SyntaxKind::SEMICOLON,
            Comma => SyntaxKind::COMMA,
            Eq => SyntaxKind::EQ,
            Amp => SyntaxKind::AMP,
            Pipe => SyntaxKind::PIPE,
            Question => SyntaxKind::QUESTION,
            Colon => SyntaxKind::COLON,
            Backslash => SyntaxKind::BACKSLASH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        Lexer::new(input)
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn test_lex_class_header() {
        assert_eq!(
            kinds("<?php class Pizza extends \\Pizza {}"),
            vec![
                SyntaxKind::NAME,
                SyntaxKind::NAME,
                SyntaxKind::NAME,
                SyntaxKind::BACKSLASH,
                SyntaxKind::NAME,
                SyntaxKind::L_BRACE,
                SyntaxKind::R_BRACE,
            ]
        );
    }

    #[test]
    fn test_leading_html_is_one_token() {
        let tokens = tokenize("<html>\n<?php $a;");
        assert_eq!(tokens[0].kind, SyntaxKind::INLINE_HTML);
        assert_eq!(tokens[0].text, "<html>\n");
        assert_eq!(tokens[1].kind, SyntaxKind::OPEN_TAG);
        assert_eq!(tokens[1].offset, TextSize::new(7));
    }

    #[test]
    fn test_file_without_open_tag_is_markup() {
        assert_eq!(kinds("class NotPhp {}"), Vec::<SyntaxKind>::new());
    }

    #[test]
    fn test_doc_comment_is_distinguished() {
        let tokens = tokenize("<?php /** Doc */ /* plain */ /**/");
        let comment_kinds: Vec<_> = tokens
            .iter()
            .filter(|t| t.text.starts_with("/*"))
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            comment_kinds,
            vec![
                SyntaxKind::DOC_COMMENT,
                SyntaxKind::BLOCK_COMMENT,
                SyntaxKind::BLOCK_COMMENT
            ]
        );
    }

    #[test]
    fn test_multiline_doc_comment_before_declaration() {
        let source = "<?php\n/**\n * Summary.\n *\n * @param int $a *not* closed\n */\nfunction f($a) {}";
        let tokens = tokenize(source);
        let doc = tokens
            .iter()
            .find(|t| t.kind == SyntaxKind::DOC_COMMENT)
            .unwrap();
        assert!(doc.text.starts_with("/**\n * Summary."));
        assert!(doc.text.ends_with(" */"));
        assert!(!tokens.iter().any(|t| t.kind == SyntaxKind::ERROR));
        assert_eq!(
            kinds(source),
            vec![
                SyntaxKind::DOC_COMMENT,
                SyntaxKind::NAME,
                SyntaxKind::NAME,
                SyntaxKind::L_PAREN,
                SyntaxKind::VARIABLE,
                SyntaxKind::R_PAREN,
                SyntaxKind::L_BRACE,
                SyntaxKind::R_BRACE,
            ]
        );
    }

    #[test]
    fn test_degenerate_block_comments() {
        let tokens = tokenize("<?php /**/ /***/ /** **/ $a");
        let comments: Vec<_> = tokens
            .iter()
            .filter(|t| t.text.starts_with("/*"))
            .map(|t| (t.kind, t.text))
            .collect();
        assert_eq!(
            comments,
            vec![
                (SyntaxKind::BLOCK_COMMENT, "/**/"),
                (SyntaxKind::BLOCK_COMMENT, "/***/"),
                (SyntaxKind::DOC_COMMENT, "/** **/"),
            ]
        );
        assert_eq!(kinds("<?php /**/ /***/ $a"), vec![SyntaxKind::VARIABLE]);
    }

    #[test]
    fn test_unterminated_comment_runs_to_end() {
        let tokens = tokenize("<?php /* open class A {}");
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, SyntaxKind::BLOCK_COMMENT);
        assert_eq!(last.text, "/* open class A {}");
    }

    #[test]
    fn test_close_tag_swallows_markup() {
        let tokens = tokenize("<?php $a; ?><p>{}</p><?php $b;");
        let close = tokens
            .iter()
            .find(|t| t.kind == SyntaxKind::CLOSE_TAG)
            .unwrap();
        assert_eq!(close.text, "?><p>{}</p>");
        assert!(!kinds("<?php ?><p>{}</p><?php").contains(&SyntaxKind::L_BRACE));
    }

    #[test]
    fn test_heredoc_is_a_single_string() {
        let source = "<?php $a = <<<EOT\n  { not a brace }\n  EOT;\n";
        let tokens = tokenize(source);
        let string = tokens
            .iter()
            .find(|t| t.kind == SyntaxKind::STRING)
            .unwrap();
        assert!(string.text.starts_with("<<<EOT"));
        assert!(string.text.ends_with("EOT"));
        assert!(!kinds(source).contains(&SyntaxKind::L_BRACE));
    }

    #[test]
    fn test_variables_and_by_ref() {
        assert_eq!(
            kinds("<?php &$style ...$rest"),
            vec![
                SyntaxKind::AMP,
                SyntaxKind::VARIABLE,
                SyntaxKind::ELLIPSIS,
                SyntaxKind::VARIABLE,
            ]
        );
    }

    #[test]
    fn test_hash_comment_vs_attribute() {
        assert_eq!(
            kinds("<?php # comment\n#[Attr]"),
            vec![
                SyntaxKind::ATTR_START,
                SyntaxKind::NAME,
                SyntaxKind::R_BRACKET,
            ]
        );
    }
}
