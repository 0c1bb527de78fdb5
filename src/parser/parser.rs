//! Recursive descent parser for PHP declarations
//!
//! Builds the declaration-level [`SourceFile`] tree from tokens. Function
//! bodies and expressions are skipped with balanced-delimiter recovery;
//! default values are captured as raw source text.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use crate::base::LineIndex;
use crate::syntax::{
    ClassConstantNode, ClassNode, ConstantNode, Declaration, DocComment, EnumNode, FunctionNode,
    InterfaceNode, Member, MethodNode, Modifiers, Name, NameKind, NamespaceStmt, Param,
    PropertyNode, SourceFile, Statement, TraitNode, TraitUseNode, UseItem, UseKind, UseStmt,
    VisibilityModifier,
};

/// Parse result containing the tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub file: SourceFile,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    /// 1-based line of `range.start()`
    pub line: u32,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, line: u32) -> Self {
        Self {
            message: message.into(),
            range,
            line,
        }
    }
}

/// Parse PHP source code into a declaration tree
pub fn parse(input: &str) -> Parse {
    let mut parser = Parser::new(input);
    let statements = parser.parse_statements(false);
    parser.finish(statements)
}

/// A doc comment and the index of the significant token following it.
struct PendingDoc {
    comment: DocComment,
    next_token: usize,
}

/// Keywords that can start a top-level declaration.
const DECLARATION_STARTERS: &[&str] = &[
    "abstract",
    "final",
    "readonly",
    "class",
    "interface",
    "trait",
    "enum",
    "function",
    "const",
];

/// The parser state
struct Parser<'a> {
    source: &'a str,
    /// Significant tokens only (no trivia, no doc comments)
    tokens: Vec<Token<'a>>,
    /// Doc comment immediately preceding each significant token
    docs_before: Vec<Option<DocComment>>,
    file_doc: Option<DocComment>,
    pos: usize,
    line_index: LineIndex,
    errors: Vec<SyntaxError>,
    /// Extra declarations from one statement, e.g. `const A = 1, B = 2;`
    queued: Vec<Declaration>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        let line_index = LineIndex::new(source);
        let mut tokens = Vec::new();
        let mut docs = Vec::new();

        for token in Lexer::new(source) {
            match token.kind {
                SyntaxKind::DOC_COMMENT => docs.push(PendingDoc {
                    comment: DocComment::new(token.text, line_index.line(token.offset)),
                    next_token: tokens.len(),
                }),
                kind if kind.is_trivia() => {}
                _ => tokens.push(token),
            }
        }

        let mut docs_before = vec![None; tokens.len() + 1];
        for doc in &docs {
            docs_before[doc.next_token] = Some(doc.comment.clone());
        }
        let file_doc = Self::file_level_doc(&docs, &tokens);

        Self {
            source,
            tokens,
            docs_before,
            file_doc,
            pos: 0,
            line_index,
            errors: Vec::new(),
            queued: Vec::new(),
        }
    }

    /// The first doc comment is the file's own when another doc comment
    /// follows it directly, or when no declaration follows it.
    fn file_level_doc(docs: &[PendingDoc], tokens: &[Token<'_>]) -> Option<DocComment> {
        let first = docs.first()?;
        if docs
            .get(1)
            .is_some_and(|second| second.next_token == first.next_token)
        {
            return Some(first.comment.clone());
        }
        let starts_declaration = tokens.get(first.next_token).is_some_and(|token| {
            token.kind == SyntaxKind::ATTR_START
                || (token.kind == SyntaxKind::NAME
                    && DECLARATION_STARTERS
                        .iter()
                        .any(|kw| token.text.eq_ignore_ascii_case(kw)))
        });
        (!starts_declaration).then(|| first.comment.clone())
    }

    fn finish(self, statements: Vec<Statement>) -> Parse {
        Parse {
            file: SourceFile {
                doc_comment: self.file_doc,
                statements,
            },
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn current_text(&self) -> &'a str {
        self.tokens.get(self.pos).map(|t| t.text).unwrap_or("")
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn nth_text(&self, n: usize) -> &'a str {
        self.tokens.get(self.pos + n).map(|t| t.text).unwrap_or("")
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.at(SyntaxKind::NAME) && self.current_text().eq_ignore_ascii_case(keyword)
    }

    fn nth_is_keyword(&self, n: usize, keyword: &str) -> bool {
        self.nth(n) == SyntaxKind::NAME && self.nth_text(n).eq_ignore_ascii_case(keyword)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Whether the token at `pos + n` directly follows the one before it.
    fn adjacent(&self, n: usize) -> bool {
        let idx = self.pos + n;
        match (idx.checked_sub(1).and_then(|i| self.tokens.get(i)), self.tokens.get(idx)) {
            (Some(prev), Some(next)) => prev.end() == next.offset,
            _ => false,
        }
    }

    fn current_line(&self) -> u32 {
        self.current()
            .map(|t| self.line_index.line(t.offset))
            .unwrap_or_else(|| self.line_index.line(TextSize::of(self.source)))
    }

    fn doc_at(&self, idx: usize) -> Option<DocComment> {
        self.docs_before.get(idx).cloned().flatten()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if !self.at_eof() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn expect_name(&mut self) -> Option<SmolStr> {
        if self.at(SyntaxKind::NAME) {
            let text = SmolStr::new(self.current_text());
            self.bump();
            Some(text)
        } else {
            self.error("expected a name");
            None
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(TextSize::of(self.source)));
        let line = self.line_index.line(range.start());
        self.errors.push(SyntaxError::new(message, range, line));
    }

    /// Skip one statement: up to a terminator or the end of a top-level
    /// block, whichever comes first. Never consumes an unmatched closer.
    fn skip_statement(&mut self) {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(kind) = self.current().map(|t| t.kind) {
            if kind.is_closing_delimiter() {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                self.bump();
                if depth == 0 && kind == SyntaxKind::R_BRACE {
                    break;
                }
                continue;
            }
            if kind.is_opening_delimiter() {
                depth += 1;
            } else if depth == 0 && kind.is_terminator() {
                self.bump();
                break;
            }
            self.bump();
        }
        if self.pos == start && !self.at_eof() && !self.at(SyntaxKind::R_BRACE) {
            self.bump();
        }
    }

    /// Skip a balanced `{ ... }`, `( ... )`, `[ ... ]` or `#[ ... ]` group.
    fn skip_balanced(&mut self) {
        if !self.current_kind().is_opening_delimiter() {
            return;
        }
        let mut depth = 0usize;
        while let Some(kind) = self.current().map(|t| t.kind) {
            self.bump();
            if kind.is_opening_delimiter() {
                depth += 1;
            } else if kind.is_closing_delimiter() {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
        }
        self.error("unterminated block");
    }

    fn skip_attributes(&mut self) {
        while self.at(SyntaxKind::ATTR_START) {
            self.skip_balanced();
        }
    }

    /// Capture raw source text up to (not including) one of `stops` at depth 0.
    fn capture_expression(&mut self, stops: &[SyntaxKind]) -> Option<String> {
        let start = self.current()?.offset;
        let mut end = start;
        let mut depth = 0usize;
        while let Some(token) = self.current() {
            let kind = token.kind;
            if depth == 0 && (stops.contains(&kind) || kind.is_closing_delimiter()) {
                break;
            }
            if kind.is_opening_delimiter() {
                depth += 1;
            } else if kind.is_closing_delimiter() {
                depth -= 1;
            }
            end = token.end();
            self.bump();
        }
        let text = self.source[usize::from(start)..usize::from(end)].trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    // =========================================================================
    // Names and types
    // =========================================================================

    /// `\`? NAME (`\` NAME)* with no whitespace in between.
    fn parse_name(&mut self) -> Option<Name> {
        let mut raw = String::new();
        if self.at(SyntaxKind::BACKSLASH)
            && self.nth(1) == SyntaxKind::NAME
            && self.adjacent(1)
        {
            raw.push('\\');
            self.bump();
        }
        if !self.at(SyntaxKind::NAME) {
            self.error("expected a name");
            return None;
        }
        raw.push_str(self.current_text());
        self.bump();
        while self.at(SyntaxKind::BACKSLASH)
            && self.adjacent(0)
            && self.nth(1) == SyntaxKind::NAME
            && self.adjacent(1)
        {
            raw.push('\\');
            raw.push_str(self.nth_text(1));
            self.bump();
            self.bump();
        }
        Some(Name::parse(&raw))
    }

    fn parse_name_list(&mut self) -> Vec<Name> {
        let mut names = Vec::new();
        while let Some(name) = self.parse_name() {
            names.push(name);
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        names
    }

    /// A signature type hint, kept as written: `?Foo`, `int|false`, `(A&B)|null`.
    fn parse_type_hint(&mut self) -> Option<SmolStr> {
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            let expects_operand = text.is_empty() || text.ends_with(['?', '|', '&', '(']);
            match self.current_kind() {
                SyntaxKind::NAME if expects_operand || text.ends_with('\\') => {
                    text.push_str(self.current_text());
                    self.bump();
                }
                SyntaxKind::BACKSLASH
                    if expects_operand || (self.adjacent(0) && self.nth(1) == SyntaxKind::NAME) =>
                {
                    text.push('\\');
                    self.bump();
                }
                SyntaxKind::QUESTION if text.is_empty() => {
                    text.push('?');
                    self.bump();
                }
                SyntaxKind::PIPE if !expects_operand => {
                    text.push('|');
                    self.bump();
                }
                SyntaxKind::AMP
                    if !expects_operand
                        && !matches!(
                            self.nth(1),
                            SyntaxKind::VARIABLE | SyntaxKind::ELLIPSIS | SyntaxKind::AMP
                        ) =>
                {
                    text.push('&');
                    self.bump();
                }
                SyntaxKind::L_PAREN if text.is_empty() || text.ends_with('|') => {
                    text.push('(');
                    depth += 1;
                    self.bump();
                }
                SyntaxKind::R_PAREN if depth > 0 && !expects_operand => {
                    text.push(')');
                    depth -= 1;
                    self.bump();
                }
                _ => break,
            }
        }
        (!text.is_empty()).then(|| SmolStr::new(text))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn parse_statements(&mut self, in_block: bool) -> Vec<Statement> {
        let mut statements = Vec::new();
        loop {
            if self.at_eof() {
                if in_block {
                    self.error("expected '}' before end of file");
                }
                break;
            }
            match self.current_kind() {
                SyntaxKind::R_BRACE => {
                    if in_block {
                        self.bump();
                        break;
                    }
                    self.error("unmatched '}'");
                    self.bump();
                }
                SyntaxKind::SEMICOLON | SyntaxKind::CLOSE_TAG => self.bump(),
                SyntaxKind::ATTR_START | SyntaxKind::NAME => {
                    if let Some(statement) = self.parse_statement() {
                        statements.push(statement);
                        statements.extend(self.queued.drain(..).map(Statement::Declaration));
                    }
                }
                _ => self.skip_statement(),
            }
        }
        statements
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        let start = self.pos;
        self.skip_attributes();

        if self.at_keyword("namespace") && !self.nth_is_separator(1) {
            return self.parse_namespace().map(Statement::Namespace);
        }
        if self.at_keyword("use") {
            return self.parse_use().map(Statement::Use);
        }
        if self.at_declaration_start() {
            return self.parse_declaration(start).map(Statement::Declaration);
        }

        self.skip_statement();
        None
    }

    /// `namespace\foo()` is a relative call, not a namespace declaration.
    fn nth_is_separator(&self, n: usize) -> bool {
        self.nth(n) == SyntaxKind::BACKSLASH && self.adjacent(n)
    }

    fn at_declaration_start(&self) -> bool {
        let mut n = 0;
        while ["abstract", "final", "readonly"]
            .iter()
            .any(|kw| self.nth_is_keyword(n, kw))
        {
            n += 1;
        }
        if self.nth_is_keyword(n, "class")
            || self.nth_is_keyword(n, "interface")
            || self.nth_is_keyword(n, "trait")
        {
            return self.nth(n + 1) == SyntaxKind::NAME;
        }
        if n > 0 {
            return false;
        }
        if self.nth_is_keyword(0, "enum") {
            return self.nth(1) == SyntaxKind::NAME;
        }
        if self.nth_is_keyword(0, "function") {
            return self.nth(1) == SyntaxKind::NAME
                || (self.nth(1) == SyntaxKind::AMP && self.nth(2) == SyntaxKind::NAME);
        }
        self.nth_is_keyword(0, "const") && self.nth(1) == SyntaxKind::NAME
    }

    fn parse_namespace(&mut self) -> Option<NamespaceStmt> {
        let line = self.current_line();
        self.bump();
        let name = if self.at(SyntaxKind::NAME) {
            self.parse_name()
                .map(|name| Name::new(name.text, NameKind::FullyQualified))
        } else {
            None
        };

        if self.eat(SyntaxKind::SEMICOLON) || self.eat(SyntaxKind::CLOSE_TAG) {
            return Some(NamespaceStmt {
                name,
                body: None,
                line,
            });
        }
        if self.eat(SyntaxKind::L_BRACE) {
            let body = self.parse_statements(true);
            return Some(NamespaceStmt {
                name,
                body: Some(body),
                line,
            });
        }

        self.error("expected ';' or '{' after namespace name");
        self.skip_statement();
        None
    }

    fn parse_use(&mut self) -> Option<UseStmt> {
        let line = self.current_line();
        self.bump();
        let kind = self.parse_use_kind().unwrap_or(UseKind::Class);

        let mut items = Vec::new();
        loop {
            let Some(prefix) = self.parse_name() else {
                self.skip_statement();
                return None;
            };
            if self.at(SyntaxKind::BACKSLASH) && self.nth(1) == SyntaxKind::L_BRACE {
                self.bump();
                self.bump();
                self.parse_group_use(&prefix, kind, &mut items);
            } else {
                let alias = self.parse_use_alias();
                items.push(UseItem {
                    kind,
                    name: Name::new(prefix.text, NameKind::FullyQualified),
                    alias,
                });
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }

        if !self.eat(SyntaxKind::SEMICOLON) && !self.eat(SyntaxKind::CLOSE_TAG) {
            self.error("expected ';' after use statement");
            self.skip_statement();
        }
        Some(UseStmt { items, line })
    }

    fn parse_use_kind(&mut self) -> Option<UseKind> {
        let kind = if self.at_keyword("function") {
            UseKind::Function
        } else if self.at_keyword("const") {
            UseKind::Constant
        } else {
            return None;
        };
        if self.nth(1) == SyntaxKind::NAME || self.nth(1) == SyntaxKind::BACKSLASH {
            self.bump();
            Some(kind)
        } else {
            None
        }
    }

    fn parse_use_alias(&mut self) -> Option<SmolStr> {
        if self.at_keyword("as") {
            self.bump();
            self.expect_name()
        } else {
            None
        }
    }

    /// `use Prefix\{A, function b, C as D};` after the opening brace.
    fn parse_group_use(&mut self, prefix: &Name, default_kind: UseKind, items: &mut Vec<UseItem>) {
        while !self.at_eof() && !self.at(SyntaxKind::R_BRACE) {
            let kind = self.parse_use_kind().unwrap_or(default_kind);
            let Some(name) = self.parse_name() else {
                break;
            };
            let alias = self.parse_use_alias();
            items.push(UseItem {
                kind,
                name: Name::new(
                    format!("{}\\{}", prefix.text, name.text),
                    NameKind::FullyQualified,
                ),
                alias,
            });
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::R_BRACE);
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn parse_declaration(&mut self, start: usize) -> Option<Declaration> {
        let keyword_pos = self.pos;
        let doc_comment = self.doc_at(start).or_else(|| self.doc_at(keyword_pos));
        let line = self.current_line();
        let modifiers = self.parse_modifiers();

        if self.at_keyword("class") {
            self.bump();
            return self.parse_class(doc_comment, modifiers, line);
        }
        if self.at_keyword("interface") {
            self.bump();
            return self.parse_interface(doc_comment, line);
        }
        if self.at_keyword("trait") {
            self.bump();
            let name = self.expect_name()?;
            let members = self.parse_class_body();
            return Some(Declaration::Trait(TraitNode {
                name,
                line,
                doc_comment,
                members,
            }));
        }
        if self.at_keyword("enum") {
            self.bump();
            let name = self.expect_name()?;
            while !self.at_eof() && !self.at(SyntaxKind::L_BRACE) {
                self.bump();
            }
            self.skip_balanced();
            return Some(Declaration::Enum(EnumNode {
                name,
                line,
                doc_comment,
            }));
        }
        if self.at_keyword("function") {
            self.bump();
            return self.parse_function(doc_comment, line);
        }

        self.bump();
        self.parse_constants(doc_comment, line)
    }

    fn parse_modifiers(&mut self) -> Modifiers {
        let mut modifiers = Modifiers::default();
        while self.at(SyntaxKind::NAME) {
            let text = self.current_text().to_ascii_lowercase();
            match text.as_str() {
                "public" => modifiers.visibility = Some(VisibilityModifier::Public),
                "protected" => modifiers.visibility = Some(VisibilityModifier::Protected),
                "private" => modifiers.visibility = Some(VisibilityModifier::Private),
                "var" => modifiers.visibility = Some(VisibilityModifier::Public),
                "static" => modifiers.is_static = true,
                "abstract" => modifiers.is_abstract = true,
                "final" => modifiers.is_final = true,
                "readonly" => modifiers.is_readonly = true,
                _ => break,
            }
            self.bump();
        }
        modifiers
    }

    fn parse_class(
        &mut self,
        doc_comment: Option<DocComment>,
        modifiers: Modifiers,
        line: u32,
    ) -> Option<Declaration> {
        let name = self.expect_name()?;
        let extends = if self.at_keyword("extends") {
            self.bump();
            self.parse_name()
        } else {
            None
        };
        let implements = if self.at_keyword("implements") {
            self.bump();
            self.parse_name_list()
        } else {
            Vec::new()
        };
        let members = self.parse_class_body();
        Some(Declaration::Class(ClassNode {
            name,
            line,
            doc_comment,
            modifiers,
            extends,
            implements,
            members,
        }))
    }

    fn parse_interface(&mut self, doc_comment: Option<DocComment>, line: u32) -> Option<Declaration> {
        let name = self.expect_name()?;
        let extends = if self.at_keyword("extends") {
            self.bump();
            self.parse_name_list()
        } else {
            Vec::new()
        };
        let members = self.parse_class_body();
        Some(Declaration::Interface(InterfaceNode {
            name,
            line,
            doc_comment,
            extends,
            members,
        }))
    }

    fn parse_function(&mut self, doc_comment: Option<DocComment>, line: u32) -> Option<Declaration> {
        let by_ref = self.eat(SyntaxKind::AMP);
        let name = self.expect_name()?;
        let params = self.parse_params();
        let return_type = self.parse_return_type();
        if self.at(SyntaxKind::L_BRACE) {
            self.skip_balanced();
        } else {
            self.expect(SyntaxKind::SEMICOLON);
        }
        Some(Declaration::Function(FunctionNode {
            name,
            line,
            doc_comment,
            by_ref,
            params,
            return_type,
        }))
    }

    /// `const A = 1, B = 2;` at file level; only the first is returned as a
    /// statement, the rest are queued as siblings.
    fn parse_constants(&mut self, doc_comment: Option<DocComment>, line: u32) -> Option<Declaration> {
        let mut constants = Vec::new();
        loop {
            let item_line = self.current_line();
            let Some(name) = self.expect_name() else {
                break;
            };
            let value = if self.eat(SyntaxKind::EQ) {
                self.capture_expression(&[SyntaxKind::COMMA, SyntaxKind::SEMICOLON])
            } else {
                self.error("expected '=' in constant declaration");
                None
            };
            constants.push(ConstantNode {
                name,
                line: if constants.is_empty() { line } else { item_line },
                doc_comment: doc_comment.clone(),
                value,
            });
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        if !self.eat(SyntaxKind::SEMICOLON) && !self.eat(SyntaxKind::CLOSE_TAG) {
            self.error("expected ';' after constant declaration");
            self.skip_statement();
        }

        let mut constants = constants.into_iter();
        let first = constants.next()?;
        self.queued.extend(constants.map(Declaration::Constant));
        Some(Declaration::Constant(first))
    }

    fn parse_return_type(&mut self) -> Option<SmolStr> {
        if self.eat(SyntaxKind::COLON) {
            let hint = self.parse_type_hint();
            if hint.is_none() {
                self.error("expected a return type");
            }
            hint
        } else {
            None
        }
    }

    fn parse_params(&mut self) -> Vec<Param> {
        let mut params = Vec::new();
        if !self.expect(SyntaxKind::L_PAREN) {
            return params;
        }
        while !self.at_eof() && !self.at(SyntaxKind::R_PAREN) {
            match self.parse_param() {
                Some(param) => params.push(param),
                None => {
                    while !self.at_eof()
                        && !self.at(SyntaxKind::COMMA)
                        && !self.at(SyntaxKind::R_PAREN)
                    {
                        if self.current_kind().is_opening_delimiter() {
                            self.skip_balanced();
                        } else {
                            self.bump();
                        }
                    }
                }
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::R_PAREN);
        params
    }

    fn parse_param(&mut self) -> Option<Param> {
        self.skip_attributes();
        let line = self.current_line();
        let modifiers = self.parse_modifiers();
        let type_hint = if self.at(SyntaxKind::VARIABLE)
            || self.at(SyntaxKind::AMP)
            || self.at(SyntaxKind::ELLIPSIS)
        {
            None
        } else {
            self.parse_type_hint()
        };
        let by_ref = self.eat(SyntaxKind::AMP);
        let variadic = self.eat(SyntaxKind::ELLIPSIS);
        if !self.at(SyntaxKind::VARIABLE) {
            self.error("expected a parameter variable");
            return None;
        }
        let name = SmolStr::new(self.current_text().trim_start_matches('$'));
        self.bump();
        let default = if self.eat(SyntaxKind::EQ) {
            self.capture_expression(&[SyntaxKind::COMMA])
        } else {
            None
        };
        Some(Param {
            name,
            line,
            type_hint,
            default,
            by_ref,
            variadic,
            promoted: (!modifiers.is_empty()).then_some(modifiers),
        })
    }

    // =========================================================================
    // Class-like bodies
    // =========================================================================

    fn parse_class_body(&mut self) -> Vec<Member> {
        let mut members = Vec::new();
        if !self.expect(SyntaxKind::L_BRACE) {
            self.skip_statement();
            return members;
        }
        loop {
            if self.at_eof() {
                self.error("expected '}' to close class body");
                break;
            }
            match self.current_kind() {
                SyntaxKind::R_BRACE => {
                    self.bump();
                    break;
                }
                SyntaxKind::SEMICOLON => self.bump(),
                SyntaxKind::ATTR_START | SyntaxKind::NAME => self.parse_member(&mut members),
                _ => {
                    self.error("unexpected token in class body");
                    self.skip_statement();
                }
            }
        }
        members
    }

    fn parse_member(&mut self, members: &mut Vec<Member>) {
        let start = self.pos;
        self.skip_attributes();
        let keyword_pos = self.pos;
        let doc_comment = self.doc_at(start).or_else(|| self.doc_at(keyword_pos));
        let line = self.current_line();

        if self.at_keyword("use") {
            self.bump();
            let names = self.parse_name_list();
            if self.at(SyntaxKind::L_BRACE) {
                self.skip_balanced();
            } else {
                self.expect(SyntaxKind::SEMICOLON);
            }
            members.push(Member::TraitUse(TraitUseNode { names, line }));
            return;
        }
        if self.at_keyword("case") {
            self.skip_statement();
            return;
        }

        let modifiers = self.parse_modifiers();

        if self.at_keyword("const") {
            self.bump();
            self.parse_class_constants(doc_comment, modifiers, line, members);
        } else if self.at_keyword("function") {
            self.bump();
            if let Some(method) = self.parse_method(doc_comment, modifiers, line) {
                members.push(Member::Method(method));
            }
        } else if !modifiers.is_empty() || self.at(SyntaxKind::VARIABLE) {
            self.parse_properties(doc_comment, modifiers, line, members);
        } else {
            self.error(format!("unexpected '{}' in class body", self.current_text()));
            self.skip_statement();
        }
    }

    fn parse_class_constants(
        &mut self,
        doc_comment: Option<DocComment>,
        modifiers: Modifiers,
        line: u32,
        members: &mut Vec<Member>,
    ) {
        // `const string NAME = ...` carries a type before the name.
        let type_hint = if self.at(SyntaxKind::NAME) && self.nth(1) == SyntaxKind::EQ {
            None
        } else {
            self.parse_type_hint()
        };
        let mut members_added = false;
        loop {
            let item_line = self.current_line();
            let Some(name) = self.expect_name() else {
                self.skip_statement();
                return;
            };
            let value = if self.eat(SyntaxKind::EQ) {
                self.capture_expression(&[SyntaxKind::COMMA, SyntaxKind::SEMICOLON])
            } else {
                self.error("expected '=' in constant declaration");
                None
            };
            let first = !members_added;
            members_added = true;
            members.push(Member::Constant(ClassConstantNode {
                name,
                line: if first { line } else { item_line },
                doc_comment: doc_comment.clone(),
                modifiers,
                type_hint: type_hint.clone(),
                value,
            }));
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::SEMICOLON);
    }

    fn parse_method(
        &mut self,
        doc_comment: Option<DocComment>,
        modifiers: Modifiers,
        line: u32,
    ) -> Option<MethodNode> {
        let by_ref = self.eat(SyntaxKind::AMP);
        let name = self.expect_name();
        let Some(name) = name else {
            self.skip_statement();
            return None;
        };
        let params = self.parse_params();
        let return_type = self.parse_return_type();
        let has_body = self.at(SyntaxKind::L_BRACE);
        if has_body {
            self.skip_balanced();
        } else {
            self.expect(SyntaxKind::SEMICOLON);
        }
        Some(MethodNode {
            name,
            line,
            doc_comment,
            modifiers,
            by_ref,
            params,
            return_type,
            has_body,
        })
    }

    fn parse_properties(
        &mut self,
        doc_comment: Option<DocComment>,
        modifiers: Modifiers,
        line: u32,
        members: &mut Vec<Member>,
    ) {
        let type_hint = if self.at(SyntaxKind::VARIABLE) {
            None
        } else {
            self.parse_type_hint()
        };
        let mut members_added = false;
        loop {
            if !self.at(SyntaxKind::VARIABLE) {
                self.error("expected a property variable");
                self.skip_statement();
                return;
            }
            let item_line = self.current_line();
            let name = SmolStr::new(self.current_text().trim_start_matches('$'));
            self.bump();
            let default = if self.eat(SyntaxKind::EQ) {
                self.capture_expression(&[SyntaxKind::COMMA, SyntaxKind::SEMICOLON])
            } else {
                None
            };
            let first = !members_added;
            members_added = true;
            members.push(Member::Property(PropertyNode {
                name,
                line: if first { line } else { item_line },
                doc_comment: doc_comment.clone(),
                modifiers,
                type_hint: type_hint.clone(),
                default,
            }));
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        // Property hooks: `public string $name { get => ...; }`
        if self.at(SyntaxKind::L_BRACE) {
            self.skip_balanced();
        } else {
            self.expect(SyntaxKind::SEMICOLON);
        }
    }
}
