//! Token kinds produced by the PHP lexer.
//!
//! Keywords are not distinguished here: PHP keywords are case-insensitive and
//! many of them are valid member names, so the parser matches them
//! contextually on `NAME` tokens.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,
    OPEN_TAG,    // <?php or <?=
    INLINE_HTML, // text outside PHP tags

    // =========================================================================
    // DOCUMENTATION (not trivia: attaches to the next declaration)
    // =========================================================================
    DOC_COMMENT, // /** ... */

    // =========================================================================
    // LITERALS
    // =========================================================================
    NAME,     // identifier or keyword
    VARIABLE, // $name
    NUMBER,   // 42, 0x2A, 4.2e1
    STRING,   // '...', "...", `...`, heredoc/nowdoc

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_PAREN,     // (
    R_PAREN,     // )
    L_BRACKET,   // [
    R_BRACKET,   // ]
    ATTR_START,  // #[
    SEMICOLON,   // ;
    CLOSE_TAG,   // ?>  (acts as a statement terminator)
    COMMA,       // ,
    EQ,          // =
    AMP,         // &
    PIPE,        // |
    QUESTION,    // ?
    COLON,       // :
    COLON_COLON, // ::
    ELLIPSIS,    // ...
    BACKSLASH,   // \
    FAT_ARROW,   // =>
    ARROW,       // -> or ?->
    OPERATOR,    // any other operator

    ERROR,
}

impl SyntaxKind {
    /// Check if this is trivia (whitespace, comments, markup outside PHP)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE
                | Self::LINE_COMMENT
                | Self::BLOCK_COMMENT
                | Self::OPEN_TAG
                | Self::INLINE_HTML
        )
    }

    /// Check if this token ends a statement
    pub fn is_terminator(self) -> bool {
        matches!(self, Self::SEMICOLON | Self::CLOSE_TAG)
    }

    pub fn is_opening_delimiter(self) -> bool {
        matches!(
            self,
            Self::L_BRACE | Self::L_PAREN | Self::L_BRACKET | Self::ATTR_START
        )
    }

    pub fn is_closing_delimiter(self) -> bool {
        matches!(self, Self::R_BRACE | Self::R_PAREN | Self::R_BRACKET)
    }
}
