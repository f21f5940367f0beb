//! Identifier, keyword, type-name, and pad-builtin scanning.

use pixar_util::Symbol;

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// `[A-Za-z_][A-Za-z0-9_]*`, reclassified to a keyword/type/builtin/bool
    /// kind when the lexeme matches one of those closed sets.
    pub(crate) fn scan_identifier(&mut self) -> Result<Token<'a>, LexError> {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(self.token_start);
        let kind = TokenKind::keyword_from_ident(text)
            .unwrap_or_else(|| TokenKind::Ident(Symbol::intern(text)));
        Ok(self.make(kind))
    }
}
