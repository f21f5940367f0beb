//! Operator and delimiter scanning, longest-match first.

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn scan_operator(&mut self) -> Result<Token<'a>, LexError> {
        let c = self.cursor.current_char();
        let c2 = self.cursor.peek_char(1);

        // Two-character operators take priority (maximal munch).
        let two_char = match (c, c2) {
            ('=', '=') => Some(TokenKind::EqEq),
            ('!', '=') => Some(TokenKind::NotEq),
            ('<', '=') => Some(TokenKind::Le),
            ('>', '=') => Some(TokenKind::Ge),
            ('-', '>') => Some(TokenKind::Arrow),
            _ => None,
        };
        if let Some(kind) = two_char {
            self.cursor.advance();
            self.cursor.advance();
            return Ok(self.make(kind));
        }

        let one_char = match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '%' => Some(TokenKind::Percent),
            '=' => Some(TokenKind::Eq),
            '<' => Some(TokenKind::Lt),
            '>' => Some(TokenKind::Gt),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            ',' => Some(TokenKind::Comma),
            '.' => Some(TokenKind::Dot),
            ';' => Some(TokenKind::Semi),
            ':' => Some(TokenKind::Colon),
            _ => None,
        };

        match one_char {
            Some(kind) => {
                self.cursor.advance();
                Ok(self.make(kind))
            }
            None => {
                self.cursor.advance();
                Err(LexError::UnexpectedCharacter { ch: c, span: self.span() })
            }
        }
    }
}
