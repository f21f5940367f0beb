//! Integer and float literal scanning.
//!
//! `[0-9]+` is an integer; `[0-9]+\.[0-9]+` is a float. A `.` is only
//! consumed as part of the number if it is itself followed by a digit —
//! otherwise it is left for the operator scanner (e.g. a call argument
//! list terminator is never mistaken for the start of a float).

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn scan_number(&mut self) -> Result<Token<'a>, LexError> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let is_float = self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit();
        if is_float {
            self.cursor.advance(); // '.'
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        if is_float {
            let value: f64 = text.parse().map_err(|_| LexError::InvalidNumber {
                text: text.to_string(),
                span: self.span(),
            })?;
            Ok(self.make(TokenKind::FloatLit(value)))
        } else {
            let value: i64 = text.parse().map_err(|_| LexError::InvalidNumber {
                text: text.to_string(),
                span: self.span(),
            })?;
            Ok(self.make(TokenKind::IntLit(value)))
        }
    }
}
