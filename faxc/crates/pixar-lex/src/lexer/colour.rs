//! Colour literal scanning: `#` followed by exactly six hex digits.
//!
//! Grounded on the original Python lexer's dedicated states for `#RRGGBB`
//! (states 54-60 in `lexer.py`): a `#` not followed by six hex digits is
//! `InvalidColour` rather than being re-lexed as an operator or falling
//! back to some other token.

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Colour, Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn scan_colour(&mut self) -> Result<Token<'a>, LexError> {
        self.cursor.advance(); // '#'

        let mut digits = String::with_capacity(6);
        for _ in 0..6 {
            let c = self.cursor.current_char();
            if c.is_ascii_hexdigit() {
                digits.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }

        if digits.len() != 6 {
            // Consume any trailing hex-looking run so the reported span
            // covers the whole malformed lexeme, per maximal munch.
            while self.cursor.current_char().is_ascii_hexdigit() {
                digits.push(self.cursor.current_char());
                self.cursor.advance();
            }
            let text = self.cursor.slice_from(self.token_start).to_string();
            return Err(LexError::InvalidColour { text, span: self.span() });
        }

        let r = u8::from_str_radix(&digits[0..2], 16).unwrap();
        let g = u8::from_str_radix(&digits[2..4], 16).unwrap();
        let b = u8::from_str_radix(&digits[4..6], 16).unwrap();
        Ok(self.make(TokenKind::ColourLit(Colour::new(r, g, b))))
    }
}
