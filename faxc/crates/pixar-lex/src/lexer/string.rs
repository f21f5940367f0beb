//! String literal scanning: `"..."` or `'...'` with `\\ \" \' \n` escapes.
//!
//! Grounded on the original Python lexer's `get_next_char`: `\\`, `\"`,
//! `\'` escape to the literal character and `\n` escapes to a real
//! newline; any other escape sequence is `InvalidEscape`.

use pixar_util::Symbol;

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn scan_string(&mut self, quote: char) -> Result<Token<'a>, LexError> {
        self.cursor.advance(); // opening quote
        let mut value = String::new();

        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                return Err(LexError::UnterminatedString { span: self.span() });
            }
            let c = self.cursor.current_char();
            if c == quote {
                self.cursor.advance();
                break;
            }
            if c == '\\' {
                let escape_span_start = self.cursor.position();
                self.cursor.advance();
                let escaped = self.cursor.current_char();
                match escaped {
                    '\\' => value.push('\\'),
                    '"' => value.push('"'),
                    '\'' => value.push('\''),
                    'n' => value.push('\n'),
                    _ => {
                        return Err(LexError::InvalidEscape {
                            seq: escaped.to_string(),
                            span: pixar_util::Span::with_file(
                                escape_span_start,
                                self.cursor.position() + escaped.len_utf8(),
                                self.file_id,
                                self.token_start_line,
                                self.token_start_column,
                            ),
                        });
                    }
                }
                self.cursor.advance();
            } else {
                value.push(c);
                self.cursor.advance();
            }
        }

        Ok(self.make(TokenKind::StringLit(Symbol::intern(&value))))
    }
}
