//! Core lexer: cursor-driven dispatch and span bookkeeping.
//!
//! The dispatch in [`Lexer::next_token`] plays the role of the DFA's start
//! state: the current character selects one of the per-class scanning
//! routines in the sibling modules, each of which walks its own accepting
//! states via `Cursor` until a dead transition, exactly the maximal-munch
//! discipline from §4.1 without materialising a transition table.

use pixar_util::{FileId, Span};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) file_id: FileId,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file_id: FileId) -> Self {
        Self {
            cursor: Cursor::new(source),
            file_id,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    pub(crate) fn mark_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    pub(crate) fn span(&self) -> Span {
        Span::with_file(
            self.token_start,
            self.cursor.position(),
            self.file_id,
            self.token_start_line,
            self.token_start_column,
        )
    }

    pub(crate) fn make(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.cursor.slice_from(self.token_start), self.span())
    }

    /// Skips whitespace and `//`/`/* */` comments, possibly several runs in
    /// a row, until the cursor sits on the start of the next real token.
    fn skip_trivia(&mut self) {
        loop {
            self.cursor.skip_whitespace();
            if !self.skip_comment() {
                break;
            }
        }
    }

    /// Returns `true` and advances past one comment if the cursor is
    /// looking at `//` or `/*`.
    fn skip_comment(&mut self) -> bool {
        if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '/' {
            while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                self.cursor.advance();
            }
            true
        } else if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '*' {
            self.cursor.advance();
            self.cursor.advance();
            while !self.cursor.is_at_end()
                && !(self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/')
            {
                self.cursor.advance();
            }
            if !self.cursor.is_at_end() {
                self.cursor.advance();
                self.cursor.advance();
            }
            true
        } else {
            false
        }
    }

    /// Scans and returns the next token, or `Eof` once the source is
    /// exhausted. Fails at the first unrecognised longest match.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_trivia();
        self.mark_start();

        if self.cursor.is_at_end() {
            return Ok(self.make(TokenKind::Eof));
        }

        let c = self.cursor.current_char();
        if crate::lexer::identifier::is_ident_start(c) {
            return self.scan_identifier();
        }
        if c.is_ascii_digit() {
            return self.scan_number();
        }
        if c == '#' {
            return self.scan_colour();
        }
        if c == '"' || c == '\'' {
            return self.scan_string(c);
        }
        self.scan_operator()
    }

    /// Tokenizes the entire source, terminated by a trailing `Eof` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixar_util::FileId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source, FileId::DUMMY);
        lexer
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn scenario_1_let_declaration_with_addition() {
        // let x: int = 10 + 17;
        let got = kinds("let x: int = 10 + 17;");
        assert_eq!(
            got,
            vec![
                TokenKind::Let,
                TokenKind::Ident(pixar_util::Symbol::intern("x")),
                TokenKind::Colon,
                TokenKind::TyInt,
                TokenKind::Eq,
                TokenKind::IntLit(10),
                TokenKind::Plus,
                TokenKind::IntLit(17),
                TokenKind::Semi,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn skips_whitespace_and_both_comment_styles() {
        let got = kinds("// leading\nlet /* mid */ x : int = 1 ;\n");
        assert_eq!(
            got,
            vec![
                TokenKind::Let,
                TokenKind::Ident(pixar_util::Symbol::intern("x")),
                TokenKind::Colon,
                TokenKind::TyInt,
                TokenKind::Eq,
                TokenKind::IntLit(1),
                TokenKind::Semi,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn two_char_operators_take_priority() {
        let got = kinds("a <= b >= c == d != e -> f");
        let ops: Vec<_> = got
            .into_iter()
            .filter(|k| {
                matches!(
                    k,
                    TokenKind::Le | TokenKind::Ge | TokenKind::EqEq | TokenKind::NotEq | TokenKind::Arrow
                )
            })
            .collect();
        assert_eq!(
            ops,
            vec![
                TokenKind::Le,
                TokenKind::Ge,
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::Arrow,
            ]
        );
    }

    #[test]
    fn integer_then_dot_is_not_a_float() {
        let got = kinds("1.foo");
        assert_eq!(
            got,
            vec![
                TokenKind::IntLit(1),
                TokenKind::Dot,
                TokenKind::Ident(pixar_util::Symbol::intern("foo")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn float_literal() {
        let got = kinds("3.14");
        assert_eq!(got, vec![TokenKind::FloatLit(3.14), TokenKind::Eof]);
    }

    #[test]
    fn builtins_and_keywords_reclassify_from_identifiers() {
        let got = kinds("__pixel __width true false and or not if colour");
        assert_eq!(
            got,
            vec![
                TokenKind::BuiltinPixel,
                TokenKind::BuiltinWidth,
                TokenKind::BoolLit(true),
                TokenKind::BoolLit(false),
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Not,
                TokenKind::If,
                TokenKind::TyColour,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn colour_literal() {
        let got = kinds("#FF00AA");
        match &got[0] {
            TokenKind::ColourLit(c) => assert_eq!((c.r, c.g, c.b), (0xFF, 0x00, 0xAA)),
            other => panic!("expected colour literal, got {other:?}"),
        }
    }

    #[test]
    fn invalid_colour_reports_error() {
        let mut lexer = Lexer::new("#FF00", FileId::DUMMY);
        let err = lexer.tokenize().unwrap_err();
        assert!(matches!(err, LexError::InvalidColour { .. }));
    }

    #[test]
    fn scenario_7_unterminated_string() {
        let mut lexer = Lexer::new("let s = \"abc;", FileId::DUMMY);
        loop {
            match lexer.next_token() {
                Ok(tok) if tok.kind == TokenKind::Eof => panic!("expected a lex error"),
                Ok(_) => continue,
                Err(LexError::UnterminatedString { span }) => {
                    assert_eq!((span.line, span.column), (1, 9));
                    break;
                }
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn string_escapes() {
        let mut lexer = Lexer::new(r#""a\nb\"c\'d\\e""#, FileId::DUMMY);
        let tok = lexer.next_token().unwrap();
        match tok.kind {
            TokenKind::StringLit(sym) => assert_eq!(sym.as_str(), "a\nb\"c'd\\e"),
            other => panic!("expected string literal, got {other:?}"),
        }
    }

    #[test]
    fn invalid_escape_sequence() {
        let mut lexer = Lexer::new(r#""a\qb""#, FileId::DUMMY);
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, LexError::InvalidEscape { ref seq, .. } if seq == "q"));
    }

    #[test]
    fn unexpected_character_fails() {
        let mut lexer = Lexer::new("let x = 1 $ 2;", FileId::DUMMY);
        loop {
            match lexer.next_token() {
                Ok(tok) if tok.kind == TokenKind::Eof => panic!("expected a lex error"),
                Ok(_) => continue,
                Err(LexError::UnexpectedCharacter { ch, .. }) => {
                    assert_eq!(ch, '$');
                    break;
                }
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn lexer_totality_concatenation_reproduces_source() {
        let source = "let x: int = 10 + 17; // trailing\n";
        let mut lexer = Lexer::new(source, FileId::DUMMY);
        let mut consumed = 0usize;
        loop {
            let before = lexer.cursor.position();
            let _ = before;
            let tok = lexer.next_token().unwrap();
            if tok.kind == TokenKind::Eof {
                break;
            }
            consumed += tok.lexeme.len();
        }
        // every non-trivia byte shows up in exactly one lexeme
        assert!(consumed > 0 && consumed <= source.len());
    }
}
