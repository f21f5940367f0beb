//! Statement parsing: the `statement` dispatch and every alternative
//! except `function-def`, which lives in `items.rs`.

use pixar_lex::TokenKind;

use crate::ast::{Block, Stmt};
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek_kind() {
            TokenKind::Let => self.parse_let_decl(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Fun => self.parse_function_def(),
            TokenKind::Return => self.parse_return(),
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::Ident(_) => self.parse_ident_led_statement(),
            TokenKind::BuiltinWidth
            | TokenKind::BuiltinHeight
            | TokenKind::BuiltinRead
            | TokenKind::BuiltinRandi
            | TokenKind::BuiltinPrint
            | TokenKind::BuiltinDelay
            | TokenKind::BuiltinPixel
            | TokenKind::BuiltinPixelR => self.parse_expr_statement(),
            _ => self.unexpected("a statement"),
        }
    }

    /// `IDENT` starts either an `assignment` or a call used as a statement
    /// (§4.2 disambiguation: `IDENT` followed by `(` is a call).
    fn parse_ident_led_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.peek_next_is_lparen() {
            self.parse_expr_statement()
        } else {
            self.parse_assignment()
        }
    }

    fn peek_next_is_lparen(&self) -> bool {
        matches!(self.tokens.get(self.pos + 1).map(|t| &t.kind), Some(TokenKind::LParen))
    }

    /// `let-decl := "let" IDENT ":" type "=" expression ";"`.
    pub(crate) fn parse_let_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::Let)?;
        let name_tok = self.expect_ident()?;
        self.expect(&TokenKind::Colon)?;
        let ty = self.parse_type()?;
        self.expect(&TokenKind::Eq)?;
        let init = self.parse_expression()?;
        let end = self.expect(&TokenKind::Semi)?;
        Ok(Stmt::Let {
            ty,
            name: name_tok.0,
            init,
            span: start.span.merge(end.span),
        })
    }

    /// `assignment := IDENT "=" expression ";"`.
    pub(crate) fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let name_tok = self.expect_ident()?;
        self.expect(&TokenKind::Eq)?;
        let expr = self.parse_expression()?;
        let end = self.expect(&TokenKind::Semi)?;
        Ok(Stmt::Assign {
            name: name_tok.0,
            expr,
            span: name_tok.1.merge(end.span),
        })
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::If)?;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        let then_block = self.parse_block()?;
        let (else_block, end_span) = if self.match_tok(&TokenKind::Else) {
            let block = self.parse_block()?;
            let span = block.span;
            (Some(block), span)
        } else {
            (None, then_block.span)
        };
        Ok(Stmt::If {
            condition,
            then_block,
            else_block,
            span: start.span.merge(end_span),
        })
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::While)?;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;
        let span = start.span.merge(body.span);
        Ok(Stmt::While { condition, body, span })
    }

    /// `for-stmt := "for" "(" (let-decl | assignment) expression ";" assignment ")" block`.
    ///
    /// Per §9's resolution of the prototypes' disagreement, the EBNF is
    /// authoritative verbatim: both the initializer and the update are a
    /// full production that already consumes its own trailing `;`.
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LParen)?;
        let init = if self.check(&TokenKind::Let) {
            self.parse_let_decl()?
        } else {
            self.parse_assignment()?
        };
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Semi)?;
        let update = self.parse_assignment()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;
        let span = start.span.merge(body.span);
        Ok(Stmt::For {
            init: Box::new(init),
            condition,
            update: Box::new(update),
            body,
            span,
        })
    }

    /// `return-stmt := "return" expression? ";"`.
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::Return)?;
        let expr = if self.check(&TokenKind::Semi) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        let end = self.expect(&TokenKind::Semi)?;
        Ok(Stmt::Return { expr, span: start.span.merge(end.span) })
    }

    /// `block := "{" statement* "}"`.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start = self.expect(&TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            if self.is_eof() {
                return self.unexpected("'}'");
            }
            statements.push(self.parse_statement()?);
        }
        let end = self.expect(&TokenKind::RBrace)?;
        Ok(Block { statements, span: start.span.merge(end.span) })
    }

    /// A call or pad-builtin used as a statement, or any other bare
    /// expression — which §4.2's disambiguation rejects.
    fn parse_expr_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        if !expr.is_call_like() {
            return Err(ParseError::MalformedDeclaration {
                message: "an expression statement must be a function or built-in call".to_string(),
                span: expr.span(),
            });
        }
        self.expect(&TokenKind::Semi)?;
        Ok(Stmt::Expr(expr))
    }

    pub(crate) fn expect_ident(&mut self) -> Result<(pixar_util::Symbol, pixar_util::Span), ParseError> {
        let tok = self.peek();
        match tok.kind {
            TokenKind::Ident(sym) => {
                self.advance();
                Ok((sym, tok.span))
            }
            _ => self.unexpected("an identifier"),
        }
    }
}
