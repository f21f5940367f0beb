//! Expression parsing: recursive descent with left-associative precedence
//! climbing, one routine per level of the ladder in §4.2 (lowest to
//! highest: `or`, `and`, `==`/`!=`, `< <= > >=`, `+ -`, `* / %`, unary,
//! primary).

use pixar_lex::{Token, TokenKind};
use pixar_util::Symbol;

use crate::ast::{BinOp, Expr, UnOp};
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_logic_or()
    }

    fn parse_logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logic_and()?;
        while self.check(&TokenKind::Or) {
            self.advance();
            let right = self.parse_logic_and()?;
            left = Self::binary(BinOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;
        while self.check(&TokenKind::And) {
            self.advance();
            let right = self.parse_equality()?;
            left = Self::binary(BinOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::NotEq => BinOp::Ne,
                _ => break,
            };
            self.advance();
            let right = self.parse_relational()?;
            left = Self::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Le => BinOp::Le,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::Ge => BinOp::Ge,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            left = Self::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Self::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                TokenKind::Percent => BinOp::Mod,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = Self::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let tok = self.peek();
        let op = match tok.kind {
            TokenKind::Minus => UnOp::Neg,
            TokenKind::Not => UnOp::Not,
            _ => return self.parse_primary(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        let span = tok.span.merge(operand.span());
        Ok(Expr::Unary { op, operand: Box::new(operand), span })
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let tok = self.peek();
        match tok.kind {
            TokenKind::IntLit(v) => {
                self.advance();
                Ok(Expr::IntLit(v, tok.span))
            }
            TokenKind::FloatLit(v) => {
                self.advance();
                Ok(Expr::FloatLit(v, tok.span))
            }
            TokenKind::BoolLit(v) => {
                self.advance();
                Ok(Expr::BoolLit(v, tok.span))
            }
            TokenKind::ColourLit(c) => {
                self.advance();
                Ok(Expr::ColourLit(c, tok.span))
            }
            TokenKind::StringLit(s) => {
                self.advance();
                Ok(Expr::StringLit(s, tok.span))
            }
            TokenKind::Ident(name) => {
                self.advance();
                if self.check(&TokenKind::LParen) {
                    self.parse_call_args(name, tok)
                } else {
                    Ok(Expr::Identifier(name, tok.span))
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::BuiltinWidth
            | TokenKind::BuiltinHeight
            | TokenKind::BuiltinRead
            | TokenKind::BuiltinRandi
            | TokenKind::BuiltinPrint
            | TokenKind::BuiltinDelay
            | TokenKind::BuiltinPixel
            | TokenKind::BuiltinPixelR => self.parse_builtin_expr(),
            _ => self.unexpected("an expression"),
        }
    }

    /// `IDENT "(" args? ")"` — a user function call.
    fn parse_call_args(&mut self, name: Symbol, name_tok: Token<'a>) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let args = self.parse_arg_list()?;
        let close = self.expect(&TokenKind::RParen)?;
        Ok(Expr::Call { name, args, span: name_tok.span.merge(close.span) })
    }

    /// `args := expression ("," expression)*`, possibly empty.
    pub(crate) fn parse_arg_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Ok(args);
        }
        args.push(self.parse_expression()?);
        while self.check(&TokenKind::Comma) {
            self.advance();
            args.push(self.parse_expression()?);
        }
        Ok(args)
    }

    /// One of the eight `__xxx(...)` pad built-ins used as a `primary`.
    fn parse_builtin_expr(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance(); // the builtin keyword token
        self.expect(&TokenKind::LParen)?;
        let expr = match start.kind {
            TokenKind::BuiltinWidth => {
                let close = self.expect(&TokenKind::RParen)?;
                Expr::Width(start.span.merge(close.span))
            }
            TokenKind::BuiltinHeight => {
                let close = self.expect(&TokenKind::RParen)?;
                Expr::Height(start.span.merge(close.span))
            }
            TokenKind::BuiltinRead => {
                let x = self.parse_expression()?;
                self.expect(&TokenKind::Comma)?;
                let y = self.parse_expression()?;
                let close = self.expect(&TokenKind::RParen)?;
                Expr::Read { x: Box::new(x), y: Box::new(y), span: start.span.merge(close.span) }
            }
            TokenKind::BuiltinRandi => {
                let bound = self.parse_expression()?;
                let close = self.expect(&TokenKind::RParen)?;
                Expr::Randi { bound: Box::new(bound), span: start.span.merge(close.span) }
            }
            TokenKind::BuiltinPrint => {
                let expr = self.parse_expression()?;
                let close = self.expect(&TokenKind::RParen)?;
                Expr::Print { expr: Box::new(expr), span: start.span.merge(close.span) }
            }
            TokenKind::BuiltinDelay => {
                let expr = self.parse_expression()?;
                let close = self.expect(&TokenKind::RParen)?;
                Expr::Delay { expr: Box::new(expr), span: start.span.merge(close.span) }
            }
            TokenKind::BuiltinPixel => {
                let x = self.parse_expression()?;
                self.expect(&TokenKind::Comma)?;
                let y = self.parse_expression()?;
                self.expect(&TokenKind::Comma)?;
                let colour = self.parse_expression()?;
                let close = self.expect(&TokenKind::RParen)?;
                Expr::Pixel {
                    x: Box::new(x),
                    y: Box::new(y),
                    colour: Box::new(colour),
                    span: start.span.merge(close.span),
                }
            }
            TokenKind::BuiltinPixelR => {
                let x = self.parse_expression()?;
                self.expect(&TokenKind::Comma)?;
                let y = self.parse_expression()?;
                self.expect(&TokenKind::Comma)?;
                let w = self.parse_expression()?;
                self.expect(&TokenKind::Comma)?;
                let h = self.parse_expression()?;
                self.expect(&TokenKind::Comma)?;
                let colour = self.parse_expression()?;
                let close = self.expect(&TokenKind::RParen)?;
                Expr::PixelR {
                    x: Box::new(x),
                    y: Box::new(y),
                    w: Box::new(w),
                    h: Box::new(h),
                    colour: Box::new(colour),
                    span: start.span.merge(close.span),
                }
            }
            _ => unreachable!("parse_builtin_expr called on a non-builtin token"),
        };
        Ok(expr)
    }

    fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        let span = left.span().merge(right.span());
        Expr::Binary { op, left: Box::new(left), right: Box::new(right), span }
    }
}
