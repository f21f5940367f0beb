//! Function-definition parsing: `function-def`, `params`, `param`.

use pixar_lex::TokenKind;

use crate::ast::{Param, Stmt, Type};
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    /// `function-def := "fun" IDENT "(" params? ")" ("->" type)? block`.
    pub(crate) fn parse_function_def(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::Fun)?;
        let (name, _) = self.expect_ident()?;
        self.expect(&TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect(&TokenKind::RParen)?;
        let return_type = if self.match_tok(&TokenKind::Arrow) {
            self.parse_type()?
        } else {
            Type::Void
        };
        let body = self.parse_block()?;
        let span = start.span.merge(body.span);
        Ok(Stmt::FunctionDef { name, params, return_type, body, span })
    }

    /// `params := param ("," param)*`, possibly empty.
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Ok(params);
        }
        params.push(self.parse_param()?);
        while self.check(&TokenKind::Comma) {
            self.advance();
            params.push(self.parse_param()?);
        }
        Ok(params)
    }

    /// `param := IDENT ":" type`.
    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let (name, name_span) = self.expect_ident()?;
        self.expect(&TokenKind::Colon)?;
        let ty = self.parse_type()?;
        Ok(Param { name, ty, span: name_span })
    }
}
