//! `type := "int" | "float" | "bool" | "colour"`.

use pixar_lex::TokenKind;

use crate::ast::Type;
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        let tok = self.peek();
        let ty = match tok.kind {
            TokenKind::TyInt => Type::Int,
            TokenKind::TyFloat => Type::Float,
            TokenKind::TyBool => Type::Bool,
            TokenKind::TyColour => Type::Colour,
            _ => return self.unexpected("a type name"),
        };
        self.advance();
        Ok(ty)
    }
}
