//! Expression typing (§4.3's "Typing rules"): turns each `pixar_par::Expr`
//! into a [`crate::hir::TypedExpr`] annotated with its resolved type.

use pixar_par::{Expr, Type, UnOp};

use crate::analysis::{check_operand_types, expect_type, Analyzer};
use crate::error::SemError;
use crate::hir::TypedExpr;
use crate::types::{is_numeric, SymbolKind};

impl Analyzer {
    pub(crate) fn infer_expr(&mut self, expr: &Expr) -> Result<TypedExpr, SemError> {
        match expr {
            Expr::IntLit(v, span) => Ok(TypedExpr::IntLit(*v, *span)),
            Expr::FloatLit(v, span) => Ok(TypedExpr::FloatLit(*v, *span)),
            Expr::BoolLit(v, span) => Ok(TypedExpr::BoolLit(*v, *span)),
            Expr::ColourLit(c, span) => Ok(TypedExpr::ColourLit(*c, *span)),
            Expr::StringLit(s, span) => Ok(TypedExpr::StringLit(*s, *span)),

            Expr::Identifier(name, span) => {
                let def_id = self.resolve(*name, *span)?;
                let ty = self.entry(def_id).ty;
                Ok(TypedExpr::Identifier { name: *name, def_id, ty, span: *span })
            }

            Expr::Binary { op, left, right, span } => {
                let typed_left = self.infer_expr(left)?;
                let typed_right = self.infer_expr(right)?;
                let ty = check_operand_types(*op, typed_left.ty(), typed_right.ty(), *span)?;
                Ok(TypedExpr::Binary { op: *op, left: Box::new(typed_left), right: Box::new(typed_right), ty, span: *span })
            }

            Expr::Unary { op, operand, span } => {
                let typed_operand = self.infer_expr(operand)?;
                let ty = match op {
                    UnOp::Neg => {
                        if is_numeric(typed_operand.ty()) {
                            typed_operand.ty()
                        } else {
                            return Err(SemError::TypeError { expected: Type::Int, found: typed_operand.ty(), span: *span });
                        }
                    }
                    UnOp::Not => {
                        expect_type(Type::Bool, typed_operand.ty(), typed_operand.span())?;
                        Type::Bool
                    }
                };
                Ok(TypedExpr::Unary { op: *op, operand: Box::new(typed_operand), ty, span: *span })
            }

            Expr::Call { name, args, span } => {
                let def_id = self.resolve(*name, *span)?;
                let SymbolKind::Function { params, return_type } = self.entry(def_id).kind.clone() else {
                    return Err(SemError::Undeclared { name: name.as_str().to_string(), span: *span });
                };
                if params.len() != args.len() {
                    return Err(SemError::ArityError {
                        callee: name.as_str().to_string(),
                        expected: params.len(),
                        found: args.len(),
                        span: *span,
                    });
                }
                let typed_args = args
                    .iter()
                    .zip(params.iter())
                    .map(|(arg, &param_ty)| {
                        let typed_arg = self.infer_expr(arg)?;
                        expect_type(param_ty, typed_arg.ty(), typed_arg.span())?;
                        Ok(typed_arg)
                    })
                    .collect::<Result<_, SemError>>()?;
                Ok(TypedExpr::Call { name: *name, def_id, args: typed_args, ty: return_type, span: *span })
            }

            Expr::Width(span) => Ok(TypedExpr::Width(*span)),
            Expr::Height(span) => Ok(TypedExpr::Height(*span)),

            Expr::Read { x, y, span } => {
                let typed_x = self.check_int_arg(x)?;
                let typed_y = self.check_int_arg(y)?;
                Ok(TypedExpr::Read { x: Box::new(typed_x), y: Box::new(typed_y), span: *span })
            }

            Expr::Randi { bound, span } => {
                let typed_bound = self.check_int_arg(bound)?;
                Ok(TypedExpr::Randi { bound: Box::new(typed_bound), span: *span })
            }

            Expr::Print { expr, span } => {
                // `any` per §4.3: no type restriction, just well-typed.
                let typed_expr = self.infer_expr(expr)?;
                Ok(TypedExpr::Print { expr: Box::new(typed_expr), span: *span })
            }

            Expr::Delay { expr, span } => {
                let typed_expr = self.check_int_arg(expr)?;
                Ok(TypedExpr::Delay { expr: Box::new(typed_expr), span: *span })
            }

            Expr::Pixel { x, y, colour, span } => {
                let typed_x = self.check_int_arg(x)?;
                let typed_y = self.check_int_arg(y)?;
                let typed_colour = self.check_colour_arg(colour)?;
                Ok(TypedExpr::Pixel { x: Box::new(typed_x), y: Box::new(typed_y), colour: Box::new(typed_colour), span: *span })
            }

            Expr::PixelR { x, y, w, h, colour, span } => {
                let typed_x = self.check_int_arg(x)?;
                let typed_y = self.check_int_arg(y)?;
                let typed_w = self.check_int_arg(w)?;
                let typed_h = self.check_int_arg(h)?;
                let typed_colour = self.check_colour_arg(colour)?;
                Ok(TypedExpr::PixelR {
                    x: Box::new(typed_x),
                    y: Box::new(typed_y),
                    w: Box::new(typed_w),
                    h: Box::new(typed_h),
                    colour: Box::new(typed_colour),
                    span: *span,
                })
            }
        }
    }

    fn check_int_arg(&mut self, expr: &Expr) -> Result<TypedExpr, SemError> {
        let typed = self.infer_expr(expr)?;
        expect_type(Type::Int, typed.ty(), typed.span())?;
        Ok(typed)
    }

    fn check_colour_arg(&mut self, expr: &Expr) -> Result<TypedExpr, SemError> {
        let typed = self.infer_expr(expr)?;
        expect_type(Type::Colour, typed.ty(), typed.span())?;
        Ok(typed)
    }
}
