//! Lowers the typed AST to PixIR (§4.4). Function bodies are hoisted and
//! emitted as independent labeled blocks ahead of a synthetic "start
//! routine" built from the program's top-level statements, so a function
//! defined nested inside another statement still gets its own frame.

use pixar_sem::{TypedBlock, TypedExpr, TypedProgram, TypedStmt};
use pixar_par::{BinOp, Type, UnOp};
use pixar_util::{DefId, Span, Symbol};

use crate::error::CodeGenError;
use crate::frame::FrameLayout;
use crate::ir::Instr;
use crate::label::{Label, LabelAllocator};

pub struct Emitter {
    labels: LabelAllocator,
}

impl Emitter {
    pub fn generate(program: &TypedProgram) -> Result<Vec<Instr>, CodeGenError> {
        let emitter = Self { labels: LabelAllocator::new() };
        let mut out = Vec::new();

        for function in collect_functions(program) {
            emitter.emit_function(function, &mut out)?;
        }

        let frame = FrameLayout::for_top_level(program);
        out.push(Instr::OFrame(frame.size()));
        for stmt in program {
            if matches!(stmt, TypedStmt::FunctionDef { .. }) {
                continue;
            }
            emitter.emit_stmt(stmt, &frame, &mut out)?;
        }
        out.push(Instr::Ret);

        Ok(out)
    }

    fn emit_function(
        &self,
        function: &TypedStmt,
        out: &mut Vec<Instr>,
    ) -> Result<(), CodeGenError> {
        let TypedStmt::FunctionDef { name, params, body, .. } = function else {
            unreachable!("collect_functions only yields FunctionDef nodes");
        };

        out.push(Instr::Label(Label::named(name.as_str())));
        let frame = FrameLayout::for_function(params, body);
        out.push(Instr::OFrame(frame.size()));
        self.emit_block(body, &frame, out)?;

        let ends_in_return = matches!(body.statements.last(), Some(TypedStmt::Return { .. }));
        if !ends_in_return {
            out.push(Instr::Ret);
        }

        Ok(())
    }

    fn emit_block(
        &self,
        block: &TypedBlock,
        frame: &FrameLayout,
        out: &mut Vec<Instr>,
    ) -> Result<(), CodeGenError> {
        for stmt in &block.statements {
            self.emit_stmt(stmt, frame, out)?;
        }
        Ok(())
    }

    fn emit_stmt(
        &self,
        stmt: &TypedStmt,
        frame: &FrameLayout,
        out: &mut Vec<Instr>,
    ) -> Result<(), CodeGenError> {
        match stmt {
            TypedStmt::Let { name, def_id, init, .. } => {
                self.emit_expr(init, frame, out)?;
                self.emit_store(*name, *def_id, stmt.span(), frame, out)
            }
            TypedStmt::Assign { name, def_id, expr, .. } => {
                self.emit_expr(expr, frame, out)?;
                self.emit_store(*name, *def_id, stmt.span(), frame, out)
            }
            TypedStmt::If { condition, then_block, else_block, .. } => {
                self.emit_expr(condition, frame, out)?;
                let else_label = self.labels.fresh();
                out.push(Instr::CJmp(else_label.clone()));
                self.emit_block(then_block, frame, out)?;
                match else_block {
                    Some(else_block) => {
                        let end_label = self.labels.fresh();
                        out.push(Instr::Jmp(end_label.clone()));
                        out.push(Instr::Label(else_label));
                        self.emit_block(else_block, frame, out)?;
                        out.push(Instr::Label(end_label));
                    }
                    None => out.push(Instr::Label(else_label)),
                }
                Ok(())
            }
            TypedStmt::While { condition, body, .. } => {
                let start_label = self.labels.fresh();
                let end_label = self.labels.fresh();
                out.push(Instr::Label(start_label.clone()));
                self.emit_expr(condition, frame, out)?;
                out.push(Instr::CJmp(end_label.clone()));
                self.emit_block(body, frame, out)?;
                out.push(Instr::Jmp(start_label));
                out.push(Instr::Label(end_label));
                Ok(())
            }
            TypedStmt::For { init, condition, update, body, .. } => {
                self.emit_stmt(init, frame, out)?;
                let start_label = self.labels.fresh();
                let end_label = self.labels.fresh();
                out.push(Instr::Label(start_label.clone()));
                self.emit_expr(condition, frame, out)?;
                out.push(Instr::CJmp(end_label.clone()));
                self.emit_block(body, frame, out)?;
                self.emit_stmt(update, frame, out)?;
                out.push(Instr::Jmp(start_label));
                out.push(Instr::Label(end_label));
                Ok(())
            }
            TypedStmt::FunctionDef { .. } => Ok(()),
            TypedStmt::Return { expr, .. } => {
                if let Some(expr) = expr {
                    self.emit_expr(expr, frame, out)?;
                }
                out.push(Instr::Ret);
                Ok(())
            }
            TypedStmt::Block(block) => self.emit_block(block, frame, out),
            TypedStmt::Expr(expr) => self.emit_expr(expr, frame, out),
        }
    }

    fn emit_store(
        &self,
        name: Symbol,
        def_id: DefId,
        span: Span,
        frame: &FrameLayout,
        out: &mut Vec<Instr>,
    ) -> Result<(), CodeGenError> {
        let slot = self.slot_for(name, def_id, span, frame)?;
        out.push(Instr::PushInt(slot as i64));
        out.push(Instr::PushInt(0));
        out.push(Instr::St);
        Ok(())
    }

    fn emit_load(
        &self,
        name: Symbol,
        def_id: DefId,
        span: Span,
        frame: &FrameLayout,
        out: &mut Vec<Instr>,
    ) -> Result<(), CodeGenError> {
        let slot = self.slot_for(name, def_id, span, frame)?;
        out.push(Instr::PushInt(slot as i64));
        out.push(Instr::PushInt(0));
        out.push(Instr::Ld);
        Ok(())
    }

    fn slot_for(
        &self,
        name: Symbol,
        def_id: DefId,
        span: Span,
        frame: &FrameLayout,
    ) -> Result<u32, CodeGenError> {
        let slot = frame
            .slot_of(def_id)
            .ok_or_else(|| CodeGenError::UnresolvedSymbol { name: name.as_str().to_string(), span })?;
        if slot >= frame.size() {
            return Err(CodeGenError::FrameMismatch { expected: frame.size(), found: slot + 1, span });
        }
        Ok(slot)
    }

    fn emit_expr(
        &self,
        expr: &TypedExpr,
        frame: &FrameLayout,
        out: &mut Vec<Instr>,
    ) -> Result<(), CodeGenError> {
        match expr {
            TypedExpr::IntLit(v, _) => out.push(Instr::PushInt(*v)),
            TypedExpr::FloatLit(v, _) => out.push(Instr::PushFloat(*v)),
            TypedExpr::BoolLit(v, _) => out.push(Instr::PushBool(*v)),
            TypedExpr::ColourLit(c, _) => out.push(Instr::PushColour(*c)),
            TypedExpr::StringLit(s, _) => out.push(Instr::PushString(*s)),

            TypedExpr::Identifier { name, def_id, span, .. } => {
                self.emit_load(*name, *def_id, *span, frame, out)?;
            }

            TypedExpr::Binary { op, left, right, .. } => {
                self.emit_expr(left, frame, out)?;
                self.emit_expr(right, frame, out)?;
                out.push(binop_instr(*op));
            }

            TypedExpr::Unary { op, operand, ty, .. } => match op {
                UnOp::Neg => {
                    out.push(zero_literal(*ty));
                    self.emit_expr(operand, frame, out)?;
                    out.push(Instr::Sub);
                }
                UnOp::Not => {
                    self.emit_expr(operand, frame, out)?;
                    out.push(Instr::Not);
                }
            },

            TypedExpr::Call { name, args, .. } => {
                for arg in args.iter().rev() {
                    self.emit_expr(arg, frame, out)?;
                }
                out.push(Instr::Call(*name, args.len() as u32));
            }

            TypedExpr::Width(_) => out.push(Instr::Width),
            TypedExpr::Height(_) => out.push(Instr::Height),

            TypedExpr::Read { x, y, .. } => {
                self.emit_expr(y, frame, out)?;
                self.emit_expr(x, frame, out)?;
                out.push(Instr::Read);
            }

            TypedExpr::Randi { bound, .. } => {
                self.emit_expr(bound, frame, out)?;
                out.push(Instr::Irnd);
            }

            TypedExpr::Print { expr, .. } => {
                self.emit_expr(expr, frame, out)?;
                out.push(Instr::Print);
            }

            TypedExpr::Delay { expr, .. } => {
                self.emit_expr(expr, frame, out)?;
                out.push(Instr::Delay);
            }

            TypedExpr::Pixel { x, y, colour, .. } => {
                self.emit_expr(colour, frame, out)?;
                self.emit_expr(y, frame, out)?;
                self.emit_expr(x, frame, out)?;
                out.push(Instr::Pixel);
            }

            TypedExpr::PixelR { x, y, w, h, colour, .. } => {
                self.emit_expr(colour, frame, out)?;
                self.emit_expr(h, frame, out)?;
                self.emit_expr(w, frame, out)?;
                self.emit_expr(y, frame, out)?;
                self.emit_expr(x, frame, out)?;
                out.push(Instr::PixelR);
            }
        }
        Ok(())
    }
}

fn binop_instr(op: BinOp) -> Instr {
    match op {
        BinOp::Add => Instr::Add,
        BinOp::Sub => Instr::Sub,
        BinOp::Mul => Instr::Mul,
        BinOp::Div => Instr::Div,
        BinOp::Mod => Instr::Mod,
        BinOp::Lt => Instr::Lt,
        BinOp::Le => Instr::Le,
        BinOp::Gt => Instr::Gt,
        BinOp::Ge => Instr::Ge,
        BinOp::Eq => Instr::Eq,
        BinOp::Ne => Instr::Neq,
        BinOp::And => Instr::And,
        BinOp::Or => Instr::Or,
    }
}

/// PixIR has no dedicated negate opcode; `-x` lowers to `0 - x`.
fn zero_literal(ty: Type) -> Instr {
    match ty {
        Type::Float => Instr::PushFloat(0.0),
        _ => Instr::PushInt(0),
    }
}

/// Pre-order walk gathering every `FunctionDef`, including ones nested
/// inside blocks or other functions, in source encounter order.
fn collect_functions(program: &TypedProgram) -> Vec<&TypedStmt> {
    let mut functions = Vec::new();
    for stmt in program {
        collect_from_stmt(stmt, &mut functions);
    }
    functions
}

fn collect_from_stmt<'a>(stmt: &'a TypedStmt, out: &mut Vec<&'a TypedStmt>) {
    match stmt {
        TypedStmt::FunctionDef { body, .. } => {
            out.push(stmt);
            collect_from_block(body, out);
        }
        TypedStmt::If { then_block, else_block, .. } => {
            collect_from_block(then_block, out);
            if let Some(else_block) = else_block {
                collect_from_block(else_block, out);
            }
        }
        TypedStmt::While { body, .. } => collect_from_block(body, out),
        TypedStmt::For { init, update, body, .. } => {
            collect_from_stmt(init, out);
            collect_from_stmt(update, out);
            collect_from_block(body, out);
        }
        TypedStmt::Block(block) => collect_from_block(block, out),
        TypedStmt::Let { .. } | TypedStmt::Assign { .. } | TypedStmt::Return { .. } | TypedStmt::Expr(_) => {}
    }
}

fn collect_from_block<'a>(block: &'a TypedBlock, out: &mut Vec<&'a TypedStmt>) {
    for stmt in &block.statements {
        collect_from_stmt(stmt, out);
    }
}
