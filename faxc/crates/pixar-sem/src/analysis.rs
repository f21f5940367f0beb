//! Statement-level walking: scope entry/exit, declarations, and the
//! typing rules that don't belong to a single expression (§4.3).
//! Expression typing itself lives in `infer.rs`.

use pixar_par::{BinOp, Block, Param, Program, Stmt, Type};
use pixar_util::{DefId, DefIdGenerator, Span, Symbol};

use crate::error::SemError;
use crate::hir::{TypedBlock, TypedParam, TypedProgram, TypedStmt};
use crate::scope::{RibKind, ScopeTree};
use crate::types::{SymbolEntry, SymbolKind};

/// Walks an AST once, producing a [`TypedProgram`] or the first
/// [`SemError`] encountered (fail-fast, matching the lexer and parser).
pub struct Analyzer {
    scopes: ScopeTree,
    defs: std::collections::HashMap<DefId, SymbolEntry>,
    def_ids: DefIdGenerator,
    /// The declared return type of the function currently being walked,
    /// `None` at module scope (where `return` is rejected outright).
    return_type: Option<Type>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            scopes: ScopeTree::new(),
            defs: std::collections::HashMap::new(),
            def_ids: DefIdGenerator::new(),
            return_type: None,
        }
    }

    pub fn analyze(program: &Program) -> Result<TypedProgram, SemError> {
        let mut analyzer = Self::new();
        program.iter().map(|stmt| analyzer.check_stmt(stmt)).collect()
    }

    pub(crate) fn entry(&self, def_id: DefId) -> &SymbolEntry {
        self.defs.get(&def_id).expect("DefId always registered at declaration")
    }

    pub(crate) fn declare(&mut self, name: Symbol, span: Span, entry: SymbolEntry) -> Result<DefId, SemError> {
        let def_id = self.def_ids.next();
        if !self.scopes.declare(name, def_id) {
            return Err(SemError::Redeclaration { name: name.as_str().to_string(), span });
        }
        self.defs.insert(def_id, entry);
        Ok(def_id)
    }

    pub(crate) fn resolve(&self, name: Symbol, span: Span) -> Result<DefId, SemError> {
        self.scopes
            .resolve(name)
            .ok_or_else(|| SemError::Undeclared { name: name.as_str().to_string(), span })
    }

    fn check_stmt(&mut self, stmt: &Stmt) -> Result<TypedStmt, SemError> {
        match stmt {
            Stmt::Let { ty, name, init, span } => {
                let typed_init = self.infer_expr(init)?;
                expect_type(*ty, typed_init.ty(), typed_init.span())?;
                let def_id = self.declare(*name, *span, SymbolEntry { ty: *ty, kind: SymbolKind::Variable })?;
                Ok(TypedStmt::Let { ty: *ty, name: *name, def_id, init: typed_init, span: *span })
            }
            Stmt::Assign { name, expr, span } => {
                let def_id = self.resolve(*name, *span)?;
                let entry = self.entry(def_id).clone();
                if !matches!(entry.kind, SymbolKind::Variable | SymbolKind::Parameter) {
                    return Err(SemError::InvalidAssignment { name: name.as_str().to_string(), span: *span });
                }
                let typed_expr = self.infer_expr(expr)?;
                expect_type(entry.ty, typed_expr.ty(), typed_expr.span())?;
                Ok(TypedStmt::Assign { name: *name, def_id, expr: typed_expr, span: *span })
            }
            Stmt::If { condition, then_block, else_block, span } => {
                let typed_cond = self.infer_expr(condition)?;
                expect_type(Type::Bool, typed_cond.ty(), typed_cond.span())?;
                let typed_then = self.check_block(then_block)?;
                let typed_else = else_block.as_ref().map(|b| self.check_block(b)).transpose()?;
                Ok(TypedStmt::If { condition: typed_cond, then_block: typed_then, else_block: typed_else, span: *span })
            }
            Stmt::While { condition, body, span } => {
                let typed_cond = self.infer_expr(condition)?;
                expect_type(Type::Bool, typed_cond.ty(), typed_cond.span())?;
                self.scopes.enter(RibKind::Loop);
                let typed_body = self.check_block_in_current_scope(body);
                self.scopes.exit();
                Ok(TypedStmt::While { condition: typed_cond, body: typed_body?, span: *span })
            }
            Stmt::For { init, condition, update, body, span } => {
                self.scopes.enter(RibKind::Loop);
                let result = (|| {
                    let typed_init = self.check_stmt(init)?;
                    let typed_cond = self.infer_expr(condition)?;
                    expect_type(Type::Bool, typed_cond.ty(), typed_cond.span())?;
                    let typed_update = self.check_stmt(update)?;
                    let typed_body = self.check_block(body)?;
                    Ok::<_, SemError>((typed_init, typed_cond, typed_update, typed_body))
                })();
                self.scopes.exit();
                let (typed_init, typed_cond, typed_update, typed_body) = result?;
                Ok(TypedStmt::For {
                    init: Box::new(typed_init),
                    condition: typed_cond,
                    update: Box::new(typed_update),
                    body: typed_body,
                    span: *span,
                })
            }
            Stmt::FunctionDef { name, params, return_type, body, span } => {
                let param_types: Vec<Type> = params.iter().map(|p| p.ty).collect();
                let def_id = self.declare(
                    *name,
                    *span,
                    SymbolEntry { ty: *return_type, kind: SymbolKind::Function { params: param_types, return_type: *return_type } },
                )?;
                self.scopes.enter(RibKind::Function);
                let previous_return_type = self.return_type.replace(*return_type);
                let result = self.check_params(params).and_then(|typed_params| {
                    let typed_body = self.check_block_in_current_scope(body)?;
                    Ok((typed_params, typed_body))
                });
                self.return_type = previous_return_type;
                self.scopes.exit();
                let (typed_params, typed_body) = result?;
                Ok(TypedStmt::FunctionDef {
                    name: *name,
                    def_id,
                    params: typed_params,
                    return_type: *return_type,
                    body: typed_body,
                    span: *span,
                })
            }
            Stmt::Return { expr, span } => {
                let Some(expected) = self.return_type else {
                    return Err(SemError::ReturnOutsideFunction { span: *span });
                };
                let typed_expr = expr.as_ref().map(|e| self.infer_expr(e)).transpose()?;
                match (&typed_expr, expected) {
                    (Some(e), _) => expect_type(expected, e.ty(), e.span())?,
                    (None, Type::Void) => {}
                    (None, _) => return Err(SemError::TypeError { expected, found: Type::Void, span: *span }),
                }
                Ok(TypedStmt::Return { expr: typed_expr, span: *span })
            }
            Stmt::Block(block) => Ok(TypedStmt::Block(self.check_block(block)?)),
            Stmt::Expr(expr) => Ok(TypedStmt::Expr(self.infer_expr(expr)?)),
        }
    }

    fn check_params(&mut self, params: &[Param]) -> Result<Vec<TypedParam>, SemError> {
        params
            .iter()
            .map(|p| {
                let def_id = self.declare(p.name, p.span, SymbolEntry { ty: p.ty, kind: SymbolKind::Parameter })?;
                Ok(TypedParam { name: p.name, def_id, ty: p.ty, span: p.span })
            })
            .collect()
    }

    fn check_block(&mut self, block: &Block) -> Result<TypedBlock, SemError> {
        self.scopes.enter(RibKind::Block);
        let result = self.check_block_in_current_scope(block);
        self.scopes.exit();
        result
    }

    /// Walks `block`'s statements without opening a scope of its own —
    /// used when the caller already opened one (function bodies share
    /// the parameter scope; loop bodies share the loop-variable scope).
    fn check_block_in_current_scope(&mut self, block: &Block) -> Result<TypedBlock, SemError> {
        let statements = block.statements.iter().map(|s| self.check_stmt(s)).collect::<Result<_, _>>()?;
        Ok(TypedBlock { statements, span: block.span })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn expect_type(expected: Type, found: Type, span: Span) -> Result<(), SemError> {
    if expected == found {
        Ok(())
    } else {
        Err(SemError::TypeError { expected, found, span })
    }
}

/// The type arithmetic/relational/equality/logical operators produce,
/// or the mismatch that rejects the pair.
pub(crate) fn check_operand_types(op: BinOp, left: Type, right: Type, span: Span) -> Result<Type, SemError> {
    use crate::types::is_numeric;
    match op {
        BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div => {
            if left == right && is_numeric(left) {
                Ok(left)
            } else {
                Err(mismatch(left, right, span))
            }
        }
        BinOp::Mod => {
            if left == Type::Int && right == Type::Int {
                Ok(Type::Int)
            } else {
                Err(mismatch(Type::Int, if left != Type::Int { left } else { right }, span))
            }
        }
        BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => {
            if left == right && is_numeric(left) {
                Ok(Type::Bool)
            } else {
                Err(mismatch(left, right, span))
            }
        }
        BinOp::Eq | BinOp::Ne => {
            if left == right {
                Ok(Type::Bool)
            } else {
                Err(mismatch(left, right, span))
            }
        }
        BinOp::And | BinOp::Or => {
            if left == Type::Bool && right == Type::Bool {
                Ok(Type::Bool)
            } else {
                Err(mismatch(Type::Bool, if left != Type::Bool { left } else { right }, span))
            }
        }
    }
}

fn mismatch(expected: Type, found: Type, span: Span) -> SemError {
    SemError::TypeError { expected, found, span }
}
