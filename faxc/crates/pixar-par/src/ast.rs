//! AST node definitions.
//!
//! A sum type per node kind with exhaustive pattern matching, rather than
//! the tagged-tuple-dispatched-by-string-name encoding of the original
//! implementation — every node kind is a distinct variant the compiler
//! checks match arms against, eliminating the "no visit method for this
//! node" class of runtime error entirely.

use pixar_lex::Colour;
use pixar_util::{Span, Symbol};

/// A full source file: a flat list of top-level statements (function
/// definitions interleaved with the program's top-level statements).
pub type Program = Vec<Stmt>;

/// The closed type system (§3). `String` and `Void` are not spellable in
/// the `type` production but are still first-class for type-checking:
/// string literals have type `String`, and a function with no `->` has
/// return type `Void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
    Bool,
    Colour,
    String,
    Void,
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Int => "int",
            Type::Float => "float",
            Type::Bool => "bool",
            Type::Colour => "colour",
            Type::String => "string",
            Type::Void => "void",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "and",
            BinOp::Or => "or",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Not,
}

/// A function parameter: `name : type`.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: Symbol,
    pub ty: Type,
    pub span: Span,
}

/// `{ statement* }`.
#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

/// Expression nodes. Every variant carries its own [`Span`], retrievable
/// uniformly through [`Expr::span`].
///
/// The four void pad built-ins (`Print`, `Delay`, `Pixel`, `PixelR`) are
/// expression nodes like the other four (`Width`, `Height`, `Read`,
/// `Randi`) because the grammar's `primary` production treats all eight
/// uniformly via `builtin-call-expr`; the statement-level `builtin-call`
/// alternative is just an expression statement wrapping one of these.
/// Using a void-typed one where a value is required is rejected by the
/// semantic analyzer's typing rules, not by the grammar.
#[derive(Debug, Clone)]
pub enum Expr {
    IntLit(i64, Span),
    FloatLit(f64, Span),
    BoolLit(bool, Span),
    ColourLit(Colour, Span),
    StringLit(Symbol, Span),
    Identifier(Symbol, Span),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
    Unary {
        op: UnOp,
        operand: Box<Expr>,
        span: Span,
    },
    Call {
        name: Symbol,
        args: Vec<Expr>,
        span: Span,
    },
    Width(Span),
    Height(Span),
    Read {
        x: Box<Expr>,
        y: Box<Expr>,
        span: Span,
    },
    Randi {
        bound: Box<Expr>,
        span: Span,
    },
    Print {
        expr: Box<Expr>,
        span: Span,
    },
    Delay {
        expr: Box<Expr>,
        span: Span,
    },
    Pixel {
        x: Box<Expr>,
        y: Box<Expr>,
        colour: Box<Expr>,
        span: Span,
    },
    PixelR {
        x: Box<Expr>,
        y: Box<Expr>,
        w: Box<Expr>,
        h: Box<Expr>,
        colour: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::IntLit(_, s)
            | Expr::FloatLit(_, s)
            | Expr::BoolLit(_, s)
            | Expr::ColourLit(_, s)
            | Expr::StringLit(_, s)
            | Expr::Identifier(_, s)
            | Expr::Width(s)
            | Expr::Height(s) => *s,
            Expr::Binary { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Call { span, .. }
            | Expr::Read { span, .. }
            | Expr::Randi { span, .. }
            | Expr::Print { span, .. }
            | Expr::Delay { span, .. }
            | Expr::Pixel { span, .. }
            | Expr::PixelR { span, .. } => *span,
        }
    }

    /// Whether this expression is a call-like form — the only expressions
    /// the grammar allows to stand alone as a statement (§4.2 disambiguation).
    pub fn is_call_like(&self) -> bool {
        matches!(
            self,
            Expr::Call { .. }
                | Expr::Width(_)
                | Expr::Height(_)
                | Expr::Read { .. }
                | Expr::Randi { .. }
                | Expr::Print { .. }
                | Expr::Delay { .. }
                | Expr::Pixel { .. }
                | Expr::PixelR { .. }
        )
    }
}

/// Statement nodes.
#[derive(Debug, Clone)]
pub enum Stmt {
    Let {
        ty: Type,
        name: Symbol,
        init: Expr,
        span: Span,
    },
    Assign {
        name: Symbol,
        expr: Expr,
        span: Span,
    },
    If {
        condition: Expr,
        then_block: Block,
        else_block: Option<Block>,
        span: Span,
    },
    While {
        condition: Expr,
        body: Block,
        span: Span,
    },
    For {
        init: Box<Stmt>,
        condition: Expr,
        update: Box<Stmt>,
        body: Block,
        span: Span,
    },
    FunctionDef {
        name: Symbol,
        params: Vec<Param>,
        return_type: Type,
        body: Block,
        span: Span,
    },
    Return {
        expr: Option<Expr>,
        span: Span,
    },
    Block(Block),
    Expr(Expr),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Let { span, .. }
            | Stmt::Assign { span, .. }
            | Stmt::If { span, .. }
            | Stmt::While { span, .. }
            | Stmt::For { span, .. }
            | Stmt::FunctionDef { span, .. }
            | Stmt::Return { span, .. } => *span,
            Stmt::Block(b) => b.span,
            Stmt::Expr(e) => e.span(),
        }
    }
}
