//! Abstract Syntax Tree definitions for Imperial Code.
//!
//! Nodes are built bottom-up by the parser and are immutable afterwards. Every node that can be reported on carries
//! its span through [`Spanned`].

use std::fmt;

use imperial_core::lang::types::DataType;

pub use crate::span::{Span, Spanned};

/// Identifier
pub type Ident = String;

/// A sequence of statements between braces.
pub type Block = Vec<Spanned<Statement>>;

// ============================================================================
// Program structure
// ============================================================================

/// A whole source file: globals in source order plus the single entry block.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub globals: Vec<Spanned<Global>>,
    pub entry: Spanned<EntryBlock>,
}

/// Top-level item outside the entry block.
#[derive(Debug, Clone, PartialEq)]
pub enum Global {
    Declaration(Declaration),
    Function(Function),
}

/// `Embark() { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBlock {
    pub body: Block,
}

/// Function declaration (`body` is `None`) or definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub return_type: Spanned<DataType>,
    pub name: Spanned<Ident>,
    pub params: Vec<Param>,
    pub body: Option<Block>,
}

impl Function {
    pub fn is_definition(&self) -> bool {
        self.body.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: Spanned<DataType>,
    pub name: Spanned<Ident>,
}

// ============================================================================
// Declarations
// ============================================================================

/// `[Constant] Type name [= init], name[size] [= {..}], ...;`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub ty: Spanned<DataType>,
    pub is_const: bool,
    pub bindings: Vec<Binding>,
}

/// One declared name.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: Spanned<Ident>,
    /// Array size, when declared as `name[size]`.
    pub size: Option<Spanned<i64>>,
    pub init: Option<Initializer>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    Expr(Spanned<Expr>),
    /// `{ lit, lit, ... }`
    Array(Vec<Spanned<Literal>>),
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declaration(Declaration),
    /// `x = value;` or `x[i] = value;`
    Assign(AssignStmt),
    /// `x += value;`
    CompoundAssign(CompoundAssignStmt),
    /// Expression statement: `f(x);`, `x++;`
    Expr(Spanned<Expr>),
    /// `Thou (cond) { } Or ...`
    If(IfStmt),
    /// `Until (cond) { }`
    While(WhileStmt),
    /// `Per (init; cond; update) { }`
    For(ForStmt),
    /// `Act { } Until (cond);`
    DoWhile(DoWhileStmt),
    /// `Shift (x) { Opt lit: ... Usual: ... }`
    Switch(SwitchStmt),
    /// `Halt;`
    Break,
    /// `Extend;`
    Continue,
    /// `Recede [expr];`
    Return(Option<Spanned<Expr>>),
    /// `Seek("fmt", &x, ...);`
    Input(InputStmt),
    /// `Emit("fmt", expr, ...);`
    Output(OutputStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Spanned<Ident>,
    pub index: Option<Spanned<Expr>>,
    pub value: Initializer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompoundAssignStmt {
    pub target: Spanned<Ident>,
    pub op: CompoundOp,
    pub value: Spanned<Expr>,
}

/// A conditional branch. `condition` is `None` only for a trailing `Or { }`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Option<Spanned<Expr>>,
    pub body: Block,
    pub else_branch: Option<Box<Spanned<IfStmt>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Spanned<Expr>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<Box<Spanned<Statement>>>,
    pub condition: Option<Spanned<Expr>>,
    pub update: Option<Box<Spanned<Statement>>>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStmt {
    pub body: Block,
    pub condition: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub subject: Spanned<Ident>,
    pub cases: Vec<SwitchCase>,
    pub default: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub value: Spanned<Literal>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputStmt {
    pub format: Spanned<String>,
    pub targets: Vec<Spanned<Ident>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputStmt {
    pub format: Spanned<OutputFormat>,
    pub args: Vec<Spanned<Expr>>,
}

/// First argument of `Emit`.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Missive(String),
    Variable(Ident),
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    /// Variable read
    Access(Ident),
    /// Array element read: `xs[i]`
    Index(Spanned<Ident>, Box<Spanned<Expr>>),
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    Unary(UnaryOp, Box<Spanned<Expr>>),
    /// Function call: `f(a, b)`
    Call(Spanned<Ident>, Vec<Spanned<Expr>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Numeral(i64),
    Decimal(f64),
    Letter(char),
    Missive(String),
    Veracity(bool),
    Nil,
}

impl Literal {
    /// The data type a literal belongs to. `Nil` counts as a `Veracity`.
    pub fn data_type(&self) -> DataType {
        match self {
            Literal::Numeral(_) => DataType::Numeral,
            Literal::Decimal(_) => DataType::Decimal,
            Literal::Letter(_) => DataType::Letter,
            Literal::Missive(_) => DataType::Missive,
            Literal::Veracity(_) | Literal::Nil => DataType::Veracity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `+x`
    Plus,
    /// `-x`
    Neg,
    /// `!x`
    Not,
    /// `x++`
    PostIncrement,
    /// `x--`
    PostDecrement,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Not => write!(f, "!"),
            UnaryOp::PostIncrement => write!(f, "++"),
            UnaryOp::PostDecrement => write!(f, "--"),
        }
    }
}

/// `+= -= *= /= %=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl fmt::Display for CompoundOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundOp::Add => write!(f, "+="),
            CompoundOp::Sub => write!(f, "-="),
            CompoundOp::Mul => write!(f, "*="),
            CompoundOp::Div => write!(f, "/="),
            CompoundOp::Mod => write!(f, "%="),
        }
    }
}
