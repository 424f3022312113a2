use std::fmt::{self, Display};

use crate::Span;

use super::{
    expressions::{
        BooleanExpr, FloatExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr, PrefixExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Root of a parsed source text.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Literal text of the first statement's token, or empty for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statement Types
#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Stmt {
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => &stmt.token.literal,
            Stmt::Return(stmt) => &stmt.token.literal,
            Stmt::Expression(stmt) => &stmt.token.literal,
            Stmt::Block(stmt) => &stmt.token.literal,
        }
    }

    pub fn get_span(&self) -> Span {
        match self {
            Stmt::Let(stmt) => Span {
                start: stmt.token.span.start,
                end: stmt.value.get_span().end,
            },
            Stmt::Return(stmt) => Span {
                start: stmt.token.span.start,
                end: stmt
                    .value
                    .as_ref()
                    .map(|value| value.get_span().end)
                    .unwrap_or(stmt.token.span.end),
            },
            Stmt::Expression(stmt) => stmt.expression.get_span(),
            Stmt::Block(stmt) => stmt.span,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
            Stmt::Block(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression Types
#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Float(FloatExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
}

impl Expr {
    pub fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(expr) => &expr.token.literal,
            Expr::Integer(expr) => &expr.token.literal,
            Expr::Float(expr) => &expr.token.literal,
            Expr::Boolean(expr) => &expr.token.literal,
            Expr::Prefix(expr) => &expr.token.literal,
            Expr::Infix(expr) => &expr.token.literal,
            Expr::If(expr) => &expr.token.literal,
        }
    }

    /// Source range covered by the expression, from its first to its last token.
    pub fn get_span(&self) -> Span {
        match self {
            Expr::Identifier(expr) => expr.token.span,
            Expr::Integer(expr) => expr.token.span,
            Expr::Float(expr) => expr.token.span,
            Expr::Boolean(expr) => expr.token.span,
            Expr::Prefix(expr) => Span {
                start: expr.token.span.start,
                end: expr.right.get_span().end,
            },
            Expr::Infix(expr) => Span {
                start: expr.left.get_span().start,
                end: expr.right.get_span().end,
            },
            Expr::If(expr) => Span {
                start: expr.token.span.start,
                end: expr
                    .alternative
                    .as_ref()
                    .unwrap_or(&expr.consequence)
                    .span
                    .end,
            },
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(expr) => write!(f, "{}", expr),
            Expr::Integer(expr) => write!(f, "{}", expr),
            Expr::Float(expr) => write!(f, "{}", expr),
            Expr::Boolean(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Infix(expr) => write!(f, "{}", expr),
            Expr::If(expr) => write!(f, "{}", expr),
        }
    }
}
