//! Expression tree produced by the parser and consumed by the evaluator.

use std::fmt;

/// Byte range of a token or node in the source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// The ASCII character this operator uses in stored expression text.
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

/// Named single-argument functions in the calculator vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionName {
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    Sqrt,
    Abs,
}

impl FunctionName {
    pub const ALL: [FunctionName; 7] = [
        FunctionName::Sin,
        FunctionName::Cos,
        FunctionName::Tan,
        FunctionName::Log,
        FunctionName::Ln,
        FunctionName::Sqrt,
        FunctionName::Abs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FunctionName::Sin => "sin",
            FunctionName::Cos => "cos",
            FunctionName::Tan => "tan",
            FunctionName::Log => "log",
            FunctionName::Ln => "ln",
            FunctionName::Sqrt => "sqrt",
            FunctionName::Abs => "abs",
        }
    }

    /// The token the keypad inserts: the name plus its opening parenthesis.
    pub fn prefix(self) -> &'static str {
        match self {
            FunctionName::Sin => "sin(",
            FunctionName::Cos => "cos(",
            FunctionName::Tan => "tan(",
            FunctionName::Log => "log(",
            FunctionName::Ln => "ln(",
            FunctionName::Sqrt => "sqrt(",
            FunctionName::Abs => "abs(",
        }
    }

    pub fn from_ident(ident: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == ident)
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    Euler,
}

impl Constant {
    /// The character inserted into expression text by the constant keys.
    pub fn symbol(self) -> char {
        match self {
            Constant::Pi => '\u{03C0}',
            Constant::Euler => 'e',
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::Euler => std::f64::consts::E,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Constant(Constant),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Postfix `!`.
    Factorial(Box<Expr>),
    Call {
        func: FunctionName,
        arg: Box<Expr>,
    },
}
