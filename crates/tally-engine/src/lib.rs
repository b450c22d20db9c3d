#![forbid(unsafe_code)]

//! Calculator expression engine: lexing, parsing, evaluation and incremental
//! expression editing.
//!
//! The input vocabulary is fixed — digits, `+ - * / ^`, parentheses, postfix
//! `!`, the constants `π` and `e`, and the named functions `sin cos tan log
//! ln sqrt abs` (radians; `log` is base-10). [`evaluate`] parses into an
//! explicit [`Expr`] tree and walks it, so there is no textual-rewrite or
//! dynamic-evaluation step anywhere.
//!
//! [`ExpressionBuilder`] is the keystroke-level editing surface: it enforces
//! the one-decimal-point-per-segment and no-stacked-operators invariants and
//! implements the smart parenthesis and function keys. Groups it leaves open
//! are implicitly closed at parse time.

pub mod ast;
pub mod editing;
mod error;
mod eval;
mod functions;
pub mod parser;

pub use ast::{BinaryOp, Constant, Expr, FunctionName, Span, UnaryOp};
pub use editing::{ExpressionBuilder, FunctionKey};
pub use error::{EvalError, ParseError};
pub use eval::{evaluate, evaluate_expr};
