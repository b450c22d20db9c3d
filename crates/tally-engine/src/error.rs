use crate::ast::Span;
use thiserror::Error;

/// A syntax error, with the byte range of the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// Why an expression failed to produce a finite number.
///
/// `Numeric` covers NaN results (factorial of a negative, `0/0`, `sqrt(-1)`);
/// `Overflow` covers infinite results (`1/0`, `171!`), which the UI surfaces
/// as `Infinity` rather than `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("invalid expression: {0}")]
    Invalid(#[from] ParseError),
    #[error("expression has no numeric result")]
    Numeric,
    #[error("result exceeds the representable range")]
    Overflow,
}
