//! Numeric implementations of the calculator's named functions.

use crate::ast::FunctionName;

/// Apply a named single-argument function. Trig functions work in radians;
/// domain violations surface as NaN/infinities and are classified by the
/// evaluator.
pub(crate) fn apply(func: FunctionName, x: f64) -> f64 {
    match func {
        FunctionName::Sin => x.sin(),
        FunctionName::Cos => x.cos(),
        FunctionName::Tan => x.tan(),
        FunctionName::Log => x.log10(),
        FunctionName::Ln => x.ln(),
        FunctionName::Sqrt => x.sqrt(),
        FunctionName::Abs => x.abs(),
    }
}

/// Postfix factorial.
///
/// The argument is rounded to the nearest integer. Negative arguments have no
/// factorial (NaN); values beyond 170 overflow IEEE doubles (infinity);
/// otherwise the exact iterative product.
pub(crate) fn factorial(x: f64) -> f64 {
    let n = x.round();
    if n < 0.0 {
        return f64::NAN;
    }
    if n > 170.0 {
        return f64::INFINITY;
    }
    let n = n as u64;
    let mut acc = 1.0;
    for i in 2..=n {
        acc *= i as f64;
    }
    acc
}
