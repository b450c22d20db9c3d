//! Incremental expression editing.
//!
//! [`ExpressionBuilder`] owns the in-progress expression text and enforces
//! the editing invariants at input time: numeric segments carry at most one
//! decimal point, binary operators never stack (a new operator replaces a
//! trailing one), and the single smart-parenthesis key decides between `(`,
//! `)` and `*(` from the parenthesis balance and trailing character.
//!
//! The builder knows nothing about results or history; chaining from a
//! committed answer is the session controller's job, done via [`seed`].
//!
//! [`seed`]: ExpressionBuilder::seed

use crate::ast::{BinaryOp, Constant, FunctionName};

/// A scientific keypad key that rewrites the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKey {
    /// `sin` … `abs`: appends `name(`; the `)` is deferred to evaluation.
    Func(FunctionName),
    /// Squares the whole accumulated expression: `expr` becomes `(expr)^2`.
    Square,
    /// Reciprocal of the whole expression: `expr` becomes `1/(expr)`.
    Reciprocal,
    /// `π` or `e`, with an implicit `*` after a value.
    Const(Constant),
    /// Postfix `!`.
    Factorial,
}

/// The in-progress calculator expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuilder {
    expr: String,
}

/// Characters that end a numeric segment for decimal-point checking.
fn is_segment_boundary(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '^' | '(' | ')' | '!')
}

fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/')
}

impl ExpressionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.expr
    }

    pub fn is_empty(&self) -> bool {
        self.expr.is_empty()
    }

    pub fn clear(&mut self) {
        self.expr.clear();
    }

    /// Replace the whole expression (used to chain from a committed answer).
    pub fn seed(&mut self, text: &str) {
        self.expr.clear();
        self.expr.push_str(text);
    }

    /// Append a digit or decimal point. A second `.` in the current numeric
    /// segment is rejected.
    pub fn push_digit(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() && ch != '.' {
            return false;
        }
        if ch == '.' && self.current_segment_has_dot() {
            return false;
        }
        self.expr.push(ch);
        true
    }

    /// Append a binary operator. A trailing operator is replaced rather than
    /// stacked; on an empty expression only `-` (unary minus) is accepted.
    pub fn push_operator(&mut self, op: BinaryOp) -> bool {
        if self.expr.is_empty() {
            if op != BinaryOp::Sub {
                return false;
            }
            self.expr.push('-');
            return true;
        }
        if self.ends_with_operator() {
            self.expr.pop();
        }
        self.expr.push(op.symbol());
        true
    }

    /// The single context-sensitive parenthesis key: opens after nothing, an
    /// operator or another `(`; closes while a group is open; otherwise
    /// starts a multiplied group (`*(`).
    pub fn smart_paren(&mut self) {
        match self.expr.chars().last() {
            None => self.expr.push('('),
            Some(last) if last == '(' || is_operator(last) => self.expr.push('('),
            _ if self.open_paren_surplus() > 0 => self.expr.push(')'),
            _ => self.expr.push_str("*("),
        }
    }

    /// Remove the trailing character, or a whole trailing function prefix
    /// (`sin(` … `abs(`) so backspace never strands a bare function name.
    pub fn backspace(&mut self) {
        for func in FunctionName::ALL {
            let prefix = func.prefix();
            if self.expr.ends_with(prefix) {
                self.expr.truncate(self.expr.len() - prefix.len());
                return;
            }
        }
        self.expr.pop();
    }

    /// Negate the whole expression textually: strip a leading `-` or prepend
    /// one. Empty expressions are untouched.
    pub fn toggle_sign(&mut self) {
        if self.expr.is_empty() {
            return;
        }
        if self.expr.starts_with('-') {
            self.expr.remove(0);
        } else {
            self.expr.insert(0, '-');
        }
    }

    /// Apply a scientific keypad key.
    pub fn apply_function(&mut self, key: FunctionKey) {
        match key {
            FunctionKey::Func(func) => self.expr.push_str(func.prefix()),
            FunctionKey::Square => {
                if self.expr.is_empty() {
                    return;
                }
                self.expr = format!("({})^2", self.expr);
            }
            FunctionKey::Reciprocal => {
                if self.expr.is_empty() {
                    return;
                }
                self.expr = format!("1/({})", self.expr);
            }
            FunctionKey::Const(constant) => {
                if self.needs_implicit_multiply() {
                    self.expr.push('*');
                }
                self.expr.push(constant.symbol());
            }
            FunctionKey::Factorial => self.expr.push('!'),
        }
    }

    /// Whether the expression currently ends in a binary operator (the
    /// live-preview gate).
    pub fn ends_with_operator(&self) -> bool {
        self.expr.chars().last().is_some_and(is_operator)
    }

    /// Unclosed `(` count.
    pub fn open_paren_surplus(&self) -> usize {
        let mut surplus = 0usize;
        for ch in self.expr.chars() {
            match ch {
                '(' => surplus += 1,
                ')' => surplus = surplus.saturating_sub(1),
                _ => {}
            }
        }
        surplus
    }

    fn current_segment_has_dot(&self) -> bool {
        self.expr
            .chars()
            .rev()
            .take_while(|&ch| !is_segment_boundary(ch))
            .any(|ch| ch == '.')
    }

    fn needs_implicit_multiply(&self) -> bool {
        match self.expr.chars().last() {
            None => false,
            Some(last) => !is_operator(last) && last != '(',
        }
    }
}
