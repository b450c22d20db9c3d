//! The calculator controller.
//!
//! [`Calculator`] owns the expression builder, the last committed answer, the
//! displayed result string and the history ledger, and maps the keypad's
//! token events onto them. Every edit triggers a live preview evaluation;
//! only [`press_equals`] evaluates strictly, records history and surfaces
//! errors.
//!
//! [`press_equals`]: Calculator::press_equals

use tally_engine::{evaluate, BinaryOp, EvalError, ExpressionBuilder, FunctionKey};
use tally_format::{format_expression, format_result, parse_number};

use crate::history::HistoryLedger;
use crate::settings::SessionSettings;

const DEFAULT_RESULT: &str = "0";

/// What the two display lines should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// The in-progress expression with display glyphs, or the committed
    /// expression suffixed with `=`.
    pub expression: String,
    /// Live preview, committed result, `Error` or `Infinity`.
    pub result: String,
    /// Whether `result` is an error string (for error styling).
    pub error: bool,
}

#[derive(Debug)]
pub struct Calculator {
    builder: ExpressionBuilder,
    last_answer: Option<f64>,
    /// Raw text of the last committed or recalled expression, shown with a
    /// trailing `=` while the builder is empty.
    committed: Option<String>,
    result_display: String,
    error: bool,
    history: HistoryLedger,
    settings: SessionSettings,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl Calculator {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            builder: ExpressionBuilder::new(),
            last_answer: None,
            committed: None,
            result_display: DEFAULT_RESULT.to_string(),
            error: false,
            history: HistoryLedger::new(settings.history_capacity),
            settings,
        }
    }

    /// Digit or decimal-point key. A digit pressed right after a commit
    /// starts a fresh expression instead of chaining.
    pub fn press_digit(&mut self, ch: char) {
        self.begin_input();
        if self.builder.is_empty() && self.last_answer.take().is_some() {
            self.committed = None;
        }
        if self.builder.push_digit(ch) {
            self.refresh_preview();
        } else {
            log::debug!("rejected digit input {ch:?}");
        }
    }

    /// Binary operator key. On an empty expression the last answer (if any)
    /// is consumed as the left operand.
    pub fn press_operator(&mut self, op: BinaryOp) {
        self.begin_input();
        self.seed_from_answer();
        if self.builder.push_operator(op) {
            self.refresh_preview();
        }
    }

    /// The smart parenthesis key.
    pub fn press_paren(&mut self) {
        self.begin_input();
        self.builder.smart_paren();
        self.refresh_preview();
    }

    pub fn press_backspace(&mut self) {
        self.begin_input();
        self.builder.backspace();
        self.refresh_preview();
    }

    /// Sign toggle: negates the last answer while the expression is empty,
    /// otherwise the expression's leading sign.
    pub fn press_sign(&mut self) {
        self.begin_input();
        if self.builder.is_empty() {
            if let Some(answer) = self.last_answer {
                let negated = -answer;
                self.last_answer = Some(negated);
                self.result_display = format_result(negated, &self.settings.locale);
            }
            return;
        }
        self.builder.toggle_sign();
        self.refresh_preview();
    }

    /// A scientific keypad key. On an empty expression the last answer is
    /// consumed as the seed first.
    pub fn press_function(&mut self, key: FunctionKey) {
        self.begin_input();
        self.seed_from_answer();
        self.builder.apply_function(key);
        self.refresh_preview();
    }

    /// Reset expression, preview, error state and last answer.
    pub fn press_clear(&mut self) {
        self.builder.clear();
        self.last_answer = None;
        self.committed = None;
        self.result_display = DEFAULT_RESULT.to_string();
        self.error = false;
    }

    /// Commit the expression: evaluate strictly, record history on success,
    /// surface `Error`/`Infinity` on failure. Empty expressions are a no-op.
    pub fn press_equals(&mut self) {
        if self.builder.is_empty() {
            return;
        }
        let raw = self.builder.as_str().to_string();
        match evaluate(&raw) {
            Ok(value) => {
                let formatted = format_result(value, &self.settings.locale);
                self.history.record(raw.clone(), formatted.clone());
                self.last_answer = Some(value);
                self.committed = Some(raw);
                self.result_display = formatted;
                self.error = false;
                self.builder.clear();
            }
            Err(err) => {
                log::debug!("commit of {raw:?} failed: {err}");
                let text = match err {
                    EvalError::Overflow => "Infinity",
                    EvalError::Invalid(_) | EvalError::Numeric => "Error",
                };
                self.builder.clear();
                self.committed = None;
                self.result_display = text.to_string();
                self.error = true;
            }
        }
    }

    /// Bring a history entry back as the current answer. Out-of-range
    /// indexes are ignored.
    pub fn recall(&mut self, index: usize) {
        let Some(entry) = self.history.get(index).cloned() else {
            log::debug!("history recall index {index} out of range");
            return;
        };
        let Some(value) = parse_number(&entry.result, &self.settings.locale) else {
            log::warn!("history entry result {:?} does not parse", entry.result);
            return;
        };
        self.builder.clear();
        self.last_answer = Some(value);
        self.committed = Some(entry.expression);
        self.result_display = entry.result;
        self.error = false;
    }

    pub fn display(&self) -> DisplayState {
        let expression = if !self.builder.is_empty() {
            format_expression(self.builder.as_str())
        } else if let Some(committed) = &self.committed {
            format!("{} =", format_expression(committed))
        } else {
            String::new()
        };
        DisplayState {
            expression,
            result: self.result_display.clone(),
            error: self.error,
        }
    }

    /// The raw (input-glyph) expression text.
    pub fn expression(&self) -> &str {
        self.builder.as_str()
    }

    pub fn last_answer(&self) -> Option<f64> {
        self.last_answer
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn seed_from_answer(&mut self) {
        if self.builder.is_empty() {
            if let Some(answer) = self.last_answer.take() {
                self.builder.seed(&answer.to_string());
                self.committed = None;
            }
        }
    }

    /// Leave any error display behind as soon as fresh input arrives.
    fn begin_input(&mut self) {
        if self.error {
            self.error = false;
            self.result_display = DEFAULT_RESULT.to_string();
        }
    }

    /// Re-evaluate leniently after an edit. Skipped while the expression is
    /// empty or ends in a binary operator; failures keep the last good
    /// preview, since an incomplete expression is the normal case here.
    fn refresh_preview(&mut self) {
        if self.builder.is_empty() || self.builder.ends_with_operator() {
            return;
        }
        if let Ok(value) = evaluate(self.builder.as_str()) {
            self.result_display = format_result(value, &self.settings.locale);
        }
    }
}
