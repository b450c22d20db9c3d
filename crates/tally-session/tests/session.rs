use pretty_assertions::assert_eq;
use tally_session::{BinaryOp, Calculator, Constant, FunctionKey, FunctionName};

fn type_expression(calc: &mut Calculator, text: &str) {
    for ch in text.chars() {
        match ch {
            '0'..='9' | '.' => calc.press_digit(ch),
            '+' => calc.press_operator(BinaryOp::Add),
            '-' => calc.press_operator(BinaryOp::Sub),
            '*' => calc.press_operator(BinaryOp::Mul),
            '/' => calc.press_operator(BinaryOp::Div),
            '(' | ')' => calc.press_paren(),
            other => panic!("untypeable character {other:?}"),
        }
    }
}

#[test]
fn commit_formats_records_and_clears() {
    let mut calc = Calculator::default();
    type_expression(&mut calc, "2+2");
    calc.press_equals();

    let display = calc.display();
    assert_eq!(display.result, "4");
    assert_eq!(display.expression, "2+2 =");
    assert!(!display.error);
    assert_eq!(calc.expression(), "");
    assert_eq!(calc.last_answer(), Some(4.0));
    assert_eq!(calc.history().len(), 1);
    assert_eq!(calc.history().get(0).unwrap().expression, "2+2");
    assert_eq!(calc.history().get(0).unwrap().result, "4");
}

#[test]
fn live_preview_tracks_edits() {
    let mut calc = Calculator::default();
    type_expression(&mut calc, "2+3");
    assert_eq!(calc.display().result, "5");

    // A trailing operator suspends the preview.
    calc.press_operator(BinaryOp::Mul);
    assert_eq!(calc.display().result, "5");

    calc.press_digit('4');
    assert_eq!(calc.display().result, "14");
}

#[test]
fn preview_failures_keep_the_last_good_value() {
    let mut calc = Calculator::default();
    calc.press_digit('2');
    assert_eq!(calc.display().result, "2");

    calc.press_operator(BinaryOp::Div);
    calc.press_paren();
    // "2/(" does not evaluate; the preview stays at 2 and no error shows.
    let display = calc.display();
    assert_eq!(display.result, "2");
    assert!(!display.error);
    assert_eq!(calc.history().len(), 0);
}

#[test]
fn operator_chains_from_the_committed_answer() {
    let mut calc = Calculator::default();
    type_expression(&mut calc, "2+2");
    calc.press_equals();

    calc.press_operator(BinaryOp::Mul);
    assert_eq!(calc.expression(), "4*");
    calc.press_digit('3');
    calc.press_equals();
    assert_eq!(calc.display().result, "12");
}

#[test]
fn digit_after_commit_starts_fresh() {
    let mut calc = Calculator::default();
    type_expression(&mut calc, "2+2");
    calc.press_equals();

    calc.press_digit('5');
    assert_eq!(calc.expression(), "5");
    assert_eq!(calc.last_answer(), None);
    calc.press_equals();
    assert_eq!(calc.display().result, "5");
}

#[test]
fn function_key_seeds_from_the_answer() {
    let mut calc = Calculator::default();
    type_expression(&mut calc, "3+2");
    calc.press_equals();

    calc.press_function(FunctionKey::Square);
    assert_eq!(calc.expression(), "(5)^2");
    calc.press_equals();
    assert_eq!(calc.display().result, "25");
}

#[test]
fn factorial_key_and_commit() {
    let mut calc = Calculator::default();
    calc.press_digit('5');
    calc.press_function(FunctionKey::Factorial);
    assert_eq!(calc.expression(), "5!");
    calc.press_equals();
    assert_eq!(calc.display().result, "120");
}

#[test]
fn constant_key_inserts_implicit_multiplication() {
    let mut calc = Calculator::default();
    calc.press_digit('2');
    calc.press_function(FunctionKey::Const(Constant::Pi));
    assert_eq!(calc.expression(), "2*\u{03C0}");
    calc.press_equals();
    // 12 significant digits, capped at 10 fractional digits.
    assert_eq!(calc.display().result, "6.2831853072");
}

#[test]
fn overflow_surfaces_as_infinity() {
    let mut calc = Calculator::default();
    type_expression(&mut calc, "1/0");
    calc.press_equals();

    let display = calc.display();
    assert_eq!(display.result, "Infinity");
    assert!(display.error);
    assert_eq!(calc.expression(), "");
    assert_eq!(calc.history().len(), 0);
}

#[test]
fn invalid_commit_surfaces_as_error() {
    let mut calc = Calculator::default();
    calc.press_function(FunctionKey::Func(FunctionName::Sin));
    assert_eq!(calc.expression(), "sin(");
    calc.press_equals();

    let display = calc.display();
    assert_eq!(display.result, "Error");
    assert!(display.error);

    // Fresh input leaves the error display behind.
    calc.press_digit('7');
    let display = calc.display();
    assert!(!display.error);
    assert_eq!(display.result, "7");
}

#[test]
fn sign_toggle_on_expression_and_answer() {
    let mut calc = Calculator::default();
    calc.press_digit('5');
    calc.press_sign();
    assert_eq!(calc.expression(), "-5");
    calc.press_sign();
    assert_eq!(calc.expression(), "5");

    calc.press_equals();
    calc.press_sign();
    assert_eq!(calc.last_answer(), Some(-5.0));
    assert_eq!(calc.display().result, "-5");
}

#[test]
fn clear_resets_everything_but_history() {
    let mut calc = Calculator::default();
    type_expression(&mut calc, "2+2");
    calc.press_equals();
    calc.press_clear();

    let display = calc.display();
    assert_eq!(display.expression, "");
    assert_eq!(display.result, "0");
    assert_eq!(calc.last_answer(), None);
    assert_eq!(calc.history().len(), 1);
}

#[test]
fn recall_restores_answer_without_re_recording() {
    let mut calc = Calculator::default();
    type_expression(&mut calc, "617*2");
    calc.press_equals();
    assert_eq!(calc.display().result, "1,234");
    type_expression(&mut calc, "9");
    calc.press_equals();
    assert_eq!(calc.history().len(), 2);

    calc.recall(1);
    assert_eq!(calc.history().len(), 2);
    assert_eq!(calc.last_answer(), Some(1234.0));
    let display = calc.display();
    assert_eq!(display.result, "1,234");
    assert_eq!(display.expression, "617\u{00D7}2 =");

    // The recalled answer chains like a committed one.
    calc.press_operator(BinaryOp::Add);
    assert_eq!(calc.expression(), "1234+");
}

#[test]
fn recall_out_of_range_is_a_no_op() {
    let mut calc = Calculator::default();
    type_expression(&mut calc, "2+2");
    calc.press_equals();
    let before = calc.display();
    calc.recall(7);
    assert_eq!(calc.display(), before);
}

#[test]
fn expression_display_uses_glyphs() {
    let mut calc = Calculator::default();
    type_expression(&mut calc, "2*3/4-5");
    assert_eq!(
        calc.display().expression,
        "2\u{00D7}3\u{00F7}4\u{2212}5"
    );
}
