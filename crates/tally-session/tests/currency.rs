use pretty_assertions::assert_eq;
use tally_session::{Conversion, Converter};

fn converted(conversion: Conversion) -> (String, String) {
    match conversion {
        Conversion::Converted { from_text, to_text } => (from_text, to_text),
        Conversion::Invalid => panic!("conversion reported invalid input"),
    }
}

#[test]
fn forward_conversion_multiplies_by_the_rate() {
    let mut converter = Converter::default();
    assert!(converter.select_pair("usd-ngn"));
    converter.push_digit('1');
    converter.push_digit('0');

    let (from_text, to_text) = converted(converter.convert());
    assert_eq!(from_text, "$ 10.00");
    assert_eq!(to_text, "\u{20A6} 15,800.00");
}

#[test]
fn swap_divides_instead() {
    let mut converter = Converter::default();
    assert!(converter.select_pair("usd-ngn"));
    converter.swap();
    for ch in "1580".chars() {
        converter.push_digit(ch);
    }

    let (from_text, to_text) = converted(converter.convert());
    assert_eq!(from_text, "\u{20A6} 1,580.00");
    assert_eq!(to_text, "$ 1.00");
}

#[test]
fn swap_flips_the_unit_labels() {
    let mut converter = Converter::default();
    assert!(converter.select_pair("eur-ngn"));
    assert_eq!(converter.labels(), ("Euro", "Nigerian Naira"));
    converter.swap();
    assert_eq!(converter.labels(), ("Nigerian Naira", "Euro"));
}

#[test]
fn input_editing_keeps_a_canonical_digit_string() {
    let mut converter = Converter::default();
    assert_eq!(converter.input(), "0");

    converter.push_digit('5');
    assert_eq!(converter.input(), "5");

    assert!(converter.push_digit('.'));
    assert!(!converter.push_digit('.'));
    converter.push_digit('2');
    assert_eq!(converter.input(), "5.2");

    converter.backspace();
    converter.backspace();
    converter.backspace();
    assert_eq!(converter.input(), "0");
}

#[test]
fn input_is_capped_at_twelve_digits() {
    let mut converter = Converter::default();
    for _ in 0..15 {
        converter.push_digit('9');
    }
    assert_eq!(converter.input().len(), 12);

    // The decimal point does not count against the cap.
    let mut converter = Converter::default();
    converter.push_digit('1');
    converter.push_digit('.');
    for _ in 0..15 {
        converter.push_digit('9');
    }
    assert_eq!(converter.input(), "1.99999999999");
}

#[test]
fn selecting_a_pair_resets_direction_and_input() {
    let mut converter = Converter::default();
    converter.push_digit('7');
    converter.swap();

    assert!(converter.select_pair("gbp-ngn"));
    assert_eq!(converter.input(), "0");
    assert!(!converter.swapped());
    assert_eq!(converter.current_pair().id, "gbp-ngn");
}

#[test]
fn unknown_pair_ids_are_ignored() {
    let mut converter = Converter::default();
    converter.push_digit('7');
    assert!(!converter.select_pair("usd-xyz"));
    assert_eq!(converter.input(), "7");
    assert_eq!(converter.current_pair().id, "usd-ngn");
}

#[test]
fn zero_converts_to_zero() {
    let converter = Converter::default();
    let (from_text, to_text) = converted(converter.convert());
    assert_eq!(from_text, "$ 0.00");
    assert_eq!(to_text, "\u{20A6} 0.00");
}
