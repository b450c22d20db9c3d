//! Line-oriented front end for a calculator session.
//!
//! Expression characters typed on a line are fed through the session one
//! keystroke at a time, so the editing rules (operator collapse, smart
//! parenthesis, segment decimal points) behave exactly as they do behind a
//! keypad. Word commands cover the keys that have no single character:
//! scientific functions, history, and the currency converter.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tally_session::{
    BinaryOp, Calculator, Constant, Conversion, Converter, FunctionKey, FunctionName,
    HistoryEntry, SessionSettings,
};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Interactive scientific calculator with history and fixed-rate currency conversion."
)]
pub struct Args {
    /// History entries kept before the oldest is evicted.
    #[arg(long, default_value_t = 50)]
    pub history_capacity: usize,

    /// Print history as JSON instead of aligned text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> Result<()> {
    let settings = SessionSettings {
        history_capacity: args.history_capacity,
        ..SessionSettings::default()
    };
    let mut calc = Calculator::new(settings);
    let mut converter = Converter::new(settings.locale);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }
        handle_line(line, &mut calc, &mut converter, args.json, &mut out)?;
    }
    Ok(())
}

fn handle_line(
    line: &str,
    calc: &mut Calculator,
    converter: &mut Converter,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or("");
    match head {
        "help" => print_help(out)?,
        "clear" => {
            calc.press_clear();
            print_display(calc, out)?;
        }
        "del" => {
            calc.press_backspace();
            print_display(calc, out)?;
        }
        "sign" => {
            calc.press_sign();
            print_display(calc, out)?;
        }
        "paren" => {
            calc.press_paren();
            print_display(calc, out)?;
        }
        "sq" => {
            calc.press_function(FunctionKey::Square);
            print_display(calc, out)?;
        }
        "inv" => {
            calc.press_function(FunctionKey::Reciprocal);
            print_display(calc, out)?;
        }
        "pi" => {
            calc.press_function(FunctionKey::Const(Constant::Pi));
            print_display(calc, out)?;
        }
        "e" => {
            calc.press_function(FunctionKey::Const(Constant::Euler));
            print_display(calc, out)?;
        }
        "fact" => {
            calc.press_function(FunctionKey::Factorial);
            print_display(calc, out)?;
        }
        "history" => match words.next() {
            Some("clear") => {
                calc.clear_history();
                writeln!(out, "history cleared")?;
            }
            _ => print_history(calc, json, out)?,
        },
        "recall" => match words.next().and_then(|w| w.parse::<usize>().ok()) {
            Some(index) => {
                calc.recall(index);
                print_display(calc, out)?;
            }
            None => writeln!(out, "usage: recall <index>")?,
        },
        "pairs" => {
            for pair in converter.pairs() {
                writeln!(
                    out,
                    "{:<8}  {} -> {}  (rate {})",
                    pair.id, pair.from_name, pair.to_name, pair.rate
                )?;
            }
        }
        "pair" => match words.next() {
            Some(id) if converter.select_pair(id) => print_conversion(converter, out)?,
            Some(id) => writeln!(out, "unknown pair {id}")?,
            None => writeln!(out, "usage: pair <id>")?,
        },
        "amount" => match words.next() {
            Some(value) => {
                converter.clear();
                for ch in value.chars() {
                    converter.push_digit(ch);
                }
                print_conversion(converter, out)?;
            }
            None => writeln!(out, "usage: amount <number>")?,
        },
        "cdel" => {
            converter.backspace();
            print_conversion(converter, out)?;
        }
        "cclear" => {
            converter.clear();
            print_conversion(converter, out)?;
        }
        "swap" => {
            converter.swap();
            print_conversion(converter, out)?;
        }
        "convert" => print_conversion(converter, out)?,
        _ => {
            if let Some(func) = FunctionName::from_ident(head) {
                calc.press_function(FunctionKey::Func(func));
            } else {
                feed_keys(line, calc);
            }
            print_display(calc, out)?;
        }
    }
    Ok(())
}

/// Feed raw expression characters through the session as keystrokes.
fn feed_keys(text: &str, calc: &mut Calculator) {
    for ch in text.chars() {
        match ch {
            '0'..='9' | '.' => calc.press_digit(ch),
            '+' => calc.press_operator(BinaryOp::Add),
            '-' => calc.press_operator(BinaryOp::Sub),
            '*' => calc.press_operator(BinaryOp::Mul),
            '/' => calc.press_operator(BinaryOp::Div),
            '(' | ')' => calc.press_paren(),
            '!' => calc.press_function(FunctionKey::Factorial),
            '\u{03C0}' => calc.press_function(FunctionKey::Const(Constant::Pi)),
            '=' => calc.press_equals(),
            ' ' => {}
            other => log::warn!("ignoring key {other:?}"),
        }
    }
}

fn print_display(calc: &Calculator, out: &mut impl Write) -> Result<()> {
    let display = calc.display();
    if !display.expression.is_empty() {
        writeln!(out, "  {}", display.expression)?;
    }
    writeln!(out, "= {}", display.result)?;
    Ok(())
}

fn print_history(calc: &Calculator, json: bool, out: &mut impl Write) -> Result<()> {
    let entries: Vec<&HistoryEntry> = calc.history().iter().collect();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }
    if entries.is_empty() {
        writeln!(out, "history is empty")?;
        return Ok(());
    }
    for (index, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{index:>3}  [{}]  {} = {}",
            entry.time, entry.expression, entry.result
        )?;
    }
    Ok(())
}

fn print_conversion(converter: &Converter, out: &mut impl Write) -> Result<()> {
    let (from_label, to_label) = converter.labels();
    match converter.convert() {
        Conversion::Converted { from_text, to_text } => {
            writeln!(out, "{from_label} -> {to_label}: {from_text} = {to_text}")?;
        }
        Conversion::Invalid => writeln!(out, "Invalid")?,
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "type an expression (digits, + - * / ( ) ! \u{03C0} =) or a command:\n\
         \x20 sin cos tan log ln sqrt abs   append a function\n\
         \x20 sq inv pi e fact              square / reciprocal / constants / factorial\n\
         \x20 paren del sign clear =        editing keys\n\
         \x20 history [clear], recall <n>   history ledger\n\
         \x20 pairs, pair <id>, amount <n>, cdel, cclear, swap, convert\n\
         \x20 quit"
    )?;
    Ok(())
}
