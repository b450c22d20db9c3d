#![forbid(unsafe_code)]

//! Calculator session state: the expression/preview controller, the bounded
//! history ledger, and the fixed-rate currency converter.
//!
//! Everything here is an explicit state struct mutated by token-event
//! methods; there is no global state and no UI dependency, so the whole
//! surface is unit-testable. Rendering is delegated to [`tally_format`] and
//! evaluation to [`tally_engine`].

pub mod currency;
pub mod history;
pub mod session;
pub mod settings;

pub use currency::{Conversion, Converter, CurrencyPair, DEFAULT_PAIRS};
pub use history::{HistoryEntry, HistoryLedger};
pub use session::{Calculator, DisplayState};
pub use settings::SessionSettings;

// Re-exported so front ends only need this crate to drive a session.
pub use tally_engine::{BinaryOp, Constant, FunctionKey, FunctionName};
pub use tally_format::Locale;
