//! smartpocket-voice: turns transcribed or typed utterances into
//! transaction candidates and goal deposit commands

pub mod amount;
pub mod category_rules;
pub mod deposit_parser;
pub mod intake;
pub mod transaction_parser;

pub use category_rules::{Classification, classify, glyph_for, glyph_for_key};
pub use deposit_parser::{DepositOutcome, try_parse};
pub use intake::{Interpretation, interpret};
pub use transaction_parser::{ParsedTransaction, parse};
