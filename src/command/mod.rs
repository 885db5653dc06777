//! Driver pipeline
//!
//! Terminal prompts feed the scripted duel:
//! stdin -> prompt (read_line / parse_u32) -> DuelRunner -> winner line

pub mod executor;
pub mod prompt;

pub use executor::{winner_line, DuelOutcome, DuelRunner, NO_WINNER_LINE};
pub use prompt::{parse_u32, read_line};
