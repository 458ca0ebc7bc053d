//! Lexer module.
//!
//! The scanner is split by responsibility:
//! - `core` - Lexer struct, pull interface and dispatch
//! - `trivia` - whitespace and `#` comment skipping
//! - `identifier` - identifier and keyword lexing
//! - `number` - numeric literal lexing
//! - `operator` - operator runs and their fixity
//! - `placeholder` - editor placeholder recovery

mod core;
mod identifier;
mod number;
mod operator;
mod placeholder;
mod trivia;

pub use self::core::Lexer;
pub use self::identifier::{is_identifier_continuation, is_identifier_start};
pub use self::number::is_number_character;
pub use self::operator::{classify_operator, is_left_bound, is_operator_character, is_right_bound};
