//! Move history types, prompt rendering and UCI token matching.
//!
//! Everything here is pure: no I/O, no configuration lookups.

pub mod moves;
pub mod prompt;
pub mod uci;

pub use moves::{Move, MoveHistory};
pub use uci::MoveValidation;
