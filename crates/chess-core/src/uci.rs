//! UCI token matching for model replies.
//!
//! The model is asked for a bare move like `e2e4` / `e7e8q` or `PASS`,
//! but nothing forces it to comply. [`MoveValidation`] decides how much of
//! that is checked before a reply is handed back to the caller.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Literal the model returns when it has no move.
pub const PASS: &str = "PASS";

/// Whole-string UCI move.
static UCI_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-h][1-8][a-h][1-8][qrbn]?$").unwrap());

/// UCI move anywhere in free text, as its own word.
static UCI_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[a-h][1-8][a-h][1-8][qrbn]?\b").unwrap());

/// True if `s` is exactly one UCI move or `PASS`.
pub fn is_move_token(s: &str) -> bool {
    s == PASS || UCI_TOKEN.is_match(s)
}

/// First UCI-shaped word in `text`, e.g. "e2e4" out of "I'll play e2e4.".
pub fn find_uci_move(text: &str) -> Option<&str> {
    UCI_WORD.find(text).map(|m| m.as_str())
}

/// How a trimmed model reply is checked before being relayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveValidation {
    /// Relay whatever non-empty text came back.
    #[default]
    Off,
    /// Only relay a reply that is exactly a UCI move or `PASS`.
    Strict,
    /// Like `Strict`, but fall back to the first UCI move inside a chatty reply.
    Extract,
}

impl MoveValidation {
    /// The move to relay, or `None` when the reply is rejected.
    pub fn accept(self, reply: &str) -> Option<&str> {
        match self {
            MoveValidation::Off => Some(reply),
            MoveValidation::Strict => is_move_token(reply).then_some(reply),
            MoveValidation::Extract => {
                if is_move_token(reply) {
                    Some(reply)
                } else {
                    find_uci_move(reply)
                }
            }
        }
    }
}

impl FromStr for MoveValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" | "" => Ok(MoveValidation::Off),
            "strict" => Ok(MoveValidation::Strict),
            "extract" => Ok(MoveValidation::Extract),
            other => Err(format!("unknown move validation mode: {other}")),
        }
    }
}

impl fmt::Display for MoveValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveValidation::Off => "off",
            MoveValidation::Strict => "strict",
            MoveValidation::Extract => "extract",
        };
        f.write_str(name)
    }
}
