use serde::{Deserialize, Serialize};

/// A single played move as sent by the client.
/// Squares are passed through untouched, so "z9" renders as "z9".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub capture: bool,
}

impl Move {
    pub fn new(from: impl Into<String>, to: impl Into<String>, capture: bool) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            capture,
        }
    }
}

/// Moves in play order. Absent or `null` deserializes to an empty history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub moves: Vec<Move>,
}

impl MoveHistory {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Numbered lines, one per move: "1. e2-e4".
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.moves
            .iter()
            .enumerate()
            .map(|(i, m)| format!("{}. {}-{}", i + 1, m.from, m.to))
    }

    /// All lines joined with '\n'. Empty history renders as "".
    pub fn render(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}

impl From<Vec<Move>> for MoveHistory {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Move>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Move>>::deserialize(deserializer)?.unwrap_or_default())
}
