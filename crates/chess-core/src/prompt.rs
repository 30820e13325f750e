//! Prompt text sent to the chat-completion model.

use crate::moves::MoveHistory;

/// Instructions for the model. Fixed so the same history always yields the same request.
pub const SYSTEM_PROMPT: &str = "You are a chess move generator. You MUST respond with exactly one move in UCI format (e.g. e2e4, g1f3, e7e8q for promotion) and nothing else. Do NOT include commentary, explanation, JSON, or any extra text. If you cannot find a legal move, respond with PASS. Use standard algebraic coordinates: a1..h8. Assume position FEN provided is to move. Use reasonable chess knowledge but do not invent illegal moves. Avoid castling if unclear.";

const HISTORY_HEADER: &str = "Move history: ";
const ONE_MOVE_ONLY: &str = "Respond with one UCI move only.";

/// Build the user message: the numbered history followed by the one-move reminder.
pub fn user_prompt(history: &MoveHistory) -> String {
    format!("{HISTORY_HEADER}{}\n{ONE_MOVE_ONLY}", history.render())
}
