//! Interpretation of what the player types.

use crate::moves::Move;

/// What a line typed at the move prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a round with this move
    Play(Move),
    /// Leave the game
    Quit,
    /// Nothing was typed
    Empty,
    /// Not a move or a quit keyword; holds the normalized text
    Invalid(String),
}

impl Command {
    /// Parse a raw line from the move prompt
    pub fn parse(raw: &str) -> Self {
        let text = normalize(raw);
        if text.is_empty() {
            return Command::Empty;
        }
        if matches!(text.as_str(), "quit" | "q" | "exit") {
            return Command::Quit;
        }
        match Move::from_name(&text) {
            Some(m) => Command::Play(m),
            None => Command::Invalid(text),
        }
    }
}

/// Trim surrounding whitespace and lower-case
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Answer to "Play again?": anything except a word starting with 'n' keeps going
pub fn wants_to_continue(raw: &str) -> bool {
    !normalize(raw).starts_with('n')
}
