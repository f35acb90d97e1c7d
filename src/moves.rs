//! The three moves and the rule that decides a round.

use std::fmt;

/// A move in rock-paper-scissors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Every move, in draw order
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Full lowercase name, as shown to the player
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Look up a move by its full name or single-letter shorthand.
    /// Expects already-normalized text.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rock" | "r" => Some(Move::Rock),
            "paper" | "p" => Some(Move::Paper),
            "scissors" | "s" => Some(Move::Scissors),
            _ => None,
        }
    }

    /// The move this one defeats
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a round ended, from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Resolve a round between the player and the computer
    pub fn resolve(player: Move, opponent: Move) -> Self {
        if player == opponent {
            Outcome::Tie
        } else if player.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// The line printed after a round
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Tie => "It's a tie!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_moves_tie() {
        for m in Move::ALL {
            assert_eq!(Outcome::resolve(m, m), Outcome::Tie);
        }
    }

    #[test]
    fn test_winning_pairs() {
        assert_eq!(Outcome::resolve(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(Outcome::resolve(Move::Paper, Move::Rock), Outcome::Win);
        assert_eq!(Outcome::resolve(Move::Scissors, Move::Paper), Outcome::Win);
    }

    #[test]
    fn test_losing_pairs() {
        assert_eq!(Outcome::resolve(Move::Rock, Move::Paper), Outcome::Lose);
        assert_eq!(Outcome::resolve(Move::Paper, Move::Scissors), Outcome::Lose);
        assert_eq!(Outcome::resolve(Move::Scissors, Move::Rock), Outcome::Lose);
    }

    #[test]
    fn test_shorthand_and_full_names() {
        assert_eq!(Move::from_name("r"), Some(Move::Rock));
        assert_eq!(Move::from_name("paper"), Some(Move::Paper));
        assert_eq!(Move::from_name("s"), Some(Move::Scissors));
        assert_eq!(Move::from_name("lizard"), None);
    }

    #[test]
    fn test_display_uses_lowercase_name() {
        assert_eq!(Move::Scissors.to_string(), "scissors");
    }
}
