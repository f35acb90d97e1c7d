//! rps: rock-paper-scissors against a randomized computer opponent.
//!
//! The game loop reads moves through a [`Prompter`] and draws the computer's
//! moves from an [`Opponent`], so both can be scripted in tests.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod moves;
pub mod opponent;
pub mod prompt;

pub use config::Config;
pub use error::{GameError, Result};
pub use game_loop::{ExitReason, GameLoop, GameResult, Tally};
pub use input::Command;
pub use moves::{Move, Outcome};
pub use opponent::{Opponent, RandomOpponent};
pub use prompt::{Prompter, StdinPrompter};
