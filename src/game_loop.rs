use std::io::Write;

use tracing::{debug, info};

use crate::error::{GameError, Result};
use crate::input::{wants_to_continue, Command};
use crate::moves::{Move, Outcome};
use crate::opponent::Opponent;
use crate::prompt::Prompter;

pub const WELCOME: &str = "Welcome to Rock, Paper, Scissors!";
pub const MOVE_PROMPT: &str = "Enter rock, paper, or scissors (or 'quit' to exit): ";
pub const AGAIN_PROMPT: &str = "Play again? [Y/n]: ";
pub const EMPTY_INPUT: &str = "Please enter a choice.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const FAREWELL: &str = "Thanks for playing. Goodbye!";
pub const INTERRUPTED: &str = "\nInterrupted. Goodbye!";

/// The reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Player typed a quit keyword
    Quit,
    /// Player answered no to "Play again?"
    Declined,
    /// Ctrl+C at a prompt
    Interrupted,
    /// Input ran out
    InputClosed,
}

/// Round counts for this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub exit_reason: ExitReason,
    pub tally: Tally,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingMove,
    AwaitingContinue,
    Terminated(ExitReason),
}

/// Drives the prompt, resolve, report cycle until the player leaves
pub struct GameLoop<P: Prompter, O: Opponent, W: Write> {
    prompter: P,
    opponent: O,
    out: W,
    tally: Tally,
}

impl<P: Prompter, O: Opponent, W: Write> GameLoop<P, O, W> {
    /// Create a new GameLoop writing its messages to `out`
    pub fn new(prompter: P, opponent: O, out: W) -> Self {
        Self {
            prompter,
            opponent,
            out,
            tally: Tally::default(),
        }
    }

    /// Get the tally so far
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Consume the loop and hand back the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Play until the player quits, declines, interrupts or runs out of input.
    ///
    /// Interruption and end of input are normal endings here; only I/O
    /// failures come back as errors.
    pub async fn run(&mut self) -> Result<GameResult> {
        self.say(WELCOME)?;

        let exit_reason = match self.play().await {
            Ok(reason) => reason,
            Err(GameError::Interrupted) => {
                self.say(INTERRUPTED)?;
                ExitReason::Interrupted
            }
            Err(GameError::InputClosed) => {
                self.say(INTERRUPTED)?;
                ExitReason::InputClosed
            }
            Err(e) => return Err(e),
        };

        info!(
            "Game over ({:?}) after {} round(s): {} won, {} lost, {} tied",
            exit_reason,
            self.tally.rounds(),
            self.tally.wins,
            self.tally.losses,
            self.tally.ties
        );

        Ok(GameResult {
            exit_reason,
            tally: self.tally,
        })
    }

    async fn play(&mut self) -> Result<ExitReason> {
        let mut state = State::AwaitingMove;

        loop {
            state = match state {
                State::AwaitingMove => self.await_move().await?,
                State::AwaitingContinue => self.await_continue().await?,
                State::Terminated(reason) => return Ok(reason),
            };
        }
    }

    async fn await_move(&mut self) -> Result<State> {
        let raw = self.prompter.prompt(MOVE_PROMPT).await?;

        match Command::parse(&raw) {
            Command::Empty => {
                self.say(EMPTY_INPUT)?;
                Ok(State::AwaitingMove)
            }
            Command::Invalid(text) => {
                debug!("Rejected choice: {:?}", text);
                self.say(INVALID_CHOICE)?;
                Ok(State::AwaitingMove)
            }
            Command::Quit => {
                self.say(FAREWELL)?;
                Ok(State::Terminated(ExitReason::Quit))
            }
            Command::Play(player) => {
                self.play_round(player)?;
                Ok(State::AwaitingContinue)
            }
        }
    }

    async fn await_continue(&mut self) -> Result<State> {
        let raw = self.prompter.prompt(AGAIN_PROMPT).await?;

        if wants_to_continue(&raw) {
            Ok(State::AwaitingMove)
        } else {
            self.say(FAREWELL)?;
            Ok(State::Terminated(ExitReason::Declined))
        }
    }

    fn play_round(&mut self, player: Move) -> Result<()> {
        let computer = self.opponent.choose();
        let outcome = Outcome::resolve(player, computer);
        self.tally.record(outcome);

        debug!(
            "Round {}: {} vs {} -> {:?}",
            self.tally.rounds(),
            player,
            computer,
            outcome
        );

        self.say(&format!("You chose: {}. Computer chose: {}.", player, computer))?;
        self.say(outcome.message())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line).map_err(GameError::OutputError)?;
        self.out.flush().map_err(GameError::OutputError)
    }
}
