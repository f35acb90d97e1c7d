use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tracing::debug;

use crate::error::{GameError, Result};

#[cfg(unix)]
type Interrupts = tokio::signal::unix::Signal;
#[cfg(windows)]
type Interrupts = tokio::signal::windows::CtrlC;

#[cfg(unix)]
fn listen_for_interrupts() -> std::io::Result<Interrupts> {
    tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
}

#[cfg(windows)]
fn listen_for_interrupts() -> std::io::Result<Interrupts> {
    tokio::signal::windows::ctrl_c()
}

/// Trait for line sources (the terminal or a script)
#[async_trait]
pub trait Prompter: Send {
    /// Show `message` and wait for the next line.
    ///
    /// Returns `GameError::Interrupted` on Ctrl+C and `GameError::InputClosed`
    /// once the input is exhausted.
    async fn prompt(&mut self, message: &str) -> Result<String>;
}

/// Production implementation of Prompter reading stdin
pub struct StdinPrompter {
    reader: BufReader<Stdin>,
    interrupts: Interrupts,
}

impl StdinPrompter {
    /// Create a new StdinPrompter.
    ///
    /// Ctrl+C is captured from here on, so one pressed while a round is being
    /// reported ends the game at the next prompt. Must be called inside a
    /// tokio runtime.
    pub fn new() -> Result<Self> {
        Ok(Self {
            reader: BufReader::new(tokio::io::stdin()),
            interrupts: listen_for_interrupts().map_err(GameError::SignalError)?,
        })
    }
}

/// Strip the line terminator and decode, replacing invalid UTF-8
pub fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

#[async_trait]
impl Prompter for StdinPrompter {
    async fn prompt(&mut self, message: &str) -> Result<String> {
        {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(message.as_bytes())
                .map_err(GameError::OutputError)?;
            stdout.flush().map_err(GameError::OutputError)?;
        }

        let mut buf = Vec::new();

        // Race the read against Ctrl+C
        let read = tokio::select! {
            read = self.reader.read_until(b'\n', &mut buf) => read,
            _ = self.interrupts.recv() => {
                debug!("Ctrl+C received at prompt");
                return Err(GameError::Interrupted);
            }
        };

        if read.map_err(GameError::InputError)? == 0 {
            debug!("stdin reached end of file");
            return Err(GameError::InputClosed);
        }

        Ok(decode_line(&buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strips_line_endings() {
        assert_eq!(decode_line(b"rock\n"), "rock");
        assert_eq!(decode_line(b"paper\r\n"), "paper");
        assert_eq!(decode_line(b"scissors"), "scissors");
        assert_eq!(decode_line(b"\n"), "");
    }

    #[test]
    fn test_decode_replaces_invalid_utf8() {
        let line = decode_line(b"\xff\xfe\n");
        assert_eq!(line, "\u{FFFD}\u{FFFD}");
        assert!(matches!(
            crate::input::Command::parse(&line),
            crate::input::Command::Invalid(_)
        ));
    }
}
