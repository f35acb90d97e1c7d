//! Where the computer's moves come from.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::moves::Move;

/// Trait for move sources (random in production, scripted in tests)
pub trait Opponent {
    /// Pick the computer's move for the next round
    fn choose(&mut self) -> Move;
}

/// Draws each move uniformly at random, ignoring the player's history
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: ChaCha8Rng,
}

impl RandomOpponent {
    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = RandomOpponent::seeded(7);
        let mut b = RandomOpponent::seeded(7);
        let left: Vec<Move> = (0..32).map(|_| a.choose()).collect();
        let right: Vec<Move> = (0..32).map(|_| b.choose()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_draws_every_move() {
        let mut opponent = RandomOpponent::seeded(42);
        let drawn: Vec<Move> = (0..300).map(|_| opponent.choose()).collect();
        for m in Move::ALL {
            assert!(drawn.contains(&m), "{m} never drawn");
        }
    }
}
