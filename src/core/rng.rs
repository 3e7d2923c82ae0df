//! Deterministic random number generation and the opponent-hand seam.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Uniform**: Opponent draws are independent and unbiased (≈1/3 each)
//! - **Injectable**: `HandSource` lets tests script exact opponent hands
//!
//! The engine never calls an ambient RNG; all randomness flows through a
//! `HandSource` owned by the engine, so any sequence of rounds can be
//! reproduced from a seed or forced from a script.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::hand::Hand;

/// Deterministic RNG for opponent draws.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Same seed, same sequence of hands.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rngs::OsRng.gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

/// Source of opponent hands, one independent draw per round.
///
/// Production code uses [`RandomHandSource`]; tests inject
/// [`ScriptedHands`] to force outcomes.
pub trait HandSource {
    /// Draw the opponent's next hand.
    fn draw(&mut self) -> Hand;
}

/// Uniform-random hand source with no memory of prior draws.
#[derive(Clone, Debug)]
pub struct RandomHandSource {
    rng: GameRng,
}

impl RandomHandSource {
    /// Create a source drawing from a seeded [`GameRng`].
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }
}

impl HandSource for RandomHandSource {
    fn draw(&mut self) -> Hand {
        Hand::ALL[self.rng.gen_range(0..Hand::ALL.len())]
    }
}

/// Hand source replaying a fixed sequence, cycling when exhausted.
///
/// ## Example
///
/// ```
/// use rps_engine::core::{Hand, HandSource, ScriptedHands};
///
/// let mut hands = ScriptedHands::new(vec![Hand::Rock, Hand::Paper]);
/// assert_eq!(hands.draw(), Hand::Rock);
/// assert_eq!(hands.draw(), Hand::Paper);
/// assert_eq!(hands.draw(), Hand::Rock);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedHands {
    script: Vec<Hand>,
    position: usize,
}

impl ScriptedHands {
    /// Create a scripted source from a non-empty sequence.
    ///
    /// # Panics
    ///
    /// Panics if the script is empty.
    #[must_use]
    pub fn new(script: Vec<Hand>) -> Self {
        assert!(!script.is_empty(), "Script must contain at least one hand");
        Self {
            script,
            position: 0,
        }
    }
}

impl HandSource for ScriptedHands {
    fn draw(&mut self) -> Hand {
        let hand = self.script[self.position % self.script.len()];
        self.position += 1;
        hand
    }
}
