//! Deterministic random number generation for match replay.
//!
//! Every shuffle and coin flip in a match draws from one seeded stream, so
//! the same seed plus the same action sequence reproduces the same match.
//! The RNG state serializes in O(1) (seed + stream position), letting a host
//! snapshot a match mid-round and resume it with identical future draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG carried inside `MatchState`.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
///
/// ```
/// use bistro_duel::core::MatchRng;
///
/// let mut a = MatchRng::new(7);
/// let mut b = MatchRng::new(7);
/// assert_eq!(a.flip(), b.flip());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "MatchRngState", into = "MatchRngState")]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Fisher–Yates shuffle of a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Flip a fair coin.
    pub fn flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MatchRngState {
        MatchRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MatchRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// values have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

impl From<MatchRngState> for MatchRng {
    fn from(state: MatchRngState) -> Self {
        MatchRng::from_state(&state)
    }
}

impl From<MatchRng> for MatchRngState {
    fn from(rng: MatchRng) -> Self {
        rng.state()
    }
}
