//! Core primitives: seat identity and deterministic randomness.

mod rng;
mod seat;

pub use rng::{MatchRng, MatchRngState};
pub use seat::{SeatId, SeatMap};
