//! Heuristic AI decision policy.

mod policy;

pub use policy::{decide_mulligan, take_turn, AiDifficulty};
