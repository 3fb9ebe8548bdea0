//! Scoring and archetype synergy engine.

mod score;
mod synergy;

pub use score::{calculate_score, ScoreBreakdown, ScoreInput, ScoreLine, StatsSnapshot};
pub use synergy::calculate_archetype_bonus;
