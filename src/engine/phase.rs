//! Match phase progression.

use serde::{Deserialize, Serialize};

/// The match state machine's phases.
///
/// ```text
/// Lobby -> DeckBuilding -> RestaurantSelection -> Mulligan -> CoinFlip
///       -> RoundStart -> Turn -> FaceOff -> RoundEnd
///                 ^                             |
///                 +--- (no seat at 5 stars) ----+
/// ```
///
/// Reaching 5 stars at face-off resolution jumps straight to `GameEnd`.
/// `Lobby` and `DeckBuilding` belong to the host; `MatchState::initialize`
/// enters at `RestaurantSelection`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Lobby,
    DeckBuilding,
    RestaurantSelection,
    Mulligan,
    CoinFlip,
    RoundStart,
    Turn,
    FaceOff,
    RoundEnd,
    GameEnd,
}

impl Phase {
    /// Whether the match has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::GameEnd)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
