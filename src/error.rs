//! Failure kinds for match setup and play.
//!
//! Three kinds, mirroring who is at fault:
//! - [`DeckValidation`]: a deck failed legality checks at finalization time.
//! - [`IllegalAction`]: a well-formed but currently impermissible action.
//!   The only kind expected during normal play; rejection never mutates
//!   state (reducers take `&self`).
//! - [`CatalogIntegrity`]: a card ID the catalog cannot resolve. A setup or
//!   data bug, surfaced loudly instead of tolerated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;
use crate::core::SeatId;
use crate::engine::Phase;

/// A deck failed legality validation.
///
/// Carries the full advisory error list from the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("deck for {seat} is not legal: {}", errors.join("; "))]
pub struct DeckValidation {
    pub seat: SeatId,
    pub errors: Vec<String>,
}

/// An action referenced a card ID the catalog cannot resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{id} cannot be resolved by the catalog")]
pub struct CatalogIntegrity {
    pub id: CardId,
}

impl CatalogIntegrity {
    /// Create an integrity failure for `id`.
    #[must_use]
    pub const fn new(id: CardId) -> Self {
        Self { id }
    }
}

/// An action submitted when the rules do not permit it.
///
/// Safe to retry or ignore; the match state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum IllegalAction {
    #[error("action requires phase {expected:?} but match is in {found:?}")]
    WrongPhase { expected: Phase, found: Phase },

    #[error("{0} has already completed its turn")]
    TurnAlreadyComplete(SeatId),

    #[error("{0} is not in hand")]
    CardNotInHand(CardId),

    #[error("not enough influence: need {cost}, have {available}")]
    InsufficientInfluence { cost: i64, available: i64 },

    #[error("all meal slots are occupied and no meal was chosen to discard")]
    MealSlotsFull,

    #[error("{0} is not an attached meal, cannot discard it")]
    DiscardTargetNotAttached(CardId),

    #[error("an event was already played this round")]
    EventAlreadyPlayed,

    #[error("{0} has already chosen a restaurant")]
    RestaurantAlreadyChosen(SeatId),

    #[error("{0} is already ready")]
    AlreadyReady(SeatId),

    #[error("{0} was not played this turn")]
    CardNotPlayedThisTurn(CardId),

    #[error("cannot move played card from {from} to {to}: {len} cards in play order")]
    ReorderOutOfRange { from: usize, to: usize, len: usize },

    #[error("the match is already over")]
    MatchOver,
}

/// Any failure a reducer can report.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MatchError {
    #[error(transparent)]
    Deck(#[from] DeckValidation),

    #[error(transparent)]
    Illegal(#[from] IllegalAction),

    #[error(transparent)]
    Catalog(#[from] CatalogIntegrity),
}

impl MatchError {
    /// Whether this failure is the retry-safe illegal-action kind.
    #[must_use]
    pub fn is_illegal_action(&self) -> bool {
        matches!(self, MatchError::Illegal(_))
    }
}
