//! Runtime seat state: piles, hand, board, and per-round bookkeeping.
//!
//! All collections are `im` persistent structures so a `MatchState` clone
//! is O(1) and every reducer can build its successor without touching the
//! input snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::SeatId;
use crate::deck::RESTAURANT_OPTIONS;

/// Maximum meals attached to a restaurant at once.
pub const MAX_ATTACHED_MEALS: usize = 3;

/// Cards drawn into the opening hand.
pub const OPENING_HAND_SIZE: usize = 5;

/// A seat's in-play cards.
///
/// `attached_meals` persist across rounds (equipment); the other three
/// lists clear at the start of every round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub attached_meals: Vector<CardId>,
    pub played_staff: Vector<CardId>,
    pub played_support: Vector<CardId>,
    pub played_events: Vector<CardId>,
}

impl BoardState {
    /// Empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether all meal slots are occupied.
    #[must_use]
    pub fn meal_slots_full(&self) -> bool {
        self.attached_meals.len() >= MAX_ATTACHED_MEALS
    }

    /// Clear the round-scoped lists. Attached meals persist.
    pub fn clear_round(&mut self) {
        self.played_staff.clear();
        self.played_support.clear();
        self.played_events.clear();
    }
}

/// One match participant's runtime state.
///
/// Created once at match initialization from a validated `PlayerDeck`,
/// then evolved exclusively by the match reducers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub name: String,

    /// Ordered draw pile; front is the next draw.
    pub draw_pile: Vector<CardId>,

    /// Hand as a multiset (duplicates of one ID are legal).
    pub hand: Vector<CardId>,

    pub chef_card_id: CardId,

    /// The deck's three restaurants, shuffled at initialization.
    /// The first two are the positional selection options.
    pub restaurant_options: SmallVec<[CardId; RESTAURANT_OPTIONS]>,

    /// Chosen during `RESTAURANT_SELECTION`; hidden from the opponent
    /// until both mulligans resolve.
    pub restaurant_card_id: Option<CardId>,
    pub restaurant_revealed: bool,

    pub board: BoardState,

    /// Legendary stars, 0..=5, never decreasing.
    pub stars: u8,

    /// Influence left to spend this round.
    pub influence: i64,
    pub max_influence: i64,

    pub ready: bool,
    pub turn_complete: bool,
    pub event_played_this_round: bool,

    /// Staff/support/event plays this round, in play order. Drives the
    /// face-off reveal order and `reorder_played_card`.
    pub play_order: Vector<CardId>,

    /// Cards played since the seat's turn began; the undo window for
    /// `remove_card_from_play`.
    pub played_this_turn: Vector<CardId>,

    /// Attached meals displaced by a replacing meal play this turn, keyed
    /// by the play that displaced them. Undoing that play re-attaches the
    /// displaced meal. Cleared with `played_this_turn`.
    pub replaced_meals: Vector<(CardId, CardId)>,
}

impl Seat {
    /// Create a fresh seat from finalized deck contents.
    ///
    /// The draw pile arrives pre-shuffled; nothing is drawn yet.
    #[must_use]
    pub fn new(
        id: SeatId,
        name: impl Into<String>,
        draw_pile: Vector<CardId>,
        chef_card_id: CardId,
        restaurant_options: SmallVec<[CardId; RESTAURANT_OPTIONS]>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            draw_pile,
            hand: Vector::new(),
            chef_card_id,
            restaurant_options,
            restaurant_card_id: None,
            restaurant_revealed: false,
            board: BoardState::new(),
            stars: 0,
            influence: 0,
            max_influence: 0,
            ready: false,
            turn_complete: false,
            event_played_this_round: false,
            play_order: Vector::new(),
            played_this_turn: Vector::new(),
            replaced_meals: Vector::new(),
        }
    }

    /// Draw one card from the pile into the hand.
    ///
    /// Returns the drawn ID, or `None` on an empty pile (drawing from an
    /// empty pile is a no-op, not an error).
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.draw_pile.pop_front()?;
        self.hand.push_back(card);
        Some(card)
    }

    /// Draw up to `n` cards.
    pub fn draw_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.draw().is_none() {
                break;
            }
        }
    }

    /// Whether the hand holds at least one copy of `id`.
    #[must_use]
    pub fn holds(&self, id: CardId) -> bool {
        self.hand.contains(&id)
    }

    /// Remove one copy of `id` from the hand.
    ///
    /// Returns false if no copy is held.
    pub fn remove_from_hand(&mut self, id: CardId) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == id) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }
}
