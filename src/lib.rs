//! # bistro-duel
//!
//! Deterministic match engine for a two-seat, round-based restaurant
//! trading-card duel: players field a chef, a restaurant, and a
//! thirty-card main deck, then compete round by round for legendary
//! stars. First seat to five stars wins.
//!
//! ## Design Principles
//!
//! 1. **Pure reducers**: every operation maps an immutable snapshot plus
//!    one action to a new snapshot or a structured failure. Rejected
//!    actions cannot leave partial mutations behind.
//!
//! 2. **Deterministic and replayable**: all randomness flows from one
//!    seeded ChaCha8 stream stored in the state; the same seed and action
//!    sequence reproduces the same match, and serialized snapshots resume
//!    with identical future draws.
//!
//! 3. **Injected catalog**: card data is a value handed to the engine at
//!    match initialization, never ambient global state.
//!
//! 4. **Typed dispatch**: card kinds are a tagged union, ability and
//!    effect tags are enums compared by equality, and restaurant bonus
//!    conditions are structured predicates. No description-text matching.
//!
//! ## Modules
//!
//! - `core`: seat identity, per-seat maps, deterministic RNG
//! - `cards`: card definitions and the injected catalog
//! - `deck`: deck legality validation
//! - `engine`: phase machine, seats, and all match reducers
//! - `scoring`: score breakdowns and archetype synergy
//! - `ai`: heuristic opponent policy
//! - `error`: deck, illegal-action, and catalog-integrity failures

pub mod ai;
pub mod cards;
pub mod core;
pub mod deck;
pub mod engine;
pub mod error;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{MatchRng, MatchRngState, SeatId, SeatMap};

pub use crate::cards::{
    Archetype, Card, CardId, CardInfo, CardKind, Catalog, ChefAbility, ChefCard,
    ConditionPredicate, EventCard, EventEffect, EventTarget, MealCard, MealEffect,
    RestaurantCard, RestaurantCondition, StaffAbility, StaffCard, SupportAbility, SupportCard,
    SupportDuration,
};

pub use crate::deck::{
    validate_main_deck, validate_player_deck, DeckReport, PlayerDeck, MAIN_DECK_SIZE, MAX_COPIES,
    RESTAURANT_OPTIONS,
};

pub use crate::engine::{
    BoardState, FaceoffState, MatchState, Phase, RestaurantChoice, Seat, SeatConfig,
    MAX_ATTACHED_MEALS, OPENING_HAND_SIZE, STARS_TO_WIN,
};

pub use crate::scoring::{
    calculate_archetype_bonus, calculate_score, ScoreBreakdown, ScoreInput, ScoreLine,
    StatsSnapshot,
};

pub use crate::ai::{decide_mulligan, take_turn, AiDifficulty};

pub use crate::error::{CatalogIntegrity, DeckValidation, IllegalAction, MatchError};
