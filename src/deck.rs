//! Deck construction types and legality validation.
//!
//! Validation is a pure report: it never blocks anything itself. The deck
//! builder decides whether to let a player finalize, and
//! `MatchState::initialize` refuses to seat an illegal deck.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId, Catalog};

/// Required main deck size.
pub const MAIN_DECK_SIZE: usize = 30;

/// Maximum copies of one card ID in a main deck.
pub const MAX_COPIES: usize = 3;

/// Number of restaurant options a deck carries into a match.
pub const RESTAURANT_OPTIONS: usize = 3;

/// A constructed deck, immutable once finalized.
///
/// `main_deck` holds exactly [`MAIN_DECK_SIZE`] Meal/Staff/Support/Event
/// ids (each at most [`MAX_COPIES`] times), plus one chef and three
/// distinct restaurant options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDeck {
    pub main_deck: Vec<CardId>,
    pub chef_card_id: CardId,
    pub restaurant_card_ids: SmallVec<[CardId; RESTAURANT_OPTIONS]>,
}

impl PlayerDeck {
    /// Create a deck. Legality is checked separately by
    /// [`validate_player_deck`].
    #[must_use]
    pub fn new(
        main_deck: Vec<CardId>,
        chef_card_id: CardId,
        restaurant_card_ids: impl IntoIterator<Item = CardId>,
    ) -> Self {
        Self {
            main_deck,
            chef_card_id,
            restaurant_card_ids: restaurant_card_ids.into_iter().collect(),
        }
    }
}

/// Advisory validation report.
///
/// `is_valid` is true exactly when `errors` is empty. Errors are
/// human-readable strings for the deck builder UI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl DeckReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a main deck against the catalog.
///
/// Fails if the deck is not exactly [`MAIN_DECK_SIZE`] cards, any id
/// appears more than [`MAX_COPIES`] times, any id is unresolvable, or any
/// id resolves to a Chef or Restaurant card.
#[must_use]
pub fn validate_main_deck(main_deck: &[CardId], catalog: &Catalog) -> DeckReport {
    let mut errors = Vec::new();

    if main_deck.len() != MAIN_DECK_SIZE {
        errors.push(format!(
            "main deck must contain exactly {MAIN_DECK_SIZE} cards, found {}",
            main_deck.len()
        ));
    }

    let mut counts: Vec<(CardId, usize)> = Vec::new();
    for &id in main_deck {
        match counts.iter_mut().find(|(c, _)| *c == id) {
            Some((_, n)) => *n += 1,
            None => counts.push((id, 1)),
        }
    }
    for (id, count) in counts {
        if count > MAX_COPIES {
            errors.push(format!(
                "{id} appears {count} times, at most {MAX_COPIES} copies allowed"
            ));
        }
    }

    for &id in main_deck {
        match catalog.get(id) {
            None => errors.push(format!("{id} is not in the catalog")),
            Some(Card::Chef(c)) => errors.push(format!(
                "chef card \"{}\" does not belong in a main deck",
                c.info.name
            )),
            Some(Card::Restaurant(c)) => errors.push(format!(
                "restaurant card \"{}\" does not belong in a main deck",
                c.info.name
            )),
            Some(_) => {}
        }
    }

    DeckReport::from_errors(errors)
}

/// Validate a complete player deck: main deck rules plus chef and
/// restaurant requirements.
#[must_use]
pub fn validate_player_deck(deck: &PlayerDeck, catalog: &Catalog) -> DeckReport {
    let mut errors = validate_main_deck(&deck.main_deck, catalog).errors;

    match catalog.get(deck.chef_card_id) {
        None => errors.push(format!("chef {} is not in the catalog", deck.chef_card_id)),
        Some(Card::Chef(_)) => {}
        Some(card) => errors.push(format!(
            "{} is a {:?} card, the chef slot requires a Chef",
            deck.chef_card_id,
            card.kind()
        )),
    }

    if deck.restaurant_card_ids.len() != RESTAURANT_OPTIONS {
        errors.push(format!(
            "deck must carry exactly {RESTAURANT_OPTIONS} restaurants, found {}",
            deck.restaurant_card_ids.len()
        ));
    }

    for (i, &id) in deck.restaurant_card_ids.iter().enumerate() {
        match catalog.get(id) {
            None => errors.push(format!("restaurant {id} is not in the catalog")),
            Some(Card::Restaurant(_)) => {}
            Some(card) => errors.push(format!(
                "{id} is a {:?} card, restaurant slots require Restaurants",
                card.kind()
            )),
        }
        if deck.restaurant_card_ids[..i].contains(&id) {
            errors.push(format!("restaurant {id} is listed more than once"));
        }
    }

    DeckReport::from_errors(errors)
}
