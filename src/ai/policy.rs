//! Heuristic AI opponent.
//!
//! The policy is pure: it reads a match snapshot and produces the
//! successor state by driving the same reducers a human seat would, so an
//! AI seat can never take an action the rules would reject. Any pacing
//! ("thinking" delays) is the host's concern.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardKind, Catalog, EventEffect, EventTarget};
use crate::core::SeatId;
use crate::engine::MatchState;
use crate::error::{CatalogIntegrity, MatchError};

/// AI difficulty tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiDifficulty {
    /// Fixed play ordering: meals by value, then staff, support, event.
    Standard,
    /// Standard ordering, but events are re-prioritized by star standing.
    Hard,
}

/// Most cards the AI plays in one turn.
const MAX_PLAYS_PER_TURN: usize = 4;

/// Most meals the AI plays in one turn.
const MAX_MEAL_PLAYS: usize = 3;

/// Most cards the AI sends back in a mulligan.
const MULLIGAN_CAP: usize = 3;

fn resolve<'a>(catalog: &'a Catalog, id: CardId) -> Result<&'a Card, MatchError> {
    catalog
        .get(id)
        .ok_or_else(|| CatalogIntegrity::new(id).into())
}

/// Choose which opening-hand cards to send back.
///
/// Discards low-value meals (value 2 or less) and self-targeted events,
/// capped at three. The cap is this policy's own taste; the engine places
/// no limit on mulligan size.
pub fn decide_mulligan(hand: &[CardId], catalog: &Catalog) -> Result<Vec<CardId>, MatchError> {
    let mut discards = Vec::new();
    for &id in hand {
        if discards.len() >= MULLIGAN_CAP {
            break;
        }
        match resolve(catalog, id)? {
            Card::Meal(meal) if meal.value <= 2 => discards.push(id),
            Card::Event(event) if event.target == EventTarget::Own => discards.push(id),
            _ => {}
        }
    }
    Ok(discards)
}

/// Hand cards of one kind, with the catalog entry alongside.
fn hand_of_kind<'a>(
    state: &MatchState,
    seat: SeatId,
    kind: CardKind,
    catalog: &'a Catalog,
) -> Result<Vec<(CardId, &'a Card)>, MatchError> {
    let mut cards = Vec::new();
    for &id in &state.seats[seat].hand {
        let card = resolve(catalog, id)?;
        if card.kind() == kind {
            cards.push((id, card));
        }
    }
    Ok(cards)
}

fn affordable(state: &MatchState, seat: SeatId, card: &Card) -> bool {
    card.influence_cost() <= state.seats[seat].influence
}

/// Play out the seat's whole turn and complete it.
///
/// Up to four plays: affordable meals by descending value (at most three,
/// stopping when meal slots fill), then one staff, one support, and one
/// event. Affordability is rechecked before every play since influence is
/// spent sequentially. `Hard` re-prioritizes the event pick by star
/// standing: behind prefers star-removal cards, ahead or even prefers
/// star-gain cards, and without either tag in hand the base preference
/// (opponent-targeted first) applies.
pub fn take_turn(
    state: &MatchState,
    seat: SeatId,
    catalog: &Catalog,
    difficulty: AiDifficulty,
) -> Result<MatchState, MatchError> {
    let mut current = state.clone();
    let mut plays = 0usize;

    // Meals: best value first, deterministic tie-break on id.
    let mut meals = hand_of_kind(&current, seat, CardKind::Meal, catalog)?;
    meals.sort_by_key(|(id, card)| {
        let value = card.as_meal().map_or(0, |m| m.value);
        (std::cmp::Reverse(value), *id)
    });
    let mut meals_played = 0usize;
    for (id, _) in meals {
        if plays >= MAX_PLAYS_PER_TURN || meals_played >= MAX_MEAL_PLAYS {
            break;
        }
        if current.seats[seat].board.meal_slots_full() {
            break;
        }
        let card = resolve(catalog, id)?;
        if !affordable(&current, seat, card) {
            continue;
        }
        current = current.play_card(seat, id, None, catalog)?;
        plays += 1;
        meals_played += 1;
    }

    for kind in [CardKind::Staff, CardKind::Support] {
        if plays >= MAX_PLAYS_PER_TURN {
            break;
        }
        let candidates = hand_of_kind(&current, seat, kind, catalog)?;
        if let Some((id, _)) = candidates
            .into_iter()
            .find(|&(_, card)| affordable(&current, seat, card))
        {
            current = current.play_card(seat, id, None, catalog)?;
            plays += 1;
        }
    }

    if plays < MAX_PLAYS_PER_TURN && !current.seats[seat].event_played_this_round {
        let events = hand_of_kind(&current, seat, CardKind::Event, catalog)?;
        let affordable_events: Vec<_> = events
            .into_iter()
            .filter(|&(_, card)| affordable(&current, seat, card))
            .collect();
        if let Some(id) = pick_event(&current, seat, &affordable_events, difficulty) {
            current = current.play_card(seat, id, None, catalog)?;
        }
    }

    current.complete_turn(seat)
}

fn pick_event(
    state: &MatchState,
    seat: SeatId,
    candidates: &[(CardId, &Card)],
    difficulty: AiDifficulty,
) -> Option<CardId> {
    if candidates.is_empty() {
        return None;
    }

    if difficulty == AiDifficulty::Hard {
        let own = state.seats[seat].stars;
        let theirs = state.seats[seat.opponent()].stars;
        let preferred = if own < theirs {
            EventEffect::RemoveStar
        } else {
            EventEffect::GainStar
        };
        if let Some(&(id, _)) = candidates
            .iter()
            .find(|(_, card)| card.as_event().map(|e| e.effect) == Some(preferred))
        {
            return Some(id);
        }
    }

    // Base preference: an event aimed at the opponent beats the rest.
    candidates
        .iter()
        .find(|(_, card)| {
            card.as_event()
                .is_some_and(|e| e.target == EventTarget::Opponent)
        })
        .or_else(|| candidates.first())
        .map(|&(id, _)| id)
}
