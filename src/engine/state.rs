//! The match state machine.
//!
//! Every operation is a pure reducer: it borrows the current state, and
//! either returns the successor state or a `MatchError` with the input
//! untouched. Hosts must serialize submissions per match (one actor or
//! mutex per room); the engine itself never blocks, spawns, or sleeps.
//! Pacing concerns such as reveal delays or AI "thinking" time belong to
//! the host.

use im::HashSet as ImHashSet;
use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Catalog};
use crate::core::{MatchRng, SeatId, SeatMap};
use crate::deck::{validate_player_deck, PlayerDeck};
use crate::error::{CatalogIntegrity, DeckValidation, IllegalAction, MatchError};
use crate::scoring::{calculate_score, ScoreBreakdown, ScoreInput};

use super::phase::Phase;
use super::seat::{Seat, OPENING_HAND_SIZE};

/// Stars required to win the match.
pub const STARS_TO_WIN: u8 = 5;

/// Setup for one seat: display name plus a finalized deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub deck: PlayerDeck,
}

impl SeatConfig {
    /// Create a seat config.
    #[must_use]
    pub fn new(name: impl Into<String>, deck: PlayerDeck) -> Self {
        Self {
            name: name.into(),
            deck,
        }
    }
}

/// Positional restaurant choice: the shuffled options are presented as a
/// top card and a bottom card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestaurantChoice {
    Top,
    Bottom,
}

/// Staged face-off reveal bookkeeping.
///
/// Frozen when the second seat completes its turn: `reveal_order` is each
/// seat's staff/support/event plays in play order. The host steps
/// `current_reveal_index` with `reveal_next_card_pair`, then calls
/// `perform_face_off` for scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceoffState {
    pub reveal_order: SeatMap<Vector<CardId>>,
    pub current_reveal_index: usize,
    pub revealed_cards: SeatMap<ImHashSet<CardId>>,
    /// Both breakdowns from the most recent `perform_face_off`.
    pub scores: Option<SeatMap<ScoreBreakdown>>,
}

impl FaceoffState {
    fn empty() -> Self {
        Self {
            reveal_order: SeatMap::new(|_| Vector::new()),
            current_reveal_index: 0,
            revealed_cards: SeatMap::new(|_| ImHashSet::new()),
            scores: None,
        }
    }
}

/// Complete match state: one immutable snapshot per accepted action.
///
/// Collections are `im` persistent structures, so cloning a snapshot is
/// O(1) and the host can keep every historical state for replay.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: Phase,
    pub seats: SeatMap<Seat>,
    /// Round counter; 0 before the first `start_round`.
    pub current_round: u32,
    pub first_seat: Option<SeatId>,
    /// Set if and only if `phase == GameEnd`.
    pub winner: Option<SeatId>,
    pub coin_flip_result: Option<SeatId>,
    pub faceoff: FaceoffState,
    rng: MatchRng,
}

impl MatchState {
    /// Initialize a match from two seat configs.
    ///
    /// Validates both decks against the catalog, shuffles each main deck
    /// and restaurant-option order with the seeded RNG, draws the opening
    /// hands, and enters `RestaurantSelection`.
    pub fn initialize(
        configs: SeatMap<SeatConfig>,
        catalog: &Catalog,
        seed: u64,
    ) -> Result<Self, MatchError> {
        for (seat_id, config) in configs.iter() {
            let report = validate_player_deck(&config.deck, catalog);
            if !report.is_valid {
                return Err(DeckValidation {
                    seat: seat_id,
                    errors: report.errors,
                }
                .into());
            }
        }

        let mut rng = MatchRng::new(seed);
        let seats = configs.map(|seat_id, config| {
            let mut pile: Vec<CardId> = config.deck.main_deck.clone();
            rng.shuffle(&mut pile);

            let mut options: Vec<CardId> = config.deck.restaurant_card_ids.to_vec();
            rng.shuffle(&mut options);

            let mut seat = Seat::new(
                seat_id,
                config.name.clone(),
                pile.into_iter().collect(),
                config.deck.chef_card_id,
                options.into_iter().collect(),
            );
            seat.draw_n(OPENING_HAND_SIZE);
            seat
        });

        Ok(Self {
            phase: Phase::RestaurantSelection,
            seats,
            current_round: 0,
            first_seat: None,
            winner: None,
            coin_flip_result: None,
            faceoff: FaceoffState::empty(),
            rng,
        })
    }

    fn require_phase(&self, expected: Phase) -> Result<(), MatchError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(IllegalAction::WrongPhase {
                expected,
                found: self.phase,
            }
            .into())
        }
    }

    fn resolve<'a>(&self, catalog: &'a Catalog, id: CardId) -> Result<&'a Card, MatchError> {
        catalog
            .get(id)
            .ok_or_else(|| CatalogIntegrity::new(id).into())
    }

    /// Record a seat's positional restaurant choice.
    ///
    /// When both seats have chosen, advances to `Mulligan`. The choices
    /// stay hidden from the opponent until both mulligans resolve.
    pub fn select_restaurant(
        &self,
        seat: SeatId,
        choice: RestaurantChoice,
    ) -> Result<Self, MatchError> {
        self.require_phase(Phase::RestaurantSelection)?;
        if self.seats[seat].restaurant_card_id.is_some() {
            return Err(IllegalAction::RestaurantAlreadyChosen(seat).into());
        }

        let mut next = self.clone();
        let options = &next.seats[seat].restaurant_options;
        let chosen = match choice {
            RestaurantChoice::Top => options[0],
            RestaurantChoice::Bottom => options[1],
        };
        next.seats[seat].restaurant_card_id = Some(chosen);

        if SeatId::both().all(|s| next.seats[s].restaurant_card_id.is_some()) {
            next.phase = Phase::Mulligan;
        }
        Ok(next)
    }

    /// Shuffle the given hand cards back into the pile and redraw the same
    /// number, then mark the seat ready.
    ///
    /// An empty `discards` slice is a "keep": the seat just readies up.
    /// When both seats are ready, both restaurants are revealed and the
    /// match advances to `CoinFlip`. No discard-count cap is enforced
    /// here; the AI applies its own.
    pub fn perform_mulligan(&self, seat: SeatId, discards: &[CardId]) -> Result<Self, MatchError> {
        self.require_phase(Phase::Mulligan)?;
        if self.seats[seat].ready {
            return Err(IllegalAction::AlreadyReady(seat).into());
        }

        let mut next = self.clone();
        for &id in discards {
            if !next.seats[seat].remove_from_hand(id) {
                return Err(IllegalAction::CardNotInHand(id).into());
            }
            next.seats[seat].draw_pile.push_back(id);
        }

        let mut pile: Vec<CardId> = next.seats[seat].draw_pile.iter().copied().collect();
        next.rng.shuffle(&mut pile);
        next.seats[seat].draw_pile = pile.into_iter().collect();
        next.seats[seat].draw_n(discards.len());
        next.seats[seat].ready = true;

        if SeatId::both().all(|s| next.seats[s].ready) {
            for s in SeatId::both() {
                next.seats[s].restaurant_revealed = true;
            }
            next.phase = Phase::CoinFlip;
        }
        Ok(next)
    }

    /// Flip the match coin to pick the first seat and enter `RoundStart`.
    pub fn flip_coin(&self) -> Result<Self, MatchError> {
        self.require_phase(Phase::CoinFlip)?;

        let mut next = self.clone();
        let winner = if next.rng.flip() {
            SeatId::FIRST
        } else {
            SeatId::SECOND
        };
        next.coin_flip_result = Some(winner);
        next.first_seat = Some(winner);
        next.phase = Phase::RoundStart;
        Ok(next)
    }

    /// Apply an externally decided coin-flip result.
    pub fn set_first_seat(&self, seat: SeatId) -> Result<Self, MatchError> {
        self.require_phase(Phase::CoinFlip)?;

        let mut next = self.clone();
        next.coin_flip_result = Some(seat);
        next.first_seat = Some(seat);
        next.phase = Phase::RoundStart;
        Ok(next)
    }

    /// Begin the next round: clear round-scoped plays, recompute each
    /// seat's influence budget from its chef and stars, draw one card per
    /// seat, and enter `Turn`.
    pub fn start_round(&self, catalog: &Catalog) -> Result<Self, MatchError> {
        self.require_phase(Phase::RoundStart)?;

        let mut next = self.clone();
        next.current_round += 1;
        next.faceoff = FaceoffState::empty();

        for seat_id in SeatId::both() {
            let chef_id = next.seats[seat_id].chef_card_id;
            let chef = self
                .resolve(catalog, chef_id)?
                .as_chef()
                .ok_or(CatalogIntegrity::new(chef_id))?;
            let stars = i64::from(next.seats[seat_id].stars);
            let budget = chef.starting_influence + chef.star_bonus_influence * stars;

            let seat = &mut next.seats[seat_id];
            seat.board.clear_round();
            seat.play_order.clear();
            seat.played_this_turn.clear();
            seat.replaced_meals.clear();
            seat.turn_complete = false;
            seat.event_played_this_round = false;
            seat.max_influence = budget;
            seat.influence = budget;
            seat.draw();
        }

        next.phase = Phase::Turn;
        Ok(next)
    }

    /// Play a card from hand to the seat's board.
    ///
    /// Rejections (wrong phase, turn already complete, card not in hand,
    /// influence shortfall, full meal slots without a discard target,
    /// second event in a round) leave the state untouched. Meals attach
    /// permanently; staff, support, and events join this round's play
    /// order. `meal_to_discard` names the attached meal to replace when
    /// all slots are occupied.
    pub fn play_card(
        &self,
        seat: SeatId,
        card_id: CardId,
        meal_to_discard: Option<CardId>,
        catalog: &Catalog,
    ) -> Result<Self, MatchError> {
        self.require_phase(Phase::Turn)?;
        if self.seats[seat].turn_complete {
            return Err(IllegalAction::TurnAlreadyComplete(seat).into());
        }
        if !self.seats[seat].holds(card_id) {
            return Err(IllegalAction::CardNotInHand(card_id).into());
        }

        let card = self.resolve(catalog, card_id)?;
        let cost = card.influence_cost();
        let available = self.seats[seat].influence;
        if cost > available {
            return Err(IllegalAction::InsufficientInfluence { cost, available }.into());
        }

        let mut next = self.clone();
        match card {
            Card::Meal(_) => {
                if next.seats[seat].board.meal_slots_full() {
                    let discard =
                        meal_to_discard.ok_or(IllegalAction::MealSlotsFull)?;
                    let meals = &mut next.seats[seat].board.attached_meals;
                    let pos = meals
                        .iter()
                        .position(|&m| m == discard)
                        .ok_or(IllegalAction::DiscardTargetNotAttached(discard))?;
                    meals.remove(pos);
                    next.seats[seat].replaced_meals.push_back((card_id, discard));
                }
                next.seats[seat].board.attached_meals.push_back(card_id);
            }
            Card::Staff(_) => {
                next.seats[seat].board.played_staff.push_back(card_id);
                next.seats[seat].play_order.push_back(card_id);
            }
            Card::Support(_) => {
                next.seats[seat].board.played_support.push_back(card_id);
                next.seats[seat].play_order.push_back(card_id);
            }
            Card::Event(_) => {
                if next.seats[seat].event_played_this_round {
                    return Err(IllegalAction::EventAlreadyPlayed.into());
                }
                next.seats[seat].board.played_events.push_back(card_id);
                next.seats[seat].play_order.push_back(card_id);
                next.seats[seat].event_played_this_round = true;
            }
            // A chef or restaurant in a hand means the deck validator was
            // bypassed; treat as corrupt setup data.
            Card::Chef(_) | Card::Restaurant(_) => {
                return Err(CatalogIntegrity::new(card_id).into());
            }
        }

        let seat_state = &mut next.seats[seat];
        seat_state.remove_from_hand(card_id);
        seat_state.influence -= cost;
        seat_state.played_this_turn.push_back(card_id);
        Ok(next)
    }

    /// Undo a play made this turn: the card returns to hand and its
    /// influence cost is refunded. A meal play that replaced an attached
    /// meal re-attaches the replaced meal. Only the acting seat, only
    /// before it completes its turn.
    pub fn remove_card_from_play(
        &self,
        seat: SeatId,
        card_id: CardId,
        catalog: &Catalog,
    ) -> Result<Self, MatchError> {
        self.require_phase(Phase::Turn)?;
        if self.seats[seat].turn_complete {
            return Err(IllegalAction::TurnAlreadyComplete(seat).into());
        }
        if !self.seats[seat].played_this_turn.contains(&card_id) {
            return Err(IllegalAction::CardNotPlayedThisTurn(card_id).into());
        }

        let card = self.resolve(catalog, card_id)?;
        let mut next = self.clone();
        {
            let seat_state = &mut next.seats[seat];
            let board = &mut seat_state.board;
            let removed = match card {
                Card::Meal(_) => remove_last(&mut board.attached_meals, card_id),
                Card::Staff(_) => remove_last(&mut board.played_staff, card_id),
                Card::Support(_) => remove_last(&mut board.played_support, card_id),
                Card::Event(_) => remove_last(&mut board.played_events, card_id),
                Card::Chef(_) | Card::Restaurant(_) => false,
            };
            if !removed {
                return Err(CatalogIntegrity::new(card_id).into());
            }
            remove_last(&mut seat_state.play_order, card_id);
            remove_last(&mut seat_state.played_this_turn, card_id);
            if matches!(card, Card::Event(_)) {
                seat_state.event_played_this_round = false;
            }
            if matches!(card, Card::Meal(_)) {
                if let Some(pos) = seat_state
                    .replaced_meals
                    .iter()
                    .rposition(|&(play, _)| play == card_id)
                {
                    let (_, displaced) = seat_state.replaced_meals.remove(pos);
                    seat_state.board.attached_meals.push_back(displaced);
                }
            }
            seat_state.hand.push_back(card_id);
            seat_state.influence += card.influence_cost();
        }
        Ok(next)
    }

    /// Move a card within the seat's play order (controls reveal order).
    /// Only the acting seat, only before it completes its turn.
    pub fn reorder_played_card(
        &self,
        seat: SeatId,
        from: usize,
        to: usize,
    ) -> Result<Self, MatchError> {
        self.require_phase(Phase::Turn)?;
        if self.seats[seat].turn_complete {
            return Err(IllegalAction::TurnAlreadyComplete(seat).into());
        }
        let len = self.seats[seat].play_order.len();
        if from >= len || to >= len {
            return Err(IllegalAction::ReorderOutOfRange { from, to, len }.into());
        }

        let mut next = self.clone();
        let order = &mut next.seats[seat].play_order;
        let card = order.remove(from);
        order.insert(to, card);
        Ok(next)
    }

    /// Mark the seat's turn complete, closing its undo window. When both
    /// seats are complete the match enters `FaceOff` and the reveal order
    /// freezes.
    pub fn complete_turn(&self, seat: SeatId) -> Result<Self, MatchError> {
        self.require_phase(Phase::Turn)?;
        if self.seats[seat].turn_complete {
            return Err(IllegalAction::TurnAlreadyComplete(seat).into());
        }

        let mut next = self.clone();
        next.seats[seat].turn_complete = true;
        next.seats[seat].played_this_turn.clear();
        next.seats[seat].replaced_meals.clear();

        if SeatId::both().all(|s| next.seats[s].turn_complete) {
            next.phase = Phase::FaceOff;
            next.faceoff = FaceoffState {
                reveal_order: next.seats.map(|_, s| s.play_order.clone()),
                current_reveal_index: 0,
                revealed_cards: SeatMap::new(|_| ImHashSet::new()),
                scores: None,
            };
        }
        Ok(next)
    }

    /// Reveal each seat's next played card to the opponent.
    ///
    /// Once the reveal index reaches the longer of the two play orders,
    /// further calls are no-ops. Pacing between calls is the host's job.
    pub fn reveal_next_card_pair(&self) -> Result<Self, MatchError> {
        self.require_phase(Phase::FaceOff)?;

        let limit = SeatId::both()
            .map(|s| self.faceoff.reveal_order[s].len())
            .max()
            .unwrap_or(0);
        if self.faceoff.current_reveal_index >= limit {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        let index = next.faceoff.current_reveal_index;
        for s in SeatId::both() {
            if let Some(&card) = next.faceoff.reveal_order[s].get(index) {
                next.faceoff.revealed_cards[s].insert(card);
            }
        }
        next.faceoff.current_reveal_index = index + 1;
        Ok(next)
    }

    /// Reveal both seats' chosen restaurants.
    ///
    /// Happens automatically when both mulligans resolve; exposed for
    /// hosts that stage the reveal themselves.
    pub fn reveal_restaurants(&self) -> Result<Self, MatchError> {
        if self.phase.is_terminal() {
            return Err(IllegalAction::MatchOver.into());
        }
        let mut next = self.clone();
        for s in SeatId::both() {
            next.seats[s].restaurant_revealed = true;
        }
        Ok(next)
    }

    /// Score both boards and resolve the round.
    ///
    /// The higher strict score wins a star; an exact tie awards nothing.
    /// A seat reaching [`STARS_TO_WIN`] sets `winner` and moves straight
    /// to `GameEnd` in the same transition; otherwise the match enters
    /// `RoundEnd`.
    pub fn perform_face_off(&self, catalog: &Catalog) -> Result<Self, MatchError> {
        self.require_phase(Phase::FaceOff)?;

        let scores = self.score_both(catalog)?;
        let mut next = self.clone();

        let first = scores[SeatId::FIRST].total_score;
        let second = scores[SeatId::SECOND].total_score;
        let round_winner = match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(SeatId::FIRST),
            std::cmp::Ordering::Less => Some(SeatId::SECOND),
            std::cmp::Ordering::Equal => None,
        };

        if let Some(winner) = round_winner {
            let stars = &mut next.seats[winner].stars;
            *stars = (*stars + 1).min(STARS_TO_WIN);
        }
        next.faceoff.scores = Some(scores);

        match SeatId::both().find(|&s| next.seats[s].stars >= STARS_TO_WIN) {
            Some(champion) => {
                next.winner = Some(champion);
                next.phase = Phase::GameEnd;
            }
            None => next.phase = Phase::RoundEnd,
        }
        Ok(next)
    }

    /// Leave `RoundEnd` for the next `RoundStart`.
    pub fn advance_to_next_round(&self) -> Result<Self, MatchError> {
        if self.winner.is_some() {
            return Err(IllegalAction::MatchOver.into());
        }
        self.require_phase(Phase::RoundEnd)?;

        let mut next = self.clone();
        next.phase = Phase::RoundStart;
        Ok(next)
    }

    /// Clear both seats' turn-complete flags without any other change.
    pub fn reset_turn_status(&self) -> Result<Self, MatchError> {
        if self.phase.is_terminal() {
            return Err(IllegalAction::MatchOver.into());
        }
        let mut next = self.clone();
        for s in SeatId::both() {
            next.seats[s].turn_complete = false;
        }
        Ok(next)
    }

    /// Speculatively score one seat's current board.
    ///
    /// Uses the opponent's pre-bonus score for opponent-score predicates,
    /// exactly as the face-off will.
    pub fn preview_score(
        &self,
        seat: SeatId,
        catalog: &Catalog,
    ) -> Result<ScoreBreakdown, MatchError> {
        Ok(self.score_both(catalog)?[seat].clone())
    }

    /// Score both seats.
    ///
    /// Pass one scores with `opponent_score = 0`; only the restaurant
    /// bonus can depend on the opponent's score, so `total - bonus` is the
    /// fixed pre-bonus score fed to pass two.
    fn score_both(&self, catalog: &Catalog) -> Result<SeatMap<ScoreBreakdown>, MatchError> {
        let mut provisional = SeatMap::with_value(0i64);
        for seat in SeatId::both() {
            let breakdown = calculate_score(&self.score_input(seat, 0), catalog)?;
            provisional[seat] = breakdown.total_score - breakdown.restaurant_bonus;
        }

        let first = calculate_score(
            &self.score_input(SeatId::FIRST, provisional[SeatId::SECOND]),
            catalog,
        )?;
        let second = calculate_score(
            &self.score_input(SeatId::SECOND, provisional[SeatId::FIRST]),
            catalog,
        )?;
        Ok(SeatMap::from_pair(first, second))
    }

    fn score_input<'a>(&'a self, seat: SeatId, opponent_score: i64) -> ScoreInput<'a> {
        // Restaurant defaults to the first option if somehow unselected;
        // initialize/select_restaurant make that unreachable in practice.
        let seat_state = &self.seats[seat];
        ScoreInput {
            board: &seat_state.board,
            chef_id: seat_state.chef_card_id,
            restaurant_id: seat_state
                .restaurant_card_id
                .unwrap_or(seat_state.restaurant_options[0]),
            opponent_events: self.opponent_events(seat),
            current_round: self.current_round,
            opponent_score,
        }
    }

    fn opponent_events(&self, seat: SeatId) -> &Vector<CardId> {
        &self.seats[seat.opponent()].board.played_events
    }
}

fn remove_last(list: &mut Vector<CardId>, id: CardId) -> bool {
    if let Some(pos) = list.iter().rposition(|&c| c == id) {
        list.remove(pos);
        true
    } else {
        false
    }
}
