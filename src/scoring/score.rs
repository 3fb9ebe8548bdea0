//! Board scoring.
//!
//! `calculate_score` is a pure function of its input and the catalog: no
//! hidden accumulators, no side effects, safe to call speculatively for
//! previews. The face-off calls it once per seat.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{
    Archetype, Card, CardId, Catalog, ChefAbility, ChefCard, ConditionPredicate, EventCard,
    MealCard, RestaurantCard, StaffAbility, StaffCard, SupportAbility, SupportCard,
};
use crate::engine::BoardState;
use crate::error::{CatalogIntegrity, MatchError};

use super::synergy::calculate_archetype_bonus;

/// Stats a restaurant condition is evaluated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub attached_meal_count: u32,
    pub staff_count: u32,
    /// Distinct card categories with at least one card in play.
    pub types_played_count: u32,
    pub current_round: u32,
    pub opponent_score: i64,
}

impl StatsSnapshot {
    /// Snapshot a board plus the round context.
    #[must_use]
    pub fn of(board: &BoardState, current_round: u32, opponent_score: i64) -> Self {
        let categories = [
            !board.attached_meals.is_empty(),
            !board.played_staff.is_empty(),
            !board.played_support.is_empty(),
            !board.played_events.is_empty(),
        ];
        Self {
            attached_meal_count: board.attached_meals.len() as u32,
            staff_count: board.played_staff.len() as u32,
            types_played_count: categories.iter().filter(|&&c| c).count() as u32,
            current_round,
            opponent_score,
        }
    }
}

fn condition_met(predicate: ConditionPredicate, stats: &StatsSnapshot) -> bool {
    match predicate {
        ConditionPredicate::AttachedMealCountAtLeast(n) => stats.attached_meal_count >= n,
        ConditionPredicate::StaffCountAtLeast(n) => stats.staff_count >= n,
        ConditionPredicate::TypesPlayedCountAtLeast(n) => stats.types_played_count >= n,
        ConditionPredicate::RoundAtLeast(n) => stats.current_round >= n,
        ConditionPredicate::OpponentScoreAtLeast(n) => stats.opponent_score >= n,
    }
}

/// One itemized line in a score breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub source: String,
    pub amount: i64,
}

/// The eight scoring terms, their itemization, and the total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_score: i64,
    pub meal_points: i64,
    pub staff_modifiers: i64,
    pub support_modifiers: i64,
    pub restaurant_bonus: i64,
    pub chef_bonus: i64,
    pub event_modifiers: i64,
    pub archetype_bonus: i64,
    pub total_score: i64,
    pub breakdown: Vec<ScoreLine>,
}

/// Everything needed to score one seat's board.
#[derive(Clone, Copy, Debug)]
pub struct ScoreInput<'a> {
    pub board: &'a BoardState,
    pub chef_id: CardId,
    pub restaurant_id: CardId,
    /// The opponent's played events this round; those targeting this seat
    /// land here rather than on the opponent's own breakdown.
    pub opponent_events: &'a Vector<CardId>,
    pub current_round: u32,
    /// Opponent score for `OpponentScoreAtLeast` predicates. Previews may
    /// pass 0; the face-off passes the opponent's pre-bonus score.
    pub opponent_score: i64,
}

fn resolve(catalog: &Catalog, id: CardId) -> Result<&Card, MatchError> {
    catalog
        .get(id)
        .ok_or_else(|| CatalogIntegrity::new(id).into())
}

fn resolve_chef(catalog: &Catalog, id: CardId) -> Result<&ChefCard, MatchError> {
    resolve(catalog, id)?
        .as_chef()
        .ok_or_else(|| CatalogIntegrity::new(id).into())
}

fn resolve_restaurant(catalog: &Catalog, id: CardId) -> Result<&RestaurantCard, MatchError> {
    resolve(catalog, id)?
        .as_restaurant()
        .ok_or_else(|| CatalogIntegrity::new(id).into())
}

fn resolve_meal(catalog: &Catalog, id: CardId) -> Result<&MealCard, MatchError> {
    resolve(catalog, id)?
        .as_meal()
        .ok_or_else(|| CatalogIntegrity::new(id).into())
}

fn resolve_staff(catalog: &Catalog, id: CardId) -> Result<&StaffCard, MatchError> {
    resolve(catalog, id)?
        .as_staff()
        .ok_or_else(|| CatalogIntegrity::new(id).into())
}

fn resolve_support(catalog: &Catalog, id: CardId) -> Result<&SupportCard, MatchError> {
    resolve(catalog, id)?
        .as_support()
        .ok_or_else(|| CatalogIntegrity::new(id).into())
}

fn resolve_event(catalog: &Catalog, id: CardId) -> Result<&EventCard, MatchError> {
    resolve(catalog, id)?
        .as_event()
        .ok_or_else(|| CatalogIntegrity::new(id).into())
}

/// Score one board.
///
/// Fails only on a `CatalogIntegrity` problem (an ID that does not resolve
/// to the kind its list implies). Deterministic: identical inputs produce
/// identical breakdowns.
pub fn calculate_score(
    input: &ScoreInput<'_>,
    catalog: &Catalog,
) -> Result<ScoreBreakdown, MatchError> {
    let board = input.board;
    let chef = resolve_chef(catalog, input.chef_id)?;
    let restaurant = resolve_restaurant(catalog, input.restaurant_id)?;
    let meal_count = board.attached_meals.len() as i64;

    let mut out = ScoreBreakdown::default();
    let line = |breakdown: &mut Vec<ScoreLine>, source: &str, amount: i64| {
        breakdown.push(ScoreLine {
            source: source.to_string(),
            amount,
        });
    };

    out.base_score = restaurant.base_score;
    line(&mut out.breakdown, &restaurant.info.name, out.base_score);

    out.chef_bonus = chef.base_value;
    if chef.ability == Some(ChefAbility::Perfectionist) {
        out.chef_bonus += 2 * meal_count;
    }
    line(&mut out.breakdown, &chef.info.name, out.chef_bonus);

    let mut meal_values = Vec::with_capacity(board.attached_meals.len());
    for &id in &board.attached_meals {
        let meal = resolve_meal(catalog, id)?;
        meal_values.push(meal.value);
        out.meal_points += meal.value;
        line(&mut out.breakdown, &meal.info.name, meal.value);
    }

    for &id in &board.played_staff {
        let staff = resolve_staff(catalog, id)?;
        let amount = match staff.ability {
            StaffAbility::Service => staff.effective_modifier() * meal_count,
            StaffAbility::Support | StaffAbility::Pairing | StaffAbility::Cocktails => {
                staff.effective_modifier()
            }
        };
        out.staff_modifiers += amount;
        line(&mut out.breakdown, &staff.info.name, amount);
    }

    // "Special" doubles the best meal once; further copies do not compound.
    let mut special_applied = false;
    for &id in &board.played_support {
        let support = resolve_support(catalog, id)?;
        let amount = match support.ability {
            SupportAbility::Quality => 2 * meal_count,
            SupportAbility::Upgrade => 3,
            SupportAbility::Vip => 1,
            SupportAbility::Special => {
                if special_applied {
                    0
                } else {
                    special_applied = true;
                    meal_values.iter().copied().max().unwrap_or(0)
                }
            }
        };
        out.support_modifiers += amount;
        line(&mut out.breakdown, &support.info.name, amount);
    }

    for &id in &board.played_events {
        let event = resolve_event(catalog, id)?;
        if event.target.affects_own() {
            let amount = event.effect.modifier();
            out.event_modifiers += amount;
            line(&mut out.breakdown, &event.info.name, amount);
        }
    }
    for &id in input.opponent_events {
        let event = resolve_event(catalog, id)?;
        if event.target.affects_opponent() {
            let amount = event.effect.modifier();
            out.event_modifiers += amount;
            line(&mut out.breakdown, &event.info.name, amount);
        }
    }

    if let Some(condition) = restaurant.condition {
        let stats = StatsSnapshot::of(board, input.current_round, input.opponent_score);
        if condition_met(condition.predicate, &stats) {
            out.restaurant_bonus = condition.bonus;
            line(&mut out.breakdown, "restaurant ability", condition.bonus);
        }
    }

    let chef_archetypes: Vec<Archetype> = std::iter::once(chef.primary_archetype)
        .chain(chef.secondary_archetype)
        .collect();
    let mut card_archetypes = Vec::new();
    for &id in &board.attached_meals {
        if let Some(tag) = resolve_meal(catalog, id)?.archetype {
            card_archetypes.push(tag);
        }
    }
    for &id in &board.played_staff {
        if let Some(tag) = resolve_staff(catalog, id)?.archetype {
            card_archetypes.push(tag);
        }
    }
    out.archetype_bonus = calculate_archetype_bonus(
        &chef_archetypes,
        restaurant.archetype,
        &card_archetypes,
        catalog,
    );
    if out.archetype_bonus != 0 {
        line(&mut out.breakdown, "archetype synergy", out.archetype_bonus);
    }

    out.total_score = out.base_score
        + out.meal_points
        + out.staff_modifiers
        + out.support_modifiers
        + out.restaurant_bonus
        + out.chef_bonus
        + out.event_modifiers
        + out.archetype_bonus;

    Ok(out)
}
