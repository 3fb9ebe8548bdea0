//! Scoring and synergy engine.

mod common;

use bistro_duel::{calculate_score, BoardState, CardId, MatchError, ScoreInput};
use common::{catalog, id};
use im::Vector;
use proptest::prelude::*;

fn board(meals: &[u32], staff: &[u32], support: &[u32], events: &[u32]) -> BoardState {
    let to_vec = |ids: &[u32]| -> Vector<CardId> { ids.iter().map(|&n| id(n)).collect() };
    BoardState {
        attached_meals: to_vec(meals),
        played_staff: to_vec(staff),
        played_support: to_vec(support),
        played_events: to_vec(events),
    }
}

fn input<'a>(
    board: &'a BoardState,
    chef: u32,
    restaurant: u32,
    opponent_events: &'a Vector<CardId>,
) -> ScoreInput<'a> {
    ScoreInput {
        board,
        chef_id: id(chef),
        restaurant_id: id(restaurant),
        opponent_events,
        current_round: 1,
        opponent_score: 0,
    }
}

#[test]
fn plain_board_sums_base_chef_and_meals() {
    let cat = catalog();
    let none = Vector::new();
    let board = board(&[3, 5], &[], &[], &[]);

    let score = calculate_score(&input(&board, 100, 200, &none), &cat).unwrap();

    assert_eq!(score.base_score, 10);
    assert_eq!(score.chef_bonus, 5);
    assert_eq!(score.meal_points, 8);
    assert_eq!(score.staff_modifiers, 0);
    assert_eq!(score.support_modifiers, 0);
    assert_eq!(score.restaurant_bonus, 0);
    assert_eq!(score.event_modifiers, 0);
    assert_eq!(score.archetype_bonus, 0);
    assert_eq!(score.total_score, 23);
}

#[test]
fn scoring_is_pure_and_idempotent() {
    let cat = catalog();
    let none = Vector::new();
    let board = board(&[1, 10], &[20, 21], &[31, 33], &[40]);
    let input = input(&board, 101, 201, &none);

    let first = calculate_score(&input, &cat).unwrap();
    let second = calculate_score(&input, &cat).unwrap();

    assert_eq!(first, second);
}

#[test]
fn perfectionist_chef_scores_per_meal() {
    let cat = catalog();
    let none = Vector::new();
    let board = board(&[1, 2], &[], &[], &[]);

    let score = calculate_score(&input(&board, 101, 200, &none), &cat).unwrap();

    // Base value 3 plus 2 per attached meal.
    assert_eq!(score.chef_bonus, 7);
}

#[test]
fn staff_abilities() {
    let cat = catalog();
    let none = Vector::new();
    // Service (mod 2) scales with 2 meals; Support defaults to 2;
    // Pairing defaults to 1; Cocktails declared 3.
    let board = board(&[1, 2], &[20, 21, 22, 23], &[], &[]);

    let score = calculate_score(&input(&board, 100, 200, &none), &cat).unwrap();

    assert_eq!(score.staff_modifiers, 4 + 2 + 1 + 3);
}

#[test]
fn support_abilities_and_special_applies_once() {
    let cat = catalog();
    let none = Vector::new();
    // Quality scales 2x2 meals; Upgrade 3; Vip 1; two copies of Special
    // double the best meal (value 5) only once.
    let board = board(&[3, 5], &[], &[30, 31, 32, 33, 33], &[]);

    let score = calculate_score(&input(&board, 100, 200, &none), &cat).unwrap();

    assert_eq!(score.support_modifiers, 4 + 3 + 1 + 5);
}

#[test]
fn only_self_targeted_own_events_count() {
    let cat = catalog();
    let none = Vector::new();
    // Celebrity targets own board (+5); Scathing Review targets the
    // opponent and must not touch its player's own breakdown.
    let board = board(&[], &[], &[], &[40, 41]);

    let score = calculate_score(&input(&board, 100, 200, &none), &cat).unwrap();

    assert_eq!(score.event_modifiers, 5);
}

#[test]
fn opponent_events_land_on_this_board() {
    let cat = catalog();
    let incoming: Vector<CardId> = [id(41), id(43), id(40)].into_iter().collect();
    let board = board(&[], &[], &[], &[]);

    let score = calculate_score(&input(&board, 100, 200, &incoming), &cat).unwrap();

    // Scathing Review -4 and Roadworks -2 arrive; the opponent's own
    // Celebrity Visit does not.
    assert_eq!(score.event_modifiers, -6);
}

#[test]
fn restaurant_condition_meal_count() {
    let cat = catalog();
    let none = Vector::new();

    let one_meal = board(&[1], &[], &[], &[]);
    let score = calculate_score(&input(&one_meal, 100, 201, &none), &cat).unwrap();
    assert_eq!(score.restaurant_bonus, 0);

    let two_meals = board(&[1, 2], &[], &[], &[]);
    let score = calculate_score(&input(&two_meals, 100, 201, &none), &cat).unwrap();
    assert_eq!(score.restaurant_bonus, 5);
}

#[test]
fn restaurant_condition_opponent_score() {
    let cat = catalog();
    let none = Vector::new();
    let board = board(&[], &[], &[], &[]);

    let mut low = input(&board, 100, 203, &none);
    low.opponent_score = 14;
    assert_eq!(calculate_score(&low, &cat).unwrap().restaurant_bonus, 0);

    let mut high = input(&board, 100, 203, &none);
    high.opponent_score = 15;
    assert_eq!(calculate_score(&high, &cat).unwrap().restaurant_bonus, 4);
}

#[test]
fn archetype_synergy_through_full_score() {
    let cat = catalog();
    let none = Vector::new();
    // Chef Martina is Italian with a declared Italian -> Seafood synergy;
    // Porto Azzurro is Seafood; one Seafood meal, one Italian meal.
    let board = board(&[10, 11], &[], &[], &[]);

    let score = calculate_score(&input(&board, 100, 202, &none), &cat).unwrap();

    // +1 seafood meal matches the synergy, +2 the restaurant tag matches
    // the synergy, +2 the italian meal matches the chef directly.
    assert_eq!(score.archetype_bonus, 5);
    assert_eq!(score.total_score, 12 + 5 + 4 + 5);
}

#[test]
fn unknown_card_is_a_catalog_integrity_failure() {
    let cat = catalog();
    let none = Vector::new();
    let board = board(&[999], &[], &[], &[]);

    let err = calculate_score(&input(&board, 100, 200, &none), &cat).unwrap_err();
    assert!(matches!(err, MatchError::Catalog(_)));
}

#[test]
fn breakdown_lines_total_matches() {
    let cat = catalog();
    let none = Vector::new();
    let board = board(&[3, 5, 10], &[20, 24], &[31], &[40]);

    let score = calculate_score(&input(&board, 101, 201, &none), &cat).unwrap();

    let line_sum: i64 = score.breakdown.iter().map(|l| l.amount).sum();
    assert_eq!(line_sum, score.total_score);
}

proptest! {
    /// Any board over the fixture pool scores the same twice in a row.
    #[test]
    fn score_is_deterministic(
        meals in proptest::collection::vec(prop_oneof![Just(1u32), Just(2), Just(3), Just(4), Just(5), Just(10), Just(11)], 0..3),
        staff in proptest::collection::vec(prop_oneof![Just(20u32), Just(21), Just(22), Just(23), Just(24)], 0..3),
    ) {
        let cat = catalog();
        let none = Vector::new();
        let board = board(&meals, &staff, &[], &[]);
        let input = input(&board, 100, 201, &none);

        prop_assert_eq!(
            calculate_score(&input, &cat).unwrap(),
            calculate_score(&input, &cat).unwrap()
        );
    }
}
