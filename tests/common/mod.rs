//! Shared fixtures: a small but complete catalog, a legal deck, and
//! helpers that drive a fresh match into the turn phase.

#![allow(dead_code)]

use bistro_duel::{
    Archetype, Card, CardId, CardInfo, Catalog, ChefAbility, ChefCard, ConditionPredicate,
    EventCard, EventEffect, EventTarget, MatchState, MealCard, PlayerDeck, RestaurantCard,
    RestaurantChoice, RestaurantCondition, SeatConfig, SeatId, SeatMap, StaffAbility, StaffCard,
    SupportAbility, SupportCard, SupportDuration,
};

pub const ITALIAN: Archetype = Archetype::new(0);
pub const SEAFOOD: Archetype = Archetype::new(1);

pub fn id(n: u32) -> CardId {
    CardId::new(n)
}

fn meal(n: u32, name: &str, value: i64, cost: i64, archetype: Option<Archetype>) -> Card {
    Card::Meal(MealCard {
        info: CardInfo::new(id(n), name),
        value,
        influence_cost: cost,
        archetype,
        effect: None,
    })
}

fn staff(
    n: u32,
    name: &str,
    ability: StaffAbility,
    modifier: Option<i64>,
    cost: i64,
    archetype: Option<Archetype>,
) -> Card {
    Card::Staff(StaffCard {
        info: CardInfo::new(id(n), name),
        ability,
        modifier,
        influence_cost: cost,
        archetype,
    })
}

fn support(n: u32, name: &str, ability: SupportAbility) -> Card {
    Card::Support(SupportCard {
        info: CardInfo::new(id(n), name),
        ability,
        duration: SupportDuration::Round,
    })
}

fn event(n: u32, name: &str, effect: EventEffect, target: EventTarget, cost: i64) -> Card {
    Card::Event(EventCard {
        info: CardInfo::new(id(n), name),
        effect,
        target,
        influence_cost: cost,
    })
}

/// Catalog used across the integration suites.
///
/// Meals 1-5 carry no archetype so score arithmetic stays readable;
/// meals 10/11 and staff 24 carry tags for synergy coverage.
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.register(meal(1, "Bruschetta", 1, 1, None));
    catalog.register(meal(2, "Minestrone", 2, 1, None));
    catalog.register(meal(3, "Carbonara", 3, 2, None));
    catalog.register(meal(4, "Osso Buco", 4, 2, None));
    catalog.register(meal(5, "Tasting Menu", 5, 3, None));
    catalog.register(meal(10, "Grilled Octopus", 2, 1, Some(SEAFOOD)));
    catalog.register(meal(11, "Truffle Risotto", 2, 1, Some(ITALIAN)));

    catalog.register(staff(20, "Head Waiter", StaffAbility::Service, Some(2), 2, None));
    catalog.register(staff(21, "Line Cook", StaffAbility::Support, None, 1, None));
    catalog.register(staff(22, "Sommelier", StaffAbility::Pairing, None, 1, None));
    catalog.register(staff(23, "Mixologist", StaffAbility::Cocktails, Some(3), 1, None));
    catalog.register(staff(24, "Fishmonger", StaffAbility::Support, None, 1, Some(SEAFOOD)));

    catalog.register(support(30, "Fresh Produce", SupportAbility::Quality));
    catalog.register(support(31, "Kitchen Upgrade", SupportAbility::Upgrade));
    catalog.register(support(32, "VIP Booth", SupportAbility::Vip));
    catalog.register(support(33, "Chef's Special", SupportAbility::Special));

    catalog.register(event(40, "Celebrity Visit", EventEffect::Celebrity, EventTarget::Own, 2));
    catalog.register(event(41, "Scathing Review", EventEffect::RemoveStar, EventTarget::Opponent, 2));
    catalog.register(event(42, "Rave Feature", EventEffect::GainStar, EventTarget::Own, 1));
    catalog.register(event(43, "Loud Roadworks", EventEffect::Distraction, EventTarget::Opponent, 1));

    catalog.register(Card::Chef(ChefCard {
        info: CardInfo::new(id(100), "Chef Martina"),
        base_value: 5,
        ability: None,
        starting_influence: 5,
        star_bonus_influence: 1,
        primary_archetype: ITALIAN,
        secondary_archetype: None,
    }));
    catalog.register(Card::Chef(ChefCard {
        info: CardInfo::new(id(101), "Chef Ito"),
        base_value: 3,
        ability: Some(ChefAbility::Perfectionist),
        starting_influence: 4,
        star_bonus_influence: 2,
        primary_archetype: SEAFOOD,
        secondary_archetype: Some(ITALIAN),
    }));

    catalog.register(Card::Restaurant(RestaurantCard {
        info: CardInfo::new(id(200), "Trattoria Sole"),
        base_score: 10,
        condition: None,
        archetype: None,
        required_stars: 0,
    }));
    catalog.register(Card::Restaurant(RestaurantCard {
        info: CardInfo::new(id(201), "Osteria Luna"),
        base_score: 8,
        condition: Some(RestaurantCondition::new(
            ConditionPredicate::AttachedMealCountAtLeast(2),
            5,
        )),
        archetype: Some(ITALIAN),
        required_stars: 0,
    }));
    catalog.register(Card::Restaurant(RestaurantCard {
        info: CardInfo::new(id(202), "Porto Azzurro"),
        base_score: 12,
        condition: None,
        archetype: Some(SEAFOOD),
        required_stars: 2,
    }));
    catalog.register(Card::Restaurant(RestaurantCard {
        info: CardInfo::new(id(203), "Underdog Diner"),
        base_score: 6,
        condition: Some(RestaurantCondition::new(
            ConditionPredicate::OpponentScoreAtLeast(15),
            4,
        )),
        archetype: None,
        required_stars: 0,
    }));

    catalog.declare_synergy(ITALIAN, SEAFOOD);

    catalog
}

/// A legal deck: three copies each of ten main-deck ids.
pub fn legal_deck() -> PlayerDeck {
    let main: Vec<CardId> = [1, 2, 3, 4, 5, 20, 21, 30, 40, 41]
        .into_iter()
        .flat_map(|n| std::iter::repeat(id(n)).take(3))
        .collect();
    PlayerDeck::new(main, id(100), [id(200), id(201), id(202)])
}

pub fn seat_configs() -> SeatMap<SeatConfig> {
    SeatMap::from_pair(
        SeatConfig::new("Nonna's Kitchen", legal_deck()),
        SeatConfig::new("The Rival", legal_deck()),
    )
}

/// Initialize a match and return it in `RestaurantSelection`.
pub fn fresh_match(seed: u64) -> MatchState {
    MatchState::initialize(seat_configs(), &catalog(), seed).expect("fixture deck is legal")
}

/// Drive a fresh match to the `Turn` phase of round 1, with restaurants
/// pinned to Trattoria Sole (base 10) on both seats for predictable
/// scoring.
pub fn match_at_turn(seed: u64) -> MatchState {
    let cat = catalog();
    let mut state = fresh_match(seed)
        .select_restaurant(SeatId::FIRST, RestaurantChoice::Top)
        .unwrap()
        .select_restaurant(SeatId::SECOND, RestaurantChoice::Top)
        .unwrap()
        .perform_mulligan(SeatId::FIRST, &[])
        .unwrap()
        .perform_mulligan(SeatId::SECOND, &[])
        .unwrap()
        .set_first_seat(SeatId::FIRST)
        .unwrap();
    for seat in SeatId::both() {
        state.seats[seat].restaurant_card_id = Some(id(200));
    }
    state.start_round(&cat).unwrap()
}

/// Replace a seat's hand with the given ids.
pub fn set_hand(state: &mut MatchState, seat: SeatId, ids: &[u32]) {
    state.seats[seat].hand = ids.iter().map(|&n| id(n)).collect();
}
