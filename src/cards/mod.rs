//! Card definitions and the injected catalog.

mod card;
mod catalog;

pub use card::{
    Archetype, Card, CardId, CardInfo, CardKind, ChefAbility, ChefCard, ConditionPredicate,
    EventCard, EventEffect, EventTarget, MealCard, MealEffect, RestaurantCard,
    RestaurantCondition, StaffAbility, StaffCard, SupportAbility, SupportCard, SupportDuration,
};
pub use catalog::Catalog;
