//! Card catalog: definition lookup and the archetype synergy table.
//!
//! The catalog is built by the host and injected at match initialization.
//! The engine never reaches into ambient global state for card data, and
//! never mutates a catalog once a match holds it.

use rustc_hash::FxHashMap;

use super::card::{Archetype, Card, CardId, CardKind};

/// Catalog of card definitions plus declared archetype synergies.
///
/// ## Example
///
/// ```
/// use bistro_duel::cards::{Card, CardId, CardInfo, Catalog, MealCard};
///
/// let mut catalog = Catalog::new();
/// catalog.register(Card::Meal(MealCard {
///     info: CardInfo::new(CardId::new(1), "Ramen"),
///     value: 3,
///     influence_cost: 1,
///     archetype: None,
///     effect: None,
/// }));
///
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().name(), "Ramen");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: FxHashMap<CardId, Card>,
    synergies: FxHashMap<Archetype, Vec<Archetype>>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists; duplicate
    /// registration is a setup bug, not a runtime condition.
    pub fn register(&mut self, card: Card) {
        let id = card.id();
        if self.cards.contains_key(&id) {
            panic!("Card with ID {id} already registered");
        }
        self.cards.insert(id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// All cards of a given kind.
    pub fn by_kind(&self, kind: CardKind) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.kind() == kind)
    }

    /// Declare a one-directional synergy: cards tagged `with` boost a board
    /// anchored by archetype `tag`.
    pub fn declare_synergy(&mut self, tag: Archetype, with: Archetype) {
        let set = self.synergies.entry(tag).or_default();
        if !set.contains(&with) {
            set.push(with);
        }
    }

    /// The synergy set declared for an archetype (empty if none).
    #[must_use]
    pub fn synergies_of(&self, tag: Archetype) -> &[Archetype] {
        self.synergies.get(&tag).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardInfo, MealCard, StaffAbility, StaffCard};

    fn meal(id: u32) -> Card {
        Card::Meal(MealCard {
            info: CardInfo::new(CardId::new(id), format!("Meal {id}")),
            value: 2,
            influence_cost: 1,
            archetype: None,
            effect: None,
        })
    }

    fn staff(id: u32) -> Card {
        Card::Staff(StaffCard {
            info: CardInfo::new(CardId::new(id), format!("Staff {id}")),
            ability: StaffAbility::Support,
            modifier: None,
            influence_cost: 1,
            archetype: None,
        })
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = Catalog::new();
        catalog.register(meal(1));

        assert!(catalog.get(CardId::new(1)).is_some());
        assert!(catalog.get(CardId::new(99)).is_none());
        assert!(catalog.contains(CardId::new(1)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = Catalog::new();
        catalog.register(meal(1));
        catalog.register(staff(1));
    }

    #[test]
    fn test_by_kind() {
        let mut catalog = Catalog::new();
        catalog.register(meal(1));
        catalog.register(meal(2));
        catalog.register(staff(3));

        assert_eq!(catalog.by_kind(CardKind::Meal).count(), 2);
        assert_eq!(catalog.by_kind(CardKind::Staff).count(), 1);
        assert_eq!(catalog.by_kind(CardKind::Chef).count(), 0);
    }

    #[test]
    fn test_synergy_table() {
        let mut catalog = Catalog::new();
        let french = Archetype::new(0);
        let pastry = Archetype::new(1);

        assert!(catalog.synergies_of(french).is_empty());

        catalog.declare_synergy(french, pastry);
        catalog.declare_synergy(french, pastry); // idempotent

        assert_eq!(catalog.synergies_of(french), &[pastry]);
        assert!(catalog.synergies_of(pastry).is_empty());
    }
}
