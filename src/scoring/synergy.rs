//! Archetype synergy bonus.
//!
//! Synergy is chef-anchored: a chef with no archetypes earns no bonus
//! regardless of what the board shows. See `calculate_archetype_bonus`
//! for the exact walk.

use crate::cards::{Archetype, Catalog};

fn matching(cards: &[Archetype], tag: Archetype) -> i64 {
    cards.iter().filter(|&&a| a == tag).count() as i64
}

/// Compute the archetype synergy bonus for one board.
///
/// - `chef_archetypes`: the chef's primary plus optional secondary tag.
/// - `restaurant_archetype`: the selected restaurant's tag, if any.
/// - `card_archetypes`: tags on attached meals and played staff (cards
///   without a tag are simply absent from this list).
///
/// For each chef archetype: +1 per card matching each tag in its declared
/// synergy set, +2 if the restaurant's tag is in that set, and +2 per card
/// matching the chef archetype itself. If the restaurant tag has declared
/// synergies of its own: +1 per card matching each of those, plus +1 per
/// card matching the restaurant tag directly.
///
/// A card whose tag equals both a chef archetype and one of its synergies
/// is counted by both passes. That double-count matches the shipped game
/// and is covered by tests; do not dedupe here.
#[must_use]
pub fn calculate_archetype_bonus(
    chef_archetypes: &[Archetype],
    restaurant_archetype: Option<Archetype>,
    card_archetypes: &[Archetype],
    catalog: &Catalog,
) -> i64 {
    if chef_archetypes.is_empty() {
        return 0;
    }

    let mut bonus = 0;

    for &chef_tag in chef_archetypes {
        for &syn in catalog.synergies_of(chef_tag) {
            bonus += matching(card_archetypes, syn);
            if restaurant_archetype == Some(syn) {
                bonus += 2;
            }
        }
        bonus += 2 * matching(card_archetypes, chef_tag);
    }

    if let Some(restaurant_tag) = restaurant_archetype {
        let synergies = catalog.synergies_of(restaurant_tag);
        for &syn in synergies {
            bonus += matching(card_archetypes, syn);
        }
        if !synergies.is_empty() {
            bonus += matching(card_archetypes, restaurant_tag);
        }
    }

    bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Archetype = Archetype::new(0);
    const B: Archetype = Archetype::new(1);
    const C: Archetype = Archetype::new(2);

    fn catalog_ab() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.declare_synergy(A, B);
        catalog
    }

    #[test]
    fn test_no_chef_archetypes_is_zero() {
        let catalog = catalog_ab();
        assert_eq!(
            calculate_archetype_bonus(&[], Some(B), &[B, B, A], &catalog),
            0
        );
    }

    #[test]
    fn test_synergy_card_and_restaurant() {
        // Chef A (synergy {B}), restaurant B, one meal tagged B:
        // +1 card matches synergy B, +2 restaurant tag equals synergy B.
        let catalog = catalog_ab();
        assert_eq!(calculate_archetype_bonus(&[A], Some(B), &[B], &catalog), 3);
    }

    #[test]
    fn test_direct_chef_match() {
        let catalog = catalog_ab();
        // Two cards tagged A match the chef archetype directly: 2 x 2.
        assert_eq!(calculate_archetype_bonus(&[A], None, &[A, A], &catalog), 4);
    }

    #[test]
    fn test_double_count_preserved() {
        // B is both the chef's secondary archetype and a synergy of A.
        // One card tagged B earns the synergy point and the direct match.
        let catalog = catalog_ab();
        assert_eq!(
            calculate_archetype_bonus(&[A, B], None, &[B], &catalog),
            1 + 2
        );
    }

    #[test]
    fn test_restaurant_own_synergies() {
        let mut catalog = catalog_ab();
        catalog.declare_synergy(B, C);
        // Chef A (synergy {B}), restaurant B (synergy {C}), cards [B, C]:
        // chef pass: card B matches synergy +1, restaurant B is synergy +2.
        // restaurant pass: card C matches B's synergy +1, card B matches
        // the restaurant tag directly +1.
        assert_eq!(
            calculate_archetype_bonus(&[A], Some(B), &[B, C], &catalog),
            5
        );
    }

    #[test]
    fn test_unrelated_tags_score_nothing() {
        let catalog = catalog_ab();
        assert_eq!(calculate_archetype_bonus(&[A], None, &[C, C], &catalog), 0);
    }
}
