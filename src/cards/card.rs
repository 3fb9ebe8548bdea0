//! Static card data.
//!
//! A `Card` is a tagged union over the six card kinds. All ability and
//! effect dispatch is by enum equality; nothing in the engine inspects
//! description text. Instance-independent data only; runtime placement
//! (hand, board, pile) lives on the match `Seat`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the "kind" of card in the catalog, not a physical copy;
/// a deck may contain up to three copies of the same `CardId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Archetype tag used for synergy scoring.
///
/// Opaque to the engine; the catalog assigns meaning (cuisine, role, ...)
/// and declares which archetypes synergize with which.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Archetype(pub u16);

impl Archetype {
    /// Create a new archetype tag.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw tag value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// The six card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Chef,
    Restaurant,
    Meal,
    Staff,
    Support,
    Event,
}

/// Fields shared by every card kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub id: CardId,
    pub name: String,
    pub description: String,
}

impl CardInfo {
    /// Create card info with an empty description.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
        }
    }

    /// Set the flavor/rules description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Chef ability tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChefAbility {
    /// +2 score per attached meal.
    Perfectionist,
    /// No scoring effect; used by deck tooling.
    Mentor,
}

/// Staff ability tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffAbility {
    /// Modifier multiplied by the attached-meal count.
    Service,
    /// Flat modifier (defaults to 2).
    Support,
    /// Flat modifier added alongside the restaurant base (defaults to 1).
    Pairing,
    /// Flat modifier added alongside the restaurant base (defaults to 1).
    Cocktails,
}

impl StaffAbility {
    /// Default modifier when the card declares none.
    #[must_use]
    pub const fn default_modifier(self) -> i64 {
        match self {
            StaffAbility::Service => 1,
            StaffAbility::Support => 2,
            StaffAbility::Pairing | StaffAbility::Cocktails => 1,
        }
    }
}

/// Support ability tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportAbility {
    /// +2 per attached meal.
    Quality,
    /// Flat +3.
    Upgrade,
    /// Flat +1.
    Vip,
    /// Doubles one meal's value, applied at most once per board.
    Special,
}

/// How long a support card remains relevant once played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportDuration {
    Instant,
    Round,
    Permanent,
}

/// Meal effect tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealEffect {
    Signature,
    Seasonal,
}

/// Event effect tags, checked by equality (never by description text).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventEffect {
    /// +5 to the playing seat's board.
    Celebrity,
    /// +3 to the playing seat's board; star-gain preference tag for the AI.
    GainStar,
    /// -4 to the targeted board; star-removal preference tag for the AI.
    RemoveStar,
    /// -2 to the targeted board.
    Distraction,
}

impl EventEffect {
    /// Score contribution applied to the affected board.
    #[must_use]
    pub const fn modifier(self) -> i64 {
        match self {
            EventEffect::Celebrity => 5,
            EventEffect::GainStar => 3,
            EventEffect::RemoveStar => -4,
            EventEffect::Distraction => -2,
        }
    }
}

/// Which seat's board an event affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTarget {
    /// The seat that played the event.
    Own,
    Opponent,
    Both,
}

impl EventTarget {
    /// Whether the event lands on the playing seat's own board.
    #[must_use]
    pub const fn affects_own(self) -> bool {
        matches!(self, EventTarget::Own | EventTarget::Both)
    }

    /// Whether the event lands on the opposing seat's board.
    #[must_use]
    pub const fn affects_opponent(self) -> bool {
        matches!(self, EventTarget::Opponent | EventTarget::Both)
    }
}

/// Structured predicate for a restaurant's bonus condition.
///
/// Evaluated against a `StatsSnapshot` of the board being scored.
/// A typed predicate replaces free-text condition matching so every
/// condition the game ships can be checked exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionPredicate {
    AttachedMealCountAtLeast(u32),
    StaffCountAtLeast(u32),
    /// Distinct card kinds played this round (staff/support/event) plus meals.
    TypesPlayedCountAtLeast(u32),
    RoundAtLeast(u32),
    OpponentScoreAtLeast(i64),
}

/// A restaurant's conditional bonus: one predicate, one fixed bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantCondition {
    pub predicate: ConditionPredicate,
    pub bonus: i64,
}

impl RestaurantCondition {
    /// Create a condition.
    #[must_use]
    pub const fn new(predicate: ConditionPredicate, bonus: i64) -> Self {
        Self { predicate, bonus }
    }
}

/// Chef card: sets base score contribution and the influence economy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChefCard {
    pub info: CardInfo,
    pub base_value: i64,
    pub ability: Option<ChefAbility>,
    pub starting_influence: i64,
    pub star_bonus_influence: i64,
    pub primary_archetype: Archetype,
    pub secondary_archetype: Option<Archetype>,
}

/// Restaurant card: base score, optional conditional bonus, unlock rank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantCard {
    pub info: CardInfo,
    pub base_score: i64,
    pub condition: Option<RestaurantCondition>,
    pub archetype: Option<Archetype>,
    /// Star rank the deck tooling gates this restaurant behind.
    pub required_stars: u8,
}

/// Meal card: attaches to the restaurant and persists across rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCard {
    pub info: CardInfo,
    pub value: i64,
    pub influence_cost: i64,
    pub archetype: Option<Archetype>,
    pub effect: Option<MealEffect>,
}

/// Staff card: one-round score modifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffCard {
    pub info: CardInfo,
    pub ability: StaffAbility,
    /// Explicit modifier; falls back to the ability default when `None`.
    pub modifier: Option<i64>,
    pub influence_cost: i64,
    pub archetype: Option<Archetype>,
}

impl StaffCard {
    /// The modifier this staff card applies, explicit or ability default.
    #[must_use]
    pub fn effective_modifier(&self) -> i64 {
        self.modifier.unwrap_or_else(|| self.ability.default_modifier())
    }
}

/// Support card: one-round score modifier, free to play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportCard {
    pub info: CardInfo,
    pub ability: SupportAbility,
    pub duration: SupportDuration,
}

/// Event card: one per seat per round, may target either board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCard {
    pub info: CardInfo,
    pub effect: EventEffect,
    pub target: EventTarget,
    pub influence_cost: i64,
}

/// A card definition: tagged union over the six kinds.
///
/// ## Example
///
/// ```
/// use bistro_duel::cards::{Card, CardId, CardInfo, CardKind, MealCard};
///
/// let soup = Card::Meal(MealCard {
///     info: CardInfo::new(CardId::new(1), "Bouillabaisse"),
///     value: 4,
///     influence_cost: 2,
///     archetype: None,
///     effect: None,
/// });
///
/// assert_eq!(soup.kind(), CardKind::Meal);
/// assert_eq!(soup.influence_cost(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Chef(ChefCard),
    Restaurant(RestaurantCard),
    Meal(MealCard),
    Staff(StaffCard),
    Support(SupportCard),
    Event(EventCard),
}

impl Card {
    /// Shared card info.
    #[must_use]
    pub fn info(&self) -> &CardInfo {
        match self {
            Card::Chef(c) => &c.info,
            Card::Restaurant(c) => &c.info,
            Card::Meal(c) => &c.info,
            Card::Staff(c) => &c.info,
            Card::Support(c) => &c.info,
            Card::Event(c) => &c.info,
        }
    }

    /// This card's identifier.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.info().id
    }

    /// This card's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info().name
    }

    /// This card's kind discriminant.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Chef(_) => CardKind::Chef,
            Card::Restaurant(_) => CardKind::Restaurant,
            Card::Meal(_) => CardKind::Meal,
            Card::Staff(_) => CardKind::Staff,
            Card::Support(_) => CardKind::Support,
            Card::Event(_) => CardKind::Event,
        }
    }

    /// Influence required to play this card during a turn.
    ///
    /// Support cards are free; Chef/Restaurant cards are never played from
    /// hand and cost nothing.
    #[must_use]
    pub fn influence_cost(&self) -> i64 {
        match self {
            Card::Meal(c) => c.influence_cost,
            Card::Staff(c) => c.influence_cost,
            Card::Event(c) => c.influence_cost,
            Card::Chef(_) | Card::Restaurant(_) | Card::Support(_) => 0,
        }
    }

    /// Archetype tag for synergy scoring, if the variant carries one.
    #[must_use]
    pub fn archetype(&self) -> Option<Archetype> {
        match self {
            Card::Chef(c) => Some(c.primary_archetype),
            Card::Restaurant(c) => c.archetype,
            Card::Meal(c) => c.archetype,
            Card::Staff(c) => c.archetype,
            Card::Support(_) | Card::Event(_) => None,
        }
    }

    /// Downcast to the Chef variant.
    #[must_use]
    pub fn as_chef(&self) -> Option<&ChefCard> {
        match self {
            Card::Chef(c) => Some(c),
            _ => None,
        }
    }

    /// Downcast to the Restaurant variant.
    #[must_use]
    pub fn as_restaurant(&self) -> Option<&RestaurantCard> {
        match self {
            Card::Restaurant(c) => Some(c),
            _ => None,
        }
    }

    /// Downcast to the Meal variant.
    #[must_use]
    pub fn as_meal(&self) -> Option<&MealCard> {
        match self {
            Card::Meal(c) => Some(c),
            _ => None,
        }
    }

    /// Downcast to the Staff variant.
    #[must_use]
    pub fn as_staff(&self) -> Option<&StaffCard> {
        match self {
            Card::Staff(c) => Some(c),
            _ => None,
        }
    }

    /// Downcast to the Support variant.
    #[must_use]
    pub fn as_support(&self) -> Option<&SupportCard> {
        match self {
            Card::Support(c) => Some(c),
            _ => None,
        }
    }

    /// Downcast to the Event variant.
    #[must_use]
    pub fn as_event(&self) -> Option<&EventCard> {
        match self {
            Card::Event(c) => Some(c),
            _ => None,
        }
    }
}
