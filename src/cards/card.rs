//! The card sum type.
//!
//! Cards are small `Copy` values with no identity beyond their
//! (variant, class, symbol) tuple: two Garden Sun labyrinth cards are
//! interchangeable.

use serde::{Deserialize, Serialize};

use super::attributes::{Class, DreamKind, Symbol};
use crate::core::EngineError;

/// A door of one class. Awarded on discovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorCard {
    pub class: Class,
}

/// A dream card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DreamCard {
    pub kind: DreamKind,
}

/// A card that can be held and played into a labyrinth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabyrinthCard {
    pub class: Class,
    pub symbol: Symbol,
}

impl DoorCard {
    #[must_use]
    pub const fn new(class: Class) -> Self {
        Self { class }
    }
}

impl DreamCard {
    #[must_use]
    pub const fn new(kind: DreamKind) -> Self {
        Self { kind }
    }
}

impl LabyrinthCard {
    #[must_use]
    pub const fn new(class: Class, symbol: Symbol) -> Self {
        Self { class, symbol }
    }

    #[must_use]
    pub fn is_key(self) -> bool {
        self.symbol == Symbol::Key
    }
}

/// Which of the three card families a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Door,
    Dream,
    Labyrinth,
}

/// Any card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Door(DoorCard),
    Dream(DreamCard),
    Labyrinth(LabyrinthCard),
}

impl Card {
    #[must_use]
    pub fn classify(&self) -> Variant {
        match self {
            Card::Door(_) => Variant::Door,
            Card::Dream(_) => Variant::Dream,
            Card::Labyrinth(_) => Variant::Labyrinth,
        }
    }

    /// Display text, e.g. "Garden Door Card" or "Library Key Labyrinth Card".
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn as_labyrinth(&self) -> Option<LabyrinthCard> {
        match self {
            Card::Labyrinth(card) => Some(*card),
            Card::Door(_) | Card::Dream(_) => None,
        }
    }

    #[must_use]
    pub fn as_door(&self) -> Option<DoorCard> {
        match self {
            Card::Door(door) => Some(*door),
            Card::Dream(_) | Card::Labyrinth(_) => None,
        }
    }
}

impl From<DoorCard> for Card {
    fn from(card: DoorCard) -> Self {
        Card::Door(card)
    }
}

impl From<DreamCard> for Card {
    fn from(card: DreamCard) -> Self {
        Card::Dream(card)
    }
}

impl From<LabyrinthCard> for Card {
    fn from(card: LabyrinthCard) -> Self {
        Card::Labyrinth(card)
    }
}

impl std::fmt::Display for DoorCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Door Card", self.class)
    }
}

impl std::fmt::Display for DreamCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Dream Card", self.kind)
    }
}

impl std::fmt::Display for LabyrinthCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} Labyrinth Card", self.class, self.symbol)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Door(card) => std::fmt::Display::fmt(card, f),
            Card::Dream(card) => std::fmt::Display::fmt(card, f),
            Card::Labyrinth(card) => std::fmt::Display::fmt(card, f),
        }
    }
}

/// Untyped card record as it arrives from outside the engine.
///
/// `variant` is 0 = door, 1 = dream, 2 = labyrinth. `class` doubles as the
/// dream kind for dream cards; `symbol` is ignored unless the card is a
/// labyrinth card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    pub variant: u8,
    pub class: u8,
    #[serde(default)]
    pub symbol: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = EngineError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        match raw.variant {
            0 => Ok(DoorCard::new(Class::try_from(raw.class)?).into()),
            1 => Ok(DreamCard::new(DreamKind::try_from(raw.class)?).into()),
            2 => Ok(LabyrinthCard::new(
                Class::try_from(raw.class)?,
                Symbol::try_from(raw.symbol)?,
            )
            .into()),
            value => Err(EngineError::InvalidVariant {
                field: "variant",
                value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Card::from(DoorCard::new(Class::Garden)).classify(), Variant::Door);
        assert_eq!(
            Card::from(DreamCard::new(DreamKind::Nightmare)).classify(),
            Variant::Dream
        );
        assert_eq!(
            Card::from(LabyrinthCard::new(Class::Library, Symbol::Sun)).classify(),
            Variant::Labyrinth
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Card::from(DoorCard::new(Class::Observatory)).describe(),
            "Observatory Door Card"
        );
        assert_eq!(
            Card::from(DreamCard::new(DreamKind::Nightmare)).describe(),
            "Nightmare Dream Card"
        );
        assert_eq!(
            Card::from(LabyrinthCard::new(Class::Aquarium, Symbol::Key)).describe(),
            "Aquarium Key Labyrinth Card"
        );
    }

    #[test]
    fn test_duplicates_are_equal() {
        let a = LabyrinthCard::new(Class::Garden, Symbol::Moon);
        let b = LabyrinthCard::new(Class::Garden, Symbol::Moon);
        assert_eq!(Card::from(a), Card::from(b));
    }

    #[test]
    fn test_raw_card_conversion() {
        let raw = RawCard { variant: 2, class: 1, symbol: 2 };
        assert_eq!(
            Card::try_from(raw),
            Ok(Card::Labyrinth(LabyrinthCard::new(Class::Aquarium, Symbol::Key)))
        );

        let door = RawCard { variant: 0, class: 3, symbol: 0 };
        assert_eq!(Card::try_from(door), Ok(Card::Door(DoorCard::new(Class::Library))));
    }

    #[test]
    fn test_raw_card_out_of_domain() {
        let bad_class = RawCard { variant: 2, class: 9, symbol: 0 };
        assert_eq!(
            Card::try_from(bad_class),
            Err(EngineError::InvalidVariant { field: "class", value: 9 })
        );

        let bad_symbol = RawCard { variant: 2, class: 0, symbol: 3 };
        assert_eq!(
            Card::try_from(bad_symbol),
            Err(EngineError::InvalidVariant { field: "symbol", value: 3 })
        );

        let bad_variant = RawCard { variant: 5, class: 0, symbol: 0 };
        assert_eq!(
            Card::try_from(bad_variant),
            Err(EngineError::InvalidVariant { field: "variant", value: 5 })
        );
    }

    #[test]
    fn test_raw_card_from_json() {
        let raw: RawCard = serde_json::from_str(r#"{"variant": 1, "class": 0}"#).unwrap();
        assert_eq!(
            Card::try_from(raw),
            Ok(Card::Dream(DreamCard::new(DreamKind::Nightmare)))
        );
    }
}
