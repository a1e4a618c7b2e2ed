//! Deck lists: which cards a new deck contains, and how many of each.

use serde::{Deserialize, Serialize};

use super::attributes::{Class, DreamKind, Symbol};
use super::card::{Card, DoorCard, DreamCard, LabyrinthCard};

/// Total cards in the basic deck.
pub const BASIC_DECK_SIZE: usize = 76;

/// Sun/Moon/Key counts per class in the basic deck.
const BASIC_LABYRINTH: [(Class, [usize; 3]); 4] = [
    (Class::Observatory, [9, 4, 3]),
    (Class::Aquarium, [8, 4, 3]),
    (Class::Garden, [7, 4, 3]),
    (Class::Library, [6, 4, 3]),
];

const DOORS_PER_CLASS: usize = 2;
const NIGHTMARES: usize = 10;

/// An ordered list of (card, copies) entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    entries: Vec<(Card, usize)>,
}

impl DeckList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The basic 76-card list: 8 doors, 56 labyrinth cards, 10 nightmares.
    #[must_use]
    pub fn basic() -> Self {
        let mut list = Self::new();

        for class in Class::ALL {
            list = list.with(DoorCard::new(class), DOORS_PER_CLASS);
        }

        for (class, counts) in BASIC_LABYRINTH {
            for (symbol, copies) in Symbol::ALL.into_iter().zip(counts) {
                list = list.with(LabyrinthCard::new(class, symbol), copies);
            }
        }

        list.with(DreamCard::new(DreamKind::Nightmare), NIGHTMARES)
    }

    /// Add `copies` of `card`.
    #[must_use]
    pub fn with(mut self, card: impl Into<Card>, copies: usize) -> Self {
        self.entries.push((card.into(), copies));
        self
    }

    pub fn entries(&self) -> &[(Card, usize)] {
        &self.entries
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Expand into individual cards, in list order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.total());
        for &(card, copies) in &self.entries {
            cards.extend(std::iter::repeat(card).take(copies));
        }
        cards
    }
}
