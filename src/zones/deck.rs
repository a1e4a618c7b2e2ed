//! The shared draw deck.
//!
//! An ordered list of cards; index 0 is the top. The deck owns its cards
//! outright: drawing moves a card out, returning moves it back in.
//!
//! Randomness is always supplied by the caller, so a seeded `GameRng`
//! gives reproducible shuffles and deals.

use log::{debug, trace};
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Class, DeckList, DoorCard, LabyrinthCard};
use crate::core::config::HAND_SIZE;
use crate::core::EngineError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deck holding `cards`, first element on top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Unshuffled deck built from a deck list.
    #[must_use]
    pub fn from_list(list: &DeckList) -> Self {
        Self::from_cards(list.cards())
    }

    /// Unshuffled basic 76-card deck.
    #[must_use]
    pub fn basic() -> Self {
        Self::from_list(&DeckList::basic())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Top `n` cards (fewer if the deck is short), without removing them.
    pub fn peek(&self, n: usize) -> &[Card] {
        &self.cards[..n.min(self.cards.len())]
    }

    #[must_use]
    pub fn labyrinth_count(&self) -> usize {
        self.cards.iter().filter(|c| c.as_labyrinth().is_some()).count()
    }

    /// Multiset view of the deck.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for &card in &self.cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    /// Fisher-Yates: each position `i`, first to last, swaps with a
    /// uniformly chosen position in `0..=i`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..self.cards.len() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
        trace!("deck shuffled ({} cards)", self.cards.len());
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        if self.cards.is_empty() {
            return Err(EngineError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    /// Draw until `count` labyrinth cards are found.
    ///
    /// Door and dream cards met on the way are set aside, returned to the
    /// deck afterwards, and the deck is shuffled. A deck that cannot supply
    /// `count` labyrinth cards is reported before anything is drawn.
    pub fn deal_labyrinth<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<LabyrinthCard>, EngineError> {
        let available = self.labyrinth_count();
        if available < count {
            return Err(EngineError::InsufficientLabyrinthCards {
                needed: count,
                available,
            });
        }

        let mut dealt = Vec::with_capacity(count);
        let mut set_aside = Vec::new();

        while dealt.len() < count {
            match self.draw()? {
                Card::Labyrinth(card) => dealt.push(card),
                other @ (Card::Door(_) | Card::Dream(_)) => set_aside.push(other),
            }
        }

        debug!(
            "dealt {} labyrinth cards, returning {} set-aside cards",
            dealt.len(),
            set_aside.len()
        );
        self.shuffle_in(set_aside, rng);

        Ok(dealt)
    }

    /// Deal a starting hand of `HAND_SIZE` labyrinth cards.
    pub fn deal_hand<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<LabyrinthCard>, EngineError> {
        self.deal_labyrinth(HAND_SIZE, rng)
    }

    /// Remove the first door of `class`, then shuffle.
    ///
    /// `None` when no such door remains; the deck is left untouched.
    pub fn remove_door_of_class<R: Rng + ?Sized>(
        &mut self,
        class: Class,
        rng: &mut R,
    ) -> Option<DoorCard> {
        let position = self
            .cards
            .iter()
            .position(|c| matches!(c, Card::Door(door) if door.class == class))?;

        let door = self.cards.remove(position).as_door();
        self.shuffle(rng);
        door
    }

    /// Remove up to `n` cards from the top, top first.
    pub fn take_top(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Put `cards` on top; the first card yielded ends up on top.
    pub fn place_on_top(&mut self, cards: impl IntoIterator<Item = Card>) {
        let rest = std::mem::take(&mut self.cards);
        self.cards = cards.into_iter().chain(rest).collect();
    }

    /// Return `cards` to the deck and shuffle.
    pub fn shuffle_in<R: Rng + ?Sized>(
        &mut self,
        cards: impl IntoIterator<Item = Card>,
        rng: &mut R,
    ) {
        self.cards.extend(cards);
        self.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{DreamCard, DreamKind, Symbol};
    use crate::core::GameRng;

    fn lab(class: Class, symbol: Symbol) -> Card {
        LabyrinthCard::new(class, symbol).into()
    }

    fn nightmare() -> Card {
        DreamCard::new(DreamKind::Nightmare).into()
    }

    #[test]
    fn test_basic_deck_size() {
        assert_eq!(Deck::basic().len(), 76);
    }

    #[test]
    fn test_draw_takes_top() {
        let top = lab(Class::Garden, Symbol::Sun);
        let mut deck = Deck::from_cards(vec![top, nightmare()]);

        assert_eq!(deck.draw(), Ok(top));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_draw_empty() {
        let mut deck = Deck::new();
        assert_eq!(deck.draw(), Err(EngineError::EmptyDeck));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut deck = Deck::basic();
        let before = deck.census();

        deck.shuffle(&mut GameRng::new(42));

        assert_eq!(deck.len(), 76);
        assert_eq!(deck.census(), before);
        assert_ne!(deck, Deck::basic());
    }

    #[test]
    fn test_deal_hand_keeps_total() {
        let mut deck = Deck::basic();
        let mut rng = GameRng::new(1);

        let hand = deck.deal_hand(&mut rng).unwrap();

        assert_eq!(hand.len(), 5);
        assert_eq!(deck.len(), 76 - 5);
        assert_eq!(deck.labyrinth_count(), 56 - 5);
    }

    #[test]
    fn test_deal_sets_aside_non_labyrinth() {
        let door = Card::from(DoorCard::new(Class::Library));
        let mut deck = Deck::from_cards(vec![
            door,
            nightmare(),
            lab(Class::Garden, Symbol::Sun),
            lab(Class::Garden, Symbol::Moon),
        ]);

        let dealt = deck.deal_labyrinth(2, &mut GameRng::new(0)).unwrap();

        assert_eq!(
            dealt,
            vec![
                LabyrinthCard::new(Class::Garden, Symbol::Sun),
                LabyrinthCard::new(Class::Garden, Symbol::Moon),
            ]
        );
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.census().get(&door), Some(&1));
        assert_eq!(deck.census().get(&nightmare()), Some(&1));
    }

    #[test]
    fn test_deal_insufficient_leaves_deck() {
        let cards = vec![nightmare(), lab(Class::Aquarium, Symbol::Key), nightmare()];
        let mut deck = Deck::from_cards(cards.clone());

        let err = deck.deal_hand(&mut GameRng::new(0)).unwrap_err();

        assert_eq!(
            err,
            EngineError::InsufficientLabyrinthCards { needed: 5, available: 1 }
        );
        assert_ne!(err, EngineError::EmptyDeck);
        assert_eq!(deck.cards(), cards.as_slice());
    }

    #[test]
    fn test_remove_door_found() {
        let garden_door = Card::from(DoorCard::new(Class::Garden));
        let mut remaining = Deck::basic();
        let first = remaining.cards.iter().position(|c| *c == garden_door).unwrap();
        remaining.cards.remove(first);

        let mut deck = Deck::basic();
        let door = deck.remove_door_of_class(Class::Garden, &mut GameRng::new(9));

        assert_eq!(door, Some(DoorCard::new(Class::Garden)));
        assert_eq!(deck.len(), 75);
        assert_eq!(deck.census(), remaining.census());
        assert_eq!(deck.census().get(&garden_door), Some(&1));
        // The rest of the deck is left shuffled.
        assert_ne!(deck, remaining);
    }

    #[test]
    fn test_remove_door_missing() {
        let cards = vec![lab(Class::Garden, Symbol::Sun), DoorCard::new(Class::Aquarium).into()];
        let mut deck = Deck::from_cards(cards.clone());

        assert_eq!(deck.remove_door_of_class(Class::Garden, &mut GameRng::new(0)), None);
        assert_eq!(deck.cards(), cards.as_slice());
    }

    #[test]
    fn test_take_and_place_on_top() {
        let a = lab(Class::Garden, Symbol::Sun);
        let b = lab(Class::Library, Symbol::Moon);
        let c = nightmare();
        let mut deck = Deck::from_cards(vec![a, b, c]);

        let top = deck.take_top(2);
        assert_eq!(top, vec![a, b]);
        assert_eq!(deck.cards(), &[c]);

        deck.place_on_top([b, a]);
        assert_eq!(deck.cards(), &[b, a, c]);
    }

    #[test]
    fn test_peek_short_deck() {
        let deck = Deck::from_cards(vec![nightmare(), nightmare()]);
        assert_eq!(deck.peek(5).len(), 2);
        assert_eq!(deck.len(), 2);
    }
}
