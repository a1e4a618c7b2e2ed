//! One player's view of the table.
//!
//! A `Seat` borrows the piles the engine owns for one player (hand,
//! labyrinth, doors) plus the shared pool. It holds no cards of its own,
//! so every change made through it is immediately visible in the
//! `GameState` it was borrowed from.

use crate::cards::{Class, DoorCard, LabyrinthCard};
use crate::core::EngineError;
use crate::rules::labyrinth::{check_placement, door_run};

use super::pile::{CardSlot, IndexPartition, PileKind};

pub struct Seat<'a> {
    hand: &'a mut Vec<LabyrinthCard>,
    shared: &'a mut Vec<LabyrinthCard>,
    labyrinth: &'a mut Vec<LabyrinthCard>,
    doors: &'a mut Vec<DoorCard>,
    partition: IndexPartition,
}

impl<'a> Seat<'a> {
    pub fn new(
        hand: &'a mut Vec<LabyrinthCard>,
        shared: &'a mut Vec<LabyrinthCard>,
        labyrinth: &'a mut Vec<LabyrinthCard>,
        doors: &'a mut Vec<DoorCard>,
        partition: IndexPartition,
    ) -> Self {
        Self {
            hand,
            shared,
            labyrinth,
            doors,
            partition,
        }
    }

    /// Number of combined indices currently addressable.
    #[must_use]
    pub fn addressable(&self) -> usize {
        self.partition.addressable(self.hand.len(), self.shared.len())
    }

    /// Card at combined index `index`, and where it lives.
    pub fn card_at(&self, index: usize) -> Result<(LabyrinthCard, CardSlot), EngineError> {
        let slot = self
            .partition
            .resolve(index, self.hand.len(), self.shared.len())?;
        let card = match slot.pile {
            PileKind::Hand => self.hand[slot.position],
            PileKind::Shared => self.shared[slot.position],
        };
        Ok((card, slot))
    }

    /// Remove and return the card at combined index `index`.
    pub fn remove_card_at(&mut self, index: usize) -> Result<LabyrinthCard, EngineError> {
        let (_, slot) = self.card_at(index)?;
        Ok(self.take(slot))
    }

    /// Move the card at `index` onto the end of the labyrinth.
    ///
    /// Nothing moves when the placement rule rejects the card.
    pub fn play_card_at(&mut self, index: usize) -> Result<LabyrinthCard, EngineError> {
        let (card, slot) = self.card_at(index)?;
        check_placement(self.labyrinth_end(), card)?;

        self.take(slot);
        self.labyrinth.push(card);
        Ok(card)
    }

    /// Remove the card at `index` for the discard pile. No placement check.
    pub fn discard_card_at(&mut self, index: usize) -> Result<LabyrinthCard, EngineError> {
        self.remove_card_at(index)
    }

    /// Last card of the labyrinth, the one the next play must follow.
    #[must_use]
    pub fn labyrinth_end(&self) -> Option<LabyrinthCard> {
        self.labyrinth.last().copied()
    }

    #[must_use]
    pub fn can_discover_door(&self) -> Option<Class> {
        door_run(self.labyrinth.as_slice())
    }

    /// Combined index of the first key of `class`, hand searched first.
    #[must_use]
    pub fn has_key(&self, class: Class) -> Option<usize> {
        let is_match = |c: &LabyrinthCard| c.is_key() && c.class == class;
        let hand_len = self.hand.len();

        let in_hand = self
            .hand
            .iter()
            .position(is_match)
            .and_then(|i| self.partition.combined_index(CardSlot::hand(i), hand_len));

        in_hand.or_else(|| {
            let position = self.shared.iter().position(is_match)?;
            self.partition
                .combined_index(CardSlot::shared(position), hand_len)
        })
    }

    pub fn add_door(&mut self, door: DoorCard) {
        self.doors.push(door);
    }

    fn take(&mut self, slot: CardSlot) -> LabyrinthCard {
        match slot.pile {
            PileKind::Hand => self.hand.remove(slot.position),
            PileKind::Shared => self.shared.remove(slot.position),
        }
    }
}
