//! Combined hand+shared addressing.
//!
//! Players pick cards by a single index that spans their hand and the
//! shared pool. `IndexPartition` fixes where the hand ends and the shared
//! pool begins; `CardSlot` is the resolved (pile, position) pair.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Pile a selectable card lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Hand,
    Shared,
}

/// A resolved card position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSlot {
    pub pile: PileKind,
    pub position: usize,
}

impl CardSlot {
    #[must_use]
    pub const fn hand(position: usize) -> Self {
        Self { pile: PileKind::Hand, position }
    }

    #[must_use]
    pub const fn shared(position: usize) -> Self {
        Self { pile: PileKind::Shared, position }
    }
}

/// How combined indices split between the hand and the shared pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexPartition {
    /// `0..hand.len()` is the hand, `hand.len()..` is the shared pool.
    #[default]
    HandFirst,
    /// `0..n` are own slots, `n..` is the shared pool. Hand cards at
    /// positions `n` and beyond are not addressable.
    FixedOwnSlots(usize),
}

impl IndexPartition {
    /// First combined index that addresses the shared pool.
    #[must_use]
    pub fn shared_offset(self, hand_len: usize) -> usize {
        match self {
            IndexPartition::HandFirst => hand_len,
            IndexPartition::FixedOwnSlots(n) => n,
        }
    }

    /// One past the highest combined index.
    #[must_use]
    pub fn addressable(self, hand_len: usize, shared_len: usize) -> usize {
        self.shared_offset(hand_len) + shared_len
    }

    /// Resolve a combined index against the current pile sizes.
    pub fn resolve(
        self,
        index: usize,
        hand_len: usize,
        shared_len: usize,
    ) -> Result<CardSlot, EngineError> {
        let offset = self.shared_offset(hand_len);
        let out_of_range = EngineError::IndexOutOfRange {
            index,
            addressable: self.addressable(hand_len, shared_len),
        };

        if index < offset {
            if index < hand_len {
                Ok(CardSlot::hand(index))
            } else {
                Err(out_of_range)
            }
        } else if index - offset < shared_len {
            Ok(CardSlot::shared(index - offset))
        } else {
            Err(out_of_range)
        }
    }

    /// Inverse of `resolve`. `None` for hand cards the partition cannot reach.
    #[must_use]
    pub fn combined_index(self, slot: CardSlot, hand_len: usize) -> Option<usize> {
        let offset = self.shared_offset(hand_len);
        match slot.pile {
            PileKind::Hand => (slot.position < offset.min(hand_len)).then_some(slot.position),
            PileKind::Shared => Some(offset + slot.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_first() {
        let p = IndexPartition::HandFirst;

        assert_eq!(p.resolve(0, 5, 2), Ok(CardSlot::hand(0)));
        assert_eq!(p.resolve(4, 5, 2), Ok(CardSlot::hand(4)));
        assert_eq!(p.resolve(5, 5, 2), Ok(CardSlot::shared(0)));
        assert_eq!(p.resolve(6, 5, 2), Ok(CardSlot::shared(1)));
        assert_eq!(
            p.resolve(7, 5, 2),
            Err(EngineError::IndexOutOfRange { index: 7, addressable: 7 })
        );
    }

    #[test]
    fn test_hand_first_tracks_hand_size() {
        let p = IndexPartition::HandFirst;

        // After a card leaves the hand the shared pool shifts down.
        assert_eq!(p.resolve(4, 4, 2), Ok(CardSlot::shared(0)));
    }

    #[test]
    fn test_fixed_own_slots() {
        let p = IndexPartition::FixedOwnSlots(3);

        assert_eq!(p.resolve(2, 5, 2), Ok(CardSlot::hand(2)));
        assert_eq!(p.resolve(3, 5, 2), Ok(CardSlot::shared(0)));
        assert_eq!(p.resolve(4, 5, 2), Ok(CardSlot::shared(1)));
        assert!(p.resolve(5, 5, 2).is_err());

        // Own slot with no card behind it.
        assert_eq!(
            p.resolve(2, 2, 2),
            Err(EngineError::IndexOutOfRange { index: 2, addressable: 5 })
        );
    }

    #[test]
    fn test_combined_index_round_trips() {
        let p = IndexPartition::HandFirst;
        assert_eq!(p.combined_index(CardSlot::hand(3), 5), Some(3));
        assert_eq!(p.combined_index(CardSlot::shared(1), 5), Some(6));

        let fixed = IndexPartition::FixedOwnSlots(3);
        assert_eq!(fixed.combined_index(CardSlot::shared(0), 5), Some(3));
        assert_eq!(fixed.combined_index(CardSlot::hand(4), 5), None);
    }
}
