//! Prophecy: peek at the top of the deck, discard one, reorder the rest.
//!
//! The window is the top `min(depth, deck.len())` cards. A choice names one
//! window card to discard and an order for the remaining cards. Choices are
//! validated against the window before anything moves, so a bad choice
//! leaves the deck exactly as it was.

use log::debug;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::EngineError;
use crate::zones::Deck;

/// A player's answer to a prophecy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProphecyChoice {
    /// Window index of the card to discard.
    pub discard: usize,
    /// New top-first order, as indices into the window after the discard.
    pub order: SmallVec<[usize; 4]>,
}

impl ProphecyChoice {
    #[must_use]
    pub fn new(discard: usize, order: &[usize]) -> Self {
        Self {
            discard,
            order: SmallVec::from_slice(order),
        }
    }

    /// Check the choice against a window of `window_len` cards.
    pub fn validate(&self, window_len: usize) -> Result<(), EngineError> {
        if self.discard >= window_len {
            return Err(EngineError::IndexOutOfRange {
                index: self.discard,
                addressable: window_len,
            });
        }

        let remaining = window_len - 1;
        if !is_permutation(&self.order, remaining) {
            return Err(EngineError::InvalidPermutation {
                order: self.order.clone(),
                expected_len: remaining,
            });
        }

        Ok(())
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen: SmallVec<[bool; 8]> = SmallVec::from_elem(false, len);
    order.iter().all(|&i| i < len && !std::mem::replace(&mut seen[i], true))
}

/// The cards a prophecy would reveal.
pub fn window(deck: &Deck, depth: usize) -> &[Card] {
    deck.peek(depth)
}

/// Apply `choice` to the top of `deck`.
///
/// The window passes through `limbo` while it is rearranged; limbo holds
/// no extra cards afterwards. Returns the discarded card.
pub fn resolve(
    deck: &mut Deck,
    limbo: &mut Vec<Card>,
    depth: usize,
    choice: &ProphecyChoice,
) -> Result<Card, EngineError> {
    let window_len = window(deck, depth).len();
    choice.validate(window_len)?;

    let base = limbo.len();
    limbo.extend(deck.take_top(window_len));

    let discarded = limbo.remove(base + choice.discard);
    let reordered: SmallVec<[Card; 4]> = choice.order.iter().map(|&i| limbo[base + i]).collect();
    limbo.truncate(base);

    debug!(
        "prophecy discarded {discarded}, returned {} cards on top",
        reordered.len()
    );
    deck.place_on_top(reordered);

    Ok(discarded)
}
