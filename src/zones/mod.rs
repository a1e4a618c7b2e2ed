//! Card piles: the draw deck, combined-index addressing, and per-player seats.
//!
//! All piles are owned by `GameState`. `Seat` only borrows them, so there
//! is exactly one copy of every card on the table.

pub mod deck;
pub mod pile;
pub mod seat;

pub use deck::Deck;
pub use pile::{CardSlot, IndexPartition, PileKind};
pub use seat::Seat;
