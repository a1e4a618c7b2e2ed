//! Game rules.
//!
//! - `labyrinth`: placement (no adjacent equal symbols) and door runs
//! - `prophecy`: peek/discard/reorder over the top of the deck
//! - `engine`: the pluggable end-of-game predicate
//!
//! The turn state machine that sequences these lives in `game`.

pub mod engine;
pub mod labyrinth;
pub mod prophecy;

pub use engine::{DeckExhausted, DoorsCollected, EndCondition, FirstOf, GameOutcome, Undecided};
pub use prophecy::ProphecyChoice;
