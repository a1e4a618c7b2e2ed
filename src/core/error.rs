//! Engine error type.
//!
//! Every failure the engine can report is recoverable: the caller gets the
//! offending index or value back and can re-prompt. State is never left
//! half-mutated by a returned error.

use smallvec::SmallVec;
use thiserror::Error;

use super::state::Phase;
use crate::cards::Symbol;
use crate::rules::GameOutcome;

/// Errors returned by deck, seat, prophecy and engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    /// Raised while dealing. Signals a broken deck setup, not normal play.
    #[error("deck holds {available} labyrinth cards, {needed} needed")]
    InsufficientLabyrinthCards { needed: usize, available: usize },

    #[error("index {index} out of range (addressable: {addressable})")]
    IndexOutOfRange { index: usize, addressable: usize },

    #[error("cannot place a {symbol} card next to another {symbol} card")]
    AdjacentSymbolViolation { symbol: Symbol },

    #[error("{order:?} is not a permutation of 0..{expected_len}")]
    InvalidPermutation {
        order: SmallVec<[usize; 4]>,
        expected_len: usize,
    },

    #[error("{field} value {value} is outside its enumeration")]
    InvalidVariant { field: &'static str, value: u8 },

    #[error("player count must be 1 or 2, got {0}")]
    InvalidPlayerCount(usize),

    #[error("prophecy depth must be at least 1, got {0}")]
    InvalidProphecyDepth(usize),

    #[error("action requires the {expected} phase, current phase is {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("a prophecy must be resolved first")]
    ProphecyPending,

    #[error("no prophecy is pending")]
    NoProphecyPending,

    #[error("game is over: {0}")]
    GameOver(GameOutcome),
}
