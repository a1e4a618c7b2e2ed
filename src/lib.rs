//! # dream-labyrinth
//!
//! Rules engine for a solitaire or two-player card game. Players draw from a
//! shared deck, build a private labyrinth of symbol-tagged cards, and
//! discover class doors by completing runs of one class.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `Engine` owns every pile. Per-player `Seat`s only borrow.
//!
//! 2. **Recoverable errors**: Bad input comes back as an `EngineError`
//!    with the offending value; nothing panics and nothing half-applies.
//!
//! 3. **Injected randomness**: Every shuffle takes its RNG from the caller,
//!    so a seed reproduces a game exactly.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, RNG, configuration, errors
//! - `cards`: card model and deck lists
//! - `zones`: deck, combined-index addressing, seats
//! - `rules`: placement, door runs, prophecy, end-of-game predicate
//! - `game`: the turn state machine
//!
//! Console I/O, rendering and seeding belong to the embedding program.
//!
//! ```
//! use dream_labyrinth::game::EngineBuilder;
//! use dream_labyrinth::core::{EngineError, Phase, PlayerId};
//!
//! let mut engine = EngineBuilder::new().build(7)?;
//! let played = engine.play(0)?;
//!
//! assert_eq!(engine.labyrinth(PlayerId::new(0)), &[played.card]);
//! assert_eq!(engine.current_phase(), Phase::Draw);
//! # Ok::<(), EngineError>(())
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, EngineError, GameConfig, GameRng, GameRngState, GameState, Phase,
    PlayerId, PlayerMap, RejectedPlayPolicy,
};

pub use crate::cards::{Card, Class, DeckList, DoorCard, DreamCard, DreamKind, LabyrinthCard, RawCard, Symbol, Variant};

pub use crate::zones::{CardSlot, Deck, IndexPartition, PileKind, Seat};

pub use crate::rules::{DeckExhausted, DoorsCollected, EndCondition, FirstOf, GameOutcome, ProphecyChoice, Undecided};

pub use crate::game::{Discarded, Engine, EngineBuilder, Played};
