//! The game engine: owns the table and sequences turns.

mod engine;

pub use engine::{Discarded, Engine, EngineBuilder, Played};
