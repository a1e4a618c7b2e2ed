//! Card model: attributes, the `Card` sum type, and deck lists.
//!
//! ## Key Types
//!
//! - `Class`, `Symbol`, `DreamKind`: closed enumerations
//! - `Card`: `Door`, `Dream` or `Labyrinth`, matched exhaustively
//! - `RawCard`: untyped record, validated into a `Card`
//! - `DeckList`: card counts for building a deck

pub mod attributes;
pub mod card;
pub mod registry;

pub use attributes::{Class, DreamKind, Symbol};
pub use card::{Card, DoorCard, DreamCard, LabyrinthCard, RawCard, Variant};
pub use registry::{DeckList, BASIC_DECK_SIZE};
