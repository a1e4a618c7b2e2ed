//! Labyrinth placement and door discovery rules.

use crate::cards::{Class, LabyrinthCard};
use crate::core::config::DOOR_RUN_LENGTH;
use crate::core::EngineError;

/// A card may not follow a card with the same symbol.
///
/// `end` is the labyrinth's last card; an empty labyrinth accepts anything.
pub fn check_placement(end: Option<LabyrinthCard>, card: LabyrinthCard) -> Result<(), EngineError> {
    match end {
        Some(end) if end.symbol == card.symbol => Err(EngineError::AdjacentSymbolViolation {
            symbol: card.symbol,
        }),
        _ => Ok(()),
    }
}

/// Class of the door unlocked by the labyrinth's tail, if any.
///
/// Only the last `DOOR_RUN_LENGTH` cards are inspected.
#[must_use]
pub fn door_run(labyrinth: &[LabyrinthCard]) -> Option<Class> {
    let tail = labyrinth.len().checked_sub(DOOR_RUN_LENGTH).map(|start| &labyrinth[start..])?;
    let class = tail[0].class;
    tail.iter().all(|c| c.class == class).then_some(class)
}
