//! End-of-game predicate.
//!
//! The engine does not hardcode when a game ends. It evaluates an
//! `EndCondition` after every phase transition and stops accepting actions
//! once one returns an outcome. Conditions are plain values or closures:
//!
//! ```
//! use dream_labyrinth::core::GameState;
//! use dream_labyrinth::rules::{EndCondition, GameOutcome};
//!
//! let eight_doors = |state: &GameState| (state.total_doors() >= 8).then_some(GameOutcome::Win);
//! let _boxed: Box<dyn EndCondition> = Box::new(eight_doors);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::state::GameState;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Loss,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Win => f.write_str("win"),
            GameOutcome::Loss => f.write_str("loss"),
        }
    }
}

/// Decides whether the game is over.
pub trait EndCondition {
    /// `Some(outcome)` once the game has ended, `None` while it continues.
    fn evaluate(&self, state: &GameState) -> Option<GameOutcome>;
}

impl<F> EndCondition for F
where
    F: Fn(&GameState) -> Option<GameOutcome>,
{
    fn evaluate(&self, state: &GameState) -> Option<GameOutcome> {
        self(state)
    }
}

/// Never ends the game. The default until a product rule is chosen.
#[derive(Clone, Copy, Debug, Default)]
pub struct Undecided;

impl EndCondition for Undecided {
    fn evaluate(&self, _state: &GameState) -> Option<GameOutcome> {
        None
    }
}

/// Win once the table has discovered `target` doors.
#[derive(Clone, Copy, Debug)]
pub struct DoorsCollected {
    pub target: usize,
}

impl EndCondition for DoorsCollected {
    fn evaluate(&self, state: &GameState) -> Option<GameOutcome> {
        (state.total_doors() >= self.target).then_some(GameOutcome::Win)
    }
}

/// Lose once the deck is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeckExhausted;

impl EndCondition for DeckExhausted {
    fn evaluate(&self, state: &GameState) -> Option<GameOutcome> {
        state.deck().is_empty().then_some(GameOutcome::Loss)
    }
}

/// First decided outcome among several conditions, in order.
#[derive(Default)]
pub struct FirstOf {
    conditions: Vec<Box<dyn EndCondition>>,
}

impl FirstOf {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn or(mut self, condition: impl EndCondition + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }
}

impl EndCondition for FirstOf {
    fn evaluate(&self, state: &GameState) -> Option<GameOutcome> {
        self.conditions.iter().find_map(|c| c.evaluate(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Class, DoorCard};
    use crate::core::PlayerId;
    use crate::zones::Deck;

    #[test]
    fn test_undecided_never_fires() {
        let state = GameState::new(1, Deck::new(), 0);
        assert_eq!(Undecided.evaluate(&state), None);
    }

    #[test]
    fn test_doors_collected() {
        let mut state = GameState::new(2, Deck::basic(), 0);
        let rule = DoorsCollected { target: 2 };
        assert_eq!(rule.evaluate(&state), None);

        state.doors[PlayerId::new(0)].push(DoorCard::new(Class::Garden));
        state.doors[PlayerId::new(1)].push(DoorCard::new(Class::Aquarium));
        assert_eq!(rule.evaluate(&state), Some(GameOutcome::Win));
    }

    #[test]
    fn test_deck_exhausted() {
        assert_eq!(
            DeckExhausted.evaluate(&GameState::new(1, Deck::new(), 0)),
            Some(GameOutcome::Loss)
        );
        assert_eq!(DeckExhausted.evaluate(&GameState::new(1, Deck::basic(), 0)), None);
    }

    #[test]
    fn test_closure_and_first_of() {
        let state = GameState::new(1, Deck::new(), 0);
        let always_win = |_: &GameState| Some(GameOutcome::Win);

        let rule = FirstOf::new().or(Undecided).or(DeckExhausted).or(always_win);
        assert_eq!(rule.evaluate(&state), Some(GameOutcome::Loss));
    }
}
