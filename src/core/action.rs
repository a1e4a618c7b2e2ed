//! Action representation and history.
//!
//! An `Action` is one request from the turn loop. `Engine::apply` takes an
//! action, runs it, and appends an `ActionRecord` to the history whether
//! or not it was accepted, so a renderer can replay the whole game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::state::Phase;

/// One thing the current player asks the engine to do.
///
/// ```
/// use dream_labyrinth::core::Action;
///
/// let play = Action::Play { index: 2 };
/// let prophecy = Action::prophecy(0, &[1, 0]);
/// assert_ne!(play, prophecy);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Discard the card at a combined index.
    Discard { index: usize },
    /// Play the card at a combined index into the labyrinth.
    Play { index: usize },
    /// Resolve a pending prophecy.
    ///
    /// `order` lists, top first, indices into the window left after the
    /// discard.
    Prophecy {
        discard: usize,
        order: SmallVec<[usize; 4]>,
    },
    /// Refill the hand (and shared pool) during Draw.
    Replenish,
    /// Enter the Shuffle phase from Draw.
    RequestShuffle,
    /// Leave Draw or Shuffle.
    Advance,
}

impl Action {
    #[must_use]
    pub fn prophecy(discard: usize, order: &[usize]) -> Self {
        Action::Prophecy {
            discard,
            order: SmallVec::from_slice(order),
        }
    }
}

/// A recorded action with the context it was attempted in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the game's history, starting at 0.
    pub sequence: u32,

    /// Player who attempted the action.
    pub player: PlayerId,

    /// Phase the action was attempted in.
    pub phase: Phase,

    pub action: Action,

    /// Whether the engine accepted the action.
    pub accepted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prophecy_constructor() {
        let action = Action::prophecy(3, &[2, 0, 1]);
        match action {
            Action::Prophecy { discard, order } => {
                assert_eq!(discard, 3);
                assert_eq!(order.as_slice(), &[2, 0, 1]);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_record_serde() {
        let record = ActionRecord {
            sequence: 4,
            player: PlayerId::new(1),
            phase: Phase::Play,
            action: Action::Discard { index: 0 },
            accepted: true,
        };

        let json = serde_json::to_string(&record).unwrap();
        let restored: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }
}
