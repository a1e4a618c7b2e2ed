//! Game configuration.
//!
//! The collaborator builds a `GameConfig` once, before the deal:
//! - how many players sit at the table (1 or 2)
//! - how combined hand+shared indices are partitioned
//! - whether a rejected play still consumes the turn's action
//!
//! Rule constants that never vary between games live here as `const`s.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::zones::IndexPartition;

/// Cards in a dealt hand.
pub const HAND_SIZE: usize = 5;

/// Slots in the shared pool of a two-player game.
pub const SHARED_POOL_SIZE: usize = 2;

/// Consecutive same-class labyrinth cards needed to discover a door.
pub const DOOR_RUN_LENGTH: usize = 3;

/// Default number of cards revealed by a prophecy.
pub const PROPHECY_DEPTH: usize = 5;

/// What happens to the phase when a play is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectedPlayPolicy {
    /// The rejected play uses up the action; phase moves to Draw.
    #[default]
    ConsumeAction,
    /// Phase stays at Play so the player can try again.
    AllowRetry,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (1 or 2).
    pub player_count: usize,

    /// Mapping from combined indices to hand/shared slots.
    pub partition: IndexPartition,

    /// Phase handling for rejected plays.
    pub rejected_play: RejectedPlayPolicy,

    /// Cards revealed by a prophecy (capped by the deck size).
    pub prophecy_depth: usize,
}

impl Default for GameConfig {
    /// Solitaire with default policies.
    fn default() -> Self {
        Self {
            player_count: 1,
            partition: IndexPartition::default(),
            rejected_play: RejectedPlayPolicy::default(),
            prophecy_depth: PROPHECY_DEPTH,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default policies.
    pub fn new(player_count: usize) -> Result<Self, EngineError> {
        let config = Self {
            player_count,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the values a game cannot start with: 1 or 2 players, and a
    /// prophecy depth of at least one card.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=2).contains(&self.player_count) {
            return Err(EngineError::InvalidPlayerCount(self.player_count));
        }
        if self.prophecy_depth == 0 {
            return Err(EngineError::InvalidProphecyDepth(self.prophecy_depth));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_partition(mut self, partition: IndexPartition) -> Self {
        self.partition = partition;
        self
    }

    #[must_use]
    pub fn with_rejected_play(mut self, policy: RejectedPlayPolicy) -> Self {
        self.rejected_play = policy;
        self
    }

    #[must_use]
    pub fn with_prophecy_depth(mut self, depth: usize) -> Self {
        self.prophecy_depth = depth;
        self
    }

    /// Shared pool size for this table: empty in solitaire games.
    #[must_use]
    pub fn shared_pool_size(&self) -> usize {
        if self.player_count == 2 {
            SHARED_POOL_SIZE
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(1).unwrap();

        assert_eq!(config.player_count, 1);
        assert_eq!(config.partition, IndexPartition::HandFirst);
        assert_eq!(config.rejected_play, RejectedPlayPolicy::ConsumeAction);
        assert_eq!(config.prophecy_depth, 5);
        assert_eq!(config.shared_pool_size(), 0);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(2)
            .unwrap()
            .with_partition(IndexPartition::FixedOwnSlots(3))
            .with_rejected_play(RejectedPlayPolicy::AllowRetry);

        assert_eq!(config.partition, IndexPartition::FixedOwnSlots(3));
        assert_eq!(config.rejected_play, RejectedPlayPolicy::AllowRetry);
        assert_eq!(config.shared_pool_size(), 2);
    }

    #[test]
    fn test_invalid_player_count() {
        assert_eq!(GameConfig::new(0), Err(EngineError::InvalidPlayerCount(0)));
        assert_eq!(GameConfig::new(3), Err(EngineError::InvalidPlayerCount(3)));
    }

    #[test]
    fn test_zero_prophecy_depth_rejected() {
        let config = GameConfig::new(1).unwrap().with_prophecy_depth(0);
        assert_eq!(config.validate(), Err(EngineError::InvalidProphecyDepth(0)));

        let config = config.with_prophecy_depth(1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(2)
            .unwrap()
            .with_partition(IndexPartition::FixedOwnSlots(3));

        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
