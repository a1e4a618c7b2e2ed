//! Core engine types: players, state, actions, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{
    GameConfig, RejectedPlayPolicy, DOOR_RUN_LENGTH, HAND_SIZE, PROPHECY_DEPTH, SHARED_POOL_SIZE,
};
pub use error::EngineError;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase};
