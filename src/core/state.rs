//! Game state: the single owner of every pile on the table.
//!
//! ## Shared piles
//!
//! - Deck (top = first card)
//! - Limbo: cards in transit during a prophecy or a replenish
//! - Discard pile
//! - Shared pool (two-player games only)
//!
//! ## Per-player piles
//!
//! - Hand, labyrinth, doors, each in a `PlayerMap`
//!
//! Turn bookkeeping (phase, current player, pending prophecy) and the RNG
//! live here too, so an `EndCondition` sees everything it may need.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, DoorCard, LabyrinthCard};
use crate::zones::{Deck, IndexPartition, Seat};

/// Turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Play,
    Draw,
    Shuffle,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Play => "Play",
            Phase::Draw => "Draw",
            Phase::Shuffle => "Shuffle",
        };
        f.write_str(name)
    }
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    player_count: usize,

    pub(crate) deck: Deck,
    pub(crate) limbo: Vec<Card>,
    pub(crate) discard: Vec<Card>,
    pub(crate) shared: Vec<LabyrinthCard>,

    pub(crate) hands: PlayerMap<Vec<LabyrinthCard>>,
    pub(crate) labyrinths: PlayerMap<Vec<LabyrinthCard>>,
    pub(crate) doors: PlayerMap<Vec<DoorCard>>,

    pub(crate) current_player: PlayerId,
    pub(crate) phase: Phase,
    pub(crate) prophecy_pending: bool,

    /// Deterministic RNG used for every shuffle.
    pub rng: GameRng,
}

impl GameState {
    /// Empty table around `deck`. Nothing is dealt yet.
    #[must_use]
    pub fn new(player_count: usize, deck: Deck, seed: u64) -> Self {
        Self {
            player_count,
            deck,
            limbo: Vec::new(),
            discard: Vec::new(),
            shared: Vec::new(),
            hands: PlayerMap::with_default(player_count),
            labyrinths: PlayerMap::with_default(player_count),
            doors: PlayerMap::with_default(player_count),
            current_player: PlayerId::new(0),
            phase: Phase::Play,
            prophecy_pending: false,
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn prophecy_pending(&self) -> bool {
        self.prophecy_pending
    }

    // === Piles ===

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn limbo(&self) -> &[Card] {
        &self.limbo
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    pub fn shared_pool(&self) -> &[LabyrinthCard] {
        &self.shared
    }

    pub fn hand(&self, player: PlayerId) -> &[LabyrinthCard] {
        &self.hands[player]
    }

    pub fn labyrinth(&self, player: PlayerId) -> &[LabyrinthCard] {
        &self.labyrinths[player]
    }

    pub fn doors(&self, player: PlayerId) -> &[DoorCard] {
        &self.doors[player]
    }

    /// Doors discovered by all players together.
    #[must_use]
    pub fn total_doors(&self) -> usize {
        self.doors.iter().map(|(_, d)| d.len()).sum()
    }

    /// Borrow `player`'s piles and the shared pool as a `Seat`.
    pub fn seat(&mut self, player: PlayerId, partition: IndexPartition) -> Seat<'_> {
        Seat::new(
            &mut self.hands[player],
            &mut self.shared,
            &mut self.labyrinths[player],
            &mut self.doors[player],
            partition,
        )
    }
}
