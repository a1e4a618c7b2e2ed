//! Turn state machine.
//!
//! `Engine` owns the `GameState` and is the only thing that mutates it.
//! Each call validates, mutates, and reports back; a returned error
//! leaves the piles untouched (see `RejectedPlayPolicy` for the one case
//! where the phase still moves).
//!
//! ```text
//!        discard / play
//!   Play ──────────────▶ Draw ──advance──▶ Play (next player)
//!                          │
//!                   request_shuffle
//!                          ▼
//!                       Shuffle ──advance (shuffles)──▶ Play (next player)
//! ```

use im::Vector;
use log::{debug, info, warn};

use crate::cards::{Card, Class, DoorCard, LabyrinthCard};
use crate::core::{
    Action, ActionRecord, EngineError, GameConfig, GameState, Phase, PlayerId, RejectedPlayPolicy,
    HAND_SIZE,
};
use crate::rules::prophecy::{self, ProphecyChoice};
use crate::rules::{EndCondition, GameOutcome, Undecided};
use crate::zones::{Deck, IndexPartition};

/// Result of an accepted discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discarded {
    pub card: LabyrinthCard,
    /// A key was discarded with cards left in the deck.
    pub prophecy: bool,
}

/// Result of an accepted play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Played {
    pub card: LabyrinthCard,
    /// Door awarded by this play, if the labyrinth completed a run.
    pub door: Option<DoorCard>,
}

pub struct Engine {
    config: GameConfig,
    state: GameState,
    end_condition: Box<dyn EndCondition>,
    outcome: Option<GameOutcome>,
    history: Vector<ActionRecord>,
}

impl Engine {
    /// Shuffle a basic deck and deal a game with `config`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        EngineBuilder::from_config(config).build(seed)
    }

    // === Queries ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn current_phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.state.current_player().index()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Actions submitted through `apply`, oldest first.
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    pub fn hand(&self, player: PlayerId) -> &[LabyrinthCard] {
        self.state.hand(player)
    }

    pub fn labyrinth(&self, player: PlayerId) -> &[LabyrinthCard] {
        self.state.labyrinth(player)
    }

    pub fn doors(&self, player: PlayerId) -> &[DoorCard] {
        self.state.doors(player)
    }

    pub fn shared_pool(&self) -> &[LabyrinthCard] {
        self.state.shared_pool()
    }

    pub fn deck(&self) -> &Deck {
        self.state.deck()
    }

    pub fn discard_pile(&self) -> &[Card] {
        self.state.discard_pile()
    }

    pub fn limbo(&self) -> &[Card] {
        self.state.limbo()
    }

    #[must_use]
    pub fn prophecy_pending(&self) -> bool {
        self.state.prophecy_pending()
    }

    /// Cards revealed by the pending prophecy; empty when none is pending.
    pub fn prophecy_window(&self) -> &[Card] {
        if self.state.prophecy_pending() {
            prophecy::window(self.state.deck(), self.config.prophecy_depth)
        } else {
            &[]
        }
    }

    // === Play phase ===

    /// Discard the card at `index`. A key triggers a prophecy.
    pub fn discard(&mut self, index: usize) -> Result<Discarded, EngineError> {
        self.ensure_phase(Phase::Play)?;
        let player = self.state.current_player();

        let card = self.seat_discard(player, index)?;
        self.state.discard.push(card.into());
        debug!("{player} discarded {card}");

        let revealed = prophecy::window(&self.state.deck, self.config.prophecy_depth);
        let prophecy = card.is_key() && !revealed.is_empty();
        if prophecy {
            debug!("prophecy triggered");
            self.state.prophecy_pending = true;
        }

        self.transition(Phase::Draw);
        Ok(Discarded { card, prophecy })
    }

    /// Play the card at `index` into the current player's labyrinth.
    ///
    /// A completed run of one class awards a door of that class while one
    /// is left in the deck. The run's cards stay in the labyrinth.
    pub fn play(&mut self, index: usize) -> Result<Played, EngineError> {
        self.ensure_phase(Phase::Play)?;
        let player = self.state.current_player();
        let partition = self.config.partition;

        let attempt = self.state.seat(player, partition).play_card_at(index);
        let card = match attempt {
            Ok(card) => card,
            Err(err) => {
                debug!("{player} play at {index} rejected: {err}");
                if self.config.rejected_play == RejectedPlayPolicy::ConsumeAction {
                    self.transition(Phase::Draw);
                }
                return Err(err);
            }
        };
        debug!("{player} played {card}");

        let run = self.state.seat(player, partition).can_discover_door();
        let door = run.and_then(|class| self.discover_door(player, class));

        self.transition(Phase::Draw);
        Ok(Played { card, door })
    }

    /// Resolve the pending prophecy. Returns the discarded card.
    ///
    /// `new_order` lists, top first, indices into the window that remains
    /// after the discard. Nothing moves unless both parts are valid.
    pub fn apply_prophecy(
        &mut self,
        discard_index: usize,
        new_order: &[usize],
    ) -> Result<Card, EngineError> {
        self.ensure_active()?;
        if !self.state.prophecy_pending {
            return Err(EngineError::NoProphecyPending);
        }

        let choice = ProphecyChoice::new(discard_index, new_order);
        let state = &mut self.state;
        let card = prophecy::resolve(
            &mut state.deck,
            &mut state.limbo,
            self.config.prophecy_depth,
            &choice,
        )?;

        state.discard.push(card);
        state.prophecy_pending = false;
        Ok(card)
    }

    // === Draw and Shuffle phases ===

    /// Draw until the current hand holds `HAND_SIZE` cards and the shared
    /// pool is full. Returns every card drawn, in draw order.
    ///
    /// Door and dream cards pass through limbo and are shuffled back in.
    /// Fails with `EmptyDeck`, drawing nothing, if the deck cannot supply
    /// enough labyrinth cards.
    pub fn replenish(&mut self) -> Result<Vec<Card>, EngineError> {
        self.ensure_phase(Phase::Draw)?;
        let player = self.state.current_player();
        let state = &mut self.state;

        let hand_need = HAND_SIZE.saturating_sub(state.hands[player].len());
        let shared_need = self
            .config
            .shared_pool_size()
            .saturating_sub(state.shared.len());
        let needed = hand_need + shared_need;

        if needed == 0 {
            return Ok(Vec::new());
        }
        if state.deck.labyrinth_count() < needed {
            return Err(EngineError::EmptyDeck);
        }

        let mut drawn = Vec::with_capacity(needed);
        let mut placed = 0;
        while placed < needed {
            let card = state.deck.draw()?;
            drawn.push(card);
            match card {
                Card::Labyrinth(lab) if state.hands[player].len() < HAND_SIZE => {
                    state.hands[player].push(lab);
                    placed += 1;
                }
                Card::Labyrinth(lab) => {
                    state.shared.push(lab);
                    placed += 1;
                }
                Card::Door(_) | Card::Dream(_) => state.limbo.push(card),
            }
        }

        if !state.limbo.is_empty() {
            let set_aside: Vec<Card> = state.limbo.drain(..).collect();
            debug!("returning {} set-aside cards to the deck", set_aside.len());
            state.deck.shuffle_in(set_aside, &mut state.rng);
        }

        debug!("{player} drew {} cards", drawn.len());
        Ok(drawn)
    }

    /// Move from Draw into the Shuffle phase.
    pub fn request_shuffle(&mut self) -> Result<(), EngineError> {
        self.ensure_phase(Phase::Draw)?;
        self.transition(Phase::Shuffle);
        Ok(())
    }

    /// End the Draw or Shuffle phase and hand the turn to the next player.
    ///
    /// Leaving Shuffle shuffles the deck. Play only ends through a discard
    /// or a play.
    pub fn advance_phase(&mut self) -> Result<Phase, EngineError> {
        self.ensure_active()?;
        if self.state.prophecy_pending {
            return Err(EngineError::ProphecyPending);
        }

        match self.state.phase {
            Phase::Play => {
                return Err(EngineError::WrongPhase {
                    expected: Phase::Draw,
                    actual: Phase::Play,
                })
            }
            Phase::Draw => {}
            Phase::Shuffle => self.shuffle_now(),
        }

        self.state.current_player = self.state.current_player.next(self.state.player_count());
        self.transition(Phase::Play);
        Ok(self.state.phase)
    }

    /// Shuffle the deck without changing phase.
    pub fn shuffle_deck(&mut self) -> Result<(), EngineError> {
        self.ensure_active()?;
        if self.state.prophecy_pending {
            return Err(EngineError::ProphecyPending);
        }
        self.shuffle_now();
        Ok(())
    }

    // === Dispatch ===

    /// Run `action` for the current player and record it in the history.
    pub fn apply(&mut self, action: Action) -> Result<(), EngineError> {
        let player = self.state.current_player();
        let phase = self.state.phase();

        let result = match &action {
            Action::Discard { index } => self.discard(*index).map(drop),
            Action::Play { index } => self.play(*index).map(drop),
            Action::Prophecy { discard, order } => self.apply_prophecy(*discard, order).map(drop),
            Action::Replenish => self.replenish().map(drop),
            Action::RequestShuffle => self.request_shuffle(),
            Action::Advance => self.advance_phase().map(drop),
        };

        self.history.push_back(ActionRecord {
            sequence: self.history.len() as u32,
            player,
            phase,
            action,
            accepted: result.is_ok(),
        });

        result
    }

    // === Internals ===

    fn seat_discard(&mut self, player: PlayerId, index: usize) -> Result<LabyrinthCard, EngineError> {
        self.state
            .seat(player, self.config.partition)
            .discard_card_at(index)
    }

    fn discover_door(&mut self, player: PlayerId, class: Class) -> Option<DoorCard> {
        let state = &mut self.state;
        match state.deck.remove_door_of_class(class, &mut state.rng) {
            Some(door) => {
                state.seat(player, self.config.partition).add_door(door);
                info!("{door} discovered for {player}");
                Some(door)
            }
            None => {
                warn!("{player} completed a {class} run but no {class} door is left");
                None
            }
        }
    }

    fn shuffle_now(&mut self) {
        let state = &mut self.state;
        state.deck.shuffle(&mut state.rng);
    }

    fn ensure_active(&self) -> Result<(), EngineError> {
        match self.outcome {
            Some(outcome) => Err(EngineError::GameOver(outcome)),
            None => Ok(()),
        }
    }

    fn ensure_phase(&self, expected: Phase) -> Result<(), EngineError> {
        self.ensure_active()?;
        if self.state.prophecy_pending {
            return Err(EngineError::ProphecyPending);
        }
        if self.state.phase != expected {
            return Err(EngineError::WrongPhase {
                expected,
                actual: self.state.phase,
            });
        }
        Ok(())
    }

    fn transition(&mut self, phase: Phase) {
        debug!("phase {} -> {}", self.state.phase, phase);
        self.state.phase = phase;
        self.check_end();
    }

    fn check_end(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if let Some(outcome) = self.end_condition.evaluate(&self.state) {
            info!("game over: {outcome}");
            self.outcome = Some(outcome);
        }
    }
}

/// Builder for an `Engine`.
///
/// ```
/// use dream_labyrinth::game::EngineBuilder;
/// use dream_labyrinth::core::{Phase, PlayerId};
///
/// let engine = EngineBuilder::new().player_count(2).build(42).unwrap();
///
/// assert_eq!(engine.current_phase(), Phase::Play);
/// assert_eq!(engine.hand(PlayerId::new(1)).len(), 5);
/// assert_eq!(engine.shared_pool().len(), 2);
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    deck: Option<Deck>,
    keep_deck_order: bool,
    end_condition: Option<Box<dyn EndCondition>>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::from_config(GameConfig::default())
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `config`. It is validated in `build`.
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            deck: None,
            keep_deck_order: false,
            end_condition: None,
        }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn partition(mut self, partition: IndexPartition) -> Self {
        self.config = self.config.with_partition(partition);
        self
    }

    pub fn rejected_play(mut self, policy: RejectedPlayPolicy) -> Self {
        self.config = self.config.with_rejected_play(policy);
        self
    }

    pub fn prophecy_depth(mut self, depth: usize) -> Self {
        self.config = self.config.with_prophecy_depth(depth);
        self
    }

    /// Use `deck` instead of the basic deck.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Skip the opening shuffle. The first hand is then the first
    /// `HAND_SIZE` labyrinth cards of the deck, in order.
    pub fn keep_deck_order(mut self) -> Self {
        self.keep_deck_order = true;
        self
    }

    pub fn end_condition(mut self, condition: impl EndCondition + 'static) -> Self {
        self.end_condition = Some(Box::new(condition));
        self
    }

    /// Shuffle, deal every hand and the shared pool, and start in Play.
    pub fn build(self, seed: u64) -> Result<Engine, EngineError> {
        let config = self.config;
        config.validate()?;

        let deck = self.deck.unwrap_or_else(Deck::basic);
        let mut state = GameState::new(config.player_count, deck, seed);

        if !self.keep_deck_order {
            state.deck.shuffle(&mut state.rng);
        }

        for player in PlayerId::all(config.player_count) {
            let hand = state.deck.deal_hand(&mut state.rng)?;
            state.hands[player] = hand;
        }

        let shared_size = config.shared_pool_size();
        if shared_size > 0 {
            state.shared = state.deck.deal_labyrinth(shared_size, &mut state.rng)?;
        }

        info!(
            "new game: {} player(s), seed {seed}, {} cards left in deck",
            config.player_count,
            state.deck.len()
        );

        let mut engine = Engine {
            config,
            state,
            end_condition: self.end_condition.unwrap_or_else(|| Box::new(Undecided)),
            outcome: None,
            history: Vector::new(),
        };
        engine.check_end();
        Ok(engine)
    }
}
