//! The match driver.
//!
//! `Game` owns both players, the deck, the table, the hand and truco state
//! machines and the log. The presentation layer holds one `Game` and sends
//! it commands; each accepted command returns the events it caused.

use im::Vector;
use tracing::{debug, info, warn};

use crate::cards::Deck;
use crate::core::{
    ActionRecord, Command, EngineError, GameRng, GameRngState, MatchConfig, Player, PlayerId,
    PlayerMap, Rejection, SEATS,
};
use crate::events::{GameEvent, GameLog};
use crate::rules::{HandState, PlayedCard, Trick, TrickResult, TrucoState, HAND_SIZE};

use super::snapshot::GameSnapshot;

/// A two-player Truco Mineiro match.
#[derive(Clone, Debug)]
pub struct Game {
    config: MatchConfig,
    players: PlayerMap<Player>,
    deck: Deck,
    table: Trick,
    last_trick: Vec<PlayedCard>,
    hand: HandState,
    truco: TrucoState,
    log: GameLog,
    rng: GameRng,
    hand_number: u32,
    match_winner: Option<PlayerId>,
    history: Vector<ActionRecord>,
}

/// Seat that leads hand `n` (1-based). Alternates, seat 0 first.
fn leader_of_hand(n: u32) -> PlayerId {
    if n % 2 == 1 {
        PlayerId::FIRST
    } else {
        PlayerId::SECOND
    }
}

impl Game {
    /// Start a match and deal the first hand from a shuffled deck.
    pub fn new(config: MatchConfig) -> Result<Self, EngineError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut game = Self::blank(config, rng);
        game.deal_hand(None, Vec::new())?;
        Ok(game)
    }

    /// Start a match whose first hand is dealt from `deck` as given, without
    /// shuffling. Later hands are shuffled normally.
    pub fn with_deck(config: MatchConfig, deck: Deck) -> Result<Self, EngineError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut game = Self::blank(config, rng);
        game.deal_hand(Some(deck), Vec::new())?;
        Ok(game)
    }

    /// Rebuild a match by re-applying recorded commands.
    ///
    /// `config` must carry the seed of the original match. A match started
    /// with [`Game::with_deck`] did not shuffle its first hand, so it only
    /// replays through [`Game::replay_with_deck`] with the same deck.
    pub fn replay(
        config: MatchConfig,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<Self, EngineError> {
        Self::new(config)?.reapply(commands)
    }

    /// Rebuild a match that was started with [`Game::with_deck`].
    pub fn replay_with_deck(
        config: MatchConfig,
        deck: Deck,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<Self, EngineError> {
        Self::with_deck(config, deck)?.reapply(commands)
    }

    fn reapply(mut self, commands: impl IntoIterator<Item = Command>) -> Result<Self, EngineError> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(self)
    }

    fn blank(config: MatchConfig, rng: GameRng) -> Self {
        let players = PlayerMap::new(|seat| Player::new(config.player_name(seat)));
        Self {
            config,
            players,
            deck: Deck::build(),
            table: Trick::new(),
            last_trick: Vec::new(),
            hand: HandState::new(PlayerId::FIRST),
            truco: TrucoState::new(),
            log: GameLog::new(),
            rng,
            hand_number: 0,
            match_winner: None,
            history: Vector::new(),
        }
    }

    // === Commands ===

    /// Reveal the turn holder's hand so they can play.
    pub fn start_turn(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        self.apply(Command::StartTurn)
    }

    /// Play the card at `card_index` of `player`'s hand.
    pub fn play_card(
        &mut self,
        player: PlayerId,
        card_index: usize,
    ) -> Result<Vec<GameEvent>, EngineError> {
        self.apply(Command::PlayCard { player, card_index })
    }

    /// The turn holder asks for truco.
    pub fn call_truco(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        self.apply(Command::CallTruco)
    }

    /// The responder accepts the pending bet.
    pub fn accept_truco(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        self.apply(Command::AcceptTruco)
    }

    /// The responder refuses the pending bet, ending the hand.
    pub fn deny_truco(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        self.apply(Command::DenyTruco)
    }

    /// The turn holder raises the bet one step.
    pub fn raise_truco(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        self.apply(Command::RaiseTruco)
    }

    /// Zero both scores and deal a fresh first hand.
    pub fn reset_game(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        self.apply(Command::ResetGame)
    }

    /// Apply any command. Accepted commands are recorded in the history.
    pub fn apply(&mut self, command: Command) -> Result<Vec<GameEvent>, EngineError> {
        let actor = match command {
            Command::PlayCard { player, .. } => player,
            _ => self.hand.current_player(),
        };
        let hand_number = self.hand_number;

        let events = match command {
            Command::StartTurn => self.handle_start_turn(),
            Command::PlayCard { player, card_index } => self.handle_play_card(player, card_index),
            Command::CallTruco => self.handle_call(),
            Command::AcceptTruco => self.handle_accept(),
            Command::DenyTruco => self.handle_deny(),
            Command::RaiseTruco => self.handle_raise(),
            Command::ResetGame => self.handle_reset(),
        }?;

        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(actor, command, hand_number, sequence));
        Ok(events)
    }

    /// Commands that would be accepted right now.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        if self.match_winner.is_some() {
            return vec![Command::ResetGame];
        }

        let current = self.hand.current_player();
        let player = &self.players[current];
        let mut commands = Vec::new();

        if self.truco.pending_response() {
            commands.push(Command::AcceptTruco);
            commands.push(Command::DenyTruco);
            if self.truco.can_raise(current) {
                commands.push(Command::RaiseTruco);
            }
        } else {
            if player.has_started_turn {
                commands.extend((0..player.hand.len()).map(|card_index| Command::PlayCard {
                    player: current,
                    card_index,
                }));
            } else {
                commands.push(Command::StartTurn);
            }

            if !self.truco.is_active() {
                commands.push(Command::CallTruco);
            } else if self.truco.can_raise(current) {
                commands.push(Command::RaiseTruco);
            }
        }

        commands.push(Command::ResetGame);
        commands
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    /// Seat that must act next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.hand.current_player()
    }

    /// Cards on the table for the trick in progress.
    #[must_use]
    pub fn table(&self) -> &Trick {
        &self.table
    }

    /// Cards of the most recently resolved trick in this hand.
    #[must_use]
    pub fn last_trick(&self) -> &[PlayedCard] {
        &self.last_trick
    }

    #[must_use]
    pub fn hand_state(&self) -> &HandState {
        &self.hand
    }

    #[must_use]
    pub fn truco(&self) -> &TrucoState {
        &self.truco
    }

    #[must_use]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Every accepted command since the match began.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Cards left undealt this hand.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// 1-based number of the hand being played.
    #[must_use]
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }

    #[must_use]
    pub fn match_winner(&self) -> Option<PlayerId> {
        self.match_winner
    }

    /// Shuffle seed; pass it to [`MatchConfig::with_seed`] to replay.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Position of the shuffle stream, for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Owned, serializable view of the whole table.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    // === Handlers ===

    fn handle_start_turn(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        const ATTEMPT: &str = "start their turn";
        let player = self.hand.current_player();
        self.ensure_open(player, ATTEMPT)?;

        if self.truco.pending_response() {
            return Err(self.reject(player, ATTEMPT, Rejection::TrucoPending));
        }
        if self.players[player].has_started_turn {
            return Err(self.reject(player, ATTEMPT, Rejection::TurnAlreadyStarted));
        }

        self.players[player].has_started_turn = true;
        let entry = format!("{} started their turn.", self.name(player));
        self.log.push(entry);
        debug!(player = %player, "Turn started");

        Ok(vec![GameEvent::TurnStarted { player }])
    }

    fn handle_play_card(
        &mut self,
        player: PlayerId,
        card_index: usize,
    ) -> Result<Vec<GameEvent>, EngineError> {
        const ATTEMPT: &str = "play a card";
        if player.index() >= SEATS {
            let rejection = Rejection::NoSuchSeat;
            self.log
                .push(format!("{} tried to {}, but {}.", player, ATTEMPT, rejection));
            warn!(seat = player.index(), "Rejected action from unknown seat");
            return Err(EngineError::InvalidAction(rejection));
        }
        self.ensure_open(player, ATTEMPT)?;

        if self.truco.pending_response() {
            return Err(self.reject(player, ATTEMPT, Rejection::TrucoPending));
        }
        if player != self.hand.current_player() {
            return Err(self.reject(player, ATTEMPT, Rejection::NotYourTurn));
        }
        if !self.players[player].has_started_turn {
            return Err(self.reject(player, ATTEMPT, Rejection::TurnNotStarted));
        }
        let Some(card) = self.players[player].take_card(card_index) else {
            return Err(self.reject(player, ATTEMPT, Rejection::NoSuchCard));
        };

        let trick_number = self.hand.trick_count() + 1;
        if self.table.is_empty() {
            self.hand.open_trick(player);
        }
        self.table.push(player, card);
        debug!(player = %player, card = %card, trick = trick_number, "Card played");

        let mut events = vec![GameEvent::CardPlayed {
            player,
            card,
            trick_number,
        }];

        if !self.table.is_complete() {
            // The first card stays face down until the trick completes.
            let entry = format!("{} played a card.", self.name(player));
            self.log.push(entry);
            events.push(self.pass_turn());
            return Ok(events);
        }

        self.resolve_trick(trick_number, &mut events)?;
        Ok(events)
    }

    fn handle_call(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        const ATTEMPT: &str = "call truco";
        let player = self.hand.current_player();
        self.ensure_open(player, ATTEMPT)?;

        let value = match self.truco.call(player) {
            Ok(value) => value,
            Err(rejection) => return Err(self.reject(player, ATTEMPT, rejection)),
        };

        let entry = format!("{} called truco!", self.name(player));
        self.log.push(entry);
        debug!(player = %player, value = value.points(), "Truco called");

        Ok(vec![GameEvent::TrucoCalled { by: player, value }, self.pass_turn()])
    }

    fn handle_accept(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        const ATTEMPT: &str = "accept the truco";
        let player = self.hand.current_player();
        self.ensure_open(player, ATTEMPT)?;

        let value = match self.truco.accept() {
            Ok(value) => value,
            Err(rejection) => return Err(self.reject(player, ATTEMPT, rejection)),
        };

        let entry = format!(
            "{} accepted the truco! The hand is now worth {} points.",
            self.name(player),
            value
        );
        self.log.push(entry);
        debug!(player = %player, value = value.points(), "Truco accepted");

        let mut events = vec![GameEvent::TrucoAccepted { by: player, value }];
        // A seat with a card already on the table cannot play again this trick.
        if self.table.leader() == Some(player) {
            events.push(self.pass_turn());
        }
        Ok(events)
    }

    fn handle_deny(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        const ATTEMPT: &str = "deny the truco";
        let player = self.hand.current_player();
        self.ensure_open(player, ATTEMPT)?;

        let (caller, points) = match self.truco.deny() {
            Ok(owed) => owed,
            Err(rejection) => return Err(self.reject(player, ATTEMPT, rejection)),
        };

        self.players[caller].add_points(points);
        let entry = format!(
            "{} refused the truco! {} gets {} point(s).",
            self.name(player),
            self.name(caller),
            points
        );
        debug!(player = %player, caller = %caller, points, "Truco denied");

        let mut events = vec![GameEvent::TrucoDenied {
            by: player,
            caller,
            points,
        }];
        events.extend(self.end_hand(Some(caller), Some(points), vec![entry])?);
        Ok(events)
    }

    fn handle_raise(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        const ATTEMPT: &str = "raise the truco";
        let player = self.hand.current_player();
        self.ensure_open(player, ATTEMPT)?;

        let value = match self.truco.raise(player) {
            Ok(value) => value,
            Err(rejection) => return Err(self.reject(player, ATTEMPT, rejection)),
        };

        let entry = format!("{} raised to {}!", self.name(player), value);
        self.log.push(entry);
        debug!(player = %player, value = value.points(), "Truco raised");

        Ok(vec![GameEvent::TrucoRaised { by: player, value }, self.pass_turn()])
    }

    fn handle_reset(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.match_winner = None;
        self.hand_number = 0;
        info!("Game reset");

        let dealt = self.deal_hand(None, vec!["New game started.".to_string()])?;
        Ok(vec![GameEvent::GameReset, dealt])
    }

    // === Transitions ===

    fn resolve_trick(
        &mut self,
        trick_number: u8,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        let Some(result) = self.table.result() else {
            return Ok(());
        };
        let plays = self.table.take();

        for play in &plays {
            let entry = format!("{} played {}.", self.name(play.player), play.card);
            self.log.push(entry);
        }
        let entry = match result {
            TrickResult::Won(winner) => format!("{} won trick {}.", self.name(winner), trick_number),
            TrickResult::Tied => format!("Trick {} was tied.", trick_number),
        };
        self.log.push(entry);
        debug!(trick = trick_number, ?result, "Trick resolved");

        self.last_trick = plays;
        events.push(GameEvent::TrickResolved {
            trick_number,
            result,
        });

        match self.hand.record_trick(result) {
            Some(outcome) => events.extend(self.end_hand(outcome.winner(), None, Vec::new())?),
            None => {
                self.sync_turn_flags();
                let next = self.hand.current_player();
                let entry = format!("It's {}'s turn.", self.name(next));
                self.log.push(entry);
                events.push(GameEvent::TurnPassed { to: next });
            }
        }
        Ok(())
    }

    /// Close the hand, score it, and deal the next one.
    ///
    /// `preawarded` carries points already given by a truco refusal, which
    /// suppresses the normal bet award. `carry` entries are appended to the
    /// closing log and repeated at the top of the new hand's log.
    fn end_hand(
        &mut self,
        winner: Option<PlayerId>,
        preawarded: Option<u32>,
        mut carry: Vec<String>,
    ) -> Result<Vec<GameEvent>, EngineError> {
        let points = match (winner, preawarded) {
            (Some(winner), None) => {
                let points = self.truco.hand_value();
                self.players[winner].add_points(points);
                carry.push(format!(
                    "{} won the hand and scored {} point(s)!",
                    self.name(winner),
                    points
                ));
                points
            }
            (Some(_), Some(points)) => points,
            (None, _) => {
                carry.push("Hand drawn. Nobody scored.".to_string());
                0
            }
        };
        info!(hand = self.hand_number, winner = ?winner, points, "Hand ended");

        let mut events = vec![GameEvent::HandEnded { winner, points }];

        if let Some(winner) = winner {
            let score = self.players[winner].score;
            if self.match_winner.is_none() && score >= self.config.target_score {
                self.match_winner = Some(winner);
                carry.push(format!("{} won the match with {} points!", self.name(winner), score));
                info!(winner = %winner, score, "Match won");
                events.push(GameEvent::MatchWon { winner, score });
            }
        }

        for entry in &carry {
            self.log.push(entry.clone());
        }
        events.push(self.deal_hand(None, carry)?);
        Ok(events)
    }

    /// Deal a new hand and reset all per-hand state. Scores persist.
    fn deal_hand(&mut self, deck: Option<Deck>, carry: Vec<String>) -> Result<GameEvent, EngineError> {
        let mut deck = match deck {
            Some(deck) => deck,
            None => {
                let mut deck = Deck::build();
                deck.shuffle(&mut self.rng);
                deck
            }
        };
        let (first, second) = deck.deal(HAND_SIZE)?;

        self.hand_number += 1;
        let leader = leader_of_hand(self.hand_number);

        self.deck = deck;
        self.players[PlayerId::FIRST].receive(first);
        self.players[PlayerId::SECOND].receive(second);
        self.table = Trick::new();
        self.last_trick.clear();
        self.hand = HandState::new(leader);
        self.truco = TrucoState::new();
        self.sync_turn_flags();

        self.log.clear();
        for entry in carry {
            self.log.push(entry);
        }
        let entry = format!("Hand {} dealt. {} leads.", self.hand_number, self.name(leader));
        self.log.push(entry);
        debug!(hand = self.hand_number, leader = %leader, "Dealt new hand");

        Ok(GameEvent::HandDealt {
            hand_number: self.hand_number,
            leader,
        })
    }

    fn pass_turn(&mut self) -> GameEvent {
        let to = self.hand.pass_turn();
        self.sync_turn_flags();
        let entry = format!("It's {}'s turn.", self.name(to));
        self.log.push(entry);
        GameEvent::TurnPassed { to }
    }

    /// Point `is_turn` at the current player and conceal both hands.
    fn sync_turn_flags(&mut self) {
        let current = self.hand.current_player();
        for (seat, player) in self.players.iter_mut() {
            player.is_turn = seat == current;
            player.has_started_turn = false;
        }
    }

    fn ensure_open(&mut self, player: PlayerId, attempt: &str) -> Result<(), EngineError> {
        if self.match_winner.is_some() {
            return Err(self.reject(player, attempt, Rejection::MatchOver));
        }
        Ok(())
    }

    /// Log a refused command and build its error. State is not touched.
    fn reject(&mut self, player: PlayerId, attempt: &str, rejection: Rejection) -> EngineError {
        let entry = format!("{} tried to {}, but {}.", self.name(player), attempt, rejection);
        self.log.push(entry);
        warn!(player = %player, ?rejection, attempt, "Rejected action");
        EngineError::InvalidAction(rejection)
    }

    fn name(&self, seat: PlayerId) -> &str {
        &self.players[seat].name
    }
}
