//! In-memory game registry.
//!
//! `GameStore` owns every [`Game`]. Callers address games by [`GameId`] and
//! only ever receive snapshots or guess outcomes.
//!
//! Uses DashMap for sharded concurrent lookups and one mutex per game, so
//! guesses on the same game are serialized while different games proceed in
//! parallel. The shard guard is dropped before the game lock is taken.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::{Game, GameId, GuessOutcome, TargetSource};
use crate::errors::domain::{DomainError, NotFoundKind};

pub struct GameStore {
    games: DashMap<GameId, Arc<Mutex<Game>>>,
    targets: Box<dyn TargetSource>,
}

impl GameStore {
    pub fn new(targets: impl TargetSource + 'static) -> Self {
        Self {
            games: DashMap::new(),
            targets: Box::new(targets),
        }
    }

    /// Create and register a new game, returning a snapshot of it.
    ///
    /// Bounds and budget are stored as given.
    pub fn create_game(&self, min: i32, max: i32, max_attempts: u32) -> Game {
        // The vacant entry holds the shard lock, so the id is claimed atomically.
        let snapshot = loop {
            if let Entry::Vacant(slot) = self.games.entry(GameId::new()) {
                let game = Game::new(*slot.key(), min, max, max_attempts, self.targets.as_ref());
                let snapshot = game.clone();
                slot.insert(Arc::new(Mutex::new(game)));
                break snapshot;
            }
        };
        let id = snapshot.id();

        info!(game_id = %id, min, max, max_attempts, "game created");
        snapshot
    }

    /// Snapshot of a registered game.
    pub fn get_game(&self, id: GameId) -> Option<Game> {
        let handle = self.handle(id)?;
        let game = handle.lock();
        Some(game.clone())
    }

    /// Apply a guess to the game registered under `id`.
    pub fn submit_guess(&self, id: GameId, value: i32) -> Result<GuessOutcome, DomainError> {
        let handle = self.handle(id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found"))
        })?;

        let mut game = handle.lock();
        let was_completed = game.is_completed();
        let outcome = game.submit_guess(value, OffsetDateTime::now_utc());

        debug!(
            game_id = %id,
            guess = value,
            remaining_attempts = outcome.remaining_attempts,
            "guess submitted"
        );
        if !was_completed && game.is_completed() {
            info!(
                game_id = %id,
                status = ?game.status(),
                guesses = game.guesses().len(),
                "game finished"
            );
        }

        Ok(outcome)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn handle(&self, id: GameId) -> Option<Arc<Mutex<Game>>> {
        self.games.get(&id).map(|entry| entry.value().clone())
    }
}
