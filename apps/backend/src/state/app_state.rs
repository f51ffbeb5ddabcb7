use std::sync::Arc;

use time::OffsetDateTime;

use crate::domain::{RandomTarget, TargetSource};
use crate::services::game_store::GameStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Registry of every live game
    pub games: Arc<GameStore>,
    /// Process start, reported by the health endpoint
    pub started_at: OffsetDateTime,
}

impl AppState {
    /// Create a new AppState around an already-built store
    pub fn new(games: GameStore) -> Self {
        Self {
            games: Arc::new(games),
            started_at: OffsetDateTime::now_utc(),
        }
    }

    /// Production state: targets drawn from OS entropy
    pub fn with_entropy() -> Self {
        Self::new(GameStore::new(RandomTarget::from_entropy()))
    }

    /// State whose store draws targets from the given source
    pub fn with_targets(targets: impl TargetSource + 'static) -> Self {
        Self::new(GameStore::new(targets))
    }
}
