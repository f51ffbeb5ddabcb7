//! Domain layer: the guessing game state machine and its target sources.

pub mod game;
pub mod target;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_game;

// Re-exports for ergonomics
pub use game::{Game, GameId, GameStatus, Guess, GuessOutcome};
pub use target::{FixedTarget, RandomTarget, TargetSource};
