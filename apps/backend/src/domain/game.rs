//! Single-game state machine.
//!
//! A [`Game`] starts `InProgress` and moves to `Won` or `Lost` exactly once.
//! The only mutation path is [`Game::submit_guess`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::target::TargetSource;

pub const MSG_CORRECT: &str = "Congratulations! You guessed the number!";
pub const MSG_TOO_LOW: &str = "Too low! Try a higher number";
pub const MSG_TOO_HIGH: &str = "Too high! Try a lower number";
pub const MSG_ALREADY_COMPLETED: &str = "Game already completed";

/// Opaque game handle used as the registry key and in URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One recorded submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub value: i32,
    pub at: OffsetDateTime,
}

/// Result of a single guess submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub message: String,
    pub correct: bool,
    pub game_over: bool,
    pub remaining_attempts: u32,
}

#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    min: i32,
    max: i32,
    target_number: i32,
    max_attempts: u32,
    remaining_attempts: u32,
    status: GameStatus,
    guesses: Vec<Guess>,
}

impl Game {
    /// Build a fresh game, drawing the target from `source`.
    ///
    /// Bounds are taken as given; see [`TargetSource`] for the empty-range
    /// contract.
    pub fn new(
        id: GameId,
        min: i32,
        max: i32,
        max_attempts: u32,
        source: &dyn TargetSource,
    ) -> Self {
        Self {
            id,
            min,
            max,
            target_number: source.pick(min..=max),
            max_attempts,
            remaining_attempts: max_attempts,
            status: GameStatus::InProgress,
            guesses: Vec::new(),
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn target_number(&self) -> i32 {
        self.target_number
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn range_description(&self) -> String {
        format!("The number is between {} and {}", self.min, self.max)
    }

    /// Apply one guess.
    ///
    /// Terminal games are left untouched and answer with the
    /// "already completed" outcome.
    pub fn submit_guess(&mut self, value: i32, at: OffsetDateTime) -> GuessOutcome {
        if self.is_completed() {
            return self.outcome(MSG_ALREADY_COMPLETED.to_string(), false);
        }

        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        self.guesses.push(Guess { value, at });

        if value == self.target_number {
            self.status = GameStatus::Won;
            self.outcome(MSG_CORRECT.to_string(), true)
        } else if self.remaining_attempts == 0 {
            self.status = GameStatus::Lost;
            self.outcome(
                format!("Game over! The number was {}", self.target_number),
                false,
            )
        } else if value < self.target_number {
            self.outcome(MSG_TOO_LOW.to_string(), false)
        } else {
            self.outcome(MSG_TOO_HIGH.to_string(), false)
        }
    }

    fn outcome(&self, message: String, correct: bool) -> GuessOutcome {
        GuessOutcome {
            message,
            correct,
            game_over: self.is_completed(),
            remaining_attempts: self.remaining_attempts,
        }
    }
}
