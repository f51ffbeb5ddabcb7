//! Game HTTP routes.
//!
//! POST /api/game/new, GET /api/game/{game_id}, POST /api/game/{game_id}/guess

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{Game, GameId};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

pub const DEFAULT_MIN: i32 = 1;
pub const DEFAULT_MAX: i32 = 100;
pub const DEFAULT_MAX_ATTEMPTS: i64 = 10;

fn default_min() -> i32 {
    DEFAULT_MIN
}

fn default_max() -> i32 {
    DEFAULT_MAX
}

fn default_max_attempts() -> i64 {
    DEFAULT_MAX_ATTEMPTS
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameParams {
    #[serde(default = "default_min")]
    pub min: i32,
    #[serde(default = "default_max")]
    pub max: i32,
    /// Signed so that zero and negative budgets reach the range check
    #[serde(default = "default_max_attempts")]
    pub max_attempts: i64,
}

impl NewGameParams {
    fn validate(&self) -> Result<u32, AppError> {
        if self.min > self.max {
            return Err(AppError::invalid(
                ErrorCode::InvalidRange,
                format!("min ({}) must not be greater than max ({})", self.min, self.max),
            ));
        }
        u32::try_from(self.max_attempts)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                AppError::invalid(
                    ErrorCode::InvalidMaxAttempts,
                    format!("maxAttempts must be between 1 and {}", u32::MAX),
                )
            })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameResponse {
    pub game_id: GameId,
    pub max_attempts: u32,
    pub range: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatusResponse {
    pub game_id: GameId,
    pub completed: bool,
    pub attempts_remaining: u32,
    pub guess_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_number: Option<i32>,
}

impl From<&Game> for GameStatusResponse {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id(),
            completed: game.is_completed(),
            attempts_remaining: game.remaining_attempts(),
            guess_count: game.guesses().len(),
            target_number: game.is_completed().then(|| game.target_number()),
        }
    }
}

/// Body of a guess submission. `guess` is optional here so that its absence
/// becomes a `MISSING_GUESS` problem instead of a generic parse failure.
#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    #[serde(default)]
    pub guess: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub message: String,
    pub correct: bool,
    pub game_over: bool,
    pub remaining_attempts: u32,
}

/// POST /api/game/new?min=&max=&maxAttempts=
async fn create_game(
    params: web::Query<NewGameParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let max_attempts = params.validate()?;
    let game = app_state
        .games
        .create_game(params.min, params.max, max_attempts);

    Ok(HttpResponse::Ok().json(NewGameResponse {
        game_id: game.id(),
        max_attempts: game.max_attempts(),
        range: game.range_description(),
    }))
}

/// GET /api/game/{game_id}
///
/// `targetNumber` is only present once the game is completed.
async fn get_game_status(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameStatusResponse>, AppError> {
    let game = app_state.games.get_game(game_id).ok_or_else(|| {
        AppError::not_found(ErrorCode::GameNotFound, format!("Game {game_id} not found"))
    })?;

    Ok(web::Json(GameStatusResponse::from(&game)))
}

/// POST /api/game/{game_id}/guess
///
/// The body is extracted before the path so that a missing guess is reported
/// even when the game id is unknown.
async fn submit_guess(
    body: ValidatedJson<GuessRequest>,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GuessResponse>, AppError> {
    let guess = body.guess.ok_or_else(|| {
        AppError::bad_request(ErrorCode::MissingGuess, "Request body must include a numeric 'guess' field")
    })?;

    let outcome = app_state.games.submit_guess(game_id, guess)?;

    Ok(web::Json(GuessResponse {
        message: outcome.message,
        correct: outcome.correct,
        game_over: outcome.game_over,
        remaining_attempts: outcome.remaining_attempts,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/new").route(web::post().to(create_game)));
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_game_status)));
    cfg.service(web::resource("/{game_id}/guess").route(web::post().to(submit_guess)));
}
