use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::GameId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Extracts the `{game_id}` path segment as a [`GameId`].
///
/// Only the format is checked here; existence is decided by the store. A
/// segment that is not a UUID can never name a registered game, so it is
/// reported as not found rather than as a malformed request.
impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_game_id(req.match_info().get("game_id")))
    }
}

fn parse_game_id(raw: Option<&str>) -> Result<GameId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::internal("route is missing the game_id path parameter")
    })?;

    raw.parse::<GameId>().map_err(|_| {
        AppError::not_found(ErrorCode::GameNotFound, format!("Game {raw} not found"))
    })
}
