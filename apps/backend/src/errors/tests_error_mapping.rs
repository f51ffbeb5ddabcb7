// Error mapping from domain errors to HTTP errors, no HTTP server involved.
use actix_web::ResponseError;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_game_not_found_to_404() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no such game").into();
    assert_eq!(app.code(), ErrorCode::GameNotFound);
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.detail(), "no such game");
}

#[test]
fn rule_violations_are_400_validation_errors() {
    let app = AppError::invalid(ErrorCode::InvalidRange, "min (9) must not be greater than max (1)");
    assert!(matches!(app, AppError::Validation { .. }));
    assert_eq!(app.code(), ErrorCode::InvalidRange);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn response_error_uses_problem_json() {
    let app = AppError::bad_request(ErrorCode::MissingGuess, "guess is required");
    let resp = app.error_response();

    assert_eq!(resp.status().as_u16(), 400);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(content_type, "application/problem+json");
    assert_eq!(
        resp.headers().get("x-trace-id").and_then(|v| v.to_str().ok()),
        Some("unknown")
    );
}

#[test]
fn humanized_titles() {
    assert_eq!(AppError::humanize_code("GAME_NOT_FOUND"), "Game Not Found");
    assert_eq!(AppError::humanize_code("MISSING_GUESS"), "Missing Guess");
}
