use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod games;
pub mod health;
pub mod index;

/// Register every route of the service.
///
/// Query parse failures become `INVALID_QUERY` problems for every route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::InvalidQuery, err.to_string()).into()
    }));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game API: /api/game/**
    cfg.service(web::scope("/api/game").configure(games::configure_routes));

    // Static index page: /
    cfg.configure(index::configure_routes);
}
