//! Access log: one `request_completed` event per request.
//!
//! Runs inside the `request` span opened by `RequestTrace`, so the trace id
//! arrives through the span. The event carries the route pattern rather than
//! the raw path, with the game id (when the route has one) as its own field.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::UNMATCHED_ROUTE;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// Fields of one access-log line.
#[derive(Debug, PartialEq, Eq)]
struct CompletedRequest {
    method: String,
    route: String,
    game_id: Option<String>,
    status: StatusCode,
    duration_us: u64,
}

impl CompletedRequest {
    fn emit(&self) {
        let game_id = self.game_id.as_deref().unwrap_or("");
        let status = self.status.as_u16();
        match self.status {
            s if s.is_server_error() => error!(
                http.method = %self.method, http.route = %self.route, game_id,
                http.status_code = status, duration_us = self.duration_us, "request_completed"
            ),
            s if s.is_client_error() => warn!(
                http.method = %self.method, http.route = %self.route, game_id,
                http.status_code = status, duration_us = self.duration_us, "request_completed"
            ),
            _ => info!(
                http.method = %self.method, http.route = %self.route, game_id,
                http.status_code = status, duration_us = self.duration_us, "request_completed"
            ),
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let route = req
            .match_pattern()
            .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, game_id) = match &result {
                // Routing has filled match_info by the time the response exists.
                Ok(res) => (
                    res.status(),
                    res.request().match_info().get("game_id").map(str::to_owned),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            CompletedRequest {
                method,
                route,
                game_id,
                status,
                duration_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            }
            .emit();

            result
        })
    }
}
