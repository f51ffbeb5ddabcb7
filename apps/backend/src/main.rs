use actix_web::{web, App, HttpServer};
use guess_backend::config::ServerConfig;
use guess_backend::middleware::cors::cors_middleware;
use guess_backend::middleware::request_trace::RequestTrace;
use guess_backend::middleware::security_headers::SecurityHeaders;
use guess_backend::middleware::structured_logger::StructuredLogger;
use guess_backend::routes;
use guess_backend::state::app_state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = telemetry::init_tracing() {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    // The store lives for the whole process; handlers reach it through web::Data.
    let data = web::Data::new(AppState::with_entropy());

    info!(host = %config.host, port = config.port, "starting guess backend");

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
