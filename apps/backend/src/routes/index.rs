use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / — the single-page client for the game API.
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
