use actix_web::{web, HttpRequest, HttpResponse};

use crate::config::Transport;
use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod assets;
pub mod health;
pub mod page;
pub mod tarot_api;

/// Configure every action route (both transports plus health).
///
/// Tests use this directly; `main.rs` uses [`configure_for`] to pick the
/// transport from configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_for(Transport::Both)(cfg);
}

/// Configure health plus the routes of the selected transport(s).
pub fn configure_for(transport: Transport) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        // Health check: /health
        cfg.service(web::scope("/health").configure(health::configure_routes));

        // JSON transport: /api/tarot/**
        if transport.serves_api() {
            cfg.service(web::scope("/api/tarot").configure(tarot_api::configure_routes));
        }

        // Page transport: /, /new-reading, /select_card
        if transport.serves_render() {
            cfg.configure(page::configure_routes);
        }
    }
}

/// Default service: problem-details 404 for unmatched routes.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}
