//! Page transport: the reading as HTML, mutated through htmx fragments.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{parse_card_index, Reader};
use crate::render;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectCardForm {
    pub card_index: Option<String>,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// GET /
async fn index(reader: Reader, app_state: web::Data<AppState>) -> HttpResponse {
    let view = app_state.readings.view(reader.id());
    html(render::index_page(&view))
}

/// POST /new-reading
async fn new_reading(reader: Reader, app_state: web::Data<AppState>) -> HttpResponse {
    let view = app_state.readings.new_reading(reader.id());
    html(render::update_fragment(&view))
}

/// POST /select_card
///
/// Always answers with the current fragment; a missing, non-numeric,
/// out-of-range or repeated selection simply leaves the reading as it was.
async fn select_card(
    reader: Reader,
    form: web::Form<SelectCardForm>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let view = match parse_card_index(form.card_index.as_deref()) {
        Ok(index) => app_state.readings.select_card(reader.id(), index).1,
        Err(reason) => {
            debug!(?reason, raw = ?form.card_index, "Selection ignored");
            app_state.readings.view(reader.id())
        }
    };
    html(render::update_fragment(&view))
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid form body: {err}")).into()
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .route("/", web::get().to(index))
        .route("/new-reading", web::post().to(new_reading))
        .route("/select_card", web::post().to(select_card));
}
