//! JSON transport under `/api/tarot`.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::{IgnoreReason, ReadingView, SelectOutcome};
use crate::extractors::{parse_card_index, Reader};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Outcome {
    Revealed,
    Unchanged,
}

#[derive(Debug, Serialize)]
struct SelectResponse {
    outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<IgnoreReason>,
    view: ReadingView,
}

impl SelectResponse {
    fn new(outcome: SelectOutcome, view: ReadingView) -> Self {
        match outcome {
            SelectOutcome::Revealed { position } => Self {
                outcome: Outcome::Revealed,
                position: Some(position),
                reason: None,
                view,
            },
            SelectOutcome::Ignored(reason) => Self {
                outcome: Outcome::Unchanged,
                position: None,
                reason: Some(reason),
                view,
            },
        }
    }
}

/// GET /api/tarot
async fn get_reading(reader: Reader, app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(app_state.readings.view(reader.id()))
}

/// POST /api/tarot/reset
async fn reset(reader: Reader, app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(app_state.readings.new_reading(reader.id()))
}

/// POST /api/tarot/reveal/{index}
///
/// Selection problems are not errors: the response is 200 with
/// `outcome: "unchanged"` and the reason.
async fn reveal(
    reader: Reader,
    index: web::Path<String>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let response = match parse_card_index(Some(index.as_str())) {
        Ok(index) => {
            let (outcome, view) = app_state.readings.select_card(reader.id(), index);
            SelectResponse::new(outcome, view)
        }
        Err(reason) => SelectResponse::new(
            SelectOutcome::Ignored(reason),
            app_state.readings.view(reader.id()),
        ),
    };
    HttpResponse::Ok().json(response)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_reading))
        .route("/reset", web::post().to(reset))
        .route("/reveal/{index}", web::post().to(reveal));
}
