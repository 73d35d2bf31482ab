use actix_web::{web, App, HttpServer};
use tracing::{error, info, warn};
use unfoldfate::config::ServerConfig;
use unfoldfate::middleware::{AccessLog, RequestTrace};
use unfoldfate::routes;
use unfoldfate::state::build_state;
use unfoldfate::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };

    // A deck that fails to load or validate must stop startup before binding.
    let app_state = match build_state().with_deck_path(&config.deck_path).build() {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, deck = %config.deck_path.display(), "Failed to build application state");
            std::process::exit(1);
        }
    };

    let img_dir = if config.img_dir.is_dir() {
        Some(config.img_dir.clone())
    } else {
        warn!(img_dir = %config.img_dir.display(), "Image directory not found; /img will not be served");
        None
    };

    info!(
        host = %config.host,
        port = config.port,
        transport = ?config.transport,
        "Starting UnfoldFate"
    );

    let data = web::Data::new(app_state);
    let transport = config.transport;

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(AccessLog)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure_for(transport))
            .default_service(web::to(routes::not_found));

        if let Some(dir) = img_dir.clone() {
            app = app.configure(routes::assets::configure_routes(dir));
        }
        app
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
