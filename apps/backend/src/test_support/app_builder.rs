//! Test service builder: given an AppState, build an initialized Actix
//! **test service** wired like production (trace middleware, problem-details
//! 404s).

use std::path::PathBuf;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use actix_web::{
    web::{self, ServiceConfig},
    App,
};

use crate::config::Transport;
use crate::middleware::{AccessLog, RequestTrace};
use crate::state::app_state::AppState;

/// Function pointer for custom route configuration.
type RoutesFn = Box<dyn FnOnce(&mut ServiceConfig)>;

pub fn create_test_app_builder(state: AppState) -> TestAppBuilder {
    TestAppBuilder {
        state,
        router: Router::Prod(Transport::Both),
        img_dir: None,
    }
}

enum Router {
    Prod(Transport),
    Custom(RoutesFn),
}

pub struct TestAppBuilder {
    state: AppState,
    router: Router,
    img_dir: Option<PathBuf>,
}

impl TestAppBuilder {
    /// Use the production routes for both transports (the default).
    pub fn with_prod_routes(mut self) -> Self {
        self.router = Router::Prod(Transport::Both);
        self
    }

    /// Use the production routes for a single transport.
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.router = Router::Prod(transport);
        self
    }

    /// Use custom routes for a test.
    pub fn with_routes<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ServiceConfig) + 'static,
    {
        self.router = Router::Custom(Box::new(f));
        self
    }

    /// Serve `dir` under `/img`.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.img_dir = Some(dir.into());
        self
    }

    /// Build and initialize the Actix test service.
    pub async fn build(
        self,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>
    {
        let mut app = App::new()
            .wrap(AccessLog)
            .wrap(RequestTrace)
            .app_data(web::Data::new(self.state))
            .default_service(web::to(crate::routes::not_found));

        app = match self.router {
            Router::Prod(transport) => app.configure(crate::routes::configure_for(transport)),
            Router::Custom(f) => app.configure(f),
        };

        if let Some(dir) = self.img_dir {
            app = app.configure(crate::routes::assets::configure_routes(dir));
        }

        actix_web::test::init_service(app).await
    }
}
