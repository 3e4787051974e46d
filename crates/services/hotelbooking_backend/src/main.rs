// File: services/hotelbooking_backend/src/main.rs
mod app_state;

use axum::Router;
use hotelbooking_common::logging;
use hotelbooking_config::load_config;
use hotelbooking_core::{routes::routes as booking_routes, BookingState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// The booking routes under `/api`, plus Swagger UI with the openapi feature.
fn build_router(state: Arc<BookingState>) -> Router {
    #[allow(unused_mut)] // only mutated with the openapi feature
    let mut app = Router::new().nest("/api", booking_routes(state));

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use hotelbooking_core::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Hotel Booking API",
                version = "0.1.0",
                description = "Room availability and booking",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    app.layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    logging::init();

    let config = Arc::new(
        logging::log_result(load_config(), "Configuration loaded", "Failed to load config")
            .expect("Failed to load config"),
    );
    let state = logging::log_result(
        app_state::build_state(config.clone()).await,
        "Booking storage ready",
        "Failed to initialize booking storage",
    )
    .expect("Failed to initialize booking storage");

    let app = build_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
