//! Wayfarer Server - Travel Booking Platform
//!
//! A Rust REST API server for destination bookings.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayfarer_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("wayfarer_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wayfarer Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone(), config.email.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/profile", get(api::auth::get_profile))
        .route("/auth/profile", patch(api::auth::update_profile))
        // Destinations (public catalog)
        .route("/destinations", get(api::destinations::list_destinations))
        .route("/destinations", post(api::destinations::create_destination))
        .route("/destinations/featured", get(api::destinations::featured_destinations))
        .route("/destinations/search", get(api::destinations::search_destinations))
        .route("/destinations/categories", get(api::destinations::list_categories))
        .route("/destinations/:id", get(api::destinations::get_destination))
        // Bookings
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings/summary", get(api::bookings::booking_summary))
        .route("/bookings/:id", get(api::bookings::get_booking))
        .route("/bookings/:id", patch(api::bookings::update_booking))
        .route("/bookings/:id/cancel", post(api::bookings::cancel_booking))
        // Favorites
        .route("/favorites", get(api::favorites::list_favorites))
        .route("/favorites/toggle", post(api::favorites::toggle_favorite))
        .route("/favorites/status", post(api::favorites::favorites_status))
        .route("/favorites/lists", get(api::favorites::list_favorite_lists))
        .route("/favorites/lists", post(api::favorites::create_favorite_list))
        .route("/favorites/lists/:id", get(api::favorites::get_favorite_list))
        .route("/favorites/lists/:id", patch(api::favorites::update_favorite_list))
        .route("/favorites/lists/:id", delete(api::favorites::delete_favorite_list))
        .route("/favorites/lists/:id/items", post(api::favorites::add_to_favorite_list))
        .route(
            "/favorites/lists/:id/items/:destination_id",
            delete(api::favorites::remove_from_favorite_list),
        )
        // Reviews
        .route("/reviews", get(api::reviews::list_reviews))
        .route("/reviews", post(api::reviews::create_review))
        // Contacts
        .route("/contacts/submit", post(api::contacts::submit_contact))
        .route("/contacts", get(api::contacts::list_contacts))
        .route("/contacts/:id", patch(api::contacts::update_contact))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
