//! Recipe catalog REST backend.
//!
//! Two surfaces over one document store:
//! - `/api/recipes` — strict CRUD (create, read, update-or-404,
//!   delete-or-404); store failures surface as 5xx.
//! - the legacy paths (`/`, `/recipes`, `/recipe`) — bulk insert,
//!   delete-by-name, and the reseeding reads, answering `-1` instead of an
//!   error when the store fails a bulk operation.
//!
//! The store itself sits behind the [`store::DocumentStore`] trait; the
//! binary runs on [`store::MemoryStore`].
use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{delete, get, post},
    Router,
};

use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod persistence;
pub mod recipe;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

use config::Config;
use routes::{
    create_recipe, delete_recipe, get_recipe, index, legacy_create_recipe, legacy_delete_recipes,
    legacy_list_recipes, list_recipes, update_recipe,
};
use state::AppState;
use store::MemoryStore;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/api/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/", get(index))
        .route("/recipes", get(legacy_list_recipes))
        .route("/recipe", post(legacy_create_recipe))
        .route("/recipe/:name", delete(legacy_delete_recipes))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new(Config::load(), Arc::new(MemoryStore::new()));

    info!("Seeding sample recipes...");
    if let Err(e) = state.persistence.reseed().await {
        error!("Startup seed failed: {e}");
    }

    info!("Starting server...");
    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
