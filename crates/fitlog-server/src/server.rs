//! Axum server assembly.

use std::time::Instant;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use fitlog_store::Store;

use crate::{exercises, health, plans, sessions, stats};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 5000 }
    }
}

/// Shared state passed to Axum handlers. The store handle is the cheap
/// clone-able facade; all entity state lives behind it.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::handler))
        .route(
            "/api/exercises",
            get(exercises::list).post(exercises::create),
        )
        .route(
            "/api/exercises/{id}",
            get(exercises::get)
                .put(exercises::update)
                .delete(exercises::delete),
        )
        .route("/api/workout-plans", get(plans::list).post(plans::create))
        .route(
            "/api/workout-plans/{id}",
            get(plans::get).put(plans::update).delete(plans::delete),
        )
        .route(
            "/api/workout-sessions",
            get(sessions::list).post(sessions::create),
        )
        .route(
            "/api/workout-sessions/{id}",
            get(sessions::get)
                .put(sessions::update)
                .delete(sessions::delete),
        )
        .route("/api/statistics/weekly", get(stats::weekly))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Create and start the server. Returns a handle that keeps it alive.
pub async fn start(config: ServerConfig, store: Store) -> Result<ServerHandle, std::io::Error> {
    let router = build_router(AppState::new(store));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(port = local_addr.port(), "fitlog server started");

    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(ServerHandle {
        port: local_addr.port(),
        _server: server,
    })
}

/// Handle returned by [`start`] — dropping it does not stop the server, but
/// keeps the join handle around for callers that want it.
pub struct ServerHandle {
    pub port: u16,
    _server: tokio::task::JoinHandle<()>,
}
