use fitlog_store::Store;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting fitlog server");

    // In-memory store, seeded with the default catalog. Volatile by design:
    // everything resets on restart.
    let store = Store::new();
    tracing::info!(
        exercises = store.list_exercises().len(),
        plans = store.list_workout_plans().len(),
        "store seeded"
    );

    let port = std::env::var("FITLOG_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(|| fitlog_server::ServerConfig::default().port);

    let config = fitlog_server::ServerConfig { port };
    let handle = fitlog_server::start(config, store)
        .await
        .expect("Failed to start server");

    tracing::info!(port = handle.port, "fitlog ready");

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for ctrl+c");

    tracing::info!("Shutting down");
}
