use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use drawlist_api::config::ServerConfig;
use drawlist_api::router::build_router;
use drawlist_api::state::AppState;
use drawlist_events::{IntentBus, LogSink, NotificationDispatcher, NotificationSink, WebhookSink};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drawlist_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = drawlist_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    drawlist_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    drawlist_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Intent bus + dispatcher ---
    let intent_bus = Arc::new(IntentBus::default());

    let sink: Arc<dyn NotificationSink> = match &config.push_gateway_url {
        Some(url) => {
            tracing::info!(gateway = %url, "Using webhook push gateway for notifications");
            Arc::new(WebhookSink::new(url).expect("Failed to build push gateway client"))
        }
        None => {
            tracing::info!("No push gateway configured, notifications go to the log");
            Arc::new(LogSink)
        }
    };

    let dispatcher = NotificationDispatcher::new(pool.clone(), sink);
    let dispatcher_handle = tokio::spawn(dispatcher.run(intent_bus.subscribe()));
    tracing::info!("Notification dispatcher started");

    // --- App state ---
    let shutdown_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        intent_bus: Arc::clone(&intent_bus),
    };

    // --- Router ---
    let app = build_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Drop the intent bus sender to close the broadcast channel. The
    // dispatcher drains what it has and exits.
    drop(intent_bus);
    let _ = tokio::time::timeout(shutdown_timeout, dispatcher_handle).await;
    tracing::info!("Notification dispatcher shut down");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
