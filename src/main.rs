use authui::{auth::SentinelVerifier, config::Settings};
use std::net::SocketAddr;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Error loading settings: {}", e);
            std::process::exit(1);
        }
    };
    if settings.public_config().is_none() {
        tracing::warn!("FIREBASE_API_KEY or FIREBASE_AUTH_DOMAIN is not set");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("listening on http://{addr}");

    let server = axum::Server::bind(&addr)
        .serve(authui::app(settings, SentinelVerifier).into_make_service())
        .with_graceful_shutdown(shutdown_signal());
    if let Err(e) = server.await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down");
}
