//! Router construction and server startup.

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // IPCA history
        .route("/histIPCA", get(routes::historico::list))
        .route("/histIPCA/calculo", get(routes::historico::calculate))
        .route("/histIPCA/{id}", get(routes::historico::get))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until Ctrl+C.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let records = state.repository.len();
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("IPCA server listening on http://{} ({} records)", addr, records);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /histIPCA[?ano=YYYY]");
    tracing::info!("  GET  /histIPCA/calculo?valor=&mesInicial=&anoInicial=&mesFinal=&anoFinal=");
    tracing::info!("  GET  /histIPCA/{{id}}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutting down...");
}
