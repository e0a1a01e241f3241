use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod flash;
pub mod handlers;
pub mod state;
pub mod views;

pub use state::{AppState, ServerConfig};

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::about))
        .route("/search", get(handlers::search_page).post(handlers::search_submit))
        .route("/api/check", get(handlers::api_check))
        .route("/api/summary", get(handlers::api_summary))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState) -> std::io::Result<()> {
    let address = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("🌐 Listening on http://{}", address);
    axum::serve(listener, create_app(state).await).await
}

pub mod prelude {
    pub use nc_core::{ResultRecord, Result, Error};
    pub use crate::{AppState, ServerConfig};
}
