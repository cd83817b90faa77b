pub mod config;
mod handlers;
mod middleware;

use crate::prelude::{AppError, ContactStore};
use crate::store::parse_storage_type;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

pub use config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self {
            store,
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/persons",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/api/persons/:id",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/info", get(handlers::info))
        .fallback(handlers::static_asset)
        .layer(axum::middleware::from_fn(middleware::cors_middleware))
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        .with_state(state)
}

/// Opens the configured store and serves the API until SIGINT/SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<(), AppError> {
    let store = parse_storage_type(config.storage, &config.json_storage_path)?;
    info!(
        storage = store.get_medium(),
        contacts = store.count()?,
        "contact store ready"
    );

    let mut state = AppState::new(store);
    if let Some(dir) = &config.static_dir {
        if dir.is_dir() {
            state = state.with_static_dir(dir);
        } else {
            warn!(dir = %dir.display(), "static directory not found, frontend assets disabled");
        }
    }

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server running on port {}", config.port);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => error_body(StatusCode::BAD_REQUEST, msg),
            AppError::MalformedId(raw) => {
                warn!(id = %raw, "malformatted id");
                error_body(StatusCode::BAD_REQUEST, "malformatted id".to_string())
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            other => {
                error!(error = %other, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
