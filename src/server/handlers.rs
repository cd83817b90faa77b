use super::AppState;
use crate::prelude::{AppError, Contact, ContactDraft, ContactStore};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use chrono::Local;
use std::path::{Component, Path as FsPath};
use tracing::{debug, info};

/// Runs a store operation on the blocking pool.
/// The json backend writes the file while its lock is held.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&dyn ContactStore) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|e| AppError::Store(e.to_string()))?
}

pub(crate) async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, AppError> {
    Ok(Json(with_store(&state, |store| store.find_all()).await?))
}

pub(crate) async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, AppError> {
    with_store(&state, move |store| store.find_by_id(&id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Person".to_string()))
}

pub(crate) async fn create_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let contact = ContactDraft::from_body(&body)?.validate()?;
    debug!(name = %contact.name, number = %contact.number, "create request");

    let created = with_store(&state, move |store| store.insert(contact)).await?;
    info!(id = %created.id, "contact created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Body is checked before the id, so a bad body on a bad id reports the body.
pub(crate) async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Contact>, AppError> {
    let contact = ContactDraft::from_body(&body)?.validate()?;

    let updated = with_store(&state, move |store| store.update_by_id(&id, contact))
        .await?
        .ok_or_else(|| AppError::NotFound("Person".to_string()))?;
    info!(id = %updated.id, "contact updated");
    Ok(Json(updated))
}

pub(crate) async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if let Some(removed) = with_store(&state, move |store| store.remove_by_id(&id)).await? {
        info!(id = %removed.id, "contact deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn info(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let count = with_store(&state, |store| store.count()).await?;
    Ok(Html(info_fragment(count, &Local::now().to_rfc2822())))
}

pub(crate) fn info_fragment(count: usize, timestamp: &str) -> String {
    format!(
        "<div>Phonebook has info for {} people<br/>{}</div>",
        count, timestamp
    )
}

/// Serves frontend files for every path no API route claimed.
pub(crate) async fn static_asset(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(root) = state.static_dir.as_ref() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let relative = uri.path().trim_start_matches('/');
    let relative = FsPath::new(if relative.is_empty() {
        "index.html"
    } else {
        relative
    });

    if relative
        .components()
        .any(|part| !matches!(part, Component::Normal(_)))
    {
        return StatusCode::NOT_FOUND.into_response();
    }

    match tokio::fs::read(root.join(relative)).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(relative))], bytes).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

fn content_type_for(path: &FsPath) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
