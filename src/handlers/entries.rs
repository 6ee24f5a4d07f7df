use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::mood_entry::MoodEntryView;
use crate::AppState;

pub async fn list_entries(State(state): State<AppState>) -> AppResult<Json<Vec<MoodEntryView>>> {
    let entries = state.store.list().await?;
    Ok(Json(entries.into_iter().map(MoodEntryView::from).collect()))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
) -> AppResult<Json<MoodEntryView>> {
    // A malformed id can't name an entry, so it's a 404 like any other miss.
    let entry_id =
        Uuid::parse_str(&entry_id).map_err(|_| AppError::NotFound("Mood entry not found".into()))?;

    let entry = state
        .store
        .get(entry_id)
        .await?
        .ok_or(AppError::NotFound("Mood entry not found".into()))?;

    Ok(Json(entry.into()))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".into())
}
