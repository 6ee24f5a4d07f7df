use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

use crate::error::AppResult;
use crate::models::mood_entry::CreateMoodEntryForm;
use crate::templates::{self, Page};
use crate::AppState;

pub async fn show_main(State(state): State<AppState>) -> AppResult<Page> {
    let entries = state.store.list().await?;
    Ok(templates::main_page(&state.config.app_name, &entries))
}

pub async fn create_mood_entry_form(State(state): State<AppState>) -> Page {
    templates::create_mood_entry_page(
        &state.config.app_name,
        &CreateMoodEntryForm::default(),
        &[],
    )
}

pub async fn create_mood_entry(
    State(state): State<AppState>,
    Form(form): Form<CreateMoodEntryForm>,
) -> AppResult<Response> {
    let new = match form.clean() {
        Ok(new) => new,
        Err(errors) => {
            tracing::debug!(error_count = errors.len(), "Rejected mood entry form");
            let page = templates::create_mood_entry_page(&state.config.app_name, &form, &errors)
                .with_status(StatusCode::UNPROCESSABLE_ENTITY);
            return Ok(page.into_response());
        }
    };

    let entry = state.store.create(new).await?;
    tracing::info!(
        entry_id = %entry.id,
        is_happy = entry.is_happy(),
        "Mood entry created"
    );

    Ok(Redirect::to("/main/").into_response())
}
