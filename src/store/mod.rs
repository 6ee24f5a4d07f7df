//! Mood record persistence.
//!
//! Handlers only see [`MoodStore`]; `main` picks the backend from
//! [`Config`](crate::config::Config) at startup.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::mood_entry::{MoodEntry, NewMoodEntry, MOOD_MAX_CHARS};

pub mod memory;
pub mod postgres;

pub use memory::MemoryMoodStore;
pub use postgres::PgMoodStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("mood label is {0} characters, limit is 255")]
    MoodTooLong(usize),

    #[error("mood store query failed: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait MoodStore: Send + Sync {
    /// Insert a new entry dated today (UTC).
    async fn create(&self, new: NewMoodEntry) -> Result<MoodEntry, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<MoodEntry>, StoreError>;

    /// All entries, newest `time` first.
    async fn list(&self) -> Result<Vec<MoodEntry>, StoreError>;

    /// Cheap round trip used by `/readyz`.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Same bound as the `VARCHAR(255)` column, so every backend rejects the
/// same inputs.
pub(crate) fn check_mood_len(new: &NewMoodEntry) -> Result<(), StoreError> {
    let len = new.mood.chars().count();
    if len > MOOD_MAX_CHARS {
        return Err(StoreError::MoodTooLong(len));
    }
    Ok(())
}
