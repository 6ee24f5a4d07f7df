use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::{check_mood_len, MoodStore, StoreError};
use crate::models::mood_entry::{MoodEntry, NewMoodEntry};

#[derive(Debug, Clone)]
pub struct PgMoodStore {
    db: PgPool,
}

impl PgMoodStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MoodStore for PgMoodStore {
    async fn create(&self, new: NewMoodEntry) -> Result<MoodEntry, StoreError> {
        check_mood_len(&new)?;

        let entry = sqlx::query_as::<_, MoodEntry>(
            r#"
            INSERT INTO mood_entries (id, mood, "time", feelings, mood_intensity, sadness_level)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, mood, "time", feelings, mood_intensity, sadness_level
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.mood)
        .bind(Utc::now().date_naive())
        .bind(&new.feelings)
        .bind(new.mood_intensity)
        .bind(new.sadness_level)
        .fetch_one(&self.db)
        .await?;

        tracing::debug!(entry_id = %entry.id, "Mood entry inserted");
        Ok(entry)
    }

    async fn get(&self, id: Uuid) -> Result<Option<MoodEntry>, StoreError> {
        let entry = sqlx::query_as::<_, MoodEntry>(
            r#"
            SELECT id, mood, "time", feelings, mood_intensity, sadness_level
            FROM mood_entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<MoodEntry>, StoreError> {
        let entries = sqlx::query_as::<_, MoodEntry>(
            r#"
            SELECT id, mood, "time", feelings, mood_intensity, sadness_level
            FROM mood_entries
            ORDER BY "time" DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await?;
        Ok(())
    }
}
