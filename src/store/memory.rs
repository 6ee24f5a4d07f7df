use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{check_mood_len, MoodStore, StoreError};
use crate::models::mood_entry::{MoodEntry, NewMoodEntry};

/// Process-local store. Used when no `DATABASE_URL` is configured and in tests.
#[derive(Debug, Default)]
pub struct MemoryMoodStore {
    entries: RwLock<Vec<MoodEntry>>,
}

impl MemoryMoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn insert(&self, new: NewMoodEntry, time: NaiveDate) -> Result<MoodEntry, StoreError> {
        check_mood_len(&new)?;
        let entry = MoodEntry::from_new(Uuid::new_v4(), time, new);
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    /// Creates an entry with a fixed date so tests don't depend on the clock.
    #[cfg(test)]
    pub async fn create_at(
        &self,
        new: NewMoodEntry,
        time: NaiveDate,
    ) -> Result<MoodEntry, StoreError> {
        self.insert(new, time).await
    }
}

#[async_trait]
impl MoodStore for MemoryMoodStore {
    async fn create(&self, new: NewMoodEntry) -> Result<MoodEntry, StoreError> {
        self.insert(new, Utc::now().date_naive()).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<MoodEntry>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<MoodEntry>, StoreError> {
        let mut entries = self.entries.read().await.clone();
        // Stable sort on a reversed vec: newest first, later inserts first on ties.
        entries.reverse();
        entries.sort_by(|a, b| b.time.cmp(&a.time));
        Ok(entries)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
