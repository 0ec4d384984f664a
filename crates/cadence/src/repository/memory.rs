use crate::error::RepositoryError;
use crate::repository::EntryRepository;
use async_trait::async_trait;
use cadence_model::entry::{Entry, EntryDraft, EntryPatch};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// Keeps entries in process memory. Used for demos and tests.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    entries: Mutex<HashMap<Uuid, Entry>>,
}

impl MemoryRepository {
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            entries: Mutex::new(entries.into_iter().map(|entry| (entry.id, entry)).collect()),
        }
    }

    fn owned<'a>(entries: &'a mut HashMap<Uuid, Entry>, user_id: Uuid, id: Uuid) -> Result<&'a mut Entry, RepositoryError> {
        entries
            .get_mut(&id)
            .filter(|entry| entry.user_id == user_id)
            .ok_or(RepositoryError::NotFound(id))
    }
}

#[async_trait]
impl EntryRepository for MemoryRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Entry>, RepositoryError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let mut owned: Vec<_> = entries.values().filter(|entry| entry.user_id == user_id).cloned().collect();
        owned.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.created_at.cmp(&a.created_at)));
        Ok(owned)
    }

    async fn insert(&self, user_id: Uuid, draft: EntryDraft) -> Result<Entry, RepositoryError> {
        let entry = draft.into_entry(Uuid::new_v4(), user_id, Utc::now().fixed_offset());
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn update(&self, user_id: Uuid, id: Uuid, patch: EntryPatch) -> Result<(), RepositoryError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        patch.apply_to(Self::owned(&mut entries, user_id, id)?);
        Ok(())
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Self::owned(&mut entries, user_id, id)?;
        entries.remove(&id);
        Ok(())
    }
}
