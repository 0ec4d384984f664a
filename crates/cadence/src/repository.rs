use crate::error::RepositoryError;
use async_trait::async_trait;
use cadence_model::entry::{Entry, EntryDraft, EntryPatch};
use std::sync::Arc;
use uuid::Uuid;

mod db;
mod memory;

pub use db::DbRepository;
pub use memory::MemoryRepository;

/// Remote side of the store. Every operation is scoped to the entries owned by `user_id`.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// The user's entries, newest `date` first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Entry>, RepositoryError>;

    /// Stores a new entry and returns it with its assigned id and creation time.
    async fn insert(&self, user_id: Uuid, draft: EntryDraft) -> Result<Entry, RepositoryError>;

    async fn update(&self, user_id: Uuid, id: Uuid, patch: EntryPatch) -> Result<(), RepositoryError>;

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<R: EntryRepository + ?Sized> EntryRepository for Arc<R> {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Entry>, RepositoryError> {
        (**self).list_for_user(user_id).await
    }

    async fn insert(&self, user_id: Uuid, draft: EntryDraft) -> Result<Entry, RepositoryError> {
        (**self).insert(user_id, draft).await
    }

    async fn update(&self, user_id: Uuid, id: Uuid, patch: EntryPatch) -> Result<(), RepositoryError> {
        (**self).update(user_id, id, patch).await
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        (**self).delete(user_id, id).await
    }
}
