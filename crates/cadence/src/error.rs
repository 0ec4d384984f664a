use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,
}

/// Failure reported by an [`EntryRepository`](crate::EntryRepository). The store treats every variant as a
/// failed mutation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Db(#[from] DbErr),

    #[error("Entry {0} not found")]
    NotFound(Uuid),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No user is signed in")]
    Unauthenticated,

    #[error("Entry {0} is not loaded")]
    UnknownEntry(Uuid),

    #[error("Entry {0} is already loaded")]
    DuplicateEntry(Uuid),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
