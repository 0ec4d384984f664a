//! Client side state for a win journal.
//!
//! [`Store`] keeps the signed-in user's entries in memory, applies mutations optimistically before the
//! [`EntryRepository`] confirms them and queues badges the moment they are first achieved.

pub mod auth;
pub mod error;
pub mod notifications;
pub mod outcome;
pub mod repository;
pub mod state;
pub mod store;

pub use auth::{AuthContext, Session};
pub use error::{RepositoryError, StoreError, ValidationError};
pub use notifications::BadgeQueue;
pub use outcome::MutationOutcome;
pub use repository::{DbRepository, EntryRepository, MemoryRepository};
pub use state::{StoreState, UiState};
pub use store::Store;
