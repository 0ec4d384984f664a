use crate::error::StoreError;

/// How an optimistic mutation ended.
///
/// While the remote call is in flight the affected entry is listed in
/// [`StoreState::pending`](crate::StoreState::pending).
#[must_use]
#[derive(Debug)]
pub enum MutationOutcome<T> {
    /// The repository accepted the change and the local state holds the authoritative record.
    Committed(T),
    /// The mutation was refused before anything was applied.
    Rejected(StoreError),
    /// The change was applied locally, the repository failed and the change was reverted.
    RolledBack(StoreError),
}

impl<T> MutationOutcome<T> {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    pub fn is_rolled_back(&self) -> bool {
        matches!(self, Self::RolledBack(_))
    }

    pub fn committed(self) -> Option<T> {
        match self {
            Self::Committed(value) => Some(value),
            Self::Rejected(_) | Self::RolledBack(_) => None,
        }
    }

    pub fn error(&self) -> Option<&StoreError> {
        match self {
            Self::Committed(_) => None,
            Self::Rejected(error) | Self::RolledBack(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, StoreError> {
        match self {
            Self::Committed(value) => Ok(value),
            Self::Rejected(error) | Self::RolledBack(error) => Err(error),
        }
    }
}
