use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

/// Tells the store who is signed in. No user means no entries.
pub trait AuthContext: Send + Sync {
    fn current_user(&self) -> Option<Uuid>;
}

/// The signed-in user as held by the application root.
#[derive(Debug, Default)]
pub struct Session {
    user: RwLock<Option<Uuid>>,
}

impl Session {
    #[must_use]
    pub fn signed_in(user_id: Uuid) -> Self {
        Self {
            user: RwLock::new(Some(user_id)),
        }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, user_id: Uuid) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user_id);
    }

    pub fn sign_out(&self) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl AuthContext for Session {
    fn current_user(&self) -> Option<Uuid> {
        *self.user.read().unwrap_or_else(PoisonError::into_inner)
    }
}
