use crate::auth::AuthContext;
use crate::error::{StoreError, ValidationError};
use crate::outcome::MutationOutcome;
use crate::repository::EntryRepository;
use crate::state::StoreState;
use cadence_core::{Heatmap, compute_badges, compute_streak};
use cadence_model::badge::{Badge, BadgeId};
use cadence_model::entry::{Entry, EntryDraft, EntryPatch};
use cadence_utils::date::{Clock, SystemClock};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::instrument;
use typed_builder::TypedBuilder;
use uuid::Uuid;

/// Holds the signed-in user's entries and keeps them in sync with an [`EntryRepository`].
///
/// Mutations are applied to the local state first and reverted if the repository rejects them. Every change
/// is published to subscribers, so a view never has to wait for the network to show the user's input.
#[derive(TypedBuilder)]
pub struct Store<R> {
    repository: R,
    auth: Arc<dyn AuthContext>,
    #[builder(default = Arc::new(SystemClock) as Arc<dyn Clock>)]
    clock: Arc<dyn Clock>,
    #[builder(default = watch::Sender::new(StoreState::default()), setter(skip))]
    state: watch::Sender<StoreState>,
}

fn normalize_title(title: &mut String) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if trimmed.len() != title.len() {
        *title = trimmed.to_owned();
    }
    Ok(())
}

impl<R: EntryRepository> Store<R> {
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        self.state.borrow().entries.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    #[must_use]
    pub fn is_pending(&self, id: Uuid) -> bool {
        self.state.borrow().pending.contains(&id)
    }

    #[must_use]
    pub fn newly_unlocked_badges(&self) -> Vec<Badge> {
        self.state.borrow().newly_unlocked_badges.iter().cloned().collect()
    }

    #[must_use]
    pub fn badges(&self) -> Vec<Badge> {
        compute_badges(&self.state.borrow().entries, self.clock.today())
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        compute_streak(&self.state.borrow().entries, self.clock.today())
    }

    #[must_use]
    pub fn heatmap(&self) -> Heatmap {
        cadence_core::heatmap(&self.state.borrow().entries, self.clock.today())
    }

    /// Replaces the local entries with the repository's. Without a signed-in user the collection is emptied.
    #[instrument(skip_all)]
    pub async fn fetch_entries(&self) -> Result<(), StoreError> {
        let Some(user_id) = self.auth.current_user() else {
            tracing::debug!("no user signed in, clearing entries");
            self.state.send_modify(|state| {
                state.entries.clear();
                state.is_loading = false;
            });
            return Ok(());
        };

        self.state.send_modify(|state| state.is_loading = true);
        match self.repository.list_for_user(user_id).await {
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.date.cmp(&a.date));
                tracing::debug!(%user_id, count = entries.len(), "entries loaded");
                self.state.send_modify(|state| {
                    state.entries = entries;
                    state.is_loading = false;
                });
                Ok(())
            }
            Err(error) => {
                tracing::error!(error = &error as &dyn Error, %user_id, "failed to load entries");
                self.state.send_modify(|state| state.is_loading = false);
                Err(error.into())
            }
        }
    }

    /// Adds an entry under a temporary id, then swaps in the stored record once the repository confirms it.
    ///
    /// Badges achieved by the confirmed entry that were not achieved before are queued for notification. Both
    /// sides of that comparison only count settled entries, so another mutation still in flight cannot cause
    /// or hide an unlock.
    #[instrument(skip_all)]
    pub async fn add_entry(&self, mut draft: EntryDraft) -> MutationOutcome<Entry> {
        if let Err(error) = normalize_title(&mut draft.title) {
            return MutationOutcome::Rejected(error.into());
        }
        let Some(user_id) = self.auth.current_user() else {
            tracing::warn!("refusing to add an entry without a signed-in user");
            return MutationOutcome::Rejected(StoreError::Unauthenticated);
        };

        let today = self.clock.today();
        let temp_id = Uuid::new_v4();
        let optimistic = draft.clone().into_entry(temp_id, user_id, self.clock.now());
        let mut before = Vec::new();
        self.state.send_modify(|state| {
            before = compute_badges(&state.settled_entries(), today);
            state.insert_sorted(optimistic);
            state.pending.insert(temp_id);
        });
        tracing::debug!(%temp_id, "entry added locally");

        let entry = match self.repository.insert(user_id, draft).await {
            Ok(entry) => entry,
            Err(error) => {
                tracing::error!(error = &error as &dyn Error, %temp_id, "failed to add entry, rolling back");
                self.state.send_modify(|state| {
                    state.remove(temp_id);
                    state.pending.remove(&temp_id);
                });
                return MutationOutcome::RolledBack(error.into());
            }
        };

        let mut unlocked = Vec::new();
        self.state.send_modify(|state| {
            state.replace(temp_id, entry.clone());
            state.pending.remove(&temp_id);
            let after = compute_badges(&state.settled_entries(), today);
            unlocked = state.newly_unlocked_badges.push_newly_achieved(&before, &after);
        });
        tracing::info!(entry_id = %entry.id, "entry added");
        for badge in &unlocked {
            tracing::info!(badge = %badge.id, "badge unlocked");
        }

        if let Err(error) = self.fetch_entries().await {
            tracing::warn!(error = &error as &dyn Error, "failed to refresh entries after adding one");
        }
        MutationOutcome::Committed(entry)
    }

    /// Replaces a loaded entry with `entry`. Owner and creation time are kept from the loaded entry.
    #[instrument(skip_all, fields(entry_id = %entry.id))]
    pub async fn update_entry(&self, mut entry: Entry) -> MutationOutcome<Entry> {
        if let Err(error) = normalize_title(&mut entry.title) {
            return MutationOutcome::Rejected(error.into());
        }
        let Some(user_id) = self.auth.current_user() else {
            return MutationOutcome::Rejected(StoreError::Unauthenticated);
        };

        let id = entry.id;
        let mut previous = None;
        self.state.send_if_modified(|state| {
            let Some((index, current)) = state.remove(id) else {
                return false;
            };
            entry.user_id = current.user_id;
            entry.created_at = current.created_at;
            if entry.date == current.date {
                state.insert_at(index, entry.clone());
            } else {
                state.insert_sorted(entry.clone());
            }
            state.pending.insert(id);
            previous = Some((index, current));
            true
        });
        let Some((index, previous)) = previous else {
            return MutationOutcome::Rejected(StoreError::UnknownEntry(id));
        };

        match self.repository.update(user_id, id, EntryPatch::from(&entry)).await {
            Ok(()) => {
                self.state.send_modify(|state| {
                    state.pending.remove(&id);
                });
                tracing::info!("entry updated");
                MutationOutcome::Committed(entry)
            }
            Err(error) => {
                tracing::error!(error = &error as &dyn Error, "failed to update entry, rolling back");
                self.state.send_modify(move |state| {
                    if state.remove(id).is_some() {
                        state.insert_at(index, previous);
                    }
                    state.pending.remove(&id);
                });
                MutationOutcome::RolledBack(error.into())
            }
        }
    }

    /// Removes an entry. On success the removed entry is returned so it can be handed to
    /// [`Store::restore_entry`] later.
    #[instrument(skip_all, fields(entry_id = %id))]
    pub async fn delete_entry(&self, id: Uuid) -> MutationOutcome<Entry> {
        let Some(user_id) = self.auth.current_user() else {
            return MutationOutcome::Rejected(StoreError::Unauthenticated);
        };

        let mut removed = None;
        self.state.send_if_modified(|state| {
            removed = state.remove(id);
            if removed.is_some() {
                state.pending.insert(id);
            }
            removed.is_some()
        });
        let Some((index, entry)) = removed else {
            return MutationOutcome::Rejected(StoreError::UnknownEntry(id));
        };

        match self.repository.delete(user_id, id).await {
            Ok(()) => {
                self.state.send_modify(|state| {
                    state.pending.remove(&id);
                });
                tracing::info!("entry deleted");
                MutationOutcome::Committed(entry)
            }
            Err(error) => {
                tracing::error!(error = &error as &dyn Error, "failed to delete entry, rolling back");
                self.state.send_modify(move |state| {
                    if state.entry(id).is_none() {
                        state.insert_at(index, entry);
                    }
                    state.pending.remove(&id);
                });
                MutationOutcome::RolledBack(error.into())
            }
        }
    }

    /// Stores a previously deleted entry again. The repository assigns it a new id.
    #[instrument(skip_all, fields(entry_id = %entry.id))]
    pub async fn restore_entry(&self, mut entry: Entry) -> MutationOutcome<Entry> {
        if let Err(error) = normalize_title(&mut entry.title) {
            return MutationOutcome::Rejected(error.into());
        }
        let Some(user_id) = self.auth.current_user() else {
            return MutationOutcome::Rejected(StoreError::Unauthenticated);
        };

        let id = entry.id;
        entry.user_id = user_id;
        let draft = entry.to_draft();
        let inserted = self.state.send_if_modified(|state| {
            if state.entry(id).is_some() {
                return false;
            }
            state.insert_sorted(entry);
            state.pending.insert(id);
            true
        });
        if !inserted {
            return MutationOutcome::Rejected(StoreError::DuplicateEntry(id));
        }

        let restored = match self.repository.insert(user_id, draft).await {
            Ok(restored) => restored,
            Err(error) => {
                tracing::error!(error = &error as &dyn Error, "failed to restore entry, rolling back");
                self.state.send_modify(|state| {
                    state.remove(id);
                    state.pending.remove(&id);
                });
                return MutationOutcome::RolledBack(error.into());
            }
        };

        self.state.send_modify(|state| {
            state.replace(id, restored.clone());
            state.pending.remove(&id);
        });
        tracing::info!(restored_id = %restored.id, "entry restored");

        if let Err(error) = self.fetch_entries().await {
            tracing::warn!(error = &error as &dyn Error, "failed to refresh entries after restoring one");
        }
        MutationOutcome::Committed(restored)
    }

    /// Acknowledges a queued badge. Returns `false` if no badge with that id was queued.
    pub fn clear_newly_unlocked_badge(&self, id: BadgeId) -> bool {
        self.state
            .send_if_modified(|state| state.newly_unlocked_badges.acknowledge(id).is_some())
    }

    pub fn set_command_bar_open(&self, open: bool) {
        self.state
            .send_if_modified(|state| std::mem::replace(&mut state.ui.command_bar_open, open) != open);
    }

    pub fn set_ai_studio_open(&self, open: bool) {
        self.state
            .send_if_modified(|state| std::mem::replace(&mut state.ui.ai_studio_open, open) != open);
    }

    /// Selects the entry shown in the command bar for editing. Selecting opens the bar, clearing closes it.
    pub fn set_editing_entry(&self, entry: Option<Entry>) {
        self.state.send_modify(|state| {
            state.ui.command_bar_open = entry.is_some();
            state.ui.editing_entry = entry;
        });
    }
}
