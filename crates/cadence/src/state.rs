use crate::notifications::BadgeQueue;
use cadence_model::entry::Entry;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Everything a view renders from. Published through [`Store::subscribe`](crate::Store::subscribe).
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreState {
    /// The signed-in user's entries, newest `date` first.
    pub entries: Vec<Entry>,
    pub newly_unlocked_badges: BadgeQueue,
    /// Ids of entries whose mutation has not been confirmed yet.
    pub pending: BTreeSet<Uuid>,
    pub is_loading: bool,
    pub ui: UiState,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UiState {
    pub command_bar_open: bool,
    pub ai_studio_open: bool,
    pub editing_entry: Option<Entry>,
}

impl StoreState {
    #[must_use]
    pub fn entry(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries whose last mutation has been confirmed. Records of mutations still in flight are left out, so
    /// badge evaluation never counts a change that may yet be rolled back.
    #[must_use]
    pub fn settled_entries(&self) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|entry| !self.pending.contains(&entry.id))
            .cloned()
            .collect()
    }

    /// Inserts `entry` in front of the first entry that is not newer than it.
    pub(crate) fn insert_sorted(&mut self, entry: Entry) {
        let index = self
            .entries
            .iter()
            .position(|existing| existing.date <= entry.date)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, entry);
    }

    pub(crate) fn remove(&mut self, id: Uuid) -> Option<(usize, Entry)> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some((index, self.entries.remove(index)))
    }

    /// Puts `entry` at `index`, or at the end if the collection has shrunk below it.
    pub(crate) fn insert_at(&mut self, index: usize, entry: Entry) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
    }

    /// Swaps the entry with id `id` for `entry`, keeping the collection ordered.
    pub(crate) fn replace(&mut self, id: Uuid, entry: Entry) {
        self.remove(id);
        self.remove(entry.id);
        self.insert_sorted(entry);
    }
}
