use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Impact {
    Low,
    Medium,
    High,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mood {
    Flow,
    Drain,
    Neutral,
}

/// A single logged win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub date: DateTime<FixedOffset>,
    pub impact: Impact,
    pub mood: Mood,
    pub created_at: DateTime<FixedOffset>,
}

impl Entry {
    /// The calendar day the entry belongs to, in the offset it was recorded with.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    #[must_use]
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date,
            impact: self.impact,
            mood: self.mood,
        }
    }
}

/// The user supplied part of an entry. Identity, owner and creation time are assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: DateTime<FixedOffset>,
    pub impact: Impact,
    pub mood: Mood,
}

impl EntryDraft {
    #[must_use]
    pub fn into_entry(self, id: Uuid, user_id: Uuid, created_at: DateTime<FixedOffset>) -> Entry {
        Entry {
            id,
            user_id,
            title: self.title,
            description: self.description,
            date: self.date,
            impact: self.impact,
            mood: self.mood,
            created_at,
        }
    }
}

/// Partial update of an entry. `None` leaves a field untouched, `description: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub impact: Option<Impact>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mood: Option<Mood>,
}

impl EntryPatch {
    pub fn apply_to(&self, entry: &mut Entry) {
        if let Some(title) = &self.title {
            entry.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            entry.description.clone_from(description);
        }
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(impact) = self.impact {
            entry.impact = impact;
        }
        if let Some(mood) = self.mood {
            entry.mood = mood;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<&Entry> for EntryPatch {
    fn from(entry: &Entry) -> Self {
        Self {
            title: Some(entry.title.clone()),
            description: Some(entry.description.clone()),
            date: Some(entry.date),
            impact: Some(entry.impact),
            mood: Some(entry.mood),
        }
    }
}
