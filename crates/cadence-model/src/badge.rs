use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BadgeId {
    Unstoppable,
    HabitMachine,
    Legendary,
    FlowMaster,
    DeepWork,
    HighImpact,
    WorldClass,
    HatTrick,
    Century,
}

/// A badge evaluated against a concrete set of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub achieved: bool,
    /// Raw value of the underlying metric, may exceed `total`.
    pub progress: u32,
    pub total: u32,
}

impl Badge {
    #[must_use]
    pub fn display_progress(&self) -> u32 {
        self.progress.min(self.total)
    }
}
