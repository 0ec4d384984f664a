use cadence_core::newly_achieved;
use cadence_model::badge::{Badge, BadgeId};
use serde::Serialize;
use std::collections::VecDeque;

/// Badges that were unlocked and not yet acknowledged, oldest first. A badge id is queued at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BadgeQueue {
    badges: VecDeque<Badge>,
}

impl BadgeQueue {
    /// Queues `badge` unless a badge with the same id is already waiting.
    pub fn push(&mut self, badge: Badge) -> bool {
        if self.contains(badge.id) {
            return false;
        }
        self.badges.push_back(badge);
        true
    }

    /// Queues every badge achieved in `after` but not in `before` and returns those that were added.
    pub fn push_newly_achieved(&mut self, before: &[Badge], after: &[Badge]) -> Vec<Badge> {
        newly_achieved(before, after)
            .filter(|badge| self.push((*badge).clone()))
            .cloned()
            .collect()
    }

    /// Removes the queued badge with the given id. Other queued badges keep their order.
    pub fn acknowledge(&mut self, id: BadgeId) -> Option<Badge> {
        let index = self.badges.iter().position(|badge| badge.id == id)?;
        self.badges.remove(index)
    }

    #[must_use]
    pub fn contains(&self, id: BadgeId) -> bool {
        self.badges.iter().any(|badge| badge.id == id)
    }

    #[must_use]
    pub fn front(&self) -> Option<&Badge> {
        self.badges.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.badges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}
