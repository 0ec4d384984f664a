use crate::streak::compute_streak;
use cadence_model::badge::{Badge, BadgeId};
use cadence_model::entry::{Entry, Impact, Mood};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeMetric {
    Streak,
    FlowCount,
    HighImpactCount,
    /// Largest number of high impact entries on a single calendar day.
    MaxHighImpactInDay,
    TotalEntries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeDefinition {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub metric: BadgeMetric,
    pub total: u32,
}

impl BadgeDefinition {
    #[must_use]
    pub fn evaluate(&self, metrics: &Metrics) -> Badge {
        let progress = metrics.value(self.metric);
        Badge {
            id: self.id,
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            icon: self.icon.to_owned(),
            color: self.color.to_owned(),
            achieved: progress >= self.total,
            progress,
            total: self.total,
        }
    }
}

/// Every badge, in presentation order.
pub const BADGES: [BadgeDefinition; 9] = [
    BadgeDefinition {
        id: BadgeId::Unstoppable,
        name: "Unstoppable",
        description: "Maintained a 7-day streak",
        icon: "rocket",
        color: "text-orange-500",
        metric: BadgeMetric::Streak,
        total: 7,
    },
    BadgeDefinition {
        id: BadgeId::HabitMachine,
        name: "Habit Machine",
        description: "Maintained a 30-day streak",
        icon: "mountain",
        color: "text-blue-500",
        metric: BadgeMetric::Streak,
        total: 30,
    },
    BadgeDefinition {
        id: BadgeId::Legendary,
        name: "Legendary",
        description: "Maintained a 100-day streak",
        icon: "crown",
        color: "text-yellow-500",
        metric: BadgeMetric::Streak,
        total: 100,
    },
    BadgeDefinition {
        id: BadgeId::FlowMaster,
        name: "Flow Master",
        description: "Logged 10 entries in Flow state",
        icon: "zap",
        color: "text-cyan-400",
        metric: BadgeMetric::FlowCount,
        total: 10,
    },
    BadgeDefinition {
        id: BadgeId::DeepWork,
        name: "Deep Work",
        description: "Logged 100 entries in Flow state",
        icon: "brain",
        color: "text-violet-500",
        metric: BadgeMetric::FlowCount,
        total: 100,
    },
    BadgeDefinition {
        id: BadgeId::HighImpact,
        name: "High Impact",
        description: "Delivered 10 High Impact wins",
        icon: "target",
        color: "text-red-500",
        metric: BadgeMetric::HighImpactCount,
        total: 10,
    },
    BadgeDefinition {
        id: BadgeId::WorldClass,
        name: "World Class",
        description: "Delivered 100 High Impact wins",
        icon: "trophy",
        color: "text-amber-400",
        metric: BadgeMetric::HighImpactCount,
        total: 100,
    },
    BadgeDefinition {
        id: BadgeId::HatTrick,
        name: "Hat Trick",
        description: "3 High Impact wins in a single day",
        icon: "sparkles",
        color: "text-pink-500",
        metric: BadgeMetric::MaxHighImpactInDay,
        total: 3,
    },
    BadgeDefinition {
        id: BadgeId::Century,
        name: "Century",
        description: "Logged 100 wins",
        icon: "star",
        color: "text-emerald-400",
        metric: BadgeMetric::TotalEntries,
        total: 100,
    },
];

/// Base values the badges are measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub streak: u32,
    pub flow_count: u32,
    pub high_impact_count: u32,
    pub max_high_impact_in_day: u32,
    pub total_entries: u32,
}

fn saturating_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

impl Metrics {
    #[must_use]
    pub fn from_entries(entries: &[Entry], today: NaiveDate) -> Self {
        let mut high_impact_by_day: HashMap<NaiveDate, usize> = HashMap::new();
        let mut flow_count = 0;
        let mut high_impact_count = 0;

        for entry in entries {
            if entry.mood == Mood::Flow {
                flow_count += 1;
            }
            if entry.impact == Impact::High {
                high_impact_count += 1;
                *high_impact_by_day.entry(entry.day()).or_default() += 1;
            }
        }

        Self {
            streak: compute_streak(entries, today),
            flow_count: saturating_count(flow_count),
            high_impact_count: saturating_count(high_impact_count),
            max_high_impact_in_day: saturating_count(high_impact_by_day.into_values().max().unwrap_or(0)),
            total_entries: saturating_count(entries.len()),
        }
    }

    #[must_use]
    pub fn value(&self, metric: BadgeMetric) -> u32 {
        match metric {
            BadgeMetric::Streak => self.streak,
            BadgeMetric::FlowCount => self.flow_count,
            BadgeMetric::HighImpactCount => self.high_impact_count,
            BadgeMetric::MaxHighImpactInDay => self.max_high_impact_in_day,
            BadgeMetric::TotalEntries => self.total_entries,
        }
    }
}

/// Evaluates every badge against `entries`, in the order of [`BADGES`].
#[must_use]
pub fn compute_badges(entries: &[Entry], today: NaiveDate) -> Vec<Badge> {
    let metrics = Metrics::from_entries(entries, today);
    BADGES.iter().map(|definition| definition.evaluate(&metrics)).collect()
}

/// Badges achieved in `after` that were not achieved in `before`.
pub fn newly_achieved<'a>(before: &[Badge], after: &'a [Badge]) -> impl Iterator<Item = &'a Badge> {
    let previously: Vec<BadgeId> = before
        .iter()
        .filter(|badge| badge.achieved)
        .map(|badge| badge.id)
        .collect();
    after
        .iter()
        .filter(move |badge| badge.achieved && !previously.contains(&badge.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{days_ago, entry_on, plain_entry, today};

    fn badge(badges: &[Badge], id: BadgeId) -> &Badge {
        badges.iter().find(|badge| badge.id == id).unwrap()
    }

    fn daily_entries(days: u64) -> Vec<Entry> {
        (0..days).map(|day| plain_entry(days_ago(day))).collect()
    }

    #[test]
    fn test_fixed_order() {
        let ids: Vec<_> = compute_badges(&[], today()).into_iter().map(|badge| badge.id).collect();
        assert_eq!(
            ids,
            vec![
                BadgeId::Unstoppable,
                BadgeId::HabitMachine,
                BadgeId::Legendary,
                BadgeId::FlowMaster,
                BadgeId::DeepWork,
                BadgeId::HighImpact,
                BadgeId::WorldClass,
                BadgeId::HatTrick,
                BadgeId::Century,
            ]
        );
    }

    #[test]
    fn test_nothing_achieved_without_entries() {
        let badges = compute_badges(&[], today());
        assert!(badges.iter().all(|badge| !badge.achieved && badge.progress == 0));
    }

    #[test]
    fn test_recomputation_is_stable() {
        let mut entries = daily_entries(8);
        entries.push(entry_on(today(), Impact::High, Mood::Flow));
        assert_eq!(compute_badges(&entries, today()), compute_badges(&entries, today()));
    }

    #[test]
    fn test_unstoppable_tracks_raw_streak() {
        let badges = compute_badges(&daily_entries(6), today());
        let unstoppable = badge(&badges, BadgeId::Unstoppable);
        assert!(!unstoppable.achieved);
        assert_eq!(unstoppable.progress, 6);

        let badges = compute_badges(&daily_entries(7), today());
        assert!(badge(&badges, BadgeId::Unstoppable).achieved);

        let badges = compute_badges(&daily_entries(12), today());
        let unstoppable = badge(&badges, BadgeId::Unstoppable);
        assert!(unstoppable.achieved);
        assert_eq!(unstoppable.progress, 12);
        assert_eq!(unstoppable.display_progress(), 7);
        assert!(!badge(&badges, BadgeId::HabitMachine).achieved);
        assert_eq!(badge(&badges, BadgeId::HabitMachine).progress, 12);
    }

    #[test]
    fn test_broken_streak_resets_streak_badges() {
        let entries: Vec<_> = (3..40).map(|day| plain_entry(days_ago(day))).collect();
        let badges = compute_badges(&entries, today());
        assert_eq!(badge(&badges, BadgeId::HabitMachine).progress, 0);
        assert!(!badge(&badges, BadgeId::Unstoppable).achieved);
    }

    #[test]
    fn test_flow_master() {
        let mut entries: Vec<_> = (0..9)
            .map(|day| entry_on(days_ago(day * 10), Impact::Low, Mood::Flow))
            .collect();
        entries.push(entry_on(today(), Impact::Low, Mood::Drain));
        let badges = compute_badges(&entries, today());
        assert_eq!(badge(&badges, BadgeId::FlowMaster).progress, 9);
        assert!(!badge(&badges, BadgeId::FlowMaster).achieved);

        entries.push(entry_on(today(), Impact::Low, Mood::Flow));
        let badges = compute_badges(&entries, today());
        assert!(badge(&badges, BadgeId::FlowMaster).achieved);
        assert!(!badge(&badges, BadgeId::DeepWork).achieved);
        assert_eq!(badge(&badges, BadgeId::DeepWork).progress, 10);
    }

    #[test]
    fn test_high_impact_counts() {
        let entries: Vec<_> = (0..10)
            .map(|day| entry_on(days_ago(day), Impact::High, Mood::Neutral))
            .collect();
        let badges = compute_badges(&entries, today());
        assert!(badge(&badges, BadgeId::HighImpact).achieved);
        assert_eq!(badge(&badges, BadgeId::WorldClass).progress, 10);
        assert!(!badge(&badges, BadgeId::HatTrick).achieved);
        assert_eq!(badge(&badges, BadgeId::HatTrick).progress, 1);
    }

    #[test]
    fn test_hat_trick() {
        let busy_day = days_ago(4);
        let mut entries = vec![
            entry_on(busy_day, Impact::High, Mood::Flow),
            entry_on(busy_day, Impact::High, Mood::Drain),
            entry_on(busy_day, Impact::High, Mood::Neutral),
            entry_on(busy_day, Impact::Low, Mood::Neutral),
        ];
        for day in [0, 1, 2] {
            entries.push(entry_on(days_ago(day), Impact::High, Mood::Neutral));
            entries.push(entry_on(days_ago(day), Impact::High, Mood::Neutral));
            entries.push(entry_on(days_ago(day), Impact::Medium, Mood::Neutral));
        }

        let badges = compute_badges(&entries, today());
        let hat_trick = badge(&badges, BadgeId::HatTrick);
        assert!(hat_trick.achieved);
        assert_eq!(hat_trick.progress, 3);
        assert_eq!(hat_trick.total, 3);
    }

    #[test]
    fn test_hat_trick_needs_a_single_day() {
        let entries = vec![
            entry_on(days_ago(0), Impact::High, Mood::Neutral),
            entry_on(days_ago(0), Impact::High, Mood::Neutral),
            entry_on(days_ago(1), Impact::High, Mood::Neutral),
        ];
        let badges = compute_badges(&entries, today());
        assert!(!badge(&badges, BadgeId::HatTrick).achieved);
        assert_eq!(badge(&badges, BadgeId::HatTrick).progress, 2);
    }

    #[test]
    fn test_century() {
        let entries: Vec<_> = (0..100).map(|_| plain_entry(days_ago(50))).collect();
        let badges = compute_badges(&entries, today());
        assert!(badge(&badges, BadgeId::Century).achieved);
        assert_eq!(badge(&badges, BadgeId::Century).progress, 100);
    }

    #[test]
    fn test_newly_achieved() {
        let mut entries: Vec<_> = (0..9)
            .map(|_| entry_on(days_ago(20), Impact::Low, Mood::Flow))
            .collect();
        let before = compute_badges(&entries, today());
        entries.push(entry_on(today(), Impact::Low, Mood::Flow));
        let after = compute_badges(&entries, today());

        let unlocked: Vec<_> = newly_achieved(&before, &after).map(|badge| badge.id).collect();
        assert_eq!(unlocked, vec![BadgeId::FlowMaster]);

        let again: Vec<_> = newly_achieved(&after, &after).collect();
        assert!(again.is_empty());
    }
}
