//! Engagement metrics derived from a user's entries.
//!
//! Everything in here is a pure function of the entries and the current day, so callers are free to
//! recompute on every read instead of caching.

pub mod badges;
pub mod heatmap;
pub mod streak;

#[cfg(test)]
mod testing;

pub use badges::{BADGES, BadgeDefinition, BadgeMetric, Metrics, compute_badges, newly_achieved};
pub use heatmap::{Heatmap, HeatmapCell, MonthLabel, daily_counts, heatmap};
pub use streak::{active_days, compute_streak};
