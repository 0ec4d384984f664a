use cadence_model::entry::Entry;
use cadence_utils::date::days_between;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Distinct calendar days holding at least one entry.
#[must_use]
pub fn active_days(entries: &[Entry]) -> BTreeSet<NaiveDate> {
    entries.iter().map(Entry::day).collect()
}

/// Number of consecutive active days in the chain that ends at the most recent active day.
///
/// The chain counts as broken, and the streak is 0, when the most recent active day lies more than one
/// day before `today`. Only the chain ending at the most recent day is considered, a longer run further
/// back in history does not count.
#[must_use]
pub fn compute_streak(entries: &[Entry], today: NaiveDate) -> u32 {
    let days = active_days(entries);
    let mut newest_first = days.iter().rev().copied();

    let Some(most_recent) = newest_first.next() else {
        return 0;
    };
    if days_between(today, most_recent) > 1 {
        return 0;
    }

    let mut streak = 1;
    let mut current = most_recent;
    for day in newest_first {
        if days_between(current, day) != 1 {
            break;
        }
        streak += 1;
        current = day;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{days_ago, plain_entry, today};

    fn streak_of(days: &[u64]) -> u32 {
        let entries: Vec<_> = days.iter().map(|days| plain_entry(days_ago(*days))).collect();
        compute_streak(&entries, today())
    }

    #[test]
    fn test_empty() {
        assert_eq!(compute_streak(&[], today()), 0);
    }

    #[test]
    fn test_consecutive_days_ending_today() {
        assert_eq!(streak_of(&[0, 1, 2]), 3);
    }

    #[test]
    fn test_multiple_entries_per_day_count_once() {
        assert_eq!(streak_of(&[0, 0, 0, 1, 1]), 2);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        assert_eq!(streak_of(&[2, 0, 1]), 3);
    }

    #[test]
    fn test_broken_chain() {
        assert_eq!(streak_of(&[3]), 0);
        assert_eq!(streak_of(&[2, 3, 4, 5]), 0);
    }

    #[test]
    fn test_yesterday_keeps_chain_alive() {
        assert_eq!(streak_of(&[1, 3]), 1);
        assert_eq!(streak_of(&[1, 2, 3]), 3);
    }

    #[test]
    fn test_only_chain_ending_at_most_recent_day_counts() {
        // An older run of five days does not beat the current run of two.
        assert_eq!(streak_of(&[0, 1, 5, 6, 7, 8, 9]), 2);
    }

    #[test]
    fn test_future_entries_start_the_chain() {
        let tomorrow = today().succ_opt().unwrap();
        let entries = vec![plain_entry(tomorrow), plain_entry(today())];
        assert_eq!(compute_streak(&entries, today()), 2);
    }
}
