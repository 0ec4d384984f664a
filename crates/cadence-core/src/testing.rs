use cadence_model::entry::{Entry, EntryDraft, Impact, Mood};
use chrono::{Days, NaiveDate, NaiveTime};
use uuid::Uuid;

pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
}

pub(crate) fn days_ago(days: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(days)).unwrap()
}

pub(crate) fn entry_on(day: NaiveDate, impact: Impact, mood: Mood) -> Entry {
    let date = day
        .and_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        .and_utc()
        .fixed_offset();
    EntryDraft {
        title: format!("win on {day}"),
        description: None,
        date,
        impact,
        mood,
    }
    .into_entry(Uuid::new_v4(), Uuid::nil(), date)
}

pub(crate) fn plain_entry(day: NaiveDate) -> Entry {
    entry_on(day, Impact::Low, Mood::Neutral)
}
