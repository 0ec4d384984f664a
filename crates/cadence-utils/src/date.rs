use crate::date::error::DateError;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone};

pub mod error;

/// Source of the current time. Injected so that day based metrics can be evaluated against a fixed day.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// A clock standing at noon UTC of the given day.
    #[must_use]
    pub fn on(day: NaiveDate) -> Self {
        Self(day.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()).and_utc().fixed_offset())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Whole calendar days from `earlier` to `later`, negative if `later` lies before `earlier`.
#[must_use]
pub fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// Parses an RFC 3339 timestamp or a plain `YYYY-MM-DD` day. A plain day is placed at local midnight.
pub fn parse_entry_date(value: &str) -> Result<DateTime<FixedOffset>, DateError> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date);
    }
    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d")?;
    Local
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|date| date.fixed_offset())
        .ok_or(DateError::InvalidLocalTime)
}
