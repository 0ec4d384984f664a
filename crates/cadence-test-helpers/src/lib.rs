mod sqlite;

pub use sqlite::*;
use std::borrow::Cow;

/// A throwaway database for integration tests.
pub trait TestDb {
    fn db_uri(&self) -> Cow<'_, str>;
}
