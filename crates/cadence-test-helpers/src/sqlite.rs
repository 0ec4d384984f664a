use crate::TestDb;
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

/// A SQLite file in a temporary directory. The directory is removed when this is dropped.
pub struct SqliteDb {
    _temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("cadence-sqlite-db")?;
        let path = temp_dir.path().join("db.sqlite");
        let path = path
            .to_str()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?;
        let uri = format!("sqlite://{path}?mode=rwc");

        tracing::info!(uri = ?uri, "created sqlite test db");
        Ok(Self {
            _temp_dir: temp_dir,
            uri,
        })
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}
