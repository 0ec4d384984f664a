use anyhow::{Result, anyhow};
use cadence::{DbRepository, Session, Store};
use cadence_db::schema::setup_schema;
use cadence_db::user::Query;
use cadence_utils::args::db::DbArgs;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use uuid::Uuid;

pub(crate) async fn connect(db: &DbArgs) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(db.db_url.clone());
    if let Some(min_connections) = db.db_min_connections {
        options.min_connections(min_connections);
    }
    if let Some(max_connections) = db.db_max_connections {
        options.max_connections(max_connections);
    }
    options.sqlx_logging_level(log::LevelFilter::Debug);

    tracing::debug!("connecting to database");
    let conn = Database::connect(options).await?;
    setup_schema(&conn).await?;
    Ok(conn)
}

/// A loaded store for the user the command runs as.
pub(crate) struct Context {
    pub(crate) store: Store<DbRepository>,
    pub(crate) json: bool,
}

impl Context {
    pub(crate) async fn open(conn: DatabaseConnection, user: Option<Uuid>, json: bool) -> Result<Self> {
        let user_id = user.ok_or_else(|| anyhow!("no user given, pass --user or set CADENCE_USER"))?;
        if Query::find_user_by_id(&conn, user_id).await?.is_none() {
            return Err(anyhow!("user {user_id} does not exist, create one with `cadence user create`"));
        }

        let store = Store::builder()
            .repository(DbRepository::new(conn))
            .auth(Arc::new(Session::signed_in(user_id)))
            .build();
        store.fetch_entries().await?;
        Ok(Self { store, json })
    }
}
