pub mod user;

use cadence_db::schema::setup_schema;
use sea_orm::{Database, DatabaseConnection};

pub async fn memory_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    db
}
