use cadence_entity::{entry, user};
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DbErr, Schema};
use std::error::Error;

/// Creates the tables and indices derived from the entities, skipping those that already exist.
pub async fn setup_schema<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut users = schema.create_table_from_entity(user::Entity);
    let mut entries = schema.create_table_from_entity(entry::Entity);
    let by_user_and_date = Index::create()
        .if_not_exists()
        .name("idx_entries_user_id_date")
        .table(entry::Entity)
        .col(entry::Column::UserId)
        .col(entry::Column::Date)
        .to_owned();

    users.if_not_exists();
    entries.if_not_exists();

    tracing::debug!(?backend, "setting up schema");
    for statement in [
        backend.build(&users),
        backend.build(&entries),
        backend.build(&by_user_and_date),
    ] {
        conn.execute(statement)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to set up schema"))?;
    }
    Ok(())
}
