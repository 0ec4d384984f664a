use cadence_entity::entry::{self, Entity as Entry, Model as EntryModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// All entries of a user, newest `date` first.
    pub async fn get_user_entries<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<EntryModel>, DbErr> {
        tracing::trace!(%user_id, "loading user entries");
        let entries = Entry::find()
            .filter(entry::Column::UserId.eq(user_id))
            .order_by_desc(entry::Column::Date)
            .order_by_desc(entry::Column::CreatedAt)
            .all(conn)
            .await;

        entries.inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load user entries"))
    }

    pub async fn get_user_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Option<EntryModel>, DbErr> {
        let entry = Entry::find_by_id(entry_id)
            .filter(entry::Column::UserId.eq(user_id))
            .one(conn)
            .await;

        entry.inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load user entry"))
    }
}
