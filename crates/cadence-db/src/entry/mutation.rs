use crate::util::{RequireRecord, set_if_some};
use cadence_entity::entry::{self, Entity as Entry, Impact, Model as EntryModel, Mood};
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Inserts a new entry, assigning its identity and creation timestamp.
    pub async fn create_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        title: String,
        description: Option<String>,
        date: DateTime<FixedOffset>,
        impact: Impact,
        mood: Mood,
    ) -> Result<EntryModel, DbErr> {
        let entry = entry::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            date: ActiveValue::Set(date),
            impact: ActiveValue::Set(impact),
            mood: ActiveValue::Set(mood),
            created_at: ActiveValue::Set(Utc::now().fixed_offset()),
        };

        entry
            .insert(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to create entry"))
    }

    /// Updates the given fields of an entry owned by `user_id`. Fields passed as `None` are left as they are.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_user_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        entry_id: Uuid,
        title: Option<String>,
        description: Option<Option<String>>,
        date: Option<DateTime<FixedOffset>>,
        impact: Option<Impact>,
        mood: Option<Mood>,
    ) -> Result<(), DbErr> {
        let entry = entry::ActiveModel {
            id: NotSet,
            user_id: NotSet,
            title: set_if_some(title),
            description: set_if_some(description),
            date: set_if_some(date),
            impact: set_if_some(impact),
            mood: set_if_some(mood),
            created_at: NotSet,
        };

        if !entry.is_changed() {
            crate::entry::Query::get_user_entry(conn, user_id, entry_id).await.require()?;
            return Ok(());
        }

        let res = Entry::update_many()
            .set(entry)
            .filter(entry::Column::UserId.eq(user_id))
            .filter(entry::Column::Id.eq(entry_id))
            .exec(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to update entry"))?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("Entry not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete_user_entry<C: ConnectionTrait>(conn: &C, user_id: Uuid, entry_id: Uuid) -> Result<(), DbErr> {
        let res = Entry::delete_many()
            .filter(entry::Column::UserId.eq(user_id))
            .filter(entry::Column::Id.eq(entry_id))
            .exec(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to delete entry"))?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("Entry not found".to_string()));
        }
        Ok(())
    }
}
