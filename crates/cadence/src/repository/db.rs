use crate::error::RepositoryError;
use crate::repository::EntryRepository;
use async_trait::async_trait;
use cadence_db::entry::{Mutation, Query};
use cadence_entity::entry::{Impact as DbImpact, Mood as DbMood};
use cadence_model::entry::{Entry, EntryDraft, EntryPatch};
use cadence_model_tools::convert::{IntoDbModel, IntoModel};
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

/// Entries stored in a SQL database through sea-orm.
#[derive(Debug, Clone)]
pub struct DbRepository {
    conn: DatabaseConnection,
}

impl DbRepository {
    #[must_use]
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    #[must_use]
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}

fn not_found(id: Uuid) -> impl FnOnce(DbErr) -> RepositoryError {
    move |error| match error {
        DbErr::RecordNotFound(_) => RepositoryError::NotFound(id),
        error => RepositoryError::Db(error),
    }
}

#[async_trait]
impl EntryRepository for DbRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Entry>, RepositoryError> {
        let entries = Query::get_user_entries(&self.conn, user_id).await?;
        Ok(entries.into_iter().map(IntoModel::into_model).collect())
    }

    async fn insert(&self, user_id: Uuid, draft: EntryDraft) -> Result<Entry, RepositoryError> {
        let entry = Mutation::create_entry(
            &self.conn,
            user_id,
            draft.title,
            draft.description,
            draft.date,
            draft.impact.into_db_model(),
            draft.mood.into_db_model(),
        )
        .await?;
        Ok(entry.into_model())
    }

    async fn update(&self, user_id: Uuid, id: Uuid, patch: EntryPatch) -> Result<(), RepositoryError> {
        Mutation::update_user_entry(
            &self.conn,
            user_id,
            id,
            patch.title,
            patch.description,
            patch.date,
            patch.impact.map(IntoDbModel::<DbImpact>::into_db_model),
            patch.mood.map(IntoDbModel::<DbMood>::into_db_model),
        )
        .await
        .map_err(not_found(id))
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        Mutation::delete_user_entry(&self.conn, user_id, id)
            .await
            .map_err(not_found(id))
    }
}
