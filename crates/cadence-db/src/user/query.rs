use cadence_entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_user_by_id<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Option<UserModel>, DbErr> {
        User::find_by_id(user_id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load user"))
    }
}
