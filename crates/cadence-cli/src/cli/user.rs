use crate::cli::output::emit;
use anyhow::Result;
use cadence_db::user::Mutation;
use cadence_model::user::User;
use cadence_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;

pub(crate) async fn create(conn: &DatabaseConnection, name: Option<String>, json: bool) -> Result<()> {
    let user: User = Mutation::create_user(conn, name).await?.into_model();
    tracing::info!(user_id = %user.id, "user created");
    emit(json, &user, || println!("{}", user.id))
}
