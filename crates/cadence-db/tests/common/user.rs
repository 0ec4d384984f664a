use cadence_entity::user::Model as UserModel;
use sea_orm::DatabaseConnection;

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection) -> UserModel {
    cadence_db::user::Mutation::create_user(db, Some("test".to_owned()))
        .await
        .unwrap()
}
