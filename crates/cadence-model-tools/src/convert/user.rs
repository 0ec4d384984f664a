use crate::convert::FromDbModel;
use cadence_entity::user::Model as UserModel;
use cadence_model::user::User;

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}
