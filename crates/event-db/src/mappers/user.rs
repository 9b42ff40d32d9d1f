//! User entity <-> model mapper

use event_core::entities::User;
use event_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The password hash stays behind in the model; entities never carry the
/// credential.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
