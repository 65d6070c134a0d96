use crate::db::models::{Role, User};
use crate::db::store::JsonStore;
use crate::error::AppError;

pub struct UserRepository;

impl UserRepository {
    /// Insert a new user with role `user`, failing if the name is taken
    pub fn create(
        store: &JsonStore,
        username: &str,
        password_hash: String,
    ) -> Result<User, AppError> {
        let mut users = store.load_users()?;

        if users.contains_key(username) {
            return Err(AppError::UsernameTaken);
        }

        let user = User {
            password_hash,
            role: Role::User,
            created_at: chrono::Local::now().naive_local(),
        };
        users.insert(username.to_string(), user.clone());
        store.save_users(&users)?;

        Ok(user)
    }

    pub fn get_by_username(store: &JsonStore, username: &str) -> Result<Option<User>, AppError> {
        Ok(store.load_users()?.remove(username))
    }
}
