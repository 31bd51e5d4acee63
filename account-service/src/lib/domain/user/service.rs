use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::Role;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;
use crate::user::ports::UserStore;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort. The store and the hasher are
/// injected rather than reached for globally, so tests can substitute fakes
/// without any global mocking.
pub struct UserService<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: auth::PasswordHasher,
}

impl<S> UserService<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<S> UserServicePort for UserService<S>
where
    S: UserStore,
{
    async fn register(&self, command: SignupCommand) -> Result<User, UserError> {
        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            role: Role::Customer,
            created_at: Utc::now(),
        };

        let created = self.store.create(user).await?;

        tracing::info!(user_id = %created.id, "User registered");

        Ok(created)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        self.store.find_by_email(email).await
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.store.list_all().await
    }
}
