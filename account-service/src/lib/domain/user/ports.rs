use async_trait::async_trait;

use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated fields.
    ///
    /// Hashes the password and performs a single atomic insert; nothing is
    /// mutated when the insert fails.
    ///
    /// # Errors
    /// * `EmailAlreadyInUse` - Email is already registered
    /// * `Hashing` - Password hashing failed
    /// * `Database` - Database operation failed
    async fn register(&self, command: SignupCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Database` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by email address, if one exists.
    ///
    /// Returns `None` rather than an error for an unknown email: the login
    /// handler must not be able to distinguish this from a bad password when
    /// it builds its response.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users (admin listing).
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// The external user-store collaborator behind the authentication core.
/// Implemented by the Postgres adapter in production and by an in-memory
/// fake in the integration tests.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user. The insert is atomic: on a duplicate email
    /// nothing is written.
    ///
    /// # Errors
    /// * `EmailAlreadyInUse` - Email is already registered
    /// * `Database` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier (`None` if not found).
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address (`None` if not found).
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users, newest first.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
