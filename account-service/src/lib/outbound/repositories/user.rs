use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserStore;
use crate::user::errors::UserError;

/// Postgres-backed user store.
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: PgRow) -> Result<User, UserError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| UserError::Database(e.to_string()))?;
    let first_name: String = row
        .try_get("first_name")
        .map_err(|e| UserError::Database(e.to_string()))?;
    let last_name: String = row
        .try_get("last_name")
        .map_err(|e| UserError::Database(e.to_string()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| UserError::Database(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| UserError::Database(e.to_string()))?;
    let role: String = row
        .try_get("role")
        .map_err(|e| UserError::Database(e.to_string()))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| UserError::Database(e.to_string()))?;

    Ok(User {
        id: UserId(id),
        first_name,
        last_name,
        email: EmailAddress::new(email)?,
        password_hash,
        role: role.parse()?,
        created_at,
    })
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.0)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return UserError::EmailAlreadyInUse;
                }
            }
            UserError::Database(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, password_hash, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        row.map(map_row).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        row.map(map_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, password_hash, role, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        rows.into_iter().map(map_row).collect()
    }
}
