#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use account_service::domain::user::models::EmailAddress;
use account_service::domain::user::models::Role;
use account_service::domain::user::models::User;
use account_service::domain::user::models::UserId;
use account_service::domain::user::ports::UserStore;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::user::errors::UserError;
use async_trait::async_trait;
use auth::AccessClaims;
use auth::Authenticator;
use auth::TokenSigner;
use chrono::Utc;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// In-memory user store driven through the same port the Postgres adapter
/// implements, so the full HTTP stack runs without a database.
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a user directly, bypassing signup (e.g. admin accounts).
    pub fn insert(&self, user: User) {
        self.users.write().unwrap().insert(user.id, user);
    }

    /// Delete a user directly, simulating account removal after a token was
    /// issued.
    pub fn remove(&self, id: &UserId) {
        self.users.write().unwrap().remove(id);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().unwrap();
        if users
            .values()
            .any(|existing| existing.email == user.email)
        {
            return Err(UserError::EmailAlreadyInUse);
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.read().unwrap().values().cloned().collect())
    }
}

/// Test application serving the real router on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub store: Arc<InMemoryUserStore>,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryUserStore::new());
        let user_service = Arc::new(UserService::new(Arc::clone(&store)));
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));

        let router = create_router(
            user_service,
            Arc::clone(&authenticator),
            TOKEN_TTL_SECONDS,
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
            store,
            authenticator,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Seed a user directly into the store and return it.
    pub fn seed_user(&self, email: &str, password: &str, role: Role) -> User {
        let hasher = auth::PasswordHasher::new();
        let user = User {
            id: UserId::new(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: hasher.hash(password).unwrap(),
            role,
            created_at: Utc::now(),
        };
        self.store.insert(user.clone());
        user
    }

    /// Mint a valid token for a user, same as login would.
    pub fn token_for(&self, user: &User) -> String {
        let claims = AccessClaims::new(user.id, user.email.as_str(), TOKEN_TTL_SECONDS);
        self.authenticator.issue_token(&claims).unwrap()
    }

    /// Mint a token that expired well past the verification leeway.
    pub fn expired_token_for(&self, user: &User) -> String {
        let mut claims = AccessClaims::new(user.id, user.email.as_str(), TOKEN_TTL_SECONDS);
        claims.iat -= 2 * TOKEN_TTL_SECONDS;
        claims.exp -= 2 * TOKEN_TTL_SECONDS;
        TokenSigner::new(TEST_SECRET).issue(&claims).unwrap()
    }
}
