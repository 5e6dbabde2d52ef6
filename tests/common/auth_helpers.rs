//! Authentication test helpers
//!
//! Provides utilities for creating test users, issuing tokens, and pulling
//! the session token out of `Set-Cookie` headers.

use restaurant_orders::backend::auth::sessions::TokenService;
use restaurant_orders::backend::auth::users::create_user;
use restaurant_orders::backend::server::ServerConfig;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Secret every test app signs its tokens with
pub const TEST_SECRET: &str = "integration-test-secret";

/// Lowest cost bcrypt accepts; keeps hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

impl TestUser {
    /// `Cookie` header value carrying this user's session
    pub fn cookie(&self) -> String {
        format!("Authorization={}", self.token)
    }
}

/// Configuration matching the test secret and bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(TEST_BCRYPT_COST)
        .build()
        .expect("test configuration is valid")
}

/// Create a test user directly in the database
pub async fn create_test_user(pool: &SqlitePool, email: &str, password: &str) -> TestUser {
    let password_hash = bcrypt::hash(password, TEST_BCRYPT_COST).expect("Failed to hash password");

    let user = create_user(pool, None, email.to_string(), password_hash)
        .await
        .expect("Failed to create test user");

    let token = TokenService::new(TEST_SECRET)
        .issue(user.id)
        .expect("Failed to issue test token")
        .token;

    TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(pool: &SqlitePool) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4().simple());
    create_test_user(pool, &email, "test_password_123").await
}

/// Token carried by an `Authorization=<token>; ...` Set-Cookie value
pub fn token_from_set_cookie(set_cookie: &str) -> Option<&str> {
    set_cookie
        .strip_prefix("Authorization=")
        .and_then(|rest| rest.split(';').next())
        .filter(|token| !token.is_empty())
}
