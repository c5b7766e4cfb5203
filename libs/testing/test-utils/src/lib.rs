//! Shared test utilities for the event registration crates
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestSession`: signs session cookies the way `POST /jwt` does
//! - `TestDataBuilder`: deterministic test data
//! - `assertions`: custom assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo, TestSession};
//!
//! # async fn example() {
//! let mongo = TestMongo::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let session = TestSession::new();
//! let cookie = session.cookie_for(&builder.email("owner"));
//! # }
//! ```

use axum_helpers::{JwtConfig, SessionAuth};
use serde_json::{Value, json};

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Signing secret shared by tests; long enough for `JwtConfig`.
pub const TEST_JWT_SECRET: &str = "test-secret-key-that-is-at-least-32-chars";

/// Issues session tokens and `Cookie` header values for router tests.
#[derive(Clone)]
pub struct TestSession {
    auth: SessionAuth,
}

impl TestSession {
    pub fn new() -> Self {
        let config = JwtConfig::new(TEST_JWT_SECRET).expect("test secret is long enough");
        Self {
            auth: SessionAuth::new(&config),
        }
    }

    /// The [`SessionAuth`] the app under test should verify with.
    pub fn auth(&self) -> SessionAuth {
        self.auth.clone()
    }

    /// Raw token for an arbitrary `user` payload.
    pub fn token(&self, user: Value) -> String {
        self.auth.issue(user).expect("failed to sign test token")
    }

    /// `Cookie` header value for a user identified by `email`.
    pub fn cookie_for(&self, email: &str) -> String {
        format!("token={}", self.token(json!({ "email": email })))
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for test data with deterministic values
///
/// The same test name always yields the same data, so failures reproduce.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_event");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `"{who}-{seed}@example.com"`
    pub fn email(&self, who: &str) -> String {
        format!("{}-{}@example.com", who, self.seed)
    }

    /// Database name unique to this test
    pub fn database_name(&self) -> String {
        format!("test_{}", self.seed)
    }

    /// Body for creating an event
    pub fn event(&self, title: &str) -> Value {
        json!({
            "title": format!("{} {}", title, self.seed),
            "email": self.email("organizer"),
            "seats": 40,
            "tags": ["rust", "meetup"]
        })
    }

    /// Body for creating a registration
    pub fn registration(&self, name: &str) -> Value {
        json!({
            "name": name,
            "email": self.email(&name.to_lowercase()),
            "tickets": 1
        })
    }
}

/// Test assertion helpers
pub mod assertions {
    use serde_json::Value;

    /// Assert `value` is a 24-character lowercase hex id.
    pub fn assert_object_id(value: &Value, context: &str) -> String {
        let id = value
            .as_str()
            .unwrap_or_else(|| panic!("{}: expected string id, got {}", context, value));
        assert!(
            id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "{}: expected 24-char hex id, got {}",
            context,
            id
        );
        id.to_string()
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
