//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with automatic cleanup (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let player_id = builder.player_id("main");
//!     let last_name = builder.name("last", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Longest identifier the players API accepts
const MAX_PLAYER_ID_LEN: usize = 32;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_player");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a player identifier that passes request validation
    ///
    /// The result is always between 3 and 32 characters long.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let id = TestDataBuilder::new(7).player_id("a");
    /// assert!(id.len() >= 3 && id.len() <= 32);
    /// ```
    pub fn player_id(&self, suffix: &str) -> String {
        let mut id = format!("t{:08x}{}", self.seed as u32, suffix);
        id.truncate(MAX_PLAYER_ID_LEN);
        id
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("last", "main");
    /// // Returns: "test-last-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a collection of identifiers matches the expected order
    pub fn assert_ids_in_order<I, S>(actual: I, expected: &[&str], context: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let actual: Vec<String> = actual
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        assert_eq!(
            actual, expected,
            "{}: expected ids {:?}, got {:?}",
            context, expected, actual
        );
    }
}
