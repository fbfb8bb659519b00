//! Unique names for test data, so tests sharing a database never collide.

use ulid::Ulid;

/// A unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("game");
/// let b = unique_str("game");
/// assert_ne!(a, b);
/// assert!(a.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique user id for seats linked to an account.
pub fn unique_user_id() -> String {
    unique_str("user")
}
