//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: idempotent logging
//! setup, throwaway migrated databases, and unique test names.

pub mod db;
pub mod logging;
pub mod unique_helpers;
