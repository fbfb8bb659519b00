#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod store;
pub mod telemetry;
pub mod utils;

// Re-exports for public API
pub use config::db::{db_url, DbOwner, DbProfile};
pub use config::local::LocalConfig;
pub use domain::{NewPlayer, SessionBoard};
pub use error::{AppError, WriteOp};
pub use errors::{DomainError, ErrorCode};
pub use infra::db::{connect_and_migrate, connect_db, connect_url};
pub use services::games::{GameOverview, GameService};
pub use services::sessions::SessionService;
pub use store::{LocalStore, ScoreStore, SeaOrmStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
