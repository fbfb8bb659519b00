//! Adapters for external dependencies.

pub mod games_sea;
pub mod players_sea;
pub mod profiles_sea;
pub mod scores_sea;
pub mod sessions_sea;
pub mod standings_sea;
