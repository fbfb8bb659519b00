//! Repository functions for the domain layer.
//!
//! Each module wraps its `*_sea` adapter, converting rows into domain values
//! and `DbErr` into `DomainError`.

use crate::errors::domain::{DomainError, InfraErrorKind};

pub mod games;
pub mod players;
pub mod profiles;
pub mod scores;
pub mod sessions;
pub mod standings;

/// Narrow a stored integer into its domain type.
///
/// A stored value that does not fit (negative tricks, seat 300) is treated
/// as corrupt data rather than a caller error.
pub(crate) fn narrow<T, S>(value: S, column: &str) -> Result<T, DomainError>
where
    T: TryFrom<S>,
    S: Copy + std::fmt::Display,
{
    T::try_from(value).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("{column} out of range: {value}"),
        )
    })
}
