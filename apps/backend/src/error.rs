use thiserror::Error;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, ValidationKind,
};
use crate::errors::ErrorCode;

/// Store writes that surface as a single categorized failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    SaveScore,
    CreateSession,
    CompleteSession,
    CreateGame,
    AddPlayers,
    DeleteGame,
}

impl WriteOp {
    pub const fn message(&self) -> &'static str {
        match self {
            WriteOp::SaveScore => "failed to save score",
            WriteOp::CreateSession => "failed to create session",
            WriteOp::CompleteSession => "failed to complete session",
            WriteOp::CreateGame => "failed to create game",
            WriteOp::AddPlayers => "failed to add players",
            WriteOp::DeleteGame => "failed to delete game",
        }
    }

    pub const fn code(&self) -> ErrorCode {
        match self {
            WriteOp::SaveScore => ErrorCode::SaveScoreFailed,
            WriteOp::CreateSession => ErrorCode::CreateSessionFailed,
            WriteOp::CompleteSession => ErrorCode::CompleteSessionFailed,
            WriteOp::CreateGame => ErrorCode::CreateGameFailed,
            WriteOp::AddPlayers => ErrorCode::AddPlayersFailed,
            WriteOp::DeleteGame => ErrorCode::DeleteGameFailed,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("{}", .op.message())]
    WriteFailed {
        op: WriteOp,
        #[source]
        source: DomainError,
    },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Database timeout: {detail}")]
    Timeout { detail: String },
    #[error("Data corruption: {detail}")]
    DataCorruption { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable error code for this error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::WriteFailed { op, .. } => op.code(),
            AppError::DbUnavailable { .. } => ErrorCode::DbUnavailable,
            AppError::Timeout { .. } => ErrorCode::DbTimeout,
            AppError::DataCorruption { .. } => ErrorCode::DataCorruption,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Whether re-issuing the same call can succeed.
    ///
    /// Score writes are idempotent, so a caller may retry any failed write
    /// whose underlying cause is operational.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::DbUnavailable { .. } | AppError::Timeout { .. } => true,
            AppError::WriteFailed { source, .. } => matches!(
                source,
                DomainError::Infra(InfraErrorKind::DbUnavailable | InfraErrorKind::Timeout, _)
            ),
            _ => false,
        }
    }

    /// Wrap a store failure in the categorized error for `op`.
    pub fn write_failed(op: WriteOp, source: DomainError) -> Self {
        Self::WriteFailed { op, source }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::TooFewPlayers => ErrorCode::TooFewPlayers,
                    ValidationKind::TooManyPlayers => ErrorCode::TooManyPlayers,
                    ValidationKind::EmptyPlayerName => ErrorCode::EmptyPlayerName,
                    _ => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::OpenSessionExists => ErrorCode::OpenSessionExists,
                    ConflictKind::SeatOrderTaken => ErrorCode::SeatOrderTaken,
                    ConflictKind::DuplicateScore => ErrorCode::DuplicateScore,
                    _ => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
            DomainError::NotFound(_, detail) => AppError::not_found(ErrorCode::NotFound, detail),
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::DbUnavailable => AppError::DbUnavailable { detail },
                InfraErrorKind::Timeout => AppError::Timeout { detail },
                InfraErrorKind::DataCorruption => AppError::DataCorruption { detail },
                _ => AppError::internal(detail),
            },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(DomainError::from(e))
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::internal(format!("env var error: {e}"))
    }
}
