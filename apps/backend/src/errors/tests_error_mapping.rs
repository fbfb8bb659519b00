// Unit tests for error mapping - pure domain logic without database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode, WriteOp};

#[test]
fn maps_roster_validation_codes() {
    let de = DomainError::validation(ValidationKind::TooFewPlayers, "At least 2 players are required");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::TooFewPlayers);
    assert_eq!(app.to_string(), "Validation error: At least 2 players are required");

    let de = DomainError::validation(ValidationKind::TooManyPlayers, "Maximum 7 players allowed");
    let app: AppError = de.into();
    assert_eq!(app.code().as_str(), "TOO_MANY_PLAYERS");

    let other = DomainError::validation_other("bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_conflicts() {
    let open = DomainError::conflict(ConflictKind::OpenSessionExists, "open session");
    let app: AppError = open.into();
    assert_eq!(app.code().as_str(), "OPEN_SESSION_EXISTS");

    let other = DomainError::conflict(ConflictKind::Other("Unique".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Other("Record".into()), "gone");
    let app: AppError = nf.into();
    assert_eq!(app.code(), ErrorCode::NotFound);
    assert_eq!(app.to_string(), "Not found: gone");
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert!(matches!(app, AppError::Timeout { .. }));
    assert!(app.is_retryable());

    let bad = DomainError::infra(InfraErrorKind::DataCorruption, "negative tricks");
    let app: AppError = bad.into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert!(!app.is_retryable());
}

#[test]
fn write_failures_are_categorized_per_operation() {
    let cause = DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");

    let app = AppError::write_failed(WriteOp::SaveScore, cause.clone());
    assert_eq!(app.to_string(), "failed to save score");
    assert_eq!(app.code(), ErrorCode::SaveScoreFailed);
    assert!(app.is_retryable());

    let app = AppError::write_failed(WriteOp::CreateSession, cause.clone());
    assert_eq!(app.to_string(), "failed to create session");

    let app = AppError::write_failed(WriteOp::CompleteSession, cause);
    assert_eq!(app.to_string(), "failed to complete session");

    let conflict = DomainError::conflict(ConflictKind::SeatOrderTaken, "seat");
    let app = AppError::write_failed(WriteOp::AddPlayers, conflict);
    assert_eq!(app.to_string(), "failed to add players");
    assert!(!app.is_retryable());
}

#[test]
fn error_codes_are_screaming_snake_case() {
    let codes = [
        ErrorCode::SaveScoreFailed,
        ErrorCode::CreateGameFailed,
        ErrorCode::NotFound,
        ErrorCode::DbUnavailable,
    ];
    for code in codes {
        let s = code.as_str();
        assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'), "{s}");
        assert_eq!(code.to_string(), s);
    }
}
