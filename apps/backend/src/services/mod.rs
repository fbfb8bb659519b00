//! Services: the operations callers invoke, returning `AppError`.

pub mod dashboard;
pub mod games;
pub mod sessions;
