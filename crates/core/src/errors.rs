//! Core error types for the Synkr entity store.
//!
//! Every failure the store can produce is an ordinary result outcome. None of
//! these variants indicate a corrupted store: an operation that returns an
//! error has left every collection exactly as it found it.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for store and service operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("Already exists: {0}")]
    AlreadyExists(#[from] AlreadyExistsError),

    /// Authentication is a plain, case-sensitive equality check on email and
    /// credential. There is no hashing, lockout or rate limiting behind it.
    #[error("Email or credential does not match any account")]
    InvalidCredential,

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The store lock was poisoned by a panic in another caller.
    #[error("Entity store unavailable: {0}")]
    Unavailable(String),
}

/// An identifier that did not resolve in its collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("account '{0}'")]
    Account(String),

    #[error("task '{0}'")]
    Task(String),

    #[error("goal '{0}'")]
    Goal(String),

    #[error("step '{0}'")]
    Step(String),

    #[error("achievement definition '{0}'")]
    AchievementDefinition(String),
}

/// A create operation collided with an existing record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlreadyExistsError {
    #[error("an account with email '{0}' is already registered")]
    Email(String),

    #[error("account id '{0}'")]
    Account(String),

    #[error("task id '{0}'")]
    Task(String),

    #[error("goal id '{0}'")]
    Goal(String),

    #[error("step id '{0}'")]
    Step(String),

    #[error("achievement definition id '{0}'")]
    AchievementDefinition(String),
}

/// Validation errors for caller-supplied input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
