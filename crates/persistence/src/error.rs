//! Error classification for persistence operations.

use std::fmt;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Kind of database-enforced invariant that rejected a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    NotNull,
    Check,
    ValueTooLong,
}

impl ConstraintKind {
    /// Maps a PostgreSQL SQLSTATE code to a constraint kind.
    pub fn from_sqlstate(code: &str) -> Option<Self> {
        match code {
            "23505" => Some(ConstraintKind::Unique),
            "23503" => Some(ConstraintKind::ForeignKey),
            "23502" => Some(ConstraintKind::NotNull),
            "23514" => Some(ConstraintKind::Check),
            "22001" => Some(ConstraintKind::ValueTooLong),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKind::Unique => "unique",
            ConstraintKind::ForeignKey => "foreign_key",
            ConstraintKind::NotNull => "not_null",
            ConstraintKind::Check => "check",
            ConstraintKind::ValueTooLong => "value_too_long",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors returned by the client repository.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Constraint violation ({kind}): {message}")]
    ConstraintViolation {
        kind: ConstraintKind,
        constraint: Option<String>,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    /// Returns the constraint kind if this is a constraint violation.
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            StoreError::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

/// SQLSTATE class 08 is "connection exception"; 57P0x covers server shutdown.
fn is_connection_sqlstate(code: &str) -> bool {
    code.starts_with("08") || code.starts_with("57P0")
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound("Row not found".into()),
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.into_owned());
                match code.as_deref() {
                    Some(code) if is_connection_sqlstate(code) => {
                        StoreError::Connection(db_err.message().to_string())
                    }
                    Some(code) => match ConstraintKind::from_sqlstate(code) {
                        Some(kind) => StoreError::ConstraintViolation {
                            kind,
                            constraint: db_err.constraint().map(str::to_string),
                            message: db_err.message().to_string(),
                        },
                        None => StoreError::Database(sqlx::Error::Database(db_err)),
                    },
                    None => StoreError::Database(sqlx::Error::Database(db_err)),
                }
            }
            sqlx::Error::Io(e) => StoreError::Connection(e.to_string()),
            sqlx::Error::Tls(e) => StoreError::Connection(e.to_string()),
            sqlx::Error::Protocol(msg) => StoreError::Connection(msg),
            sqlx::Error::PoolTimedOut => StoreError::Connection("pool timed out".into()),
            sqlx::Error::PoolClosed => StoreError::Connection("pool closed".into()),
            sqlx::Error::WorkerCrashed => {
                StoreError::Connection("connection worker crashed".into())
            }
            other => StoreError::Database(other),
        }
    }
}
