//! Core error types for the Karuna application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the donation platform.
///
/// Every error raised by the catalog, ledger and session services is local,
/// synchronous and recoverable: callers present the message and carry on.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{entity} '{id}' was not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} '{id}' already exists")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Invalid {entity} status transition for '{id}': {from} -> {to}")]
    InvalidTransition {
        entity: &'static str,
        id: String,
        from: String,
        to: String,
    },

    #[error("External provider failed: {0}")]
    ExternalProvider(#[from] ProviderError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn duplicate(entity: &'static str, id: impl Into<String>) -> Self {
        Error::DuplicateId {
            entity,
            id: id.into(),
        }
    }

    /// Error for a poisoned lock guarding in-memory service state.
    pub(crate) fn lock_poisoned(what: &str) -> Self {
        Error::Unexpected(format!("{} lock poisoned", what))
    }
}

/// Failures at the wallet / content-storage boundary.
///
/// These are never retried automatically; they surface to the user as a
/// notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("No wallet provider is installed")]
    NotInstalled,

    #[error("Wallet is not connected")]
    NotConnected,

    #[error("The {0} contract is not deployed")]
    ContractNotDeployed(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Content '{0}' not found")]
    ContentNotFound(String),

    #[error("Operation not supported: {0}")]
    Unsupported(String),
}

/// Persistence failures, flattened to strings by the storage layer so the
/// core stays free of diesel types.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Snapshot(err.to_string())
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
