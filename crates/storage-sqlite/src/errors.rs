//! Errors raised inside the SQLite layer and their mapping onto
//! `karuna_core::Error`.

use diesel::result::Error as DieselError;
use karuna_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Failures of the snapshot database. Never leaves this crate: callers see
/// `Error::Database`.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Cannot prepare database directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot writer unavailable: {0}")]
    WriterUnavailable(String),

    /// A core error raised by a job running inside a write transaction.
    #[error("{0}")]
    CoreError(String),
}

impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::CoreError(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        let db_error = match err {
            StorageError::ConnectionFailed(e) => DatabaseError::ConnectionFailed(e.to_string()),
            StorageError::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            StorageError::PoolError(e) => DatabaseError::PoolCreationFailed(e.to_string()),
            StorageError::QueryFailed(DieselError::NotFound) => {
                DatabaseError::NotFound("snapshot row".to_string())
            }
            StorageError::QueryFailed(e) => DatabaseError::QueryFailed(e.to_string()),
            StorageError::MigrationFailed(e) => DatabaseError::MigrationFailed(e),
            StorageError::WriterUnavailable(e) | StorageError::CoreError(e) => {
                DatabaseError::Internal(e)
            }
        };
        Error::Database(db_error)
    }
}

/// `.into_core()` on diesel, r2d2 and connection results.
///
/// Implementing `From<DieselError> for karuna_core::Error` here is ruled out
/// by coherence, hence the extension trait.
pub trait IntoCore<T> {
    fn into_core(self) -> karuna_core::Result<T>;
}

macro_rules! impl_into_core {
    ($($source:ty),+ $(,)?) => {
        $(
            impl<T> IntoCore<T> for std::result::Result<T, $source> {
                fn into_core(self) -> karuna_core::Result<T> {
                    self.map_err(|e| StorageError::from(e).into())
                }
            }
        )+
    };
}

impl_into_core!(DieselError, r2d2::Error, diesel::ConnectionError);
