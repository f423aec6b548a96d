//! Shared Diesel and pool error mapping for the repository adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{
    AssignmentRepositoryError, ExperimentRepositoryError, UserRepositoryError,
};

use super::pool::PoolError;

/// Port error with connection and query categories.
pub(crate) trait RepositoryError {
    fn from_connection(message: String) -> Self;
    fn from_query(message: String) -> Self;
}

macro_rules! impl_repository_error {
    ($($error:ty),* $(,)?) => {
        $(
            impl RepositoryError for $error {
                fn from_connection(message: String) -> Self {
                    <$error>::connection(message)
                }

                fn from_query(message: String) -> Self {
                    <$error>::query(message)
                }
            }
        )*
    };
}

impl_repository_error!(
    ExperimentRepositoryError,
    AssignmentRepositoryError,
    UserRepositoryError,
);

/// Map pool checkout failures to connection errors.
pub(crate) fn map_pool_error<E: RepositoryError>(error: PoolError) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    E::from_connection(message)
}

/// Map Diesel failures to port errors, logging the raw cause at debug level.
pub(crate) fn map_diesel_error<E: RepositoryError>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => E::from_query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => E::from_query("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            E::from_connection("database connection error".to_owned())
        }
        _ => E::from_query("database error".to_owned()),
    }
}
