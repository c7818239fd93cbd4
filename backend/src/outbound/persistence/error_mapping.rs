//! Diesel and pool error mapping shared by the repositories.

use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure through the port's connection constructor.
pub(super) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    connection(error.into_message())
}

/// Map a Diesel failure onto a port's query or connection constructor.
///
/// Closed connections become connection errors; every other failure is a
/// query error carrying the database message.
pub(super) fn map_diesel_error<E>(
    error: diesel::result::Error,
    query: impl FnOnce(String) -> E,
    connection: impl FnOnce(String) -> E,
) -> E {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => query(info.message().to_owned()),
        other => query(other.to_string()),
    }
}
