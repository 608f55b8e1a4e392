use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures surfaced by the data-access layer.
///
/// The set is closed: a duplicate business ID on insert, or the store being unreachable.
/// Absence of a record is not an error and is reported through `Option`/`bool` results.
#[derive(Error, Debug)]
pub enum DataError {
    /// A soldier with this business ID already exists.
    ///
    /// Raised only by inserts rejected by the unique index on the business ID.
    /// Results in a 409 Conflict response naming the conflicting ID.
    #[error("Soldier with ID {0} already exists.")]
    DuplicateKey(i64),

    /// The store is not connected or a store call failed.
    ///
    /// `None` means no connection was held and no store call was attempted. Results in a
    /// 503 Service Unavailable response; the underlying store error is only logged.
    #[error("Database connection is not available.")]
    Unavailable(#[source] Option<DbErr>),
}

/// Any store failure that was not classified at the call site is an availability failure.
impl From<DbErr> for DataError {
    fn from(err: DbErr) -> Self {
        DataError::Unavailable(Some(err))
    }
}

/// Converts data-access errors into HTTP responses.
///
/// # Returns
/// - 409 Conflict - For `DuplicateKey`, message includes the business ID
/// - 503 Service Unavailable - For `Unavailable`
impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        match self {
            Self::DuplicateKey(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Unavailable(ref source) => {
                match source {
                    Some(err) => tracing::warn!("Store operation failed: {}", err),
                    None => tracing::warn!("Store operation attempted while disconnected"),
                }

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
