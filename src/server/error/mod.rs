//! Error types for the pool server.
//!
//! Domain errors (race lifecycle, configuration) live in their own modules and are
//! aggregated into [`Error`]. Every error implements `IntoResponse` so handlers can
//! return `Result<_, Error>` directly.

pub mod config;
pub mod race;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, race::RaceError},
};

/// Main error type for the pool server.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts domain and
/// library errors automatically. The `IntoResponse` implementation maps errors to
/// HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Race lifecycle error (missing race, teams already drawn, too few drivers).
    #[error(transparent)]
    RaceError(#[from] RaceError),
    /// Internal error indicating inconsistent stored data or a bug.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Socket error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Team generation preconditions not met
/// - 404 Not Found - Race does not exist
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RaceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
