use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RaceError {
    #[error("Race ID {0} not found")]
    RaceNotFound(i32),
    #[error("Teams have already been generated for race ID {0}")]
    TeamsAlreadyGenerated(i32),
    #[error("Not enough chartered drivers: {available} available, {required} required")]
    InsufficientDrivers { available: usize, required: usize },
}

impl RaceError {
    fn error_response(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for RaceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::RaceNotFound(_) => Self::error_response(StatusCode::NOT_FOUND, "Race not found"),
            Self::TeamsAlreadyGenerated(_) => Self::error_response(
                StatusCode::BAD_REQUEST,
                "Teams already generated for this race",
            ),
            Self::InsufficientDrivers { .. } => {
                Self::error_response(StatusCode::BAD_REQUEST, "Not enough chartered drivers")
            }
        }
    }
}
