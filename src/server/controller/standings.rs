use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, standing::StandingDto},
    server::{error::Error, model::app::AppState, service::standings::StandingsService},
};

pub static STANDINGS_TAG: &str = "standings";

/// Get season standings over completed races
///
/// # Responses
/// - 200 (OK): Participants ranked by total points, ties ordered by name
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/standings",
    tag = STANDINGS_TAG,
    responses(
        (status = 200, description = "Success when retrieving standings", body = Vec<StandingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_standings(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let standings = StandingsService::new(&state.db).get_standings().await?;

    Ok((StatusCode::OK, Json(standings)))
}
