use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, participant::ParticipantDto},
    server::{data::participant::ParticipantRepository, error::Error, model::app::AppState},
};

pub static PARTICIPANT_TAG: &str = "participant";

/// Get all participants ordered by name
#[utoipa::path(
    get,
    path = "/api/participants",
    tag = PARTICIPANT_TAG,
    responses(
        (status = 200, description = "Success when retrieving participants", body = Vec<ParticipantDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_participants(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let participants = ParticipantRepository::new(&state.db).get_all().await?;

    let participant_dtos: Vec<ParticipantDto> = participants
        .into_iter()
        .map(|p| ParticipantDto {
            id: p.id,
            name: p.name,
            created_at: p.created_at,
        })
        .collect();

    Ok((StatusCode::OK, Json(participant_dtos)))
}
