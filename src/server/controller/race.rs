use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        race::{CreateRaceDto, RaceDto, RaceResultsDto},
        team::TeamDto,
    },
    server::{
        error::Error,
        model::{app::AppState, scoring::ScoringCars},
        service::{race::RaceService, results::ResultsService, team::TeamService},
    },
};

pub static RACE_TAG: &str = "race";

/// Get all races in season order
///
/// Completed races include their results with driver names resolved by car number.
#[utoipa::path(
    get,
    path = "/api/races",
    tag = RACE_TAG,
    responses(
        (status = 200, description = "Success when retrieving races", body = Vec<RaceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_races(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let races = RaceService::new(&state.db).get_races().await?;

    Ok((StatusCode::OK, Json(races)))
}

/// Create an upcoming race
#[utoipa::path(
    post,
    path = "/api/races",
    tag = RACE_TAG,
    request_body = CreateRaceDto,
    responses(
        (status = 200, description = "Race created", body = CreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_race(
    State(state): State<AppState>,
    Json(race): Json<CreateRaceDto>,
) -> Result<impl IntoResponse, Error> {
    let race = RaceService::new(&state.db).create_race(&race).await?;

    Ok((StatusCode::OK, Json(CreatedDto { id: race.id })))
}

/// Get a single race
#[utoipa::path(
    get,
    path = "/api/races/{id}",
    tag = RACE_TAG,
    params(
        ("id" = i32, Path, description = "Race ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving race", body = RaceDto),
        (status = 404, description = "Race not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_race(
    State(state): State<AppState>,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let race = RaceService::new(&state.db).get_race(race_id).await?;

    Ok((StatusCode::OK, Json(race)))
}

/// Update a race's name, date, special flag and extra drivers
///
/// The race number in the body is ignored.
#[utoipa::path(
    put,
    path = "/api/races/{id}",
    tag = RACE_TAG,
    params(
        ("id" = i32, Path, description = "Race ID")
    ),
    request_body = CreateRaceDto,
    responses(
        (status = 200, description = "Race updated", body = MessageDto),
        (status = 404, description = "Race not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_race(
    State(state): State<AppState>,
    Path(race_id): Path<i32>,
    Json(details): Json<CreateRaceDto>,
) -> Result<impl IntoResponse, Error> {
    RaceService::new(&state.db)
        .update_race(race_id, &details)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Race updated"))))
}

/// Randomly draw a team of four chartered drivers for every participant
///
/// # Responses
/// - 200 (OK): Teams created and race moved to `in_progress`
/// - 400 (Bad Request): Teams already generated, or not enough chartered drivers
/// - 404 (Not Found): Race does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/races/{id}/generate-teams",
    tag = RACE_TAG,
    params(
        ("id" = i32, Path, description = "Race ID")
    ),
    responses(
        (status = 200, description = "Teams generated", body = MessageDto),
        (status = 400, description = "Teams already generated or not enough chartered drivers", body = ErrorDto),
        (status = 404, description = "Race not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_teams(
    State(state): State<AppState>,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let mut rng = StdRng::from_os_rng();

    TeamService::new(&state.db)
        .generate_teams(race_id, &mut rng)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Teams generated successfully")),
    ))
}

/// Get the teams of a race, highest points first
#[utoipa::path(
    get,
    path = "/api/races/{id}/teams",
    tag = RACE_TAG,
    params(
        ("id" = i32, Path, description = "Race ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving teams", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_race_teams(
    State(state): State<AppState>,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let teams = RaceService::new(&state.db).get_teams(race_id).await?;

    Ok((StatusCode::OK, Json(teams)))
}

/// Enter the scoring cars of a race and calculate team points
///
/// Re-entering results recomputes points and rollover from the same inputs.
///
/// # Responses
/// - 200 (OK): Results stored, rollover forwarded and team points overwritten
/// - 404 (Not Found): Race does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/races/{id}/results",
    tag = RACE_TAG,
    params(
        ("id" = i32, Path, description = "Race ID")
    ),
    request_body = RaceResultsDto,
    responses(
        (status = 200, description = "Results entered", body = MessageDto),
        (status = 404, description = "Race not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn enter_race_results(
    State(state): State<AppState>,
    Path(race_id): Path<i32>,
    Json(results): Json<RaceResultsDto>,
) -> Result<impl IntoResponse, Error> {
    ResultsService::new(&state.db)
        .enter_results(race_id, ScoringCars::from(results))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "Race results entered and points calculated",
        )),
    ))
}
