use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, driver::DriverDto},
    server::{data::driver::DriverRepository, error::Error, model::app::AppState},
};

pub static DRIVER_TAG: &str = "driver";

/// Get all drivers ordered by car number
#[utoipa::path(
    get,
    path = "/api/drivers",
    tag = DRIVER_TAG,
    responses(
        (status = 200, description = "Success when retrieving drivers", body = Vec<DriverDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drivers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let drivers = DriverRepository::new(&state.db).get_all().await?;

    let driver_dtos: Vec<DriverDto> = drivers
        .into_iter()
        .map(|d| DriverDto {
            id: d.id,
            name: d.name,
            car_number: d.car_number,
            team_name: d.team_name,
            manufacturer: d.manufacturer,
            is_chartered: d.is_chartered,
            created_at: d.created_at,
        })
        .collect();

    Ok((StatusCode::OK, Json(driver_dtos)))
}
