use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RaceDto {
    pub id: i32,
    pub name: String,
    pub race_number: i32,
    pub date: Option<String>,
    pub is_special_race: bool,
    /// One of `upcoming`, `in_progress` or `completed`
    pub status: String,
    pub rollover_first: i32,
    pub rollover_second: i32,
    pub rollover_last: i32,
    pub rollover_stage1: i32,
    pub rollover_stage2: i32,
    pub extra_drivers: Option<String>,
    /// Scoring results, only present once the race is completed
    pub results: Option<Vec<RaceResultDto>>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RaceResultDto {
    pub id: i32,
    pub race_id: i32,
    pub car_number: String,
    pub position: Option<i32>,
    pub is_first_place: bool,
    pub is_second_place: bool,
    pub is_last_place: bool,
    pub is_stage1_winner: bool,
    pub is_stage2_winner: bool,
    /// Name of the driver with this car number, `Unknown` when none matches
    pub driver_name: String,
    pub created_at: NaiveDateTime,
}

/// Request body for creating or updating a race
///
/// `race_number` is ignored on update.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRaceDto {
    pub name: String,
    pub race_number: i32,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub is_special_race: bool,
    #[serde(default)]
    pub extra_drivers: Option<String>,
}

/// Request body carrying the car numbers of the five scoring positions
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RaceResultsDto {
    pub first_place_car_number: String,
    pub second_place_car_number: String,
    pub last_place_car_number: String,
    pub stage1_winner_car_number: String,
    pub stage2_winner_car_number: String,
}
