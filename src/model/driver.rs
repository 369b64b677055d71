use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DriverDto {
    pub id: i32,
    pub name: String,
    pub car_number: String,
    pub team_name: Option<String>,
    pub manufacturer: Option<String>,
    pub is_chartered: bool,
    pub created_at: NaiveDateTime,
}
