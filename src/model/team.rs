use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A participant's team for one race with display fields resolved
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub race_id: i32,
    pub participant_id: i32,
    pub driver1_id: i32,
    pub driver2_id: i32,
    pub driver3_id: i32,
    pub driver4_id: i32,
    pub points_earned: i32,
    pub participant_name: String,
    pub driver1_name: String,
    pub driver1_number: String,
    pub driver2_name: String,
    pub driver2_number: String,
    pub driver3_name: String,
    pub driver3_number: String,
    pub driver4_name: String,
    pub driver4_number: String,
    pub created_at: NaiveDateTime,
}
