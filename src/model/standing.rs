use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StandingDto {
    pub participant_id: i32,
    pub participant_name: String,
    /// Points earned across completed races
    pub total_points: i32,
    pub races_completed: i32,
    pub rank: i32,
}
