use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ParticipantDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}
