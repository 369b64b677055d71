use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "races")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub race_number: i32,
    pub date: Option<String>,
    pub is_special_race: bool,
    pub status: RaceStatus,
    pub rollover_first: i32,
    pub rollover_second: i32,
    pub rollover_last: i32,
    pub rollover_stage1: i32,
    pub rollover_stage2: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub extra_drivers: Option<String>,
    pub created_at: DateTime,
}

/// Lifecycle of a race: teams are drawn while upcoming, results complete it
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum RaceStatus {
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl RaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::race_result::Entity")]
    RaceResult,
    #[sea_orm(has_many = "super::team::Entity")]
    Team,
}

impl Related<super::race_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaceResult.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
