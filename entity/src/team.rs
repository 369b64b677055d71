use sea_orm::entity::prelude::*;

/// A participant's four drivers for one race
///
/// Driver columns reference `drivers.id` and are resolved by explicit lookup.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub race_id: i32,
    pub participant_id: i32,
    pub driver1_id: i32,
    pub driver2_id: i32,
    pub driver3_id: i32,
    pub driver4_id: i32,
    pub points_earned: i32,
    pub created_at: DateTime,
}

impl Model {
    pub fn driver_ids(&self) -> [i32; 4] {
        [
            self.driver1_id,
            self.driver2_id,
            self.driver3_id,
            self.driver4_id,
        ]
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::race::Entity",
        from = "Column::RaceId",
        to = "super::race::Column::Id"
    )]
    Race,
    #[sea_orm(
        belongs_to = "super::participant::Entity",
        from = "Column::ParticipantId",
        to = "super::participant::Column::Id"
    )]
    Participant,
}

impl Related<super::race::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Race.def()
    }
}

impl Related<super::participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
