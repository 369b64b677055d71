use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one team per `(participant_id, driver_ids)` entry for a race
    pub async fn create_many(
        &self,
        race_id: i32,
        teams: &[(i32, [i32; 4])],
    ) -> Result<(), DbErr> {
        if teams.is_empty() {
            return Ok(());
        }

        let created_at = Utc::now().naive_utc();
        let rows = teams
            .iter()
            .map(|(participant_id, driver_ids)| entity::team::ActiveModel {
                race_id: ActiveValue::Set(race_id),
                participant_id: ActiveValue::Set(*participant_id),
                driver1_id: ActiveValue::Set(driver_ids[0]),
                driver2_id: ActiveValue::Set(driver_ids[1]),
                driver3_id: ActiveValue::Set(driver_ids[2]),
                driver4_id: ActiveValue::Set(driver_ids[3]),
                points_earned: ActiveValue::Set(0),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            });

        entity::prelude::Team::insert_many(rows).exec(self.db).await?;

        Ok(())
    }

    pub async fn count_by_race(&self, race_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::RaceId.eq(race_id))
            .count(self.db)
            .await
    }

    /// Gets the teams of a race, highest points first
    pub async fn get_by_race(&self, race_id: i32) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::RaceId.eq(race_id))
            .order_by_desc(entity::team::Column::PointsEarned)
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites the points earned by a team
    pub async fn update_points(&self, team_id: i32, points_earned: i32) -> Result<(), DbErr> {
        entity::prelude::Team::update_many()
            .col_expr(
                entity::team::Column::PointsEarned,
                sea_orm::sea_query::Expr::value(points_earned),
            )
            .filter(entity::team::Column::Id.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets `(participant_id, points_earned)` for every team whose race is completed
    pub async fn get_completed_race_points(&self) -> Result<Vec<(i32, i32)>, DbErr> {
        entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::ParticipantId)
            .column(entity::team::Column::PointsEarned)
            .inner_join(entity::prelude::Race)
            .filter(entity::race::Column::Status.eq(entity::race::RaceStatus::Completed))
            .order_by_asc(entity::team::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }
}
