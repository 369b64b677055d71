use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::scoring::ResultFlags;

pub struct RaceResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RaceResultRepository<'a, C> {
    /// Creates a new instance of [`RaceResultRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_race(
        &self,
        race_id: i32,
    ) -> Result<Vec<entity::race_result::Model>, DbErr> {
        entity::prelude::RaceResult::find()
            .filter(entity::race_result::Column::RaceId.eq(race_id))
            .order_by_asc(entity::race_result::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets results for many races at once, used when listing races
    pub async fn get_by_races(
        &self,
        race_ids: &[i32],
    ) -> Result<Vec<entity::race_result::Model>, DbErr> {
        if race_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RaceResult::find()
            .filter(entity::race_result::Column::RaceId.is_in(race_ids.iter().copied()))
            .order_by_asc(entity::race_result::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every result row of a race
    pub async fn delete_by_race(&self, race_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RaceResult::delete_many()
            .filter(entity::race_result::Column::RaceId.eq(race_id))
            .exec(self.db)
            .await
    }

    /// Inserts one result row per car with the provided flags
    pub async fn create_many(
        &self,
        race_id: i32,
        results: &[(String, ResultFlags)],
    ) -> Result<(), DbErr> {
        if results.is_empty() {
            return Ok(());
        }

        let created_at = Utc::now().naive_utc();
        let rows = results
            .iter()
            .map(|(car_number, flags)| entity::race_result::ActiveModel {
                race_id: ActiveValue::Set(race_id),
                car_number: ActiveValue::Set(car_number.clone()),
                position: ActiveValue::Set(None),
                is_first_place: ActiveValue::Set(flags.first_place),
                is_second_place: ActiveValue::Set(flags.second_place),
                is_last_place: ActiveValue::Set(flags.last_place),
                is_stage1_winner: ActiveValue::Set(flags.stage1_winner),
                is_stage2_winner: ActiveValue::Set(flags.stage2_winner),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            });

        entity::prelude::RaceResult::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
