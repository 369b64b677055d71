use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{DriverModel, ParticipantModel, RaceModel, RaceResultModel, TeamModel},
    TestContext,
};

impl TestContext {
    pub fn pool<'a>(&'a mut self) -> PoolFixtures<'a> {
        PoolFixtures { setup: self }
    }
}

pub struct PoolFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PoolFixtures<'a> {
    pub async fn insert_participant(&self, name: &str) -> Result<ParticipantModel, TestError> {
        Ok(
            entity::prelude::Participant::insert(entity::participant::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_driver(
        &self,
        car_number: &str,
        name: &str,
        is_chartered: bool,
    ) -> Result<DriverModel, TestError> {
        Ok(
            entity::prelude::Driver::insert(entity::driver::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                car_number: ActiveValue::Set(car_number.to_string()),
                team_name: ActiveValue::Set(None),
                manufacturer: ActiveValue::Set(None),
                is_chartered: ActiveValue::Set(is_chartered),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_race(
        &self,
        race_number: i32,
        is_special_race: bool,
    ) -> Result<RaceModel, TestError> {
        self.insert_race_with_status(race_number, is_special_race, entity::race::RaceStatus::Upcoming)
            .await
    }

    pub async fn insert_race_with_status(
        &self,
        race_number: i32,
        is_special_race: bool,
        status: entity::race::RaceStatus,
    ) -> Result<RaceModel, TestError> {
        Ok(
            entity::prelude::Race::insert(entity::race::ActiveModel {
                name: ActiveValue::Set(format!("Race {}", race_number)),
                race_number: ActiveValue::Set(race_number),
                date: ActiveValue::Set(None),
                is_special_race: ActiveValue::Set(is_special_race),
                status: ActiveValue::Set(status),
                rollover_first: ActiveValue::Set(0),
                rollover_second: ActiveValue::Set(0),
                rollover_last: ActiveValue::Set(0),
                rollover_stage1: ActiveValue::Set(0),
                rollover_stage2: ActiveValue::Set(0),
                extra_drivers: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a team for `participant_id` made of the four given driver record ids
    pub async fn insert_team(
        &self,
        race_id: i32,
        participant_id: i32,
        driver_ids: [i32; 4],
        points_earned: i32,
    ) -> Result<TeamModel, TestError> {
        Ok(
            entity::prelude::Team::insert(entity::team::ActiveModel {
                race_id: ActiveValue::Set(race_id),
                participant_id: ActiveValue::Set(participant_id),
                driver1_id: ActiveValue::Set(driver_ids[0]),
                driver2_id: ActiveValue::Set(driver_ids[1]),
                driver3_id: ActiveValue::Set(driver_ids[2]),
                driver4_id: ActiveValue::Set(driver_ids[3]),
                points_earned: ActiveValue::Set(points_earned),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a result row holding only the stage 1 winner flag
    pub async fn insert_stage1_result(
        &self,
        race_id: i32,
        car_number: &str,
    ) -> Result<RaceResultModel, TestError> {
        Ok(
            entity::prelude::RaceResult::insert(entity::race_result::ActiveModel {
                race_id: ActiveValue::Set(race_id),
                car_number: ActiveValue::Set(car_number.to_string()),
                position: ActiveValue::Set(None),
                is_first_place: ActiveValue::Set(false),
                is_second_place: ActiveValue::Set(false),
                is_last_place: ActiveValue::Set(false),
                is_stage1_winner: ActiveValue::Set(true),
                is_stage2_winner: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
