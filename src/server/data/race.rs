use chrono::Utc;
use entity::race::RaceStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::race::CreateRaceDto, server::model::scoring::CategoryPoints};

pub struct RaceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RaceRepository<'a, C> {
    /// Creates a new instance of [`RaceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an upcoming race with no rollover
    pub async fn create(&self, race: &CreateRaceDto) -> Result<entity::race::Model, DbErr> {
        let race = entity::race::ActiveModel {
            name: ActiveValue::Set(race.name.clone()),
            race_number: ActiveValue::Set(race.race_number),
            date: ActiveValue::Set(race.date.clone()),
            is_special_race: ActiveValue::Set(race.is_special_race),
            status: ActiveValue::Set(RaceStatus::Upcoming),
            rollover_first: ActiveValue::Set(0),
            rollover_second: ActiveValue::Set(0),
            rollover_last: ActiveValue::Set(0),
            rollover_stage1: ActiveValue::Set(0),
            rollover_stage2: ActiveValue::Set(0),
            extra_drivers: ActiveValue::Set(race.extra_drivers.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        race.insert(self.db).await
    }

    /// Gets all races in season order
    pub async fn get_all(&self) -> Result<Vec<entity::race::Model>, DbErr> {
        entity::prelude::Race::find()
            .order_by_asc(entity::race::Column::RaceNumber)
            .order_by_asc(entity::race::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, race_id: i32) -> Result<Option<entity::race::Model>, DbErr> {
        entity::prelude::Race::find_by_id(race_id).one(self.db).await
    }

    /// Gets the race at `race_number` in the season, the lowest id wins if numbers repeat
    pub async fn get_by_race_number(
        &self,
        race_number: i32,
    ) -> Result<Option<entity::race::Model>, DbErr> {
        entity::prelude::Race::find()
            .filter(entity::race::Column::RaceNumber.eq(race_number))
            .order_by_asc(entity::race::Column::Id)
            .one(self.db)
            .await
    }

    /// Updates the editable details of a race, `race_number` is left unchanged
    ///
    /// Returns `Ok(None)` if the race does not exist.
    pub async fn update_details(
        &self,
        race_id: i32,
        details: &CreateRaceDto,
    ) -> Result<Option<entity::race::Model>, DbErr> {
        let race = match entity::prelude::Race::find_by_id(race_id)
            .one(self.db)
            .await?
        {
            Some(race) => race,
            None => return Ok(None),
        };

        let mut race_am = race.into_active_model();
        race_am.name = ActiveValue::Set(details.name.clone());
        race_am.date = ActiveValue::Set(details.date.clone());
        race_am.is_special_race = ActiveValue::Set(details.is_special_race);
        race_am.extra_drivers = ActiveValue::Set(details.extra_drivers.clone());

        let race = race_am.update(self.db).await?;

        Ok(Some(race))
    }

    pub async fn update_status(
        &self,
        race: entity::race::Model,
        status: RaceStatus,
    ) -> Result<entity::race::Model, DbErr> {
        let mut race_am = race.into_active_model();
        race_am.status = ActiveValue::Set(status);

        race_am.update(self.db).await
    }

    /// Overwrites all five rollover buckets of a race
    pub async fn update_rollover(
        &self,
        race: entity::race::Model,
        rollover: CategoryPoints,
    ) -> Result<entity::race::Model, DbErr> {
        let mut race_am = race.into_active_model();
        race_am.rollover_first = ActiveValue::Set(rollover.first);
        race_am.rollover_second = ActiveValue::Set(rollover.second);
        race_am.rollover_last = ActiveValue::Set(rollover.last);
        race_am.rollover_stage1 = ActiveValue::Set(rollover.stage1);
        race_am.rollover_stage2 = ActiveValue::Set(rollover.stage2);

        race_am.update(self.db).await
    }
}
