use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct DriverRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DriverRepository<'a, C> {
    /// Creates a new instance of [`DriverRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all drivers ordered by car number
    pub async fn get_all(&self) -> Result<Vec<entity::driver::Model>, DbErr> {
        entity::prelude::Driver::find()
            .order_by_asc(entity::driver::Column::CarNumber)
            .all(self.db)
            .await
    }

    /// Gets the chartered driver pool ordered by ascending id
    pub async fn get_chartered(&self) -> Result<Vec<entity::driver::Model>, DbErr> {
        entity::prelude::Driver::find()
            .filter(entity::driver::Column::IsChartered.eq(true))
            .order_by_asc(entity::driver::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the drivers with the provided record ids, ids without a driver are skipped
    pub async fn get_many_by_ids(
        &self,
        driver_ids: &[i32],
    ) -> Result<Vec<entity::driver::Model>, DbErr> {
        if driver_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Driver::find()
            .filter(entity::driver::Column::Id.is_in(driver_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets the drivers with the provided car numbers
    pub async fn get_many_by_car_numbers(
        &self,
        car_numbers: &[String],
    ) -> Result<Vec<entity::driver::Model>, DbErr> {
        if car_numbers.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Driver::find()
            .filter(entity::driver::Column::CarNumber.is_in(car_numbers.iter().cloned()))
            .all(self.db)
            .await
    }
}
