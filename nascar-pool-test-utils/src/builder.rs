//! Declarative test builder.
//!
//! The builder queues tables and fixtures, then creates them all in `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test databases with tables and pool fixtures.
/// Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_pool_tables: bool,

    // Database fixtures to insert
    participants: Vec<String>,
    drivers: Vec<(String, String, bool)>, // (car_number, name, is_chartered)
    races: Vec<(i32, bool)>,              // (race_number, is_special_race)
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_pool_tables: false,
            participants: Vec::new(),
            drivers: Vec::new(),
            races: Vec::new(),
        }
    }

    /// Add every pool table to the test database.
    ///
    /// Creates Participant, Driver, Race, RaceResult, and Team in foreign key order.
    pub fn with_pool_tables(mut self) -> Self {
        self.include_pool_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nascar_pool_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), nascar_pool_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Participant)
    ///     .with_table(Driver)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a participant during `build()`. Participants get ascending ids in call order.
    pub fn with_participant(mut self, name: impl Into<String>) -> Self {
        self.participants.push(name.into());
        self
    }

    /// Insert a driver during `build()`.
    ///
    /// # Arguments
    /// - `car_number` - The driver's car number
    /// - `name` - Display name
    /// - `is_chartered` - Whether the car is eligible for payouts
    pub fn with_driver(
        mut self,
        car_number: impl Into<String>,
        name: impl Into<String>,
        is_chartered: bool,
    ) -> Self {
        self.drivers
            .push((car_number.into(), name.into(), is_chartered));
        self
    }

    /// Insert `count` chartered drivers numbered `1..=count` during `build()`.
    pub fn with_chartered_drivers(mut self, count: i32) -> Self {
        for number in 1..=count {
            self.drivers
                .push((number.to_string(), format!("Driver {}", number), true));
        }
        self
    }

    /// Insert an upcoming race with zero rollover during `build()`.
    pub fn with_race(mut self, race_number: i32, is_special_race: bool) -> Self {
        self.races.push((race_number, is_special_race));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (pool tables if specified, then custom tables)
    /// 2. Inserts participants, drivers, then races
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_pool_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Participant),
                schema.create_table_from_entity(entity::prelude::Driver),
                schema.create_table_from_entity(entity::prelude::Race),
                schema.create_table_from_entity(entity::prelude::RaceResult),
                schema.create_table_from_entity(entity::prelude::Team),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.participants {
            setup.pool().insert_participant(&name).await?;
        }

        for (car_number, name, is_chartered) in self.drivers {
            setup
                .pool()
                .insert_driver(&car_number, &name, is_chartered)
                .await?;
        }

        for (race_number, is_special_race) in self.races {
            setup.pool().insert_race(race_number, is_special_race).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::*;

    #[tokio::test]
    async fn test_builder_creates_pool_tables() {
        let result = TestBuilder::new().with_pool_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_methods() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_pool_tables()
            .with_participant("Alice")
            .with_chartered_drivers(4)
            .with_driver("51", "Open Entry", false)
            .with_race(1, false)
            .build()
            .await?;

        assert_eq!(entity::prelude::Participant::find().count(&test.db).await?, 1);
        assert_eq!(entity::prelude::Driver::find().count(&test.db).await?, 5);
        assert_eq!(entity::prelude::Race::find().count(&test.db).await?, 1);

        Ok(())
    }
}
