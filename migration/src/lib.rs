pub use sea_orm_migration::prelude::*;

mod m20260301_000001_participant;
mod m20260301_000002_driver;
mod m20260301_000003_race;
mod m20260301_000004_race_result;
mod m20260301_000005_team;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_participant::Migration),
            Box::new(m20260301_000002_driver::Migration),
            Box::new(m20260301_000003_race::Migration),
            Box::new(m20260301_000004_race_result::Migration),
            Box::new(m20260301_000005_team::Migration),
        ]
    }
}
