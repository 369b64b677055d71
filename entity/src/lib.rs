//! SeaORM entities for the pool tracker tables.

pub mod prelude;

pub mod driver;
pub mod participant;
pub mod race;
pub mod race_result;
pub mod team;
