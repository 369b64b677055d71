//! Test fixture modules for database record creation.
//!
//! - `pool` - inserts participants, drivers, races, results and teams
//! - `factory` - in-memory models that never touch the database

pub mod factory;
pub mod pool;
