//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main crate so fixtures and tests read the same.

pub type ParticipantModel = entity::participant::Model;

pub type DriverModel = entity::driver::Model;

pub type RaceModel = entity::race::Model;

pub type RaceResultModel = entity::race_result::Model;

pub type TeamModel = entity::team::Model;
