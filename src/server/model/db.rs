//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server.

/// A person playing in the pool.
pub type ParticipantModel = entity::participant::Model;

/// A driver and car number; `is_chartered` decides whether their wins pay out.
pub type DriverModel = entity::driver::Model;

/// A race in the season, including the rollover carried into it.
///
/// # Fields (from `entity::race::Model`)
/// - `race_number` - Season position, the next race is `race_number + 1`
/// - `status` - `upcoming`, `in_progress` or `completed`
/// - `rollover_*` - Points carried in from the previous race, per scoring category
pub type RaceModel = entity::race::Model;

/// Scoring flags recorded for one car in one race.
pub type RaceResultModel = entity::race_result::Model;
