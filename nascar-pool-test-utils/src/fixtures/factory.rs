//! Factory functions for generating mock pool database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of pure scoring code.

use chrono::Utc;

use crate::model::{DriverModel, RaceModel, TeamModel};

/// Create an upcoming race model with no rollover.
///
/// # Arguments
/// - `race_number` - Position of the race in the season
/// - `is_special_race` - Whether payouts are doubled
pub fn mock_race_model(race_number: i32, is_special_race: bool) -> RaceModel {
    RaceModel {
        id: race_number,
        name: format!("Race {}", race_number),
        race_number,
        date: None,
        is_special_race,
        status: entity::race::RaceStatus::Upcoming,
        rollover_first: 0,
        rollover_second: 0,
        rollover_last: 0,
        rollover_stage1: 0,
        rollover_stage2: 0,
        extra_drivers: None,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a driver model whose record id equals its numeric car number.
pub fn mock_driver_model(car_number: i32, is_chartered: bool) -> DriverModel {
    DriverModel {
        id: car_number,
        name: format!("Driver {}", car_number),
        car_number: car_number.to_string(),
        team_name: None,
        manufacturer: None,
        is_chartered,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a team model with no points for the given drivers.
pub fn mock_team_model(race_id: i32, participant_id: i32, driver_ids: [i32; 4]) -> TeamModel {
    TeamModel {
        id: participant_id,
        race_id,
        participant_id,
        driver1_id: driver_ids[0],
        driver2_id: driver_ids[1],
        driver3_id: driver_ids[2],
        driver4_id: driver_ids[3],
        points_earned: 0,
        created_at: Utc::now().naive_utc(),
    }
}
