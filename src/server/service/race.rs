use std::collections::HashMap;

use entity::race::RaceStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        race::{CreateRaceDto, RaceDto, RaceResultDto},
        team::TeamDto,
    },
    server::{
        data::{
            driver::DriverRepository, participant::ParticipantRepository, race::RaceRepository,
            race_result::RaceResultRepository, team::TeamRepository,
        },
        error::{race::RaceError, Error},
        model::db::{DriverModel, RaceModel, RaceResultModel},
    },
};

static UNKNOWN_DRIVER_NAME: &str = "Unknown";

pub struct RaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaceService<'a> {
    /// Creates a new instance of [`RaceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_race(&self, race: &CreateRaceDto) -> Result<RaceModel, Error> {
        let race = RaceRepository::new(self.db).create(race).await?;

        Ok(race)
    }

    /// Updates name, date, special flag and extra drivers of a race
    pub async fn update_race(
        &self,
        race_id: i32,
        details: &CreateRaceDto,
    ) -> Result<RaceModel, Error> {
        RaceRepository::new(self.db)
            .update_details(race_id, details)
            .await?
            .ok_or_else(|| RaceError::RaceNotFound(race_id).into())
    }

    /// Gets every race in season order, completed races include their results
    pub async fn get_races(&self) -> Result<Vec<RaceDto>, Error> {
        let races = RaceRepository::new(self.db).get_all().await?;

        let completed_ids: Vec<i32> = races
            .iter()
            .filter(|r| r.status == RaceStatus::Completed)
            .map(|r| r.id)
            .collect();
        let results = RaceResultRepository::new(self.db)
            .get_by_races(&completed_ids)
            .await?;
        let driver_names = self.driver_names(&results).await?;

        let mut results_by_race: HashMap<i32, Vec<RaceResultModel>> = HashMap::new();
        for result in results {
            results_by_race
                .entry(result.race_id)
                .or_default()
                .push(result);
        }

        let races = races
            .into_iter()
            .map(|race| {
                let results = results_by_race.remove(&race.id);
                race_to_dto(race, results, &driver_names)
            })
            .collect();

        Ok(races)
    }

    /// Gets a single race, with results once completed
    pub async fn get_race(&self, race_id: i32) -> Result<RaceDto, Error> {
        let race = RaceRepository::new(self.db)
            .get_by_id(race_id)
            .await?
            .ok_or(RaceError::RaceNotFound(race_id))?;

        if race.status != RaceStatus::Completed {
            return Ok(race_to_dto(race, None, &HashMap::new()));
        }

        let results = RaceResultRepository::new(self.db)
            .get_by_race(race.id)
            .await?;
        let driver_names = self.driver_names(&results).await?;

        Ok(race_to_dto(race, Some(results), &driver_names))
    }

    /// Gets the teams of a race with participant and driver display fields, highest
    /// points first
    ///
    /// An unknown race has no teams and yields an empty list.
    pub async fn get_teams(&self, race_id: i32) -> Result<Vec<TeamDto>, Error> {
        let teams = TeamRepository::new(self.db).get_by_race(race_id).await?;
        if teams.is_empty() {
            return Ok(Vec::new());
        }

        let participants: HashMap<i32, String> = ParticipantRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();
        let driver_ids: Vec<i32> = teams.iter().flat_map(|t| t.driver_ids()).collect();
        let drivers: HashMap<i32, DriverModel> = DriverRepository::new(self.db)
            .get_many_by_ids(&driver_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();

        let mut team_dtos = Vec::with_capacity(teams.len());
        for team in teams {
            let participant_name = participants.get(&team.participant_id).ok_or_else(|| {
                // Foreign keys make this unreachable unless rows were removed by hand
                Error::InternalError(format!(
                    "Participant ID {} not found for team ID {}",
                    team.participant_id, team.id
                ))
            })?;

            let mut team_drivers = Vec::with_capacity(4);
            for driver_id in team.driver_ids() {
                let driver = drivers.get(&driver_id).ok_or_else(|| {
                    Error::InternalError(format!(
                        "Driver ID {} not found for team ID {}",
                        driver_id, team.id
                    ))
                })?;
                team_drivers.push(driver);
            }

            team_dtos.push(TeamDto {
                id: team.id,
                race_id: team.race_id,
                participant_id: team.participant_id,
                driver1_id: team.driver1_id,
                driver2_id: team.driver2_id,
                driver3_id: team.driver3_id,
                driver4_id: team.driver4_id,
                points_earned: team.points_earned,
                participant_name: participant_name.clone(),
                driver1_name: team_drivers[0].name.clone(),
                driver1_number: team_drivers[0].car_number.clone(),
                driver2_name: team_drivers[1].name.clone(),
                driver2_number: team_drivers[1].car_number.clone(),
                driver3_name: team_drivers[2].name.clone(),
                driver3_number: team_drivers[2].car_number.clone(),
                driver4_name: team_drivers[3].name.clone(),
                driver4_number: team_drivers[3].car_number.clone(),
                created_at: team.created_at,
            });
        }

        Ok(team_dtos)
    }

    /// Maps the car numbers of `results` to driver names
    async fn driver_names(
        &self,
        results: &[RaceResultModel],
    ) -> Result<HashMap<String, String>, Error> {
        let mut car_numbers: Vec<String> = results.iter().map(|r| r.car_number.clone()).collect();
        car_numbers.sort();
        car_numbers.dedup();

        let names = DriverRepository::new(self.db)
            .get_many_by_car_numbers(&car_numbers)
            .await?
            .into_iter()
            .map(|d| (d.car_number, d.name))
            .collect();

        Ok(names)
    }
}

fn race_to_dto(
    race: RaceModel,
    results: Option<Vec<RaceResultModel>>,
    driver_names: &HashMap<String, String>,
) -> RaceDto {
    let results = if race.status == RaceStatus::Completed {
        Some(
            results
                .unwrap_or_default()
                .into_iter()
                .map(|result| RaceResultDto {
                    driver_name: driver_names
                        .get(&result.car_number)
                        .cloned()
                        .unwrap_or_else(|| UNKNOWN_DRIVER_NAME.to_string()),
                    id: result.id,
                    race_id: result.race_id,
                    car_number: result.car_number,
                    position: result.position,
                    is_first_place: result.is_first_place,
                    is_second_place: result.is_second_place,
                    is_last_place: result.is_last_place,
                    is_stage1_winner: result.is_stage1_winner,
                    is_stage2_winner: result.is_stage2_winner,
                    created_at: result.created_at,
                })
                .collect(),
        )
    } else {
        None
    };

    RaceDto {
        id: race.id,
        name: race.name,
        race_number: race.race_number,
        date: race.date,
        is_special_race: race.is_special_race,
        status: race.status.as_str().to_string(),
        rollover_first: race.rollover_first,
        rollover_second: race.rollover_second,
        rollover_last: race.rollover_last,
        rollover_stage1: race.rollover_stage1,
        rollover_stage2: race.rollover_stage2,
        extra_drivers: race.extra_drivers,
        results,
        created_at: race.created_at,
    }
}
