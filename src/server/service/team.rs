use dioxus_logger::tracing;
use entity::race::RaceStatus;
use rand::{seq::SliceRandom, Rng};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        driver::DriverRepository, participant::ParticipantRepository, race::RaceRepository,
        team::TeamRepository,
    },
    error::{race::RaceError, Error},
};

/// Drivers assigned to each participant
pub static DRIVERS_PER_TEAM: usize = 4;

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    /// Creates a new instance of [`TeamService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Draws a team of four chartered drivers for every participant of a race
    ///
    /// # Behavior
    /// - Teams can only be drawn once per race
    /// - Drivers are drawn without replacement, leftover chartered drivers go unassigned
    /// - On success an upcoming race moves to `in_progress` while a completed race stays
    ///   completed; on failure nothing is written
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of teams created
    /// - `Err(Error::RaceError(RaceError::RaceNotFound(_)))`: No race with `race_id`
    /// - `Err(Error::RaceError(RaceError::TeamsAlreadyGenerated(_)))`: Teams already exist
    /// - `Err(Error::RaceError(RaceError::InsufficientDrivers { .. }))`: Fewer than four
    ///   chartered drivers per participant
    /// - `Err(Error::DbErr(_))`: Database error
    pub async fn generate_teams<R>(&self, race_id: i32, rng: &mut R) -> Result<usize, Error>
    where
        R: Rng + ?Sized,
    {
        let txn = self.db.begin().await?;

        let race_repo = RaceRepository::new(&txn);
        let team_repo = TeamRepository::new(&txn);

        let race = race_repo
            .get_by_id(race_id)
            .await?
            .ok_or(RaceError::RaceNotFound(race_id))?;

        if team_repo.count_by_race(race.id).await? > 0 {
            return Err(RaceError::TeamsAlreadyGenerated(race.id).into());
        }

        let participant_ids: Vec<i32> = ParticipantRepository::new(&txn)
            .get_all_by_id()
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        let driver_ids: Vec<i32> = DriverRepository::new(&txn)
            .get_chartered()
            .await?
            .into_iter()
            .map(|d| d.id)
            .collect();

        let teams = assign_drivers(&participant_ids, driver_ids, rng)?;

        team_repo.create_many(race.id, &teams).await?;
        // Completed is terminal
        if race.status != RaceStatus::Completed {
            race_repo.update_status(race, RaceStatus::InProgress).await?;
        }

        txn.commit().await?;

        tracing::info!(
            race_id = %race_id,
            teams = %teams.len(),
            "Generated teams for race"
        );

        Ok(teams.len())
    }
}

/// Shuffles the driver pool once and hands out consecutive runs of four
///
/// Participant `i` receives shuffled drivers `4i..4i+4`.
pub fn assign_drivers<R>(
    participant_ids: &[i32],
    mut driver_ids: Vec<i32>,
    rng: &mut R,
) -> Result<Vec<(i32, [i32; 4])>, RaceError>
where
    R: Rng + ?Sized,
{
    let required = participant_ids.len() * DRIVERS_PER_TEAM;

    if driver_ids.len() < required {
        return Err(RaceError::InsufficientDrivers {
            available: driver_ids.len(),
            required,
        });
    }

    driver_ids.shuffle(rng);

    let teams = participant_ids
        .iter()
        .zip(driver_ids.chunks_exact(DRIVERS_PER_TEAM))
        .map(|(participant_id, drivers)| {
            (
                *participant_id,
                [drivers[0], drivers[1], drivers[2], drivers[3]],
            )
        })
        .collect();

    Ok(teams)
}
