use std::collections::{HashMap, HashSet};

use dioxus_logger::tracing;
use entity::race::RaceStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        driver::DriverRepository, race::RaceRepository, race_result::RaceResultRepository,
        team::TeamRepository,
    },
    error::{race::RaceError, Error},
    model::scoring::{CategoryPoints, ResultFlags, ScoringCars, ScoringCategory},
    service::scoring::{calculate_payouts, team_points, Payouts},
};

pub struct ResultsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResultsService<'a> {
    /// Creates a new instance of [`ResultsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the scoring cars of a race, forwards rollover and recomputes team points
    ///
    /// # Behavior
    /// - Result rows for the race are replaced by one row per submitted car; a car that
    ///   was already stored keeps its earlier flags, merged with the new ones
    /// - The race is marked `completed`
    /// - Points lost to non-chartered winners overwrite all five rollover buckets of the
    ///   race numbered `race_number + 1`; when there is no such race they are dropped
    /// - Every team of the race has `points_earned` overwritten
    ///
    /// Entering the same results again yields the same state.
    ///
    /// # Returns
    /// - `Ok(Payouts)`: Points paid out and forwarded for this race
    /// - `Err(Error::RaceError(RaceError::RaceNotFound(_)))`: No race with `race_id`
    /// - `Err(Error::DbErr(_))`: Database error
    pub async fn enter_results(&self, race_id: i32, cars: ScoringCars) -> Result<Payouts, Error> {
        let txn = self.db.begin().await?;

        let race_repo = RaceRepository::new(&txn);
        let result_repo = RaceResultRepository::new(&txn);
        let driver_repo = DriverRepository::new(&txn);
        let team_repo = TeamRepository::new(&txn);

        let race = race_repo
            .get_by_id(race_id)
            .await?
            .ok_or(RaceError::RaceNotFound(race_id))?;

        let chartered: HashSet<String> = driver_repo
            .get_chartered()
            .await?
            .into_iter()
            .map(|d| d.car_number)
            .collect();

        let previous: HashMap<String, ResultFlags> = result_repo
            .get_by_race(race.id)
            .await?
            .iter()
            .map(|r| (r.car_number.clone(), ResultFlags::from(r)))
            .collect();

        result_repo.delete_by_race(race.id).await?;
        result_repo
            .create_many(race.id, &merge_result_flags(&cars, &previous))
            .await?;

        let race = race_repo.update_status(race, RaceStatus::Completed).await?;

        let payouts = calculate_payouts(
            race.is_special_race,
            &CategoryPoints::from(&race),
            &cars,
            |car| chartered.contains(car),
        );

        if !payouts.outgoing.is_zero() {
            let next_race = match race.race_number.checked_add(1) {
                Some(next_number) => race_repo.get_by_race_number(next_number).await?,
                None => None,
            };

            match next_race {
                Some(next_race) => {
                    tracing::info!(
                        race_id = %race.id,
                        next_race_id = %next_race.id,
                        rollover = %payouts.outgoing.total(),
                        "Forwarding rollover to next race"
                    );

                    race_repo.update_rollover(next_race, payouts.outgoing).await?;
                }
                None => {
                    tracing::info!(
                        race_id = %race.id,
                        rollover = %payouts.outgoing.total(),
                        "No next race found, rollover dropped"
                    );
                }
            }
        }

        let teams = team_repo.get_by_race(race.id).await?;
        let driver_ids: Vec<i32> = teams.iter().flat_map(|t| t.driver_ids()).collect();
        let car_numbers: HashMap<i32, String> = driver_repo
            .get_many_by_ids(&driver_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d.car_number))
            .collect();

        for team in &teams {
            let team_cars: Vec<&str> = team
                .driver_ids()
                .iter()
                .filter_map(|id| car_numbers.get(id).map(String::as_str))
                .collect();

            let points = team_points(&payouts.available, &cars, &team_cars);
            team_repo.update_points(team.id, points).await?;
        }

        txn.commit().await?;

        tracing::info!(
            race_id = %race_id,
            teams = %teams.len(),
            "Entered race results and calculated points"
        );

        Ok(payouts)
    }
}

/// Builds one result row per distinct submitted car in submission order
///
/// Flags of a car appearing in several categories are OR-merged, together with any
/// flags previously stored for that car.
fn merge_result_flags(
    cars: &ScoringCars,
    previous: &HashMap<String, ResultFlags>,
) -> Vec<(String, ResultFlags)> {
    let mut rows: Vec<(String, ResultFlags)> = Vec::new();

    for category in ScoringCategory::ALL {
        let car = cars.car(category);
        let flags = ResultFlags::for_category(category);

        match rows.iter_mut().find(|(existing, _)| existing == car) {
            Some((_, existing)) => *existing = existing.merge(flags),
            None => {
                let stored = previous.get(car).copied().unwrap_or_default();
                rows.push((car.to_string(), stored.merge(flags)));
            }
        }
    }

    rows
}
