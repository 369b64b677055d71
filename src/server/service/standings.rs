use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::standing::StandingDto,
    server::{
        data::{participant::ParticipantRepository, team::TeamRepository},
        error::Error,
        model::db::ParticipantModel,
    },
};

pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StandingsService<'a> {
    /// Creates a new instance of [`StandingsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Season standings over completed races
    pub async fn get_standings(&self) -> Result<Vec<StandingDto>, Error> {
        let participants = ParticipantRepository::new(self.db).get_all().await?;
        let points = TeamRepository::new(self.db)
            .get_completed_race_points()
            .await?;

        Ok(rank_standings(participants, &points))
    }
}

/// Totals `(participant_id, points_earned)` entries per participant and ranks them
///
/// Ordered by total points descending then name ascending, ranks run 1..N without
/// sharing. Participants without completed races are ranked with zero.
pub fn rank_standings(
    participants: Vec<ParticipantModel>,
    points: &[(i32, i32)],
) -> Vec<StandingDto> {
    let mut totals: HashMap<i32, (i32, i32)> = HashMap::new();
    for (participant_id, points_earned) in points {
        let entry = totals.entry(*participant_id).or_insert((0, 0));
        entry.0 += points_earned;
        entry.1 += 1;
    }

    let mut standings: Vec<StandingDto> = participants
        .into_iter()
        .map(|participant| {
            let (total_points, races_completed) =
                totals.get(&participant.id).copied().unwrap_or((0, 0));

            StandingDto {
                participant_id: participant.id,
                participant_name: participant.name,
                total_points,
                races_completed,
                rank: 0,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.participant_name.cmp(&b.participant_name))
    });

    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index as i32 + 1;
    }

    standings
}
