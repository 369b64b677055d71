//! Tests for the get_standings endpoint.

use entity::race::RaceStatus;
use nascar_pool::{model::standing::StandingDto, server::controller::standings::get_standings};

use super::*;

/// Expect 200 OK with ranked standings including participants without races
#[tokio::test]
async fn returns_ranked_standings() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_pool_tables()
        .with_participant("Alice")
        .with_participant("Bob")
        .with_participant("Cy")
        .with_chartered_drivers(8)
        .build()
        .await?;
    let race = test
        .pool()
        .insert_race_with_status(1, false, RaceStatus::Completed)
        .await?;
    test.pool().insert_team(race.id, 1, [1, 2, 3, 4], 40).await?;
    test.pool().insert_team(race.id, 2, [5, 6, 7, 8], 40).await?;

    let resp = get_standings(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let standings: Vec<StandingDto> = body_json(resp).await;
    let summary: Vec<(&str, i32, i32, i32)> = standings
        .iter()
        .map(|s| {
            (
                s.participant_name.as_str(),
                s.total_points,
                s.races_completed,
                s.rank,
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![("Alice", 40, 1, 1), ("Bob", 40, 1, 2), ("Cy", 0, 0, 3)]
    );

    Ok(())
}
