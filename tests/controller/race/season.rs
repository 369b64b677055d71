//! Multi-race flow through the race and standings endpoints.

use nascar_pool::{
    model::{standing::StandingDto, team::TeamDto},
    server::controller::{
        race::{enter_race_results, generate_teams, get_race, get_race_teams},
        standings::get_standings,
    },
};

use super::*;

/// Car numbers of a team's four drivers
fn team_cars(team: &TeamDto) -> [String; 4] {
    [
        team.driver1_number.clone(),
        team.driver2_number.clone(),
        team.driver3_number.clone(),
        team.driver4_number.clone(),
    ]
}

/// Expect points lost to an open entry in race 1 to double in special race 2
#[tokio::test]
async fn rollover_carries_into_special_race() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_participant("Alice")
        .with_chartered_drivers(4)
        .with_driver("51", "Open Entry", false)
        .with_race(1, false)
        .with_race(2, true)
        .build()
        .await?;

    // Race 1: the open entry wins, the single team holds every chartered car
    generate_teams(State(test.into_app_state()), Path(1))
        .await
        .into_response();
    let resp = enter_race_results(
        State(test.into_app_state()),
        Path(1),
        Json(results_dto("51", "1", "2", "3", "4")),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_race_teams(State(test.into_app_state()), Path(1))
        .await
        .into_response();
    let teams: Vec<TeamDto> = body_json(resp).await;
    assert_eq!(teams[0].points_earned, 25 + 15 + 25 + 25);

    let resp = get_race(State(test.into_app_state()), Path(2))
        .await
        .into_response();
    let race_two: RaceDto = body_json(resp).await;
    assert_eq!(race_two.rollover_first, 135);
    assert_eq!(race_two.rollover_second, 0);

    // Race 2: special race won by a chartered car held by the team
    generate_teams(State(test.into_app_state()), Path(2))
        .await
        .into_response();
    let resp = get_race_teams(State(test.into_app_state()), Path(2))
        .await
        .into_response();
    let teams: Vec<TeamDto> = body_json(resp).await;
    let winner = team_cars(&teams[0])[0].clone();

    enter_race_results(
        State(test.into_app_state()),
        Path(2),
        Json(results_dto(&winner, "51", "51", "51", "51")),
    )
    .await
    .into_response();

    let resp = get_race_teams(State(test.into_app_state()), Path(2))
        .await
        .into_response();
    let teams: Vec<TeamDto> = body_json(resp).await;
    assert_eq!(teams[0].points_earned, (135 + 135) * 2);

    let resp = get_standings(State(test.into_app_state()))
        .await
        .into_response();
    let standings: Vec<StandingDto> = body_json(resp).await;
    assert_eq!(standings[0].total_points, 90 + 540);
    assert_eq!(standings[0].races_completed, 2);

    Ok(())
}
