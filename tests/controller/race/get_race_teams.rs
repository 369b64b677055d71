//! Tests for the get_race_teams endpoint.

use std::collections::HashSet;

use nascar_pool::{
    model::team::TeamDto,
    server::controller::race::{generate_teams, get_race_teams},
};

use super::*;

/// Expect one team per participant with four distinct chartered drivers
#[tokio::test]
async fn returns_generated_teams() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_participant("Alice")
        .with_participant("Bob")
        .with_participant("Cy")
        .with_chartered_drivers(12)
        .with_driver("51", "Open Entry", false)
        .with_race(1, false)
        .build()
        .await?;

    generate_teams(State(test.into_app_state()), Path(1))
        .await
        .into_response();
    let resp = get_race_teams(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let teams: Vec<TeamDto> = body_json(resp).await;
    assert_eq!(teams.len(), 3);

    let numbers: HashSet<String> = teams
        .iter()
        .flat_map(|t| {
            [
                t.driver1_number.clone(),
                t.driver2_number.clone(),
                t.driver3_number.clone(),
                t.driver4_number.clone(),
            ]
        })
        .collect();
    assert_eq!(numbers.len(), 12);
    assert!(!numbers.contains("51"));

    let participants: HashSet<&str> = teams.iter().map(|t| t.participant_name.as_str()).collect();
    assert_eq!(participants, HashSet::from(["Alice", "Bob", "Cy"]));

    Ok(())
}

/// Expect an empty list for a race without teams
#[tokio::test]
async fn empty_for_race_without_teams() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_race(1, false)
        .build()
        .await?;

    let resp = get_race_teams(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let teams: Vec<TeamDto> = body_json(resp).await;
    assert!(teams.is_empty());

    Ok(())
}
