//! Tests for the create_race and get_races endpoints.

use nascar_pool::{
    model::api::CreatedDto,
    server::controller::race::{create_race, get_races},
};

use super::*;

/// Expect 200 OK with the new race id, and the race listed as upcoming
#[tokio::test]
async fn creates_upcoming_race() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pool_tables().build().await?;

    let mut dto = create_race_dto("Daytona 500", 1, true);
    dto.date = Some("2026-02-15".to_string());
    dto.extra_drivers = Some("#40 Justin Allgaier".to_string());

    let resp = create_race(State(test.into_app_state()), Json(dto))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let created: CreatedDto = body_json(resp).await;

    let resp = get_races(State(test.into_app_state()))
        .await
        .into_response();
    let races: Vec<RaceDto> = body_json(resp).await;

    assert_eq!(races.len(), 1);
    assert_eq!(races[0].id, created.id);
    assert_eq!(races[0].status, "upcoming");
    assert!(races[0].is_special_race);
    assert_eq!(races[0].date.as_deref(), Some("2026-02-15"));
    assert_eq!(races[0].rollover_first, 0);
    assert!(races[0].results.is_none());

    Ok(())
}

/// Expect races listed in race number order
#[tokio::test]
async fn lists_races_in_season_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_race(2, false)
        .with_race(1, false)
        .build()
        .await?;

    let resp = get_races(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let races: Vec<RaceDto> = body_json(resp).await;
    let numbers: Vec<i32> = races.iter().map(|r| r.race_number).collect();
    assert_eq!(numbers, vec![1, 2]);

    Ok(())
}
