//! Tests for the generate_teams endpoint.

use nascar_pool::server::controller::race::{generate_teams, get_race};

use super::*;

/// Expect 200 OK and the race moved to in progress
#[tokio::test]
async fn generates_teams() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_participant("Alice")
        .with_participant("Bob")
        .with_chartered_drivers(9)
        .with_race(1, false)
        .build()
        .await?;

    let resp = generate_teams(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let message: MessageDto = body_json(resp).await;
    assert_eq!(message.message, "Teams generated successfully");

    let resp = get_race(State(test.into_app_state()), Path(1))
        .await
        .into_response();
    let race: RaceDto = body_json(resp).await;
    assert_eq!(race.status, "in_progress");

    Ok(())
}

/// Expect 400 on a second generation for the same race
#[tokio::test]
async fn bad_request_when_already_generated() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_participant("Alice")
        .with_chartered_drivers(4)
        .with_race(1, false)
        .build()
        .await?;

    let first = generate_teams(State(test.into_app_state()), Path(1))
        .await
        .into_response();
    let second = generate_teams(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(second).await;
    assert_eq!(error.error, "Teams already generated for this race");

    Ok(())
}

/// Expect 400 when there are fewer than four chartered drivers per participant
#[tokio::test]
async fn bad_request_with_insufficient_drivers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_participant("Alice")
        .with_participant("Bob")
        .with_chartered_drivers(6)
        .with_driver("51", "Open Entry", false)
        .with_driver("66", "Open Entry Two", false)
        .with_race(1, false)
        .build()
        .await?;

    let resp = generate_teams(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.error, "Not enough chartered drivers");

    Ok(())
}

/// Expect 404 for an unknown race
#[tokio::test]
async fn not_found_for_unknown_race() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_participant("Alice")
        .with_chartered_drivers(4)
        .build()
        .await?;

    let resp = generate_teams(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
