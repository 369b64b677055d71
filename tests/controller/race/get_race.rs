//! Tests for the get_race endpoint.

use nascar_pool::server::controller::race::get_race;

use super::*;

/// Expect 200 OK for an existing race
#[tokio::test]
async fn returns_existing_race() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_race(1, false)
        .build()
        .await?;

    let resp = get_race(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let race: RaceDto = body_json(resp).await;
    assert_eq!(race.name, "Race 1");

    Ok(())
}

/// Expect 404 with an error body for an unknown race
#[tokio::test]
async fn not_found_for_unknown_race() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pool_tables().build().await?;

    let resp = get_race(State(test.into_app_state()), Path(7))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.error, "Race not found");

    Ok(())
}
