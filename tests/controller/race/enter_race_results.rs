//! Tests for the enter_race_results endpoint.

use nascar_pool::server::controller::race::{enter_race_results, get_race};

use super::*;

/// Expect 200 OK, a completed race and results with resolved driver names
#[tokio::test]
async fn enters_results() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_driver("5", "Kyle Larson", true)
        .with_driver("24", "William Byron", true)
        .with_race(1, false)
        .build()
        .await?;

    let resp = enter_race_results(
        State(test.into_app_state()),
        Path(1),
        Json(results_dto("5", "24", "77", "5", "24")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let message: MessageDto = body_json(resp).await;
    assert_eq!(message.message, "Race results entered and points calculated");

    let resp = get_race(State(test.into_app_state()), Path(1))
        .await
        .into_response();
    let race: RaceDto = body_json(resp).await;
    assert_eq!(race.status, "completed");

    let results = race.results.expect("completed race should carry results");
    assert_eq!(results.len(), 3);
    let larson = results.iter().find(|r| r.car_number == "5").unwrap();
    assert_eq!(larson.driver_name, "Kyle Larson");
    assert!(larson.is_first_place && larson.is_stage1_winner);
    let unknown = results.iter().find(|r| r.car_number == "77").unwrap();
    assert_eq!(unknown.driver_name, "Unknown");
    assert!(unknown.is_last_place);

    Ok(())
}

/// Expect 404 for an unknown race
#[tokio::test]
async fn not_found_for_unknown_race() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pool_tables().build().await?;

    let resp = enter_race_results(
        State(test.into_app_state()),
        Path(1),
        Json(results_dto("5", "24", "77", "5", "24")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.error, "Race not found");

    Ok(())
}
