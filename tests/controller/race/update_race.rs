//! Tests for the update_race endpoint.

use nascar_pool::server::controller::race::{get_race, update_race};

use super::*;

/// Expect 200 OK and updated details with the race number unchanged
#[tokio::test]
async fn updates_details() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_race(3, false)
        .build()
        .await?;

    let mut dto = create_race_dto("Atlanta", 30, true);
    dto.extra_drivers = Some("#16 AJ Allmendinger".to_string());

    let resp = update_race(State(test.into_app_state()), Path(1), Json(dto))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let message: MessageDto = body_json(resp).await;
    assert_eq!(message.message, "Race updated");

    let resp = get_race(State(test.into_app_state()), Path(1))
        .await
        .into_response();
    let race: RaceDto = body_json(resp).await;
    assert_eq!(race.name, "Atlanta");
    assert_eq!(race.race_number, 3);
    assert!(race.is_special_race);
    assert_eq!(race.extra_drivers.as_deref(), Some("#16 AJ Allmendinger"));

    Ok(())
}

/// Expect 404 for an unknown race
#[tokio::test]
async fn not_found_for_unknown_race() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pool_tables().build().await?;

    let resp = update_race(
        State(test.into_app_state()),
        Path(1),
        Json(create_race_dto("Atlanta", 1, false)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
