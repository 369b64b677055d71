//! Tests for the get_participants endpoint.

use nascar_pool::{model::participant::ParticipantDto, server::controller::participant::get_participants};

use super::*;

/// Expect 200 OK with participants ordered by name
#[tokio::test]
async fn returns_participants_ordered_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_participant("Mike")
        .with_participant("Dana")
        .build()
        .await?;

    let resp = get_participants(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let participants: Vec<ParticipantDto> = body_json(resp).await;
    let names: Vec<&str> = participants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Dana", "Mike"]);

    Ok(())
}

/// Expect 500 with a generic error body when tables are missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_participants(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: nascar_pool::model::api::ErrorDto = body_json(resp).await;
    assert_eq!(error.error, "Internal server error");

    Ok(())
}
