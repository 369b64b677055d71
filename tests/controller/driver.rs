//! Tests for the get_drivers endpoint.

use nascar_pool::{model::driver::DriverDto, server::controller::driver::get_drivers};

use super::*;

/// Expect 200 OK with chartered and open drivers ordered by car number
#[tokio::test]
async fn returns_all_drivers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pool_tables()
        .with_driver("5", "Kyle Larson", true)
        .with_driver("51", "Open Entry", false)
        .with_driver("24", "William Byron", true)
        .build()
        .await?;

    let resp = get_drivers(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let drivers: Vec<DriverDto> = body_json(resp).await;
    let cars: Vec<&str> = drivers.iter().map(|d| d.car_number.as_str()).collect();
    assert_eq!(cars, vec!["24", "5", "51"]);
    assert!(!drivers[2].is_chartered);

    Ok(())
}
