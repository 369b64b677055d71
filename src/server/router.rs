//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/participants` - List participants
/// - `GET /api/drivers` - List drivers
/// - `GET /api/races`, `POST /api/races` - List and create races
/// - `GET /api/races/{id}`, `PUT /api/races/{id}` - Fetch and update a race
/// - `POST /api/races/{id}/generate-teams` - Draw teams for a race
/// - `GET /api/races/{id}/teams` - List the teams of a race
/// - `POST /api/races/{id}/results` - Enter results and calculate points
/// - `GET /api/standings` - Season standings
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "NASCAR Pool", description = "NASCAR Pool API"), tags(
        (name = controller::participant::PARTICIPANT_TAG, description = "Participant API routes"),
        (name = controller::driver::DRIVER_TAG, description = "Driver API routes"),
        (name = controller::race::RACE_TAG, description = "Race, team and results API routes"),
        (name = controller::standings::STANDINGS_TAG, description = "Standings API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::participant::get_participants))
        .routes(routes!(controller::driver::get_drivers))
        .routes(routes!(
            controller::race::get_races,
            controller::race::create_race
        ))
        .routes(routes!(
            controller::race::get_race,
            controller::race::update_race
        ))
        .routes(routes!(controller::race::generate_teams))
        .routes(routes!(controller::race::get_race_teams))
        .routes(routes!(controller::race::enter_race_results))
        .routes(routes!(controller::standings::get_standings))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
