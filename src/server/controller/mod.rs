//! HTTP controller endpoints for the pool web API.
//!
//! Axum handlers for participants, drivers, races and standings. Handlers extract
//! inputs, call into services or repositories, and return JSON responses. Every handler
//! carries a utoipa annotation for the OpenAPI document.

pub mod driver;
pub mod participant;
pub mod race;
pub mod standings;
