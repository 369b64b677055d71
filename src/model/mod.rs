//! JSON data transfer objects exchanged over the HTTP API.

pub mod api;
pub mod driver;
pub mod participant;
pub mod race;
pub mod standing;
pub mod team;
