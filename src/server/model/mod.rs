//! Server application models and type definitions.
//!
//! Application state, database model aliases, and the scoring value types shared by
//! the repositories and services.

pub mod app;
pub mod db;
pub mod scoring;
