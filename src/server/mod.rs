//! Server application core modules.
//!
//! All server-side functionality of the pool: configuration, startup, HTTP routing,
//! controllers, services, repositories, and errors.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
