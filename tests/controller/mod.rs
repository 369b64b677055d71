//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments against an in-memory
//! database, then the status code and JSON body of the response are checked.

mod driver;
mod participant;
mod race;
mod standings;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use nascar_pool_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};
