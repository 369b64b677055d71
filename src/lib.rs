//! Stock-car fantasy pool tracker.
//!
//! Participants are handed random four-driver teams for each race, results are entered
//! by car number, and points are paid out per team with rollover for categories won by
//! non-chartered cars.

pub mod model;
pub mod server;
