//! Service layer for business logic.
//!
//! Services coordinate repositories and own the transaction boundary of each operation:
//! team draws, results entry with rollover, race management and standings. The pure
//! scoring rules live in [`scoring`].

pub mod race;
pub mod results;
pub mod scoring;
pub mod standings;
pub mod team;
