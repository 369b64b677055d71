//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`]
//! so services can run them against the shared connection or inside a transaction.

pub mod driver;
pub mod participant;
pub mod race;
pub mod race_result;
pub mod team;
