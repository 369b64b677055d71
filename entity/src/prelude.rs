pub use super::driver::Entity as Driver;
pub use super::participant::Entity as Participant;
pub use super::race::Entity as Race;
pub use super::race_result::Entity as RaceResult;
pub use super::team::Entity as Team;
