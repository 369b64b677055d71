//! Value types for race scoring.
//!
//! A race pays out five fixed categories. [`CategoryPoints`] holds one integer per
//! category and is used both for rollover buckets stored on a race and for the points
//! available to teams once results are in.

use crate::{model::race::RaceResultsDto, server::model::db::RaceModel};

/// Multiplier applied to available points in a special race
pub const SPECIAL_RACE_MULTIPLIER: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringCategory {
    First,
    Second,
    Last,
    Stage1,
    Stage2,
}

impl ScoringCategory {
    pub const ALL: [ScoringCategory; 5] = [
        Self::First,
        Self::Second,
        Self::Last,
        Self::Stage1,
        Self::Stage2,
    ];

    /// Points a category is worth before rollover and multiplier
    pub fn base_points(self) -> i32 {
        match self {
            Self::First => 135,
            Self::Second => 25,
            Self::Last => 15,
            Self::Stage1 => 25,
            Self::Stage2 => 25,
        }
    }
}

/// One integer per scoring category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryPoints {
    pub first: i32,
    pub second: i32,
    pub last: i32,
    pub stage1: i32,
    pub stage2: i32,
}

impl CategoryPoints {
    pub fn get(&self, category: ScoringCategory) -> i32 {
        match category {
            ScoringCategory::First => self.first,
            ScoringCategory::Second => self.second,
            ScoringCategory::Last => self.last,
            ScoringCategory::Stage1 => self.stage1,
            ScoringCategory::Stage2 => self.stage2,
        }
    }

    pub fn set(&mut self, category: ScoringCategory, value: i32) {
        match category {
            ScoringCategory::First => self.first = value,
            ScoringCategory::Second => self.second = value,
            ScoringCategory::Last => self.last = value,
            ScoringCategory::Stage1 => self.stage1 = value,
            ScoringCategory::Stage2 => self.stage2 = value,
        }
    }

    pub fn is_zero(&self) -> bool {
        ScoringCategory::ALL.iter().all(|c| self.get(*c) == 0)
    }

    pub fn total(&self) -> i32 {
        ScoringCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// The rollover a race inherited from the race before it
impl From<&RaceModel> for CategoryPoints {
    fn from(race: &RaceModel) -> Self {
        Self {
            first: race.rollover_first,
            second: race.rollover_second,
            last: race.rollover_last,
            stage1: race.rollover_stage1,
            stage2: race.rollover_stage2,
        }
    }
}

/// Car numbers that won each category of a race
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringCars {
    pub first: String,
    pub second: String,
    pub last: String,
    pub stage1: String,
    pub stage2: String,
}

impl ScoringCars {
    pub fn car(&self, category: ScoringCategory) -> &str {
        match category {
            ScoringCategory::First => &self.first,
            ScoringCategory::Second => &self.second,
            ScoringCategory::Last => &self.last,
            ScoringCategory::Stage1 => &self.stage1,
            ScoringCategory::Stage2 => &self.stage2,
        }
    }
}

impl From<RaceResultsDto> for ScoringCars {
    fn from(dto: RaceResultsDto) -> Self {
        Self {
            first: dto.first_place_car_number.trim().to_string(),
            second: dto.second_place_car_number.trim().to_string(),
            last: dto.last_place_car_number.trim().to_string(),
            stage1: dto.stage1_winner_car_number.trim().to_string(),
            stage2: dto.stage2_winner_car_number.trim().to_string(),
        }
    }
}

/// The result flags stored for one car in one race
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultFlags {
    pub first_place: bool,
    pub second_place: bool,
    pub last_place: bool,
    pub stage1_winner: bool,
    pub stage2_winner: bool,
}

impl ResultFlags {
    /// Flags with only `category` set
    pub fn for_category(category: ScoringCategory) -> Self {
        let mut flags = Self::default();
        match category {
            ScoringCategory::First => flags.first_place = true,
            ScoringCategory::Second => flags.second_place = true,
            ScoringCategory::Last => flags.last_place = true,
            ScoringCategory::Stage1 => flags.stage1_winner = true,
            ScoringCategory::Stage2 => flags.stage2_winner = true,
        }
        flags
    }

    /// Logical OR of both sets of flags
    pub fn merge(self, other: Self) -> Self {
        Self {
            first_place: self.first_place || other.first_place,
            second_place: self.second_place || other.second_place,
            last_place: self.last_place || other.last_place,
            stage1_winner: self.stage1_winner || other.stage1_winner,
            stage2_winner: self.stage2_winner || other.stage2_winner,
        }
    }
}

impl From<&entity::race_result::Model> for ResultFlags {
    fn from(result: &entity::race_result::Model) -> Self {
        Self {
            first_place: result.is_first_place,
            second_place: result.is_second_place,
            last_place: result.is_last_place,
            stage1_winner: result.is_stage1_winner,
            stage2_winner: result.is_stage2_winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect the base points of all categories to sum to the full race purse
    #[test]
    fn test_base_points_total() {
        let total: i32 = ScoringCategory::ALL.iter().map(|c| c.base_points()).sum();

        assert_eq!(total, 225);
    }

    /// Expect set and get to address the same category
    #[test]
    fn test_category_points_set_get() {
        let mut points = CategoryPoints::default();
        assert!(points.is_zero());

        points.set(ScoringCategory::Stage2, 25);

        assert_eq!(points.get(ScoringCategory::Stage2), 25);
        assert_eq!(points.stage2, 25);
        assert_eq!(points.total(), 25);
        assert!(!points.is_zero());
    }

    /// Expect a race's stored rollover columns to map onto categories
    #[test]
    fn test_category_points_from_race() {
        let mut race = nascar_pool_test_utils::fixtures::factory::mock_race_model(2, false);
        race.rollover_first = 135;
        race.rollover_stage2 = 25;

        let rollover = CategoryPoints::from(&race);

        assert_eq!(rollover.get(ScoringCategory::First), 135);
        assert_eq!(rollover.get(ScoringCategory::Stage2), 25);
        assert_eq!(rollover.total(), 160);
    }

    /// Expect merged flags to keep every flag set on either side
    #[test]
    fn test_result_flags_merge() {
        let merged = ResultFlags::for_category(ScoringCategory::Stage1)
            .merge(ResultFlags::for_category(ScoringCategory::First));

        assert!(merged.first_place);
        assert!(merged.stage1_winner);
        assert!(!merged.second_place);
        assert!(!merged.last_place);
        assert!(!merged.stage2_winner);
    }

    /// Expect submitted car numbers to be trimmed
    #[test]
    fn test_scoring_cars_from_dto() {
        let cars = ScoringCars::from(RaceResultsDto {
            first_place_car_number: " 5 ".to_string(),
            second_place_car_number: "24".to_string(),
            last_place_car_number: "51".to_string(),
            stage1_winner_car_number: "12".to_string(),
            stage2_winner_car_number: "5".to_string(),
        });

        assert_eq!(cars.car(ScoringCategory::First), "5");
        assert_eq!(cars.car(ScoringCategory::Last), "51");
    }
}
