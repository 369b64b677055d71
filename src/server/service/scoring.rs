//! Scoring rules applied when race results are entered.
//!
//! Everything here is free of I/O so the payout and rollover arithmetic can be checked
//! without a database.

use crate::server::model::scoring::{
    CategoryPoints, ScoringCars, ScoringCategory, SPECIAL_RACE_MULTIPLIER,
};

/// Points paid to teams in a race and points forwarded to the next race
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Payouts {
    pub available: CategoryPoints,
    pub outgoing: CategoryPoints,
}

/// Computes the per-category payouts of a race
///
/// # Behavior
/// - A category is worth `(base + incoming) × multiplier`, the multiplier being
///   [`SPECIAL_RACE_MULTIPLIER`] for a special race and 1 otherwise
/// - When the winning car is not chartered the category pays nothing and
///   `base + incoming` (without multiplier) is forwarded as outgoing rollover
///
/// # Arguments
/// - `is_special_race` - Whether the race doubles its points
/// - `incoming` - Rollover the race inherited from the previous race
/// - `cars` - Winning car number per category
/// - `is_chartered` - Whether a car number belongs to a chartered driver
pub fn calculate_payouts<F>(
    is_special_race: bool,
    incoming: &CategoryPoints,
    cars: &ScoringCars,
    is_chartered: F,
) -> Payouts
where
    F: Fn(&str) -> bool,
{
    let multiplier = if is_special_race {
        SPECIAL_RACE_MULTIPLIER
    } else {
        1
    };

    let mut payouts = Payouts::default();

    for category in ScoringCategory::ALL {
        let pot = category.base_points() + incoming.get(category);

        if is_chartered(cars.car(category)) {
            payouts.available.set(category, pot * multiplier);
        } else {
            payouts.outgoing.set(category, pot);
        }
    }

    payouts
}

/// Sums the available points of every category won by one of the team's cars
pub fn team_points<S: AsRef<str>>(
    available: &CategoryPoints,
    cars: &ScoringCars,
    team_car_numbers: &[S],
) -> i32 {
    ScoringCategory::ALL
        .iter()
        .filter(|category| {
            let winner = cars.car(**category);
            team_car_numbers.iter().any(|car| car.as_ref() == winner)
        })
        .map(|category| available.get(*category))
        .sum()
}
