//! Tests for race controller endpoints.
//!
//! Covers race management, team generation, team listing and results entry,
//! including a multi-race flow that carries rollover between races.

mod create_race;
mod enter_race_results;
mod generate_teams;
mod get_race;
mod get_race_teams;
mod season;
mod update_race;

use axum::{extract::Path, Json};
use nascar_pool::model::{
    api::{ErrorDto, MessageDto},
    race::{CreateRaceDto, RaceDto, RaceResultsDto},
};

use super::*;

fn create_race_dto(name: &str, race_number: i32, is_special_race: bool) -> CreateRaceDto {
    CreateRaceDto {
        name: name.to_string(),
        race_number,
        date: None,
        is_special_race,
        extra_drivers: None,
    }
}

fn results_dto(first: &str, second: &str, last: &str, stage1: &str, stage2: &str) -> RaceResultsDto {
    RaceResultsDto {
        first_place_car_number: first.to_string(),
        second_place_car_number: second.to_string(),
        last_place_car_number: last.to_string(),
        stage1_winner_car_number: stage1.to_string(),
        stage2_winner_car_number: stage2.to_string(),
    }
}
