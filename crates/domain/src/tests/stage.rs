// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Rider, RiderCountry, Stage, StageType};
use std::cmp::Ordering;
use time::{Date, OffsetDateTime, macros::date};

fn test_winner() -> Rider {
    Rider::new("Tom Steels", "BMC Racing Team", RiderCountry::BEL)
}

fn test_podium() -> Vec<String> {
    vec![
        String::from("Tom Steels"),
        String::from("Marcel Wust"),
        String::from("Abraham Olano"),
    ]
}

fn build_stage(stage_no: u32, date: Date, distance: f64) -> Result<Stage, DomainError> {
    Stage::new(
        stage_no,
        date,
        distance,
        "Futuroscope",
        "Loudun",
        StageType::Flat,
        test_podium(),
        test_winner(),
    )
}

#[test]
fn test_stage_creation() {
    let stage: Stage = build_stage(2, date!(2000 - 07 - 02), 194.0).unwrap();

    assert_eq!(stage.stage_no(), 2);
    assert_eq!(stage.date(), date!(2000 - 07 - 02));
    assert!((stage.distance() - 194.0).abs() < f64::EPSILON);
    assert_eq!(stage.origin(), "Futuroscope");
    assert_eq!(stage.destination(), "Loudun");
    assert_eq!(stage.stage_type(), StageType::Flat);
    assert_eq!(stage.podium(), test_podium().as_slice());
    assert_eq!(*stage.winner(), test_winner());
}

#[test]
fn test_stage_number_zero_rejected() {
    let result: Result<Stage, DomainError> = build_stage(0, date!(2000 - 07 - 02), 194.0);
    assert!(matches!(result, Err(DomainError::InvalidStage(_))));
}

#[test]
fn test_stage_number_one_accepted() {
    assert!(build_stage(1, date!(2000 - 07 - 02), 194.0).is_ok());
}

#[test]
fn test_negative_distance_rejected() {
    let result: Result<Stage, DomainError> = build_stage(2, date!(2000 - 07 - 02), -0.01);
    assert!(matches!(result, Err(DomainError::InvalidStage(_))));
}

#[test]
fn test_zero_distance_accepted() {
    assert!(build_stage(2, date!(2000 - 07 - 02), 0.0).is_ok());
}

#[test]
fn test_nan_distance_rejected() {
    let result: Result<Stage, DomainError> = build_stage(2, date!(2000 - 07 - 02), f64::NAN);
    assert!(matches!(result, Err(DomainError::InvalidStage(_))));
}

#[test]
fn test_todays_date_rejected() {
    let today: Date = OffsetDateTime::now_utc().date();
    let result: Result<Stage, DomainError> = build_stage(2, today, 194.0);
    assert!(matches!(result, Err(DomainError::InvalidStage(_))));
}

#[test]
fn test_yesterdays_date_accepted() {
    let yesterday: Date = OffsetDateTime::now_utc()
        .date()
        .previous_day()
        .expect("yesterday exists");
    assert!(build_stage(2, yesterday, 194.0).is_ok());
}

#[test]
fn test_podium_of_four_rejected() {
    let podium: Vec<String> = vec![
        String::from("Tom Steels"),
        String::from("Marcel Wust"),
        String::from("Abraham Olano"),
        String::from("David Millar"),
    ];
    let result: Result<Stage, DomainError> = Stage::new(
        2,
        date!(2000 - 07 - 02),
        194.0,
        "Futuroscope",
        "Loudun",
        StageType::Flat,
        podium,
        test_winner(),
    );
    assert!(matches!(result, Err(DomainError::InvalidStage(_))));
}

#[test]
fn test_podium_of_three_accepted() {
    assert!(build_stage(2, date!(2000 - 07 - 02), 194.0).is_ok());
}

#[test]
fn test_empty_podium_accepted() {
    let result: Result<Stage, DomainError> = Stage::new(
        2,
        date!(2000 - 07 - 02),
        194.0,
        "Futuroscope",
        "Loudun",
        StageType::Flat,
        Vec::new(),
        test_winner(),
    );
    assert!(result.is_ok());
}

#[test]
fn test_route_only_sentinel_values() {
    let stage: Stage = Stage::route_only("Loudun", "Nantes", StageType::TimeTrial);

    assert_eq!(stage.stage_no(), 1);
    assert_eq!(stage.date(), date!(2000 - 01 - 01));
    assert!(stage.distance().abs() < f64::EPSILON);
    assert_eq!(stage.origin(), "Loudun");
    assert_eq!(stage.destination(), "Nantes");
    assert!(stage.podium().is_empty());
    assert_eq!(stage.winner().name(), "");
    assert_eq!(stage.winner().team(), "");
}

#[test]
fn test_season_is_derived_from_the_stage_year() {
    let stage: Stage = build_stage(2, date!(2000 - 07 - 02), 194.0).unwrap();
    assert_eq!(stage.season(), "1999-2000");
}

#[test]
fn test_is_time_trial() {
    let time_trial: Stage = Stage::route_only("Futuroscope", "Futuroscope", StageType::TimeTrial);
    let flat: Stage = Stage::route_only("Futuroscope", "Loudun", StageType::Flat);

    assert!(time_trial.is_time_trial());
    assert!(!flat.is_time_trial());
}

#[test]
fn test_equality_is_reflexive_and_symmetric() {
    let stage: Stage = build_stage(2, date!(2000 - 07 - 02), 194.0).unwrap();
    let same: Stage = build_stage(2, date!(2000 - 07 - 02), 194.0).unwrap();

    assert_eq!(stage, stage.clone());
    assert_eq!(stage, same);
    assert_eq!(same, stage);
}

#[test]
fn test_changing_any_field_breaks_equality() {
    let stage: Stage = build_stage(2, date!(2000 - 07 - 02), 194.0).unwrap();

    assert_ne!(stage, build_stage(3, date!(2000 - 07 - 02), 194.0).unwrap());
    assert_ne!(stage, build_stage(2, date!(2000 - 07 - 03), 194.0).unwrap());
    assert_ne!(stage, build_stage(2, date!(2000 - 07 - 02), 161.5).unwrap());

    let different_winner: Stage = Stage::new(
        2,
        date!(2000 - 07 - 02),
        194.0,
        "Futuroscope",
        "Loudun",
        StageType::Flat,
        test_podium(),
        Rider::new("David Millar", "T-Mobile", RiderCountry::GBR),
    )
    .unwrap();
    assert_ne!(stage, different_winner);
}

#[test]
fn test_ordering_is_by_date_first() {
    let earlier: Stage = build_stage(5, date!(2000 - 07 - 01), 194.0).unwrap();
    let later: Stage = build_stage(1, date!(2000 - 07 - 02), 194.0).unwrap();

    assert_eq!(earlier.cmp(&later), Ordering::Less);
    assert_eq!(later.cmp(&earlier), Ordering::Greater);
}

#[test]
fn test_same_date_orders_by_stage_number() {
    let first: Stage = build_stage(1, date!(2000 - 07 - 01), 194.0).unwrap();
    let second: Stage = build_stage(2, date!(2000 - 07 - 01), 16.5).unwrap();

    assert_eq!(first.cmp(&second), Ordering::Less);
    assert_eq!(second.cmp(&first), Ordering::Greater);
}

#[test]
fn test_ordering_is_coarser_than_equality() {
    // Same (date, stage number) but different distances: ordered as equal,
    // yet not equal structurally.
    let stage: Stage = build_stage(2, date!(2000 - 07 - 02), 194.0).unwrap();
    let shorter: Stage = build_stage(2, date!(2000 - 07 - 02), 161.5).unwrap();

    assert_eq!(stage.cmp(&shorter), Ordering::Equal);
    assert_ne!(stage, shorter);
}

#[test]
fn test_ordering_is_transitive() {
    let a: Stage = build_stage(1, date!(2000 - 07 - 01), 16.5).unwrap();
    let b: Stage = build_stage(2, date!(2000 - 07 - 02), 194.0).unwrap();
    let c: Stage = build_stage(3, date!(2000 - 07 - 03), 161.5).unwrap();

    assert!(a < b);
    assert!(b < c);
    assert!(a < c);
}
