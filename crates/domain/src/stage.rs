// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stage domain model.
//!
//! A `Stage` is one dated leg of a multi-day race. It is validated at
//! construction and never mutated afterwards.

use crate::error::DomainError;
use crate::types::{Rider, RiderCountry, StageType};
use serde::Serialize;
use std::cmp::Ordering;
use time::{Date, OffsetDateTime};

/// The maximum number of names a podium can carry.
pub const MAX_PODIUM_SIZE: usize = 3;

/// Represents one race-day record.
///
/// Invariants enforced at construction:
/// - the stage number is greater than 0
/// - the distance is at least 0.0 km (which also rejects NaN)
/// - the date is strictly before the current date
/// - the podium carries at most three names
///
/// Equality is structural over all fields. Ordering is defined over
/// (date, stage number) only and is deliberately coarser than equality:
/// two unequal stages can compare as `Ordering::Equal`. Callers sorting
/// stages must not treat order-equality as full equality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    /// The stage number within its edition (1-based).
    stage_no: u32,
    /// The calendar date the stage was raced.
    date: Date,
    /// The stage distance in kilometers.
    distance: f64,
    /// The start location.
    origin: String,
    /// The finish location.
    destination: String,
    /// The stage classification.
    stage_type: StageType,
    /// The top finishers' names, in finishing order (at most three).
    podium: Vec<String>,
    /// The rider credited with first place.
    winner: Rider,
}

impl Stage {
    /// Creates a new validated `Stage`.
    ///
    /// # Arguments
    ///
    /// * `stage_no` - The stage number (must be greater than 0)
    /// * `date` - The date the stage was raced (must be before today)
    /// * `distance` - The distance in kilometers (must be at least 0.0)
    /// * `origin` - The start location
    /// * `destination` - The finish location
    /// * `stage_type` - The stage classification
    /// * `podium` - The top finishers' names (at most three)
    /// * `winner` - The rider credited with first place
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStage` naming the violated rule if any
    /// invariant does not hold.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        stage_no: u32,
        date: Date,
        distance: f64,
        origin: &str,
        destination: &str,
        stage_type: StageType,
        podium: Vec<String>,
        winner: Rider,
    ) -> Result<Self, DomainError> {
        if stage_no == 0 {
            return Err(DomainError::InvalidStage(
                "Stage number must be greater than 0",
            ));
        }
        if distance < 0.0 || distance.is_nan() {
            return Err(DomainError::InvalidStage(
                "Distance must be greater than or equal to 0.0",
            ));
        }
        if date >= OffsetDateTime::now_utc().date() {
            return Err(DomainError::InvalidStage(
                "Date must be before the current date",
            ));
        }
        if podium.len() > MAX_PODIUM_SIZE {
            return Err(DomainError::InvalidStage(
                "Podium must contain at most three names",
            ));
        }

        Ok(Self {
            stage_no,
            date,
            distance,
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            stage_type,
            podium,
            winner,
        })
    }

    /// Creates a sentinel stage carrying only a route and classification.
    ///
    /// The remaining fields take fixed placeholder values: stage number 1,
    /// date 2000-01-01, distance 0.0, an empty podium, and a placeholder
    /// winner with empty name and team. The placeholder winner must not be
    /// treated as a real rider in aggregations.
    #[must_use]
    pub fn route_only(origin: &str, destination: &str, stage_type: StageType) -> Self {
        Self {
            stage_no: 1,
            date: time::macros::date!(2000 - 01 - 01),
            distance: 0.0,
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            stage_type,
            podium: Vec::new(),
            winner: Rider::new("", "", RiderCountry::FRA),
        }
    }

    /// Returns the stage number.
    #[must_use]
    pub const fn stage_no(&self) -> u32 {
        self.stage_no
    }

    /// Returns the date the stage was raced.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the distance in kilometers.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the start location.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the finish location.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the stage classification.
    #[must_use]
    pub const fn stage_type(&self) -> StageType {
        self.stage_type
    }

    /// Returns the podium names in finishing order.
    #[must_use]
    pub fn podium(&self) -> &[String] {
        &self.podium
    }

    /// Returns the stage winner.
    #[must_use]
    pub const fn winner(&self) -> &Rider {
        &self.winner
    }

    /// Returns the season label derived from the stage date.
    ///
    /// A stage raced in year Y belongs to season "{Y-1}-{Y}".
    #[must_use]
    pub fn season(&self) -> String {
        let year: i32 = self.date.year();
        format!("{}-{year}", year - 1)
    }

    /// Returns whether the stage was raced individually against the clock.
    #[must_use]
    pub fn is_time_trial(&self) -> bool {
        self.stage_type == StageType::TimeTrial
    }
}

// Equality over f64 is total here: NaN distances are rejected at
// construction, and `route_only` fixes the distance at 0.0.
impl Eq for Stage {}

impl PartialOrd for Stage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stages order by date, then stage number. This is a valid total order
/// for sorting but is coarser than equality, which compares all fields.
impl Ord for Stage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.stage_no.cmp(&other.stage_no))
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stage {} ({}): {} -> {}, {:.1} km, {}, won by {}",
            self.stage_no,
            self.date,
            self.origin,
            self.destination,
            self.distance,
            self.stage_type,
            self.winner
        )
    }
}
