// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures: the first three stages of the 2000 edition.

use crate::StageCollection;
use grand_tour_domain::{Rider, RiderCountry, Stage, StageType};
use time::macros::date;

pub fn millar() -> Rider {
    Rider::new("David Millar", "T-Mobile", RiderCountry::GBR)
}

pub fn steels() -> Rider {
    Rider::new("Tom Steels", "BMC Racing Team", RiderCountry::BEL)
}

fn podium(first: &str, second: &str, third: &str) -> Vec<String> {
    vec![first.to_owned(), second.to_owned(), third.to_owned()]
}

pub fn stage_one() -> Stage {
    Stage::new(
        1,
        date!(2000 - 07 - 01),
        16.5,
        "Futuroscope",
        "Futuroscope",
        StageType::TimeTrial,
        podium("David Millar", "Tom Steels", "Abraham Olano"),
        millar(),
    )
    .unwrap()
}

pub fn stage_two() -> Stage {
    Stage::new(
        2,
        date!(2000 - 07 - 02),
        194.0,
        "Futuroscope",
        "Loudun",
        StageType::Flat,
        podium("Tom Steels", "Marcel Wust", "Abraham Olano"),
        steels(),
    )
    .unwrap()
}

pub fn stage_three() -> Stage {
    Stage::new(
        3,
        date!(2000 - 07 - 03),
        161.5,
        "Loudun",
        "Nantes",
        StageType::Flat,
        podium("Tom Steels", "Abraham Olano", "Marcel Wust"),
        steels(),
    )
    .unwrap()
}

/// A collection holding the three opening stages, in race order.
pub fn opening_collection() -> StageCollection {
    StageCollection::from_stages([stage_one(), stage_two(), stage_three()])
}
