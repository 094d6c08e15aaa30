// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a rider's country as a 3-letter code.
///
/// The set of codes is a fixed domain constant covering every country
/// appearing in the stage data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum RiderCountry {
    GBR,
    GER,
    SVK,
    FRA,
    ITA,
    COL,
    AUS,
    NED,
    SLO,
    NOR,
    POL,
    BEL,
    RUS,
    ESP,
    CZE,
    LTU,
    IRL,
    POR,
    SUI,
    USA,
    LUX,
    KAZ,
    DEN,
    RSA,
    UKR,
    AUT,
    EST,
}

impl RiderCountry {
    /// Converts this country to its 3-letter code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GBR => "GBR",
            Self::GER => "GER",
            Self::SVK => "SVK",
            Self::FRA => "FRA",
            Self::ITA => "ITA",
            Self::COL => "COL",
            Self::AUS => "AUS",
            Self::NED => "NED",
            Self::SLO => "SLO",
            Self::NOR => "NOR",
            Self::POL => "POL",
            Self::BEL => "BEL",
            Self::RUS => "RUS",
            Self::ESP => "ESP",
            Self::CZE => "CZE",
            Self::LTU => "LTU",
            Self::IRL => "IRL",
            Self::POR => "POR",
            Self::SUI => "SUI",
            Self::USA => "USA",
            Self::LUX => "LUX",
            Self::KAZ => "KAZ",
            Self::DEN => "DEN",
            Self::RSA => "RSA",
            Self::UKR => "UKR",
            Self::AUT => "AUT",
            Self::EST => "EST",
        }
    }
}

impl FromStr for RiderCountry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GBR" => Ok(Self::GBR),
            "GER" => Ok(Self::GER),
            "SVK" => Ok(Self::SVK),
            "FRA" => Ok(Self::FRA),
            "ITA" => Ok(Self::ITA),
            "COL" => Ok(Self::COL),
            "AUS" => Ok(Self::AUS),
            "NED" => Ok(Self::NED),
            "SLO" => Ok(Self::SLO),
            "NOR" => Ok(Self::NOR),
            "POL" => Ok(Self::POL),
            "BEL" => Ok(Self::BEL),
            "RUS" => Ok(Self::RUS),
            "ESP" => Ok(Self::ESP),
            "CZE" => Ok(Self::CZE),
            "LTU" => Ok(Self::LTU),
            "IRL" => Ok(Self::IRL),
            "POR" => Ok(Self::POR),
            "SUI" => Ok(Self::SUI),
            "USA" => Ok(Self::USA),
            "LUX" => Ok(Self::LUX),
            "KAZ" => Ok(Self::KAZ),
            "DEN" => Ok(Self::DEN),
            "RSA" => Ok(Self::RSA),
            "UKR" => Ok(Self::UKR),
            "AUT" => Ok(Self::AUT),
            "EST" => Ok(Self::EST),
            _ => Err(DomainError::InvalidCountry(s.to_string())),
        }
    }
}

impl std::fmt::Display for RiderCountry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a stage classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StageType {
    /// A flat road stage.
    #[serde(rename = "FLAT")]
    Flat,
    /// A mountain road stage.
    #[serde(rename = "MOUNTAIN")]
    Mountain,
    /// A stage raced individually against the clock.
    #[serde(rename = "TIME_TRIAL")]
    TimeTrial,
}

impl StageType {
    /// Parses a stage type from its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of `FLAT`, `MOUNTAIN`,
    /// or `TIME_TRIAL`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "FLAT" => Ok(Self::Flat),
            "MOUNTAIN" => Ok(Self::Mountain),
            "TIME_TRIAL" => Ok(Self::TimeTrial),
            _ => Err(DomainError::InvalidStageType(s.to_string())),
        }
    }

    /// Converts this stage type to its wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "FLAT",
            Self::Mountain => "MOUNTAIN",
            Self::TimeTrial => "TIME_TRIAL",
        }
    }
}

impl FromStr for StageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for StageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a rider's identity.
///
/// A pure value type: two riders are equal iff name, team, and country all
/// match, case-sensitively. Immutable once constructed.
///
/// The derived `Ord` (name, then team, then country) exists so riders can
/// key deterministic maps; it carries no sporting meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rider {
    /// The rider's full name.
    name: String,
    /// The team the rider rode for.
    team: String,
    /// The rider's country.
    country: RiderCountry,
}

impl Rider {
    /// Creates a new `Rider`.
    ///
    /// # Arguments
    ///
    /// * `name` - The rider's full name
    /// * `team` - The team the rider rode for
    /// * `country` - The rider's country
    #[must_use]
    pub fn new(name: &str, team: &str, country: RiderCountry) -> Self {
        Self {
            name: name.to_owned(),
            team: team.to_owned(),
            country,
        }
    }

    /// Returns the rider's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rider's team.
    #[must_use]
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Returns the rider's country.
    #[must_use]
    pub const fn country(&self) -> RiderCountry {
        self.country
    }
}

impl std::fmt::Display for Rider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.team, self.country)
    }
}
