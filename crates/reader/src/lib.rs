// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV stage file ingestion.
//!
//! A stage file carries one header line, then one stage per line with
//! exactly ten comma-separated fields: stage number, date (`yyyy-MM-dd`),
//! distance, origin, destination, type, winner name, winner team, winner
//! country, and the podium (three names joined by `"; "`). Every record is
//! validated field by field before `Stage` construction, so malformed lines
//! are rejected with their line number before they can reach the domain.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;

#[cfg(test)]
mod tests;

use csv::StringRecord;
use grand_tour::StageCollection;
use grand_tour_domain::{Rider, RiderCountry, Stage, StageType};
use std::path::Path;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

pub use error::ReaderError;

/// The exact number of fields a stage record must carry.
const FIELDS_PER_RECORD: usize = 10;

/// The exact number of names a stage file podium must carry.
const PODIUM_NAMES: usize = 3;

/// The separator between podium names within the podium field.
const PODIUM_SEPARATOR: &str = "; ";

/// The stage date format (`yyyy-MM-dd`).
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Reads a stage file into a `StageCollection`.
///
/// The first line is treated as a header and skipped. Records are appended
/// in file order.
///
/// # Arguments
///
/// * `path` - The path of the stage file
///
/// # Errors
///
/// Returns a `ReaderError` if the file cannot be read, a record does not
/// carry exactly ten fields, a field cannot be parsed, or the parsed fields
/// violate a stage construction invariant.
pub fn read_stage_file<P: AsRef<Path>>(path: P) -> Result<StageCollection, ReaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut collection: StageCollection = StageCollection::new();
    for result in reader.records() {
        let record: StringRecord = result?;
        let line: u64 = record.position().map_or(0, csv::Position::line);
        collection.add(parse_record(&record, line)?);
    }

    tracing::debug!(stages = collection.len(), "loaded stage file");
    Ok(collection)
}

/// Parses one CSV record into a validated `Stage`.
fn parse_record(record: &StringRecord, line: u64) -> Result<Stage, ReaderError> {
    if record.len() != FIELDS_PER_RECORD {
        return Err(ReaderError::FieldCount {
            line,
            found: record.len(),
        });
    }

    let stage_no: u32 = record[0]
        .trim()
        .parse()
        .map_err(|err: std::num::ParseIntError| ReaderError::InvalidField {
            line,
            field: "stage number",
            message: err.to_string(),
        })?;

    let date: Date =
        Date::parse(record[1].trim(), DATE_FORMAT).map_err(|err| ReaderError::InvalidField {
            line,
            field: "date",
            message: err.to_string(),
        })?;

    let distance: f64 = record[2].trim().parse().map_err(
        |err: std::num::ParseFloatError| ReaderError::InvalidField {
            line,
            field: "distance",
            message: err.to_string(),
        },
    )?;

    let origin: &str = record[3].trim();
    let destination: &str = record[4].trim();

    let stage_type: StageType =
        StageType::parse(record[5].trim()).map_err(|err| ReaderError::InvalidField {
            line,
            field: "stage type",
            message: err.to_string(),
        })?;

    let country: RiderCountry =
        record[8]
            .trim()
            .parse()
            .map_err(|err: grand_tour_domain::DomainError| ReaderError::InvalidField {
                line,
                field: "winner country",
                message: err.to_string(),
            })?;
    let winner: Rider = Rider::new(record[6].trim(), record[7].trim(), country);

    let podium: Vec<String> = parse_podium(record[9].trim(), line)?;

    Stage::new(
        stage_no,
        date,
        distance,
        origin,
        destination,
        stage_type,
        podium,
        winner,
    )
    .map_err(|source| ReaderError::InvalidStage { line, source })
}

/// Parses a podium field into its three names.
fn parse_podium(podium: &str, line: u64) -> Result<Vec<String>, ReaderError> {
    let names: Vec<String> = podium
        .split(PODIUM_SEPARATOR)
        .map(|name| name.trim().to_owned())
        .collect();

    if names.len() != PODIUM_NAMES {
        return Err(ReaderError::InvalidField {
            line,
            field: "podium",
            message: format!("expected 3 names joined by '; ', found {}", names.len()),
        });
    }

    Ok(names)
}
