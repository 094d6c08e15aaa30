// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use grand_tour::StageCollection;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// Grand Tour - stage file reporting
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the stage file (CSV, one header line).
    file: String,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Also report the longest stage won by this rider
    #[arg(long)]
    rider: Option<String>,
}

/// The longest stage won by a requested rider.
#[derive(Debug, Serialize)]
struct RiderHighlight {
    /// The rider the report was requested for.
    rider: String,
    /// The longest stage they won, or `None` if they won no stage.
    longest_stage: Option<String>,
}

/// A derived report over one stage file.
#[derive(Debug, Serialize)]
struct Report {
    /// The number of stages in the file.
    stage_count: usize,
    /// The mean stage distance in kilometers; `None` for an empty file.
    average_distance_km: Option<f64>,
    /// Stage wins per winner name.
    wins_by_winner: BTreeMap<String, usize>,
    /// Distinct winner names per stage type.
    winners_by_type: BTreeMap<String, BTreeSet<String>>,
    /// The winner with the most stage wins; `None` for an empty file.
    rider_with_most_wins: Option<String>,
    /// Present only when `--rider` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    rider_highlight: Option<RiderHighlight>,
}

/// Derives the report values from a loaded collection.
fn build_report(collection: &StageCollection, rider: Option<&str>) -> Report {
    let mut wins_by_winner: BTreeMap<String, usize> = BTreeMap::new();
    for (winner, count) in collection.wins_by_winner() {
        *wins_by_winner.entry(winner.name().to_owned()).or_insert(0) += count;
    }

    let winners_by_type: BTreeMap<String, BTreeSet<String>> = collection
        .winners_by_type()
        .into_iter()
        .map(|(stage_type, winners)| (stage_type.as_str().to_owned(), winners))
        .collect();

    let rider_highlight: Option<RiderHighlight> = rider.map(|name| RiderHighlight {
        rider: name.to_owned(),
        longest_stage: collection
            .longest_stage_won_by(name)
            .map(|stage| stage.to_string()),
    });

    Report {
        stage_count: collection.len(),
        average_distance_km: collection.average_distance().ok(),
        wins_by_winner,
        winners_by_type,
        rider_with_most_wins: collection
            .rider_with_most_wins()
            .map(|winner| winner.to_string()),
        rider_highlight,
    }
}

/// Prints the report as plain text.
fn print_report(report: &Report) {
    println!("Stages: {}", report.stage_count);

    match report.average_distance_km {
        Some(average) => println!("Average distance: {average:.1} km"),
        None => println!("Average distance: undefined (no stages)"),
    }

    println!("Wins by winner:");
    for (winner, count) in &report.wins_by_winner {
        println!("  {winner}: {count}");
    }

    println!("Winners by type:");
    for (stage_type, winners) in &report.winners_by_type {
        let names: Vec<&str> = winners.iter().map(String::as_str).collect();
        println!("  {stage_type}: {}", names.join(", "));
    }

    match &report.rider_with_most_wins {
        Some(winner) => println!("Most wins: {winner}"),
        None => println!("Most wins: none (no stages)"),
    }

    if let Some(highlight) = &report.rider_highlight {
        match &highlight.longest_stage {
            Some(stage) => println!("Longest stage won by {}: {stage}", highlight.rider),
            None => println!("Longest stage won by {}: none", highlight.rider),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(file = %args.file, "Loading stage file");
    let collection: StageCollection = grand_tour_reader::read_stage_file(&args.file)?;
    info!(stages = collection.len(), "Stage file loaded");

    let report: Report = build_report(&collection, args.rider.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
