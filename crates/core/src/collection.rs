// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The stage collection query engine.
//!
//! A `StageCollection` owns an ordered sequence of validated stages and
//! answers queries over them without mutating any stage. Insertion order is
//! the canonical iteration order; duplicates are permitted. All grouping
//! results use ordered maps so report output is deterministic.

use crate::error::ReportError;
use grand_tour_domain::{Rider, Stage, StageType};
use std::collections::{BTreeMap, BTreeSet};
use time::Date;

/// An ordered, duplicate-tolerant collection of stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageCollection {
    /// The stored stages, in insertion order.
    stages: Vec<Stage>,
}

impl StageCollection {
    /// Creates an empty `StageCollection`.
    #[must_use]
    pub const fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Creates a `StageCollection` from an initial sequence of stages,
    /// preserving its order.
    #[must_use]
    pub fn from_stages<I: IntoIterator<Item = Stage>>(stages: I) -> Self {
        Self {
            stages: stages.into_iter().collect(),
        }
    }

    /// Returns the number of stored stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns whether the collection holds no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns the stored stages in insertion order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Appends one stage. No uniqueness check is performed.
    pub fn add(&mut self, stage: Stage) {
        self.stages.push(stage);
    }

    /// Appends every stage in the given sequence, preserving its order.
    pub fn add_all<I: IntoIterator<Item = Stage>>(&mut self, stages: I) {
        self.stages.extend(stages);
    }

    /// Removes the first stored stage structurally equal to the argument.
    ///
    /// # Returns
    ///
    /// `true` if a stage was removed, `false` if no stored stage matched
    /// (in which case the collection is unchanged).
    pub fn remove(&mut self, stage: &Stage) -> bool {
        match self.stages.iter().position(|stored| stored == stage) {
            Some(index) => {
                self.stages.remove(index);
                true
            }
            None => false,
        }
    }

    /// Checks whether any stored stage's podium contains the given rider
    /// name (exact string match).
    ///
    /// Returns `false` on an empty collection.
    #[must_use]
    pub fn has_rider_on_podium(&self, rider_name: &str) -> bool {
        self.stages
            .iter()
            .any(|stage| stage.podium().iter().any(|name| name == rider_name))
    }

    /// Computes the arithmetic mean of the stored stage distances.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::EmptyCollection` when the collection is empty:
    /// an average over no data is undefined, never a silent 0.0.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_distance(&self) -> Result<f64, ReportError> {
        if self.stages.is_empty() {
            return Err(ReportError::EmptyCollection {
                operation: "average distance",
            });
        }

        let total: f64 = self.stages.iter().map(Stage::distance).sum();
        Ok(total / self.stages.len() as f64)
    }

    /// Returns the stages raced strictly before the given date, preserving
    /// their original relative order (not sorted by date).
    #[must_use]
    pub fn stages_before(&self, date: Date) -> Vec<Stage> {
        self.stages
            .iter()
            .filter(|stage| stage.date() < date)
            .cloned()
            .collect()
    }

    /// Groups the stored stages by stage number.
    ///
    /// Encounter order is preserved within each group. A stage number not
    /// present in the collection is simply absent from the map.
    #[must_use]
    pub fn stages_by_number(&self) -> BTreeMap<u32, Vec<Stage>> {
        let mut groups: BTreeMap<u32, Vec<Stage>> = BTreeMap::new();

        for stage in &self.stages {
            groups
                .entry(stage.stage_no())
                .or_default()
                .push(stage.clone());
        }

        groups
    }

    /// Counts the stages won by each distinct winner in a single pass.
    #[must_use]
    pub fn wins_by_winner(&self) -> BTreeMap<Rider, usize> {
        let mut counts: BTreeMap<Rider, usize> = BTreeMap::new();

        for stage in &self.stages {
            *counts.entry(stage.winner().clone()).or_insert(0) += 1;
        }

        counts
    }

    /// Counts the stages won by each distinct winner by first grouping the
    /// stages per winner and then measuring each group.
    ///
    /// This is an alternate computation path for [`Self::wins_by_winner`];
    /// the two must agree exactly for the same input.
    #[must_use]
    pub fn wins_by_winner_via_groups(&self) -> BTreeMap<Rider, usize> {
        let mut groups: BTreeMap<Rider, Vec<&Stage>> = BTreeMap::new();

        for stage in &self.stages {
            groups.entry(stage.winner().clone()).or_default().push(stage);
        }

        groups
            .into_iter()
            .map(|(winner, stages)| (winner, stages.len()))
            .collect()
    }

    /// Finds the longest stage won by the named rider.
    ///
    /// Ties are broken by the first matching stage encountered in
    /// collection order.
    ///
    /// # Returns
    ///
    /// `None` when no stored stage was won by the named rider. The absence
    /// of a match is a normal outcome, not an error.
    #[must_use]
    pub fn longest_stage_won_by(&self, rider_name: &str) -> Option<Stage> {
        let mut longest: Option<&Stage> = None;

        for stage in &self.stages {
            if stage.winner().name() != rider_name {
                continue;
            }
            // Strictly-greater comparison keeps the first encountered on ties.
            let replace: bool = match longest {
                None => true,
                Some(best) => stage.distance() > best.distance(),
            };
            if replace {
                longest = Some(stage);
            }
        }

        longest.cloned()
    }

    /// Returns the stages of the given type, sorted ascending by distance.
    ///
    /// The sort is stable: stages of equal distance keep their original
    /// relative order.
    #[must_use]
    pub fn of_type_sorted_by_distance(&self, stage_type: StageType) -> Vec<Stage> {
        let mut matching: Vec<Stage> = self
            .stages
            .iter()
            .filter(|stage| stage.stage_type() == stage_type)
            .cloned()
            .collect();

        matching.sort_by(|a, b| a.distance().total_cmp(&b.distance()));
        matching
    }

    /// Maps each stage type present in the collection to the set of
    /// distinct winner names for stages of that type.
    ///
    /// A type with no stages is absent from the map.
    #[must_use]
    pub fn winners_by_type(&self) -> BTreeMap<StageType, BTreeSet<String>> {
        let mut winners: BTreeMap<StageType, BTreeSet<String>> = BTreeMap::new();

        for stage in &self.stages {
            winners
                .entry(stage.stage_type())
                .or_default()
                .insert(stage.winner().name().to_owned());
        }

        winners
    }

    /// Maps each distinct winner to the stage with the earliest date among
    /// those they won.
    ///
    /// When two of a winner's stages share the same date, the first one
    /// encountered in collection order is kept, so the result is
    /// deterministic.
    #[must_use]
    pub fn first_stage_by_winner(&self) -> BTreeMap<Rider, Stage> {
        let mut first: BTreeMap<Rider, Stage> = BTreeMap::new();

        for stage in &self.stages {
            let replace: bool = match first.get(stage.winner()) {
                None => true,
                Some(current) => stage.date() < current.date(),
            };
            if replace {
                first.insert(stage.winner().clone(), stage.clone());
            }
        }

        first
    }

    /// Maps each winner name to up to `n` of their stages, ordered by
    /// distance descending.
    ///
    /// Winner names key the map in lexicographic order. Each winner's list
    /// is truncated to `n` entries; `n == 0` yields an empty list per
    /// winner. Equal distances keep their collection order (stable sort).
    #[must_use]
    pub fn top_stages_by_winner(&self, n: usize) -> BTreeMap<String, Vec<Stage>> {
        let mut groups: BTreeMap<String, Vec<Stage>> = BTreeMap::new();

        for stage in &self.stages {
            groups
                .entry(stage.winner().name().to_owned())
                .or_default()
                .push(stage.clone());
        }

        for stages in groups.values_mut() {
            stages.sort_by(|a, b| b.distance().total_cmp(&a.distance()));
            stages.truncate(n);
        }

        groups
    }

    /// Finds the winner with the highest stage-win count.
    ///
    /// Ties are broken by the first rider encountered while scanning the
    /// (ordered) win counts, so the result is deterministic.
    ///
    /// # Returns
    ///
    /// `None` when the collection is empty.
    #[must_use]
    pub fn rider_with_most_wins(&self) -> Option<Rider> {
        let counts: BTreeMap<Rider, usize> = self.wins_by_winner();
        let mut best: Option<(&Rider, usize)> = None;

        for (rider, &wins) in &counts {
            let replace: bool = match best {
                None => true,
                Some((_, best_wins)) => wins > best_wins,
            };
            if replace {
                best = Some((rider, wins));
            }
        }

        best.map(|(rider, _)| rider.clone())
    }
}

impl std::fmt::Display for StageCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "StageCollection with {} stages:", self.stages.len())?;
        for stage in &self.stages {
            writeln!(f, "  {stage}")?;
        }
        Ok(())
    }
}
