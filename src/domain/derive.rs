//! The derivation engine
//!
//! Pure functions turning a record set plus filter/goal inputs into the
//! derived views consumed by presentation: a filtered subset, a species
//! distribution, per-district CO2 totals, and a required-tree-count estimate.
//! Every function here is side-effect free and recomputed in full per
//! evaluation; nothing is cached across calls.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::domain::catalog::District;
use crate::domain::entities::{
    DistrictTotal, FilterCriteria, SpeciesCount, TreeRecord,
};

/// Fallback average absorption in tonnes/year/tree, used when the filtered
/// set is empty. Kept as the compiled default; overridable via settings.
pub const DEFAULT_FALLBACK_ABSORPTION_TONNES: f64 = 0.04;

/// All derived outputs for one (records, criteria) evaluation.
#[derive(Debug, Clone)]
pub struct DerivedView {
    /// Passing records, source order preserved
    pub filtered: Vec<TreeRecord>,
    /// (species, count) in first-seen order over the filtered set
    pub species_distribution: Vec<SpeciesCount>,
    /// (district, total kg) in canonical district order
    pub district_co2_totals: Vec<DistrictTotal>,
}

impl DerivedView {
    /// Recompute the whole view from scratch.
    pub fn compute(records: &[TreeRecord], criteria: &FilterCriteria) -> Self {
        let filtered = filter_records(records, criteria);
        let species_distribution = species_distribution(&filtered);
        let district_co2_totals = district_co2_totals(&filtered);
        Self {
            filtered,
            species_distribution,
            district_co2_totals,
        }
    }
}

/// Select the records passing all criteria, preserving source order.
///
/// The source collection is untouched; no matches is an empty result,
/// never an error.
pub fn filter_records(records: &[TreeRecord], criteria: &FilterCriteria) -> Vec<TreeRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

/// Count records per species, keyed in first-seen order.
///
/// First-seen order determines chart segment order downstream, so it must
/// be reproduced exactly. Species absent from the filtered set are omitted.
pub fn species_distribution(filtered: &[TreeRecord]) -> Vec<SpeciesCount> {
    filtered
        .iter()
        .map(|r| r.species)
        .unique()
        .map(|species| SpeciesCount {
            species,
            count: filtered.iter().filter(|r| r.species == species).count(),
        })
        .collect()
}

/// Sum CO2 absorption per district, in canonical district order.
///
/// `District`'s derived `Ord` is the canonical I..XXIII ordering, so the
/// `BTreeMap` accumulation yields it directly. Districts absent from the
/// filtered set are omitted, not zero-filled.
pub fn district_co2_totals(filtered: &[TreeRecord]) -> Vec<DistrictTotal> {
    let mut totals: BTreeMap<District, f64> = BTreeMap::new();
    for record in filtered {
        *totals.entry(record.district).or_insert(0.0) += record.co2_absorption_kg;
    }
    totals
        .into_iter()
        .map(|(district, total_kg)| DistrictTotal { district, total_kg })
        .collect()
}

/// The `n` districts with the highest totals, descending.
pub fn top_districts(totals: &[DistrictTotal], n: usize) -> Vec<DistrictTotal> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| b.total_kg.total_cmp(&a.total_kg));
    ranked.truncate(n);
    ranked
}

/// Result of a goal estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalEstimate {
    /// Parsed goal in tonnes CO2/year
    pub goal_tonnes: f64,
    /// Average absorption per tree in tonnes/year used for the estimate
    pub average_tonnes_per_tree: f64,
    /// Trees required to meet the goal (ceiling division)
    pub required_trees: u64,
}

impl GoalEstimate {
    /// The sentence shown by the dashboard.
    pub fn sentence(&self) -> String {
        format!(
            "🌱 To offset {} tonnes CO₂/year, plant approx. {} trees.",
            self.goal_tonnes, self.required_trees
        )
    }
}

/// Estimate how many trees are needed to offset a yearly CO2 goal.
///
/// Non-numeric or non-positive input (including NaN) yields `None`; callers
/// treat that as a normal, expected outcome. Uses ceiling division: rounding
/// down would under-plant and miss the stated goal.
pub fn estimate_required_trees(
    raw_goal: &str,
    filtered: &[TreeRecord],
    fallback_tonnes: f64,
) -> Option<GoalEstimate> {
    let goal_tonnes: f64 = raw_goal.trim().parse().ok()?;
    if !(goal_tonnes > 0.0) {
        return None;
    }

    let average_tonnes_per_tree = if filtered.is_empty() {
        fallback_tonnes
    } else {
        let total_kg: f64 = filtered.iter().map(|r| r.co2_absorption_kg).sum();
        total_kg / filtered.len() as f64 / 1000.0
    };

    let required_trees = (goal_tonnes / average_tonnes_per_tree).ceil() as u64;
    Some(GoalEstimate {
        goal_tonnes,
        average_tonnes_per_tree,
        required_trees,
    })
}
