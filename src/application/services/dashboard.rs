//! Dashboard evaluation service
//!
//! Orchestrates the record source and the derivation engine: loads the
//! inventory once, then recomputes derived views per criteria change.
//! Evaluations are stateless and independent; the whole view is replaced
//! on each call.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{
    estimate_required_trees, top_districts, DerivedView, DistrictTotal, FilterCriteria,
    GoalEstimate, TreeRecord,
};
use crate::infrastructure::RecordSource;

/// Service evaluating derived views over one loaded inventory.
pub struct DashboardService {
    records: Vec<TreeRecord>,
    /// Average absorption (tonnes/year/tree) assumed when no records match
    fallback_absorption_tonnes: f64,
}

impl DashboardService {
    /// Load the inventory from a source. Records are immutable afterwards.
    pub fn from_source(
        source: Arc<dyn RecordSource>,
        fallback_absorption_tonnes: f64,
    ) -> ApplicationResult<Self> {
        let records = source.load().map_err(ApplicationError::from)?;
        debug!("dashboard loaded {} records", records.len());
        Ok(Self {
            records,
            fallback_absorption_tonnes,
        })
    }

    /// The full, unfiltered inventory.
    pub fn records(&self) -> &[TreeRecord] {
        &self.records
    }

    /// Recompute the derived view for the given criteria.
    pub fn evaluate(&self, criteria: &FilterCriteria) -> DerivedView {
        debug!(
            "evaluate: health={:?} district={:?} street={:?}",
            criteria.health, criteria.district, criteria.street_query
        );
        DerivedView::compute(&self.records, criteria)
    }

    /// The `n` highest-absorbing districts of a view, descending.
    pub fn top_districts(&self, view: &DerivedView, n: usize) -> Vec<DistrictTotal> {
        top_districts(&view.district_co2_totals, n)
    }

    /// Goal estimate over the view's filtered set; `None` for invalid input.
    pub fn estimate_goal(&self, raw_goal: &str, view: &DerivedView) -> Option<GoalEstimate> {
        estimate_required_trees(raw_goal, &view.filtered, self.fallback_absorption_tonnes)
    }
}
