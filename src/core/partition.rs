//! Age interval partition.
//!
//! The intervals always cover `[0, +inf)` without gaps or overlaps and are
//! kept sorted by lower bound. Each interval carries an index of the SSNs
//! classified into it, rebuilt when the partition is replaced and updated
//! incrementally as persons arrive.

use crate::domain::model::AgeInterval;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_strictly_increasing;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct AgePartition {
    intervals: Vec<AgeInterval>,
    members: Vec<BTreeSet<String>>,
}

impl AgePartition {
    /// The trivial partition `[0,+)`.
    pub fn new() -> Self {
        Self {
            intervals: vec![AgeInterval::new(0, None)],
            members: vec![BTreeSet::new()],
        }
    }

    /// Builds `[0,b0) [b0,b1) ... [bn,+)`.
    ///
    /// Breaks must be positive and strictly increasing; anything else is
    /// rejected rather than normalized.
    pub fn from_breaks(breaks: &[u32]) -> Result<Self> {
        validate_strictly_increasing("breaks", breaks)
            .map_err(|e| PlannerError::config(e.to_string()))?;

        let mut intervals = Vec::with_capacity(breaks.len() + 1);
        let mut lower = 0;
        for &upper in breaks {
            intervals.push(AgeInterval::new(lower, Some(upper)));
            lower = upper;
        }
        intervals.push(AgeInterval::new(lower, None));

        let members = vec![BTreeSet::new(); intervals.len()];
        Ok(Self { intervals, members })
    }

    pub fn intervals(&self) -> &[AgeInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.intervals.iter().map(AgeInterval::label).collect()
    }

    /// Index of the interval containing `age`.
    pub fn index_of(&self, age: u32) -> usize {
        // the first lower bound is 0, so the partition point is at least 1
        self.intervals.partition_point(|i| i.lower <= age) - 1
    }

    pub fn classify(&self, age: u32) -> String {
        self.intervals[self.index_of(age)].label()
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.intervals.iter().position(|i| i.label() == label)
    }

    pub fn insert_member(&mut self, ssn: &str, age: u32) {
        let idx = self.index_of(age);
        self.members[idx].insert(ssn.to_string());
    }

    pub fn members(&self, idx: usize) -> &BTreeSet<String> {
        &self.members[idx]
    }

    /// SSNs classified into `label`, empty for an unknown label.
    pub fn members_of(&self, label: &str) -> Vec<String> {
        self.position(label)
            .map(|idx| self.members[idx].iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Interval indices from the oldest bracket to the youngest.
    pub fn priority_order(&self) -> impl Iterator<Item = usize> {
        (0..self.intervals.len()).rev()
    }
}

impl Default for AgePartition {
    fn default() -> Self {
        Self::new()
    }
}
