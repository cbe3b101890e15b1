//! Allocation statistics.
//!
//! All figures are derived from the allocation flags currently held by the
//! registry. Empty denominators never produce `NaN`:
//!
//! | Metric | Definition | Empty case |
//! |--------|-----------|------------|
//! | Overall | allocated / registered | `0.0` with no people |
//! | Per interval | allocated in interval / members of interval | intervals without members omitted |
//! | Distribution | allocated in interval / persons placed by the last weekly plan | empty map before any allocation |

use crate::core::planner::VaccinationPlanner;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

impl VaccinationPlanner {
    pub fn overall_proportion_allocated(&self) -> f64 {
        if self.registry.is_empty() {
            return 0.0;
        }
        self.registry.allocated_count() as f64 / self.registry.len() as f64
    }

    pub fn proportion_allocated_per_interval(&self) -> BTreeMap<String, f64> {
        self.partition
            .intervals()
            .iter()
            .enumerate()
            .filter_map(|(idx, interval)| {
                let members = self.partition.members(idx);
                if members.is_empty() {
                    return None;
                }
                let allocated = members
                    .iter()
                    .filter_map(|ssn| self.registry.get(ssn))
                    .filter(|p| p.is_allocated())
                    .count();
                Some((interval.label(), allocated as f64 / members.len() as f64))
            })
            .collect()
    }

    pub fn distribution_of_allocated(&self) -> BTreeMap<String, f64> {
        if self.plan_total == 0 {
            return BTreeMap::new();
        }
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for person in self.registry.iter().filter(|p| p.is_allocated()) {
            *counts.entry(self.interval_of(person)).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(label, count)| (label, count as f64 / self.plan_total as f64))
            .collect()
    }

    pub fn report(&self) -> AllocationReport {
        AllocationReport::calculate(self)
    }
}

/// Snapshot of the planner's allocation figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub people: usize,
    pub allocated: usize,
    pub plan_total: usize,
    pub overall_proportion: f64,
    pub proportion_by_interval: BTreeMap<String, f64>,
    pub distribution: BTreeMap<String, f64>,
    pub availability: BTreeMap<String, Vec<u32>>,
}

impl AllocationReport {
    pub fn calculate(planner: &VaccinationPlanner) -> Self {
        Self {
            people: planner.count_people(),
            allocated: planner.registry.allocated_count(),
            plan_total: planner.plan_total(),
            overall_proportion: planner.overall_proportion_allocated(),
            proportion_by_interval: planner.proportion_allocated_per_interval(),
            distribution: planner.distribution_of_allocated(),
            availability: planner.available_table(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2021;

    fn configured() -> VaccinationPlanner {
        let mut p = VaccinationPlanner::with_reference_year(YEAR);
        p.define_intervals(&[40, 60]).unwrap();
        p.define_hub("Centro").unwrap();
        p.set_staff("Centro", 1, 1, 1).unwrap();
        p.set_hours(&[1, 0, 0, 0, 0, 0, 0]).unwrap();
        p
    }

    fn add(p: &mut VaccinationPlanner, prefix: &str, count: usize, age: i32) {
        for i in 0..count {
            p.add_person("F", "L", &format!("{}{:03}", prefix, i), YEAR - age)
                .unwrap();
        }
    }

    #[test]
    fn test_empty_registry() {
        let p = configured();
        assert_eq!(p.overall_proportion_allocated(), 0.0);
        assert!(p.proportion_allocated_per_interval().is_empty());
        assert!(p.distribution_of_allocated().is_empty());
    }

    #[test]
    fn test_statistics_after_allocation() {
        let mut p = configured();
        add(&mut p, "A", 10, 70);
        add(&mut p, "C", 10, 30);

        // 10 seats: 4 from [60,+), 2 from [0,40), then 4 more from [60,+)
        assert_eq!(p.allocate_week().total_allocated(), 10);

        assert!((p.overall_proportion_allocated() - 0.5).abs() < 1e-10);

        let per_interval = p.proportion_allocated_per_interval();
        assert_eq!(per_interval.len(), 2);
        assert!((per_interval["[60,+)"] - 0.8).abs() < 1e-10);
        assert!((per_interval["[0,40)"] - 0.2).abs() < 1e-10);
        assert!(!per_interval.contains_key("[40,60)"));

        let distribution = p.distribution_of_allocated();
        assert!((distribution["[60,+)"] - 0.8).abs() < 1e-10);
        assert!((distribution["[0,40)"] - 0.2).abs() < 1e-10);
        let sum: f64 = distribution.values().sum();
        assert!((sum - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_intervals_with_members_but_no_seats() {
        let mut p = configured();
        p.set_hours(&[0; 7]).unwrap();
        add(&mut p, "A", 20, 70);
        add(&mut p, "B", 5, 50);
        assert_eq!(p.allocate_week().total_allocated(), 0);

        let per_interval = p.proportion_allocated_per_interval();
        assert_eq!(per_interval.len(), 2);
        assert_eq!(per_interval["[60,+)"], 0.0);
        assert_eq!(per_interval["[40,60)"], 0.0);
        assert!(p.distribution_of_allocated().is_empty());
    }

    #[test]
    fn test_reset_clears_statistics() {
        let mut p = configured();
        add(&mut p, "A", 20, 70);
        p.allocate_week();
        assert!(p.overall_proportion_allocated() > 0.0);

        p.reset_allocations();
        assert_eq!(p.overall_proportion_allocated(), 0.0);
        assert!(p.distribution_of_allocated().is_empty());
        assert!(p.registry.iter().all(|person| person.available()));
    }

    #[test]
    fn test_report_snapshot() {
        let mut p = configured();
        add(&mut p, "A", 15, 70);
        p.allocate_week();

        let report = p.report();
        assert_eq!(report.people, 15);
        assert_eq!(report.allocated, 10);
        assert_eq!(report.plan_total, 10);
        assert_eq!(report.availability["Centro"], vec![10, 0, 0, 0, 0, 0, 0]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["people"], 15);
    }
}
