//! Priority-weighted greedy allocation of persons to hub/day seats.
//!
//! For one hub and day with `n` seats the engine makes two passes over the
//! age intervals, oldest first:
//!
//! 1. **Priority pass**: each interval in turn may take up to
//!    `floor((n - filled) * share)` available persons, where `filled` is the
//!    number of seats already taken during this call.
//! 2. **Completion pass**: each interval in turn may take every seat still
//!    free, stopping as soon as the day is full.
//!
//! Candidates inside an interval are taken in ascending SSN order, so a
//! run after [`VaccinationPlanner::reset_allocations`] reproduces the
//! previous one exactly.

use crate::core::planner::VaccinationPlanner;
use crate::core::registry::Registry;
use crate::domain::model::{WeekPlan, DAYS_PER_WEEK};
use std::collections::BTreeSet;

impl VaccinationPlanner {
    /// Seats for a hub/day; any configuration failure counts as zero seats.
    fn seats(&self, hub: &str, day: usize) -> usize {
        match self.daily_available(hub, day) {
            Ok(n) => n as usize,
            Err(e) => {
                tracing::warn!("⚠️ No seats for hub {} on day {}: {}", hub, day, e);
                0
            }
        }
    }

    /// Allocates available persons to the seats of `hub` on `day` and
    /// returns their SSNs in allocation order.
    pub fn allocate_day(&mut self, hub: &str, day: usize) -> Vec<String> {
        let n = self.seats(hub, day);
        let mut allocated = Vec::with_capacity(n);
        if n == 0 {
            return allocated;
        }

        let order: Vec<usize> = self.partition.priority_order().collect();
        let percent = self.priority_percent as usize;

        for &idx in &order {
            let quota = (n - allocated.len()) * percent / 100;
            let taken = fill_from(
                self.partition.members(idx),
                &mut self.registry,
                quota,
                &mut allocated,
            );
            if taken < quota {
                tracing::debug!(
                    "Could not find {} persons in interval {} for hub {} day {} (found {})",
                    quota,
                    self.partition.intervals()[idx],
                    hub,
                    day,
                    taken
                );
            }
        }

        for &idx in &order {
            let quota = n - allocated.len();
            if quota == 0 {
                break;
            }
            fill_from(
                self.partition.members(idx),
                &mut self.registry,
                quota,
                &mut allocated,
            );
        }

        tracing::debug!(
            "Hub {} day {}: {} of {} seats allocated",
            hub,
            day,
            allocated.len(),
            n
        );
        allocated
    }

    /// Runs [`allocate_day`](Self::allocate_day) for every day and hub and
    /// stores the resulting plan.
    ///
    /// Persons allocated by an earlier run stay allocated, so calling this
    /// twice without [`reset_allocations`](Self::reset_allocations) only
    /// places the persons left over by the first run.
    pub fn allocate_week(&mut self) -> &WeekPlan {
        let hub_names = self.hub_names();
        let mut plan = WeekPlan::empty();

        for day in 0..DAYS_PER_WEEK {
            for hub in &hub_names {
                let ssns = self.allocate_day(hub, day);
                plan.days[day].insert(hub.clone(), ssns);
            }
        }

        self.plan_total = plan.total_allocated();
        self.week_plan = plan;
        tracing::info!(
            "📅 Weekly plan computed: {} persons allocated across {} hubs",
            self.plan_total,
            hub_names.len()
        );
        &self.week_plan
    }

    /// Marks every person as available again. Configuration and the stored
    /// plan are left untouched.
    pub fn reset_allocations(&mut self) {
        self.registry.clear_allocations();
        tracing::debug!("Allocation flags cleared for {} persons", self.registry.len());
    }

    pub fn week_plan(&self) -> &WeekPlan {
        &self.week_plan
    }

    /// Persons placed by the last [`allocate_week`](Self::allocate_week).
    pub fn plan_total(&self) -> usize {
        self.plan_total
    }
}

/// Moves up to `quota` available members into `out`, marking them allocated.
fn fill_from(
    members: &BTreeSet<String>,
    registry: &mut Registry,
    quota: usize,
    out: &mut Vec<String>,
) -> usize {
    let mut taken = 0;
    for ssn in members {
        if taken == quota {
            break;
        }
        if let Some(person) = registry.get_mut(ssn) {
            if person.available() {
                person.set_allocated();
                out.push(ssn.clone());
                taken += 1;
            }
        }
    }
    taken
}
