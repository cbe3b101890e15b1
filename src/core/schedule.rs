//! Time-slot refinement of the weekly plan.
//!
//! Each hour of a hub's day has `capacity` seats, split across its four
//! 15-minute slots: `capacity / 4` each, and one more for the first
//! `capacity % 4` slots. The persons of a hub/day are laid out over the
//! slots in plan order.

use crate::core::hours::{slot_label, SLOTS_PER_HOUR};
use crate::core::hub::Hub;
use crate::core::planner::VaccinationPlanner;
use crate::domain::model::DAYS_PER_WEEK;
use std::collections::BTreeMap;

/// Slot label to SSNs, per hub, per day.
pub type DetailedSchedule = Vec<BTreeMap<String, BTreeMap<String, Vec<String>>>>;

/// Seats of the `slot_in_hour`-th slot (0..4) of an hour.
pub fn slot_seats(capacity: u32, slot_in_hour: u32) -> u32 {
    capacity / SLOTS_PER_HOUR + u32::from(slot_in_hour < capacity % SLOTS_PER_HOUR)
}

impl VaccinationPlanner {
    /// Lays out the last weekly plan over the current time slots. Slots with
    /// nobody booked are left out.
    pub fn detailed_schedule(&self) -> DetailedSchedule {
        (0..DAYS_PER_WEEK)
            .map(|day| {
                self.hubs
                    .values()
                    .map(|hub| (hub.name().to_string(), self.hub_day_slots(hub, day)))
                    .collect()
            })
            .collect()
    }

    fn hub_day_slots(&self, hub: &Hub, day: usize) -> BTreeMap<String, Vec<String>> {
        let mut slots = BTreeMap::new();
        let Ok(capacity) = hub.hourly_capacity() else {
            return slots;
        };

        let hours = self.hours.get(day).unwrap_or(0);
        let mut persons = self.week_plan.hub_day(hub.name(), day).iter();
        for index in 0..hours * SLOTS_PER_HOUR {
            let seats = slot_seats(capacity, index % SLOTS_PER_HOUR) as usize;
            let booked: Vec<String> = persons.by_ref().take(seats).cloned().collect();
            if booked.is_empty() {
                break;
            }
            slots.insert(slot_label(index), booked);
        }

        let unplaced = persons.count();
        if unplaced > 0 {
            tracing::warn!(
                "⚠️ {} persons of hub {} day {} do not fit the current time slots",
                unplaced,
                hub.name(),
                day
            );
        }
        slots
    }
}
