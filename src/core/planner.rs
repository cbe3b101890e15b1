//! The planning context.
//!
//! One `VaccinationPlanner` owns the registry, the age partition, the hubs,
//! the weekly hours and the last weekly plan. Configuration entry points
//! live here; allocation, ingestion and statistics are implemented in
//! sibling modules on the same type.

use crate::core::hours::WeeklyHours;
use crate::core::hub::Hub;
use crate::core::partition::AgePartition;
use crate::core::registry::Registry;
use crate::domain::model::{Person, WeekPlan};
use crate::domain::ports::LoadErrorSink;
use crate::utils::error::{PlannerError, Result};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Share of the remaining seats granted to each interval in the priority pass.
pub const DEFAULT_PRIORITY_PERCENT: u32 = 40;

pub struct VaccinationPlanner {
    pub(crate) reference_year: i32,
    pub(crate) registry: Registry,
    pub(crate) partition: AgePartition,
    pub(crate) hubs: BTreeMap<String, Hub>,
    pub(crate) hours: WeeklyHours,
    pub(crate) priority_percent: u32,
    pub(crate) week_plan: WeekPlan,
    pub(crate) plan_total: usize,
    pub(crate) load_listener: Option<Box<dyn LoadErrorSink>>,
}

impl VaccinationPlanner {
    /// Planner whose ages are computed against the current calendar year.
    pub fn new() -> Self {
        Self::with_reference_year(chrono::Local::now().year())
    }

    pub fn with_reference_year(reference_year: i32) -> Self {
        Self {
            reference_year,
            registry: Registry::new(),
            partition: AgePartition::new(),
            hubs: BTreeMap::new(),
            hours: WeeklyHours::default(),
            priority_percent: DEFAULT_PRIORITY_PERCENT,
            week_plan: WeekPlan::empty(),
            plan_total: 0,
            load_listener: None,
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    // ---- persons ----

    pub fn add_person(&mut self, first: &str, last: &str, ssn: &str, birth_year: i32) -> Result<()> {
        if ssn.trim().is_empty() {
            return Err(PlannerError::record(ssn, "empty SSN"));
        }
        let person = Person::new(ssn, last, first, birth_year);
        let age = u32::try_from(person.age(self.reference_year)).map_err(|_| {
            PlannerError::record(
                ssn,
                format!(
                    "birth year {} is after {}",
                    birth_year, self.reference_year
                ),
            )
        })?;

        self.registry.insert(person)?;
        self.partition.insert_member(ssn, age);
        Ok(())
    }

    pub fn count_people(&self) -> usize {
        self.registry.len()
    }

    pub fn person(&self, ssn: &str) -> Option<&Person> {
        self.registry.get(ssn)
    }

    /// `"ssn,last,first"` for a registered person.
    pub fn person_info(&self, ssn: &str) -> Option<String> {
        self.registry.get(ssn).map(Person::to_string)
    }

    pub fn age_of(&self, ssn: &str) -> Option<u32> {
        self.registry.get(ssn).map(|p| self.age(p))
    }

    pub(crate) fn age(&self, person: &Person) -> u32 {
        // add_person rejects birth years after the reference year
        u32::try_from(person.age(self.reference_year)).unwrap_or(0)
    }

    // ---- age intervals ----

    /// Replaces the whole partition and reclassifies every person.
    pub fn define_intervals(&mut self, breaks: &[u32]) -> Result<()> {
        let mut partition = AgePartition::from_breaks(breaks)?;
        for person in self.registry.iter() {
            partition.insert_member(&person.ssn, self.age(person));
        }
        self.partition = partition;
        tracing::debug!("Age intervals defined: {:?}", self.partition.labels());
        Ok(())
    }

    pub fn interval_labels(&self) -> Vec<String> {
        self.partition.labels()
    }

    pub fn classify(&self, age: u32) -> String {
        self.partition.classify(age)
    }

    pub fn members_of(&self, label: &str) -> Vec<String> {
        self.partition.members_of(label)
    }

    pub(crate) fn interval_of(&self, person: &Person) -> String {
        self.partition.classify(self.age(person))
    }

    // ---- hubs ----

    pub fn define_hub(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(PlannerError::config("Hub name cannot be empty"));
        }
        if self.hubs.contains_key(name) {
            return Err(PlannerError::config(format!("Duplicate hub name: {}", name)));
        }
        self.hubs.insert(name.to_string(), Hub::new(name));
        Ok(())
    }

    pub fn hub_names(&self) -> Vec<String> {
        self.hubs.keys().cloned().collect()
    }

    pub fn hub(&self, name: &str) -> Option<&Hub> {
        self.hubs.get(name)
    }

    fn hub_ref(&self, name: &str) -> Result<&Hub> {
        self.hubs
            .get(name)
            .ok_or_else(|| PlannerError::config(format!("No hub named {}", name)))
    }

    pub fn set_staff(&mut self, hub: &str, doctors: u32, nurses: u32, other: u32) -> Result<()> {
        self.hubs
            .get_mut(hub)
            .ok_or_else(|| PlannerError::config(format!("No hub named {}", hub)))?
            .set_staff(doctors, nurses, other)
    }

    pub fn hourly_capacity(&self, hub: &str) -> Result<u32> {
        self.hub_ref(hub)?.hourly_capacity()
    }

    // ---- hours ----

    pub fn set_hours(&mut self, hours: &[u32]) -> Result<()> {
        self.hours = WeeklyHours::new(hours)?;
        Ok(())
    }

    pub fn hours(&self) -> &WeeklyHours {
        &self.hours
    }

    pub fn time_slots(&self) -> Vec<Vec<String>> {
        self.hours.time_slots()
    }

    pub fn set_priority_percent(&mut self, percent: u32) -> Result<()> {
        if percent == 0 || percent > 100 {
            return Err(PlannerError::config(format!(
                "Priority share must be between 1 and 100, got {}",
                percent
            )));
        }
        self.priority_percent = percent;
        Ok(())
    }

    pub fn priority_percent(&self) -> u32 {
        self.priority_percent
    }

    // ---- availability ----

    pub fn daily_available(&self, hub: &str, day: usize) -> Result<u32> {
        let hub = self.hub_ref(hub)?;
        let hours = self
            .hours
            .get(day)
            .ok_or_else(|| PlannerError::config(format!("Day {} is outside the week", day)))?;
        hub.seats(hours)
    }

    /// Weekly seats per hub; a hub without staff maps to an empty list.
    pub fn available_table(&self) -> BTreeMap<String, Vec<u32>> {
        self.hubs
            .values()
            .map(|hub| {
                let seats = hub.availability(&self.hours).unwrap_or_else(|e| {
                    tracing::warn!("⚠️ {}", e);
                    Vec::new()
                });
                (hub.name().to_string(), seats)
            })
            .collect()
    }
}

impl Default for VaccinationPlanner {
    fn default() -> Self {
        Self::new()
    }
}
