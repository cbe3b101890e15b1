use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Days in the planning week; index 0 is Monday.
pub const DAYS_PER_WEEK: usize = 7;

/// Vaccinations per hour one doctor can perform.
pub const DOCTOR_CAPACITY: u32 = 10;
/// Vaccinations per hour one nurse can support.
pub const NURSE_CAPACITY: u32 = 12;
/// Vaccinations per hour one member of the other personnel can support.
pub const OTHER_CAPACITY: u32 = 20;

/// A registered person, identified by SSN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub ssn: String,
    pub last: String,
    pub first: String,
    pub birth_year: i32,
    #[serde(default)]
    pub allocated: bool,
}

impl Person {
    pub fn new(
        ssn: impl Into<String>,
        last: impl Into<String>,
        first: impl Into<String>,
        birth_year: i32,
    ) -> Self {
        Self {
            ssn: ssn.into(),
            last: last.into(),
            first: first.into(),
            birth_year,
            allocated: false,
        }
    }

    /// Age in years; negative when the birth year is after `current_year`.
    pub fn age(&self, current_year: i32) -> i32 {
        current_year - self.birth_year
    }

    pub fn available(&self) -> bool {
        !self.allocated
    }

    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    pub(crate) fn set_allocated(&mut self) {
        self.allocated = true;
    }

    pub(crate) fn clear_allocated(&mut self) {
        self.allocated = false;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.ssn, self.last, self.first)
    }
}

/// Half-open age bracket `[lower, upper)`; `upper == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeInterval {
    pub lower: u32,
    pub upper: Option<u32>,
}

impl AgeInterval {
    pub fn new(lower: u32, upper: Option<u32>) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.lower && self.upper.map_or(true, |upper| age < upper)
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AgeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) => write!(f, "[{},{})", self.lower, upper),
            None => write!(f, "[{},+)", self.lower),
        }
    }
}

/// Staff counts of a hub. Every count is strictly positive once accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staffing {
    pub doctors: u32,
    pub nurses: u32,
    pub other: u32,
}

impl Staffing {
    /// Widened to `u64` so large staff counts cannot overflow.
    pub fn hourly_capacity(&self) -> u64 {
        (u64::from(self.doctors) * u64::from(DOCTOR_CAPACITY))
            .min(u64::from(self.nurses) * u64::from(NURSE_CAPACITY))
            .min(u64::from(self.other) * u64::from(OTHER_CAPACITY))
    }
}

/// One allocation run: for each of the 7 days, hub name to allocated SSNs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub days: Vec<BTreeMap<String, Vec<String>>>,
}

impl WeekPlan {
    pub fn empty() -> Self {
        Self {
            days: vec![Default::default(); DAYS_PER_WEEK],
        }
    }

    pub fn day(&self, day: usize) -> Option<&BTreeMap<String, Vec<String>>> {
        self.days.get(day)
    }

    pub fn hub_day(&self, hub: &str, day: usize) -> &[String] {
        self.days
            .get(day)
            .and_then(|hubs| hubs.get(hub))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_allocated(&self) -> usize {
        self.days
            .iter()
            .flat_map(|hubs| hubs.values())
            .map(Vec::len)
            .sum()
    }
}

impl Default for WeekPlan {
    fn default() -> Self {
        Self::empty()
    }
}
