use crate::core::hours::{WeeklyHours, MAX_DAILY_HOURS};
use crate::domain::model::Staffing;
use crate::utils::error::{PlannerError, Result};

/// A vaccination site. Capacity is undefined until staff is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Hub {
    name: String,
    staffing: Option<Staffing>,
}

impl Hub {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            staffing: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn staffing(&self) -> Option<Staffing> {
        self.staffing
    }

    pub fn set_staff(&mut self, doctors: u32, nurses: u32, other: u32) -> Result<()> {
        if doctors == 0 || nurses == 0 || other == 0 {
            return Err(PlannerError::config(format!(
                "Staff of hub '{}' must be greater than 0 (doctors={}, nurses={}, other={})",
                self.name, doctors, nurses, other
            )));
        }
        let staffing = Staffing {
            doctors,
            nurses,
            other,
        };
        // a full day of seats must still be representable
        let daily_max = staffing.hourly_capacity() * u64::from(MAX_DAILY_HOURS);
        if daily_max > u64::from(u32::MAX) {
            return Err(PlannerError::config(format!(
                "Staff of hub '{}' gives a capacity of {} per hour, which is too large",
                self.name,
                staffing.hourly_capacity()
            )));
        }
        self.staffing = Some(staffing);
        Ok(())
    }

    pub fn hourly_capacity(&self) -> Result<u32> {
        let staffing = self
            .staffing
            .ok_or_else(|| PlannerError::NotConfiguredError {
                hub: self.name.clone(),
            })?;
        u32::try_from(staffing.hourly_capacity()).map_err(|_| {
            PlannerError::config(format!("Capacity of hub '{}' is out of range", self.name))
        })
    }

    /// Seats on a day with `hours` working hours.
    pub fn seats(&self, hours: u32) -> Result<u32> {
        self.hourly_capacity()?.checked_mul(hours).ok_or_else(|| {
            PlannerError::config(format!(
                "Seats of hub '{}' over {} hours are out of range",
                self.name, hours
            ))
        })
    }

    /// Seats for each day of the week.
    pub fn availability(&self, hours: &WeeklyHours) -> Result<Vec<u32>> {
        hours.iter().map(|h| self.seats(h)).collect()
    }
}
