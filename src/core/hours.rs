use crate::domain::model::DAYS_PER_WEEK;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_length, validate_range};
use serde::{Deserialize, Serialize};

pub const MAX_DAILY_HOURS: u32 = 12;
pub const FIRST_SLOT_HOUR: u32 = 9;
pub const SLOT_MINUTES: u32 = 15;
pub const SLOTS_PER_HOUR: u32 = 60 / SLOT_MINUTES;

/// Working hours for each day of the week, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours([u32; DAYS_PER_WEEK]);

impl WeeklyHours {
    pub fn new(hours: &[u32]) -> Result<Self> {
        validate_length("hours", hours, DAYS_PER_WEEK)
            .map_err(|e| PlannerError::config(e.to_string()))?;

        let mut days = [0; DAYS_PER_WEEK];
        for (slot, &h) in days.iter_mut().zip(hours) {
            validate_range("hours", h, 0, MAX_DAILY_HOURS)
                .map_err(|e| PlannerError::config(e.to_string()))?;
            *slot = h;
        }
        Ok(Self(days))
    }

    pub fn get(&self, day: usize) -> Option<u32> {
        self.0.get(day).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Slot labels of one day: `4 * hours` entries from 09:00, 15 minutes apart.
    pub fn slots_for(&self, day: usize) -> Vec<String> {
        let hours = self.get(day).unwrap_or(0);
        (0..hours * SLOTS_PER_HOUR).map(slot_label).collect()
    }

    pub fn time_slots(&self) -> Vec<Vec<String>> {
        (0..DAYS_PER_WEEK).map(|day| self.slots_for(day)).collect()
    }
}

/// Label of the `index`-th slot of a day, e.g. `"10:45"`.
pub fn slot_label(index: u32) -> String {
    format!(
        "{:02}:{:02}",
        FIRST_SLOT_HOUR + index / SLOTS_PER_HOUR,
        SLOT_MINUTES * (index % SLOTS_PER_HOUR)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_seven_values() {
        assert!(WeeklyHours::new(&[4, 4, 4, 4, 4, 4]).is_err());
        assert!(WeeklyHours::new(&[4; 8]).is_err());
        assert!(WeeklyHours::new(&[4; 7]).is_ok());
    }

    #[test]
    fn test_hours_range() {
        assert!(WeeklyHours::new(&[12, 0, 0, 0, 0, 0, 0]).is_ok());
        let err = WeeklyHours::new(&[13, 0, 0, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, PlannerError::ConfigError { .. }));
    }

    #[test]
    fn test_time_slots() {
        let hours = WeeklyHours::new(&[1, 2, 0, 0, 0, 0, 3]).unwrap();
        let slots = hours.time_slots();

        assert_eq!(slots.len(), 7);
        assert_eq!(slots[0], vec!["09:00", "09:15", "09:30", "09:45"]);
        assert_eq!(slots[1].len(), 8);
        assert_eq!(slots[1][4], "10:00");
        assert!(slots[2].is_empty());
        assert_eq!(slots[6].last().unwrap(), "11:45");
    }

    #[test]
    fn test_default_is_closed_all_week() {
        let hours = WeeklyHours::default();
        assert!(hours.iter().all(|h| h == 0));
        assert!(hours.time_slots().iter().all(Vec::is_empty));
        assert_eq!(hours.get(7), None);
    }
}
