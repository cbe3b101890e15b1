pub mod allocation;
pub mod hours;
pub mod hub;
pub mod loader;
pub mod partition;
pub mod planner;
pub mod registry;
pub mod schedule;
pub mod stats;

pub use crate::domain::model::{AgeInterval, Person, Staffing, WeekPlan};
pub use crate::domain::ports::{LoadErrorSink, Storage};
pub use crate::utils::error::Result;
