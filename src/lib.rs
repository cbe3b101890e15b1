pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::PlannerConfig};
pub use core::{
    planner::VaccinationPlanner, schedule::DetailedSchedule, stats::AllocationReport,
};
pub use domain::model::WeekPlan;
pub use utils::error::{PlannerError, Result};
