use crate::core::hours::MAX_DAILY_HOURS;
use crate::core::planner::{VaccinationPlanner, DEFAULT_PRIORITY_PERCENT};
use crate::domain::model::DAYS_PER_WEEK;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{
    validate_length, validate_non_empty_string, validate_path, validate_positive_number,
    validate_range, validate_strictly_increasing, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub planner: PlannerInfo,
    pub intervals: IntervalsConfig,
    pub schedule: ScheduleConfig,
    pub allocation: Option<AllocationConfig>,
    #[serde(default)]
    pub hubs: Vec<HubConfig>,
    pub input: InputConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerInfo {
    pub name: String,
    pub description: Option<String>,
    /// Year ages are computed against; the current year when absent.
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalsConfig {
    #[serde(default)]
    pub breaks: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub hours: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationConfig {
    pub priority_percent: Option<u32>,
}

/// A hub; staff counts are either all present or all absent (hub defined
/// but not yet staffed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    pub name: String,
    pub doctors: Option<u32>,
    pub nurses: Option<u32>,
    pub other: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub people: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub pretty: Option<bool>,
    pub detailed: Option<bool>,
}

impl HubConfig {
    fn staff(&self) -> Option<(u32, u32, u32)> {
        match (self.doctors, self.nurses, self.other) {
            (Some(d), Some(n), Some(o)) => Some((d, n, o)),
            _ => None,
        }
    }
}

impl PlannerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PEOPLE_FILE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| PlannerError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("planner.name", &self.planner.name)?;
        validate_strictly_increasing("intervals.breaks", &self.intervals.breaks)?;

        validate_length("schedule.hours", &self.schedule.hours, DAYS_PER_WEEK)?;
        for &hours in &self.schedule.hours {
            validate_range("schedule.hours", hours, 0, MAX_DAILY_HOURS)?;
        }

        if let Some(percent) = self.allocation.as_ref().and_then(|a| a.priority_percent) {
            validate_range("allocation.priority_percent", percent, 1, 100)?;
        }

        let mut names = HashSet::new();
        for hub in &self.hubs {
            validate_non_empty_string("hubs.name", &hub.name)?;
            if !names.insert(hub.name.as_str()) {
                return Err(PlannerError::InvalidConfigValueError {
                    field: "hubs.name".to_string(),
                    value: hub.name.clone(),
                    reason: "Duplicate hub name".to_string(),
                });
            }

            let given = [hub.doctors, hub.nurses, hub.other];
            if given.iter().any(Option::is_some) && hub.staff().is_none() {
                return Err(PlannerError::InvalidConfigValueError {
                    field: format!("hubs.{}", hub.name),
                    value: format!("{:?}", given),
                    reason: "doctors, nurses and other must be set together".to_string(),
                });
            }
            if let Some((doctors, nurses, other)) = hub.staff() {
                validate_positive_number("hubs.doctors", doctors, 1)?;
                validate_positive_number("hubs.nurses", nurses, 1)?;
                validate_positive_number("hubs.other", other, 1)?;
            }
        }

        validate_path("input.people", &self.input.people)?;
        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }

        Ok(())
    }

    pub fn people_path(&self) -> &str {
        &self.input.people
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn pretty_output(&self) -> bool {
        self.output.as_ref().and_then(|o| o.pretty).unwrap_or(true)
    }

    pub fn detailed_output(&self) -> bool {
        self.output.as_ref().and_then(|o| o.detailed).unwrap_or(false)
    }

    pub fn priority_percent(&self) -> u32 {
        self.allocation
            .as_ref()
            .and_then(|a| a.priority_percent)
            .unwrap_or(DEFAULT_PRIORITY_PERCENT)
    }

    /// A planner with intervals, hours, priority share and hubs applied.
    pub fn build_planner(&self) -> Result<VaccinationPlanner> {
        let mut planner = match self.planner.reference_year {
            Some(year) => VaccinationPlanner::with_reference_year(year),
            None => VaccinationPlanner::new(),
        };

        planner.define_intervals(&self.intervals.breaks)?;
        planner.set_hours(&self.schedule.hours)?;
        planner.set_priority_percent(self.priority_percent())?;

        for hub in &self.hubs {
            planner.define_hub(&hub.name)?;
            match hub.staff() {
                Some((doctors, nurses, other)) => {
                    planner.set_staff(&hub.name, doctors, nurses, other)?
                }
                None => tracing::warn!("⚠️ Hub {} has no staff and will get no seats", hub.name),
            }
        }

        tracing::info!(
            "🏥 Planner '{}' configured: {} hubs, intervals {:?}",
            self.planner.name,
            self.hubs.len(),
            planner.interval_labels()
        );
        Ok(planner)
    }
}

impl Validate for PlannerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
