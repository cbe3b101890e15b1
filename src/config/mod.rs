pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vax-planner")]
#[command(about = "Weekly vaccination hub allocation planner")]
pub struct CliConfig {
    /// Path to the TOML planner configuration
    #[arg(short, long, default_value = "planner.toml")]
    pub config: String,

    /// People CSV, overrides `input.people` from the configuration
    #[arg(long)]
    pub people: Option<String>,

    /// Output JSON file, overrides `output.path`; stdout when neither is set
    #[arg(short, long)]
    pub output: Option<String>,

    /// Include the time-slot schedule in the output
    #[arg(long)]
    pub detailed: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        if let Some(people) = &self.people {
            validate_path("people", people)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}
