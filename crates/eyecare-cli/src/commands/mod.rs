pub mod config;
pub mod run;
pub mod simulate;
pub mod status;

use std::path::PathBuf;

use clap::Args;
use eyecare_core::{Config, ConfigError};

/// Where to read configuration from and what to override.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Config file (defaults to $EYECARE_CONFIG or ~/.config/eyecare/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Override a setting, e.g. --set scheduler.work_duration_seconds=1200
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

impl ConfigArgs {
    /// Load the file, then apply overrides in order.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        for assignment in &self.overrides {
            config.apply_override(assignment)?;
        }
        Ok(config)
    }
}
