use clap::Subcommand;
use eyecare_core::storage::config_path;

use super::ConfigArgs;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "scheduler.work_duration_seconds")
        key: String,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the resolved configuration as TOML
    List {
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Check the configuration and report the first problem
    Validate {
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the default config file location
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key, config } => {
            let config = config.resolve()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::List { config } => {
            let config = config.resolve()?;
            print!("{}", config.to_toml_string()?);
        }
        ConfigAction::Validate { config } => {
            let config = config.resolve()?;
            config.validate()?;
            println!("ok");
        }
        ConfigAction::Path => {
            println!("{}", config_path()?.display());
        }
    }
    Ok(())
}
