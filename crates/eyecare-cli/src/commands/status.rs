use eyecare_core::BreakScheduler;

use super::ConfigArgs;
use crate::output::{JsonLines, StatusLine};

pub fn run(args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    let scheduler = BreakScheduler::new(config.scheduler_config()?);
    JsonLines::stdout().write_line(&StatusLine::of(&scheduler))?;
    Ok(())
}
