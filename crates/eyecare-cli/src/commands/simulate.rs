use clap::Args;
use eyecare_core::BreakScheduler;

use super::ConfigArgs;
use crate::output::{JsonLines, StatusLine};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    /// Number of one-second ticks to drive
    #[arg(long, value_name = "N")]
    pub ticks: u64,
    /// Skip the current phase right after this tick (repeatable)
    #[arg(long = "skip-at", value_name = "TICK")]
    pub skip_at: Vec<u64>,
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config.resolve()?;
    let mut scheduler = BreakScheduler::with_observer(config.scheduler_config()?, JsonLines::stdout());

    for tick in 1..=args.ticks {
        scheduler.tick();
        if args.skip_at.contains(&tick) {
            scheduler.skip();
        }
    }

    tracing::debug!(
        ticks = args.ticks,
        breaks = scheduler.break_count(),
        "simulation finished"
    );
    JsonLines::stdout().write_line(&StatusLine::of(&scheduler))?;
    Ok(())
}
