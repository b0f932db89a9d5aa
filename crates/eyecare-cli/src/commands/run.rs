use std::time::Duration;

use clap::Args;
use eyecare_core::{BreakScheduler, SchedulerObserver};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use super::ConfigArgs;
use crate::output::{JsonLines, StatusLine};

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    /// Stop after this many clock ticks
    #[arg(long, value_name = "N")]
    pub max_ticks: Option<u64>,
}

/// A line of input on stdin while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Pause,
    Resume,
    Skip,
    Status,
    Quit,
}

impl HostCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "pause" | "p" => Some(Self::Pause),
            "resume" | "r" => Some(Self::Resume),
            "skip" | "s" => Some(Self::Skip),
            "status" | "?" => Some(Self::Status),
            "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Apply one stdin command. Returns `false` when the loop should stop.
fn handle_command<O: SchedulerObserver>(
    scheduler: &mut BreakScheduler<O>,
    command: HostCommand,
    out: &mut JsonLines<std::io::Stdout>,
) -> std::io::Result<bool> {
    match command {
        HostCommand::Pause => {
            scheduler.pause();
        }
        HostCommand::Resume => {
            scheduler.resume();
        }
        HostCommand::Skip => {
            scheduler.skip();
        }
        HostCommand::Status => out.write_line(&StatusLine::of(scheduler))?,
        HostCommand::Quit => return Ok(false),
    }
    Ok(true)
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config.resolve()?;
    let scheduler_config = config.scheduler_config()?;
    let interval = Duration::from_millis(config.host.tick_interval_ms);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async move {
        let mut scheduler = BreakScheduler::with_observer(scheduler_config, JsonLines::stdout());
        let mut status_out = JsonLines::stdout();
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; a full interval should pass first.
        ticker.tick().await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;
        let mut ticks: u64 = 0;

        tracing::info!(
            interval_ms = config.host.tick_interval_ms,
            work = scheduler.config().work_duration_seconds(),
            "scheduler running"
        );
        status_out.write_line(&StatusLine::of(&scheduler))?;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Never tick a paused scheduler; the clock just idles.
                    if scheduler.is_running() {
                        scheduler.tick();
                    }
                    ticks += 1;
                    if args.max_ticks.is_some_and(|max| ticks >= max) {
                        break;
                    }
                }
                line = lines.next_line(), if stdin_open => {
                    match line? {
                        Some(line) if line.trim().is_empty() => {}
                        Some(line) => match HostCommand::parse(&line) {
                            Some(command) => {
                                if !handle_command(&mut scheduler, command, &mut status_out)? {
                                    break;
                                }
                            }
                            None => tracing::warn!(input = %line.trim(), "unknown command"),
                        },
                        None => {
                            tracing::debug!("stdin closed, running on the clock only");
                            stdin_open = false;
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("interrupted");
                    break;
                }
            }
        }

        status_out.write_line(&StatusLine::of(&scheduler))?;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
