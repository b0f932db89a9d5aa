mod engine;
mod schedule;

pub use engine::{BreakScheduler, SchedulerSnapshot, SchedulerState};
pub use schedule::{
    format_clock, Phase, SchedulerConfig, SchedulerSettings, DEFAULT_BREAKS_PER_LONG_BREAK,
    DEFAULT_LONG_BREAK_SECS, DEFAULT_SHORT_BREAK_SECS, DEFAULT_WORK_DURATION_SECS,
};
