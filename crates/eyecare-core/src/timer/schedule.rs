use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default work period: 30 minutes.
pub const DEFAULT_WORK_DURATION_SECS: u64 = 30 * 60;
/// Default short break: 20 seconds of looking away from the screen.
pub const DEFAULT_SHORT_BREAK_SECS: u64 = 20;
/// Default long break: 5 minutes.
pub const DEFAULT_LONG_BREAK_SECS: u64 = 5 * 60;
/// Every 4th break is a long one by default.
pub const DEFAULT_BREAKS_PER_LONG_BREAK: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Working,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn is_break(self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }

    /// Status text for the host's status line.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Working => "working",
            Phase::ShortBreak => "short break",
            Phase::LongBreak => "long break",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated durations and escalation interval for a [`BreakScheduler`].
///
/// Fields are private so a value of this type is always well-formed: every
/// duration is positive and `breaks_per_long_break >= 1`.
///
/// [`BreakScheduler`]: super::BreakScheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchedulerConfig {
    work_duration_seconds: u64,
    short_break_seconds: u64,
    long_break_seconds: u64,
    breaks_per_long_break: u32,
}

impl SchedulerConfig {
    /// Build a config, rejecting zero durations and a zero break interval.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] naming the first offending field.
    pub fn new(
        work_duration_seconds: u64,
        short_break_seconds: u64,
        long_break_seconds: u64,
        breaks_per_long_break: u32,
    ) -> Result<Self, ConfigError> {
        if work_duration_seconds == 0 {
            return Err(ConfigError::invalid(
                "work_duration_seconds",
                "must be greater than zero",
            ));
        }
        if short_break_seconds == 0 {
            return Err(ConfigError::invalid(
                "short_break_seconds",
                "must be greater than zero",
            ));
        }
        if long_break_seconds == 0 {
            return Err(ConfigError::invalid(
                "long_break_seconds",
                "must be greater than zero",
            ));
        }
        if breaks_per_long_break < 1 {
            return Err(ConfigError::invalid(
                "breaks_per_long_break",
                "must be at least 1",
            ));
        }
        Ok(Self {
            work_duration_seconds,
            short_break_seconds,
            long_break_seconds,
            breaks_per_long_break,
        })
    }

    pub fn work_duration_seconds(&self) -> u64 {
        self.work_duration_seconds
    }

    pub fn short_break_seconds(&self) -> u64 {
        self.short_break_seconds
    }

    pub fn long_break_seconds(&self) -> u64 {
        self.long_break_seconds
    }

    pub fn breaks_per_long_break(&self) -> u32 {
        self.breaks_per_long_break
    }

    /// Nominal length of `phase` in seconds.
    pub fn duration_for(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Working => self.work_duration_seconds,
            Phase::ShortBreak => self.short_break_seconds,
            Phase::LongBreak => self.long_break_seconds,
        }
    }

    /// Which break the `break_number`-th break (1-based, already counted) is.
    pub fn break_kind(&self, break_number: u64) -> Phase {
        if break_number % u64::from(self.breaks_per_long_break) == 0 {
            Phase::LongBreak
        } else {
            Phase::ShortBreak
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            work_duration_seconds: DEFAULT_WORK_DURATION_SECS,
            short_break_seconds: DEFAULT_SHORT_BREAK_SECS,
            long_break_seconds: DEFAULT_LONG_BREAK_SECS,
            breaks_per_long_break: DEFAULT_BREAKS_PER_LONG_BREAK,
        }
    }
}

/// Unvalidated scheduler settings, as read from a config file or a settings
/// dialog. Convert with `SchedulerConfig::try_from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerSettings {
    #[serde(default = "default_work_duration")]
    pub work_duration_seconds: u64,
    #[serde(default = "default_short_break")]
    pub short_break_seconds: u64,
    #[serde(default = "default_long_break")]
    pub long_break_seconds: u64,
    #[serde(default = "default_breaks_per_long_break")]
    pub breaks_per_long_break: u32,
}

fn default_work_duration() -> u64 {
    DEFAULT_WORK_DURATION_SECS
}
fn default_short_break() -> u64 {
    DEFAULT_SHORT_BREAK_SECS
}
fn default_long_break() -> u64 {
    DEFAULT_LONG_BREAK_SECS
}
fn default_breaks_per_long_break() -> u32 {
    DEFAULT_BREAKS_PER_LONG_BREAK
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        SchedulerConfig::default().into()
    }
}

impl TryFrom<SchedulerSettings> for SchedulerConfig {
    type Error = ConfigError;

    fn try_from(s: SchedulerSettings) -> Result<Self, Self::Error> {
        SchedulerConfig::new(
            s.work_duration_seconds,
            s.short_break_seconds,
            s.long_break_seconds,
            s.breaks_per_long_break,
        )
    }
}

impl From<SchedulerConfig> for SchedulerSettings {
    fn from(c: SchedulerConfig) -> Self {
        Self {
            work_duration_seconds: c.work_duration_seconds,
            short_break_seconds: c.short_break_seconds,
            long_break_seconds: c.long_break_seconds,
            breaks_per_long_break: c.breaks_per_long_break,
        }
    }
}

/// Render a countdown as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_clock(seconds: u64) -> String {
    let (mins, secs) = (seconds / 60, seconds % 60);
    format!("{mins:02}:{secs:02}")
}
