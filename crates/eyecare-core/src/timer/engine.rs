//! Break scheduler implementation.
//!
//! The scheduler is a tick-driven state machine. It does not use internal
//! threads or read the wall clock - the caller is responsible for calling
//! `tick()` once per second, serially, from a single clock source.
//!
//! ## State Transitions
//!
//! ```text
//! Working -> (ShortBreak | LongBreak) -> Working -> ...
//! ```
//!
//! A phase changes only on natural expiry (a tick that finds zero seconds
//! left) or on `skip()`. `pause()`/`resume()` never change the phase.
//!
//! ## Usage
//!
//! ```ignore
//! let mut scheduler = BreakScheduler::with_observer(config, |e: &Event| render(e));
//! // From a one-second timer:
//! scheduler.tick();
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::schedule::{Phase, SchedulerConfig, SchedulerSettings};
use crate::error::ConfigError;
use crate::events::{Event, NoObserver, SchedulerObserver};

/// Mutable scheduler state. Owned by exactly one [`BreakScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerState {
    pub phase: Phase,
    pub remaining_seconds: u64,
    /// Breaks started so far; never decreases.
    pub break_count: u64,
    pub running: bool,
}

impl SchedulerState {
    /// Start of a session: working, full work period left, nothing counted.
    pub fn initial(config: &SchedulerConfig) -> Self {
        Self {
            phase: Phase::Working,
            remaining_seconds: config.work_duration_seconds(),
            break_count: 0,
            running: true,
        }
    }

    /// The state that follows this one when the current phase ends.
    ///
    /// Leaving `Working` counts a break and picks its kind by the escalation
    /// rule; leaving either break returns to a full work period. `running` is
    /// carried over unchanged.
    pub fn next(&self, config: &SchedulerConfig) -> Self {
        match self.phase {
            Phase::Working => {
                let break_count = self.break_count.saturating_add(1);
                let phase = config.break_kind(break_count);
                Self {
                    phase,
                    remaining_seconds: config.duration_for(phase),
                    break_count,
                    running: self.running,
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Self {
                phase: Phase::Working,
                remaining_seconds: config.work_duration_seconds(),
                break_count: self.break_count,
                running: self.running,
            },
        }
    }
}

/// Read-only view of the scheduler handed to hosts for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulerSnapshot {
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub running: bool,
    pub break_count: u64,
    /// Nominal length of the current phase, for progress bars.
    pub phase_duration_seconds: u64,
}

/// Core break scheduler.
///
/// Owns its [`SchedulerConfig`] and [`SchedulerState`]; observers are told
/// about every change synchronously, and each command also returns the event
/// it emitted.
#[derive(Debug, Clone)]
pub struct BreakScheduler<O = NoObserver> {
    config: SchedulerConfig,
    state: SchedulerState,
    observer: O,
}

impl BreakScheduler<NoObserver> {
    /// Create a scheduler with no observer; use the returned events instead.
    pub fn new(config: SchedulerConfig) -> Self {
        Self::with_observer(config, NoObserver)
    }
}

impl<O: SchedulerObserver> BreakScheduler<O> {
    /// Create a scheduler that reports every event to `observer`.
    ///
    /// Starts running in `Working` with the full work period left.
    pub fn with_observer(config: SchedulerConfig, observer: O) -> Self {
        Self {
            state: SchedulerState::initial(&config),
            config,
            observer,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.state.remaining_seconds
    }

    pub fn break_count(&self) -> u64 {
        self.state.break_count
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Nominal length of the current phase.
    pub fn phase_duration(&self) -> u64 {
        self.config.duration_for(self.state.phase)
    }

    /// 0.0 .. 1.0 elapsed fraction of the current phase.
    pub fn progress(&self) -> f64 {
        let total = self.phase_duration();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.state.remaining_seconds as f64 / total as f64)
    }

    pub fn snapshot(&self) -> SchedulerSnapshot {
        SchedulerSnapshot {
            phase: self.state.phase,
            remaining_seconds: self.state.remaining_seconds,
            running: self.state.running,
            break_count: self.state.break_count,
            phase_duration_seconds: self.phase_duration(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Advance one second.
    ///
    /// While running: counts down and emits `Tick`, or, once the countdown has
    /// already reached zero, moves to the next phase. Ticking while paused is a
    /// caller error; it changes nothing and emits a `StateSnapshot`.
    pub fn tick(&mut self) -> Event {
        if !self.state.running {
            warn!(phase = %self.state.phase, "tick received while paused; ignoring");
            let event = Event::StateSnapshot {
                snapshot: self.snapshot(),
                at: Utc::now(),
            };
            return self.emit(event);
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            let event = Event::Tick {
                remaining_seconds: self.state.remaining_seconds,
                at: Utc::now(),
            };
            return self.emit(event);
        }

        self.transition()
    }

    /// Stop counting down. Returns `None` if already paused.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.running {
            return None;
        }
        self.state.running = false;
        info!(
            phase = %self.state.phase,
            remaining = self.state.remaining_seconds,
            "scheduler paused"
        );
        Some(self.emit(Event::Paused { at: Utc::now() }))
    }

    /// Continue counting down. Returns `None` if already running.
    pub fn resume(&mut self) -> Option<Event> {
        if self.state.running {
            return None;
        }
        self.state.running = true;
        info!(
            phase = %self.state.phase,
            remaining = self.state.remaining_seconds,
            "scheduler resumed"
        );
        Some(self.emit(Event::Resumed { at: Utc::now() }))
    }

    /// End the current phase now, whatever is left on the clock.
    ///
    /// Allowed while paused; the scheduler stays paused afterwards.
    pub fn skip(&mut self) -> Event {
        info!(
            phase = %self.state.phase,
            remaining = self.state.remaining_seconds,
            "skipping current phase"
        );
        self.transition()
    }

    /// Validate `settings` and apply them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] and leaves config and state
    /// untouched if any duration is zero or `breaks_per_long_break < 1`.
    pub fn reconfigure(&mut self, settings: SchedulerSettings) -> Result<(), ConfigError> {
        match SchedulerConfig::try_from(settings) {
            Ok(config) => {
                self.apply_config(config);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "rejected scheduler reconfiguration");
                Err(e)
            }
        }
    }

    /// Replace the configuration, keeping progress through the current phase.
    ///
    /// If the current phase's nominal duration changes, the elapsed time is
    /// preserved: `remaining = new - (old - remaining)`, clamped to `[0, new]`.
    pub fn apply_config(&mut self, config: SchedulerConfig) {
        let phase = self.state.phase;
        let old_duration = self.config.duration_for(phase);
        let new_duration = config.duration_for(phase);

        if old_duration != new_duration {
            let elapsed = old_duration.saturating_sub(self.state.remaining_seconds);
            self.state.remaining_seconds = new_duration.saturating_sub(elapsed);
        }

        debug!(
            %phase,
            old_duration,
            new_duration,
            remaining = self.state.remaining_seconds,
            "scheduler reconfigured"
        );
        self.config = config;
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn transition(&mut self) -> Event {
        let from = self.state.phase;
        self.state = self.state.next(&self.config);
        debug!(
            %from,
            to = %self.state.phase,
            remaining = self.state.remaining_seconds,
            break_count = self.state.break_count,
            "phase transition"
        );

        let event = match self.state.phase {
            Phase::Working => Event::WorkStarted {
                remaining_seconds: self.state.remaining_seconds,
                at: Utc::now(),
            },
            phase @ (Phase::ShortBreak | Phase::LongBreak) => Event::BreakStarted {
                phase,
                remaining_seconds: self.state.remaining_seconds,
                break_count: self.state.break_count,
                at: Utc::now(),
            },
        };
        self.emit(event)
    }

    fn emit(&mut self, event: Event) -> Event {
        self.observer.on_event(&event);
        event
    }
}
