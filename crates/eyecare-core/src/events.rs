use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Phase, SchedulerSnapshot};

/// Every state change in the scheduler produces an Event.
/// Observers receive them synchronously inside the call that caused them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// One second of the current phase elapsed.
    Tick {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    WorkStarted {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    /// A break began; `phase` is `short_break` or `long_break`.
    BreakStarted {
        phase: Phase,
        remaining_seconds: u64,
        break_count: u64,
        at: DateTime<Utc>,
    },
    Paused {
        at: DateTime<Utc>,
    },
    Resumed {
        at: DateTime<Utc>,
    },
    /// Current state, emitted for ticks that arrive while paused.
    StateSnapshot {
        #[serde(flatten)]
        snapshot: SchedulerSnapshot,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::Tick { at, .. }
            | Event::WorkStarted { at, .. }
            | Event::BreakStarted { at, .. }
            | Event::Paused { at }
            | Event::Resumed { at }
            | Event::StateSnapshot { at, .. } => *at,
        }
    }

    /// True for the events that move the scheduler into a new phase.
    pub fn is_phase_change(&self) -> bool {
        matches!(self, Event::WorkStarted { .. } | Event::BreakStarted { .. })
    }
}

/// Receiver of scheduler notifications.
///
/// Implemented for any `FnMut(&Event)` closure, so hosts can subscribe with a
/// plain callback.
pub trait SchedulerObserver {
    fn on_event(&mut self, event: &Event);
}

impl<F> SchedulerObserver for F
where
    F: FnMut(&Event),
{
    fn on_event(&mut self, event: &Event) {
        self(event)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl SchedulerObserver for NoObserver {
    fn on_event(&mut self, _event: &Event) {}
}

/// Observer that records every event it sees.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn phase_changes(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_phase_change())
    }
}

impl SchedulerObserver for EventLog {
    fn on_event(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
