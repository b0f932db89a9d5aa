//! JSON-lines output for events and status.

use std::io::Write;

use eyecare_core::{format_clock, BreakScheduler, Event, Phase, SchedulerObserver};
use serde::Serialize;

/// Observer that writes each event as one JSON line.
pub struct JsonLines<W: Write> {
    out: W,
}

impl JsonLines<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> JsonLines<W> {
    pub fn write_line<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> SchedulerObserver for JsonLines<W> {
    fn on_event(&mut self, event: &Event) {
        if let Err(e) = self.write_line(event) {
            tracing::warn!(error = %e, "failed to write event");
        }
    }
}

/// What `status` prints: the snapshot plus the rendered clock.
#[derive(Debug, Serialize)]
pub struct StatusLine {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub phase: Phase,
    pub label: &'static str,
    pub remaining_seconds: u64,
    pub clock: String,
    pub running: bool,
    pub break_count: u64,
    pub progress: f64,
}

impl StatusLine {
    pub fn of<O: SchedulerObserver>(scheduler: &BreakScheduler<O>) -> Self {
        let snap = scheduler.snapshot();
        Self {
            kind: "status",
            phase: snap.phase,
            label: snap.phase.label(),
            remaining_seconds: snap.remaining_seconds,
            clock: format_clock(snap.remaining_seconds),
            running: snap.running,
            break_count: snap.break_count,
            progress: scheduler.progress(),
        }
    }
}
