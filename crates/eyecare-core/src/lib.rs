//! # Eyecare Core Library
//!
//! This library provides the timing core of the eyecare break reminder. It
//! tracks work time, decides when a break is due and whether it is a short or
//! a long one, and tells its host about every change. Rendering the countdown
//! and showing or dismissing the break overlay is entirely up to the host.
//!
//! ## Architecture
//!
//! - **Break Scheduler**: A tick-driven state machine that requires the caller
//!   to invoke `tick()` once per second
//! - **Events**: Semantic notifications delivered synchronously to an observer
//! - **Storage**: Read-only TOML configuration
//!
//! ## Key Components
//!
//! - [`BreakScheduler`]: Core work/break state machine
//! - [`SchedulerConfig`]: Validated durations and long-break interval
//! - [`Event`] / [`SchedulerObserver`]: Outbound notifications
//! - [`Config`]: Application configuration

pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use error::ConfigError;
pub use events::{Event, EventLog, NoObserver, SchedulerObserver};
pub use storage::{Config, HostConfig};
pub use timer::{
    format_clock, BreakScheduler, Phase, SchedulerConfig, SchedulerSettings, SchedulerSnapshot,
    SchedulerState,
};
