//! fanlog is a tiny leveled logging library.
//!
//! One [`Logger`] value dispatches each message to a console stream
//! (stderr by default) and to a bounded registry of sinks, each with its own
//! minimum severity. Delivery is synchronous, in registration order, flushed
//! per event. Thread safety is delegated to an optional caller-supplied
//! lock hook.
//!
//! The crate is structured into small modules, each responsible for one
//! piece of the pipeline.

/// Runtime options and the INI config loader.
pub mod config;
/// The registry-full error.
pub mod error;
/// The per-call log event.
pub mod event;
/// Timestamp modes and the built-in formatters.
pub mod format;
/// Severity levels and their display names.
pub mod level;
/// The logger itself: configuration surface and the fan-out.
pub mod logger;
/// Leveled, feature-gated logging macros.
pub mod macros;
/// Sinks and the bounded sink registry.
pub mod sink;

pub use config::Options;
pub use error::SinkError;
pub use event::Event;
pub use format::{
    ConsoleStyle, FormatFn, ParseTimeFormatError, TimeFormat, console_format, file_format,
};
pub use level::{Level, ParseLevelError};
pub use logger::{LockFn, Logger};
pub use sink::{DEFAULT_CAPACITY, Sink, SinkRegistry};
