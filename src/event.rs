use std::fmt;

use chrono::{DateTime, Local};

use crate::level::Level;

/// A single log event.
///
/// Built once per `log` call and shared by every destination the event is
/// delivered to, so the console and all sinks render the same timestamp.
/// The message arguments are kept unexpanded (`fmt::Arguments`) and rendered
/// once per destination.
#[derive(Clone, Copy)]
pub struct Event<'a> {
    /// The severity level of the event.
    pub level: Level,
    /// Source file of the call site, as produced by `file!()`.
    pub file: &'a str,
    /// Source line of the call site, as produced by `line!()`.
    pub line: u32,
    /// Local timestamp captured when the event was created.
    pub time: DateTime<Local>,
    /// The message, pre-bound to its format arguments.
    pub args: fmt::Arguments<'a>,
}

impl<'a> Event<'a> {
    /// Creates an event stamped with the current local time.
    #[must_use]
    pub fn new(level: Level, file: &'a str, line: u32, args: fmt::Arguments<'a>) -> Self {
        Self {
            level,
            file,
            line,
            time: Local::now(),
            args,
        }
    }
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("level", &self.level)
            .field("file", &self.file)
            .field("line", &self.line)
            .field("time", &self.time)
            .field("args", &format_args!("{}", self.args))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn new_stamps_current_time() {
        let before = Local::now();
        let ev = Event::new(Level::Info, "main.rs", 42, format_args!("hello"));
        let after = Local::now();

        assert!(ev.time >= before && ev.time <= after);
        assert_eq!(ev.level, Level::Info);
        assert_eq!(ev.file, "main.rs");
        assert_eq!(ev.line, 42);
        assert_eq!(format!("{}", ev.args), "hello");
    }
}
