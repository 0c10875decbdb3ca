use std::fmt;
use std::io::{self, Write};

use crate::config::Options;
use crate::error::SinkError;
use crate::event::Event;
use crate::format::{self, ConsoleStyle, FormatFn, TimeFormat};
use crate::level::Level;
use crate::sink::{Sink, SinkRegistry};

/// Caller-supplied mutual-exclusion hook.
///
/// Invoked with `true` before a `log` call touches any state and with
/// `false` after its last write. The logger only guarantees the calls are
/// symmetric; the hook itself implements the actual exclusion (e.g. by
/// locking a mutex it captured).
pub type LockFn = Box<dyn Fn(bool) + Send + Sync>;

/// Leveled logger fanning each event out to a console stream and to every
/// registered sink whose threshold it meets.
///
/// One `Logger` value replaces the C-era process-global state; construct it
/// once and pass it (or share it behind your own synchronization) wherever
/// logging happens. `log` is synchronous and flushes every destination
/// before returning.
///
/// # Examples
/// ```ignore
/// let mut logger = Logger::new();
/// logger.set_level(Level::Warn);
/// info!(logger, "dropped");          // below threshold
/// warn!(logger, "kept: {}", reason); // rendered to stderr
/// ```
pub struct Logger {
    console: Box<dyn Write + Send>,
    level: Level,
    quiet: bool,
    style: ConsoleStyle,
    time_format: TimeFormat,
    lock: Option<LockFn>,
    sinks: SinkRegistry,
}

impl Logger {
    /// Creates a logger with default [`Options`], writing to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Creates a logger from explicit options, writing to stderr.
    #[must_use]
    pub fn with_options(opts: Options) -> Self {
        Self::with_console(Box::new(io::stderr()), opts)
    }

    /// Creates a logger writing its console output to `console` instead of
    /// stderr. The logger owns the stream but never closes it explicitly.
    #[must_use]
    pub fn with_console(console: Box<dyn Write + Send>, opts: Options) -> Self {
        Self {
            console,
            level: opts.level,
            quiet: opts.quiet,
            style: ConsoleStyle {
                color: opts.color,
                source_location: opts.source_location,
            },
            time_format: opts.time_format,
            lock: None,
            sinks: SinkRegistry::new(opts.max_sinks),
        }
    }

    /// Sets the console threshold. Events must be at least this severe to
    /// reach the console; registered sinks keep their own thresholds.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// The current console threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Suppresses (or restores) console output. Sinks are unaffected.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    /// Toggles console colors.
    pub fn set_color(&mut self, color: bool) {
        self.style.color = color;
    }

    /// Toggles the console `file:line:` token.
    pub fn set_source_location(&mut self, on: bool) {
        self.style.source_location = on;
    }

    /// Selects the timestamp prefix mode for all destinations.
    pub fn set_time_format(&mut self, time_format: TimeFormat) {
        self.time_format = time_format;
    }

    /// Installs a lock hook, or removes the current one with `None`.
    pub fn set_lock(&mut self, lock: Option<LockFn>) {
        self.lock = lock;
    }

    /// Registers a sink with its own formatter and threshold.
    ///
    /// `dest` must already be open and writable; the caller keeps
    /// responsibility for its lifecycle beyond the logger's writes.
    ///
    /// # Errors
    /// Returns [`SinkError::RegistryFull`] when the registry has no free
    /// slot, leaving the existing sinks untouched.
    pub fn add_sink<W>(&mut self, fmt_fn: FormatFn, dest: W, level: Level) -> Result<(), SinkError>
    where
        W: Write + Send + 'static,
    {
        self.sinks.add(Sink::new(fmt_fn, Box::new(dest), level))
    }

    /// Registers a sink using the built-in file formatter.
    ///
    /// # Errors
    /// Returns [`SinkError::RegistryFull`] when the registry has no free slot.
    pub fn add_file_sink<W>(&mut self, dest: W, level: Level) -> Result<(), SinkError>
    where
        W: Write + Send + 'static,
    {
        self.add_sink(format::file_format, dest, level)
    }

    /// Number of registered sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// The core operation: delivers one event to the console (unless quiet
    /// or below threshold) and to every eligible sink, in registration
    /// order, flushing each destination. The whole fan-out runs inside a
    /// single acquire/release of the lock hook. Write failures are ignored.
    ///
    /// Usually invoked through the level macros, which supply `file!()` and
    /// `line!()`.
    pub fn log(&mut self, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        self.hold_lock(true);

        let ev = Event::new(level, file, line, args);

        if !self.quiet && level.meets(self.level) {
            let _ = format::console_format(&ev, self.time_format, self.style, &mut *self.console);
            let _ = self.console.flush();
        }

        self.sinks.dispatch(&ev, self.time_format);

        self.hold_lock(false);
    }

    fn hold_lock(&self, acquire: bool) {
        if let Some(hook) = &self.lock {
            hook(acquire);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("quiet", &self.quiet)
            .field("style", &self.style)
            .field("time_format", &self.time_format)
            .field("locked", &self.lock.is_some())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
