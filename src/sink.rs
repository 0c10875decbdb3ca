use std::io::Write;

use crate::error::SinkError;
use crate::event::Event;
use crate::format::{FormatFn, TimeFormat};
use crate::level::Level;

/// Default number of sink slots, matching the logger's historical capacity.
pub const DEFAULT_CAPACITY: usize = 10;

/// A registered destination: a formatter, an owned writable stream and a
/// minimum severity. The logger never opens or closes the stream; the caller
/// hands over an already-open handle and the registry owns it from then on.
pub struct Sink {
    format: FormatFn,
    dest: Box<dyn Write + Send>,
    threshold: Level,
}

impl Sink {
    pub fn new(format: FormatFn, dest: Box<dyn Write + Send>, threshold: Level) -> Self {
        Self {
            format,
            dest,
            threshold,
        }
    }

    /// The sink's minimum severity.
    #[must_use]
    pub fn threshold(&self) -> Level {
        self.threshold
    }
}

/// Bounded, append-only collection of sinks.
///
/// Delivery happens in registration order. There is no removal; a sink lives
/// as long as the registry does.
pub struct SinkRegistry {
    sinks: Vec<Sink>,
    capacity: usize,
}

impl SinkRegistry {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            sinks: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a sink to the first free slot.
    ///
    /// # Errors
    /// Returns [`SinkError::RegistryFull`] when all slots are occupied; the
    /// registry is left unchanged.
    pub fn add(&mut self, sink: Sink) -> Result<(), SinkError> {
        if self.sinks.len() >= self.capacity {
            return Err(SinkError::RegistryFull {
                capacity: self.capacity,
            });
        }
        self.sinks.push(sink);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Writes `ev` to every sink whose threshold it meets, in registration
    /// order, flushing each destination afterwards. Write failures are not
    /// surfaced; a broken sink neither stops the fan-out nor poisons the
    /// registry.
    pub fn dispatch(&mut self, ev: &Event<'_>, time_format: TimeFormat) {
        for sink in &mut self.sinks {
            if ev.level.meets(sink.threshold) {
                let _ = (sink.format)(ev, time_format, &mut *sink.dest);
                let _ = sink.dest.flush();
            }
        }
    }
}
