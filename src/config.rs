use std::fs;
use std::path::Path;

use crate::format::TimeFormat;
use crate::level::Level;
use crate::sink::DEFAULT_CAPACITY;

/// Runtime logger configuration.
///
/// Every knob that the C-era logger fixed at compile time lives here with
/// the same defaults: log everything, local-time stamps, no color, source
/// locations on, ten sink slots.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Console threshold.
    pub level: Level,
    /// Suppress console output entirely.
    pub quiet: bool,
    /// Timestamp prefix mode for both console and sinks.
    pub time_format: TimeFormat,
    /// Colorize console output.
    pub color: bool,
    /// Include `file:line:` on the console.
    pub source_location: bool,
    /// Sink registry capacity.
    pub max_sinks: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            level: Level::Trace,
            quiet: false,
            time_format: TimeFormat::LocalTime,
            color: false,
            source_location: true,
            max_sinks: DEFAULT_CAPACITY,
        }
    }
}

impl Options {
    /// Loads options from a simple INI file.
    ///
    /// Recognized keys (top level or under a `[logging]` section): `level`,
    /// `quiet`, `color`, `time_format`, `source_location`, `max_sinks`.
    /// Lines are trimmed, `#` starts a comment, values may be double-quoted.
    /// Unknown keys and unrelated sections are ignored.
    ///
    /// # Errors
    /// Returns a message describing the first unreadable line or value.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Error reading file {}: {e}", path.display()))?;
        Self::parse(&content)
    }

    /// Parses options from INI-formatted text. See [`Options::load`].
    ///
    /// # Errors
    /// Returns a message describing the first unreadable value.
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut opts = Self::default();
        let mut in_logging_section = true;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                in_logging_section = name.eq_ignore_ascii_case("logging");
                continue;
            }

            if !in_logging_section {
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim();
                let value = line[pos + 1..].trim().trim_matches('"');
                opts.apply(key, value)?;
            }
        }
        Ok(opts)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                self.level = value.parse().map_err(|e| format!("level: {e}"))?;
            }
            "quiet" => self.quiet = parse_bool(key, value)?,
            "color" => self.color = parse_bool(key, value)?,
            "source_location" => self.source_location = parse_bool(key, value)?,
            "time_format" => {
                self.time_format = value.parse().map_err(|e| format!("time_format: {e}"))?;
            }
            "max_sinks" => {
                self.max_sinks = value
                    .parse()
                    .map_err(|e| format!("max_sinks: {value:?}: {e}"))?;
            }
            _ => {} // Unknown keys are not ours to reject.
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(format!("{key}: expected a boolean, got {value:?}")),
    }
}
