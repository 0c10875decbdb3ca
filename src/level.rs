use std::fmt;
use std::str::FromStr;

use colored::Color;

/// Defines the severity levels for log messages.
///
/// Discriminants are fixed (most severe first) and must not be reordered:
/// consumers rely on `Fatal=0` through `Trace=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Designates unrecoverable errors after which the application aborts.
    Fatal = 0,
    /// Designates error events that might still allow the application to continue running.
    Error = 1,
    /// Designates potentially harmful situations.
    Warn = 2,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    Info = 3,
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug = 4,
    /// Designates very fine-grained informational events.
    Trace = 5,
}

impl Level {
    /// All levels, in severity order.
    pub const ALL: [Self; 6] = [
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// The fixed display name, e.g. `"WARN"` for [`Level::Warn`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Terminal color used for this level's name when color output is on.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Fatal => Color::Magenta,
            Self::Error => Color::Red,
            Self::Warn => Color::Yellow,
            Self::Info => Color::Green,
            Self::Debug => Color::Cyan,
            Self::Trace => Color::BrightBlue,
        }
    }

    /// Returns `true` if a message at this level clears `threshold`,
    /// i.e. is at least as severe as it.
    #[must_use]
    pub const fn meets(self, threshold: Self) -> bool {
        self as u8 <= threshold as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(pub String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {:?}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level by its display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FATAL" => Ok(Self::Fatal),
            "ERROR" => Ok(Self::Error),
            "WARN" => Ok(Self::Warn),
            "INFO" => Ok(Self::Info),
            "DEBUG" => Ok(Self::Debug),
            "TRACE" => Ok(Self::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn names_match_discriminants() {
        let expected = ["FATAL", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"];
        for (i, lvl) in Level::ALL.iter().enumerate() {
            assert_eq!(*lvl as u8, i as u8);
            assert_eq!(lvl.as_str(), expected[i]);
        }
    }

    #[test]
    fn severity_filtering_direction() {
        // An ERROR threshold admits FATAL and ERROR, nothing less severe.
        assert!(Level::Fatal.meets(Level::Error));
        assert!(Level::Error.meets(Level::Error));
        assert!(!Level::Warn.meets(Level::Error));
        assert!(!Level::Trace.meets(Level::Error));
        // A TRACE threshold admits everything.
        for lvl in Level::ALL {
            assert!(lvl.meets(Level::Trace));
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("TRACE".parse::<Level>().unwrap(), Level::Trace);
        assert_eq!("Fatal".parse::<Level>().unwrap(), Level::Fatal);
        assert!("verbose".parse::<Level>().is_err());
    }
}
