use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use colored::Color;

use crate::event::Event;

/// How the timestamp prefix of a rendered line is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// No timestamp prefix.
    None,
    /// Raw epoch seconds.
    Epoch,
    /// Human-readable local time (`HH:MM:SS` on the console,
    /// `YYYY-MM-DD HH:MM:SS` in files).
    #[default]
    LocalTime,
}

/// Error returned when parsing an unrecognized time format name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeFormatError(pub String);

impl fmt::Display for ParseTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown time format: {:?}", self.0)
    }
}

impl std::error::Error for ParseTimeFormatError {}

impl FromStr for TimeFormat {
    type Err = ParseTimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "epoch" => Ok(Self::Epoch),
            "local" | "local_time" => Ok(Self::LocalTime),
            _ => Err(ParseTimeFormatError(s.to_string())),
        }
    }
}

/// Console-only rendering knobs. Sinks never colorize.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleStyle {
    /// Wrap the level name in its level color and dim the source location.
    pub color: bool,
    /// Emit the `file:line:` token.
    pub source_location: bool,
}

impl Default for ConsoleStyle {
    fn default() -> Self {
        Self {
            color: false,
            source_location: true,
        }
    }
}

/// Renders one event for a registered sink.
///
/// Implementations write the full line including the trailing newline; the
/// logger flushes the destination afterwards.
pub type FormatFn = fn(&Event<'_>, TimeFormat, &mut dyn Write) -> io::Result<()>;

const RESET: &str = "\x1b[0m";

fn write_time(ev: &Event<'_>, time_format: TimeFormat, pattern: &str, w: &mut dyn Write) -> io::Result<()> {
    match time_format {
        TimeFormat::None => Ok(()),
        TimeFormat::Epoch => write!(w, "{} ", ev.time.timestamp()),
        TimeFormat::LocalTime => write!(w, "{} ", ev.time.format(pattern)),
    }
}

/// Built-in console formatter.
///
/// Layout: `[time ]LEVEL file:line: message`, level name left-justified in a
/// 5-character field. Colors are applied after padding so the field width is
/// not distorted by escape sequences.
pub fn console_format(
    ev: &Event<'_>,
    time_format: TimeFormat,
    style: ConsoleStyle,
    w: &mut dyn Write,
) -> io::Result<()> {
    write_time(ev, time_format, "%H:%M:%S", w)?;

    if style.color {
        write!(
            w,
            "\x1b[{}m{:<5}{RESET} ",
            ev.level.color().to_fg_str(),
            ev.level.as_str()
        )?;
    } else {
        write!(w, "{:<5} ", ev.level.as_str())?;
    }

    if style.source_location {
        if style.color {
            write!(
                w,
                "\x1b[{}m{}:{}:{RESET} ",
                Color::BrightBlack.to_fg_str(),
                ev.file,
                ev.line
            )?;
        } else {
            write!(w, "{}:{}: ", ev.file, ev.line)?;
        }
    }

    writeln!(w, "{}", ev.args)
}

/// Built-in file formatter: like the console layout but never colored, with
/// the source location always present and a full-date timestamp.
pub fn file_format(ev: &Event<'_>, time_format: TimeFormat, w: &mut dyn Write) -> io::Result<()> {
    write_time(ev, time_format, "%Y-%m-%d %H:%M:%S", w)?;
    write!(w, "{:<5} {}:{}: ", ev.level.as_str(), ev.file, ev.line)?;
    writeln!(w, "{}", ev.args)
}
