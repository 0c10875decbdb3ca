//! End-to-end scenario: a console threshold, a stricter file sink, and the
//! three delivery outcomes (neither, console only, both).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use fanlog::{Level, Logger, Options, TimeFormat};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn console_at_warn_file_sink_at_error() {
    let console = SharedBuf::default();
    let opts = Options {
        level: Level::Warn,
        time_format: TimeFormat::LocalTime,
        ..Options::default()
    };
    let mut logger = Logger::with_console(Box::new(console.clone()), opts);

    let tmp = tempfile::NamedTempFile::new().unwrap();
    let handle = tmp.reopen().unwrap();
    logger.add_file_sink(handle, Level::Error).unwrap();

    fanlog::info!(logger, "just progress");
    let file_lines = || fs::read_to_string(tmp.path()).unwrap();
    assert_eq!(console.contents(), "");
    assert_eq!(file_lines(), "");

    fanlog::warn!(logger, "getting suspicious");
    let console_so_far = console.contents();
    assert!(console_so_far.contains("WARN"));
    assert!(console_so_far.contains("getting suspicious"));
    assert_eq!(file_lines(), "");

    fanlog::error!(logger, "it broke");
    let console_out = console.contents();
    assert!(console_out.contains("ERROR"));
    assert!(console_out.contains("it broke"));

    let file_out = file_lines();
    assert!(file_out.contains("ERROR"));
    assert!(file_out.contains("it broke"));
    assert!(!file_out.contains("getting suspicious"));

    // File lines carry the full-date local timestamp and the call site.
    let line = file_out.lines().next().unwrap();
    assert_eq!(&line[4..5], "-");
    assert!(line.contains("fanout.rs"));
}

#[test]
fn two_sinks_receive_in_registration_order_with_independent_thresholds() {
    let console = SharedBuf::default();
    let opts = Options {
        quiet: true,
        time_format: TimeFormat::None,
        ..Options::default()
    };
    let mut logger = Logger::with_console(Box::new(console.clone()), opts);

    let verbose = SharedBuf::default();
    let strict = SharedBuf::default();
    logger.add_file_sink(verbose.clone(), Level::Debug).unwrap();
    logger.add_file_sink(strict.clone(), Level::Warn).unwrap();

    fanlog::trace!(logger, "too fine for anyone");
    fanlog::debug!(logger, "fine-grained");
    fanlog::error!(logger, "bad");

    // Quiet console stayed silent for all three.
    assert_eq!(console.contents(), "");

    let verbose_out = verbose.contents();
    assert!(!verbose_out.contains("too fine"));
    assert!(verbose_out.contains("fine-grained"));
    assert!(verbose_out.contains("bad"));

    let strict_out = strict.contents();
    assert_eq!(strict_out.matches('\n').count(), 1);
    assert!(strict_out.contains("bad"));
}

#[test]
fn options_loaded_from_ini_configure_the_logger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");
    fs::write(
        &path,
        "[logging]\nlevel = error\ntime_format = none\nsource_location = false\n",
    )
    .unwrap();

    let opts = Options::load(&path).unwrap();
    let console = SharedBuf::default();
    let mut logger = Logger::with_console(Box::new(console.clone()), opts);

    fanlog::warn!(logger, "below the configured threshold");
    fanlog::error!(logger, "over it");

    assert_eq!(console.contents(), "ERROR over it\n");
}
