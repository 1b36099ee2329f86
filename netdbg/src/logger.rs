// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! [`log`] backend that writes records to a UDP console.

use crate::config::Config;
use crate::console::Console;
use crate::error::Error;
use crate::platform::Host;
use log::{LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const ENV_RUST_LOG: &str = "RUST_LOG";
/// Target used by this crate. Records with this target are never sent to the console.
const TARGET: &str = "netdbg";

const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// Initialize a console with `config` and install it as logger.
///
/// A valid level passed as `RUST_LOG` environment variable overrides `level`.
pub fn init(level: LevelFilter, config: &Config) -> Result<(), Error> {
    let logger = Logger::new(config)?;

    // Set the maximum log level the log subsystem will forward to this logger impl.
    log::set_max_level(level_from_env().unwrap_or(level));
    log::set_boxed_logger(Box::new(logger)).map_err(|_| Error::LoggerInstalled)
}

/// Logger sending one line per record.
#[derive(Debug)]
pub struct Logger {
    console: Console<Host>,
}

impl Logger {
    /// Create a new logger with its own console.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut console = Console::default();
        console.initialize_with(config)?;
        Ok(Self { console })
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let target = metadata.target();
        let own = target == TARGET
            || target
                .strip_prefix(TARGET)
                .is_some_and(|path| path.starts_with("::"));
        metadata.level() <= log::max_level() && !own
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Line {
            timestamp: OffsetDateTime::from(SystemTime::now()),
            tgid: std::process::id(),
            tid: thread_id(),
            record,
        };
        // Render before echoing. Arguments may log themselves and the console lock is
        // not reentrant.
        let line = line.to_string();
        let _ = self.console.echo_str(&line);
    }

    fn flush(&self) {}
}

/// Formatted log line: `03:04:05.678 (tgid tid) LEVEL target: message`
struct Line<'a> {
    timestamp: OffsetDateTime,
    tgid: u32,
    tid: u32,
    record: &'a Record<'a>,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.timestamp.format(TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        writeln!(
            f,
            "{timestamp} ({:x} {:x}) {:<5} {}: {}",
            self.tgid,
            self.tid,
            self.record.level(),
            self.record.target(),
            self.record.args()
        )
    }
}

fn thread_id() -> u32 {
    // Safety: gettid(2) says this never fails
    unsafe { libc::gettid() as u32 }
}

/// Try to parse the log level from the environment variable `RUST_LOG`.
fn level_from_env() -> Option<LevelFilter> {
    std::env::var(ENV_RUST_LOG).ok().and_then(|s| {
        LevelFilter::from_str(&s)
            .inspect_err(|_| eprintln!("Failed to parse log level from `RUST_LOG={s}`"))
            .ok()
    })
}
