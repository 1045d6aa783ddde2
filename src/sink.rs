// Copyright (C) 2022-2026 Michael Herstine <sp1ff@pobox.com>
//
// This file is part of syslog-formatter.
//
// syslog-formatter is free software: you can redistribute it and/or modify it under the terms of
// the GNU General Public License as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// syslog-formatter is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with syslog-formatter.
// If not, see <http://www.gnu.org/licenses/>.

//! Where finished syslog lines go.
//!
//! This module defines the [`Sink`] trait, along with two implementations: [`MemorySink`], which
//! simply collects lines, and [`WriterSink`], which writes each line, newline-terminated, to any
//! [`std::io::Write`] implementation (a file, `stderr`, a pipe to `logger(1)` & so forth).
//!
//! Sending lines to a daemon over the network is out of scope for this crate; wrap your socket in
//! a [`Sink`] implementation of your own.
//!
//! # Examples
//!
//! ```rust
//! use syslog_formatter::sink::{MemorySink, Sink};
//! let sink = MemorySink::default();
//! sink.send("<27>1 - - - - - - Hello, world!").unwrap();
//! assert_eq!(sink.lines().len(), 1);
//! ```

use crate::error::{Error, Result};

use backtrace::Backtrace;

use std::sync::{Arc, Mutex};

/// Operations all sinks must support.
pub trait Sink {
    /// Deliver one syslog line. `line` carries no trailing newline; framing, if any, is up to the
    /// implementation.
    fn send(&self, line: &str) -> Result<()>;
}

/// Collects lines in memory; clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }
    /// A copy of every line sent so far, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
    pub fn clear(&self) {
        match self.lines.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Sink for MemorySink {
    fn send(&self, line: &str) -> Result<()> {
        self.lines
            .lock()
            .map_err(|_| Error::Sink {
                source: "memory sink lock poisoned".into(),
                back: Backtrace::new(),
            })?
            .push(line.to_owned());
        Ok(())
    }
}

/// Writes each line, followed by a newline, to `W`.
pub struct WriterSink<W: std::io::Write> {
    writer: Mutex<W>,
}

impl<W: std::io::Write> WriterSink<W> {
    pub fn new(writer: W) -> WriterSink<W> {
        WriterSink {
            writer: Mutex::new(writer),
        }
    }
    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl WriterSink<std::io::Stderr> {
    pub fn stderr() -> WriterSink<std::io::Stderr> {
        WriterSink::new(std::io::stderr())
    }
}

impl<W: std::io::Write> Sink for WriterSink<W> {
    fn send(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock().map_err(|_| Error::Sink {
            source: "writer sink lock poisoned".into(),
            back: Backtrace::new(),
        })?;
        writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .and_then(|_| writer.flush())
            .map_err(|err| Error::Sink {
                source: Box::new(err),
                back: Backtrace::new(),
            })
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn memory_sink() {
        let sink = MemorySink::new();
        let other = sink.clone();
        sink.send("first").unwrap();
        other.send("second").unwrap();
        assert_eq!(sink.lines(), vec!["first".to_owned(), "second".to_owned()]);
        other.clear();
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn writer_sink() {
        let sink = WriterSink::new(Vec::<u8>::new());
        sink.send("<27>Jan  1 00:00:00 bree tag[123]: one").unwrap();
        sink.send("two").unwrap();
        assert_eq!(
            sink.into_inner(),
            b"<27>Jan  1 00:00:00 bree tag[123]: one\ntwo\n".to_vec()
        );
    }

    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_sink_failure() {
        let sink = WriterSink::new(Broken);
        let err = sink.send("lost").unwrap_err();
        assert!(format!("{}", err).starts_with("While sinking a syslog line"));
    }
}
