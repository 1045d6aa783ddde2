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

//! RFC 3164-compliant syslog message formatting
//! ============================================
//!
//! # Introduction
//!
//! [`Rfc3164`] is a [`SyslogFormatter`] that produces syslog messages according to RFC [3164] (AKA
//! the BSD syslog protocol). The protocol is descriptive rather than prescriptive in that it
//! attempted to describe what was already present in the wild, rather than describe something new.
//!
//! [3164]: https://datatracker.ietf.org/doc/html/rfc3164
//!
//! Although older than RFC [5424] it is still useful because [rsyslog], when configured to listen
//! on a Unix Domain socket (i.e. `/dev/log`) will [use] the so-called "special parser" to handle
//! incoming messages, which does not support RFC 5424.
//!
//! [5424]: https://datatracker.ietf.org/doc/html/rfc5424
//! [rsyslog]: https://www.rsyslog.com/
//! [use]: https://unix.stackexchange.com/questions/622801/does-linuxs-rsyslog-support-rfc-5424
//!
//! # Lifecycle
//!
//! An [`Rfc3164Builder`] collects the raw header fields; [`Rfc3164Builder::build`] normalizes
//! them (filling in defaults & truncating), after which the formatter may render any number of
//! lines with [`SyslogFormatter::format`], or exactly one with [`Rfc3164::into_line`].

use crate::{
    facility::{Facility, Level},
    formatter::SyslogFormatter,
    header::{Hostname, Tag},
    priority::Priority,
    process::ProcessInfo,
    timestamp::{Precision, Timestamp},
};

use chrono::prelude::*;

/// A syslog formatter that produces RFC [3164]-conformant syslog messages:
///
/// ```text
/// <PRI>TIMESTAMP HOSTNAME TAG[PID]: CONTENT
/// ```
///
/// [3164]: https://datatracker.ietf.org/doc/html/rfc3164
///
/// # Character encoding
///
/// Per the RFC: "The code set traditionally and most often used has also been seven-bit ASCII in
/// an eight-bit field", but in practice UTF-8 seems to be accepted. Therefore, callers may ask
/// instances to [escape] unicode, but by default they will not.
///
/// [escape]: str::escape_unicode
pub struct Rfc3164 {
    facility: Facility,
    hostname: Hostname,
    tag: Tag,
    timestamp: Timestamp,
    process: ProcessInfo,
    escape_unicode: bool,
}

pub struct Rfc3164Builder {
    facility: Facility,
    hostname: String,
    tag: String,
    utc: bool,
    precision: Precision,
    process: Option<ProcessInfo>,
    escape_unicode: bool,
}

impl Rfc3164Builder {
    pub fn facility(mut self, facility: Facility) -> Self {
        self.facility = facility;
        self
    }
    /// An empty `hostname` means "the local host name"
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }
    /// An empty `tag` means "the program name"
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
    pub fn timestamp_is_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }
    /// Set the precision by name; unrecognized names mean whole seconds.
    pub fn timestamp_level(self, level: &str) -> Self {
        self.precision(Precision::from_str_lossy(level))
    }
    /// Use `process` in place of a freshly detected [`ProcessInfo`]
    pub fn process(mut self, process: ProcessInfo) -> Self {
        self.process = Some(process);
        self
    }
    pub fn escape_unicode(mut self, escape_unicode: bool) -> Self {
        self.escape_unicode = escape_unicode;
        self
    }
    pub fn build(self) -> Rfc3164 {
        let process = self.process.unwrap_or_else(ProcessInfo::detect);
        Rfc3164 {
            facility: self.facility,
            hostname: Hostname::rfc3164(&self.hostname, &process),
            tag: Tag::new(&self.tag, &process),
            timestamp: Timestamp::new(self.utc, self.precision),
            process,
            escape_unicode: self.escape_unicode,
        }
    }
}

impl std::default::Default for Rfc3164 {
    fn default() -> Self {
        Rfc3164::builder().build()
    }
}

impl Rfc3164 {
    pub fn builder() -> Rfc3164Builder {
        Rfc3164Builder {
            facility: Facility::default(),
            hostname: String::new(),
            tag: String::new(),
            utc: false,
            precision: Precision::None,
            process: None,
            escape_unicode: false,
        }
    }
    pub fn hostname(&self) -> &Hostname {
        &self.hostname
    }
    pub fn tag(&self) -> &Tag {
        &self.tag
    }
    /// The header alone: `<PRI>TIMESTAMP HOSTNAME TAG[PID]:`
    ///
    /// The process ID is read on each call (unless pinned in the [`ProcessInfo`]).
    pub fn header(&self, level: Level, when: DateTime<Utc>) -> String {
        format!(
            "<{}>{} {} {}[{}]:",
            Priority::build(self.facility, level),
            self.timestamp.bsd(when),
            self.hostname,
            self.tag,
            self.process.pid()
        )
    }
    /// Render one line, stamped now, and release the formatter.
    pub fn into_line(mut self, level: Level, msg: &str) -> String {
        self.format(level, msg, None)
    }
}

impl SyslogFormatter for Rfc3164 {
    fn format(&mut self, level: Level, msg: &str, timestamp: Option<DateTime<Utc>>) -> String {
        // The MSG part has two fields known as the TAG field and the CONTENT field.  The value in
        // the TAG field will be the name of the program or process that generated the message.
        // Most commonly, the first character of the CONTENT field that signifies the conclusion
        // of the TAG field has been seen to be the left square bracket character ("["), a colon
        // character (":"), or a space character.
        let mut buf = self.header(level, timestamp.unwrap_or_else(Utc::now));
        if msg.is_empty() {
            return buf;
        }
        buf.push(' ');
        if self.escape_unicode {
            buf.push_str(&msg.escape_unicode().to_string())
        } else {
            buf.push_str(msg)
        }
        buf
    }
}
