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

//! The two permissive, pre-RFC line formats.
//!
//! Before either RFC was widely implemented, syslog clients settled on two layouts that nearly
//! every daemon still accepts:
//!
//! - [`LegacyStyle::Default`]: `<PRI> TIMESTAMP HOSTNAME TAG[PID]: CONTENT`, with an RFC 3339
//!   timestamp. It is neither 3164 nor 5424, but an amalgamation meant to be parsed by either
//!   kind of daemon.
//! - [`LegacyStyle::Unix`]: `<PRI>TIMESTAMP TAG[PID]: CONTENT`, with a BSD stamp & no hostname,
//!   for delivery over a local socket, where the daemon knows perfectly well which host it is
//!   on.
//!
//! Both are stamped in local time, and neither omits the `: ` separator for an empty message.

use crate::{
    facility::{Facility, Level},
    formatter::SyslogFormatter,
    header::{Hostname, Tag},
    priority::Priority,
    process::ProcessInfo,
    timestamp::{Precision, Timestamp},
};

use chrono::prelude::*;

/// Which legacy layout to produce
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LegacyStyle {
    #[default]
    Default,
    Unix,
}

/// A formatter for the legacy line formats
pub struct Legacy {
    style: LegacyStyle,
    facility: Facility,
    hostname: Hostname,
    tag: Tag,
    process: ProcessInfo,
    timestamp: Timestamp,
}

pub struct LegacyBuilder {
    style: LegacyStyle,
    facility: Facility,
    hostname: String,
    tag: String,
    process: Option<ProcessInfo>,
    utc: bool,
}

impl LegacyBuilder {
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
    /// Use `process` in place of a freshly detected [`ProcessInfo`]
    pub fn process(mut self, process: ProcessInfo) -> Self {
        self.process = Some(process);
        self
    }
    pub fn timestamp_is_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }
    pub fn build(self) -> Legacy {
        let process = self.process.unwrap_or_else(ProcessInfo::detect);
        Legacy {
            style: self.style,
            facility: self.facility,
            hostname: Hostname::rfc3164(&self.hostname, &process),
            tag: Tag::new(&self.tag, &process),
            timestamp: Timestamp::new(self.utc, Precision::None),
            process,
        }
    }
}

impl Legacy {
    pub fn builder(style: LegacyStyle) -> LegacyBuilder {
        LegacyBuilder {
            style,
            facility: Facility::default(),
            hostname: String::new(),
            tag: String::new(),
            process: None,
            utc: false,
        }
    }
    pub fn style(&self) -> LegacyStyle {
        self.style
    }
}

impl SyslogFormatter for Legacy {
    fn format(&mut self, level: Level, msg: &str, timestamp: Option<DateTime<Utc>>) -> String {
        let pri = Priority::build(self.facility, level);
        let when = timestamp.unwrap_or_else(Utc::now);
        match self.style {
            LegacyStyle::Default => format!(
                "<{}> {} {} {}[{}]: {}",
                pri,
                self.timestamp.rfc3339(when),
                self.hostname,
                self.tag,
                self.process.pid(),
                msg
            ),
            LegacyStyle::Unix => format!(
                "<{}>{} {}[{}]: {}",
                pri,
                self.timestamp.bsd(when),
                self.tag,
                self.process.pid(),
                msg
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn process() -> ProcessInfo {
        ProcessInfo::default()
            .with_hostname("bree")
            .with_program("prototyping")
            .with_pid(123)
    }

    #[test]
    fn test_default_style() {
        let mut f = Legacy::builder(LegacyStyle::Default)
            .process(process())
            .hostname("hostname")
            .tag("tag")
            .timestamp_is_utc(true)
            .build();
        assert_eq!(f.style(), LegacyStyle::Default);
        assert_eq!(
            f.format(Level::LOG_ERR, "content", Some(std::time::UNIX_EPOCH.into())),
            "<27> 1970-01-01T00:00:00Z hostname tag[123]: content"
        );
        // defaults come from the process snapshot
        let mut f = Legacy::builder(LegacyStyle::Default)
            .process(process())
            .facility(Facility::LOG_USER)
            .timestamp_is_utc(true)
            .build();
        assert_eq!(
            f.format(Level::LOG_INFO, "", Some(std::time::UNIX_EPOCH.into())),
            "<14> 1970-01-01T00:00:00Z bree prototyping[123]: "
        );
    }

    #[test]
    fn test_unix_style() {
        let mut f = Legacy::builder(LegacyStyle::Unix)
            .process(process())
            .hostname("hostname")
            .tag("tag")
            .timestamp_is_utc(true)
            .build();
        assert_eq!(
            f.format(Level::LOG_ERR, "content", Some(std::time::UNIX_EPOCH.into())),
            "<27>Jan  1 00:00:00 tag[123]: content"
        );
    }
}
