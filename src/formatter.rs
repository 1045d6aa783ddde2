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

//! syslog formatting primitives.
//!
//! This module defines the [`SyslogFormatter`] trait shared by every line format in the crate,
//! and [`Format`], the closed set of those formats, selectable by name.

use crate::{
    error::{Error, Result},
    facility::Level,
    legacy::{Legacy, LegacyStyle},
    process::ProcessInfo,
    rfc3164::Rfc3164,
    rfc5424::Rfc5424,
    timestamp::Precision,
};

use chrono::prelude::*;

/// Operations all formatters must support
/// ======================================
///
/// # Introduction
///
/// Getting a log event to a syslog daemon occurs in three parts:
///
/// 1. formatting the event to a textual message
///
/// 2. incorporating that message into a syslog line compliant with your daemon's implementation
///
/// 3. transporting that line to your daemon
///
/// [`SyslogFormatter`] implements step 2 in this process: given the [`Level`], a textual message
/// and an optional timestamp (`None` meaning "now"), produce a complete line. The line carries no
/// trailing newline; framing is the transport's business.
///
/// # Design
///
/// Formatting never fails. Header fields are normalized when a formatter is built, and anything
/// else out of range is saturated while the line is rendered. `format` takes `&mut self`
/// because rendering the `meta` SD-ID saturates its stored values in place; a formatter is
/// therefore owned by one caller at a time.
pub trait SyslogFormatter {
    fn format(&mut self, level: Level, msg: &str, timestamp: Option<DateTime<Utc>>) -> String;
}

/// The line formats this crate can produce
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `<PRI> TIMESTAMP HOSTNAME TAG[PID]: CONTENT`, an amalgamation of 3164 & 5424 accepted by
    /// most daemons
    #[default]
    Default,
    /// `<PRI>TIMESTAMP TAG[PID]: CONTENT`, for local delivery
    Unix,
    /// `<PRI>TIMESTAMP HOSTNAME TAG[PID]: CONTENT`
    Rfc3164,
    /// `<PRI>1 TIMESTAMP HOSTNAME APPNAME PID MSGID STRUCTURED-DATA CONTENT`
    Rfc5424,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Default => "default",
            Format::Unix => "unix",
            Format::Rfc3164 => "rfc3164",
            Format::Rfc5424 => "rfc5424",
        }
    }
    /// Build a formatter for this format, with facility `LOG_DAEMON`.
    ///
    /// `hostname`, `app_name` & `tag` are the raw header fields; each format uses the ones it has
    /// room for. RFC 5424 lines carry `tag` as their MSGID & are stamped in UTC to the
    /// millisecond.
    pub fn formatter(
        self,
        hostname: &str,
        app_name: &str,
        tag: &str,
        process: ProcessInfo,
    ) -> AnyFormatter {
        match self {
            Format::Default | Format::Unix => AnyFormatter::Legacy(
                Legacy::builder(if self == Format::Unix {
                    LegacyStyle::Unix
                } else {
                    LegacyStyle::Default
                })
                .process(process)
                .hostname(hostname)
                .tag(tag)
                .build(),
            ),
            Format::Rfc3164 => AnyFormatter::Rfc3164(
                Rfc3164::builder()
                    .process(process)
                    .hostname(hostname)
                    .tag(tag)
                    .timestamp_is_utc(false)
                    .build(),
            ),
            Format::Rfc5424 => AnyFormatter::Rfc5424(
                Rfc5424::builder()
                    .process(process)
                    .hostname(hostname)
                    .app_name(app_name)
                    .message_id(tag)
                    .timestamp_is_utc(true)
                    .precision(Precision::Milli)
                    .build(),
            ),
        }
    }
    /// Render one line, right now, for this process.
    pub fn render(
        self,
        level: Level,
        hostname: &str,
        app_name: &str,
        tag: &str,
        content: &str,
    ) -> String {
        self.formatter(hostname, app_name, tag, ProcessInfo::detect())
            .format(level, content, None)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Format {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "default" => Ok(Format::Default),
            "unix" => Ok(Format::Unix),
            "rfc3164" | "bsd" => Ok(Format::Rfc3164),
            "rfc5424" => Ok(Format::Rfc5424),
            _ => Err(Error::unknown_format(s)),
        }
    }
}

/// Any one of the crate's formatters
pub enum AnyFormatter {
    Legacy(Legacy),
    Rfc3164(Rfc3164),
    Rfc5424(Rfc5424),
}

impl SyslogFormatter for AnyFormatter {
    fn format(&mut self, level: Level, msg: &str, timestamp: Option<DateTime<Utc>>) -> String {
        match self {
            AnyFormatter::Legacy(f) => f.format(level, msg, timestamp),
            AnyFormatter::Rfc3164(f) => f.format(level, msg, timestamp),
            AnyFormatter::Rfc5424(f) => f.format(level, msg, timestamp),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use chrono::SecondsFormat;

    fn process() -> ProcessInfo {
        ProcessInfo::default()
            .with_hostname("bree")
            .with_program("prototyping")
            .with_pid(123)
    }

    fn epoch() -> Option<DateTime<Utc>> {
        Some(std::time::UNIX_EPOCH.into())
    }

    #[test]
    fn test_names() {
        assert_eq!("rfc5424".parse::<Format>().unwrap(), Format::Rfc5424);
        assert_eq!("RFC-3164".parse::<Format>().unwrap(), Format::Rfc3164);
        assert_eq!("unix".parse::<Format>().unwrap(), Format::Unix);
        assert_eq!("default".parse::<Format>().unwrap(), Format::Default);
        assert!("gelf".parse::<Format>().is_err());
        assert_eq!(format!("{}", Format::Rfc5424), "rfc5424");
    }

    #[test]
    fn test_dispatch() {
        let local = DateTime::<Utc>::from(std::time::UNIX_EPOCH).with_timezone(&Local);

        let line = Format::Default
            .formatter("hostname", "appName", "tag", process())
            .format(Level::LOG_ERR, "content", epoch());
        assert_eq!(
            line,
            format!(
                "<27> {} hostname tag[123]: content",
                local.to_rfc3339_opts(SecondsFormat::Secs, true)
            )
        );

        let line = Format::Unix
            .formatter("hostname", "appName", "tag", process())
            .format(Level::LOG_ERR, "content", epoch());
        assert_eq!(
            line,
            format!("<27>{} tag[123]: content", local.format("%b %_d %H:%M:%S"))
        );

        let line = Format::Rfc3164
            .formatter("hostname", "appName", "tag", process())
            .format(Level::LOG_ERR, "content", epoch());
        assert_eq!(
            line,
            format!(
                "<27>{} hostname tag[123]: content",
                local.format("%b %_d %H:%M:%S")
            )
        );

        let line = Format::Rfc5424
            .formatter("hostname", "appName", "tag", process())
            .format(Level::LOG_ERR, "content", epoch());
        assert_eq!(
            line,
            "<27>1 1970-01-01T00:00:00.000Z hostname appName 123 tag - content"
        );
    }

    #[test]
    fn test_render() {
        // Can't pin the clock here, but the shape is fixed
        let line = Format::Rfc5424.render(Level::LOG_ERR, "hostname", "appName", "tag", "content");
        let pid = std::process::id();
        assert!(line.starts_with("<27>1 "));
        assert!(line.ends_with(&format!(" hostname appName {} tag - content", pid)));

        let line = Format::Rfc3164.render(Level::LOG_ERR, "hostname", "appName", "tag", "content");
        assert!(line.starts_with("<27>"));
        assert!(line.ends_with(&format!(" hostname tag[{}]: content", pid)));
    }
}
