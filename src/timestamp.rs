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

//! Header timestamps.
//!
//! RFC [3164] headers carry a BSD-style `Mmm dd hh:mm:ss` stamp in local time; RFC [5424]
//! headers carry an RFC [3339] date-time with an explicit offset. [`Timestamp`] renders either,
//! optionally converting to UTC first, at one of three [`Precision`]s.
//!
//! [3164]: https://datatracker.ietf.org/doc/html/rfc3164#section-4.1.2
//! [5424]: https://datatracker.ietf.org/doc/html/rfc5424#section-6.2.3
//! [3339]: https://datatracker.ietf.org/doc/html/rfc3339

use crate::error::{Error, Result};

use chrono::{prelude::*, SecondsFormat};

/// BSD syslog stamp, e.g. `Jan  2 15:04:05` (the day of month is space-padded)
const BSD_STAMP: &str = "%b %_d %H:%M:%S";

/// How many digits of fractional seconds to render
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Precision {
    /// whole seconds: the protocol's default layout
    #[default]
    None,
    /// three digits of fractional seconds
    Milli,
    /// six digits of fractional seconds
    Micro,
}

impl Precision {
    pub fn as_str(self) -> &'static str {
        match self {
            Precision::None => "none",
            Precision::Milli => "milli",
            Precision::Micro => "micro",
        }
    }
    /// Like [`str::parse`], but anything unrecognized means [`Precision::None`].
    pub fn from_str_lossy(s: &str) -> Precision {
        s.parse().unwrap_or_else(|err: Error| {
            tracing::debug!("{}; falling back to whole seconds", err);
            Precision::None
        })
    }
    fn seconds_format(self) -> SecondsFormat {
        match self {
            Precision::None => SecondsFormat::Secs,
            Precision::Milli => SecondsFormat::Millis,
            Precision::Micro => SecondsFormat::Micros,
        }
    }
    fn fraction(self) -> &'static str {
        match self {
            Precision::None => "",
            Precision::Milli => "%.3f",
            Precision::Micro => "%.6f",
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Precision {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Precision::None),
            "milli" => Ok(Precision::Milli),
            "micro" => Ok(Precision::Micro),
            _ => Err(Error::unknown_precision(s)),
        }
    }
}

/// Renders points in time for syslog headers
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timestamp {
    utc: bool,
    precision: Precision,
}

impl Timestamp {
    pub fn new(utc: bool, precision: Precision) -> Timestamp {
        Timestamp { utc, precision }
    }
    pub fn is_utc(&self) -> bool {
        self.utc
    }
    pub fn precision(&self) -> Precision {
        self.precision
    }
    /// Render `when` in the BSD layout used by RFC 3164: `Jan  2 15:04:05`, followed by three or
    /// six digits of fractional seconds at [`Precision::Milli`] & [`Precision::Micro`].
    pub fn bsd(&self, when: DateTime<Utc>) -> String {
        let layout = format!("{}{}", BSD_STAMP, self.precision.fraction());
        if self.utc {
            when.format(&layout).to_string()
        } else {
            when.with_timezone(&Local).format(&layout).to_string()
        }
    }
    /// Render `when` as an RFC 3339 date-time: `2006-01-02T15:04:05Z07:00`, with three or six
    /// digits of fractional seconds at [`Precision::Milli`] & [`Precision::Micro`]. A zero offset
    /// is written as `Z`.
    ///
    /// The fraction is always full width, trailing zeros included (`00:00:01.000Z`, never
    /// `00:00:01Z`), so every line stamped at a given precision has the same shape. RFC 5424
    /// permits either form; collectors that trim zeros will still parse these.
    pub fn rfc3339(&self, when: DateTime<Utc>) -> String {
        let fmt = self.precision.seconds_format();
        if self.utc {
            when.to_rfc3339_opts(fmt, true)
        } else {
            when.with_timezone(&Local).to_rfc3339_opts(fmt, true)
        }
    }
}
