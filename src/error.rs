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

//! [syslog-formatter](crate) errors
//!
//! Formatting itself never fails: bad inputs are clamped, truncated or defaulted. Errors only
//! arise at the edges of the crate: when configuration names are parsed from strings, when a
//! [`tracing`] event carries nothing to log, and when a finished line is handed to a
//! [`Sink`](crate::sink::Sink).

use backtrace::Backtrace;

/// [syslog-formatter](crate) error type
///
/// Like its sibling crates, [syslog-formatter](crate) eschews libraries like [thiserror] &
/// [anyhow] in favor of a straightforward enumeration with a few match arms chosen on the basis
/// of what the caller will need to respond.
///
/// [thiserror]: https://docs.rs/thiserror
/// [anyhow]: https://docs.rs/anyhow
#[non_exhaustive]
pub enum Error {
    /// Not the name of any syslog facility
    UnknownFacility { name: String, back: Backtrace },
    /// Not the name of any syslog severity level
    UnknownLevel { name: String, back: Backtrace },
    /// Not one of "none", "milli" or "micro"
    UnknownPrecision { name: String, back: Backtrace },
    /// Not the name of a supported line format
    UnknownFormat { name: String, back: Backtrace },
    /// A tracing event with no `message` field to turn into a line
    NoMessage { event: &'static str, back: Backtrace },
    /// The sink refused a formatted line
    Sink {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        back: Backtrace,
    },
}

impl Error {
    pub(crate) fn unknown_facility(name: &str) -> Error {
        Error::UnknownFacility {
            name: name.to_owned(),
            back: Backtrace::new(),
        }
    }
    pub(crate) fn unknown_level(name: &str) -> Error {
        Error::UnknownLevel {
            name: name.to_owned(),
            back: Backtrace::new(),
        }
    }
    pub(crate) fn unknown_precision(name: &str) -> Error {
        Error::UnknownPrecision {
            name: name.to_owned(),
            back: Backtrace::new(),
        }
    }
    pub(crate) fn no_message(event: &'static str) -> Error {
        Error::NoMessage {
            event,
            back: Backtrace::new(),
        }
    }
    pub(crate) fn unknown_format(name: &str) -> Error {
        Error::UnknownFormat {
            name: name.to_owned(),
            back: Backtrace::new(),
        }
    }
}

impl std::fmt::Display for Error {
    // `Error` is non-exhaustive so that adding variants won't be a breaking change to our
    // callers. That means the compiler won't catch us if we miss a variant here, so we
    // always include a `_` arm.
    #[allow(unreachable_patterns)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::UnknownFacility { name, .. } => {
                write!(f, "{:?} is not the name of a syslog facility", name)
            }
            Error::UnknownLevel { name, .. } => {
                write!(f, "{:?} is not the name of a syslog severity level", name)
            }
            Error::UnknownPrecision { name, .. } => write!(
                f,
                "{:?} is not a timestamp precision (expected none, milli or micro)",
                name
            ),
            Error::UnknownFormat { name, .. } => write!(
                f,
                "{:?} is not a syslog line format (expected default, unix, rfc3164 or rfc5424)",
                name
            ),
            Error::NoMessage { event, .. } => {
                write!(f, "No message field found in event {}", event)
            }
            Error::Sink { source, .. } => write!(f, "While sinking a syslog line, got {}", source),
            _ => write!(f, "syslog-formatter error"),
        }
    }
}

impl std::fmt::Debug for Error {
    #[allow(unreachable_patterns)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::UnknownFacility { name: _, back } => write!(f, "{}\n{:#?}", self, back),
            Error::UnknownLevel { name: _, back } => write!(f, "{}\n{:#?}", self, back),
            Error::UnknownPrecision { name: _, back } => write!(f, "{}\n{:#?}", self, back),
            Error::UnknownFormat { name: _, back } => write!(f, "{}\n{:#?}", self, back),
            Error::NoMessage { event: _, back } => write!(f, "{}\n{:#?}", self, back),
            Error::Sink { source: _, back } => write!(f, "{}\n{:#?}", self, back),
            _ => write!(f, "{}", self),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::unknown_facility("lpt");
        assert_eq!(format!("{}", err), "\"lpt\" is not the name of a syslog facility");
        // `Debug` should carry the backtrace along with the message
        assert!(format!("{:?}", err).starts_with("\"lpt\" is not the name"));
    }
}
