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

//! syslog facility & level definitions.
//!
//! [`Facility`] and [`Level`] replicate the names used in `<syslog.h>`. They are identical in
//! RFC [3164], RFC [5424] and the legacy line formats, so one pair of enumerations serves every
//! formatter in this crate.
//!
//! [3164]: https://datatracker.ietf.org/doc/html/rfc3164
//! [5424]: https://datatracker.ietf.org/doc/html/rfc5424

use crate::error::{Error, Result};

type StdResult<T, E> = std::result::Result<T, E>;

/// Both RFCs [5424] & [3164] define twenty-four "facilities" for messages. The enumeration values
/// duplicate the constants defined in `<syslog.h>`, albeit multiplied by 8 for convenience in
/// forming the PRI part of a header (which again mirrors the `#define`s in `<syslog.h>`).
///
/// [5424]: https://datatracker.ietf.org/doc/html/rfc5424
/// [3164]: https://datatracker.ietf.org/doc/html/rfc3164
///
/// The facility is meant to name the subsystem that produced a message; the defaults of every
/// formatter in this crate use `LOG_DAEMON`.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Facility {
    /// kernel messages
    LOG_KERN = 0 << 3,
    /// random user-level messages
    LOG_USER = 1 << 3,
    /// mail system
    LOG_MAIL = 2 << 3,
    /// system daemons
    LOG_DAEMON = 3 << 3,
    /// security/authorization messages
    LOG_AUTH = 4 << 3,
    /// messages generated internally by syslogd
    LOG_SYSLOG = 5 << 3,
    /// line printer subsystem
    LOG_LPR = 6 << 3,
    /// network news subsystem
    LOG_NEWS = 7 << 3,
    /// UUCP subsystem
    LOG_UUCP = 8 << 3,
    /// clock daemon
    LOG_CRON = 9 << 3,
    /// security/authorization messages (private)
    LOG_AUTHPRIV = 10 << 3,
    /// ftp daemon
    LOG_FTP = 11 << 3,
    /// NTP subsystem
    LOG_NTP = 12 << 3,
    /// log audit
    LOG_AUDIT = 13 << 3,
    /// log alert
    LOG_ALERT = 14 << 3,
    /// clock daemon (note 2 in RFC [5424] section 6.2.1)
    ///
    /// [5424]: https://datatracker.ietf.org/doc/html/rfc5424#section-6.2.1
    LOG_CLOCK = 15 << 3,
    /// reserved for local use
    LOG_LOCAL0 = 16 << 3,
    /// reserved for local use
    LOG_LOCAL1 = 17 << 3,
    /// reserved for local use
    LOG_LOCAL2 = 18 << 3,
    /// reserved for local use
    LOG_LOCAL3 = 19 << 3,
    /// reserved for local use
    LOG_LOCAL4 = 20 << 3,
    /// reserved for local use
    LOG_LOCAL5 = 21 << 3,
    /// reserved for local use
    LOG_LOCAL6 = 22 << 3,
    /// reserved for local use
    LOG_LOCAL7 = 23 << 3,
}

/// Every facility, in numeric order
const FACILITIES: [Facility; 24] = [
    Facility::LOG_KERN,
    Facility::LOG_USER,
    Facility::LOG_MAIL,
    Facility::LOG_DAEMON,
    Facility::LOG_AUTH,
    Facility::LOG_SYSLOG,
    Facility::LOG_LPR,
    Facility::LOG_NEWS,
    Facility::LOG_UUCP,
    Facility::LOG_CRON,
    Facility::LOG_AUTHPRIV,
    Facility::LOG_FTP,
    Facility::LOG_NTP,
    Facility::LOG_AUDIT,
    Facility::LOG_ALERT,
    Facility::LOG_CLOCK,
    Facility::LOG_LOCAL0,
    Facility::LOG_LOCAL1,
    Facility::LOG_LOCAL2,
    Facility::LOG_LOCAL3,
    Facility::LOG_LOCAL4,
    Facility::LOG_LOCAL5,
    Facility::LOG_LOCAL6,
    Facility::LOG_LOCAL7,
];

impl Facility {
    /// The conventional short name ("daemon", "local0", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Facility::LOG_KERN => "kern",
            Facility::LOG_USER => "user",
            Facility::LOG_MAIL => "mail",
            Facility::LOG_DAEMON => "daemon",
            Facility::LOG_AUTH => "auth",
            Facility::LOG_SYSLOG => "syslog",
            Facility::LOG_LPR => "lpr",
            Facility::LOG_NEWS => "news",
            Facility::LOG_UUCP => "uucp",
            Facility::LOG_CRON => "cron",
            Facility::LOG_AUTHPRIV => "authpriv",
            Facility::LOG_FTP => "ftp",
            Facility::LOG_NTP => "ntp",
            Facility::LOG_AUDIT => "audit",
            Facility::LOG_ALERT => "alert",
            Facility::LOG_CLOCK => "clock",
            Facility::LOG_LOCAL0 => "local0",
            Facility::LOG_LOCAL1 => "local1",
            Facility::LOG_LOCAL2 => "local2",
            Facility::LOG_LOCAL3 => "local3",
            Facility::LOG_LOCAL4 => "local4",
            Facility::LOG_LOCAL5 => "local5",
            Facility::LOG_LOCAL6 => "local6",
            Facility::LOG_LOCAL7 => "local7",
        }
    }
    /// Recover a [`Facility`] from the facility bits of a PRI value; the low three bits (the
    /// severity) are ignored.
    pub fn from_pri_bits(pri: u8) -> Option<Facility> {
        FACILITIES.get(usize::from(pri >> 3)).copied()
    }
}

impl std::default::Default for Facility {
    /// The default facility is `LOG_DAEMON`.
    fn default() -> Self {
        Facility::LOG_DAEMON
    }
}

impl std::fmt::Display for Facility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> StdResult<(), std::fmt::Error> {
        write!(f, "LOG_{}", self.as_str().to_ascii_uppercase())
    }
}

impl std::str::FromStr for Facility {
    type Err = Error;
    /// Accepts either the short name ("daemon") or the `<syslog.h>` name ("LOG_DAEMON"), without
    /// regard to case.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        let name = lower.strip_prefix("log_").unwrap_or(&lower);
        FACILITIES
            .iter()
            .find(|fac| fac.as_str() == name)
            .copied()
            .ok_or_else(|| Error::unknown_facility(s))
    }
}

/// Both RFCs [5424] & [3164] define eight severity levels for messages. The enumeration values
/// duplicate the constants documented as per the `syslog()` manual [page] & defined in
/// `<syslog.h>`.
///
/// [5424]: https://datatracker.ietf.org/doc/html/rfc5424
/// [3164]: https://datatracker.ietf.org/doc/html/rfc3164
/// [page]: https://man7.org/linux/man-pages/man3/syslog.3.html
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// system is unusable
    LOG_EMERG,
    /// action must be take immediately
    LOG_ALERT,
    /// critical conditions
    LOG_CRIT,
    /// error conditions
    LOG_ERR,
    /// warning conditions
    LOG_WARNING,
    /// normal, but significant condition
    LOG_NOTICE,
    /// informational message
    LOG_INFO,
    /// debug-level message
    LOG_DEBUG,
}

const LEVELS: [Level; 8] = [
    Level::LOG_EMERG,
    Level::LOG_ALERT,
    Level::LOG_CRIT,
    Level::LOG_ERR,
    Level::LOG_WARNING,
    Level::LOG_NOTICE,
    Level::LOG_INFO,
    Level::LOG_DEBUG,
];

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::LOG_EMERG => "emerg",
            Level::LOG_ALERT => "alert",
            Level::LOG_CRIT => "crit",
            Level::LOG_ERR => "err",
            Level::LOG_WARNING => "warning",
            Level::LOG_NOTICE => "notice",
            Level::LOG_INFO => "info",
            Level::LOG_DEBUG => "debug",
        }
    }
    /// Recover a [`Level`] from the low three bits of a PRI value.
    pub fn from_pri_bits(pri: u8) -> Level {
        LEVELS[usize::from(pri & 0x07)]
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> StdResult<(), std::fmt::Error> {
        write!(f, "LOG_{}", self.as_str().to_ascii_uppercase())
    }
}

impl std::str::FromStr for Level {
    type Err = Error;
    /// Accepts the short name ("err"), the `<syslog.h>` name ("LOG_ERR") and the handful of
    /// aliases `syslog.conf` has always tolerated ("error", "warn", "panic").
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        let name = lower.strip_prefix("log_").unwrap_or(&lower);
        match name {
            "error" => Ok(Level::LOG_ERR),
            "warn" => Ok(Level::LOG_WARNING),
            "panic" => Ok(Level::LOG_EMERG),
            _ => LEVELS
                .iter()
                .find(|lvl| lvl.as_str() == name)
                .copied()
                .ok_or_else(|| Error::unknown_level(s)),
        }
    }
}

/// [`tracing`] has five levels to syslog's eight: TRACE & DEBUG both map to `debug`, INFO to
/// `info`, WARN to `warning` & ERROR to `err`.
impl From<&tracing::Level> for Level {
    fn from(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Level::LOG_DEBUG,
            tracing::Level::INFO => Level::LOG_INFO,
            tracing::Level::WARN => Level::LOG_WARNING,
            tracing::Level::ERROR => Level::LOG_ERR,
        }
    }
}

#[cfg(test)]
mod facility_level_tests {
    use super::*;
    /// Test basic PRI formatting
    #[test]
    fn test_pri() {
        assert_eq!(14, (Facility::LOG_USER as u8) | (Level::LOG_INFO as u8));
        assert_eq!(27, (Facility::LOG_DAEMON as u8) | (Level::LOG_ERR as u8));
        assert_eq!(format!("{}", Facility::LOG_FTP), "LOG_FTP".to_string());
        assert_eq!(format!("{:?}", Facility::LOG_FTP), "LOG_FTP".to_string());
        assert_eq!(format!("{}", Level::LOG_WARNING), "LOG_WARNING".to_string());
    }

    #[test]
    fn test_default() {
        assert_eq!(Facility::default(), Facility::LOG_DAEMON);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("daemon".parse::<Facility>().unwrap(), Facility::LOG_DAEMON);
        assert_eq!("LOG_LOCAL7".parse::<Facility>().unwrap(), Facility::LOG_LOCAL7);
        assert_eq!("AuthPriv".parse::<Facility>().unwrap(), Facility::LOG_AUTHPRIV);
        assert!("lpt".parse::<Facility>().is_err());

        assert_eq!("err".parse::<Level>().unwrap(), Level::LOG_ERR);
        assert_eq!("error".parse::<Level>().unwrap(), Level::LOG_ERR);
        assert_eq!("LOG_DEBUG".parse::<Level>().unwrap(), Level::LOG_DEBUG);
        assert_eq!("warn".parse::<Level>().unwrap(), Level::LOG_WARNING);
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn test_from_tracing() {
        assert_eq!(Level::from(&tracing::Level::TRACE), Level::LOG_DEBUG);
        assert_eq!(Level::from(&tracing::Level::DEBUG), Level::LOG_DEBUG);
        assert_eq!(Level::from(&tracing::Level::INFO), Level::LOG_INFO);
        assert_eq!(Level::from(&tracing::Level::WARN), Level::LOG_WARNING);
        assert_eq!(Level::from(&tracing::Level::ERROR), Level::LOG_ERR);
    }

    #[test]
    fn test_from_pri_bits() {
        for fac in FACILITIES {
            assert_eq!(Facility::from_pri_bits(fac as u8 | 7), Some(fac));
        }
        assert_eq!(Facility::from_pri_bits(192), None);
        for lvl in LEVELS {
            assert_eq!(Level::from_pri_bits(Facility::LOG_MAIL as u8 | lvl as u8), lvl);
        }
    }
}
