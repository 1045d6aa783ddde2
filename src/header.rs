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

//! Header field normalization.
//!
//! The HOSTNAME, TAG/APP-NAME & MSGID header fields each have a length limit and a default.
//! The types in this module apply both at construction, so a value of any of them is always fit
//! to be written into a header:
//!
//! - an empty input is replaced by its default (the local host name, the program name, or the
//!   NILVALUE `-`)
//! - an over-long input keeps its trailing bytes; the leading ones are dropped
//!
//! Neither step ever fails.

use crate::{byte_utils::truncate_start, process::ProcessInfo};

use tracing::debug;

type StdResult<T, E> = std::result::Result<T, E>;

/// RFC [5424]'s NILVALUE, used for an absent field
///
/// [5424]: https://datatracker.ietf.org/doc/html/rfc5424#section-6
pub const NILVALUE: &str = "-";

/// Both RFCs cap the HOSTNAME at 255 bytes
pub const HOSTNAME_MAX_LEN: usize = 255;
/// RFC [3164]: "The TAG is a string of ABNF alphanumeric characters that MUST NOT exceed 32
/// characters."
///
/// [3164]: https://datatracker.ietf.org/doc/html/rfc3164#section-4.1.3
pub const TAG_MAX_LEN: usize = 32;
/// RFC 5424 APP-NAME: `1*48PRINTUSASCII`
pub const APP_NAME_MAX_LEN: usize = 48;
/// RFC 5424 MSGID: `1*32PRINTUSASCII`
pub const MSG_ID_MAX_LEN: usize = 32;

/// Truncate `raw` to the trailing `max` bytes, noting it if anything was lost.
fn keep_suffix(field: &'static str, raw: &str, max: usize) -> String {
    let kept = truncate_start(raw, max);
    if kept.len() != raw.len() {
        debug!(field, len = raw.len(), max, "truncating over-long header field");
    }
    kept.to_owned()
}

macro_rules! header_field {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> StdResult<(), std::fmt::Error> {
                f.write_str(&self.0)
            }
        }
    };
}

/// The HOSTNAME header field: at most [`HOSTNAME_MAX_LEN`] bytes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hostname(String);

header_field!(Hostname);

impl Hostname {
    /// An RFC [3164] HOSTNAME: an empty `raw` is replaced by the local host name, or left empty if
    /// that is unknown.
    ///
    /// [3164]: https://datatracker.ietf.org/doc/html/rfc3164
    pub fn rfc3164(raw: &str, process: &ProcessInfo) -> Hostname {
        let raw = if raw.is_empty() {
            process.hostname().unwrap_or("")
        } else {
            raw
        };
        Hostname(keep_suffix("hostname", raw, HOSTNAME_MAX_LEN))
    }
    /// An RFC [5424] HOSTNAME: an empty `raw` is replaced by the local host name, or by the
    /// NILVALUE if that is unknown.
    ///
    /// [5424]: https://datatracker.ietf.org/doc/html/rfc5424#section-6.2.4
    pub fn rfc5424(raw: &str, process: &ProcessInfo) -> Hostname {
        let raw = if raw.is_empty() {
            process.hostname().unwrap_or(NILVALUE)
        } else {
            raw
        };
        Hostname(keep_suffix("hostname", raw, HOSTNAME_MAX_LEN))
    }
}

/// The RFC [3164] TAG: at most [`TAG_MAX_LEN`] bytes, defaulting to the program name
///
/// [3164]: https://datatracker.ietf.org/doc/html/rfc3164#section-4.1.3
///
/// The RFC considers the process ID part of the CONTENT ("TAG\[pid\]:"), so it is not included
/// here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag(String);

header_field!(Tag);

impl Tag {
    pub fn new(raw: &str, process: &ProcessInfo) -> Tag {
        let raw = if raw.is_empty() {
            process.program().unwrap_or("")
        } else {
            raw
        };
        Tag(keep_suffix("tag", raw, TAG_MAX_LEN))
    }
}

/// The RFC [5424] APP-NAME: at most [`APP_NAME_MAX_LEN`] bytes, defaulting to the program name
///
/// [5424]: https://datatracker.ietf.org/doc/html/rfc5424#section-6.2.5
///
/// "The APP-NAME field SHOULD identify the device or application that originated the message.  It
/// is a string without further semantics. It is intended for filtering messages on a relay or
/// collector." If no program name is available either, the NILVALUE is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppName(String);

header_field!(AppName);

impl AppName {
    pub fn new(raw: &str, process: &ProcessInfo) -> AppName {
        let raw = if raw.is_empty() {
            process.program().unwrap_or(NILVALUE)
        } else {
            raw
        };
        AppName(keep_suffix("app-name", raw, APP_NAME_MAX_LEN))
    }
}

/// The RFC [5424] MSGID: at most [`MSG_ID_MAX_LEN`] bytes, or the NILVALUE
///
/// [5424]: https://datatracker.ietf.org/doc/html/rfc5424#section-6.2.7
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageId(String);

header_field!(MessageId);

impl MessageId {
    pub fn new(raw: &str) -> MessageId {
        if raw.is_empty() || raw == NILVALUE {
            MessageId(NILVALUE.to_owned())
        } else {
            MessageId(keep_suffix("msgid", raw, MSG_ID_MAX_LEN))
        }
    }
}

impl std::default::Default for MessageId {
    fn default() -> Self {
        MessageId(NILVALUE.to_owned())
    }
}
