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

//! The well-known SD-IDs of RFC [5424] section 7.
//!
//! [5424]: https://datatracker.ietf.org/doc/html/rfc5424#section-7
//!
//! IANA registers three SD-IDs whose parameters every receiver may interpret: `timeQuality`,
//! `origin` & `meta`. Each is modelled here as its own record, and [`WellKnownSdIds`] holds at
//! most one of each for a message.
//!
//! [`Meta::serialize`] saturates out-of-range values *in place*: after the first call the stored
//! values are the clamped ones, and every later call reports those.

use crate::structured_data::push_param;

use tracing::debug;

pub const TIME_QUALITY: &str = "timeQuality";
pub const ORIGIN: &str = "origin";
pub const META: &str = "meta";

/// Largest `sequenceId` permitted: 2147483647 (the counter then wraps to 1)
pub const SEQUENCE_ID_MAX: i64 = i32::MAX as i64;
/// `sysUpTime` bounds applied by [`Meta`]
pub const SYS_UP_TIME_MAX: i64 = 9;

/// `[timeQuality tzKnown="0|1" isSynced="0|1" syncAccuracy="n"]`
///
/// `syncAccuracy` is only meaningful for a synchronized clock, so it is written only when
/// `is_synced` is set & `sync_accuracy` is positive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeQuality {
    pub tz_known: bool,
    pub is_synced: bool,
    /// microseconds
    pub sync_accuracy: i32,
}

impl TimeQuality {
    pub fn serialize(&self) -> String {
        let mut out = format!("[{}", TIME_QUALITY);
        push_param(&mut out, "tzKnown", if self.tz_known { "1" } else { "0" });
        push_param(&mut out, "isSynced", if self.is_synced { "1" } else { "0" });
        if self.is_synced && self.sync_accuracy > 0 {
            push_param(&mut out, "syncAccuracy", &self.sync_accuracy.to_string());
        }
        out.push(']');
        out
    }
}

/// `[origin ip="..." ... enterpriseId="..." software="..." swVersion="..."]`
///
/// One `ip` parameter is written per address, in order. The remaining three are always
/// written, even when empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Origin {
    pub ip: Vec<String>,
    pub enterprise_id: String,
    pub software: String,
    pub sw_version: String,
}

impl Origin {
    /// An [`Origin`] naming this host's primary local IP address (if one can be found)
    pub fn detect() -> Origin {
        let ip = match local_ip_address::local_ip() {
            Ok(addr) => vec![addr.to_string()],
            Err(err) => {
                debug!("no local IP address for the origin SD-ID: {}", err);
                Vec::new()
            }
        };
        Origin {
            ip,
            ..Default::default()
        }
    }
    pub fn serialize(&self) -> String {
        let mut out = format!("[{}", ORIGIN);
        for ip in &self.ip {
            push_param(&mut out, "ip", ip);
        }
        push_param(&mut out, "enterpriseId", &self.enterprise_id);
        push_param(&mut out, "software", &self.software);
        push_param(&mut out, "swVersion", &self.sw_version);
        out.push(']');
        out
    }
}

/// `[meta sequenceId="n" sysUpTime="n" language="..."]`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Meta {
    /// saturated into `[0, SEQUENCE_ID_MAX]` on serialization
    pub sequence_id: i64,
    /// saturated into `[0, SYS_UP_TIME_MAX]` on serialization
    pub sys_up_time: i64,
    pub language: String,
}

impl Meta {
    /// Saturate `sequence_id` & `sys_up_time` into their legal ranges, in place.
    pub fn clamp(&mut self) {
        let sequence_id = self.sequence_id.clamp(0, SEQUENCE_ID_MAX);
        let sys_up_time = self.sys_up_time.clamp(0, SYS_UP_TIME_MAX);
        if sequence_id != self.sequence_id || sys_up_time != self.sys_up_time {
            debug!(
                old_sequence_id = self.sequence_id,
                old_sys_up_time = self.sys_up_time,
                sequence_id,
                sys_up_time,
                "clamping meta SD-ID"
            );
        }
        self.sequence_id = sequence_id;
        self.sys_up_time = sys_up_time;
    }
    /// [`clamp`](Meta::clamp), then serialize.
    pub fn serialize(&mut self) -> String {
        self.clamp();
        let mut out = format!("[{}", META);
        push_param(&mut out, "sequenceId", &self.sequence_id.to_string());
        push_param(&mut out, "sysUpTime", &self.sys_up_time.to_string());
        push_param(&mut out, "language", &self.language);
        out.push(']');
        out
    }
}

/// The well-known SD-IDs attached to one message; each is independently optional
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WellKnownSdIds {
    pub time_quality: Option<TimeQuality>,
    pub origin: Option<Origin>,
    pub meta: Option<Meta>,
}

impl WellKnownSdIds {
    pub fn is_empty(&self) -> bool {
        self.time_quality.is_none() && self.origin.is_none() && self.meta.is_none()
    }
    /// The present elements, in the order timeQuality, origin, meta, preceded by a single space;
    /// or the empty string if none is present.
    pub fn serialize(&mut self) -> String {
        let mut out = String::new();
        if let Some(tq) = &self.time_quality {
            out.push_str(&tq.serialize());
        }
        if let Some(origin) = &self.origin {
            out.push_str(&origin.serialize());
        }
        if let Some(meta) = &mut self.meta {
            out.push_str(&meta.serialize());
        }
        if !out.is_empty() {
            out.insert(0, ' ');
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_time_quality() {
        let tq = TimeQuality {
            tz_known: true,
            is_synced: true,
            sync_accuracy: 60000,
        };
        assert_eq!(
            tq.serialize(),
            "[timeQuality tzKnown=\"1\" isSynced=\"1\" syncAccuracy=\"60000\"]"
        );
        // no accuracy for an unsynchronized clock...
        let tq = TimeQuality {
            tz_known: false,
            is_synced: false,
            sync_accuracy: 50,
        };
        assert_eq!(tq.serialize(), "[timeQuality tzKnown=\"0\" isSynced=\"0\"]");
        // ...nor for a non-positive one
        let tq = TimeQuality {
            tz_known: true,
            is_synced: true,
            sync_accuracy: -1,
        };
        assert_eq!(tq.serialize(), "[timeQuality tzKnown=\"1\" isSynced=\"1\"]");
    }

    #[test]
    fn test_origin() {
        let origin = Origin {
            ip: vec!["192.0.2.1".to_owned(), "2001:db8::1".to_owned()],
            enterprise_id: "32473".to_owned(),
            software: "syslog-formatter".to_owned(),
            sw_version: "0.1.0".to_owned(),
        };
        assert_eq!(
            origin.serialize(),
            "[origin ip=\"192.0.2.1\" ip=\"2001:db8::1\" enterpriseId=\"32473\" \
             software=\"syslog-formatter\" swVersion=\"0.1.0\"]"
        );
        assert_eq!(
            Origin::default().serialize(),
            "[origin enterpriseId=\"\" software=\"\" swVersion=\"\"]"
        );
        let detected = Origin::detect(); // At least exercise it
        assert!(detected.ip.len() <= 1);
        assert!(detected.software.is_empty());
    }

    #[test]
    fn test_meta_clamps_in_place() {
        let mut meta = Meta {
            sequence_id: 3_000_000_000,
            sys_up_time: 12,
            language: "en".to_owned(),
        };
        let first = meta.serialize();
        assert_eq!(
            first,
            "[meta sequenceId=\"2147483647\" sysUpTime=\"9\" language=\"en\"]"
        );
        assert_eq!(meta.sequence_id, SEQUENCE_ID_MAX);
        assert_eq!(meta.sys_up_time, SYS_UP_TIME_MAX);
        assert_eq!(meta.serialize(), first);

        let mut meta = Meta {
            sequence_id: -4,
            sys_up_time: -1,
            language: String::new(),
        };
        assert_eq!(
            meta.serialize(),
            "[meta sequenceId=\"0\" sysUpTime=\"0\" language=\"\"]"
        );
        assert_eq!((meta.sequence_id, meta.sys_up_time), (0, 0));
    }

    #[test]
    fn test_group() {
        let mut ids = WellKnownSdIds::default();
        assert!(ids.is_empty());
        assert_eq!(ids.serialize(), "");

        ids.meta = Some(Meta {
            sequence_id: 7,
            sys_up_time: 3,
            language: "en".to_owned(),
        });
        ids.time_quality = Some(TimeQuality {
            tz_known: true,
            is_synced: false,
            sync_accuracy: 0,
        });
        assert_eq!(
            ids.serialize(),
            " [timeQuality tzKnown=\"1\" isSynced=\"0\"]\
             [meta sequenceId=\"7\" sysUpTime=\"3\" language=\"en\"]"
        );
    }
}
