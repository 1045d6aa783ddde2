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

//! RFC [5424]-compliant syslog message formatting
//!
//! [5424]: https://datatracker.ietf.org/doc/html/rfc5424
//!
//! [`Rfc5424`] is a [`SyslogFormatter`] that produces syslog messages according to RFC 5424:
//!
//! ```text
//! <PRI>1 TIMESTAMP HOSTNAME APP-NAME PROCID MSGID STRUCTURED-DATA MSG
//! ```
//!
//! The STRUCTURED-DATA part is the formatter's [`StructuredData`] (or the NILVALUE), followed by
//! whichever of the well-known SD-IDs ([`WellKnownSdIds`]) have been attached.

use crate::{
    facility::{Facility, Level},
    formatter::SyslogFormatter,
    header::{AppName, Hostname, MessageId},
    priority::Priority,
    process::ProcessInfo,
    sd_id::{Meta, Origin, TimeQuality, WellKnownSdIds},
    structured_data::{StructuredData, StructuredElement},
    timestamp::{Precision, Timestamp},
};

use chrono::prelude::*;

/// The only VERSION defined so far
pub const VERSION: u8 = 1;

/// A formatter that produces RFC [5424]-conformant syslog messages.
///
/// [5424]: https://datatracker.ietf.org/doc/html/rfc5424
///
/// Timestamps are rendered in UTC unless the builder says otherwise.
pub struct Rfc5424 {
    facility: Facility,
    hostname: Hostname,
    app_name: AppName,
    message_id: MessageId,
    timestamp: Timestamp,
    process: ProcessInfo,
    structured_data: StructuredData,
    sd_ids: WellKnownSdIds,
    with_bom: bool,
}

pub struct Rfc5424Builder {
    facility: Facility,
    hostname: String,
    app_name: String,
    message_id: String,
    utc: bool,
    precision: Precision,
    process: Option<ProcessInfo>,
    structured_data: StructuredData,
    sd_ids: WellKnownSdIds,
    with_bom: bool,
}

impl Rfc5424Builder {
    pub fn facility(mut self, facility: Facility) -> Self {
        self.facility = facility;
        self
    }
    /// An empty `hostname` means "the local host name"
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }
    /// An empty `app_name` means "the program name"
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }
    /// An empty `message_id` means the NILVALUE
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
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
    pub fn structured_data(mut self, element: StructuredElement) -> Self {
        self.structured_data.push(element);
        self
    }
    pub fn sd_ids(mut self, sd_ids: WellKnownSdIds) -> Self {
        self.sd_ids = sd_ids;
        self
    }
    pub fn time_quality(mut self, time_quality: TimeQuality) -> Self {
        self.sd_ids.time_quality = Some(time_quality);
        self
    }
    pub fn origin(mut self, origin: Origin) -> Self {
        self.sd_ids.origin = Some(origin);
        self
    }
    pub fn meta(mut self, meta: Meta) -> Self {
        self.sd_ids.meta = Some(meta);
        self
    }
    pub fn with_bom(mut self, with_bom: bool) -> Self {
        self.with_bom = with_bom;
        self
    }
    pub fn build(self) -> Rfc5424 {
        let process = self.process.unwrap_or_else(ProcessInfo::detect);
        Rfc5424 {
            facility: self.facility,
            hostname: Hostname::rfc5424(&self.hostname, &process),
            app_name: AppName::new(&self.app_name, &process),
            message_id: MessageId::new(&self.message_id),
            timestamp: Timestamp::new(self.utc, self.precision),
            process,
            structured_data: self.structured_data,
            sd_ids: self.sd_ids,
            with_bom: self.with_bom,
        }
    }
}

impl std::default::Default for Rfc5424 {
    fn default() -> Self {
        Rfc5424::builder().build()
    }
}

impl Rfc5424 {
    pub fn builder() -> Rfc5424Builder {
        Rfc5424Builder {
            facility: Facility::default(),
            hostname: String::new(),
            app_name: String::new(),
            message_id: String::new(),
            utc: true,
            precision: Precision::Milli,
            process: None,
            structured_data: StructuredData::default(),
            sd_ids: WellKnownSdIds::default(),
            with_bom: false,
        }
    }
    pub fn hostname(&self) -> &Hostname {
        &self.hostname
    }
    pub fn app_name(&self) -> &AppName {
        &self.app_name
    }
    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }
    pub fn structured_data(&self) -> &StructuredData {
        &self.structured_data
    }
    pub fn sd_ids(&self) -> &WellKnownSdIds {
        &self.sd_ids
    }
    /// Append an SD-ELEMENT to every subsequent line.
    pub fn add_structured_data(&mut self, element: StructuredElement) {
        self.structured_data.push(element);
    }
    /// Replace all SD-ELEMENTs with `element`.
    pub fn set_structured_data(&mut self, element: StructuredElement) {
        self.structured_data.replace(element);
    }
    pub fn set_sd_ids(&mut self, sd_ids: WellKnownSdIds) {
        self.sd_ids = sd_ids;
    }
    pub fn set_time_quality(&mut self, time_quality: Option<TimeQuality>) {
        self.sd_ids.time_quality = time_quality;
    }
    pub fn set_origin(&mut self, origin: Option<Origin>) {
        self.sd_ids.origin = origin;
    }
    pub fn set_meta(&mut self, meta: Option<Meta>) {
        self.sd_ids.meta = meta;
    }
    /// The header alone: `<PRI>1 TIMESTAMP HOSTNAME APP-NAME PROCID MSGID`
    pub fn header(&self, level: Level, when: DateTime<Utc>) -> String {
        format!(
            "<{}>{} {} {} {} {} {}",
            Priority::build(self.facility, level),
            VERSION,
            self.timestamp.rfc3339(when),
            self.hostname,
            self.app_name,
            self.process.pid(),
            self.message_id
        )
    }
    /// Render one line, stamped now, and release the formatter along with its structured data.
    pub fn into_line(mut self, level: Level, msg: &str) -> String {
        self.format(level, msg, None)
    }
}

impl SyslogFormatter for Rfc5424 {
    fn format(&mut self, level: Level, msg: &str, timestamp: Option<DateTime<Utc>>) -> String {
        let mut buf = self.header(level, timestamp.unwrap_or_else(Utc::now));
        buf.push(' ');
        buf.push_str(&self.structured_data.serialize());
        buf.push_str(&self.sd_ids.serialize());
        if msg.is_empty() {
            return buf;
        }
        buf.push(' ');
        // "If a syslog application encodes MSG in UTF-8, the string MUST start with the Unicode
        // byte order mask (BOM), which for UTF-8 is ABNF %xEF.BB.BF."
        if self.with_bom {
            buf.push('\u{feff}');
        }
        buf.push_str(msg);
        buf
    }
}

#[cfg(test)]
mod test {

    use super::*;

    fn process() -> ProcessInfo {
        ProcessInfo::default()
            .with_hostname("bree.local")
            .with_program("/usr/bin/prototyping")
            .with_pid(123)
    }

    fn epoch() -> Option<DateTime<Utc>> {
        Some(std::time::UNIX_EPOCH.into())
    }

    fn builder() -> Rfc5424Builder {
        Rfc5424::builder()
            .hostname("hostname")
            .app_name("appName")
            .message_id("tag")
            .process(process())
    }

    #[test]
    fn test_rfc_5424_impl() {
        let _f = Rfc5424::default(); // At least _exercise_ `Default`

        let mut f = builder().build();
        assert_eq!(
            f.format(Level::LOG_ERR, "content", epoch()),
            "<27>1 1970-01-01T00:00:00.000Z hostname appName 123 tag - content"
        );
        assert_eq!(
            f.format(Level::LOG_ERR, "", epoch()),
            "<27>1 1970-01-01T00:00:00.000Z hostname appName 123 tag -"
        );

        let mut f = builder()
            .facility(Facility::LOG_USER)
            .precision(Precision::Micro)
            .build();
        assert_eq!(
            f.format(Level::LOG_INFO, "Hello, 世界!", epoch()),
            "<14>1 1970-01-01T00:00:00.000000Z hostname appName 123 tag - Hello, 世界!"
        );
    }

    #[test]
    fn test_defaults() {
        let f = Rfc5424::builder().process(process()).build();
        assert_eq!(f.hostname().as_str(), "bree.local");
        assert_eq!(f.app_name().as_str(), "/usr/bin/prototyping");
        assert_eq!(f.message_id().as_str(), "-");

        let f = Rfc5424::builder().process(ProcessInfo::default()).build();
        assert_eq!(f.hostname().as_str(), "-");
        assert_eq!(f.app_name().as_str(), "-");
    }

    #[test]
    fn test_truncation() {
        let mut f = builder()
            .hostname("hostname_test".repeat(20))
            .app_name("a".repeat(40) + "/udp-test")
            .message_id("m".repeat(40) + "ID47")
            .build();
        assert_eq!(f.hostname().as_str().len(), 255);
        assert_eq!(f.app_name().as_str().len(), 48);
        assert!(f.app_name().as_str().ends_with("/udp-test"));
        assert_eq!(f.message_id().as_str().len(), 32);
        assert!(f.message_id().as_str().ends_with("ID47"));
        let line = f.format(Level::LOG_ERR, "content", epoch());
        assert!(line.ends_with(" - content"));
    }

    #[test]
    fn test_local_time() {
        let mut f = builder().timestamp_is_utc(false).timestamp_level("none").build();
        let stamp = DateTime::<Utc>::from(std::time::UNIX_EPOCH)
            .with_timezone(&Local)
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        assert_eq!(
            f.format(Level::LOG_ERR, "content", epoch()),
            format!("<27>1 {} hostname appName 123 tag - content", stamp)
        );
    }

    #[test]
    fn test_bom() {
        let mut f = builder().with_bom(true).build();
        let rsp = f.format(Level::LOG_ERR, "Hello, world!", epoch());
        let mut golden =
            Vec::from("<27>1 1970-01-01T00:00:00.000Z hostname appName 123 tag - ");
        golden.push(0xef_u8);
        golden.push(0xbb_u8);
        golden.push(0xbf_u8);
        golden.extend_from_slice("Hello, world!".as_bytes());
        assert_eq!(rsp.into_bytes(), golden);
    }

    #[test]
    fn test_structured_data() {
        let mut f = builder()
            .structured_data(
                StructuredElement::new("exampleSDID@32473")
                    .param("iut", 3)
                    .param("eventSource", "Application"),
            )
            .build();
        assert_eq!(
            f.format(Level::LOG_NOTICE, "An application event", epoch()),
            "<29>1 1970-01-01T00:00:00.000Z hostname appName 123 tag \
             [exampleSDID@32473 iut=\"3\" eventSource=\"Application\"] An application event"
        );

        f.add_structured_data(StructuredElement::new("examplePriority@32473").param("class", "high"));
        assert_eq!(
            f.format(Level::LOG_NOTICE, "", epoch()),
            "<29>1 1970-01-01T00:00:00.000Z hostname appName 123 tag \
             [exampleSDID@32473 iut=\"3\" eventSource=\"Application\"]\
             [examplePriority@32473 class=\"high\"]"
        );

        f.set_structured_data(StructuredElement::new("fields").param("arg", 123));
        assert_eq!(f.structured_data().elements().len(), 1);
        assert_eq!(
            f.format(Level::LOG_NOTICE, "", epoch()),
            "<29>1 1970-01-01T00:00:00.000Z hostname appName 123 tag [fields arg=\"123\"]"
        );

        // An element with no parameters is dropped
        f.set_structured_data(StructuredElement::new("fields"));
        assert_eq!(
            f.format(Level::LOG_NOTICE, "", epoch()),
            "<29>1 1970-01-01T00:00:00.000Z hostname appName 123 tag -"
        );
    }

    #[test]
    fn test_well_known_sd_ids() {
        let mut f = builder()
            .time_quality(TimeQuality {
                tz_known: true,
                is_synced: false,
                sync_accuracy: 50,
            })
            .build();
        assert_eq!(
            f.format(Level::LOG_ERR, "content", epoch()),
            "<27>1 1970-01-01T00:00:00.000Z hostname appName 123 tag - \
             [timeQuality tzKnown=\"1\" isSynced=\"0\"] content"
        );

        f.set_time_quality(None);
        f.set_meta(Some(Meta {
            sequence_id: 3_000_000_000,
            sys_up_time: 0,
            language: "en".to_owned(),
        }));
        let first = f.format(Level::LOG_ERR, "content", epoch());
        assert_eq!(
            first,
            "<27>1 1970-01-01T00:00:00.000Z hostname appName 123 tag - \
             [meta sequenceId=\"2147483647\" sysUpTime=\"0\" language=\"en\"] content"
        );
        // The clamp sticks
        assert_eq!(
            f.sd_ids().meta.as_ref().map(|m| m.sequence_id),
            Some(2147483647)
        );
        assert_eq!(f.format(Level::LOG_ERR, "content", epoch()), first);

        f.set_sd_ids(WellKnownSdIds::default());
        f.set_origin(Some(Origin {
            ip: vec!["192.0.2.1".to_owned()],
            ..Default::default()
        }));
        assert_eq!(
            f.format(Level::LOG_ERR, "", epoch()),
            "<27>1 1970-01-01T00:00:00.000Z hostname appName 123 tag - \
             [origin ip=\"192.0.2.1\" enterpriseId=\"\" software=\"\" swVersion=\"\"]"
        );
    }

    #[test]
    fn test_parses() {
        let line = builder()
            .facility(Facility::LOG_DAEMON)
            .structured_data(StructuredElement::new("exampleSDID@32473").param("iut", 3))
            .build()
            .format(Level::LOG_ERR, "content", epoch());
        let msg = syslog_rfc5424::parse_message(&line).unwrap();
        assert_eq!(msg.facility, syslog_rfc5424::SyslogFacility::LOG_DAEMON);
        assert_eq!(msg.severity, syslog_rfc5424::SyslogSeverity::SEV_ERR);
        assert_eq!(msg.version, 1);
        assert_eq!(msg.timestamp, Some(0));
        assert_eq!(msg.hostname.as_deref(), Some("hostname"));
        assert_eq!(msg.appname.as_deref(), Some("appName"));
        assert_eq!(msg.msgid.as_deref(), Some("tag"));
        assert_eq!(
            msg.sd.find_tuple("exampleSDID@32473", "iut").map(|s| s.as_str()),
            Some("3")
        );
        assert_eq!(msg.msg, "content");
    }

    #[test]
    fn test_into_line() {
        let line = Rfc5424::builder()
            .hostname("hostname")
            .app_name("appName")
            .message_id("tag")
            .build()
            .into_line(Level::LOG_ERR, "content");
        assert!(line.starts_with("<27>1 "));
        assert!(line.ends_with(&format!(
            " hostname appName {} tag - content",
            std::process::id()
        )));
    }
}
