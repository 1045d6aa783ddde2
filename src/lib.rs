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

//! Render log events as [syslog] lines
//!
//! [syslog]: https://en.wikipedia.org/wiki/Syslog
//!
//! # Introduction
//!
//! A syslog line is a small, stubbornly under-specified thing. Two RFCs describe it ([3164] &
//! [5424]), and the daemons in the wild accept those plus a handful of house dialects. This crate
//! turns a severity, a message & a few header fields into a line in any of four formats:
//!
//! [3164]: https://datatracker.ietf.org/doc/html/rfc3164
//! [5424]: https://datatracker.ietf.org/doc/html/rfc5424
//!
//! | [`Format`]          | layout                                                         |
//! |---------------------|----------------------------------------------------------------|
//! | `Default`           | `<PRI> TIMESTAMP HOSTNAME TAG[PID]: CONTENT`                   |
//! | `Unix`              | `<PRI>TIMESTAMP TAG[PID]: CONTENT`                             |
//! | `Rfc3164`           | `<PRI>TIMESTAMP HOSTNAME TAG[PID]: CONTENT`                    |
//! | `Rfc5424`           | `<PRI>1 TIMESTAMP HOSTNAME APP-NAME PID MSGID SD CONTENT`      |
//!
//! RFC 5424 lines may carry [structured data](crate::structured_data) & the well-known SD-IDs
//! `timeQuality`, `origin` & `meta` ([`sd_id`]).
//!
//! Formatting never fails: over-long header fields are truncated from the start, out-of-range
//! numbers are clamped, and fields that can't be determined fall back to the empty string or the
//! NILVALUE (`-`).
//!
//! # Usage
//!
//! One-shot rendering:
//!
//! ```rust
//! use syslog_formatter::{facility::Level, formatter::Format};
//! let line = Format::Rfc3164.render(Level::LOG_ERR, "hostname", "", "tag", "disk full");
//! assert!(line.starts_with("<27>"));
//! assert!(line.ends_with(&format!(" hostname tag[{}]: disk full", std::process::id())));
//! ```
//!
//! Formatters are configured with builders & may be kept around to format many lines:
//!
//! ```rust
//! use syslog_formatter::{
//!     facility::{Facility, Level},
//!     formatter::SyslogFormatter,
//!     rfc5424::Rfc5424,
//!     structured_data::StructuredElement,
//! };
//!
//! let mut f = Rfc5424::builder()
//!     .facility(Facility::LOG_LOCAL4)
//!     .hostname("mymachine.example.com")
//!     .app_name("evntslog")
//!     .message_id("ID47")
//!     .structured_data(
//!         StructuredElement::new("exampleSDID@32473")
//!             .param("iut", 3)
//!             .param("eventSource", "Application"),
//!     )
//!     .build();
//! let line = f.format(Level::LOG_NOTICE, "An application event", None);
//! assert!(line.starts_with("<165>1 "));
//! ```
//!
//! Finally, a [`tracing-subscriber`] [`Layer`](layer::Layer) sends [`tracing`] events through any
//! formatter to a [`Sink`](sink::Sink):
//!
//! [`tracing-subscriber`]: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/index.html
//! [`tracing`]: https://docs.rs/tracing/latest/tracing/index.html
//!
//! ```rust
//! use syslog_formatter::{formatter::Format, layer::Layer, sink::MemorySink};
//! use tracing_subscriber::registry::Registry;
//! use tracing_subscriber::layer::SubscriberExt; // Needed to get `with()`
//!
//! let sink = MemorySink::new();
//! let subscriber = Registry::default().with(Layer::with_format(
//!     Format::Rfc5424,
//!     "myapp",
//!     "startup",
//!     sink.clone(),
//! ));
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!("Hello, world!");
//! });
//! assert_eq!(sink.lines().len(), 1);
//! ```

pub mod byte_utils;
pub mod error;
pub mod facility;
pub mod formatter;
pub mod header;
pub mod layer;
pub mod legacy;
pub mod priority;
pub mod process;
pub mod rfc3164;
pub mod rfc5424;
pub mod sd_id;
pub mod sink;
pub mod structured_data;
pub mod timestamp;
pub mod tracing;

pub use crate::formatter::{Format, SyslogFormatter};
