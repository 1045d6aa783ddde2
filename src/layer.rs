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

//! [syslog-formatter](crate) [`Layer`] implementations.
//!
//! [`Layer`]: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/trait.Layer.html
//!
//! A [`Layer`] strings together a [`TracingFormatter`] (event to message), a [`SyslogFormatter`]
//! (message to line) & a [`Sink`] (line to wherever). Consumers of this crate are free to
//! implement any of those traits for themselves.
//!
//! Events emitted by this crate itself (truncation & clamping notices, for instance) are never
//! formatted by a [`Layer`]; doing so would recurse.

use crate::{
    error::Result,
    facility::Level,
    formatter::{AnyFormatter, Format, SyslogFormatter},
    process::ProcessInfo,
    rfc5424::Rfc5424,
    sink::{Sink, WriterSink},
    tracing::{MessageFieldFormatter, TracingFormatter},
};

use tracing::Event;
use tracing_subscriber::layer::Context;

use std::sync::Mutex;

/// The crate's own target; its modules' targets are `syslog_formatter::...`
const OWN_TARGET: &str = "syslog_formatter";

fn is_own_target(target: &str) -> bool {
    target
        .strip_prefix(OWN_TARGET)
        .map_or(false, |rest| rest.is_empty() || rest.starts_with("::"))
}

/// A [`tracing-subscriber`]-compliant [`Layer`] implementation that turns [`Event`]s & [`Span`]s
/// into syslog lines.
///
/// [`tracing-subscriber`]: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/index.html
/// [`Layer`]: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/trait.Layer.html
/// [`Span`]: https://docs.rs/tracing/0.1.35/tracing/struct.Span.html
/// [`Event`]: https://docs.rs/tracing/0.1.35/tracing/struct.Event.html
///
/// The syslog formatter sits behind a [`Mutex`] since formatting may update its state (the `meta`
/// SD-ID's sequence number, for instance).
pub struct Layer<S, F: SyslogFormatter, TF: TracingFormatter<S>, K: Sink>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    syslog_formatter: Mutex<F>,
    tracing_formatter: TF,
    sink: K,
    // The Subscriber type is only here to be handed to the TracingFormatter
    subscriber_type: std::marker::PhantomData<S>,
}

impl<S, F, TF, K> Layer<S, F, TF, K>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    F: SyslogFormatter,
    TF: TracingFormatter<S>,
    K: Sink,
{
    /// construct Layer with custom inners
    pub fn new(syslog_formatter: F, tracing_formatter: TF, sink: K) -> Self {
        Layer {
            syslog_formatter: Mutex::new(syslog_formatter),
            tracing_formatter,
            sink,
            subscriber_type: std::marker::PhantomData,
        }
    }
    pub fn sink(&self) -> &K {
        &self.sink
    }
    /// Format & sink whatever the tracing formatter made of an entity. Failures are reported as
    /// events of this crate's own, which this layer ignores.
    fn emit(&self, message: Result<Option<(Level, String)>>) {
        let sent = message.and_then(|message| match message {
            Some((level, msg)) => self.sink.send(&self.format(level, &msg)),
            None => Ok(()),
        });
        if let Err(err) = sent {
            ::tracing::error!("syslog layer failed: {}", err);
        }
    }
    fn format(&self, level: Level, msg: &str) -> String {
        match self.syslog_formatter.lock() {
            Ok(mut guard) => guard.format(level, msg, None),
            Err(poisoned) => poisoned.into_inner().format(level, msg, None),
        }
    }
}

/// A [`Layer`] implementation with the following characteristics:
///
/// - Uses each event's `message` field as the line's text
/// - Speaks the chosen [`Format`], with facility `LOG_DAEMON`
/// - Delivers the resulting lines to `sink`
impl<S, K> Layer<S, AnyFormatter, MessageFieldFormatter, K>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    K: Sink,
{
    pub fn with_format(format: Format, app_name: &str, tag: &str, sink: K) -> Self {
        Layer::new(
            format.formatter("", app_name, tag, ProcessInfo::detect()),
            MessageFieldFormatter::default(),
            sink,
        )
    }
}

/// A [`Layer`] implementation with the following characteristics:
///
/// - Uses each event's `message` field as the line's text
/// - Speaks RFC 5424 for syslog
/// - Writes the resulting lines to `stderr`
impl<S> Layer<S, Rfc5424, MessageFieldFormatter, WriterSink<std::io::Stderr>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    pub fn stderr() -> Self {
        Layer::new(
            Rfc5424::default(),
            MessageFieldFormatter::default(),
            WriterSink::stderr(),
        )
    }
}

impl<S, F, TF, K> tracing_subscriber::layer::Layer<S> for Layer<S, F, TF, K>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    F: SyslogFormatter + Send + 'static,
    TF: TracingFormatter<S> + 'static,
    K: Sink + 'static,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        if is_own_target(event.metadata().target()) {
            return;
        }
        self.emit(self.tracing_formatter.on_event(event, ctx))
    }
    fn on_enter(&self, id: &tracing_core::span::Id, ctx: Context<'_, S>) {
        self.emit(self.tracing_formatter.on_enter(id, ctx))
    }
    fn on_exit(&self, id: &tracing_core::span::Id, ctx: Context<'_, S>) {
        self.emit(self.tracing_formatter.on_exit(id, ctx))
    }
}
