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

//! Turning [`tracing`] events into syslog messages.
//!
//! A syslog line wants a severity & some text; a [`tracing`] [`Event`] offers a level, a target
//! & any number of typed fields. A [`TracingFormatter`] bridges the two, and may decline to
//! produce a line at all. [`MessageFieldFormatter`] is the obvious bridge: the event's `message`
//! field becomes the text, and its level is mapped onto a syslog [`Level`].
//!
//! [`tracing`]: https://docs.rs/tracing/latest/tracing/index.html
//! [`Event`]: https://docs.rs/tracing/0.1.35/tracing/struct.Event.html

use crate::{
    error::{Error, Result},
    facility::Level,
};

use tracing::field::{Field, Visit};
use tracing_subscriber::{layer::Context, registry::LookupSpan};

/// Map [`tracing`] entities to a syslog severity & message text.
///
/// Each method answers `Ok(None)` when the entity shouldn't produce a line. Only events produce
/// lines by default; an implementation that wants span entry & exit logged overrides
/// [`on_enter`](TracingFormatter::on_enter) & [`on_exit`](TracingFormatter::on_exit).
pub trait TracingFormatter<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        ctx: Context<'_, S>,
    ) -> Result<Option<(Level, String)>>;
    fn on_enter(
        &self,
        _id: &tracing_core::span::Id,
        _ctx: Context<'_, S>,
    ) -> Result<Option<(Level, String)>> {
        Ok(None)
    }
    fn on_exit(
        &self,
        _id: &tracing_core::span::Id,
        _ctx: Context<'_, S>,
    ) -> Result<Option<(Level, String)>> {
        Ok(None)
    }
}

/// A [`TracingFormatter`] whose text is the event's `message` field.
///
/// Events without one (`info!(answer = 42)`) are an [`Error::NoMessage`]. Levels go through
/// `From<&tracing::Level>` for [`Level`] unless another mapping is supplied.
#[derive(Clone, Copy)]
pub struct MessageFieldFormatter {
    map_level: fn(&tracing::Level) -> Level,
}

impl std::default::Default for MessageFieldFormatter {
    fn default() -> Self {
        MessageFieldFormatter {
            map_level: |level| Level::from(level),
        }
    }
}

impl MessageFieldFormatter {
    pub fn with_level_mapping(map_level: fn(&tracing::Level) -> Level) -> MessageFieldFormatter {
        MessageFieldFormatter { map_level }
    }
}

/// Picks the `message` field out of an event
#[derive(Default)]
struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0 = Some(value.to_owned());
        }
    }
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        // `info!("...", args)` records its message as `fmt::Arguments`, whose `Debug` output
        // carries no quotes
        if field.name() == "message" {
            self.0 = Some(format!("{:?}", value));
        }
    }
}

impl<S> TracingFormatter<S> for MessageFieldFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: Context<'_, S>,
    ) -> Result<Option<(Level, String)>> {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let text = visitor
            .0
            .ok_or_else(|| Error::no_message(event.metadata().name()))?;
        Ok(Some(((self.map_level)(event.metadata().level()), text)))
    }
}
