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

//! The PRI part of a syslog header.
//!
//! Every line this crate produces opens with `<PRI>`, the facility & severity packed into one
//! integer. [`Priority`] owns that packing. Raw inputs are masked & then saturated into
//! [`Priority::MIN`]..=[`Priority::MAX`]; nothing is ever rejected.

use crate::facility::{Facility, Level};

use tracing::trace;

/// Bits of a raw priority that carry the facility (`<syslog.h>`'s `LOG_FACMASK`)
pub const FACILITY_MASK: i32 = 0x03f8;
/// Bits of a raw priority that carry the severity (`<syslog.h>`'s `LOG_PRIMASK`)
pub const SEVERITY_MASK: i32 = 0x07;

/// A syslog PRI value, guaranteed to lie in `[0, 191]`
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// `kern.emerg`
    pub const MIN: Priority = Priority(0);
    /// `local7.debug`
    pub const MAX: Priority = Priority(Facility::LOG_LOCAL7 as u8 | Level::LOG_DEBUG as u8);

    /// Pack a facility & severity.
    pub fn build(facility: Facility, level: Level) -> Priority {
        Priority::from_raw(facility as i32, level as i32)
    }

    /// Pack raw facility & severity values: `(facility & FACILITY_MASK) | (severity &
    /// SEVERITY_MASK)`, saturated into the legal range.
    pub fn from_raw(facility: i32, severity: i32) -> Priority {
        Priority::clamp((facility & FACILITY_MASK) | (severity & SEVERITY_MASK))
    }

    /// Saturate `raw` into [`Priority::MIN`]..=[`Priority::MAX`].
    pub fn clamp(raw: i32) -> Priority {
        let clamped = raw.clamp(Priority::MIN.0 as i32, Priority::MAX.0 as i32);
        if clamped != raw {
            trace!(raw, clamped, "priority saturated");
        }
        // `clamped` is in [0, 191], so the cast is lossless
        Priority(clamped as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn facility(self) -> Facility {
        // Every value up to `MAX` carries one of the twenty-four facilities
        Facility::from_pri_bits(self.0).unwrap_or(Facility::LOG_LOCAL7)
    }

    pub fn level(self) -> Level {
        Level::from_pri_bits(self.0)
    }
}

impl std::default::Default for Priority {
    fn default() -> Self {
        Priority::MIN
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::convert::From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        p.0
    }
}
