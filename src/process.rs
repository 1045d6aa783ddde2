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

//! A snapshot of the process-wide facts a syslog header draws on.
//!
//! Every syslog header names the host, the program & (usually) the process ID. Rather than
//! query the operating system from deep inside each formatting call, the formatters in this crate
//! read them from a [`ProcessInfo`] handed to their builders. [`ProcessInfo::detect`] performs the
//! queries once; tests (or callers that know better) can supply fixed values instead.

use crate::byte_utils::string_from_os_str;

use tracing::debug;

/// Host name, program name & process ID, as seen by a formatter
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessInfo {
    hostname: Option<String>,
    program: Option<String>,
    pid: Option<u32>,
}

impl ProcessInfo {
    /// Query the operating system for the host name & program name.
    ///
    /// The host name comes from [gethostname()] (by way of the [`hostname`] crate). The program
    /// name is `argv[0]`, falling back to the file name of [`std::env::current_exe`]. Either may
    /// come back empty; the formatters then apply their protocol's fallback. The process ID is
    /// left unset, so that it is read afresh each time a line is rendered.
    ///
    /// [gethostname()]: https://man7.org/linux/man-pages/man2/gethostname.2.html
    pub fn detect() -> ProcessInfo {
        ProcessInfo {
            hostname: local_hostname(),
            program: program_name(),
            pid: None,
        }
    }
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }
    /// The local host name, if it could be determined
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }
    /// The invoking program's name, if it could be determined
    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }
    /// The configured process ID, or else that of the current process
    pub fn pid(&self) -> u32 {
        self.pid.unwrap_or_else(std::process::id)
    }
}

fn local_hostname() -> Option<String> {
    match hostname::get() {
        Ok(hn) => Some(string_from_os_str(hn)).filter(|hn| !hn.is_empty()),
        Err(err) => {
            debug!("failed to look up the local host name: {}", err);
            None
        }
    }
}

fn program_name() -> Option<String> {
    std::env::args_os()
        .next()
        .map(string_from_os_str)
        .filter(|name| !name.is_empty())
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|pbuf| pbuf.file_name().map(|s| s.to_os_string()))
                .map(string_from_os_str)
        })
}
