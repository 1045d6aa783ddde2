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

/// Produce a [`Vec`] of bytes from an [`OsString`](std::ffi::OsString).
#[cfg(unix)]
pub fn bytes_from_os_str(s: std::ffi::OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    s.into_vec()
}

#[cfg(not(unix))]
pub fn bytes_from_os_str(s: std::ffi::OsString) -> Vec<u8> {
    s.to_string_lossy().as_bytes().to_vec()
}

/// Produce a [`String`] from an [`OsString`](std::ffi::OsString), replacing anything that isn't
/// UTF-8.
pub fn string_from_os_str(s: std::ffi::OsString) -> String {
    String::from_utf8_lossy(&bytes_from_os_str(s)).into_owned()
}

/// Keep (at most) the trailing `max` bytes of `s`.
///
/// Long names & paths are most distinctive at their ends (`/usr/local/libexec/foo-daemon`), so
/// the leading bytes are the ones dropped. If the cut would land inside a multi-byte character,
/// the cut moves forward to the next character boundary; the result is then shorter than `max`.
pub fn truncate_start(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut start = s.len() - max;
    while !s.is_char_boundary(start) {
        start += 1;
    }
    &s[start..]
}
