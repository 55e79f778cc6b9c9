//! Line header formatting for the output writer
//!
//! A header is assembled from the writer's prefix and a flag bitmask that
//! selects date, time and source-location fields. The bitmask is carried
//! through the logger untouched; only this module interprets it.
//!
//! With all fields enabled a line looks like:
//!
//! ```text
//! app: 2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: message
//! ```

use chrono::{DateTime, Local, Utc};
use std::fmt::Write as _;
use std::panic::Location;

/// Header flag bits, or'ed together
pub mod flags {
    /// The date in the local time zone: `2009/01/23`
    pub const DATE: u32 = 1 << 0;
    /// The time in the local time zone: `01:23:23`
    pub const TIME: u32 = 1 << 1;
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: u32 = 1 << 2;
    /// Full file name and line number: `/a/b/c/d.rs:23`
    pub const LONG_FILE: u32 = 1 << 3;
    /// Final file name element and line number: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: u32 = 1 << 4;
    /// Use UTC rather than the local time zone
    pub const UTC: u32 = 1 << 5;
    /// Initial values for a standard logger
    pub const STD_FLAGS: u32 = DATE | TIME;
}

/// Append the header for one line to `buf`
pub fn format_header(
    buf: &mut String,
    prefix: &str,
    flag_bits: u32,
    now: DateTime<Utc>,
    location: &Location<'_>,
) {
    buf.push_str(prefix);

    if flag_bits & (flags::DATE | flags::TIME | flags::MICROSECONDS) != 0 {
        if flag_bits & flags::UTC != 0 {
            write_time(buf, flag_bits, &now);
        } else {
            write_time(buf, flag_bits, &now.with_timezone(&Local));
        }
    }

    if flag_bits & (flags::SHORT_FILE | flags::LONG_FILE) != 0 {
        let file = if flag_bits & flags::SHORT_FILE != 0 {
            short_file(location.file())
        } else {
            location.file()
        };
        let _ = write!(buf, "{}:{}: ", file, location.line());
    }
}

fn write_time<Tz>(buf: &mut String, flag_bits: u32, time: &DateTime<Tz>)
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if flag_bits & flags::DATE != 0 {
        let _ = write!(buf, "{} ", time.format("%Y/%m/%d"));
    }
    if flag_bits & (flags::TIME | flags::MICROSECONDS) != 0 {
        if flag_bits & flags::MICROSECONDS != 0 {
            let _ = write!(buf, "{} ", time.format("%H:%M:%S%.6f"));
        } else {
            let _ = write!(buf, "{} ", time.format("%H:%M:%S"));
        }
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}
