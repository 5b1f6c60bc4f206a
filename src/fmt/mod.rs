//! Header rendering for the write hot path — appends straight into the
//! caller's scratch buffer, no intermediate strings.

use crate::flags::Flags;
use chrono::{DateTime, Datelike, Local, Timelike, Utc};

/// File name substituted when no call site is available.
pub const UNKNOWN_FILE: &str = "???";

/// Fixed-width zero-padded decimal, assembled in reverse into a stack array
/// and appended in one extend. Width 0 pads nothing.
pub fn push_uint(buf: &mut Vec<u8>, value: u64, width: usize) {
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    let mut value = value;
    let mut width = width.min(digits.len());
    loop {
        pos -= 1;
        digits[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        width = width.saturating_sub(1);
        if value == 0 && width == 0 {
            break;
        }
    }
    buf.extend_from_slice(&digits[pos..]);
}

/// Final path segment after the last `/`; a path with no separator is used unchanged.
#[must_use]
pub fn short_file(path: &str) -> &str {
    path.rfind('/').map_or(path, |i| &path[i + 1..])
}

/// Appends the line header in fixed field order: prefix, severity tag, date,
/// time, caller file:line. Fields whose flag bit is unset contribute zero
/// bytes. Pure over its inputs apart from the buffer it extends, so the same
/// tuple always renders byte-identically.
///
/// The caller holds the instance lock; this function takes none and performs
/// no I/O.
pub fn format_header(
    buf: &mut Vec<u8>,
    flags: Flags,
    now: DateTime<Local>,
    caller: Option<(&str, u32)>,
    prefix: &str,
    tag: &str,
) {
    buf.extend_from_slice(prefix.as_bytes());
    if !tag.is_empty() {
        buf.extend_from_slice(tag.as_bytes());
        buf.push(b' ');
    }
    if flags.wants_clock() {
        let t = if flags.contains(Flags::UTC) {
            now.with_timezone(&Utc).fixed_offset()
        } else {
            now.fixed_offset()
        };
        if flags.contains(Flags::DATE) {
            push_uint(buf, u64::from(t.year().max(0).unsigned_abs()), 4);
            buf.push(b'/');
            push_uint(buf, u64::from(t.month()), 2);
            buf.push(b'/');
            push_uint(buf, u64::from(t.day()), 2);
            buf.push(b' ');
        }
        if flags.intersects(Flags::TIME.union(Flags::MICROSECONDS)) {
            push_uint(buf, u64::from(t.hour()), 2);
            buf.push(b':');
            push_uint(buf, u64::from(t.minute()), 2);
            buf.push(b':');
            push_uint(buf, u64::from(t.second()), 2);
            if flags.contains(Flags::MICROSECONDS) {
                buf.push(b'.');
                push_uint(buf, u64::from(t.nanosecond() / 1_000), 6);
            }
            buf.push(b' ');
        }
    }
    if flags.wants_caller() {
        let (file, line) = caller.unwrap_or((UNKNOWN_FILE, 0));
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(file)
        } else {
            file
        };
        buf.extend_from_slice(file.as_bytes());
        buf.push(b':');
        push_uint(buf, u64::from(line), 0);
        buf.extend_from_slice(b": ");
    }
}
