//! Tests for header formatting: field order, flag independence, idempotence.

use chrono::{DateTime, Local, TimeZone, Timelike, Utc};
use linelog::Flags;
use linelog::fmt::{format_header, push_uint, short_file};

fn stamp() -> DateTime<Local> {
    Local.with_ymd_and_hms(2009, 1, 23, 1, 23, 23).unwrap()
}

fn render(flags: Flags, caller: Option<(&str, u32)>, prefix: &str, tag: &str) -> String {
    let mut buf = Vec::new();
    format_header(&mut buf, flags, stamp(), caller, prefix, tag);
    String::from_utf8(buf).unwrap()
}

#[test]
fn full_field_order() {
    let flags = Flags::DATE | Flags::TIME | Flags::MICROSECONDS | Flags::SHORT_FILE;
    let header = render(flags, Some(("/a/b/c/d.go", 23)), "mod: ", "warn");
    assert_eq!(header, "mod: warn 2009/01/23 01:23:23.000000 d.go:23: ");
}

#[test]
fn omitted_fields_contribute_nothing() {
    assert_eq!(render(Flags::NONE, None, "", ""), "");
    assert_eq!(render(Flags::NONE, None, "mod: ", "info"), "mod: info ");
    assert_eq!(render(Flags::DATE, None, "", ""), "2009/01/23 ");
    assert_eq!(render(Flags::TIME, None, "", ""), "01:23:23 ");
}

#[test]
fn microseconds_imply_time() {
    assert_eq!(render(Flags::MICROSECONDS, None, "", ""), "01:23:23.000000 ");
}

#[test]
fn subsecond_digits_are_zero_padded() {
    let now = stamp().with_nanosecond(123_456_789).unwrap();
    let mut buf = Vec::new();
    format_header(&mut buf, Flags::MICROSECONDS, now, None, "", "");
    assert_eq!(buf, b"01:23:23.123456 ");

    let now = stamp().with_nanosecond(42_000).unwrap();
    buf.clear();
    format_header(&mut buf, Flags::MICROSECONDS, now, None, "", "");
    assert_eq!(buf, b"01:23:23.000042 ");
}

#[test]
fn long_file_keeps_full_path() {
    let header = render(Flags::LONG_FILE, Some(("/a/b/c/d.go", 23)), "", "");
    assert_eq!(header, "/a/b/c/d.go:23: ");
}

#[test]
fn short_file_overrides_long() {
    let flags = Flags::LONG_FILE | Flags::SHORT_FILE;
    let header = render(flags, Some(("/a/b/c/d.go", 23)), "", "");
    assert_eq!(header, "d.go:23: ");
}

#[test]
fn missing_caller_renders_sentinel() {
    assert_eq!(render(Flags::SHORT_FILE, None, "", ""), "???:0: ");
}

#[test]
fn utc_flag_converts_the_timestamp() {
    // Start from a known UTC instant so the assertion holds in any local zone.
    let now = Utc
        .with_ymd_and_hms(2009, 1, 23, 1, 23, 23)
        .unwrap()
        .with_timezone(&Local);
    let mut buf = Vec::new();
    format_header(&mut buf, Flags::STD | Flags::UTC, now, None, "", "");
    assert_eq!(buf, b"2009/01/23 01:23:23 ");
}

#[test]
fn formatting_is_idempotent() {
    let flags = Flags::STD | Flags::MICROSECONDS | Flags::LONG_FILE;
    let first = render(flags, Some(("src/net.rs", 7)), "p: ", "debug");
    let second = render(flags, Some(("src/net.rs", 7)), "p: ", "debug");
    assert_eq!(first, second);
}

#[test]
fn short_file_takes_the_final_segment() {
    assert_eq!(short_file("/a/b/c/d.go"), "d.go");
    assert_eq!(short_file("src/logger/mod.rs"), "mod.rs");
    assert_eq!(short_file("d.go"), "d.go");
}

#[test]
fn push_uint_widths() {
    let cases: &[(u64, usize, &str)] = &[
        (0, 0, "0"),
        (23, 0, "23"),
        (5, 2, "05"),
        (123, 2, "123"),
        (7, 4, "0007"),
        (123_123, 6, "123123"),
        (2009, 4, "2009"),
    ];
    for &(value, width, expected) in cases {
        let mut buf = Vec::new();
        push_uint(&mut buf, value, width);
        assert_eq!(buf, expected.as_bytes(), "value={value} width={width}");
    }
}
