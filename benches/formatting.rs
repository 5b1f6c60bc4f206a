use chrono::{DateTime, Local, TimeZone};
use criterion::{Criterion, criterion_group, criterion_main};
use linelog::Flags;
use linelog::fmt::{format_header, push_uint};
use std::hint::black_box;

fn stamp() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap()
}

fn bench_format_header(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_header");
    let now = stamp();
    let caller = Some(("/src/net/listener.rs", 214_u32));

    group.bench_function("std_short", |b| {
        let flags = Flags::STD.union(Flags::SHORT_FILE);
        let mut buf = Vec::with_capacity(128);
        b.iter(|| {
            buf.clear();
            format_header(&mut buf, black_box(flags), now, caller, "net: ", "info");
            black_box(buf.len())
        });
    });

    group.bench_function("micros_long", |b| {
        let flags = Flags::STD
            .union(Flags::MICROSECONDS)
            .union(Flags::LONG_FILE);
        let mut buf = Vec::with_capacity(128);
        b.iter(|| {
            buf.clear();
            format_header(&mut buf, black_box(flags), now, caller, "", "debug");
            black_box(buf.len())
        });
    });

    group.finish();
}

fn bench_push_uint(c: &mut Criterion) {
    c.bench_function("push_uint_width6", |b| {
        let mut buf = Vec::with_capacity(32);
        b.iter(|| {
            buf.clear();
            push_uint(&mut buf, black_box(123_123), 6);
            black_box(buf.len())
        });
    });
}

criterion_group!(benches, bench_format_header, bench_push_uint);
criterion_main!(benches);
