use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hours_core::{decode, encode, WeeklySchedule};

const JSON_INPUT: &str = r#"{"days": {"monday": {"enabled": true, "slots": [{"from": "11:00", "to": "21:00"}]}, "tuesday": {"enabled": false}, "friday": {"enabled": true, "slots": [{"from": "09:00", "to": "17:00"}, {"from": "18:00", "to": "22:00"}]}}}"#;
const COMPACT_INPUT: &str = "d0=1@11:00-21:00;d1=0;d2=1@09:00-17:00,18:00-22:00;d3=0;d4=1@11:00-21:00;d5=1@11:00-23:00;d6=0";

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_json", |b| {
        b.iter(|| decode(black_box(Some(JSON_INPUT))))
    });
    c.bench_function("decode_compact", |b| {
        b.iter(|| decode(black_box(Some(COMPACT_INPUT))))
    });
}

fn bench_encode(c: &mut Criterion) {
    let schedule = WeeklySchedule::default();
    c.bench_function("encode_full_week", |b| {
        b.iter(|| encode(black_box(&schedule)))
    });
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
