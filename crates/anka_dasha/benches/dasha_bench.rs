use anka_dasha::{
    DashaLevel, DateInterval, DrillRequest, FixedRatioTable, Planet, RatioKey, drill, forward,
    partition, retro, rotate,
};
use anka_time::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn antar_bench(c: &mut Criterion) {
    let birth = date(1990, 6, 15);

    let mut group = c.benchmark_group("antar");
    group.bench_function("forward", |b| {
        b.iter(|| forward(black_box(birth), black_box(27), 1))
    });
    group.bench_function("retro", |b| {
        b.iter(|| retro(black_box(birth), 1, black_box(4)))
    });
    group.finish();
}

fn partition_bench(c: &mut Criterion) {
    let iv = DateInterval::new(date(2008, 6, 15), date(2017, 6, 15));
    let seq = rotate(1).unwrap();

    let mut group = c.benchmark_group("partition");
    group.bench_function("proportional", |b| {
        b.iter(|| partition(black_box(iv), &seq, DashaLevel::Antar))
    });
    group.finish();
}

fn drill_bench(c: &mut Criterion) {
    let mut table = FixedRatioTable::new();
    table.insert(RatioKey::Parent(Planet::Guru), [40, 12, 30, 25, 18, 44, 9, 21, 33]).unwrap();
    let req = DrillRequest::new(
        DashaLevel::Pratyantar,
        date(2012, 3, 1),
        date(2013, 4, 17),
        Planet::Guru,
    );

    let mut group = c.benchmark_group("drill");
    group.bench_function("pratyantar_plain", |b| {
        b.iter(|| drill(black_box(&req), None))
    });
    group.bench_function("pratyantar_override", |b| {
        b.iter(|| drill(black_box(&req), Some(&table)))
    });
    group.finish();
}

criterion_group!(benches, antar_bench, partition_bench, drill_bench);
criterion_main!(benches);
