//! Benchmarks for the seeded generator and the rotations built on it.
//!
//! Run with: cargo bench --bench rng

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rune_almanac::rotation::flash::flash_event;
use rune_almanac::rotation::merchant::{stock_for_runedate, upcoming_stock};
use rune_almanac::{next_bounded_int, AlmanacConfig, Forecast, RuneDate, Seed, Timestamp};

fn random_seeds(count: usize) -> Vec<Seed> {
    let mut rng = StdRng::seed_from_u64(0x5DEE_CE66D);
    (0..count).map(|_| Seed::new(rng.gen())).collect()
}

fn benchmark_bounded_draw(c: &mut Criterion) {
    let seeds = random_seeds(1024);

    let mut group = c.benchmark_group("bounded_draw");
    group.throughput(Throughput::Elements(seeds.len() as u64));

    group.bench_function("single_step", |b| {
        b.iter(|| {
            for seed in &seeds {
                black_box(next_bounded_int(black_box(*seed), 19, 1).ok());
            }
        });
    });

    group.bench_function("ten_steps", |b| {
        b.iter(|| {
            for seed in &seeds {
                black_box(next_bounded_int(black_box(*seed), 19, 10).ok());
            }
        });
    });

    group.finish();
}

fn benchmark_stock(c: &mut Criterion) {
    c.bench_function("stock_for_runedate", |b| {
        let mut day = 8000_i64;
        b.iter(|| {
            day += 1;
            black_box(stock_for_runedate(black_box(RuneDate(day))))
        });
    });

    let from = Timestamp::from_millis(1_735_689_600_000);
    c.bench_function("upcoming_stock_year", |b| {
        b.iter(|| black_box(upcoming_stock(black_box(from), 365)));
    });
}

fn benchmark_forecast(c: &mut Criterion) {
    let config = AlmanacConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let instants: Vec<Timestamp> = (0..256)
        .map(|_| Timestamp::from_millis(rng.gen_range(1_000_000_000_000..2_000_000_000_000)))
        .collect();

    let mut group = c.benchmark_group("forecast");
    group.throughput(Throughput::Elements(instants.len() as u64));

    group.bench_function("flash_event", |b| {
        b.iter(|| {
            for at in &instants {
                black_box(flash_event(black_box(*at)));
            }
        });
    });

    group.bench_function("snapshot", |b| {
        b.iter(|| {
            for at in &instants {
                black_box(Forecast::at(black_box(*at), &config));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_bounded_draw,
    benchmark_stock,
    benchmark_forecast
);
criterion_main!(benches);
