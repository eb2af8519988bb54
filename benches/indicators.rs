use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dashboard_indicators::common::to_points;
use dashboard_indicators::{bollinger, ema, rsi, sma, Bar, OverlayConfig, Overlays, Series};

// One year of daily closes, the dashboard's longest range
fn closes(n: usize) -> Vec<f64> {
    (0..n).map(|i| 150.0 + (i as f64 * 0.13).sin() * 8.0 + i as f64 * 0.02).collect()
}

fn series(n: usize) -> Series {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let bars = closes(n)
        .into_iter()
        .enumerate()
        .map(|(i, c)| Bar {
            date: start + Days::new(i as u64),
            open: c - 0.4,
            high: c + 1.0,
            low: c - 1.0,
            close: c,
            volume: 1_000_000 + i as u64,
        })
        .collect();
    Series::new(bars).unwrap()
}

fn bench_indicators(c: &mut Criterion) {
    let data = closes(252);
    let points = to_points(&data);

    c.bench_function("sma_50", |b| b.iter(|| sma(black_box(&data), 50)));
    c.bench_function("ema_20", |b| b.iter(|| ema(black_box(&points), 20)));
    c.bench_function("rsi_14", |b| b.iter(|| rsi(black_box(&data), 14)));
    c.bench_function("bollinger_20", |b| b.iter(|| bollinger(black_box(&data), 20, 2.0)));

    let s = series(252);
    let config = OverlayConfig::default();
    c.bench_function("overlays_1y", |b| b.iter(|| Overlays::compute(black_box(&s), &config)));
}

criterion_group!(benches, bench_indicators);
criterion_main!(benches);
