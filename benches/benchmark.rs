use criterion::{black_box, criterion_group, criterion_main, Criterion};
use domainics::calendar::{read_events, render_calendar};

fn sample_csv(rows: usize) -> String {
    let mut csv = String::from("Domain Name,Domain expiration date\n");
    for i in 0..rows {
        csv.push_str(&format!("domain-{}.example,{:02}/{:02}/2027\n", i, i % 28 + 1, i % 12 + 1));
    }
    csv
}

fn bench_conversion(c: &mut Criterion) {
    let csv = sample_csv(10_000);
    let events = read_events(csv.as_bytes()).map(|imported| imported.events).unwrap_or_default();

    c.bench_function("read_events 10k rows", |b| b.iter(|| read_events(black_box(csv.as_bytes()))));
    c.bench_function("render_calendar 10k events", |b| {
        b.iter(|| render_calendar(black_box(&events)))
    });
}

criterion_group!(benches, bench_conversion);
criterion_main!(benches);
