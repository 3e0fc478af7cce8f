// benches/extraction.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use fbstats_scrape::{
    browser::{fake::TableFixture, Wait},
    config::settings::{Settings, Timeouts},
    progress::NullProgress,
    scrape,
};

const HEADERS: [&str; 8] = [
    "Goals", "Expected goals", "Big chances created", "Assists",
    "Accurate passes %", "Tackles", "Minutes played", "Rating",
];

fn offline() -> Settings {
    Settings { timeouts: Timeouts::immediate(), ..Settings::default() }
}

fn bench_extraction(c: &mut Criterion) {
    let settings = offline();
    let map = &settings.pages;

    let mut one = TableFixture::new(map, &HEADERS).generated_page(20).build();
    let specs = scrape::column_specs(&HEADERS.map(String::from), map);
    let wait = Wait::none();

    c.bench_function("extract_page_20x10", |b| {
        b.iter(|| {
            let cols = scrape::extract_page(&mut one, map, black_box(&specs), &wait).unwrap();
            black_box(cols.len())
        })
    });

    c.bench_function("full_scan_5_pages", |b| {
        b.iter(|| {
            let mut fx = TableFixture::new(map, &HEADERS);
            for _ in 0..5 {
                fx = fx.generated_page(20);
            }
            let mut fake = fx.build();
            let mapping = scrape::establish_schema(&mut fake, &settings).unwrap();
            let ds = scrape::scan_remaining_pages(&mut fake, mapping, &settings, &mut NullProgress).unwrap();
            black_box(ds.row_count())
        })
    });
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
