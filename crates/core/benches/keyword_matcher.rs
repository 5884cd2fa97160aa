use criterion::{black_box, criterion_group, criterion_main, Criterion};
use autooptix_core::{enrich, find_first_match, Catalogue};
use autooptix_domain::{CellValue, Table};
use uuid::Uuid;

fn keywords(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("application {i} login failure")).collect()
}

fn lookup(count: usize) -> Table {
    Table::with_rows(
        ["Subgroup", "UseCase", "L1/L2"],
        (0..count)
            .map(|i| {
                vec![
                    CellValue::from(format!("application {i} login failure")),
                    CellValue::from(format!("Use case {}", i % 25)),
                    CellValue::from(if i % 3 == 0 { "L2" } else { "L1.5" }),
                ]
            })
            .collect(),
    )
}

fn tickets(count: usize) -> Table {
    Table::with_rows(
        ["Description"],
        (0..count)
            .map(|i| vec![CellValue::from(format!("user reports application {} login failure", i % 400))])
            .collect(),
    )
}

fn bench_find_first_match(c: &mut Criterion) {
    let list = keywords(500);
    c.bench_function("find_first_match_substring_late", |b| {
        b.iter(|| find_first_match(black_box("application 450 login failure on start"), &list))
    });
    c.bench_function("find_first_match_no_match", |b| {
        b.iter(|| find_first_match(black_box("printer out of toner on floor three"), &list))
    });
}

fn bench_enrich(c: &mut Criterion) {
    let catalogue = Catalogue::from_table(&lookup(500)).unwrap();
    let input = tickets(1_000);
    c.bench_function("enrich_1000_rows_500_keywords", |b| {
        b.iter(|| enrich(black_box(&input), &catalogue, 10, Uuid::nil()).unwrap())
    });
}

criterion_group!(benches, bench_find_first_match, bench_enrich);
criterion_main!(benches);
