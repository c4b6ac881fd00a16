//! Validator performance benchmarks.
//!
//! Measures schema validation, the sample checks and a full driver run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sschecker::input::Table;
use sschecker::validation::{check_pairs, is_ordered};
use sschecker::{CheckerConfig, Mode, ReportDriver, Role, SampleSheet, SectionParser, validate};

const TSO500_SHEET: &str = include_str!("../tests/fixtures/tso500_samplesheet.csv");

/// Data table with `pairs` D/R sample pairs and the TSO500 columns.
fn generate_data_table(pairs: usize) -> Table {
    let columns = [
        "Sample_ID",
        "Sample_Name",
        "Index_ID",
        "index",
        "index2",
        "I7_Index_ID",
        "I5_Index_ID",
        "Description",
        "Pair_ID",
        "Sample_Type",
    ];
    let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());

    for pair in 0..pairs {
        for (offset, kind) in [(0, "DNA"), (1, "RNA")] {
            let n = pair * 2 + offset + 1;
            let id = format!("{}-{:08}-{}", pair + 1, pair + 1, &kind[..1]);
            let udp = format!("UDP{:04}", n);
            table.push_values(vec![
                id.clone(),
                id,
                udp.clone(),
                "GAACTGAGCG".to_string(),
                "TCGTGGAGCG".to_string(),
                udp.clone(),
                udp,
                format!("{}-{}", pair + 1, kind),
                (pair + 1).to_string(),
                kind.to_string(),
            ]);
        }
    }

    table
}

/// Benchmark data-table schema validation.
fn bench_validate_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_table");
    let config = CheckerConfig::tso500().unwrap();
    let schema = config.schemas.get(Role::Data).unwrap();

    for pairs in [8, 48, 384].iter() {
        let table = generate_data_table(*pairs);
        group.bench_with_input(BenchmarkId::new("pairs", pairs), &table, |b, table| {
            b.iter(|| black_box(validate(table, schema)))
        });
    }

    group.finish();
}

/// Benchmark pairing and ordering checks.
fn bench_sample_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_checks");

    for pairs in [48, 384].iter() {
        let table = generate_data_table(*pairs);
        let ids = table.column("Sample_ID").unwrap();
        let index_ids = table.column("Index_ID").unwrap();

        group.bench_with_input(BenchmarkId::new("check_pairs", pairs), &ids, |b, ids| {
            b.iter(|| black_box(check_pairs(ids).unwrap()))
        });
        group.bench_with_input(
            BenchmarkId::new("is_ordered", pairs),
            &index_ids,
            |b, values| b.iter(|| black_box(is_ordered(values))),
        );
    }

    group.finish();
}

/// Benchmark a full strict driver run over the fixture samplesheet.
fn bench_driver(c: &mut Criterion) {
    let config = CheckerConfig::tso500().unwrap();
    let parser = SectionParser::with_config(config.samplesheet.parser_config().unwrap());
    let document = parser.parse_str(TSO500_SHEET).unwrap();
    let sheet = SampleSheet::from_document(document, &config.samplesheet).unwrap();

    c.bench_function("driver_strict", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            black_box(
                ReportDriver::new(&config, Mode::Strict)
                    .run(&sheet, None, &mut out)
                    .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_validate_table, bench_sample_checks, bench_driver);
criterion_main!(benches);
