//! Parser performance benchmarks.
//!
//! Measures section parsing across sample counts, from memory and from disk.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sschecker::{SectionParser, SheetProfile};
use std::io::Write;
use tempfile::NamedTempFile;

/// Ten-base index sequence derived from a number.
fn index_sequence(mut n: usize) -> String {
    let mut seq = String::with_capacity(10);
    for _ in 0..10 {
        seq.push(['A', 'C', 'G', 'T'][n % 4]);
        n /= 4;
    }
    seq
}

/// Generate a TSO500 samplesheet with `pairs` D/R sample pairs.
fn generate_samplesheet(pairs: usize) -> String {
    let mut data = String::new();
    data.push_str("[Header],,,\nRunName,240115_01,,\nInstrumentType,NovaSeq6000,,\n,,,\n");
    data.push_str("[Reads],,,\nRead1Cycles,101,,\nRead2Cycles,101,,\n,,,\n");
    data.push_str("[TSO500S_Settings],,,\nSoftwareVersion,1.0.0,,\nAdapterBehavior,trim,,\n,,,\n");
    data.push_str("[NSWHP],,,\nSequencing Site,JHH,,\nInstrument ID,A00532,,\n,,,\n");

    data.push_str("[TSO500S_Data]\n");
    data.push_str("Sample_ID,Sample_Name,Index_ID,index,index2,I7_Index_ID,I5_Index_ID,Description,Pair_ID,Sample_Type\n");
    for pair in 0..pairs {
        for (offset, kind) in [(0, "D"), (1, "R")] {
            let n = pair * 2 + offset;
            let id = format!("{}-{:08}-{}", pair + 1, pair + 1, kind);
            let udp = format!("UDP{:04}", n + 1);
            data.push_str(&format!(
                "{id},{id},{udp},{},{},{udp},{udp},{}-{}NA,{},{}NA\n",
                index_sequence(n),
                index_sequence(n + 7),
                pair + 1,
                kind,
                pair + 1,
                kind,
            ));
        }
    }

    data.push_str("[BCLConvert_Settings],,,\nSoftwareVersion,3.6.3,,\n,,,\n");
    data.push_str("[BCLConvert_Data]\nSample_ID,index,index2\n");
    for pair in 0..pairs {
        for (offset, kind) in [(0, "D"), (1, "R")] {
            let n = pair * 2 + offset;
            data.push_str(&format!(
                "{}-{:08}-{},{},{}\n",
                pair + 1,
                pair + 1,
                kind,
                index_sequence(n),
                index_sequence(n + 7)
            ));
        }
    }

    data
}

/// Benchmark parsing in-memory text of various sizes.
fn bench_parse_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_str");
    let parser = SectionParser::with_config(SheetProfile::tso500().parser_config().unwrap());

    for pairs in [8, 48, 384].iter() {
        let data = generate_samplesheet(*pairs);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("pairs", pairs), &data, |b, data| {
            b.iter(|| black_box(parser.parse_str(data).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark parsing from disk, including hashing.
fn bench_parse_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_file");
    let parser = SectionParser::with_config(SheetProfile::tso500().parser_config().unwrap());

    for pairs in [8, 384].iter() {
        let data = generate_samplesheet(*pairs);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("pairs", pairs), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| black_box(parser.parse_file(temp.path()).unwrap()),
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_str, bench_parse_file);
criterion_main!(benches);
