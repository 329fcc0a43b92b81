//! Aggregation benchmarks over a synthetic in-memory dataset.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flowscope::aggregate::{outlier_trimmed_histogram, proto_crosstab, value_counts};
use flowscope::classify::classify;
use flowscope::config::AggregationConfig;
use flowscope::parser::{Dataset, FlowRecord};
use flowscope::AnalysisReport;

fn make_dataset(rows: usize) -> Dataset {
    let protos = ["tcp", "udp", "icmp"];
    let records = (0..rows)
        .map(|i| FlowRecord {
            proto: protos[i % protos.len()].to_string(),
            src_addr: format!("147.32.84.{}", i % 250),
            dst_addr: format!("77.75.73.{}", i % 60),
            state: if i % 3 == 0 { "CON" } else { "FIN" }.to_string(),
            dur: Some(0.5 + (i % 100) as f64 / 10.0),
            tot_pkts: Some(1 + (i % 40) as u64),
            tot_bytes: Some(60 + (i % 9000) as u64),
            label: Some(if i % 10 == 0 {
                "flow=From-Botnet-V1-TCP-CC".to_string()
            } else {
                "flow=Background-TCP-Established".to_string()
            }),
            ..FlowRecord::default()
        })
        .collect();
    let mut dataset = Dataset::new(records);
    classify(&mut dataset);
    dataset
}

fn bench_value_counts(c: &mut Criterion) {
    let dataset = make_dataset(50_000);
    c.bench_function("value_counts_src_50k", |b| {
        b.iter(|| black_box(value_counts(black_box(&dataset), |r| Some(r.src_addr.as_str()))))
    });
}

fn bench_crosstab(c: &mut Criterion) {
    let dataset = make_dataset(50_000);
    c.bench_function("proto_crosstab_50k", |b| {
        b.iter(|| black_box(proto_crosstab(black_box(&dataset))))
    });
}

fn bench_histogram(c: &mut Criterion) {
    let dataset = make_dataset(50_000);
    c.bench_function("bytes_histogram_50k", |b| {
        b.iter(|| {
            black_box(outlier_trimmed_histogram(
                black_box(&dataset),
                |r| r.tot_bytes.map(|v| v as f64),
                0.95,
                50,
            ))
        })
    });
}

fn bench_full_report(c: &mut Criterion) {
    let dataset = make_dataset(50_000);
    let config = AggregationConfig::default();
    c.bench_function("full_report_50k", |b| {
        b.iter(|| black_box(AnalysisReport::build(black_box(&dataset), &config)))
    });
}

criterion_group!(
    benches,
    bench_value_counts,
    bench_crosstab,
    bench_histogram,
    bench_full_report
);
criterion_main!(benches);
