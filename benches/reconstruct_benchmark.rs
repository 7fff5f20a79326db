//! Benchmarks for blockgrid reconstruction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic analysis responses.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic response JSON with `tables` tables of `size` x `size` cells.
fn create_test_response(tables: usize, size: usize) -> String {
    let mut blocks = Vec::new();

    for t in 0..tables {
        let cell_ids: Vec<String> = (0..size * size).map(|c| format!("\"t{}c{}\"", t, c)).collect();
        blocks.push(format!(
            r#"{{"BlockType":"TABLE","Id":"t{}","Relationships":[{{"Type":"CHILD","Ids":[{}]}}]}}"#,
            t,
            cell_ids.join(",")
        ));

        for c in 0..size * size {
            blocks.push(format!(
                r#"{{"BlockType":"CELL","Id":"t{t}c{c}","RowIndex":{},"ColumnIndex":{},"Relationships":[{{"Type":"CHILD","Ids":["t{t}w{c}a","t{t}w{c}b"]}}]}}"#,
                c / size + 1,
                c % size + 1,
            ));
            // one confident and one doubtful word per cell
            blocks.push(format!(
                r#"{{"BlockType":"WORD","Id":"t{t}w{c}a","Text":"value{c}","Confidence":97.5}}"#
            ));
            blocks.push(format!(
                r#"{{"BlockType":"WORD","Id":"t{t}w{c}b","Text":"maybe","Confidence":41.0}}"#
            ));
        }
    }

    format!(r#"{{"Blocks":[{}]}}"#, blocks.join(","))
}

/// Benchmark response decoding.
fn bench_decode(c: &mut Criterion) {
    let json = create_test_response(4, 10);

    c.bench_function("decode_response", |b| {
        b.iter(|| blockgrid::parser::decode::pages_from_str(black_box(&json)).unwrap());
    });
}

/// Benchmark full reconstruction at various sizes.
fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct");

    for (tables, size) in [(1, 5), (4, 10), (16, 20)].iter() {
        let json = create_test_response(*tables, *size);
        let pages = blockgrid::parser::decode::pages_from_str(&json).unwrap();

        group.bench_function(format!("{}x{}x{}_parallel", tables, size, size), |b| {
            b.iter(|| blockgrid::reconstruct(black_box(pages.clone()), 50.0).unwrap());
        });

        group.bench_function(format!("{}x{}x{}_sequential", tables, size, size), |b| {
            b.iter(|| {
                blockgrid::BlockGrid::new()
                    .with_confidence(50.0)
                    .sequential()
                    .reconstruct(black_box(pages.clone()))
                    .unwrap()
                    .to_report()
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_reconstruct);
criterion_main!(benches);
