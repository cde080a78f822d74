//! Benchmarks for SQL translation and insert payload encoding
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use iotdb_rest_bench::workload::synthetic::{self, QueryParams};
use iotdb_rest_bench::{sql, InsertTabletPayload, Operation, SensorType};

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");
    let params = QueryParams::default();

    for devices in [1, 10, 100] {
        let schemas = synthetic::device_schemas("g_0", devices, 10, SensorType::Double);

        for operation in [
            Operation::RangeQuery,
            Operation::ValueRangeQuery,
            Operation::GroupByQuery,
        ] {
            let query = synthetic::query(operation, schemas.clone(), &params).unwrap();

            group.bench_function(format!("{}_{}", operation.name().to_lowercase(), devices), |b| {
                b.iter(|| sql::translate(black_box(&query)).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let schema = synthetic::device_schemas("g_0", 1, 10, SensorType::Double).remove(0);

    for rows in [100, 1000, 10000] {
        let batch = synthetic::batch(schema.clone(), 0, 10, rows).unwrap();

        group.throughput(Throughput::Elements(batch.point_count() as u64));

        group.bench_function(format!("transpose_{}", rows), |b| {
            b.iter(|| InsertTabletPayload::encode(black_box(&batch), true))
        });

        let payload = InsertTabletPayload::encode(&batch, true);

        group.bench_function(format!("serialize_{}", rows), |b| {
            b.iter(|| serde_json::to_string(black_box(&payload)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_translate, bench_encode);
criterion_main!(benches);
