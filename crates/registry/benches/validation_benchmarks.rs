use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use taxid_registry::{validate, validate_many, IdentifierKind};

fn bench_single_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    group.bench_function("gstin", |b| {
        b.iter(|| validate(IdentifierKind::Gstin, black_box("27AAPFU0939F1ZV")))
    });
    group.bench_function("nif", |b| {
        b.iter(|| validate(IdentifierKind::Nif, black_box("12345678Z")))
    });
    group.bench_function("jp_corporate_number", |b| {
        b.iter(|| validate(IdentifierKind::JpCorporateNumber, black_box("2000012345678")))
    });
    group.bench_function("uk_nino", |b| {
        b.iter(|| validate(IdentifierKind::UkNino, black_box("AA123456C")))
    });
    group.finish();
}

fn bench_batch_validation(c: &mut Criterion) {
    // A realistic import batch: mostly valid, some checksum failures.
    let batch: Vec<String> = (0..1_000)
        .map(|i| {
            if i % 7 == 0 {
                "27AAPFU0939F1ZX".to_string()
            } else {
                "27AAPFU0939F1ZV".to_string()
            }
        })
        .collect();

    let mut group = c.benchmark_group("validate_many");
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function(BenchmarkId::new("gstin", batch.len()), |b| {
        b.iter(|| validate_many(IdentifierKind::Gstin, black_box(&batch)))
    });
    group.finish();
}

criterion_group!(benches, bench_single_validation, bench_batch_validation);
criterion_main!(benches);
