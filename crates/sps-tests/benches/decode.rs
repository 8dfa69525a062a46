use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sps_decoder::decode_store;
use sps_tests::{REFERENCE_STORE, SetBuilder, StoreBuilder, summary_store};
use sps_types::{FormatClass, ValueType};

fn bench_decode_reference(c: &mut Criterion) {
    c.bench_function("decode_reference", |b| {
        b.iter(|| decode_store(&REFERENCE_STORE).unwrap());
    });
}

fn bench_decode_summary(c: &mut Criterion) {
    let bytes = summary_store();
    c.bench_function("decode_summary", |b| {
        b.iter(|| decode_store(&bytes).unwrap());
    });
}

fn bench_decode_many_records(c: &mut Criterion) {
    let mut set = SetBuilder::for_class(FormatClass::UserDefinedProperties);
    for i in 0..500u32 {
        set = set.named(&format!("prop{i}"), ValueType::UInt32, &i.to_le_bytes());
    }
    let bytes = StoreBuilder::new().set(set).build();

    let mut group = c.benchmark_group("decode_many_records");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("named_500", |b| {
        b.iter(|| decode_store(&bytes).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_decode_reference,
    bench_decode_summary,
    bench_decode_many_records
);
criterion_main!(benches);
