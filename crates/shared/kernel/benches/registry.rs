use criterion::{Criterion, criterion_group, criterion_main};
use dtc_kernel::prelude::*;
use std::hint::black_box;

#[dtc_derive::msg(package = "dtc.bench.v1")]
pub struct MsgBench {
    pub creator: String,
    pub payload: Vec<u8>,
}

fn registry_benches(c: &mut Criterion) {
    let mut registry = MsgRegistry::new();
    registry.register_module("bench", [MsgDescriptor::of::<MsgBench>()]).unwrap();

    let msg = MsgBench { creator: "dtc1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5z5tpwxq".to_owned(), payload: vec![0u8; 256] };
    let raw = registry.encode(&msg).unwrap();

    c.bench_function("registry/resolve", |b| {
        b.iter(|| registry.resolve(black_box("/dtc.bench.v1.MsgBench")));
    });

    c.bench_function("registry/encode", |b| {
        b.iter(|| registry.encode(black_box(&msg)).unwrap());
    });

    c.bench_function("registry/verify", |b| {
        b.iter(|| registry.verify(black_box(&raw)).unwrap());
    });
}

criterion_group!(benches, registry_benches);
criterion_main!(benches);
