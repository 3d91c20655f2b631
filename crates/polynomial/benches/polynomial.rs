// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polystore_polynomial::{Fr, Polynomial};

fn create_test_polynomial(len: usize) -> Polynomial<Fr> {
    (0..len as u64).map(|i| Fr::from(i * 7 + 1)).collect()
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_encode");

    for len in [1 << 10, 1 << 14, 1 << 18] {
        let poly = create_test_polynomial(len);

        group.bench_function(&format!("len_{}", len), |b| {
            b.iter(|| black_box(poly.to_bytes().unwrap()))
        });
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_decode");

    for len in [1 << 10, 1 << 14, 1 << 18] {
        let bytes = create_test_polynomial(len).to_bytes().unwrap();

        group.bench_function(&format!("len_{}", len), |b| {
            b.iter(|| black_box(Polynomial::<Fr>::from_bytes(&bytes, len).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_encode, benchmark_decode);
criterion_main!(benches);
