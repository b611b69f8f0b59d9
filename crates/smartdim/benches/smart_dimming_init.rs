//! Criterion benchmarks for smart-dimming table generation.
//!
//! Run: cargo bench -p smartdim --bench smart_dimming_init
//!
//! Results show:
//!   calibration_*  : MTP decode, voltage chain, gray scale, curve tables
//!   gamma_for_*    : one AID table assembly
//!   init_*         : full cache build for every supported level

#![allow(
    clippy::unwrap_used,  // benchmark helpers use unwrap for brevity
    clippy::expect_used,
    missing_docs,         // criterion_group! macro generates undocumented items
)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use smartdim::tables::{s6e3ha2, s6e88a, S6E3HA2_LEVELS, S6E88A_LEVELS};
use smartdim::{AssemblyMode, Calibration, SmartDimContext};

const S6E88A_MTP: [u8; 33] = [
    0x00, 0x02, 0x00, 0x05, 0x01, 0x03, 0x02, 0x81, 0x00, 0x03, 0x84, 0x01, 0x05, 0x00, 0x82,
    0x01, 0x01, 0x83, 0x00, 0x02, 0x00, 0x85, 0x03, 0x01, 0x00, 0x00, 0x02, 0x04, 0x81, 0x00,
    0x01, 0x02, 0x00,
];

fn bench_calibration(c: &mut Criterion) {
    c.bench_function("calibration_s6e88a", |b| {
        b.iter(|| Calibration::new(black_box(&s6e88a::DEFAULT), black_box(&S6E88A_MTP)).unwrap());
    });
}

fn bench_gamma_for(c: &mut Criterion) {
    let cal = Calibration::new(&s6e88a::DEFAULT, &S6E88A_MTP).unwrap();
    c.bench_function("gamma_for_100cd", |b| b.iter(|| cal.gamma_for(black_box(100))));
    c.bench_function("gamma_for_miss", |b| b.iter(|| cal.gamma_for(black_box(18))));
}

fn bench_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("init");
    group.bench_function("init_s6e88a_aid", |b| {
        b.iter(|| {
            SmartDimContext::init(
                &s6e88a::DEFAULT,
                black_box(&S6E88A_MTP),
                &S6E88A_LEVELS,
                AssemblyMode::Aid,
            )
            .unwrap()
        });
    });
    group.bench_function("init_s6e3ha2_aid", |b| {
        b.iter(|| {
            SmartDimContext::init(
                &s6e3ha2::REV_C,
                black_box(&[0u8; 35]),
                &S6E3HA2_LEVELS,
                AssemblyMode::Aid,
            )
            .unwrap()
        });
    });
    group.bench_function("init_s6e88a_pure", |b| {
        b.iter(|| {
            SmartDimContext::init(
                &s6e88a::DEFAULT,
                black_box(&S6E88A_MTP),
                &S6E88A_LEVELS,
                AssemblyMode::Pure,
            )
            .unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_calibration, bench_gamma_for, bench_init);
criterion_main!(benches);
