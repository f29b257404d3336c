// ─────────────────────────────────────────────────────────────────────
// SCPN QED Scan — Cross-Section Scan Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use qed_physics::bhabha::Bhabha;
use qed_physics::channels::InterferenceTerms;
use qed_physics::scan;
use qed_types::constants::GEV2_TO_NB;
use qed_types::state::{AngularScan, KinematicGrid};
use std::hint::black_box;

fn bench_angular_scan(c: &mut Criterion) {
    let bhabha = Bhabha::new(GEV2_TO_NB);
    let mut group = c.benchmark_group("bhabha_angular");

    for &n in &[1_000usize, 10_000, 100_000] {
        let angles = AngularScan::new(n);
        let label = format!("{n}_angles");
        group.bench_function(&label, |b| {
            b.iter(|| {
                let dsigma = scan::angular(&angles, 196.0, |t, s| bhabha.diff_cross_section(t, s));
                black_box(dsigma[n / 2]);
            })
        });
    }

    group.finish();
}

fn bench_surface(c: &mut Criterion) {
    let bhabha = Bhabha::new(GEV2_TO_NB);
    let mut group = c.benchmark_group("bhabha_surface");

    for &n in &[50usize, 200] {
        let grid = KinematicGrid::new(n, 1.0, 40.0, n);
        let label = format!("{n}x{n}");
        group.bench_function(&label, |b| {
            b.iter(|| {
                let z = scan::surface(&grid, |t, s| bhabha.diff_cross_section(t, s));
                black_box(z[[n / 2, n / 2]]);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_angular_scan, bench_surface);
criterion_main!(benches);
