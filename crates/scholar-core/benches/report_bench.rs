//! # Report Benchmarks
//!
//! Performance benchmarks for scholar-core report generation.
//!
//! Run with: `cargo bench -p scholar-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use scholar_core::{Grade, Roster, find_top_student, render_report};
use std::hint::black_box;

/// Create a roster with N students, each with a handful of grades.
fn create_roster(size: usize) -> Roster {
    let mut roster = Roster::new();
    for i in 0..size {
        let name = format!("student {}", i);
        roster.add(&name).expect("add");
        let student = roster.find_mut(&name).expect("found");
        for g in 0..5 {
            let value = ((i * 7 + g * 13) % 101) as i64;
            student.record(Grade::new(value).expect("in range"));
        }
    }
    roster
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_render_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_report");

    for size in [10, 100, 1000].iter() {
        let roster = create_roster(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| black_box(render_report(roster)));
        });
    }

    group.finish();
}

fn bench_find_top_student(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_top_student");

    for size in [10, 100, 1000].iter() {
        let roster = create_roster(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| black_box(find_top_student(roster)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_report, bench_find_top_student);
criterion_main!(benches);
